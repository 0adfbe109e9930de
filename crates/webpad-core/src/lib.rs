#![forbid(unsafe_code)]

//! Pure core of the webpad playground: snapshot model, document
//! compositor, live workbench, and the activity feed. No I/O here; the
//! daemon crate is the imperative shell.

pub mod activity;
pub mod compose;
pub mod error;
pub mod model;
pub mod util;
pub mod workbench;

pub use activity::*;
pub use compose::*;
pub use error::*;
pub use model::*;
pub use util::*;
pub use workbench::*;
