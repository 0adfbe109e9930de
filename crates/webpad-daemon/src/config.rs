use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Daemon settings, read from `webpad.toml` when present, with CLI flags
/// taking precedence over the file.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DaemonConfig {
    /// Where the HTTP API listens, e.g. 127.0.0.1:8660.
    #[serde(default = "default_listen")]
    pub listen: String,
    /// Directory holding the SQLite database. `~` is expanded.
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    /// Name of the durable slot the project is saved to.
    #[serde(default = "default_slot")]
    pub slot: String,
}

fn default_listen() -> String {
    "127.0.0.1:8660".to_string()
}

fn default_data_dir() -> String {
    "~/.webpad".to_string()
}

fn default_slot() -> String {
    "web".to_string()
}

impl Default for DaemonConfig {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            data_dir: default_data_dir(),
            slot: default_slot(),
        }
    }
}

impl DaemonConfig {
    pub fn load_from(path: &Path) -> Result<Self> {
        let s = std::fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
        let cfg: DaemonConfig = toml::from_str(&s).with_context(|| "parse webpad.toml")?;
        Ok(cfg)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).ok();
        }
        let s = toml::to_string_pretty(self).with_context(|| "serialize toml")?;
        std::fs::write(path, s).with_context(|| format!("write {}", path.display()))?;
        Ok(())
    }

    pub fn data_dir_path(&self) -> PathBuf {
        PathBuf::from(shellexpand::tilde(&self.data_dir).to_string())
    }

    pub fn db_path(&self) -> PathBuf {
        self.data_dir_path().join("webpad.db")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_missing_keys() {
        let cfg: DaemonConfig = toml::from_str("listen = \"0.0.0.0:9000\"").unwrap();
        assert_eq!(cfg.listen, "0.0.0.0:9000");
        assert_eq!(cfg.slot, "web");
        assert_eq!(cfg.data_dir, "~/.webpad");
    }

    #[test]
    fn saves_and_reloads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("webpad.toml");

        let cfg = DaemonConfig {
            listen: "127.0.0.1:1234".into(),
            data_dir: "/tmp/webpad-test".into(),
            slot: "scratch".into(),
        };
        cfg.save_to(&path).unwrap();
        let back = DaemonConfig::load_from(&path).unwrap();
        assert_eq!(back.listen, cfg.listen);
        assert_eq!(back.data_dir, cfg.data_dir);
        assert_eq!(back.slot, cfg.slot);
        assert_eq!(back.db_path(), PathBuf::from("/tmp/webpad-test/webpad.db"));
    }
}
