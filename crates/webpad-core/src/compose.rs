use crate::model::ProjectSnapshot;

/// Document served by the preview surface before anything has been
/// rendered. The `about:blank` of the playground.
pub const BLANK_DOCUMENT: &str = "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n</head>\n<body>\n</body>\n</html>\n";

/// Compose one executable HTML document from a snapshot.
///
/// Pure and total: any input, including all-empty buffers, yields a
/// well-formed document, and identical inputs yield byte-identical text.
/// Style and markup are inserted verbatim. They are trusted author
/// content, not escaped user input, so no sanitization happens here.
///
/// The script block wraps the script text in a try/catch so a throwing
/// script is reported to the console instead of breaking the rest of the
/// document or escaping to the embedding page. With `include_tests` set
/// and a non-blank test buffer, the test text is appended after the script
/// inside the same try block, so tests run in the script's scope and
/// observe its declarations.
pub fn compose(snapshot: &ProjectSnapshot, include_tests: bool) -> String {
    let mut doc = String::new();
    doc.push_str("<!DOCTYPE html>\n");
    doc.push_str("<html lang=\"en\">\n");
    doc.push_str("<head>\n");
    doc.push_str("<meta charset=\"utf-8\">\n");
    doc.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
    doc.push_str("<style>\n");
    doc.push_str(&snapshot.css);
    doc.push_str("\n</style>\n");
    doc.push_str("</head>\n");
    doc.push_str("<body>\n");
    doc.push_str(&snapshot.html);
    doc.push_str("\n<script>\n");
    doc.push_str("try {\n");
    doc.push_str(&snapshot.js);
    if include_tests && !snapshot.test.trim().is_empty() {
        doc.push_str("\n/* tests */\n");
        doc.push_str(&snapshot.test);
    }
    doc.push_str("\n} catch (e) {\n");
    doc.push_str("  console.error(e);\n");
    doc.push_str("}\n");
    doc.push_str("</script>\n");
    doc.push_str("</body>\n");
    doc.push_str("</html>\n");
    doc
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ProjectSnapshot {
        ProjectSnapshot {
            html: "<p>hi</p>".into(),
            css: "p { color: red }".into(),
            js: "document.querySelector('p').textContent = 'hello';".into(),
            test: "console.assert(document.querySelector('p'))".into(),
            ..Default::default()
        }
    }

    #[test]
    fn deterministic_for_identical_inputs() {
        let s = sample();
        assert_eq!(compose(&s, false), compose(&s, false));
        assert_eq!(compose(&s, true), compose(&s, true));
    }

    #[test]
    fn buffers_appear_verbatim() {
        let s = sample();
        let doc = compose(&s, false);
        assert!(doc.contains("<p>hi</p>"));
        assert!(doc.contains("p { color: red }"));
        assert!(doc.contains("document.querySelector('p').textContent = 'hello';"));
    }

    #[test]
    fn tests_included_only_when_requested_and_nonblank() {
        let s = sample();
        assert!(compose(&s, true).contains("console.assert"));
        assert!(!compose(&s, false).contains("console.assert"));

        let blank = ProjectSnapshot {
            test: "   \n\t ".into(),
            ..sample()
        };
        assert!(!compose(&blank, true).contains("/* tests */"));

        let empty = ProjectSnapshot {
            test: String::new(),
            ..sample()
        };
        assert!(!compose(&empty, true).contains("/* tests */"));
    }

    #[test]
    fn tests_run_in_the_script_scope() {
        // The test text must land inside the same try block as the script,
        // after it, separated by a line break.
        let s = sample();
        let doc = compose(&s, true);
        let try_open = doc.find("try {").unwrap();
        let script_at = doc.find("textContent = 'hello';").unwrap();
        let marker_at = doc.find("\n/* tests */\n").unwrap();
        let test_at = doc.find("console.assert").unwrap();
        let catch_at = doc.find("} catch (e)").unwrap();
        assert!(try_open < script_at);
        assert!(script_at < marker_at);
        assert!(marker_at < test_at);
        assert!(test_at < catch_at);
    }

    #[test]
    fn throwing_script_stays_inside_the_catch() {
        let s = ProjectSnapshot {
            js: "throw new Error('boom')".into(),
            ..Default::default()
        };
        let doc = compose(&s, false);
        let throw_at = doc.find("throw new Error('boom')").unwrap();
        let catch_at = doc.find("} catch (e)").unwrap();
        assert!(throw_at < catch_at);
        assert!(doc.contains("console.error(e);"));
    }

    #[test]
    fn empty_snapshot_composes_well_formed_shell() {
        let doc = compose(&ProjectSnapshot::default(), false);
        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains("<style>"));
        assert!(doc.contains("</style>"));
        assert!(doc.contains("<script>"));
        assert!(doc.contains("</script>"));
        assert!(doc.ends_with("</html>\n"));
        // head closes before body opens
        assert!(doc.find("</head>").unwrap() < doc.find("<body>").unwrap());
    }

    #[test]
    fn exact_output_for_small_snapshot() {
        let s = ProjectSnapshot {
            html: "<b>x</b>".into(),
            css: "b{}".into(),
            js: "1;".into(),
            ..Default::default()
        };
        let expected = "<!DOCTYPE html>\n\
                        <html lang=\"en\">\n\
                        <head>\n\
                        <meta charset=\"utf-8\">\n\
                        <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n\
                        <style>\nb{}\n</style>\n\
                        </head>\n\
                        <body>\n\
                        <b>x</b>\n\
                        <script>\n\
                        try {\n1;\n} catch (e) {\n  console.error(e);\n}\n\
                        </script>\n\
                        </body>\n\
                        </html>\n";
        assert_eq!(compose(&s, false), expected);
    }
}
