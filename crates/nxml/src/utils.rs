//! File helpers and whitespace canonicalization

use std::fs;
use std::path::Path;

use tracing::{debug, error};

use crate::error::{Error, Result};

/// Drop carriage returns, line feeds and tabs, then collapse each run of the
/// remaining whitespace into one space
pub fn canonicalize_whitespace(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut in_run = false;
    for c in input.chars().filter(|c| !matches!(c, '\r' | '\n' | '\t')) {
        if c.is_whitespace() {
            if !in_run {
                output.push(' ');
            }
            in_run = true;
        } else {
            output.push(c);
            in_run = false;
        }
    }
    output
}

/// Read a whole file as text
pub fn load_file_as_string(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    debug!(path = %path.display(), "reading file");
    fs::read_to_string(path).map_err(|e| {
        error!(path = %path.display(), "failed to read file: {e}");
        Error::io(path.display().to_string(), &e)
    })
}

/// Write text to a file, replacing its contents
pub fn save_string_to_file(path: impl AsRef<Path>, content: &str) -> Result<()> {
    let path = path.as_ref();
    debug!(path = %path.display(), bytes = content.len(), "writing file");
    fs::write(path, content).map_err(|e| {
        error!(path = %path.display(), "failed to write file: {e}");
        Error::io(path.display().to_string(), &e)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_canonicalize_removes_line_breaks_and_tabs() {
        assert_eq!(canonicalize_whitespace("<a>\r\n\t<b>1</b>\n</a>"), "<a><b>1</b></a>");
    }

    #[test]
    fn test_canonicalize_collapses_spaces() {
        assert_eq!(canonicalize_whitespace("a   b \u{a0} c"), "a b c");
        assert_eq!(canonicalize_whitespace("  lead"), " lead");
    }

    #[test]
    fn test_canonicalize_joins_across_removed_breaks() {
        assert_eq!(canonicalize_whitespace("a \n b"), "a b");
        assert_eq!(canonicalize_whitespace("a\nb"), "ab");
    }

    #[test]
    fn test_canonicalize_idempotent() {
        let once = canonicalize_whitespace(" x \t\t y\r\n  z ");
        assert_eq!(canonicalize_whitespace(&once), once);
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_file_as_string("definitely/not/here.xml").err();
        assert!(matches!(
            err.as_ref().map(Error::kind),
            Some(ErrorKind::Io { .. })
        ));
    }

    #[test]
    fn test_save_then_load() -> Result<()> {
        let path = std::env::temp_dir().join(format!("nxml-utils-{}.xml", std::process::id()));
        save_string_to_file(&path, "<a>1</a>")?;
        let content = load_file_as_string(&path)?;
        assert_eq!(content, "<a>1</a>");
        let _ = std::fs::remove_file(&path);
        Ok(())
    }
}
