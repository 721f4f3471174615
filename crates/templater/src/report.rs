//! Presenting load errors.
//!
//! [`Loader::load`](crate::Loader::load) always hands back structured errors.
//! Applications that would rather log them than inspect them can pick one of
//! these helpers.

use std::io::{self, Write};

use tracing::warn;

use crate::error::LoadError;

/// Emits one `warn` event per error.
pub fn log_errors(errors: &[LoadError]) {
    for error in errors {
        match error.template_name() {
            Some(name) => warn!(template = name, "{error}"),
            None => warn!("{error}"),
        }
    }
}

/// Writes one line per error to `out`.
pub fn write_errors<W: Write>(errors: &[LoadError], mut out: W) -> io::Result<()> {
    for error in errors {
        writeln!(out, "{error}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn sample_errors() -> Vec<LoadError> {
        vec![
            LoadError::NoTranslator {
                extension: "err".to_string(),
                path: PathBuf::from("views/a.err"),
            },
            LoadError::Parse {
                name: "b".to_string(),
                source: minijinja::Error::new(minijinja::ErrorKind::SyntaxError, "unexpected end"),
            },
        ]
    }

    #[test]
    fn test_write_errors_one_line_each() {
        let mut out = Vec::new();
        write_errors(&sample_errors(), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("a.err"));
        assert!(lines[1].contains("\"b\""));
        assert!(lines[1].contains("unexpected end"));
    }

    #[test]
    fn test_write_errors_empty() {
        let mut out = Vec::new();
        write_errors(&[], &mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_log_errors_without_subscriber() {
        log_errors(&sample_errors());
    }
}
