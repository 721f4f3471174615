//! Error types for loading and rendering.
//!
//! Loading and rendering fail in different ways, so they get different types:
//!
//! - [`LoadError`]: one per file that could not be turned into a template.
//!   Never fatal; [`Loader::load`](crate::Loader::load) collects them.
//! - [`RenderError`]: returned from a single render call.
//! - [`TranslateError`]: returned by a [`Translator`](crate::Translator).

use std::path::PathBuf;

use thiserror::Error;

/// A translator rejected the raw content of a file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct TranslateError {
    message: String,
}

impl TranslateError {
    /// Creates a translation error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The message reported by the translator.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// A single file that was skipped (or only partially accepted) during a load.
#[derive(Debug, Error)]
pub enum LoadError {
    /// No translator is registered for the file's extension.
    #[error("no translator found for {extension:?} file: {}", .path.display())]
    NoTranslator { extension: String, path: PathBuf },

    /// The file's relative name has no extension to strip.
    #[error("no extension found: {}", .path.display())]
    NoExtension { path: PathBuf },

    /// The file (or a directory on the way to it) could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The translator rejected the file's content.
    #[error("failed to translate {}: {source}", .path.display())]
    Translate {
        path: PathBuf,
        #[source]
        source: TranslateError,
    },

    /// The engine rejected the translated text as template syntax.
    #[error("template {name:?}: {source}")]
    Parse {
        name: String,
        #[source]
        source: minijinja::Error,
    },

    /// Another file in the same load already produced this name.
    ///
    /// The file at `path` replaced the earlier template. If that file also
    /// failed to parse, a [`LoadError::Parse`] follows and the name is left
    /// without a template.
    #[error("template {name:?} defined more than once, replaced by {}", .path.display())]
    Duplicate { name: String, path: PathBuf },
}

impl LoadError {
    /// The template name this error concerns, when one was derived.
    pub fn template_name(&self) -> Option<&str> {
        match self {
            LoadError::Parse { name, .. } | LoadError::Duplicate { name, .. } => Some(name),
            _ => None,
        }
    }
}

/// Failure to render a named template.
#[derive(Debug, Error)]
pub enum RenderError {
    /// No template was ever successfully created under this name.
    #[error("could not find template: {name}")]
    NotFound { name: String },

    /// The engine failed while executing the template.
    ///
    /// Output written before the failure stays in the sink.
    #[error("failed to render {name:?}: {source}")]
    Execution {
        name: String,
        #[source]
        source: minijinja::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_not_found_display_includes_name() {
        let err = RenderError::NotFound {
            name: "missing".to_string(),
        };
        assert_eq!(err.to_string(), "could not find template: missing");
    }

    #[test]
    fn test_no_translator_display() {
        let err = LoadError::NoTranslator {
            extension: "err".to_string(),
            path: PathBuf::from("/views/x.err"),
        };
        let display = err.to_string();
        assert!(display.contains("\"err\""));
        assert!(display.contains("/views/x.err"));
    }

    #[test]
    fn test_io_error_keeps_source() {
        let err = LoadError::Io {
            path: PathBuf::from("/views/locked.tmpl"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("locked.tmpl"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_template_name() {
        let parse = LoadError::Parse {
            name: "b".to_string(),
            source: minijinja::Error::new(minijinja::ErrorKind::SyntaxError, "unclosed"),
        };
        assert_eq!(parse.template_name(), Some("b"));

        let io = LoadError::NoExtension {
            path: PathBuf::from("README"),
        };
        assert_eq!(io.template_name(), None);
    }

    #[test]
    fn test_translate_error_message() {
        let err = TranslateError::new("bad front matter");
        assert_eq!(err.message(), "bad front matter");
        assert_eq!(err.to_string(), "bad front matter");
    }
}
