//! Extension-keyed source translators.
//!
//! A [`Translator`] turns the raw text of a file into text the engine can
//! parse. The loader picks one by file extension from a [`Translators`] table,
//! so new source formats only need a new table entry.
//!
//! | Extension | Translator |
//! |-----------|------------|
//! | `tmpl` | [`Identity`] |

use std::collections::HashMap;
use std::fmt;

use crate::error::TranslateError;

/// Extension registered by default, without the leading dot.
pub const TEMPLATE_EXTENSION: &str = "tmpl";

/// Converts raw file text into engine-ready template text.
///
/// Closures with the right signature implement this trait:
///
/// ```rust
/// use templater::{Translators, TranslateError};
///
/// let translators = Translators::default().with("upper", |source: &str| {
///     Ok::<_, TranslateError>(source.to_uppercase())
/// });
/// assert!(translators.contains("upper"));
/// ```
pub trait Translator: Send + Sync {
    /// Translates `source` or explains why it cannot be.
    fn translate(&self, source: &str) -> Result<String, TranslateError>;
}

impl<F> Translator for F
where
    F: Fn(&str) -> Result<String, TranslateError> + Send + Sync,
{
    fn translate(&self, source: &str) -> Result<String, TranslateError> {
        self(source)
    }
}

/// Passes the source through unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl Translator for Identity {
    fn translate(&self, source: &str) -> Result<String, TranslateError> {
        Ok(source.to_string())
    }
}

/// Lookup table from file extension to translator.
///
/// Extensions are stored without the leading dot and matched case-sensitively.
pub struct Translators {
    table: HashMap<String, Box<dyn Translator>>,
}

impl Translators {
    /// Creates a table with no entries.
    pub fn empty() -> Self {
        Self {
            table: HashMap::new(),
        }
    }

    /// Registers `translator` for `extension`, replacing any previous entry.
    ///
    /// A leading dot on `extension` is ignored.
    pub fn insert(&mut self, extension: impl AsRef<str>, translator: impl Translator + 'static) {
        let extension = extension.as_ref().trim_start_matches('.');
        self.table
            .insert(extension.to_string(), Box::new(translator));
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with(mut self, extension: impl AsRef<str>, translator: impl Translator + 'static) -> Self {
        self.insert(extension, translator);
        self
    }

    /// Looks up the translator for `extension`.
    pub fn get(&self, extension: &str) -> Option<&dyn Translator> {
        self.table.get(extension).map(|t| t.as_ref())
    }

    /// Returns true if `extension` has a translator.
    pub fn contains(&self, extension: &str) -> bool {
        self.table.contains_key(extension)
    }

    /// Registered extensions, sorted.
    pub fn extensions(&self) -> Vec<&str> {
        let mut extensions: Vec<&str> = self.table.keys().map(|s| s.as_str()).collect();
        extensions.sort_unstable();
        extensions
    }
}

impl Default for Translators {
    fn default() -> Self {
        Self::empty().with(TEMPLATE_EXTENSION, Identity)
    }
}

impl fmt::Debug for Translators {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Translators")
            .field("extensions", &self.extensions())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_only_tmpl() {
        let translators = Translators::default();
        assert_eq!(translators.extensions(), vec!["tmpl"]);
        assert!(translators.get("tmpl").is_some());
        assert!(translators.get("err").is_none());
    }

    #[test]
    fn test_identity_passes_through() {
        let out = Identity.translate("Hello {{ Name }}").unwrap();
        assert_eq!(out, "Hello {{ Name }}");
    }

    #[test]
    fn test_extension_match_is_case_sensitive() {
        let translators = Translators::default();
        assert!(!translators.contains("TMPL"));
    }

    #[test]
    fn test_insert_strips_leading_dot() {
        let translators = Translators::empty().with(".html", Identity);
        assert!(translators.contains("html"));
        assert!(!translators.contains(".html"));
    }

    #[test]
    fn test_closure_translator() {
        let translators = Translators::empty().with("shout", |source: &str| {
            if source.is_empty() {
                Err(TranslateError::new("empty source"))
            } else {
                Ok(source.to_uppercase())
            }
        });

        let shout = translators.get("shout").unwrap();
        assert_eq!(shout.translate("hi").unwrap(), "HI");
        assert_eq!(shout.translate("").unwrap_err().message(), "empty source");
    }

    #[test]
    fn test_insert_replaces() {
        let mut translators = Translators::default();
        translators.insert("tmpl", |_: &str| Ok::<_, TranslateError>("replaced".to_string()));

        let out = translators.get("tmpl").unwrap().translate("original").unwrap();
        assert_eq!(out, "replaced");
    }
}
