//! Engine namespace configuration.
//!
//! Every [`Registry`](crate::Registry) owns one MiniJinja [`Environment`], so
//! all of its templates can include each other by name. [`EngineOptions`]
//! decides how that environment treats undefined values, escaping and
//! whitespace.

use minijinja::{AutoEscape, Environment, UndefinedBehavior};
use serde::{Deserialize, Serialize};

/// What happens when a template touches a value the data does not have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Undefined {
    /// Missing values render as empty.
    Lenient,
    /// Like `Lenient`, and attribute access on a missing value is allowed.
    Chainable,
    /// Printing or iterating a missing value is an error; `{% if %}` tests are not.
    #[default]
    SemiStrict,
    /// Any use of a missing value is an error.
    Strict,
}

impl From<Undefined> for UndefinedBehavior {
    fn from(value: Undefined) -> Self {
        match value {
            Undefined::Lenient => UndefinedBehavior::Lenient,
            Undefined::Chainable => UndefinedBehavior::Chainable,
            Undefined::SemiStrict => UndefinedBehavior::SemiStrict,
            Undefined::Strict => UndefinedBehavior::Strict,
        }
    }
}

/// Output escaping applied to every template in the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Escape {
    /// Values are written verbatim.
    None,
    /// Values are HTML-escaped unless marked safe.
    #[default]
    Html,
}

/// Settings for the engine namespace shared by a registry.
///
/// # Example
///
/// ```rust
/// use templater::{EngineOptions, Escape, Undefined};
///
/// let options = EngineOptions::default()
///     .with_escape(Escape::None)
///     .with_undefined(Undefined::Strict)
///     .with_trim_blocks(true);
/// assert_eq!(options.escape, Escape::None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineOptions {
    /// How missing values are treated.
    pub undefined: Undefined,
    /// Escaping applied to printed values.
    #[serde(rename = "auto_escape")]
    pub escape: Escape,
    /// Drop the first newline after a block tag.
    pub trim_blocks: bool,
    /// Strip leading whitespace before a block tag.
    pub lstrip_blocks: bool,
    /// Keep a single trailing newline at the end of a template.
    pub keep_trailing_newline: bool,
}

impl EngineOptions {
    /// Sets how missing values are treated.
    pub fn with_undefined(mut self, undefined: Undefined) -> Self {
        self.undefined = undefined;
        self
    }

    /// Sets the output escaping.
    pub fn with_escape(mut self, escape: Escape) -> Self {
        self.escape = escape;
        self
    }

    /// Drop the first newline after block tags.
    pub fn with_trim_blocks(mut self, yes: bool) -> Self {
        self.trim_blocks = yes;
        self
    }

    /// Strip whitespace before block tags.
    pub fn with_lstrip_blocks(mut self, yes: bool) -> Self {
        self.lstrip_blocks = yes;
        self
    }

    /// Keep the final newline of each template.
    pub fn with_keep_trailing_newline(mut self, yes: bool) -> Self {
        self.keep_trailing_newline = yes;
        self
    }

    /// Builds an empty environment configured with these options.
    pub(crate) fn build_environment(&self) -> Environment<'static> {
        let mut env = Environment::new();
        env.set_undefined_behavior(self.undefined.into());
        env.set_trim_blocks(self.trim_blocks);
        env.set_lstrip_blocks(self.lstrip_blocks);
        env.set_keep_trailing_newline(self.keep_trailing_newline);

        // Derived names carry no extension, so the engine's name-based
        // escaping would never kick in.
        match self.escape {
            Escape::None => env.set_auto_escape_callback(|_| AutoEscape::None),
            Escape::Html => env.set_auto_escape_callback(|_| AutoEscape::Html),
        }
        env
    }
}
