//! Loader configuration.
//!
//! [`LoaderConfig`] is meant to be embedded in a host application's own
//! configuration file. Every field has a default, so an empty section is valid:
//!
//! ```rust
//! use templater::{Escape, LoaderConfig};
//!
//! let config: LoaderConfig = serde_json::from_str(r#"{
//!     "extensions": ["html"],
//!     "engine": { "auto_escape": "html", "trim_blocks": true }
//! }"#).unwrap();
//!
//! assert_eq!(config.extensions, vec!["html".to_string()]);
//! assert_eq!(config.engine.escape, Escape::Html);
//! ```

use serde::{Deserialize, Serialize};

use crate::engine::EngineOptions;

/// Settings for a [`Loader`](crate::Loader).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    /// Options for the engine namespace of loaded registries.
    pub engine: EngineOptions,

    /// Follow symbolic links while walking.
    pub follow_links: bool,

    /// Extra extensions loaded verbatim, in addition to `tmpl`.
    pub extensions: Vec<String>,
}
