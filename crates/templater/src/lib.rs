//! # Templater - Bulk Template Loading
//!
//! `templater` loads a directory tree of template files into one named
//! [`Registry`] and renders them by name. It is meant for server-side views,
//! where templates are split into folders and share partials.
//!
//! Template syntax and execution come from [MiniJinja](minijinja); this crate
//! only finds the files, names them and keeps them in a shared namespace.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use templater::Registry;
//!
//! // views/hello.tmpl:           Hello {{ Name }}
//! // views/admin/dashboard.tmpl: {% include "partials/nav" %} ...
//! let (views, errors) = Registry::load("./views");
//! for error in &errors {
//!     eprintln!("Layout - {error}");
//! }
//!
//! let mut out = std::io::stdout();
//! views
//!     .render("hello", &serde_json::json!({ "Name": "World" }), &mut out)
//!     .unwrap();
//! ```
//!
//! ## Key Types
//!
//! - [`Loader`]: Walks a directory and fills a registry, collecting per-file errors
//! - [`Registry`]: Shared namespace of parsed templates; lookup and render
//! - [`Translators`]: Extension → [`Translator`] table (`tmpl` → [`Identity`] by default)
//! - [`EngineOptions`] / [`LoaderConfig`]: Engine and loader settings
//! - [`LoadError`] / [`RenderError`]: Load-phase and render-phase failures
//!
//! ## Error Reporting
//!
//! Loading never stops at a bad file. Check the returned list, or hand it to
//! [`log_errors`] / [`write_errors`] if logging is all you need. A registry
//! loaded from a directory without a single valid template answers every
//! lookup with [`RenderError::NotFound`].

pub mod config;
pub mod engine;
pub mod error;
pub mod loader;
pub mod registry;
pub mod report;
pub mod translator;

pub use config::LoaderConfig;
pub use engine::{EngineOptions, Escape, Undefined};
pub use error::{LoadError, RenderError, TranslateError};
pub use loader::{derive_name, file_extension, Loader};
pub use registry::{Registry, Template};
pub use report::{log_errors, write_errors};
pub use translator::{Identity, Translator, Translators, TEMPLATE_EXTENSION};
