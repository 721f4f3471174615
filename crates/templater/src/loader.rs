//! Bulk loading of template directories.
//!
//! A web project usually keeps its views in one folder, split into
//! subfolders per controller, with partials shared between them. The
//! [`Loader`] walks such a folder once and puts every template into a single
//! [`Registry`], so any view can include any other.
//!
//! # Name Derivation
//!
//! Templates are named by their path relative to the root, with the final
//! extension removed and separators written as `/`:
//!
//! | File Path | Template Name |
//! |-----------|---------------|
//! | `views/hello.tmpl` | `"hello"` |
//! | `views/admin/dashboard.tmpl` | `"admin/dashboard"` |
//! | `views/mail/welcome.txt.tmpl` | `"mail/welcome.txt"` |
//!
//! # Per-File Pipeline
//!
//! Each file goes through the same steps, and the first failing step skips the
//! file with a [`LoadError`]:
//!
//! 1. Pick a translator by extension ([`LoadError::NoTranslator`])
//! 2. Derive the template name ([`LoadError::NoExtension`])
//! 3. Read the file ([`LoadError::Io`])
//! 4. Translate the content ([`LoadError::Translate`])
//! 5. Parse it into the registry ([`LoadError::Parse`])
//!
//! A bad file never stops the walk. The caller gets the registry with
//! everything that loaded, plus the errors in walk order, and decides what to
//! do with them.
//!
//! # Example
//!
//! ```rust,ignore
//! use templater::Loader;
//!
//! let (views, errors) = Loader::new().load("./views");
//! if !errors.is_empty() {
//!     templater::log_errors(&errors);
//! }
//! views.render("admin/dashboard", &page, &mut response)?;
//! ```

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, debug_span};
use walkdir::WalkDir;

use crate::config::LoaderConfig;
use crate::engine::EngineOptions;
use crate::error::LoadError;
use crate::registry::Registry;
use crate::translator::{Identity, Translator, Translators};

/// Walks template directories into registries.
#[derive(Debug, Default)]
pub struct Loader {
    translators: Translators,
    options: EngineOptions,
    follow_links: bool,
}

impl Loader {
    /// Creates a loader that recognizes `.tmpl` files only.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a loader from deserialized configuration.
    ///
    /// Extensions listed in the config are registered with the [`Identity`]
    /// translator next to the default `tmpl` entry.
    pub fn from_config(config: &LoaderConfig) -> Self {
        let mut translators = Translators::default();
        for extension in &config.extensions {
            translators.insert(extension, Identity);
        }
        Self {
            translators,
            options: config.engine.clone(),
            follow_links: config.follow_links,
        }
    }

    /// Registers a translator for `extension`.
    pub fn with_translator(
        mut self,
        extension: impl AsRef<str>,
        translator: impl Translator + 'static,
    ) -> Self {
        self.translators.insert(extension, translator);
        self
    }

    /// Replaces the whole translator table.
    pub fn with_translators(mut self, translators: Translators) -> Self {
        self.translators = translators;
        self
    }

    /// Sets the engine options used for registries created by [`load`](Self::load).
    pub fn with_engine_options(mut self, options: EngineOptions) -> Self {
        self.options = options;
        self
    }

    /// Follow symbolic links while walking (off by default).
    pub fn follow_links(mut self, yes: bool) -> Self {
        self.follow_links = yes;
        self
    }

    /// The translator table used for extension lookup.
    pub fn translators(&self) -> &Translators {
        &self.translators
    }

    /// Loads every recognized file under `root` into a new registry.
    ///
    /// Returns the registry with all templates that loaded, and one
    /// [`LoadError`] per problem, in walk order. An empty error list means a
    /// clean load. A missing or unreadable `root` shows up as a
    /// [`LoadError::Io`] next to an empty registry.
    pub fn load(&self, root: impl AsRef<Path>) -> (Registry, Vec<LoadError>) {
        let mut registry = Registry::with_options(&self.options);
        let errors = self.load_into(&mut registry, root);
        (registry, errors)
    }

    /// Loads every recognized file under `root` into an existing registry.
    ///
    /// Lets several roots share one namespace. Names derived here replace
    /// templates of the same name already in `registry`; only clashes within
    /// this walk are reported as [`LoadError::Duplicate`]. A clashing file that
    /// fails to parse still replaces the earlier template, leaving the name
    /// empty, and is reported with both a `Duplicate` and a `Parse` error.
    pub fn load_into(&self, registry: &mut Registry, root: impl AsRef<Path>) -> Vec<LoadError> {
        let root = root.as_ref();
        let _span = debug_span!("load_templates", root = %root.display()).entered();

        let mut errors = Vec::new();
        let mut seen: HashMap<String, PathBuf> = HashMap::new();

        let walker = WalkDir::new(root)
            .follow_links(self.follow_links)
            .sort_by_file_name();

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    errors.push(walk_error(err, root));
                    continue;
                }
            };
            if entry.file_type().is_dir() {
                continue;
            }

            let path = entry.path();
            let (name, text) = match self.read_file(root, path) {
                Ok(parts) => parts,
                Err(err) => {
                    errors.push(err);
                    continue;
                }
            };

            if let Some(earlier) = seen.get(&name) {
                debug!(
                    name = %name,
                    earlier = %earlier.display(),
                    path = %path.display(),
                    "template name defined twice"
                );
                errors.push(LoadError::Duplicate {
                    name: name.clone(),
                    path: path.to_path_buf(),
                });
            }

            // A failed parse leaves the name without a template, so the
            // next file to claim it replaces nothing.
            match registry.create(name.clone(), text) {
                Ok(()) => {
                    debug!(name = %name, path = %path.display(), "loaded template");
                    seen.insert(name, path.to_path_buf());
                }
                Err(err) => {
                    seen.remove(&name);
                    errors.push(err);
                }
            }
        }

        debug!(
            templates = registry.len(),
            errors = errors.len(),
            "template load finished"
        );
        errors
    }

    /// Runs one file through the pipeline up to parsing, returning its
    /// template name and translated text.
    fn read_file(&self, root: &Path, path: &Path) -> Result<(String, String), LoadError> {
        let extension = file_extension(path).unwrap_or_default();
        let translator = self
            .translators
            .get(&extension)
            .ok_or_else(|| LoadError::NoTranslator {
                extension: extension.clone(),
                path: path.to_path_buf(),
            })?;

        let name = derive_name(root, path).ok_or_else(|| LoadError::NoExtension {
            path: path.to_path_buf(),
        })?;

        let raw = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let text = translator
            .translate(&raw)
            .map_err(|source| LoadError::Translate {
                path: path.to_path_buf(),
                source,
            })?;

        Ok((name, text))
    }
}

/// Returns the text after the final `.` of the file's base name.
///
/// ```rust
/// use std::path::Path;
/// use templater::file_extension;
///
/// assert_eq!(file_extension(Path::new("views/hello.tmpl")).as_deref(), Some("tmpl"));
/// assert_eq!(file_extension(Path::new("views/mail.txt.tmpl")).as_deref(), Some("tmpl"));
/// assert_eq!(file_extension(Path::new("views.d/README")), None);
/// ```
pub fn file_extension(path: &Path) -> Option<String> {
    let base = path.file_name()?.to_string_lossy();
    base.rsplit_once('.').map(|(_, ext)| ext.to_string())
}

/// Derives the template name of `path` relative to `root`.
///
/// Returns `None` when `path` is not under `root`, or when nothing is left of
/// the base name once its extension is stripped (`.tmpl`, `README`).
///
/// ```rust
/// use std::path::Path;
/// use templater::derive_name;
///
/// let root = Path::new("/srv/views");
/// assert_eq!(
///     derive_name(root, Path::new("/srv/views/admin/dashboard.tmpl")).as_deref(),
///     Some("admin/dashboard"),
/// );
/// assert_eq!(derive_name(root, Path::new("/srv/views/README")), None);
/// ```
pub fn derive_name(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    let mut parts: Vec<String> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();

    let base = parts.pop()?;
    let (stem, _) = base.rsplit_once('.')?;
    if stem.is_empty() {
        return None;
    }
    parts.push(stem.to_string());
    Some(parts.join("/"))
}

fn walk_error(err: walkdir::Error, root: &Path) -> LoadError {
    let path = err.path().unwrap_or(root).to_path_buf();
    let message = err.to_string();
    let source = err
        .into_io_error()
        .unwrap_or_else(|| io::Error::other(message));
    LoadError::Io { path, source }
}
