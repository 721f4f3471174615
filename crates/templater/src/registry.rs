//! Named template registry.
//!
//! A [`Registry`] holds every template of an application in one engine
//! namespace. Because the namespace is shared, any template can pull in any
//! other by its derived name:
//!
//! ```jinja
//! {% extends "layouts/base" %}
//! {% block body %}{% include "partials/user_card" %}{% endblock %}
//! ```
//!
//! # Lifecycle
//!
//! Registries start empty, get filled by [`Loader::load`](crate::Loader::load)
//! (or by hand through [`Registry::create`]) and are then only read from.
//! Adding templates takes `&mut self`; lookups and rendering take `&self`, so a
//! loaded registry can be shared across threads (for example behind an `Arc`)
//! and rendered from concurrently.
//!
//! # Example
//!
//! ```rust
//! use templater::Registry;
//!
//! let mut registry = Registry::new();
//! registry.create("hello", "Hello {{ Name }}").unwrap();
//!
//! let mut out = Vec::new();
//! registry
//!     .render("hello", &serde_json::json!({ "Name": "World" }), &mut out)
//!     .unwrap();
//! assert_eq!(out, b"Hello World");
//! ```

use std::collections::BTreeSet;
use std::fmt;
use std::io::Write;
use std::path::Path;

use minijinja::{Environment, Value};
use serde::Serialize;

use crate::engine::EngineOptions;
use crate::error::{LoadError, RenderError};
use crate::loader::Loader;

/// Shared namespace of parsed templates.
pub struct Registry {
    env: Environment<'static>,
    names: BTreeSet<String>,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("names", &self.names)
            .finish()
    }
}

impl Registry {
    /// Creates an empty registry with default [`EngineOptions`].
    pub fn new() -> Self {
        Self::with_options(&EngineOptions::default())
    }

    /// Creates an empty registry whose namespace uses `options`.
    pub fn with_options(options: &EngineOptions) -> Self {
        Self {
            env: options.build_environment(),
            names: BTreeSet::new(),
        }
    }

    /// Loads every recognized file under `root` with a default [`Loader`].
    ///
    /// See [`Loader::load`] for how names are derived and which errors can be
    /// reported.
    pub fn load(root: impl AsRef<Path>) -> (Self, Vec<LoadError>) {
        Loader::new().load(root)
    }

    /// Parses `text` and stores it under `name`.
    ///
    /// An existing template with the same name is replaced. If the engine
    /// rejects `text`, the name is left without a template, even if it had one
    /// before.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Parse`] when `text` is not valid template syntax.
    pub fn create(
        &mut self,
        name: impl Into<String>,
        text: impl Into<String>,
    ) -> Result<(), LoadError> {
        let name = name.into();
        match self.env.add_template_owned(name.clone(), text.into()) {
            Ok(()) => {
                self.names.insert(name);
                Ok(())
            }
            Err(source) => {
                self.env.remove_template(&name);
                self.names.remove(&name);
                Err(LoadError::Parse { name, source })
            }
        }
    }

    /// Drops the template stored under `name`.
    ///
    /// Returns true if there was one.
    pub fn remove(&mut self, name: &str) -> bool {
        self.env.remove_template(name);
        self.names.remove(name)
    }

    /// Looks up a template by name.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::NotFound`] if no template was created under `name`.
    pub fn get(&self, name: &str) -> Result<Template<'_>, RenderError> {
        if !self.names.contains(name) {
            return Err(RenderError::NotFound {
                name: name.to_string(),
            });
        }
        let inner = self.env.get_template(name).map_err(|_| RenderError::NotFound {
            name: name.to_string(),
        })?;
        Ok(Template { inner })
    }

    /// Returns true if a template exists under `name`.
    ///
    /// A name whose file failed to parse reads the same as one never loaded.
    pub fn available(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Renders the template `name` with `data`, writing into `out`.
    ///
    /// Nothing is written when the template does not exist. When execution
    /// fails part way, whatever was already written stays in `out`.
    ///
    /// # Errors
    ///
    /// - [`RenderError::NotFound`] if there is no template called `name`
    /// - [`RenderError::Execution`] if the engine fails against `data`
    pub fn render<S, W>(&self, name: &str, data: &S, out: W) -> Result<(), RenderError>
    where
        S: Serialize + ?Sized,
        W: Write,
    {
        self.get(name)?.execute(data, out)
    }

    /// Renders the template `name` with `data` into a new string.
    pub fn render_to_string<S>(&self, name: &str, data: &S) -> Result<String, RenderError>
    where
        S: Serialize + ?Sized,
    {
        self.get(name)?.execute_to_string(data)
    }

    /// Iterates over template names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(|s| s.as_str())
    }

    /// Returns the number of templates.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if the registry holds no templates.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Read access to the underlying engine environment.
    pub fn environment(&self) -> &Environment<'static> {
        &self.env
    }

    /// Mutable access to the underlying engine environment.
    ///
    /// Use this to register filters, functions or globals shared by every
    /// template. Templates added or removed directly through the environment
    /// are not tracked by [`names`](Self::names) or
    /// [`available`](Self::available); use [`create`](Self::create) and
    /// [`remove`](Self::remove) for that.
    pub fn environment_mut(&mut self) -> &mut Environment<'static> {
        &mut self.env
    }
}

/// A parsed template borrowed from a [`Registry`].
pub struct Template<'r> {
    inner: minijinja::Template<'r, 'r>,
}

impl fmt::Debug for Template<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Template")
            .field("name", &self.name())
            .finish()
    }
}

impl Template<'_> {
    /// The name the template was registered under.
    pub fn name(&self) -> &str {
        self.inner.name()
    }

    /// The template text as handed to the engine.
    pub fn source(&self) -> &str {
        self.inner.source()
    }

    /// Executes the template against `data`, streaming output into `out`.
    pub fn execute<S, W>(&self, data: &S, out: W) -> Result<(), RenderError>
    where
        S: Serialize + ?Sized,
        W: Write,
    {
        self.inner
            .render_captured_to(Value::from_serialize(data), out)
            .map(|_| ())
            .map_err(|source| self.execution_error(source))
    }

    /// Executes the template against `data` and returns the output.
    pub fn execute_to_string<S>(&self, data: &S) -> Result<String, RenderError>
    where
        S: Serialize + ?Sized,
    {
        self.inner
            .render(Value::from_serialize(data))
            .map_err(|source| self.execution_error(source))
    }

    fn execution_error(&self, source: minijinja::Error) -> RenderError {
        RenderError::Execution {
            name: self.name().to_string(),
            source,
        }
    }
}
