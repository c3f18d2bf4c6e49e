//! Adapter registry: adapter type name to factory
//!
//! A registry is populated once at startup and then shared (usually behind an
//! `Arc`) by every logger that attaches adapters. Registration is
//! at-most-once per name.

use super::{
    adapter::Adapter,
    error::{LoggerError, Result},
};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Zero-argument constructor for a fresh, uninitialized adapter.
pub type AdapterFactory = Arc<dyn Fn() -> Box<dyn Adapter> + Send + Sync>;

#[derive(Default, Clone)]
pub struct Registry {
    factories: HashMap<String, AdapterFactory>,
}

impl Registry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding `console`, `file` and `network`.
    ///
    /// `memory` is left out: its sink is only reachable through
    /// [`MemoryAdapter::factory_with_sink`](crate::adapters::MemoryAdapter::factory_with_sink).
    pub fn with_builtin_adapters() -> Self {
        let mut registry = Self::new();
        crate::adapters::register_builtin(&mut registry);
        registry
    }

    /// Register `factory` under `name`.
    ///
    /// # Errors
    ///
    /// `DuplicateName` if the name is taken, `InvalidConfiguration` for an empty name.
    /// Neither is recoverable in a well-formed program; wrap with
    /// [`strict::exit_on_error`](super::error::strict::exit_on_error) to abort instead.
    pub fn register(&mut self, name: impl Into<String>, factory: AdapterFactory) -> Result<()> {
        let name = name.into();
        if name.is_empty() {
            return Err(LoggerError::config("registry", "adapter name must not be empty"));
        }
        if self.factories.contains_key(&name) {
            return Err(LoggerError::duplicate_name(name));
        }
        self.factories.insert(name, factory);
        Ok(())
    }

    pub fn lookup(&self, name: &str) -> Option<AdapterFactory> {
        self.factories.get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Build a fresh adapter for `name`.
    pub fn create(&self, name: &str) -> Result<Box<dyn Adapter>> {
        let factory = self
            .factories
            .get(name)
            .ok_or_else(|| LoggerError::unknown_adapter(name))?;
        Ok(factory())
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry").field("adapters", &self.names()).finish()
    }
}
