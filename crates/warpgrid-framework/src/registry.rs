//! Plugin registry — plugin name → factory.
//!
//! Registries are filled once at startup and only read afterwards, so no
//! locking is involved; share a finished registry by reference (or through
//! a `static LazyLock`).

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::config::ProfileConfig;
use crate::error::{FrameworkError, FrameworkResult};
use crate::plugin::{FilterPlugin, FrameworkHandle, PluginArgs, PluginFactory};

/// Maps plugin names to their factories.
#[derive(Clone, Default)]
pub struct Registry {
    factories: HashMap<String, PluginFactory>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a factory under `name`. Fails if the name is taken.
    pub fn register(&mut self, name: &str, factory: PluginFactory) -> FrameworkResult<()> {
        if self.factories.contains_key(name) {
            return Err(FrameworkError::DuplicatePlugin(name.to_string()));
        }
        self.factories.insert(name.to_string(), factory);
        debug!(plugin = name, "plugin registered");
        Ok(())
    }

    /// Move every entry of `other` into this registry.
    ///
    /// Fails on the first name present in both; entries merged before the
    /// conflict are kept.
    pub fn merge(&mut self, other: Registry) -> FrameworkResult<()> {
        let mut entries: Vec<_> = other.factories.into_iter().collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        for (name, factory) in entries {
            self.register(&name, factory)?;
        }
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<PluginFactory> {
        self.factories.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Registered plugin names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }

    /// Construct the plugin registered under `name`.
    pub fn instantiate(
        &self,
        name: &str,
        args: &PluginArgs,
        handle: &FrameworkHandle,
    ) -> FrameworkResult<Arc<dyn FilterPlugin>> {
        let factory = self
            .get(name)
            .ok_or_else(|| FrameworkError::UnknownPlugin(name.to_string()))?;
        let plugin = factory(args, handle)?;
        debug!(
            plugin = name,
            profile = handle.profile_name(),
            "plugin instantiated"
        );
        Ok(plugin)
    }

    /// Construct every filter enabled in `profile`, in profile order.
    pub fn build_filters(
        &self,
        profile: &ProfileConfig,
    ) -> FrameworkResult<Vec<Arc<dyn FilterPlugin>>> {
        let handle = profile.handle();
        profile
            .filters
            .iter()
            .map(|entry| self.instantiate(&entry.name, &entry.plugin_args(), &handle))
            .collect()
    }
}

impl<'a> FromIterator<(&'a str, PluginFactory)> for Registry {
    /// Later entries replace earlier ones with the same name.
    fn from_iter<I: IntoIterator<Item = (&'a str, PluginFactory)>>(iter: I) -> Self {
        Self {
            factories: iter
                .into_iter()
                .map(|(name, factory)| (name.to_string(), factory))
                .collect(),
        }
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("plugins", &self.names())
            .finish()
    }
}
