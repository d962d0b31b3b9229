//! Factory and registry wiring for `PrepullInitialized`.

use std::sync::{Arc, LazyLock};

use warpgrid_framework::{
    FilterPlugin, FrameworkHandle, FrameworkResult, PluginArgs, PluginFactory, Registry,
};

use crate::filter::{NAME, PrepullInitialized};

static REGISTRY: LazyLock<Registry> =
    LazyLock::new(|| Registry::from_iter([(NAME, new as PluginFactory)]));

/// Construct the plugin. The plugin takes no args and never fails.
pub fn new(_args: &PluginArgs, _handle: &FrameworkHandle) -> FrameworkResult<Arc<dyn FilterPlugin>> {
    Ok(Arc::new(PrepullInitialized))
}

/// Add the plugin to `registry` under [`NAME`].
pub fn register(registry: &mut Registry) -> FrameworkResult<()> {
    registry.register(NAME, new)
}

/// Process-wide registry holding this crate's plugins.
pub fn registry() -> &'static Registry {
    &REGISTRY
}
