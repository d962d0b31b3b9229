//! Plugin traits and construction inputs.

use std::sync::Arc;

use crate::context::FilterContext;
use crate::cycle_state::CycleState;
use crate::error::FrameworkResult;
use crate::status::Status;
use crate::types::{NodeInfo, Pod};

/// Anything the scheduler can load by name.
pub trait Plugin: Send + Sync {
    /// Stable plugin name, used in the registry, profiles and logs.
    fn name(&self) -> &str;
}

/// A plugin invoked at the filter extension point.
///
/// Filters decide whether `pod` may be placed on the node described by
/// `node_info`. They are called concurrently for many nodes and must not
/// block.
pub trait FilterPlugin: Plugin {
    fn filter(
        &self,
        ctx: &FilterContext,
        state: &CycleState,
        pod: &Pod,
        node_info: &NodeInfo,
    ) -> Status;
}

/// Opaque per-plugin configuration from the scheduling profile.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PluginArgs(Option<toml::Value>);

impl PluginArgs {
    pub fn new(value: Option<toml::Value>) -> Self {
        Self(value)
    }

    pub fn empty() -> Self {
        Self(None)
    }

    pub fn value(&self) -> Option<&toml::Value> {
        self.0.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }
}

/// Handle to the framework instance constructing a plugin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameworkHandle {
    profile_name: String,
}

impl FrameworkHandle {
    pub fn new(profile_name: impl Into<String>) -> Self {
        Self {
            profile_name: profile_name.into(),
        }
    }

    /// Name of the scheduling profile this framework runs.
    pub fn profile_name(&self) -> &str {
        &self.profile_name
    }
}

/// Constructor stored in a [`Registry`](crate::Registry).
pub type PluginFactory =
    fn(&PluginArgs, &FrameworkHandle) -> FrameworkResult<Arc<dyn FilterPlugin>>;
