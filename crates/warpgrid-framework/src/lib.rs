//! warpgrid-framework — filter plugin contracts for the WarpGrid scheduler.
//!
//! Defines the surface a filter plugin is written against. The scheduler
//! hands each plugin a snapshot of a candidate node and the pod being placed;
//! the plugin answers with a [`Status`]. Plugins are constructed through
//! factories held in a [`Registry`] and enabled per scheduling profile.
//!
//! # Architecture
//!
//! ```text
//! ProfileConfig (TOML)
//!   └── Registry::build_filters()
//!       └── PluginFactory(args, handle) → Arc<dyn FilterPlugin>
//!           └── filter(ctx, cycle_state, pod, node_info) → Status
//! ```
//!
//! Everything a plugin receives is borrowed and read-only for the duration
//! of the call. Plugins are `Send + Sync` and are evaluated concurrently
//! across candidate nodes.

pub mod config;
pub mod context;
pub mod cycle_state;
pub mod error;
pub mod plugin;
pub mod registry;
pub mod status;
pub mod types;

pub use config::{PluginEntry, ProfileConfig};
pub use context::FilterContext;
pub use cycle_state::CycleState;
pub use error::{FrameworkError, FrameworkResult};
pub use plugin::{FilterPlugin, FrameworkHandle, Plugin, PluginArgs, PluginFactory};
pub use registry::Registry;
pub use status::{Code, NODE_NOT_FOUND, Status};
pub use types::*;
