//! warpgrid-prepull — readiness gate for image pre-pulling.
//!
//! Provides the `PrepullInitialized` filter plugin. A node only accepts new
//! pods once it hosts a running placeholder pod: a pod whose name contains
//! `"placeholder"` and whose phase is exactly `Running`. Placeholder pods
//! pull the workload's images ahead of time, so a running placeholder means
//! the node is warm.
//!
//! # Components
//!
//! - **`filter`** — the plugin, its verdict logic, and the `fits` check
//! - **`registration`** — factory and registry wiring

pub mod filter;
pub mod registration;

pub use filter::{ERR_REASON, NAME, PLACEHOLDER_MARKER, PrepullInitialized, fits, is_placeholder};
pub use registration::{new, register, registry};
