//! Scheduling profile configuration.
//!
//! A profile names the scheduler and lists the filter plugins it runs, in
//! order, each with optional free-form args:
//!
//! ```toml
//! scheduler_name = "default-scheduler"
//!
//! [[filters]]
//! name = "PrepullInitialized"
//! ```

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{FrameworkError, FrameworkResult};
use crate::plugin::{FrameworkHandle, PluginArgs};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileConfig {
    pub scheduler_name: String,
    #[serde(default)]
    pub filters: Vec<PluginEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PluginEntry {
    pub name: String,
    pub args: Option<toml::Value>,
}

impl PluginEntry {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: None,
        }
    }

    pub fn plugin_args(&self) -> PluginArgs {
        PluginArgs::new(self.args.clone())
    }
}

impl ProfileConfig {
    pub fn from_file(path: &Path) -> FrameworkResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(s: &str) -> FrameworkResult<Self> {
        let config: ProfileConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject empty scheduler names and filters enabled twice.
    pub fn validate(&self) -> FrameworkResult<()> {
        if self.scheduler_name.trim().is_empty() {
            return Err(FrameworkError::Config(
                "scheduler_name must not be empty".to_string(),
            ));
        }
        let mut seen = HashSet::new();
        for entry in &self.filters {
            if !seen.insert(entry.name.as_str()) {
                return Err(FrameworkError::Config(format!(
                    "filter {} enabled more than once",
                    entry.name
                )));
            }
        }
        Ok(())
    }

    pub fn handle(&self) -> FrameworkHandle {
        FrameworkHandle::new(&self.scheduler_name)
    }
}
