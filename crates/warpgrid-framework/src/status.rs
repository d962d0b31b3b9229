//! Plugin result status.
//!
//! A [`Status`] carries a [`Code`] and zero or more human-readable reasons.
//! The code tells the scheduler what to do with a rejected node:
//! `Unschedulable` may clear up if other pods are preempted, while
//! `UnschedulableAndUnresolvable` means retrying this node in the same
//! cycle is pointless.

use std::fmt;

use crate::error::FrameworkError;

/// Message carried by the status returned when a snapshot has no node.
pub const NODE_NOT_FOUND: &str = "node not found";

/// Outcome class of a plugin call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Code {
    #[default]
    Success,
    /// Internal failure. The node is excluded and the cycle reports an error.
    Error,
    /// Node rejected; preemption might make room.
    Unschedulable,
    /// Node rejected; preemption will not help.
    UnschedulableAndUnresolvable,
    Wait,
    Skip,
}

impl Code {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Error => "Error",
            Self::Unschedulable => "Unschedulable",
            Self::UnschedulableAndUnresolvable => "UnschedulableAndUnresolvable",
            Self::Wait => "Wait",
            Self::Skip => "Skip",
        }
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a plugin call.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Status {
    code: Code,
    reasons: Vec<String>,
    // Set only by `node_not_found`; a matching message alone does not count.
    node_missing: bool,
}

impl Status {
    pub fn success() -> Self {
        Self::default()
    }

    pub fn new(code: Code, reason: impl Into<String>) -> Self {
        Self {
            code,
            reasons: vec![reason.into()],
            node_missing: false,
        }
    }

    pub fn with_reasons(code: Code, reasons: Vec<String>) -> Self {
        Self {
            code,
            reasons,
            node_missing: false,
        }
    }

    pub fn error(reason: impl Into<String>) -> Self {
        Self::new(Code::Error, reason)
    }

    pub fn node_not_found() -> Self {
        Self {
            node_missing: true,
            ..Self::error(NODE_NOT_FOUND)
        }
    }

    pub fn code(&self) -> Code {
        self.code
    }

    pub fn reasons(&self) -> &[String] {
        &self.reasons
    }

    /// All reasons joined with `", "`.
    pub fn message(&self) -> String {
        self.reasons.join(", ")
    }

    pub fn is_success(&self) -> bool {
        self.code == Code::Success
    }

    pub fn is_unschedulable(&self) -> bool {
        matches!(
            self.code,
            Code::Unschedulable | Code::UnschedulableAndUnresolvable
        )
    }

    /// Whether the scheduler may expect a different answer from this node
    /// within the same cycle.
    pub fn is_resolvable(&self) -> bool {
        !matches!(self.code, Code::UnschedulableAndUnresolvable | Code::Error)
    }

    /// Typed error for an `Error` status; `None` for every other code.
    pub fn as_error(&self) -> Option<FrameworkError> {
        if self.code != Code::Error {
            return None;
        }
        if self.node_missing {
            Some(FrameworkError::NodeNotFound)
        } else {
            Some(FrameworkError::Status(self.message()))
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.reasons.is_empty() {
            write!(f, "{}", self.code)
        } else {
            write!(f, "{}: {}", self.code, self.message())
        }
    }
}
