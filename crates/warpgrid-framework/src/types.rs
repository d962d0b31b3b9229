//! Data model handed to filter plugins.
//!
//! A [`NodeInfo`] is the scheduler's snapshot of one candidate node: the
//! node itself (if it still resolves) and the pods currently assigned to
//! it. Pods are shared behind `Arc` so snapshots are cheap to clone across
//! worker threads.

use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Unique name of a node in the cluster.
pub type NodeName = String;

/// Unique name of a pod.
pub type PodName = String;

// ── Node ──────────────────────────────────────────────────────────

/// A compute host that can run pods.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Node {
    pub name: NodeName,
    #[serde(default)]
    pub labels: HashMap<String, String>,
}

impl Node {
    pub fn new(name: impl Into<NodeName>) -> Self {
        Self {
            name: name.into(),
            labels: HashMap::new(),
        }
    }
}

// ── Pod ───────────────────────────────────────────────────────────

/// Lifecycle phase of a pod.
///
/// Phases compare by exact name: `Other("running")` is not `Running`, while
/// `Other("Running")` is.
#[derive(Debug, Clone, Default)]
pub enum PodPhase {
    #[default]
    Pending,
    Running,
    Succeeded,
    Failed,
    Unknown,
    /// Implementation-specific phase, kept verbatim.
    Other(String),
}

impl PodPhase {
    /// Parse a phase name. Matching is case-sensitive.
    pub fn parse(s: &str) -> Self {
        match s {
            "Pending" => Self::Pending,
            "Running" => Self::Running,
            "Succeeded" => Self::Succeeded,
            "Failed" => Self::Failed,
            "Unknown" => Self::Unknown,
            other => Self::Other(other.to_string()),
        }
    }

    /// Canonical phase name.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "Pending",
            Self::Running => "Running",
            Self::Succeeded => "Succeeded",
            Self::Failed => "Failed",
            Self::Unknown => "Unknown",
            Self::Other(s) => s,
        }
    }
}

impl PartialEq for PodPhase {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for PodPhase {}

impl Hash for PodPhase {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl fmt::Display for PodPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for PodPhase {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl Serialize for PodPhase {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for PodPhase {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::parse(&s))
    }
}

/// Observed status of a pod.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PodStatus {
    pub phase: PodPhase,
}

/// A schedulable unit of work.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Pod {
    pub name: PodName,
    #[serde(default)]
    pub namespace: String,
    #[serde(default)]
    pub status: PodStatus,
}

impl Pod {
    /// A pod in the `Pending` phase.
    pub fn new(name: impl Into<PodName>) -> Self {
        Self {
            name: name.into(),
            namespace: String::new(),
            status: PodStatus::default(),
        }
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    pub fn with_phase(mut self, phase: impl Into<PodPhase>) -> Self {
        self.status.phase = phase.into();
        self
    }
}

// ── NodeInfo ──────────────────────────────────────────────────────

/// A pod assigned to a node, as seen in a [`NodeInfo`] snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct PodInfo {
    pod: Arc<Pod>,
}

impl PodInfo {
    pub fn new(pod: impl Into<Arc<Pod>>) -> Self {
        Self { pod: pod.into() }
    }

    pub fn pod(&self) -> &Pod {
        &self.pod
    }
}

/// Snapshot of a candidate node and the pods assigned to it.
///
/// Pods are kept in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodeInfo {
    node: Option<Node>,
    pods: Vec<PodInfo>,
}

impl NodeInfo {
    /// Snapshot of an existing node with no pods.
    pub fn new(node: Node) -> Self {
        Self {
            node: Some(node),
            pods: Vec::new(),
        }
    }

    /// Snapshot whose node no longer resolves.
    pub fn without_node() -> Self {
        Self::default()
    }

    pub fn with_pods<I>(mut self, pods: I) -> Self
    where
        I: IntoIterator<Item = Pod>,
    {
        self.pods.extend(pods.into_iter().map(PodInfo::new));
        self
    }

    pub fn add_pod(&mut self, pod: impl Into<Arc<Pod>>) {
        self.pods.push(PodInfo::new(pod));
    }

    pub fn set_node(&mut self, node: Node) {
        self.node = Some(node);
    }

    pub fn remove_node(&mut self) {
        self.node = None;
    }

    /// The node, or `None` if it does not resolve.
    pub fn node(&self) -> Option<&Node> {
        self.node.as_ref()
    }

    pub fn node_name(&self) -> Option<&str> {
        self.node.as_ref().map(|n| n.name.as_str())
    }

    pub fn pods(&self) -> &[PodInfo] {
        &self.pods
    }
}
