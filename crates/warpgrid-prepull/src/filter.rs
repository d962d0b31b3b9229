//! The `PrepullInitialized` filter.
//!
//! Placeholders are recognised by name only. Any pod whose name happens to
//! contain the marker counts, whether or not it was created for warm-up.

use tracing::{debug, trace};

use warpgrid_framework::{
    Code, CycleState, FilterContext, FilterPlugin, NodeInfo, Plugin, Pod, PodPhase, Status,
};

/// Name of the plugin in registries, profiles and logs.
pub const NAME: &str = "PrepullInitialized";

/// Reason attached to nodes without a running placeholder.
pub const ERR_REASON: &str = "node(s) didn't match prepull initialization filter";

/// Case-sensitive substring identifying placeholder pods.
pub const PLACEHOLDER_MARKER: &str = "placeholder";

/// Admits a node only once it runs a placeholder pod.
///
/// Stateless; one value can serve every scheduling worker.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrepullInitialized;

impl Plugin for PrepullInitialized {
    fn name(&self) -> &str {
        NAME
    }
}

impl FilterPlugin for PrepullInitialized {
    fn filter(
        &self,
        _ctx: &FilterContext,
        _state: &CycleState,
        pod: &Pod,
        node_info: &NodeInfo,
    ) -> Status {
        let Some(node) = node_info.node() else {
            return Status::node_not_found();
        };

        let fits = fits(pod, node_info);
        debug!(node = %node.name, pod = %pod.name, fits, "prepull filter evaluated");

        if !fits {
            return Status::new(Code::UnschedulableAndUnresolvable, ERR_REASON);
        }
        Status::success()
    }
}

/// Whether `pod` is a placeholder by name.
pub fn is_placeholder(pod: &Pod) -> bool {
    pod.name.contains(PLACEHOLDER_MARKER)
}

/// Whether `node_info` hosts a running placeholder.
///
/// Scans pods in snapshot order and stops at the first match. Returns
/// `false` when the node does not resolve.
pub fn fits(_pod: &Pod, node_info: &NodeInfo) -> bool {
    let Some(node) = node_info.node() else {
        return false;
    };
    trace!(node = %node.name, pods = node_info.pods().len(), "scanning node");

    node_info.pods().iter().map(|info| info.pod()).any(|p| {
        trace!(node = %node.name, pod = %p.name, phase = %p.status.phase, "scanned pod");
        is_placeholder(p) && p.status.phase.as_str() == PodPhase::Running.as_str()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use warpgrid_framework::Node;

    fn node_with(pods: &[(&str, &str)]) -> NodeInfo {
        NodeInfo::new(Node::new("node-1"))
            .with_pods(pods.iter().map(|(name, phase)| Pod::new(*name).with_phase(*phase)))
    }

    fn evaluate(node_info: &NodeInfo) -> Status {
        PrepullInitialized.filter(
            &FilterContext::background(),
            &CycleState::new(),
            &Pod::new("workload"),
            node_info,
        )
    }

    #[test]
    fn name_is_stable() {
        assert_eq!(PrepullInitialized.name(), "PrepullInitialized");
    }

    #[test]
    fn placeholder_detection_is_substring() {
        assert!(is_placeholder(&Pod::new("placeholder")));
        assert!(is_placeholder(&Pod::new("my-placeholder-7")));
        assert!(is_placeholder(&Pod::new("ns-placeholder")));
        assert!(!is_placeholder(&Pod::new("place-holder")));
        assert!(!is_placeholder(&Pod::new("Placeholder")));
        assert!(!is_placeholder(&Pod::new("PLACEHOLDER-1")));
    }

    #[test]
    fn running_placeholder_fits() {
        let info = node_with(&[("placeholder-warmup", "Running")]);
        assert!(fits(&Pod::new("workload"), &info));
        assert!(evaluate(&info).is_success());
    }

    #[test]
    fn custom_phase_named_running_fits() {
        let info = NodeInfo::new(Node::new("node-1")).with_pods([
            Pod::new("placeholder-warmup").with_phase(PodPhase::Other("Running".to_string())),
        ]);
        assert!(fits(&Pod::new("workload"), &info));
        assert!(evaluate(&info).is_success());
    }

    #[test]
    fn pending_placeholder_does_not_fit() {
        let info = node_with(&[("placeholder-warmup", "Pending")]);
        assert!(!fits(&Pod::new("workload"), &info));
    }

    #[test]
    fn running_like_phases_do_not_fit() {
        for phase in ["running", "Ready", "RUNNING", "Succeeded", "Unknown"] {
            let info = node_with(&[("placeholder-1", phase)]);
            assert!(!fits(&Pod::new("workload"), &info), "phase {phase} should not fit");
        }
    }

    #[test]
    fn rejection_is_unresolvable_with_fixed_reason() {
        let status = evaluate(&node_with(&[]));
        assert_eq!(status.code(), Code::UnschedulableAndUnresolvable);
        assert_eq!(status.reasons(), [ERR_REASON]);
        assert!(!status.is_resolvable());
    }

    #[test]
    fn missing_node_is_an_error() {
        let info = NodeInfo::without_node()
            .with_pods([Pod::new("placeholder").with_phase(PodPhase::Running)]);
        let status = evaluate(&info);
        assert_eq!(status.code(), Code::Error);
        assert_eq!(status.message(), "node not found");
        assert!(!fits(&Pod::new("workload"), &info));
    }
}
