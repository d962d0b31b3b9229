//! Trace output of the prepull filter.
//!
//! The scan reports the node and every pod it inspects at `TRACE`. These
//! tests install a scoped subscriber that writes into a buffer and check
//! what reaches it.

use std::io;
use std::sync::{Arc, Mutex};

use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;

use warpgrid_framework::{CycleState, FilterContext, FilterPlugin, Node, NodeInfo, Pod};
use warpgrid_prepull::PrepullInitialized;

/// Shared in-memory log sink.
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn run_with_level(level: Level, node_info: &NodeInfo) -> String {
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(logs.clone())
        .with_max_level(level)
        .with_ansi(false)
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        PrepullInitialized.filter(
            &FilterContext::background(),
            &CycleState::new(),
            &Pod::new("workload-0"),
            node_info,
        );
    });
    logs.contents()
}

#[test]
fn trace_reports_node_and_each_scanned_pod() {
    let node_info = NodeInfo::new(Node::new("node-trace"))
        .with_pods([
            Pod::new("app-1").with_phase("Running"),
            Pod::new("placeholder-warmup").with_phase("Pending"),
        ]);

    let output = run_with_level(Level::TRACE, &node_info);

    assert!(output.contains("node=node-trace"), "{output}");
    assert!(output.contains("pod=app-1 phase=Running"), "{output}");
    assert!(output.contains("pod=placeholder-warmup phase=Pending"), "{output}");
    assert!(output.contains("fits=false"), "{output}");
}

#[test]
fn scan_stops_at_first_match() {
    let node_info = NodeInfo::new(Node::new("node-trace"))
        .with_pods([
            Pod::new("placeholder-a").with_phase("Running"),
            Pod::new("placeholder-b").with_phase("Running"),
        ]);

    let output = run_with_level(Level::TRACE, &node_info);

    assert!(output.contains("pod=placeholder-a"), "{output}");
    assert!(!output.contains("pod=placeholder-b"), "{output}");
    assert!(output.contains("fits=true"), "{output}");
}

#[test]
fn info_level_suppresses_scan_output() {
    let node_info = NodeInfo::new(Node::new("node-quiet"))
        .with_pods([Pod::new("placeholder-warmup").with_phase("Running")]);

    let output = run_with_level(Level::INFO, &node_info);

    assert!(output.is_empty(), "{output}");
}
