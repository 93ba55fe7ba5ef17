//! Experiment runner.
//!
//! Supplies a fresh backend per run given a variable count, times the user
//! computation, and collects the run statistics into a [`RunReport`].

use std::fmt;
use std::time::Instant;

use dc_label::BddBackend;
use serde::Serialize;
use tracing::info;

/// Statistics collected from one harness run.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    /// Name of the executed computation.
    pub name: String,
    /// Number of principal variables in the backend universe.
    pub variables: u32,
    /// Wall-clock duration of the computation in milliseconds.
    pub duration_ms: f64,
    /// Total formula nodes interned by the end of the run.
    pub backend_nodes: usize,
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} variables, {} nodes, {:.3} ms",
            self.name, self.variables, self.backend_nodes, self.duration_ms
        )
    }
}

/// Run `computation` against a fresh backend over `variables` variables.
///
/// Each run gets its own backend; nothing is shared across runs, so two
/// reports are directly comparable.
pub fn run<F>(name: &str, variables: u32, computation: F) -> RunReport
where
    F: FnOnce(&mut BddBackend),
{
    let mut backend = BddBackend::new(variables);
    let start = Instant::now();
    computation(&mut backend);
    let duration = start.elapsed();

    let report = RunReport {
        name: name.to_string(),
        variables,
        duration_ms: duration.as_secs_f64() * 1_000.0,
        backend_nodes: backend.node_total(),
    };
    info!(
        name = %report.name,
        duration_ms = report.duration_ms,
        backend_nodes = report.backend_nodes,
        "run complete"
    );
    report
}
