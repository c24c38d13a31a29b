use serde::{Deserialize, Serialize};

use wordgen_core::{PredicateKind, RunMode};

use crate::estimate::{DEFAULT_THROUGHPUT_BYTES_PER_SEC, Estimate};

/// Default projected size above which a run needs explicit confirmation.
pub const DEFAULT_CONFIRM_THRESHOLD_BYTES: f64 = 1_000_000.0;

/// Options for the enumeration engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateOptions {
    /// Projected byte count above which the confirmation gate is consulted.
    pub confirm_threshold_bytes: f64,
    /// Throughput assumed when projecting run time.
    pub assumed_throughput_bytes_per_sec: f64,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            confirm_threshold_bytes: DEFAULT_CONFIRM_THRESHOLD_BYTES,
            assumed_throughput_bytes_per_sec: DEFAULT_THROUGHPUT_BYTES_PER_SEC,
        }
    }
}

/// Summary of a completed generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationReport {
    pub run_id: String,
    pub started_at: String,
    pub mode: RunMode,
    pub predicate: PredicateKind,
    pub entries_written: u64,
    pub entries_rejected: u64,
    pub bytes_written: u64,
    pub duration_ms: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimate: Option<Estimate>,
}

impl GenerationReport {
    pub fn new(run_id: String, started_at: String, mode: RunMode, predicate: PredicateKind) -> Self {
        Self {
            run_id,
            started_at,
            mode,
            predicate,
            entries_written: 0,
            entries_rejected: 0,
            bytes_written: 0,
            duration_ms: 0,
            estimate: None,
        }
    }
}
