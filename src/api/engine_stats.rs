use serde::{Deserialize, Serialize};

/// Runtime counters exposed for diagnostics and regression tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EngineStats {
    pub sweeps: u64,
    pub evaluations: u64,
    /// Live bounding-rectangle reads; the dominant cost of a sweep.
    pub rect_reads: u64,
    pub rect_cache_hits: u64,
    pub geometry_refreshes: u64,
    pub loads_dispatched: u64,
    pub loads_succeeded: u64,
    pub loads_failed: u64,
    pub stale_resolutions: u64,
}
