//! Search statistics for diagnostics and tuning.
//!
//! Counters are scoped to one `solve` invocation: every strategy resets
//! its stats at the top of `solve`, so repeated searches on the same
//! solver never contaminate each other.

use serde::{Deserialize, Serialize};

/// Statistics collected during one search invocation.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SearchStats {
    /// States expanded (popped and had successors generated).
    pub expanded: u64,

    /// Successor states generated (before dedup).
    pub generated: u64,

    /// Generated or popped states discarded as duplicates.
    pub duplicates: u64,

    /// Depth-limit cut-offs (bounded depth-first only).
    pub cutoffs: u64,

    /// Maximum path depth reached.
    pub max_depth: u32,

    /// High-water mark of the frontier size.
    pub frontier_peak: u64,

    /// Total time spent searching (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Calculate expansions per second.
    #[must_use]
    pub fn expansions_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.expanded as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }

    /// Average successors per expanded state.
    #[must_use]
    pub fn branching_factor(&self) -> f64 {
        if self.expanded == 0 {
            0.0
        } else {
            self.generated as f64 / self.expanded as f64
        }
    }

    /// Record the current frontier size, keeping the high-water mark.
    #[inline]
    pub fn observe_frontier(&mut self, len: usize) {
        if len as u64 > self.frontier_peak {
            self.frontier_peak = len as u64;
        }
    }

    /// Record a path depth, keeping the maximum.
    #[inline]
    pub fn observe_depth(&mut self, depth: u32) {
        if depth > self.max_depth {
            self.max_depth = depth;
        }
    }
}
