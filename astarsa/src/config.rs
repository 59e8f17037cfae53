//! This module contains constants used throughout the code, that may eventually
//! be turned into configurable options.

/// Candidates with a similarity strictly above this are flagged.
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.8;

/// Re-sum the edge costs along the traced path and compare with the distance.
pub const VERIFY_TRACEBACK: bool = true;

/// Check `h(u) <= c(u,v) + h(v)` on every explored edge in debug builds, for
/// heuristics that claim to be admissible.
pub const CHECK_CONSISTENCY: bool = true;
