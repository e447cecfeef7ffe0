//! Tunables for the state decoder.

/// Dock nesting limit used when none is configured.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Options controlling a single decode pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Deepest dock node nesting accepted before the decode faults.
    /// Top-level dock trees sit at depth 1.
    pub max_depth: usize,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
