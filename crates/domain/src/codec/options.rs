// crates/domain/src/codec/options.rs
use serde::{Deserialize, Serialize};

/// Tuning knobs for [`parse_with`](super::parse_with).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseOptions {
    /// Largest number of volumes a single `start-end` fragment may expand to.
    /// Only volumes that can be owned count, so `0-n` is measured as `1-n`.
    /// Larger spans contribute nothing.
    pub max_range_span: u32,
}

impl ParseOptions {
    pub const DEFAULT_MAX_RANGE_SPAN: u32 = 10_000;

    pub const fn new(max_range_span: u32) -> Self {
        Self { max_range_span }
    }

    #[inline]
    pub fn admits(&self, span_len: u64) -> bool {
        span_len <= u64::from(self.max_range_span)
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_RANGE_SPAN)
    }
}
