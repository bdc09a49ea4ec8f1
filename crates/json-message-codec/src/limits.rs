//! Resource limits for decoding.
//!
//! The decoder recurses once per array or object level, so the nesting
//! depth is bounded to keep hostile input from exhausting the stack.

/// Default maximum array/object nesting depth.
pub const MAX_NESTING_DEPTH: usize = 512;

/// Maximum number of hex digits in a `\u` escape.
pub const UNICODE_ESCAPE_DIGITS: usize = 4;

/// Options controlling decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Maximum nesting depth for arrays and objects.
    ///
    /// A top-level scalar has depth 0, `[]` has depth 1.
    pub max_depth: usize,
}

impl DecodeOptions {
    /// Creates default decoding options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns these options with a different nesting limit.
    pub fn with_max_depth(self, max_depth: usize) -> Self {
        Self { max_depth }
    }
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            max_depth: MAX_NESTING_DEPTH,
        }
    }
}
