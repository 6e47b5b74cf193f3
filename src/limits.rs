//! Resource limits for a single parse.
//!
//! The shift-reduce parser keeps every unreduced token on its stack, so the
//! input length and the number of open containers bound its memory use.

/// Caps applied while parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Maximum input length, in characters
    pub max_input_len: usize,
    /// Maximum number of objects/arrays open at the same time
    pub max_depth: usize,
}

impl Limits {
    /// No caps at all. This is what [`crate::parse`] uses.
    pub const fn unbounded() -> Self {
        Self {
            max_input_len: usize::MAX,
            max_depth: usize::MAX,
        }
    }

    /// Conservative caps for untrusted input.
    pub const fn strict() -> Self {
        Self {
            max_input_len: 1024 * 1024, // 1 Mi characters
            max_depth: 128,
        }
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self::unbounded()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LimitError {
    #[error("input of {len} characters exceeds the limit of {max}")]
    InputTooLarge { len: usize, max: usize },
    #[error("nesting deeper than {max} levels")]
    NestingTooDeep { max: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unbounded() {
        assert_eq!(Limits::default(), Limits::unbounded());
        assert_eq!(Limits::default().max_depth, usize::MAX);
    }

    #[test]
    fn test_strict_limits() {
        let limits = Limits::strict();
        assert_eq!(limits.max_input_len, 1024 * 1024);
        assert_eq!(limits.max_depth, 128);
    }
}
