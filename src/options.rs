/// What a multiplication by zero, or a sum to zero, produces.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ZeroPolicy {
    /// Return a bare `0`, discarding the dimension vector.
    #[default]
    Collapse,
    /// Return a zero-valued unit that keeps its dimension vector.
    Preserve,
}

/// Settings for dimensioned arithmetic.
///
/// The default reproduces the historical behavior, where zero results lose
/// their dimensions.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ArithmeticOptions {
    pub zero_policy: ZeroPolicy,
}

impl ArithmeticOptions {
    /// Options that keep dimensions on zero-valued results.
    #[inline]
    pub fn strict() -> Self {
        Self {
            zero_policy: ZeroPolicy::Preserve,
        }
    }

    #[inline]
    pub(crate) fn collapses_zero(&self) -> bool {
        self.zero_policy == ZeroPolicy::Collapse
    }
}
