// Copyright (c) The qm-pos Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

/// Limits applied when validating input for the minimizer.
///
/// The minimizer itself is correct for any number of variables; these limits only
/// bound what the validation boundary accepts.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Limits {
    max_variables: usize,
}

impl Limits {
    pub const DEFAULT_MAX_VARIABLES: usize = 6;

    /// Minterms are stored as `u32`, so no more than 32 variables can be addressed.
    pub const MAX_SUPPORTED_VARIABLES: usize = 32;

    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum number of variables, clamped to [`Self::MAX_SUPPORTED_VARIABLES`].
    pub fn with_max_variables(mut self, max_variables: usize) -> Self {
        self.max_variables = max_variables.min(Self::MAX_SUPPORTED_VARIABLES);
        self
    }

    #[inline]
    pub fn max_variables(&self) -> usize {
        self.max_variables
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_variables: Self::DEFAULT_MAX_VARIABLES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        assert_eq!(Limits::default().max_variables(), 6);
    }

    #[test]
    fn test_clamp() {
        assert_eq!(Limits::new().with_max_variables(4).max_variables(), 4);
        assert_eq!(
            Limits::new().with_max_variables(100).max_variables(),
            Limits::MAX_SUPPORTED_VARIABLES
        );
    }
}
