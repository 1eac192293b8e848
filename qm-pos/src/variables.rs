// Copyright (c) The qm-pos Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{config::Limits, errors::InvalidVariables};
use std::{collections::BTreeSet, fmt};

/// An ordered list of distinct, single-letter variable names.
///
/// Index `0` is the most significant bit of a minterm.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Variables {
    names: Vec<char>,
}

impl Variables {
    /// Validates `text` as a list of variable names, one letter each.
    ///
    /// Surrounding whitespace is ignored and names are upper-cased.
    pub fn new(text: &str, limits: &Limits) -> Result<Self, InvalidVariables> {
        let names: Vec<char> = text.trim().chars().flat_map(char::to_uppercase).collect();

        if names.is_empty() {
            return Err(InvalidVariables::Empty);
        }
        if names.len() > limits.max_variables() {
            return Err(InvalidVariables::TooMany {
                count: names.len(),
                max: limits.max_variables(),
            });
        }

        let mut seen = BTreeSet::new();
        for &name in &names {
            if !name.is_alphabetic() {
                return Err(InvalidVariables::NotALetter(name));
            }
            if !seen.insert(name) {
                return Err(InvalidVariables::Duplicate(name));
            }
        }

        Ok(Self { names })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Returns the name of the variable at `ix`.
    ///
    /// Panics if `ix >= self.len()`.
    #[inline]
    pub fn name(&self, ix: usize) -> char {
        self.names[ix]
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.names.iter().copied()
    }
}

impl fmt::Display for Variables {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for name in &self.names {
            write!(f, "{}", name)?;
        }
        Ok(())
    }
}
