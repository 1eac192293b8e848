// Copyright (c) The qm-pos Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{config::Limits, errors::InputError, variables::Variables};

/// A validated Boolean function: its minterms over a set of named variables.
///
/// Every minterm is guaranteed to be below `2^var_count`. Minterms keep their input order and
/// are not deduplicated: a repeated minterm shows up once per occurrence in the coverage table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogicFunction {
    minterms: Vec<u32>,
    variables: Variables,
}

impl LogicFunction {
    pub fn new(
        minterms: impl IntoIterator<Item = u32>,
        variables: Variables,
    ) -> Result<Self, InputError> {
        let var_count = variables.len();
        let minterms: Vec<u32> = minterms.into_iter().collect();
        for &value in &minterms {
            check_range(i64::from(value), var_count)?;
        }

        Ok(Self {
            minterms,
            variables,
        })
    }

    /// Parses comma-separated minterms and a string of variable letters.
    ///
    /// Variables are validated first, then each minterm token in order. Empty tokens are
    /// skipped, but at least one minterm must be present.
    pub fn parse(
        minterms_text: &str,
        variables_text: &str,
        limits: &Limits,
    ) -> Result<Self, InputError> {
        let variables = Variables::new(variables_text, limits)?;
        let var_count = variables.len();

        let mut minterms = Vec::new();
        for token in minterms_text.split(',').map(str::trim) {
            if token.is_empty() {
                continue;
            }
            let value: i64 = token
                .parse()
                .map_err(|_| InputError::MalformedMinterm {
                    token: token.to_owned(),
                })?;
            minterms.push(check_range(value, var_count)?);
        }

        if minterms.is_empty() {
            return Err(InputError::MalformedMinterm {
                token: String::new(),
            });
        }

        Ok(Self {
            minterms,
            variables,
        })
    }

    #[inline]
    pub fn minterms(&self) -> &[u32] {
        &self.minterms
    }

    #[inline]
    pub fn variables(&self) -> &Variables {
        &self.variables
    }

    #[inline]
    pub fn var_count(&self) -> usize {
        self.variables.len()
    }

    /// Returns every value in `0..2^var_count` that isn't a minterm, in ascending order.
    pub fn maxterms(&self) -> Vec<u32> {
        let end = 1_u64 << self.var_count();
        (0..end)
            .map(|value| value as u32)
            .filter(|value| !self.minterms.contains(value))
            .collect()
    }
}

fn check_range(value: i64, var_count: usize) -> Result<u32, InputError> {
    let end = 1_i64 << var_count;
    if (0..end).contains(&value) {
        Ok(value as u32)
    } else {
        Err(InputError::MintermOutOfRange { value, var_count })
    }
}
