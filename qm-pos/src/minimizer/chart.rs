// Copyright (c) The qm-pos Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::term::Term;

/// The prime implicant chart: for each minterm, the prime implicants that cover it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CoverageTable {
    columns: Vec<Column>,
}

/// One column of the chart.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Column {
    pub minterm: u32,
    /// Indexes into the prime implicant list, in ascending order.
    pub primes: Vec<usize>,
}

impl CoverageTable {
    /// Builds one column per entry of `minterms`, in order. A minterm given twice gets two
    /// identical columns.
    pub fn new(primes: &[Term], minterms: &[u32]) -> Self {
        let columns = minterms
            .iter()
            .map(|&minterm| Column {
                minterm,
                primes: primes
                    .iter()
                    .enumerate()
                    .filter_map(|(ix, prime)| prime.matches(minterm).then(|| ix))
                    .collect(),
            })
            .collect();
        Self { columns }
    }

    #[inline]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Returns the minterms whose column has exactly one prime implicant, along with that
    /// implicant.
    pub fn single_entry_columns(&self) -> impl Iterator<Item = (u32, usize)> + '_ {
        self.columns
            .iter()
            .filter_map(|column| match column.primes.as_slice() {
                &[prime_ix] => Some((column.minterm, prime_ix)),
                _ => None,
            })
    }
}
