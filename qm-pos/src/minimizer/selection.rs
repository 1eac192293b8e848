// Copyright (c) The qm-pos Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::chart::CoverageTable;
use crate::term::Term;
use log::debug;
use std::collections::BTreeSet;

/// The prime implicants chosen to cover a function.
///
/// Essential prime implicants come first, followed by any picked greedily to cover what the
/// essential ones miss. All entries are indexes into the prime implicant list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selection {
    selected: Vec<usize>,
    essential_count: usize,
    uncovered_after_essentials: Vec<u32>,
    uncovered: Vec<u32>,
}

impl Selection {
    /// Selects prime implicants covering `minterms`.
    ///
    /// 1. Every prime implicant that is alone in some column of `table` is essential.
    /// 2. While minterms remain uncovered, the not-yet-selected prime implicant covering the most
    ///    of them is added. Ties go to the implicant found first.
    /// 3. If no prime implicant covers any remaining minterm, selection stops and the remaining
    ///    minterms are reported by [`Self::uncovered`].
    pub fn new(table: &CoverageTable, primes: &[Term], minterms: &[u32]) -> Self {
        let mut selected: Vec<usize> = Vec::new();
        let mut covered = BTreeSet::new();

        for (minterm, prime_ix) in table.single_entry_columns() {
            if selected.contains(&prime_ix) {
                continue;
            }
            debug!(
                "prime implicant {} is essential for minterm {}",
                primes[prime_ix].matrix_display(),
                minterm
            );
            selected.push(prime_ix);
            covered.extend(
                minterms
                    .iter()
                    .copied()
                    .filter(|&value| primes[prime_ix].matches(value)),
            );
        }
        let essential_count = selected.len();

        let uncovered_after_essentials: Vec<u32> = minterms
            .iter()
            .copied()
            .filter(|value| !covered.contains(value))
            .collect();

        let mut uncovered = uncovered_after_essentials.clone();
        while !uncovered.is_empty() {
            let mut best: Option<(usize, usize)> = None;
            for (prime_ix, prime) in primes.iter().enumerate() {
                if selected.contains(&prime_ix) {
                    continue;
                }
                let count = uncovered
                    .iter()
                    .filter(|&&value| prime.matches(value))
                    .count();
                if count > best.map_or(0, |(_, best_count)| best_count) {
                    best = Some((prime_ix, count));
                }
            }

            match best {
                Some((prime_ix, count)) => {
                    debug!(
                        "adding prime implicant {} covering {} uncovered minterm(s)",
                        primes[prime_ix].matrix_display(),
                        count
                    );
                    selected.push(prime_ix);
                    uncovered.retain(|&value| !primes[prime_ix].matches(value));
                }
                None => {
                    debug!("no prime implicant covers minterms {:?}", uncovered);
                    break;
                }
            }
        }

        Self {
            selected,
            essential_count,
            uncovered_after_essentials,
            uncovered,
        }
    }

    /// Returns every selected prime implicant: essential ones first, then greedy additions.
    #[inline]
    pub fn selected(&self) -> &[usize] {
        &self.selected
    }

    #[inline]
    pub fn essentials(&self) -> &[usize] {
        &self.selected[..self.essential_count]
    }

    #[inline]
    pub fn additions(&self) -> &[usize] {
        &self.selected[self.essential_count..]
    }

    /// Returns the minterms left uncovered by the essential prime implicants alone.
    #[inline]
    pub fn uncovered_after_essentials(&self) -> &[u32] {
        &self.uncovered_after_essentials
    }

    /// Returns the minterms no selected prime implicant covers.
    #[inline]
    pub fn uncovered(&self) -> &[u32] {
        &self.uncovered
    }

    #[inline]
    pub fn is_complete(&self) -> bool {
        self.uncovered.is_empty()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::minimizer::{groups::Groups, primes::Combination};
    use test_log::test;

    fn select(minterms: &[u32], var_count: usize) -> (Vec<Term>, Selection) {
        let terms = minterms
            .iter()
            .map(|&value| Term::from_minterm(value, var_count));
        let primes = Combination::new(Groups::group(terms, var_count)).into_primes();
        let table = CoverageTable::new(&primes, minterms);
        let selection = Selection::new(&table, &primes, minterms);
        (primes, selection)
    }

    #[test]
    fn test_essentials_only() {
        let (_, selection) = select(&[0, 1, 3], 2);
        assert_eq!(selection.essentials(), &[0, 1]);
        assert!(selection.additions().is_empty());
        assert!(selection.uncovered_after_essentials().is_empty());
        assert!(selection.is_complete());
    }

    #[test]
    fn test_greedy_tie_break() {
        // A cyclic chart: every minterm is covered by exactly two prime implicants, and every
        // prime implicant covers two minterms.
        let (primes, selection) = select(&[0, 1, 2, 5, 6, 7], 3);
        assert!(selection.essentials().is_empty());
        assert_eq!(selection.uncovered_after_essentials(), &[0, 1, 2, 5, 6, 7]);

        // `00-` wins the first tie, then `-10` (the first to cover two of 2, 5, 6, 7).
        let picked: Vec<String> = selection
            .additions()
            .iter()
            .map(|&ix| primes[ix].matrix_display().to_string())
            .collect();
        assert_eq!(picked, vec!["00-", "-10", "1-1"]);
        assert!(selection.is_complete());
    }

    #[test]
    fn test_essentials_cover_everything() {
        // B'D' + BD: both prime implicants are essential.
        let (primes, selection) = select(&[0, 2, 5, 7, 8, 10, 13, 15], 4);
        let essential: Vec<String> = selection
            .essentials()
            .iter()
            .map(|&ix| primes[ix].matrix_display().to_string())
            .collect();
        assert_eq!(essential, vec!["-0-0", "-1-1"]);
        assert!(selection.additions().is_empty());
        assert!(selection.is_complete());
    }

    #[test]
    fn test_essentials_then_greedy() {
        let (primes, selection) = select(&[0, 1, 2, 5, 6, 7, 8], 4);
        let display = |ixs: &[usize]| -> Vec<String> {
            ixs.iter()
                .map(|&ix| primes[ix].matrix_display().to_string())
                .collect()
        };

        // 8 is only covered by `-000`.
        assert_eq!(display(selection.essentials()), vec!["-000"]);
        assert_eq!(selection.uncovered_after_essentials(), &[1, 2, 5, 6, 7]);
        assert_eq!(display(selection.additions()), vec!["0-01", "0-10", "01-1"]);
        assert!(selection.is_complete());
    }

    #[test]
    fn test_incomplete_coverage() {
        // 3 isn't covered by any prime implicant.
        let primes = vec![Term::from_minterm(0, 2)];
        let minterms = [0, 3];
        let table = CoverageTable::new(&primes, &minterms);
        let selection = Selection::new(&table, &primes, &minterms);

        assert_eq!(selection.essentials(), &[0]);
        assert_eq!(selection.uncovered_after_essentials(), &[3]);
        assert_eq!(selection.uncovered(), &[3]);
        assert!(!selection.is_complete());
    }

    #[test]
    fn test_empty() {
        let (primes, selection) = select(&[], 2);
        assert!(primes.is_empty());
        assert!(selection.is_empty());
        assert!(selection.is_complete());
    }
}
