// Copyright (c) The qm-pos Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::groups::{Bucket, Groups};
use crate::term::Term;
use itertools::Itertools;
use log::{debug, trace};

/// The result of repeatedly combining terms until nothing more combines.
#[derive(Clone, Debug)]
pub struct Combination {
    rounds: Vec<Groups>,
    primes: Vec<Term>,
}

impl Combination {
    /// Combines the terms in `initial` round by round, collecting prime implicants.
    ///
    /// In each round, every term of bucket `k` is tried against every term of bucket `k + 1`.
    /// Results go to bucket `k` of the next round, merging with an equal term if one is already
    /// there. Terms that combined with nothing during the round are prime implicants; they are
    /// collected bucket by bucket. The loop ends after the first round in which nothing combines.
    pub fn new(initial: Groups) -> Self {
        let mut rounds = vec![initial];
        let mut primes = Bucket::default();

        loop {
            let current = rounds.last().expect("rounds is never empty");
            let bucket_count = current.buckets().len();
            let mut next = Groups::new(bucket_count - 1);
            let mut combined: Vec<Vec<bool>> = current
                .buckets()
                .iter()
                .map(|bucket| vec![false; bucket.len()])
                .collect();
            let mut any_combined = false;

            for ones in 0..bucket_count {
                if ones + 1 < bucket_count {
                    let lower = current.bucket(ones).terms().iter().enumerate();
                    let upper = current.bucket(ones + 1).terms().iter().enumerate();
                    for ((lower_ix, lower), (upper_ix, upper)) in lower.cartesian_product(upper) {
                        if let Some(term) = lower.combine(upper) {
                            trace!(
                                "combined {} and {} into {}",
                                lower.matrix_display(),
                                upper.matrix_display(),
                                term.matrix_display()
                            );
                            debug_assert_eq!(term.ones(), ones, "combining removes a 1 bit");
                            combined[ones][lower_ix] = true;
                            combined[ones + 1][upper_ix] = true;
                            next.bucket_mut(ones).insert_or_merge(term);
                            any_combined = true;
                        }
                    }
                }

                // Every pair involving bucket `ones` has been tried by now.
                for (term, _) in current
                    .bucket(ones)
                    .terms()
                    .iter()
                    .zip(&combined[ones])
                    .filter(|(_, &was_combined)| !was_combined)
                {
                    primes.insert_or_merge(term.clone());
                }
            }

            debug!(
                "round {}: {} terms in, {} terms out, {} prime implicants so far",
                rounds.len(),
                current.term_count(),
                next.term_count(),
                primes.len()
            );

            if !any_combined {
                break;
            }
            rounds.push(next);
        }

        Self {
            rounds,
            primes: primes.terms().to_vec(),
        }
    }

    /// Returns the groups of every round that produced terms.
    ///
    /// `rounds()[0]` is the initial grouping and `rounds()[k]` holds the terms produced by
    /// round `k`.
    #[inline]
    pub fn rounds(&self) -> &[Groups] {
        &self.rounds
    }

    /// Returns the prime implicants in the order they were found.
    #[inline]
    pub fn primes(&self) -> &[Term] {
        &self.primes
    }

    #[inline]
    pub fn into_primes(self) -> Vec<Term> {
        self.primes
    }
}
