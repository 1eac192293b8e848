// Copyright (c) The qm-pos Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::term::Term;
use std::collections::HashMap;

/// Terms bucketed by their number of `1` bits: bucket `k` holds every term with exactly `k` ones.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Groups {
    buckets: Vec<Bucket>,
}

impl Groups {
    /// Creates `var_count + 1` empty buckets.
    pub fn new(var_count: usize) -> Self {
        Self {
            buckets: vec![Bucket::default(); var_count + 1],
        }
    }

    /// Buckets `terms` by their number of ones, keeping input order within each bucket.
    ///
    /// Terms are pushed as-is: no merging happens here, so the same minterm given twice shows up
    /// twice.
    pub fn group(terms: impl IntoIterator<Item = Term>, var_count: usize) -> Self {
        let mut groups = Self::new(var_count);
        for term in terms {
            let ones = term.ones();
            groups.buckets[ones].push(term);
        }
        groups
    }

    #[inline]
    pub fn buckets(&self) -> &[Bucket] {
        &self.buckets
    }

    #[inline]
    pub fn bucket(&self, ones: usize) -> &Bucket {
        &self.buckets[ones]
    }

    #[inline]
    pub(super) fn bucket_mut(&mut self, ones: usize) -> &mut Bucket {
        &mut self.buckets[ones]
    }

    /// Returns the total number of terms across all buckets.
    pub fn term_count(&self) -> usize {
        self.buckets.iter().map(Bucket::len).sum()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(Bucket::is_empty)
    }
}

/// An ordered list of terms with an index from bits to position.
///
/// Inserting a term whose bits are already present merges its covers into the existing term
/// instead of adding a second copy. The first term inserted with a given bit pattern keeps its
/// position.
#[derive(Clone, Debug, Default)]
pub struct Bucket {
    terms: Vec<Term>,
    positions: HashMap<Vec<Option<bool>>, usize>,
}

impl Bucket {
    /// Inserts `term`, or merges its covers into the equal term already present.
    ///
    /// Returns true if the term was new.
    pub fn insert_or_merge(&mut self, term: Term) -> bool {
        match self.positions.get(term.bits()) {
            Some(&ix) => {
                self.terms[ix].merge_covers(&term);
                false
            }
            None => {
                self.positions.insert(term.bits().to_vec(), self.terms.len());
                self.terms.push(term);
                true
            }
        }
    }

    /// Appends `term` even if an equal term is already present.
    fn push(&mut self, term: Term) {
        self.positions
            .entry(term.bits().to_vec())
            .or_insert(self.terms.len());
        self.terms.push(term);
    }

    #[inline]
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

impl PartialEq for Bucket {
    fn eq(&self, other: &Self) -> bool {
        self.terms == other.terms
    }
}

impl Eq for Bucket {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_group() {
        let terms = [0, 1, 2, 5, 6, 7].map(|value| Term::from_minterm(value, 3));
        let groups = Groups::group(terms, 3);

        let values: Vec<Vec<u32>> = groups
            .buckets()
            .iter()
            .map(|bucket| bucket.terms().iter().filter_map(Term::value).collect())
            .collect();
        assert_eq!(values, vec![vec![0], vec![1, 2], vec![5, 6], vec![7]]);
        assert_eq!(groups.term_count(), 6);
    }

    #[test]
    fn test_group_keeps_duplicates() {
        let terms = [3, 3].map(|value| Term::from_minterm(value, 2));
        let groups = Groups::group(terms, 2);
        assert_eq!(groups.bucket(2).len(), 2);
    }

    #[test]
    fn test_insert_or_merge() {
        let t = |a, b| Term::from_minterm(a, 4).combine(&Term::from_minterm(b, 4)).unwrap();
        // Both paths produce `-1-1`.
        let first = t(5, 7).combine(&t(13, 15)).unwrap();
        let second = t(5, 13).combine(&t(7, 15)).unwrap();
        let other = t(0, 1);

        let mut bucket = Bucket::default();
        assert!(bucket.insert_or_merge(first));
        assert!(bucket.insert_or_merge(other));
        assert!(!bucket.insert_or_merge(second));

        assert_eq!(bucket.len(), 2);
        assert_eq!(bucket.terms()[0].matrix_display().to_string(), "-1-1");
        assert_eq!(
            bucket.terms()[0].covers(),
            &BTreeSet::from([5, 7, 13, 15])
        );
    }
}
