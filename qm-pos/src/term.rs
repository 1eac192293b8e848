// Copyright (c) The qm-pos Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::variables::Variables;
use itertools::Itertools;
use std::{
    collections::BTreeSet,
    fmt,
    hash::{Hash, Hasher},
};

/// A minterm or a combination of minterms.
///
/// `bits[i]` is the value of the `i`th variable (most significant first), with `None` standing
/// for a dash: a variable eliminated by combination. `covers` lists every original minterm the
/// term represents.
///
/// Two terms are equal if their bits are equal, whatever they cover.
#[derive(Clone, Debug)]
pub struct Term {
    bits: Vec<Option<bool>>,
    covers: BTreeSet<u32>,
}

impl Term {
    /// Creates the term for minterm `value` over `var_count` variables.
    pub fn from_minterm(value: u32, var_count: usize) -> Self {
        debug_assert!(
            u64::from(value) < 1_u64 << var_count,
            "minterm {} must be in range 0..2^{}",
            value,
            var_count
        );
        let bits = (0..var_count)
            .rev()
            .map(|shift| Some((u64::from(value) >> shift) & 1 == 1))
            .collect();
        Self {
            bits,
            covers: BTreeSet::from([value]),
        }
    }

    fn from_combination(bits: Vec<Option<bool>>, covers: BTreeSet<u32>) -> Self {
        Self { bits, covers }
    }

    #[inline]
    pub fn bits(&self) -> &[Option<bool>] {
        &self.bits
    }

    #[inline]
    pub fn covers(&self) -> &BTreeSet<u32> {
        &self.covers
    }

    #[inline]
    pub fn var_count(&self) -> usize {
        self.bits.len()
    }

    /// Returns the number of `1` bits.
    pub fn ones(&self) -> usize {
        self.bits.iter().filter(|&&bit| bit == Some(true)).count()
    }

    /// Returns the decimal value of this term, or `None` if it contains a dash.
    pub fn value(&self) -> Option<u32> {
        self.bits.iter().try_fold(0_u32, |acc, &bit| {
            bit.map(|bit| (acc << 1) | u32::from(bit))
        })
    }

    /// Combines two terms that differ in exactly one position.
    ///
    /// The result has a dash at the differing position and covers the union of both terms.
    /// Dashes are compared like any other symbol, so two dashes at the same position match.
    pub fn combine(&self, other: &Term) -> Option<Term> {
        debug_assert_eq!(
            self.var_count(),
            other.var_count(),
            "terms must have the same width"
        );

        let mut differences = self
            .bits
            .iter()
            .zip(&other.bits)
            .positions(|(c, d)| c != d);
        let diff_ix = differences.next()?;
        if differences.next().is_some() {
            return None;
        }

        let mut bits = self.bits.clone();
        bits[diff_ix] = None;
        let covers = self.covers.union(&other.covers).copied().collect();
        Some(Term::from_combination(bits, covers))
    }

    /// Adds everything `other` covers to this term.
    pub fn merge_covers(&mut self, other: &Term) {
        debug_assert_eq!(self, other, "only identical terms are merged");
        self.covers.extend(other.covers.iter().copied());
    }

    /// Returns true if this term covers the minterm `value`.
    #[inline]
    pub fn matches(&self, value: u32) -> bool {
        self.covers.contains(&value)
    }

    /// Returns the literals of this term in product (SOP) form: `1` bits produce the plain
    /// variable, `0` bits the complemented one. Dashes produce nothing.
    pub fn literals<'a>(&'a self, variables: &'a Variables) -> impl Iterator<Item = Literal> + 'a {
        self.bits
            .iter()
            .enumerate()
            .filter_map(move |(ix, &bit)| bit.map(|bit| Literal::new(variables.name(ix), !bit)))
    }

    #[inline]
    pub fn matrix_display(&self) -> TermMatrixDisplay<'_> {
        TermMatrixDisplay::new(self)
    }

    #[inline]
    pub fn literal_display<'a>(&'a self, variables: &'a Variables) -> TermLiteralDisplay<'a> {
        TermLiteralDisplay::new(self, variables)
    }
}

impl PartialEq for Term {
    fn eq(&self, other: &Self) -> bool {
        self.bits == other.bits
    }
}

impl Eq for Term {}

impl Hash for Term {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bits.hash(state);
    }
}

/// A variable, possibly complemented.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Literal {
    pub name: char,
    pub complemented: bool,
}

impl Literal {
    #[inline]
    pub fn new(name: char, complemented: bool) -> Self {
        Self { name, complemented }
    }

    #[inline]
    pub fn complement(self) -> Self {
        Self::new(self.name, !self.complemented)
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.complemented {
            true => write!(f, "{}'", self.name),
            false => write!(f, "{}", self.name),
        }
    }
}

/// Displays the bits of a term, e.g. `01-1`.
pub struct TermMatrixDisplay<'a> {
    term: &'a Term,
}

impl<'a> TermMatrixDisplay<'a> {
    pub fn new(term: &'a Term) -> Self {
        Self { term }
    }
}

impl<'a> fmt::Display for TermMatrixDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for &bit in &self.term.bits {
            write!(f, "{}", char_for_bit(bit))?;
        }
        Ok(())
    }
}

/// Displays a term as a product of literals, e.g. `A'BD`.
///
/// A term made only of dashes displays as the empty string.
pub struct TermLiteralDisplay<'a> {
    term: &'a Term,
    variables: &'a Variables,
}

impl<'a> TermLiteralDisplay<'a> {
    pub fn new(term: &'a Term, variables: &'a Variables) -> Self {
        Self { term, variables }
    }
}

impl<'a> fmt::Display for TermLiteralDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for literal in self.term.literals(self.variables) {
            write!(f, "{}", literal)?;
        }
        Ok(())
    }
}

#[inline]
fn char_for_bit(bit: Option<bool>) -> char {
    match bit {
        Some(true) => '1',
        Some(false) => '0',
        None => '-',
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Limits;
    use proptest::prelude::*;

    fn abcd() -> Variables {
        Variables::new("ABCD", &Limits::default()).unwrap()
    }

    #[test]
    fn test_from_minterm() {
        let term = Term::from_minterm(5, 4);
        assert_eq!(term.matrix_display().to_string(), "0101");
        assert_eq!(term.ones(), 2);
        assert_eq!(term.value(), Some(5));
        assert!(term.matches(5));
        assert!(!term.matches(4));
    }

    #[test]
    fn test_combine() {
        let a = Term::from_minterm(0b0101, 4);
        let b = Term::from_minterm(0b0111, 4);
        let ab = a.combine(&b).unwrap();
        assert_eq!(ab.matrix_display().to_string(), "01-1");
        assert_eq!(ab.covers(), &BTreeSet::from([5, 7]));
        assert_eq!(ab.value(), None);

        // Two differences.
        let c = Term::from_minterm(0b0110, 4);
        assert_eq!(a.combine(&c), None);
        // No difference.
        assert_eq!(a.combine(&a.clone()), None);

        // Dashes at the same position compare equal.
        let cd = Term::from_minterm(0b1101, 4)
            .combine(&Term::from_minterm(0b1111, 4))
            .unwrap();
        let abcd = ab.combine(&cd).unwrap();
        assert_eq!(abcd.matrix_display().to_string(), "-1-1");
        assert_eq!(abcd.covers(), &BTreeSet::from([5, 7, 13, 15]));
    }

    #[test]
    fn test_equality_ignores_covers() {
        let mut a = Term::from_minterm(0, 3)
            .combine(&Term::from_minterm(1, 3))
            .unwrap();
        let b = Term::from_combination(vec![Some(false), Some(false), None], BTreeSet::from([9]));
        assert_eq!(a, b);
        a.merge_covers(&b);
        assert_eq!(a.covers(), &BTreeSet::from([0, 1, 9]));
    }

    #[test]
    fn test_literal_display() {
        let variables = abcd();
        let term = Term::from_minterm(0b0101, 4)
            .combine(&Term::from_minterm(0b0111, 4))
            .unwrap();
        assert_eq!(term.literal_display(&variables).to_string(), "A'BD");

        let all_dashes = Term::from_combination(vec![None; 4], BTreeSet::from([0]));
        assert_eq!(all_dashes.literal_display(&variables).to_string(), "");
    }

    proptest! {
        #[test]
        fn proptest_combine_one_difference(value in 0_u32..64, flip in 0_usize..6) {
            let a = Term::from_minterm(value, 6);
            let b = Term::from_minterm(value ^ (1 << (5 - flip)), 6);
            let combined = a.combine(&b).expect("terms differ in one bit");

            let expected_covers: BTreeSet<_> = a.covers().union(b.covers()).copied().collect();
            prop_assert_eq!(combined.covers(), &expected_covers);
            for ix in 0..6 {
                if ix == flip {
                    prop_assert_eq!(combined.bits()[ix], None);
                } else {
                    prop_assert_eq!(combined.bits()[ix], a.bits()[ix]);
                    prop_assert_eq!(combined.bits()[ix], b.bits()[ix]);
                }
            }
        }

        #[test]
        fn proptest_combine_many_differences(a in 0_u32..64, b in 0_u32..64) {
            prop_assume!((a ^ b).count_ones() != 1);
            prop_assert_eq!(Term::from_minterm(a, 6).combine(&Term::from_minterm(b, 6)), None);
        }
    }
}
