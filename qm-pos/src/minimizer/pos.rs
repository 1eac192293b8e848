// Copyright (c) The qm-pos Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::selection::Selection;
use crate::{logic_function::LogicFunction, term::Literal, term::Term};
use itertools::{Itertools, Position};
use std::fmt;

/// The minimized product-of-sums expression.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PosExpression {
    /// Every minterm is present: the function is a tautology and has no maxterms.
    NoMaxterms,
    /// No prime implicant was selected, e.g. because there are no minterms.
    NoImplicants,
    /// One sum clause per selected prime implicant.
    Product(Vec<Clause>),
}

impl PosExpression {
    /// Builds the expression from the selected prime implicants.
    ///
    /// Each implicant becomes a sum of its literals with the polarity inverted: a `1` bit gives
    /// the complemented variable and a `0` bit the plain one.
    pub fn new(function: &LogicFunction, primes: &[Term], selection: &Selection) -> Self {
        if function.maxterms().is_empty() {
            return Self::NoMaxterms;
        }
        if selection.is_empty() {
            return Self::NoImplicants;
        }

        let clauses = selection
            .selected()
            .iter()
            .map(|&ix| Clause::new(&primes[ix], function))
            .collect();
        Self::Product(clauses)
    }

    /// Returns the clauses, or `None` for the degenerate cases.
    pub fn clauses(&self) -> Option<&[Clause]> {
        match self {
            Self::Product(clauses) => Some(clauses),
            Self::NoMaxterms | Self::NoImplicants => None,
        }
    }
}

impl fmt::Display for PosExpression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::NoMaxterms => write!(f, "no maxterms found"),
            Self::NoImplicants => write!(f, "no essential prime implicants"),
            Self::Product(clauses) => {
                write!(f, "{}", clauses.iter().format(" * "))
            }
        }
    }
}

/// A sum of literals, e.g. `(A + B')`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Clause {
    literals: Vec<Literal>,
}

impl Clause {
    fn new(term: &Term, function: &LogicFunction) -> Self {
        let literals = term
            .literals(function.variables())
            .map(Literal::complement)
            .collect();
        Self { literals }
    }

    #[inline]
    pub fn literals(&self) -> &[Literal] {
        &self.literals
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "(")?;
        for literal in self.literals.iter().with_position() {
            match literal {
                Position::First(literal) | Position::Middle(literal) => {
                    write!(f, "{} + ", literal)?;
                }
                Position::Last(literal) | Position::Only(literal) => {
                    write!(f, "{}", literal)?;
                }
            }
        }
        write!(f, ")")
    }
}
