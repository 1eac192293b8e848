// Copyright (c) The qm-pos Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

mod chart;
mod groups;
mod pos;
mod primes;
mod selection;

pub use chart::*;
pub use groups::*;
pub use pos::*;
pub use primes::*;
pub use selection::*;

use crate::{
    logic_function::LogicFunction,
    term::Term,
    trace::{ChartDisplay, CombinationDisplay, GroupingDisplay, ReportDisplay, SelectionDisplay},
};
use log::debug;

/// Runs the Quine-McCluskey procedure over a single function.
///
/// A minimizer holds no state between runs; construct one per function.
#[derive(Copy, Clone, Debug)]
pub struct Minimizer<'a> {
    function: &'a LogicFunction,
}

impl<'a> Minimizer<'a> {
    pub fn new(function: &'a LogicFunction) -> Self {
        Self { function }
    }

    /// Runs all four phases: grouping, combination, chart construction and selection.
    pub fn solve(self) -> Solution<'a> {
        let function = self.function;
        let var_count = function.var_count();
        let minterms = function.minterms();
        debug!(
            "minimizing {} minterm(s) over variables {}",
            minterms.len(),
            function.variables()
        );

        let terms = minterms
            .iter()
            .map(|&value| Term::from_minterm(value, var_count));
        let groups = Groups::group(terms, var_count);
        let combination = Combination::new(groups);
        debug!(
            "found {} prime implicant(s) in {} round(s)",
            combination.primes().len(),
            combination.rounds().len()
        );

        let table = CoverageTable::new(combination.primes(), minterms);
        let selection = Selection::new(&table, combination.primes(), minterms);
        if !selection.is_complete() {
            debug!("minterms {:?} are not covered", selection.uncovered());
        }

        let expression = PosExpression::new(function, combination.primes(), &selection);
        debug!("POS expression: {}", expression);

        Solution {
            function,
            combination,
            table,
            selection,
            expression,
        }
    }
}

/// Everything computed by [`Minimizer::solve`].
#[derive(Clone, Debug)]
pub struct Solution<'a> {
    function: &'a LogicFunction,
    combination: Combination,
    table: CoverageTable,
    selection: Selection,
    expression: PosExpression,
}

impl<'a> Solution<'a> {
    #[inline]
    pub fn function(&self) -> &'a LogicFunction {
        self.function
    }

    /// Returns the minterms grouped by number of ones.
    #[inline]
    pub fn groups(&self) -> &Groups {
        &self.combination.rounds()[0]
    }

    #[inline]
    pub fn combination(&self) -> &Combination {
        &self.combination
    }

    #[inline]
    pub fn primes(&self) -> &[Term] {
        self.combination.primes()
    }

    #[inline]
    pub fn table(&self) -> &CoverageTable {
        &self.table
    }

    #[inline]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Returns the selected prime implicants, essential ones first.
    pub fn selected_primes(&self) -> impl Iterator<Item = &Term> + '_ {
        self.selection
            .selected()
            .iter()
            .map(move |&ix| &self.primes()[ix])
    }

    #[inline]
    pub fn expression(&self) -> &PosExpression {
        &self.expression
    }

    #[inline]
    pub fn grouping_display(&self) -> GroupingDisplay<'_> {
        GroupingDisplay::new(self)
    }

    #[inline]
    pub fn combination_display(&self) -> CombinationDisplay<'_> {
        CombinationDisplay::new(self)
    }

    #[inline]
    pub fn chart_display(&self) -> ChartDisplay<'_> {
        ChartDisplay::new(self)
    }

    #[inline]
    pub fn selection_display(&self) -> SelectionDisplay<'_> {
        SelectionDisplay::new(self)
    }

    #[inline]
    pub fn report_display(&self) -> ReportDisplay<'_> {
        ReportDisplay::new(self)
    }
}
