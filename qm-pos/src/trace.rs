// Copyright (c) The qm-pos Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Text renderings of each step of a minimization.

use crate::{
    minimizer::{PosExpression, Solution},
    term::Term,
};
use itertools::Itertools;
use std::fmt;

const IMPLICANT_WIDTH: usize = 20;
const COLUMN_WIDTH: usize = 4;

/// Lists the minterms grouped by their number of ones.
pub struct GroupingDisplay<'a> {
    solution: &'a Solution<'a>,
}

impl<'a> GroupingDisplay<'a> {
    pub fn new(solution: &'a Solution<'a>) -> Self {
        Self { solution }
    }
}

impl<'a> fmt::Display for GroupingDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (ones, bucket) in self.solution.groups().buckets().iter().enumerate() {
            if bucket.is_empty() {
                continue;
            }
            writeln!(f, "Group {} ({} ones):", ones, ones)?;
            for term in bucket.terms() {
                writeln!(
                    f,
                    "  {} = {}",
                    ValueDisplay(term),
                    term.matrix_display()
                )?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Lists the terms produced by each combination round, then the prime implicants.
pub struct CombinationDisplay<'a> {
    solution: &'a Solution<'a>,
}

impl<'a> CombinationDisplay<'a> {
    pub fn new(solution: &'a Solution<'a>) -> Self {
        Self { solution }
    }
}

impl<'a> fmt::Display for CombinationDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let variables = self.solution.function().variables();

        for (round, groups) in self.solution.combination().rounds().iter().enumerate().skip(1) {
            writeln!(f, "Iteration {}:", round)?;
            for (ones, bucket) in groups.buckets().iter().enumerate() {
                if bucket.is_empty() {
                    continue;
                }
                writeln!(f, "  Group {}:", ones)?;
                for term in bucket.terms() {
                    writeln!(
                        f,
                        "    {} (from: {})",
                        term.matrix_display(),
                        CoversDisplay(term)
                    )?;
                }
                writeln!(f)?;
            }
        }

        writeln!(f, "Prime Implicants:")?;
        for prime in self.solution.primes() {
            writeln!(
                f,
                "  {} = {} (covers: {})",
                prime.matrix_display(),
                prime.literal_display(variables),
                CoversDisplay(prime)
            )?;
        }
        Ok(())
    }
}

/// Renders the prime implicant chart as a fixed-width grid: one row per prime implicant, one
/// column per minterm.
pub struct ChartDisplay<'a> {
    solution: &'a Solution<'a>,
}

impl<'a> ChartDisplay<'a> {
    pub fn new(solution: &'a Solution<'a>) -> Self {
        Self { solution }
    }
}

impl<'a> fmt::Display for ChartDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let variables = self.solution.function().variables();
        let columns = self.solution.table().columns();

        write!(f, "{:<width$} | ", "Prime Implicant", width = IMPLICANT_WIDTH)?;
        for column in columns {
            write!(f, "{:<width$}", column.minterm, width = COLUMN_WIDTH)?;
        }
        writeln!(f)?;

        writeln!(
            f,
            "{}-|-{}",
            "-".repeat(IMPLICANT_WIDTH),
            "-".repeat(columns.len() * COLUMN_WIDTH)
        )?;

        for (prime_ix, prime) in self.solution.primes().iter().enumerate() {
            // Padding only applies to pre-rendered strings.
            let literal = prime.literal_display(variables).to_string();
            write!(f, "{:<width$} | ", literal, width = IMPLICANT_WIDTH)?;
            for column in columns {
                match column.primes.contains(&prime_ix) {
                    true => write!(f, " X  ")?,
                    false => write!(f, "    ")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Describes which prime implicants were selected and why.
pub struct SelectionDisplay<'a> {
    solution: &'a Solution<'a>,
}

impl<'a> SelectionDisplay<'a> {
    pub fn new(solution: &'a Solution<'a>) -> Self {
        Self { solution }
    }

    fn write_primes(&self, f: &mut fmt::Formatter, prime_ixs: &[usize]) -> fmt::Result {
        let variables = self.solution.function().variables();
        for &ix in prime_ixs {
            writeln!(f, "- {}", self.solution.primes()[ix].literal_display(variables))?;
        }
        Ok(())
    }
}

impl<'a> fmt::Display for SelectionDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let variables = self.solution.function().variables();
        let primes = self.solution.primes();
        let selection = self.solution.selection();

        writeln!(f, "Essential Prime Implicants:")?;
        if selection.essentials().is_empty() {
            writeln!(f, "no essential prime implicants found")?;
        } else {
            self.write_primes(f, selection.essentials())?;
        }

        if !selection.uncovered_after_essentials().is_empty() {
            writeln!(f)?;
            writeln!(
                f,
                "Not all minterms are covered by the essential prime implicants."
            )?;
            writeln!(
                f,
                "Uncovered minterms: {}",
                ListDisplay(selection.uncovered_after_essentials())
            )?;
            for &ix in selection.additions() {
                writeln!(
                    f,
                    "Added additional prime implicant: {}",
                    primes[ix].literal_display(variables)
                )?;
            }
            if !selection.is_complete() {
                writeln!(
                    f,
                    "Not fully covered. Uncovered minterms: {}",
                    ListDisplay(selection.uncovered())
                )?;
            }
        }

        writeln!(f)?;
        writeln!(f, "Final Prime Implicants:")?;
        self.write_primes(f, selection.selected())
    }
}

/// The complete step-by-step report.
pub struct ReportDisplay<'a> {
    solution: &'a Solution<'a>,
}

impl<'a> ReportDisplay<'a> {
    pub fn new(solution: &'a Solution<'a>) -> Self {
        Self { solution }
    }
}

impl<'a> fmt::Display for ReportDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let solution = self.solution;
        let function = solution.function();

        writeln!(f, "--- QUINE-MCCLUSKEY MINIMIZATION STEPS ---")?;
        writeln!(f)?;
        writeln!(f, "Variables: {}", function.variables())?;
        writeln!(f, "Minterms: {}", ListDisplay(function.minterms()))?;
        writeln!(f)?;

        writeln!(f, "Grouping minterms based on the number of ones.")?;
        write!(f, "{}", solution.grouping_display())?;
        writeln!(f)?;
        writeln!(f, "Pairwise simplification and formation of prime implicants.")?;
        write!(f, "{}", solution.combination_display())?;
        writeln!(f)?;
        writeln!(f, "Prime implicant table creation")?;
        write!(f, "{}", solution.chart_display())?;
        writeln!(f)?;
        writeln!(f, "Selection of essential prime implicants")?;
        write!(f, "{}", solution.selection_display())?;
        writeln!(f)?;

        writeln!(f, "MINIMIZED EXPRESSION (POS)")?;
        match solution.expression() {
            PosExpression::Product(_) => {
                writeln!(f, "POS Expression: {}", solution.expression())
            }
            sentinel => writeln!(f, "{}", sentinel),
        }
    }
}

/// `[a, b, c]`
struct ListDisplay<'a>(&'a [u32]);

impl<'a> fmt::Display for ListDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{}]", self.0.iter().format(", "))
    }
}

/// The minterms a term covers, as `[a, b, c]`.
struct CoversDisplay<'a>(&'a Term);

impl<'a> fmt::Display for CoversDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{}]", self.0.covers().iter().format(", "))
    }
}

/// The decimal value of an original minterm.
struct ValueDisplay<'a>(&'a Term);

impl<'a> fmt::Display for ValueDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.0.value() {
            Some(value) => write!(f, "{}", value),
            None => write!(f, "{}", CoversDisplay(self.0)),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{config::Limits, logic_function::LogicFunction, minimizer::Minimizer};

    fn function(minterms: &str, variables: &str) -> LogicFunction {
        LogicFunction::parse(minterms, variables, &Limits::default()).unwrap()
    }

    #[test]
    fn test_small_trace() {
        let function = function("0,1,3", "AB");
        let solution = Minimizer::new(&function).solve();

        assert_eq!(
            solution.grouping_display().to_string(),
            "Group 0 (0 ones):\n  0 = 00\n\n\
             Group 1 (1 ones):\n  1 = 01\n\n\
             Group 2 (2 ones):\n  3 = 11\n\n"
        );
        assert_eq!(
            solution.combination_display().to_string(),
            "Iteration 1:\n\
             \x20 Group 0:\n    0- (from: [0, 1])\n\n\
             \x20 Group 1:\n    -1 (from: [1, 3])\n\n\
             Prime Implicants:\n\
             \x20 0- = A' (covers: [0, 1])\n\
             \x20 -1 = B (covers: [1, 3])\n"
        );
        assert_eq!(
            solution.chart_display().to_string(),
            "Prime Implicant      | 0   1   3   \n\
             ---------------------|-------------\n\
             A'                   |  X   X      \n\
             B                    |      X   X  \n"
        );
        assert_eq!(
            solution.selection_display().to_string(),
            "Essential Prime Implicants:\n- A'\n- B\n\n\
             Final Prime Implicants:\n- A'\n- B\n"
        );
    }

    #[test]
    fn test_greedy_trace() {
        let function = function("0,1,2,5,6,7", "ABC");
        let solution = Minimizer::new(&function).solve();

        assert_eq!(
            solution.selection_display().to_string(),
            "Essential Prime Implicants:\n\
             no essential prime implicants found\n\
             \n\
             Not all minterms are covered by the essential prime implicants.\n\
             Uncovered minterms: [0, 1, 2, 5, 6, 7]\n\
             Added additional prime implicant: A'B'\n\
             Added additional prime implicant: BC'\n\
             Added additional prime implicant: AC\n\
             \n\
             Final Prime Implicants:\n- A'B'\n- BC'\n- AC\n"
        );
    }

    #[test]
    fn test_report() {
        let function = function("0,1,3", "ab");
        let solution = Minimizer::new(&function).solve();
        let report = solution.report_display().to_string();

        assert!(report.starts_with(
            "--- QUINE-MCCLUSKEY MINIMIZATION STEPS ---\n\nVariables: AB\nMinterms: [0, 1, 3]\n\n"
        ));
        assert!(report.contains(&solution.chart_display().to_string()));
        assert!(report.ends_with("MINIMIZED EXPRESSION (POS)\nPOS Expression: (A) * (B')\n"));
    }

    #[test]
    fn test_report_sentinel() {
        let function = function("0,1,2,3", "AB");
        let solution = Minimizer::new(&function).solve();
        let report = solution.report_display().to_string();
        assert!(report.ends_with("MINIMIZED EXPRESSION (POS)\nno maxterms found\n"));
    }
}
