// Copyright (c) The qm-pos Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Quine-McCluskey minimization of a Boolean function given by its minterms, producing a
//! product-of-sums expression together with a textual trace of every step.
//!
//! ```
//! use qm_pos::{config::Limits, logic_function::LogicFunction, minimizer::Minimizer};
//!
//! let function = LogicFunction::parse("0, 1, 3", "ab", &Limits::default()).unwrap();
//! let solution = Minimizer::new(&function).solve();
//! assert_eq!(solution.expression().to_string(), "(A) * (B')");
//! ```

pub mod config;
pub mod errors;
pub mod logic_function;
pub mod minimizer;
#[cfg(any(test, feature = "proptest1"))]
mod proptest_helpers;
pub mod term;
pub mod trace;
pub mod variables;
