// Copyright (c) The qm-pos Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use thiserror::Error;

/// Errors produced while validating the input of a minimization.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("malformed minterm `{token}`: expected comma-separated non-negative integers")]
    MalformedMinterm { token: String },

    #[error("minterm {value} is out of range for {var_count} variable(s)")]
    MintermOutOfRange { value: i64, var_count: usize },

    #[error("invalid variables: {0}")]
    InvalidVariables(#[from] InvalidVariables),
}

/// Errors produced while validating variable names.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum InvalidVariables {
    #[error("no variables given")]
    Empty,

    #[error("{count} variables given, at most {max} are allowed")]
    TooMany { count: usize, max: usize },

    #[error("variable `{0}` is not a letter")]
    NotALetter(char),

    #[error("variable `{0}` appears more than once")]
    Duplicate(char),
}
