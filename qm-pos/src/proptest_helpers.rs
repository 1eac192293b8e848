// Copyright (c) The qm-pos Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{config::Limits, logic_function::LogicFunction, variables::Variables};
use proptest::prelude::*;

const VARIABLE_NAMES: &str = "ABCDEF";

impl Arbitrary for LogicFunction {
    /// The range of variable counts to generate.
    type Parameters = Option<(usize, usize)>;
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(params: Self::Parameters) -> Self::Strategy {
        let (min_vars, max_vars) = params.unwrap_or((1, VARIABLE_NAMES.len()));
        let max_vars = max_vars.min(VARIABLE_NAMES.len());
        (min_vars..=max_vars)
            .prop_flat_map(|var_count| {
                // One flag per row of the truth table.
                let rows = prop::collection::vec(any::<bool>(), 1_usize << var_count);
                (Just(var_count), rows)
            })
            .prop_map(|(var_count, rows)| {
                let variables = Variables::new(&VARIABLE_NAMES[..var_count], &Limits::default())
                    .expect("variable names are valid");
                let minterms = rows
                    .iter()
                    .enumerate()
                    .filter_map(|(value, &is_set)| is_set.then(|| value as u32));
                LogicFunction::new(minterms, variables).expect("minterms are in range")
            })
            .boxed()
    }
}
