// Copyright (c) The qm-pos Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use clap::{ArgEnum, Args, Parser, Subcommand};
use color_eyre::{eyre::WrapErr, Result};
use log::{info, LevelFilter};
use qm_pos::{config::Limits, logic_function::LogicFunction, minimizer::Minimizer};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

#[derive(Debug, Parser)]
#[clap(about = "Minimize a Boolean function to product-of-sums form with Quine-McCluskey")]
pub struct QmTraceApp {
    #[clap(subcommand)]
    command: QmTraceCommand,

    /// Log more detail to stderr (repeat for more)
    #[clap(long, short, parse(from_occurrences), global = true)]
    verbose: u8,
}

#[derive(Debug, Subcommand)]
pub enum QmTraceCommand {
    /// Print the step-by-step minimization report
    Solve {
        #[clap(flatten)]
        input: InputArgs,

        /// Print only one section of the report
        #[clap(long, arg_enum)]
        section: Option<Section>,
    },
    /// Print only the minimized POS expression
    Expression {
        #[clap(flatten)]
        input: InputArgs,
    },
}

#[derive(Args, Debug)]
pub struct InputArgs {
    /// Comma-separated minterms, e.g. "0,1,2,5"
    #[clap(long, short)]
    minterms: String,

    /// Variable letters, most significant first, e.g. "ABC"
    #[clap(long, short = 'x')]
    variables: String,

    /// Maximum number of variables accepted
    #[clap(long, default_value_t = Limits::DEFAULT_MAX_VARIABLES)]
    max_variables: usize,
}

#[derive(ArgEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Grouping,
    Combination,
    Chart,
    Selection,
    Expression,
}

impl QmTraceApp {
    pub fn exec(self) -> Result<()> {
        init_logger(self.verbose)?;
        self.command.exec()
    }
}

impl QmTraceCommand {
    pub fn exec(self) -> Result<()> {
        match self {
            Self::Solve { input, section } => {
                let function = input.to_function()?;
                let solution = Minimizer::new(&function).solve();
                match section {
                    None => print!("{}", solution.report_display()),
                    Some(Section::Grouping) => print!("{}", solution.grouping_display()),
                    Some(Section::Combination) => print!("{}", solution.combination_display()),
                    Some(Section::Chart) => print!("{}", solution.chart_display()),
                    Some(Section::Selection) => print!("{}", solution.selection_display()),
                    Some(Section::Expression) => println!("{}", solution.expression()),
                }
                Ok(())
            }
            Self::Expression { input } => {
                let function = input.to_function()?;
                let solution = Minimizer::new(&function).solve();
                println!("{}", solution.expression());
                Ok(())
            }
        }
    }
}

impl InputArgs {
    fn to_function(&self) -> Result<LogicFunction> {
        let limits = Limits::new().with_max_variables(self.max_variables);
        let function = LogicFunction::parse(&self.minterms, &self.variables, &limits)
            .wrap_err_with(|| {
                format!(
                    "invalid input (minterms: {:?}, variables: {:?})",
                    self.minterms, self.variables
                )
            })?;
        info!(
            "minimizing minterms {:?} over {}",
            function.minterms(),
            function.variables()
        );
        Ok(function)
    }
}

fn init_logger(verbose: u8) -> Result<()> {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;
    Ok(())
}
