// Copyright (c) The qm-pos Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

mod command;

use clap::Parser;
use color_eyre::Result;
use command::QmTraceApp;

fn main() -> Result<()> {
    color_eyre::install()?;
    let app = QmTraceApp::parse();
    app.exec()
}
