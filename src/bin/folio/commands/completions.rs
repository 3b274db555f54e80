//! `folio completions` command

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::CommandFactory;
use clap_complete::generate;

use crate::cli::{Cli, CompletionsArgs};

const BIN_NAME: &str = "folio";

pub fn execute(args: CompletionsArgs) -> Result<()> {
    let mut stdout = io::stdout().lock();
    generate(args.shell, &mut Cli::command(), BIN_NAME, &mut stdout);
    stdout
        .flush()
        .with_context(|| format!("failed to write {} completions", args.shell))
}
