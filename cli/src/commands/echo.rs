//! # kyntool Echo Command
//!
//! File: cli/src/commands/echo.rs
//!
//! Implements `kyntool echo`, which prints its words joined by a separator.
//! Words that begin with `-` must follow `--`.
//!
//! ```bash
//! kyntool echo a b c --separator ,
//! # a,b,c
//! ```
//!
use crate::commands::shared;
use crate::core::error::Result;
use crate::core::subcommand::{Invocation, Subcommand};
use clap::{Args, Command};
use std::io::Write;

/// Arguments accepted by `kyntool echo`.
#[derive(Args, Debug, Clone, PartialEq)]
pub struct EchoArgs {
    /// Words to print
    #[arg(value_name = "WORDS")]
    pub words: Vec<String>,

    /// Text placed between words
    #[arg(short, long, default_value = " ")]
    pub separator: String,

    /// Print in upper case
    #[arg(short, long)]
    pub upper: bool,

    /// Do not print the trailing newline
    #[arg(short = 'n', long)]
    pub no_newline: bool,
}

pub static COMMAND: EchoCommand = EchoCommand;

pub struct EchoCommand;

impl Subcommand for EchoCommand {
    fn fragment(&self) -> Command {
        EchoArgs::augment_args(Command::new("echo").about("Print words to standard output"))
    }

    fn run(&self, invocation: &Invocation<'_>) -> Result<()> {
        let args: EchoArgs = invocation.args()?;
        echo(&args, &mut std::io::stdout().lock())
    }
}

fn echo(args: &EchoArgs, out: &mut impl Write) -> Result<()> {
    let text = shared::apply_case(&args.words.join(&args.separator), args.upper);
    shared::write_text(out, &text, !args.no_newline)
}
