//! the args for running tinyc

use std::path::{Path, PathBuf};
use tinyc_cli_common::LoggingArgs;

/// The args struct
#[derive(Debug, clap::Parser)]
#[clap(author, version, about = "Parses tinyc source code and prints its syntax tree")]
pub struct Args {
    #[command(flatten)]
    logging: LoggingArgs,

    /// The source file to parse. A built-in sample program is parsed if omitted.
    #[clap(value_name = "source file", value_hint = clap::ValueHint::FilePath)]
    path: Option<PathBuf>,

    /// Print every scanned token before parsing
    #[clap(long)]
    pub tokens: bool,
}

impl Args {
    /// The source file to parse, if one was given
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn logging(&self) -> &LoggingArgs {
        &self.logging
    }
}
