use crate::args::Args;
use crate::source::Source;
use clap::Parser;
use owo_colors::{OwoColorize, Stream};
use std::io;
use std::io::{stderr, stdout, Stderr, StderrLock, Stdout, StdoutLock};
use std::process::ExitCode;
use tinyc_parsing::lexer::Scanner;
use tinyc_parsing::parser::SyntacticParser;
use tinyc_parsing::tokenize;
use tracing::metadata::LevelFilter;
use tracing::{debug, info, trace, Level};
use tracing::Metadata;
use tracing_error::ErrorLayer;
use tracing_subscriber::fmt::{format, MakeWriter};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{Layer, Registry};

mod args;
mod source;

fn main() -> eyre::Result<ExitCode> {
    color_eyre::install()?;
    let args = Args::parse();
    init_logging(args.logging().log_level_filter())?;
    trace!("starting tinyc with args: {args:?}");
    debug!("tinyc version: {}", env!("CARGO_PKG_VERSION"));

    let source = Source::load(args.path())?;
    let src = source.text.as_str();

    println!("Source Code from: {}", source.origin);
    println!("--- Start ---");
    print!("{src}");
    if !src.ends_with('\n') {
        println!();
    }
    println!("--- End ---");

    let scanner = if args.tokens {
        println!("--- Tokens ---");
        for token in tokenize(src) {
            println!("{token}");
        }
        println!("--- End of Tokens ---");
        // the dump already reported every lexical problem
        Scanner::new(src).silenced()
    } else {
        Scanner::new(src)
    };

    info!("parsing program from {}", source.origin);
    match SyntacticParser::new(scanner).parse_program() {
        Ok(program) => {
            info!("parsing successful, {} function(s)", program.functions.len());
            println!("--- Abstract Syntax Tree ---");
            print!("{program}");
            println!("--- End of AST ---");
            Ok(ExitCode::SUCCESS)
        }
        Err(error) => {
            eprint!(
                "{} {}",
                "Parser Error:".if_supports_color(Stream::Stderr, |text| text.red()),
                error.report(src)
            );
            debug!("while parsing {}", error.non_terminal_path());
            Ok(ExitCode::FAILURE)
        }
    }
}

struct MyWriter {
    stdout: Stdout,
    stderr: Stderr,
}

enum StdioLock<'a> {
    Stdout(StdoutLock<'a>),
    Stderr(StderrLock<'a>),
}

impl<'a> io::Write for StdioLock<'a> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            StdioLock::Stdout(stdout) => stdout.write(buf),
            StdioLock::Stderr(stderr) => stderr.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            StdioLock::Stdout(stdout) => stdout.flush(),
            StdioLock::Stderr(stderr) => stderr.flush(),
        }
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        match self {
            StdioLock::Stdout(stdout) => stdout.write_all(buf),
            StdioLock::Stderr(stderr) => stderr.write_all(buf),
        }
    }
}

/// Warnings and errors go to stderr, everything else to stdout
impl<'a> MakeWriter<'a> for MyWriter {
    type Writer = StdioLock<'a>;

    fn make_writer(&'a self) -> Self::Writer {
        StdioLock::Stdout(self.stdout.lock())
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        if meta.level() <= &Level::WARN {
            StdioLock::Stderr(self.stderr.lock())
        } else {
            StdioLock::Stdout(self.stdout.lock())
        }
    }
}

fn init_logging(level_filter: LevelFilter) -> eyre::Result<()> {
    let registry = Registry::default()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format().without_time().with_target(false))
                .with_writer(MyWriter {
                    stdout: stdout(),
                    stderr: stderr(),
                })
                .with_filter(level_filter),
        )
        .with(ErrorLayer::default());

    tracing::subscriber::set_global_default(registry)?;

    Ok(())
}
