// SPDX-License-Identifier: GPL-3.0-only
// Copyright (C) 2025 Brian Hetro <whee@smaertness.net>

//! Command-line interface for kindle2md.
//!
//! This binary provides the `kindle2md` command for converting Bookcision
//! Kindle highlight exports from JSON to Markdown format.

use kindle2md::{parser, renderer};
use lexopt::prelude::*;
use snafu::{OptionExt, ensure, prelude::*};
use std::path::PathBuf;

struct Cli {
    input: PathBuf,
    output: Option<PathBuf>,
}

#[derive(Debug, Snafu)]
enum Error {
    #[snafu(display("failed to parse arguments: {source}"))]
    ParseArgs { source: lexopt::Error },

    #[snafu(display("an input file is required"))]
    MissingInput,

    #[snafu(display("expected at most an input and an output path"))]
    TooManyArguments,

    #[snafu(display("failed to read {}: {source}", path.display()))]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[snafu(display("failed to parse {}: {source}", path.display()))]
    ParseFile {
        path: PathBuf,
        source: parser::ParseError,
    },

    #[snafu(display("failed to render {}: {source}", path.display()))]
    RenderFile {
        path: PathBuf,
        source: renderer::RenderError,
    },

    #[snafu(display("failed to write {}: {source}", path.display()))]
    WriteFile {
        path: PathBuf,
        source: std::io::Error,
    },
}

fn print_help() {
    println!(
        "\
{name} {version}
Convert Bookcision Kindle highlight exports to Markdown

Bookcision (https://bookcision.readwise.io/) is a bookmarklet that exports
Kindle notes and highlights from read.amazon.com/notebook as JSON. This
command converts one export to a Markdown document.

Usage: {name} <INPUT> [OUTPUT]

Arguments:
  <INPUT>   Input JSON file exported by Bookcision
  [OUTPUT]  Output Markdown file; prints to stdout when omitted

Options:
  -h, --help     Print help
  -V, --version  Print version",
        name = env!("CARGO_PKG_NAME"),
        version = env!("CARGO_PKG_VERSION"),
    );
}

fn parse_args() -> Result<Cli, Error> {
    let mut positional = Vec::new();

    let mut parser = lexopt::Parser::from_env();
    while let Some(arg) = parser.next().context(ParseArgsSnafu)? {
        match arg {
            Short('h') | Long("help") => {
                print_help();
                std::process::exit(0);
            }
            Short('V') | Long("version") => {
                println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            Value(val) => positional.push(PathBuf::from(val)),
            _ => return Err(arg.unexpected()).context(ParseArgsSnafu),
        }
    }

    let mut positional = positional.into_iter();
    let input = positional.next().context(MissingInputSnafu)?;
    let output = positional.next();
    ensure!(positional.next().is_none(), TooManyArgumentsSnafu);

    Ok(Cli { input, output })
}

fn main() {
    if let Err(err) = run() {
        println!("{err}\n");
        print_help();
        std::process::exit(1);
    }
}

fn run() -> Result<(), Error> {
    let cli = parse_args()?;

    let json = std::fs::read_to_string(&cli.input).context(ReadFileSnafu { path: &cli.input })?;
    let export = parser::parse_export(&json).context(ParseFileSnafu { path: &cli.input })?;

    // Rendering completes before the destination is opened; a render
    // failure must leave any existing output file untouched.
    let markdown = renderer::render_export(&export, &renderer::RenderOptions::default())
        .context(RenderFileSnafu { path: &cli.input })?;

    match cli.output {
        Some(path) => std::fs::write(&path, &markdown).context(WriteFileSnafu { path: &path })?,
        None => println!("{markdown}"),
    }

    Ok(())
}
