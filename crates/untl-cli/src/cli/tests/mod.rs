//! CLI tests (multi-file: flag parsing, then end-to-end runs).

use super::{run_from_args, Cli, EXIT_OK, EXIT_USAGE};
use clap::Parser;
use std::ffi::OsString;

pub(super) fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).unwrap()
}

pub(super) fn run(args: &[&str]) -> i32 {
    run_from_args(args.iter().map(OsString::from).collect())
}

mod exit_codes;
