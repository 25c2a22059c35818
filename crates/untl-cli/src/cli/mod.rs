//! CLI for `untl`, `whle` and `repeat`.
//!
//! All three names share this parser; the name the binary was started under
//! only changes the default run mode.

mod output;

use clap::Parser;
use std::ffi::{OsStr, OsString};
use std::time::Duration;
use untl_core::config::{Overrides, RetryConfig};
use untl_core::invoke::Invocation;
use untl_core::mode::RunMode;
use untl_core::retry::RetryLoop;
use untl_core::timing;

/// Help, version and normal completion.
pub const EXIT_OK: i32 = 0;
/// Bad options or no command.
pub const EXIT_USAGE: i32 = 1;

/// Rerun a command until (or while) it returns a given exit status.
#[derive(Debug, Parser)]
#[command(name = "untl")]
#[command(
    about = "Run a command repeatedly until (or while) it returns a given exit status",
    long_about = None,
    after_help = "Started as `whle` the default mode is --while; started as `repeat` it is --repeat.",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Cli {
    /// Print help and exit.
    #[arg(short, long)]
    pub help: bool,

    /// Print version and exit.
    #[arg(short = 'v', long)]
    pub version: bool,

    /// Seconds to wait between attempts, fractions allowed [default: 1].
    #[arg(short, long, value_name = "SECONDS", value_parser = timing::parse_interval)]
    pub interval: Option<Duration>,

    /// Give up after N attempts; 0 means no limit [default: 0].
    #[arg(short, long, value_name = "N")]
    pub limit: Option<u64>,

    /// Exit status to compare against [default: 0].
    #[arg(short, long, value_name = "N")]
    pub retval: Option<u8>,

    /// Rerun while the command returns the target status.
    #[arg(short = 'w', long = "while", conflicts_with_all = ["until", "repeat"])]
    pub run_while: bool,

    /// Rerun until the command returns the target status.
    #[arg(short, long, conflicts_with = "repeat")]
    pub until: bool,

    /// Rerun regardless of status; combine with --limit.
    #[arg(long)]
    pub repeat: bool,

    /// Command to run, followed by its arguments.
    #[arg(trailing_var_arg = true, value_name = "COMMAND")]
    pub command: Vec<OsString>,
}

impl Cli {
    /// Mode picked by an explicit flag, if any.
    pub fn mode_flag(&self) -> Option<RunMode> {
        if self.run_while {
            Some(RunMode::While)
        } else if self.until {
            Some(RunMode::Until)
        } else if self.repeat {
            Some(RunMode::Repeat)
        } else {
            None
        }
    }

    pub fn overrides(&self) -> Overrides {
        Overrides {
            interval: self.interval,
            limit: self.limit,
            retval: self.retval,
            mode: self.mode_flag(),
        }
    }

    /// Final settings for this run: flags over built-in defaults, with the
    /// mode inferred from `argv0` when no flag picks one.
    pub fn retry_config(&self, argv0: &OsStr) -> RetryConfig {
        RetryConfig::resolve(&self.overrides(), RunMode::from_program_name(argv0))
    }
}

/// Parse `args` (including `argv[0]`), run, and return the process exit code.
pub fn run_from_args(args: Vec<OsString>) -> i32 {
    let argv0 = args.first().cloned().unwrap_or_default();
    let progname = output::program_name(&argv0);

    let cli = match Cli::try_parse_from(args.iter()) {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return EXIT_USAGE;
        }
    };

    dispatch(&cli, &argv0, &progname)
}

fn dispatch(cli: &Cli, argv0: &OsStr, progname: &str) -> i32 {
    if cli.help {
        print!("{}", output::help_text(progname));
        return EXIT_OK;
    }
    if cli.version {
        println!("{}", output::version_text(progname));
        return EXIT_OK;
    }

    let Some(invocation) = Invocation::from_argv(cli.command.iter().cloned()) else {
        eprintln!("{}: error: no command provided", progname);
        return EXIT_USAGE;
    };

    let retry_cfg = cli.retry_config(argv0);
    tracing::debug!("resolved config: {:?}", retry_cfg);
    tracing::info!(
        command = %invocation,
        mode = %retry_cfg.mode,
        retval = retry_cfg.retval,
        limit = retry_cfg.limit,
        interval_ms = retry_cfg.interval.as_millis() as u64,
        "{} starting",
        progname
    );

    match RetryLoop::new(&retry_cfg, invocation).run() {
        Ok(summary) => {
            tracing::info!(
                attempts = summary.attempts,
                status = summary.last_status.code(),
                "done: {}",
                summary.reason
            );
            EXIT_OK
        }
        Err(err) => {
            eprintln!("{}: error: {}", progname, err);
            err.exit_code()
        }
    }
}

#[cfg(test)]
mod tests;
