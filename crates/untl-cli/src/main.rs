use untl_core::logging;

mod cli;

fn main() {
    // Initialize logging as early as possible.
    if let Err(err) = logging::init_logging() {
        eprintln!("untl: warning: {:#}", err);
    }

    let code = cli::run_from_args(std::env::args_os().collect());
    std::process::exit(code);
}
