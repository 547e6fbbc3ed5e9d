use gitnorm_cli::cli::NormalizeArgs;
use gitnorm_core::logging;

fn main() {
    // Initialize logging as early as possible; stdout carries the result.
    logging::init();

    if let Err(err) = NormalizeArgs::run_from_args() {
        eprintln!("git-url-norm error: {:#}", err);
        std::process::exit(1);
    }
}
