use gitnorm_cli::cli::TableArgs;
use gitnorm_core::logging;

fn main() {
    logging::init();

    // Always exits 0: missing variables and empty input are not errors.
    if let Err(err) = TableArgs::run_from_args() {
        tracing::warn!("print-vars-table: {:#}", err);
    }
}
