use std::process;

use showroom_ledger::{cli::run_cli, errors::AppError, init};

fn main() {
    init();
    match run_cli() {
        Ok(()) => {}
        Err(AppError::Cli(err)) => {
            eprint!("{}", err.render());
            process::exit(1);
        }
        Err(err) => {
            eprintln!("Error: {err}");
            process::exit(1);
        }
    }
}
