use std::process::ExitCode;

fn main() -> ExitCode {
    ledger_core::init();
    match ledger_core::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
