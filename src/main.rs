use std::process::ExitCode;

fn main() -> ExitCode {
    match devnanny::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:?}", e);
            ExitCode::from(devnanny::errors::get_exit_code(&e))
        }
    }
}
