#![forbid(unsafe_code)]

use std::process::ExitCode;

fn main() -> ExitCode {
    match segclean::run() {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("segclean: {e}");
            ExitCode::from(2)
        }
    }
}
