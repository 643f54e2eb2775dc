//! # Emporium Console Entry Point
//!
//! The setup lives in lib.rs so the controller can be tested without a
//! terminal. Exit code 0 after the store closes, 1 if it could not start.

use std::process::ExitCode;

fn main() -> ExitCode {
    match emporium_console::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("emporium: {}", err);
            ExitCode::FAILURE
        }
    }
}
