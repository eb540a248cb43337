//! # ShopVibe Entry Point
//!
//! Setup lives in `lib.rs` so the command loop can be tested without a
//! terminal.

use std::process::ExitCode;

fn main() -> ExitCode {
    match shopvibe::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("shopvibe: {}", e);
            ExitCode::FAILURE
        }
    }
}
