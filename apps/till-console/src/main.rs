//! # Till Console Entry Point
//!
//! ## Usage
//! ```bash
//! # Demo catalog, receipts on stdout, prompts and logs on stderr
//! cargo run -p till-console
//!
//! # Custom config
//! cargo run -p till-console -- --config ./till.toml
//! ```

use std::process::ExitCode;

fn main() -> ExitCode {
    // The actual setup is in lib.rs for better testability
    match till_console::run(std::env::args().skip(1)) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("till-console: {e}");
            ExitCode::FAILURE
        }
    }
}
