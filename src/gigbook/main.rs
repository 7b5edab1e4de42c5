//! # gigbook binary
//!
//! The binary is intentionally thin: the CLI lives in `cli/`, and this file
//! only invokes `cli::run()` and turns errors into exit codes. Rejected
//! onboarding submissions are rendered field by field; every other error is a
//! single `Error:` line.

use gigbook::error::GigbookError;

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        match e {
            GigbookError::Validation(errors) => eprint!("{}", cli::render_field_errors(&errors)),
            other => eprintln!("Error: {}", other),
        }
        std::process::exit(1);
    }
}
