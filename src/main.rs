//! Bank Account demonstration CLI
//!
//! Runs the demonstration scenario and prints both accounts, their
//! transaction histories and the interest earned.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! cargo run -- --rate 2.5
//! cargo run -- --date 2024-06-15 --format csv
//! RUST_LOG=debug cargo run
//! ```
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (rejected operation, output failure)

use bank_account::cli;
use bank_account::demo::{self, DemoConfig};
use bank_account::telemetry;
use std::process;

fn main() {
    telemetry::init();

    let args = cli::parse_args();
    let config = DemoConfig::from_args(&args);

    let mut output = std::io::stdout();
    if let Err(e) = demo::run_and_report(&config, &mut output) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
