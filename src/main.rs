//! Wordify CLI
//!
//! Spells out a single dollar amount in English words.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- '$1,234.56'
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `trace` to see the parsing and bucket steps

use log::debug;
use std::env;
use std::process;
use wordify::{Result, WordifyError};

fn main() {
    env_logger::init();

    match run() {
        Ok(words) => println!("{}", words),
        Err(e @ WordifyError::MissingArgument) => {
            println!("{}", e);
            process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn run() -> Result<String> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        return Err(WordifyError::MissingArgument);
    }
    if args.len() > 2 {
        debug!("Ignoring {} extra argument(s)", args.len() - 2);
    }

    wordify::wordify(&args[1])
}
