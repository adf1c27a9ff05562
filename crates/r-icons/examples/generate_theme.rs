//! Generate the icon theme from a schema directory.
//!
//! Run with: cargo run -p r-icons --example generate_theme -- <schema-dir> [output-file]

use std::env;
use std::process::ExitCode;

use r_icons::{THEME_FILE, activate};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let mut args = env::args().skip(1);
    let Some(schema_dir) = args.next() else {
        eprintln!("usage: generate_theme <schema-dir> [output-file]");
        return ExitCode::FAILURE;
    };
    let output = args.next().unwrap_or_else(|| THEME_FILE.to_string());

    match activate(&schema_dir, &output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("theme generation failed: {err}");
            ExitCode::FAILURE
        }
    }
}
