// CLI module
// Command-line interface and argument parsing

mod args;

pub use crate::io::OutputFormat;
pub use args::CliArgs;

use clap::Parser;

/// Parse command-line arguments using clap
///
/// If parsing fails (invalid arguments, a negative or non-numeric amount
/// bound, or `--help`), clap displays an error or help text and exits.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}
