//! pbook - run the pattern book demos from the command line

use std::process::ExitCode;

use patternbook::cli;

fn main() -> ExitCode {
    cli::run()
}
