mod cli;

use std::io::IsTerminal;
use std::process::ExitCode;

use clap::Parser;
use xee_transform::{report::write_error, Error};

fn main() -> ExitCode {
    let cli = cli::Cli::parse();
    cli.init_logging();
    match cli.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error @ Error::Usage(_)) => {
            let _ = write_error(&error, false, std::io::stdout().lock());
            ExitCode::from(2)
        }
        Err(error) => {
            let stderr = std::io::stderr();
            let color = stderr.is_terminal();
            let _ = write_error(&error, color, stderr.lock());
            ExitCode::FAILURE
        }
    }
}
