/// Dispatch to the command handler for the parsed arguments.
///
/// # Returns
/// - `Ok(ExitStatus)` once the command has finished and printed its output
/// - `Err` if the command fails (e.g., invalid config, malformed locale file)
use anyhow::{Result, bail};

use super::{
    args::{Arguments, Command},
    commands::{extract::extract, init::init},
    exit_status::ExitStatus,
};

pub fn run(Arguments { command }: Arguments) -> Result<ExitStatus> {
    match command {
        Some(Command::Extract(cmd)) => extract(cmd),
        Some(Command::Init) => init(),
        None => {
            bail!("No command provided. Use --help to see available commands.")
        }
    }
}
