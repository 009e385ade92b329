use clap::Parser;
use std::path::PathBuf;

mod capabilities;
mod execute;
mod logging;

#[derive(Parser)]
#[command(name = "provision-progress")]
#[command(
    about = "Render provisioning run events as a compact progress tree",
    long_about = "Reads newline-delimited JSON lifecycle events emitted by the \
                  orchestration engine and prints a structured progress report. \
                  Any other output from the engine is suppressed."
)]
#[command(version)]
pub struct Cli {
    /// Read events from a file instead of stdin
    #[arg(long, short = 'i', value_name = "PATH")]
    input: Option<PathBuf>,

    /// Never overwrite lines in place
    #[arg(long, conflicts_with = "interactive")]
    plain: bool,

    /// Overwrite placeholder lines in place even when stdout is not a terminal
    #[arg(long)]
    interactive: bool,

    /// Fail on event lines that look like JSON but do not decode
    #[arg(long)]
    strict: bool,

    /// Increase diagnostic logging on stderr (repeatable)
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    logging::init(cli.verbose)?;

    execute::run(&cli)?;
    Ok(())
}
