use anyhow::Result;
use clap::Parser;
use stratify_split::{cli::Cli, infra};

fn main() -> Result<()> {
    let cli = Cli::parse();
    infra::logging::init(cli.log_file.as_deref())?;
    // Spinners stay off when logs go to a file
    infra::progress::set_enabled(cli.log_file.is_none());
    cli.run()
}
