use std::process::ExitCode;

use clap::Parser;
use vlc_updater::cli::{Cli, run};

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let _log_guard = vlc_updater::logging::init(cli.log_file.as_deref())?;

    let code = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(run(cli, &mut std::io::stdout().lock()))?;

    Ok(ExitCode::from(code))
}
