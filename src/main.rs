use std::process::ExitCode;

use clap::Parser;
use easycopy_lib::cli::Cli;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match easycopy_lib::run(cli).await {
        Ok(code) => code,
        Err(err) => {
            tracing::error!(error = %format!("{err:#}"), "easycopy failed");
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
