mod cli;
mod logging;

use std::process::ExitCode;

use bootorder_core::kernel::constants;
use bootorder_core::{Bootstrap, Result, StartupManifest};
use clap::Parser;
use log::info;

use crate::cli::{CliArgs, Commands, PrintingActivator};

#[tokio::main]
async fn main() -> ExitCode {
    let args = CliArgs::parse();
    logging::init(args.verbose);
    info!("{} v{}", constants::APP_NAME, constants::APP_VERSION);

    match execute(args.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn execute(command: Commands) -> Result<()> {
    match command {
        Commands::Order { manifest, placeholders } => {
            let mut bootstrap = bootstrap_from(manifest).await?;
            let order = bootstrap.resolve().await?;
            for entry in order {
                if entry.is_placeholder() {
                    if placeholders {
                        println!("{} (placeholder)", entry.id());
                    }
                } else {
                    println!("{}", entry.id());
                }
            }
        }
        Commands::Check { manifest } => {
            let mut bootstrap = bootstrap_from(manifest).await?;
            let order = bootstrap.resolve().await?;
            println!("ok: {} startup components", order.activation_count());
        }
        Commands::Run { manifest } => {
            let mut bootstrap = bootstrap_from(manifest).await?;
            let report = bootstrap.run(&mut PrintingActivator).await?;
            info!("Activated {} components", report.activated.len());
        }
    }
    Ok(())
}

async fn bootstrap_from(manifest: Option<std::path::PathBuf>) -> Result<Bootstrap> {
    let path = cli::manifest_path(manifest);
    info!("Loading manifest {}", path.display());
    let manifest = StartupManifest::load(&path)?;

    let bootstrap = Bootstrap::new();
    bootstrap.discover_manifest(&manifest).await?;
    Ok(bootstrap)
}
