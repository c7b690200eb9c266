use std::io::{self, Write};
use std::path::PathBuf;

use async_trait::async_trait;
use bootorder_core::kernel::constants;
use bootorder_core::{Activator, ComponentDescriptor};
use clap::{Parser, Subcommand};

/// Bootorder: dependency-ordered component startup
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// Log at debug level (RUST_LOG still takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the activation order of a manifest, one component per line
    Order {
        /// Manifest file (.json, .yaml, .yml or .toml)
        manifest: Option<PathBuf>,
        /// Also print placeholder predecessors
        #[arg(long)]
        placeholders: bool,
    },
    /// Validate a manifest and its ordering constraints
    Check {
        /// Manifest file (.json, .yaml, .yml or .toml)
        manifest: Option<PathBuf>,
    },
    /// Activate every startup component in order
    Run {
        /// Manifest file (.json, .yaml, .yml or .toml)
        manifest: Option<PathBuf>,
    },
}

/// Resolve an optional manifest argument against the default file name.
pub fn manifest_path(manifest: Option<PathBuf>) -> PathBuf {
    manifest.unwrap_or_else(|| PathBuf::from(constants::DEFAULT_MANIFEST_FILE))
}

/// Activator for the command line: reports each activation on stdout.
#[derive(Debug, Default)]
pub struct PrintingActivator;

#[async_trait]
impl Activator for PrintingActivator {
    type Error = io::Error;

    async fn activate(&mut self, component: &ComponentDescriptor) -> Result<(), io::Error> {
        writeln!(io::stdout(), "activated {}", component.id)
    }
}
