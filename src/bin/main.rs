//! dpkgmap CLI - dump installed dpkg package metadata as JSON
//!
//! Usage:
//!   dpkgmap [--pretty]
//!   dpkgmap --image ubuntu:noble
//!
//! Examples:
//!   dpkgmap | jq '.[].name'
//!   dpkgmap --image debian:bookworm --pretty

use std::process::ExitCode;

use clap::Parser;
use dpkgmap::{present, ContainerRunner, Dpkg, Package};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "dpkgmap")]
#[command(about = "Dump installed dpkg package metadata as JSON")]
#[command(version)]
struct Cli {
    /// Query dpkg inside a container image instead of the host
    #[arg(short, long, value_name = "REF")]
    image: Option<String>,

    /// Pretty-print the JSON output
    #[arg(short, long)]
    pretty: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let dpkg = match &cli.image {
        Some(image) => Dpkg::with_runner(Box::new(ContainerRunner::new(image.clone()))),
        None => {
            if !present() {
                eprintln!("error: dpkg-query not found on PATH");
                return ExitCode::FAILURE;
            }
            Dpkg::new()
        }
    };

    let mut packages: Vec<Package> = Vec::new();
    if let Err(err) = dpkg.metadata(&mut packages) {
        eprintln!("error: {err}");
        return ExitCode::FAILURE;
    }

    let json = if cli.pretty {
        serde_json::to_string_pretty(&packages)
    } else {
        serde_json::to_string(&packages)
    };

    match json {
        Ok(out) => {
            println!("{out}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: failed to encode packages: {err}");
            ExitCode::FAILURE
        }
    }
}
