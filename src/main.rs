//! # chatimport CLI
//!
//! Command-line interface for the chatimport library.

use std::fs;
use std::path::Path;
use std::process;

use clap::Parser as ClapParser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use chatimport::cli::{Args, Command};
use chatimport::{FormatRegistry, ImportError};

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chatimport=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let args = <Args as ClapParser>::parse();

    match run(args) {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

/// Runs one subcommand. `Ok(false)` means "finished, but exit non-zero".
fn run(args: Args) -> Result<bool, ImportError> {
    let registry = FormatRegistry::new();

    match args.command {
        Command::Formats => {
            for (index, format) in registry.supported_formats().iter().enumerate() {
                println!("{}. {}", index + 1, format);
            }
            Ok(true)
        }
        Command::Detect { file } => {
            let (content, filename) = read_input(&file)?;
            match registry.detect(&content, &filename) {
                Some(format) => {
                    println!("{}", format.name);
                    Ok(true)
                }
                None => {
                    eprintln!("{}", ImportError::unrecognized(filename));
                    Ok(false)
                }
            }
        }
        Command::Parse {
            file,
            pretty,
            output,
        } => {
            let (content, filename) = read_input(&file)?;
            let result = registry.parse(&content, &filename)?;

            info!(
                members = result.members.len(),
                messages = result.messages.len(),
                "parsed {}",
                filename
            );

            let json = if pretty {
                serde_json::to_string_pretty(&result)
            } else {
                serde_json::to_string(&result)
            }?;

            match output {
                Some(path) => {
                    fs::write(&path, json)?;
                    info!("written to {}", path.display());
                }
                None => println!("{}", json),
            }
            Ok(true)
        }
    }
}

/// Reads a file as UTF-8 and returns its content with the bare filename.
fn read_input(path: &Path) -> Result<(String, String), ImportError> {
    let content = fs::read_to_string(path)?;
    let filename = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    Ok((content, filename))
}
