#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use hexscan_core::HexScanner;
use hexscan_sources::{FetchConfig, HttpFetcher, Utf8FileReader};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

mod demo;

#[derive(Parser)]
#[command(name = "hexscan")]
#[command(about = "Extract and validate HEX color codes", long_about = None)]
struct Cli {
    /// Without a subcommand, a fixed demonstration run is performed
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract colors from a text argument
    Scan {
        /// Text to scan
        text: String,
    },
    /// Check a single candidate color
    Validate {
        /// Candidate, marker included (e.g. "#1A2B3C")
        color: String,
    },
    /// Extract colors from a web page
    Page {
        /// Page URL (http or https)
        url: String,
    },
    /// Extract colors from a text file
    File {
        /// Path to the file
        path: PathBuf,
    },
    /// Show version
    Version,
}

fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();
    let scanner = HexScanner::new()?;

    match cli.command {
        Some(Commands::Scan { text }) => {
            for color in scanner.extract(&text) {
                println!("#{color}");
            }
        }
        Some(Commands::Validate { color }) => {
            let verdict = if scanner.validate(&color) {
                "VALID"
            } else {
                "INVALID"
            };
            println!("{color} - {verdict}");
        }
        Some(Commands::Page { url }) => {
            let fetcher = HttpFetcher::new(FetchConfig::default())?;
            for color in scanner.colors_from_page(&fetcher, &url) {
                println!("{color}");
            }
        }
        Some(Commands::File { path }) => {
            for color in scanner.colors_from_file(&Utf8FileReader, &path) {
                println!("{color}");
            }
        }
        Some(Commands::Version) => {
            println!("hexscan {}", env!("CARGO_PKG_VERSION"));
        }
        None => demo::run(&scanner)?,
    }

    Ok(())
}
