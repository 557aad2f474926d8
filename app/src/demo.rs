//! Fixed demonstration run used when the binary is invoked without a
//! subcommand: one page fetch, one sample-text scan with per-color
//! verdicts, one file scan.

use std::path::Path;

use hexscan_core::HexScanner;
use hexscan_sources::{FetchConfig, HttpFetcher, Utf8FileReader};

const DEMO_URL: &str = "https://htmlcolorcodes.com/";
const DEMO_FILE: &str = "colors.txt";

const SAMPLE_TEXT: &str = "\
Here are a few colors:
Primary: #FF5733
Accent: #A1
Background: #000
Broken: #GGG
Another: #12AB45
";

pub fn run(scanner: &HexScanner) -> anyhow::Result<()> {
    let fetcher = HttpFetcher::new(FetchConfig::default())?;

    println!("\nScanning page: {DEMO_URL}\n");
    let page_colors = scanner.colors_from_page(&fetcher, DEMO_URL);
    if page_colors.is_empty() {
        println!("No colors found");
    } else {
        for (i, color) in page_colors.iter().enumerate() {
            println!("{:2}. {color}", i + 1);
        }
    }

    println!("\nScanning sample text:\n");
    for color in scanner.extract(SAMPLE_TEXT) {
        let full = format!("#{color}");
        let verdict = if scanner.validate(&full) {
            "VALID"
        } else {
            "INVALID"
        };
        println!("{full} - {verdict}");
    }

    println!("\nScanning file '{DEMO_FILE}':\n");
    let file_colors = scanner.colors_from_file(&Utf8FileReader, Path::new(DEMO_FILE));
    if file_colors.is_empty() {
        println!("File missing or no colors found");
    } else {
        for color in file_colors {
            println!("{color}");
        }
    }

    Ok(())
}
