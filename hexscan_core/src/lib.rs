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

use std::path::Path;

pub mod scanner;

pub use scanner::HexScanner;

/// Fetches a web page and returns its body as decoded text.
///
/// Implementations signal every failure (unreachable host, non-success
/// status, timeout) through the error; the scanner absorbs those and
/// turns them into an empty result.
pub trait PageFetcher {
    fn fetch(&self, url: &str) -> anyhow::Result<String>;
}

/// Reads a whole file as UTF-8 text.
pub trait FileReader {
    fn read(&self, path: &Path) -> anyhow::Result<String>;
}
