use std::path::Path;

use anyhow::{Context, Result};
use regex::Regex;
use tracing::warn;

use crate::{FileReader, PageFetcher};

/// HEX colors in shorthand (`#RGB`) or full (`#RRGGBB`) form, any letter
/// case. The trailing `\b` rejects digit runs of the wrong length instead
/// of truncating them: `#1234567` yields no match at all.
const HEX_COLOR_PATTERN: &str = r"#([0-9A-Fa-f]{3}|[0-9A-Fa-f]{6})\b";

/// Locates and validates HEX color codes in text.
///
/// Holds the one compiled matching rule shared by every operation. The
/// scanner is stateless beyond that rule, so a single instance can be
/// reused across calls freely.
pub struct HexScanner {
    pattern: Regex,
}

impl HexScanner {
    pub fn new() -> Result<Self> {
        let pattern =
            Regex::new(HEX_COLOR_PATTERN).context("Failed to compile HEX color pattern")?;
        Ok(Self { pattern })
    }

    /// Return every HEX color in `text` in order of appearance.
    ///
    /// Entries carry the hex digits only, in their original case; callers
    /// that want the `#` marker prepend it themselves.
    #[must_use]
    pub fn extract(&self, text: &str) -> Vec<String> {
        self.pattern
            .captures_iter(text)
            .map(|caps| caps[1].to_string())
            .collect()
    }

    /// Whether `candidate` is exactly one well-formed color, marker
    /// included. Leading or trailing extra characters fail the check.
    #[must_use]
    pub fn validate(&self, candidate: &str) -> bool {
        self.pattern
            .find(candidate)
            .is_some_and(|m| m.start() == 0 && m.end() == candidate.len())
    }

    /// Colors found on the page at `url`, marker-prefixed.
    ///
    /// Fetch failures are logged and absorbed here; callers always get a
    /// well-defined (possibly empty) list and never an error.
    pub fn colors_from_page(&self, fetcher: &impl PageFetcher, url: &str) -> Vec<String> {
        match fetcher.fetch(url) {
            Ok(body) => self.extract_with_marker(&body),
            Err(e) => {
                warn!("Failed to fetch page {}: {:#}", url, e);
                Vec::new()
            }
        }
    }

    /// Colors found in the file at `path`, marker-prefixed.
    ///
    /// Same absorption contract as [`Self::colors_from_page`]: read
    /// failures are logged, the caller gets an empty list.
    pub fn colors_from_file(&self, reader: &impl FileReader, path: &Path) -> Vec<String> {
        match reader.read(path) {
            Ok(content) => self.extract_with_marker(&content),
            Err(e) => {
                warn!("Failed to read file {}: {:#}", path.display(), e);
                Vec::new()
            }
        }
    }

    fn extract_with_marker(&self, text: &str) -> Vec<String> {
        self.extract(text)
            .into_iter()
            .map(|color| format!("#{color}"))
            .collect()
    }
}
