//! End-to-end extraction over the real file reader.

use std::path::{Path, PathBuf};

use hexscan_core::HexScanner;
use hexscan_sources::Utf8FileReader;

fn temp_file(content: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("hexscan_it_{}", uuid::Uuid::now_v7()));
    std::fs::create_dir_all(&dir).unwrap();
    let file = dir.join("colors.txt");
    std::fs::write(&file, content).unwrap();
    file
}

#[test]
fn extracts_marker_prefixed_colors_from_a_real_file() {
    let file = temp_file("header #FF5733\nfooter #000\nbroken #12345\n");
    let scanner = HexScanner::new().unwrap();

    let colors = scanner.colors_from_file(&Utf8FileReader, &file);
    assert_eq!(colors, vec!["#FF5733", "#000"]);

    let _ = std::fs::remove_dir_all(file.parent().unwrap());
}

#[test]
fn missing_file_yields_empty_list() {
    let scanner = HexScanner::new().unwrap();
    let colors = scanner.colors_from_file(&Utf8FileReader, Path::new("/nonexistent/colors.txt"));
    assert!(colors.is_empty());
}

#[test]
fn repeated_runs_over_unchanged_content_are_identical() {
    let file = temp_file("palette: #a1b2c3 #d4e5f6 #789\n");
    let scanner = HexScanner::new().unwrap();

    let first = scanner.colors_from_file(&Utf8FileReader, &file);
    let second = scanner.colors_from_file(&Utf8FileReader, &file);
    assert_eq!(first, second);
    assert_eq!(first.len(), 3);

    let _ = std::fs::remove_dir_all(file.parent().unwrap());
}
