//! Command-line demo: batch garment metadata
//!
//! Walks a directory of product photos and prints one metadata record per
//! image as a JSON array, mirroring the catalog ingestion flow.
//!
//! Usage: cargo run --example generate_metadata -- <image-dir>

use std::{env, path::PathBuf, process};
use tryon_colors::{garment_record, DominantColorExtractor, GarmentRecord, NamedPalette};

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <image-dir>", args[0]);
        process::exit(1);
    }

    let dir = PathBuf::from(&args[1]);
    let entries = match std::fs::read_dir(&dir) {
        Ok(entries) => entries,
        Err(e) => {
            eprintln!("Cannot read directory {}: {}", dir.display(), e);
            process::exit(1);
        }
    };

    let extractor = DominantColorExtractor::new();
    let palette = NamedPalette::standard();
    let mut records: Vec<GarmentRecord> = Vec::new();

    let mut paths: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| {
            path.extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
                .unwrap_or(false)
        })
        .collect();
    paths.sort();

    for path in paths {
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        let image = match image::open(&path) {
            Ok(decoded) => decoded.to_rgb8(),
            Err(e) => {
                eprintln!("Warning: unable to read {}: {}. Skipping.", filename, e);
                continue;
            }
        };

        records.push(garment_record(&filename, &image, &extractor, &palette));
    }

    match serde_json::to_string_pretty(&records) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Failed to serialize records: {}", e);
            process::exit(1);
        }
    }
}
