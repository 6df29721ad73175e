//! Command-line demo: dominant garment color
//!
//! Decodes a product photo, extracts the dominant color, and prints the
//! analysis as JSON.
//!
//! Usage: cargo run --example garment_color -- <image> [<image>...]

use std::{env, process};
use tryon_colors::{analyze_garment, AnalysisError, DominantColorExtractor, NamedPalette};

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <image> [<image>...]", args[0]);
        process::exit(1);
    }

    let extractor = DominantColorExtractor::new();
    let palette = NamedPalette::standard();
    let mut failed = false;

    for path in &args[1..] {
        let image = match image::open(path) {
            Ok(decoded) => decoded.to_rgb8(),
            Err(e) => {
                let err = AnalysisError::decode(format!("cannot decode {}", path), e);
                eprintln!("{}: {}", path, err);
                failed = true;
                continue;
            }
        };

        let result = analyze_garment(&image, &extractor, &palette);
        match serde_json::to_string_pretty(&result) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("{}: failed to serialize result: {}", path, e);
                failed = true;
            }
        }
    }

    if failed {
        process::exit(1);
    }
}
