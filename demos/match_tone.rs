//! Command-line demo: tone matching
//!
//! Matches a measured ITA value against a JSON tone catalog and prints the
//! best entry.
//!
//! Usage: cargo run --example match_tone -- <catalog.json> <ita>

use std::{env, path::Path, process};
use tryon_colors::{match_tone, ToneCatalog};

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <catalog.json> <ita>", args[0]);
        eprintln!("Example: {} models.json 22.5", args[0]);
        process::exit(1);
    }

    let ita: f64 = match args[2].parse() {
        Ok(value) => value,
        Err(_) => {
            eprintln!("Invalid ITA value: {}", args[2]);
            process::exit(1);
        }
    };

    let catalog = match ToneCatalog::from_json_file(Path::new(&args[1])) {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    match match_tone(ita, &catalog) {
        Ok(best) => {
            println!(
                "{{\"best_match_tone\": \"{}\", \"ita_value\": {}}}",
                best.skin_tone, ita
            );
        }
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    }
}
