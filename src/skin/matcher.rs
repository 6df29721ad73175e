//! Reference tone catalog and nearest-tone matching
//!
//! The catalog is an ordered, read-only collection of labeled reference
//! tones with precomputed ITA values, loaded once (typically from JSON) and
//! treated as immutable for the process lifetime. Runtime reloads must swap
//! in a whole new catalog value so in-flight matches never observe a
//! partial update.

use crate::error::{AnalysisError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One reference tone: a label plus its precomputed ITA value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToneCatalogEntry {
    /// Human-readable tone label
    pub skin_tone: String,

    /// Reference ITA value in degrees. Accepts the `ita_value` field
    /// spelling and defaults to 0 when absent.
    #[serde(alias = "ita_value", default)]
    pub ita: f64,
}

/// Ordered, immutable collection of reference tones
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ToneCatalog {
    entries: Vec<ToneCatalogEntry>,
}

impl ToneCatalog {
    /// Build a catalog from entries, preserving their order
    pub fn new(entries: Vec<ToneCatalogEntry>) -> Self {
        Self { entries }
    }

    /// Load a catalog from a JSON file
    ///
    /// # Errors
    ///
    /// Returns `CatalogUnavailable` when the file cannot be read or parsed.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            AnalysisError::catalog_unavailable(
                format!("cannot read catalog file {}", path.display()),
                e,
            )
        })?;
        Self::from_json_str(&content)
    }

    /// Parse a catalog from a JSON string
    ///
    /// # Errors
    ///
    /// Returns `CatalogUnavailable` when the JSON is malformed.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| AnalysisError::catalog_unavailable("malformed catalog JSON", e))
    }

    /// Catalog entries in declaration order
    pub fn entries(&self) -> &[ToneCatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Result of matching a measured ITA value against the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToneMatch {
    /// Label of the best matching catalog entry
    pub skin_tone: String,

    /// The measured ITA value the match was computed for
    pub ita: f64,
}

/// Find the catalog entry whose reference ITA value is closest to `ita`
///
/// The first entry with the minimal absolute difference wins, so matching
/// is deterministic and stable under catalog order.
///
/// # Errors
///
/// Returns `EmptyCatalog` when the catalog has no entries.
pub fn match_tone(ita: f64, catalog: &ToneCatalog) -> Result<&ToneCatalogEntry> {
    let entries = catalog.entries();
    let first = entries.first().ok_or(AnalysisError::EmptyCatalog)?;

    let mut best = first;
    let mut best_distance = (first.ita - ita).abs();

    for entry in &entries[1..] {
        let distance = (entry.ita - ita).abs();
        if distance < best_distance {
            best_distance = distance;
            best = entry;
        }
    }

    Ok(best)
}
