//! Configuration structures for the tryon_colors analysis pipelines
//!
//! All tunable parameters for skin tone estimation and dominant color
//! extraction, organized per pipeline. Both pipelines run with the
//! documented defaults unless a configuration is supplied.
//!
//! # Configuration Loading
//!
//! Configuration can be loaded from JSON files or constructed
//! programmatically:
//!
//! ```no_run
//! use tryon_colors::AnalysisConfig;
//! use std::path::Path;
//!
//! // Load from file
//! let config = AnalysisConfig::from_json_file(Path::new("config.json"))?;
//!
//! // Or use defaults
//! let config = AnalysisConfig::default();
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use crate::constants::{clustering, skin};
use crate::detection::DetectionParams;
use serde::{Deserialize, Serialize};

/// Complete configuration for both analysis pipelines
///
/// Can be serialized to/from JSON for reproducible analysis runs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Skin tone estimation configuration
    pub skin_tone: SkinToneConfig,

    /// Dominant garment color configuration
    pub dominant_color: DominantColorConfig,
}

/// Skin tone estimation parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkinToneConfig {
    /// Parameters forwarded to the external face detector
    pub detection: DetectionParams,

    /// Skin mask lower lightness bound (exclusive), 8-bit L plane
    pub mask_lightness_min: f32,

    /// Skin mask upper lightness bound (exclusive), 8-bit L plane
    pub mask_lightness_max: f32,

    /// Minimum masked pixel count for a reliable estimate
    pub min_skin_pixels: usize,
}

impl Default for SkinToneConfig {
    fn default() -> Self {
        Self {
            detection: DetectionParams::default(),
            mask_lightness_min: skin::MASK_LIGHTNESS_MIN,
            mask_lightness_max: skin::MASK_LIGHTNESS_MAX,
            min_skin_pixels: skin::MIN_SKIN_PIXELS,
        }
    }
}

/// Dominant garment color extraction parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DominantColorConfig {
    /// Number of color clusters
    pub cluster_count: usize,

    /// Centered crop fraction of each image dimension (0, 1]
    pub crop_fraction: f32,

    /// Channel value at or above which a pixel counts as near-white
    pub white_threshold: u8,

    /// Iteration bound for cluster refinement
    pub max_iterations: usize,

    /// Convergence threshold on sRGB points in [0, 1]
    pub convergence: f32,

    /// Fixed seed for reproducible cluster initialization
    pub seed: u64,
}

impl Default for DominantColorConfig {
    fn default() -> Self {
        Self {
            cluster_count: clustering::CLUSTER_COUNT,
            crop_fraction: clustering::CROP_FRACTION,
            white_threshold: clustering::WHITE_THRESHOLD,
            max_iterations: clustering::MAX_ITERATIONS,
            convergence: clustering::CONVERGENCE,
            seed: clustering::SEED,
        }
    }
}

impl AnalysisConfig {
    /// Load configuration from JSON file
    pub fn from_json_file(path: &std::path::Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to JSON file
    pub fn to_json_file(&self, path: &std::path::Path) -> Result<(), Box<dyn std::error::Error>> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
