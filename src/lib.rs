//! # TryOn Colors
//!
//! A Rust crate for the perceptual color analysis behind a virtual try-on
//! service.
//!
//! Two independent pipelines share the color space utilities:
//! - Estimating a person's skin tone from a photograph as an Individual
//!   Typology Angle (ITA) and matching it to the closest entry of a
//!   reference tone catalog
//! - Extracting a garment's dominant color from a product photo and
//!   classifying it into a fixed palette of named colors
//!
//! The crate operates on decoded pixel grids only. Image decoding, face
//! detection, and transport belong to the calling layer; detection and
//! clustering enter as pluggable capabilities.
//!
//! ## Example
//!
//! ```
//! use tryon_colors::{analyze_garment, DominantColorExtractor, NamedPalette};
//! use image::{Rgb, RgbImage};
//!
//! let photo = RgbImage::from_pixel(32, 32, Rgb([0, 0, 128]));
//! let result = analyze_garment(
//!     &photo,
//!     &DominantColorExtractor::new(),
//!     &NamedPalette::standard(),
//! );
//! assert_eq!(result.color_name, "navy");
//! ```

use image::RgbImage;
use serde::{Deserialize, Serialize};

pub mod color;
pub mod config;
pub mod constants;
pub mod detection;
pub mod error;
pub mod garment;
pub mod skin;

pub use color::{ColorConverter, Lab8, NamedColorEntry, NamedPalette};
pub use config::{AnalysisConfig, DominantColorConfig, SkinToneConfig};
pub use detection::{DetectionParams, FaceDetector, FaceRegion};
pub use error::{AnalysisError, Result};
pub use garment::{
    garment_record, ClusterOutcome, Clusterer, DominantColor, DominantColorExtractor,
    GarmentRecord, KmeansClusterer,
};
pub use skin::{
    match_tone, SkinToneEstimate, SkinToneEstimator, ToneCatalog, ToneCatalogEntry, ToneMatch,
};

/// Garment color analysis result with display representations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GarmentColorResult {
    /// Dominant color on the [0, 255] RGB scale
    pub rgb: [f32; 3],

    /// Hexadecimal representation for display
    pub hex: String,

    /// Nearest named color label
    pub color_name: String,
}

/// Analyze a garment product photo
///
/// Extracts the dominant color and classifies it against the named color
/// palette. Total: every image, including degenerate all-white ones,
/// produces a best-effort result.
pub fn analyze_garment<C: Clusterer>(
    image: &RgbImage,
    extractor: &DominantColorExtractor<C>,
    palette: &NamedPalette,
) -> GarmentColorResult {
    let dominant = extractor.extract(image);
    let converter = ColorConverter::new();

    GarmentColorResult {
        rgb: dominant.rgb,
        hex: converter.srgb_to_hex(dominant.srgb),
        color_name: palette.classify(dominant.rgb).to_string(),
    }
}

/// Match a person's skin tone against a reference tone catalog
///
/// Runs the skin tone estimator on `image` and returns the closest catalog
/// entry's label together with the measured ITA value.
///
/// # Errors
///
/// Returns `AnalysisError` if:
/// - No face is detected or too little skin is usable
/// - The face detector fails internally
/// - The catalog is empty
pub fn match_skin_tone<D: FaceDetector>(
    image: &RgbImage,
    estimator: &SkinToneEstimator<D>,
    catalog: &ToneCatalog,
) -> Result<ToneMatch> {
    let estimate = estimator.estimate(image)?;
    let best = match_tone(estimate.ita, catalog)?;

    Ok(ToneMatch {
        skin_tone: best.skin_tone.clone(),
        ita: estimate.ita,
    })
}
