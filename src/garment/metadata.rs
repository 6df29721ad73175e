//! Garment catalog metadata records
//!
//! Composes dominant color extraction and named color classification into
//! the metadata record shape used by the garment catalog. Serialization of
//! the records is left to the calling layer.

use crate::color::NamedPalette;
use crate::garment::cluster::Clusterer;
use crate::garment::dominant::DominantColorExtractor;
use image::RgbImage;
use serde::{Deserialize, Serialize};

/// Garment type assigned when none is known
pub const DEFAULT_GARMENT_TYPE: &str = "t-shirt";

/// Garment style assigned when none is known
pub const DEFAULT_STYLE: &str = "casual";

/// Catalog metadata for one garment image
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GarmentRecord {
    pub filename: String,

    /// Named color label of the dominant garment color
    pub color: String,

    #[serde(rename = "type")]
    pub garment_type: String,

    pub style: String,
}

/// Build the metadata record for one garment image
///
/// Extracts the dominant color, classifies it against `palette`, and fills
/// the remaining fields with the catalog defaults.
pub fn garment_record<C: Clusterer>(
    filename: &str,
    image: &RgbImage,
    extractor: &DominantColorExtractor<C>,
    palette: &NamedPalette,
) -> GarmentRecord {
    let dominant = extractor.extract(image);
    GarmentRecord {
        filename: filename.to_string(),
        color: palette.classify(dominant.rgb).to_string(),
        garment_type: DEFAULT_GARMENT_TYPE.to_string(),
        style: DEFAULT_STYLE.to_string(),
    }
}
