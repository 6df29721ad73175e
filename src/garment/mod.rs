//! Garment color analysis module
//!
//! This module extracts the dominant color from product photos and builds
//! the catalog metadata records derived from it.

pub mod cluster;
pub mod dominant;
pub mod metadata;

pub use cluster::{ClusterOutcome, Clusterer, KmeansClusterer};
pub use dominant::{DominantColor, DominantColorExtractor};
pub use metadata::{garment_record, GarmentRecord, DEFAULT_GARMENT_TYPE, DEFAULT_STYLE};
