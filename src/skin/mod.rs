//! Skin tone estimation and tone matching module
//!
//! This module measures a person's skin tone from a photograph as an ITA
//! value and matches it against a catalog of labeled reference tones.

pub mod estimator;
pub mod matcher;

pub use estimator::{SkinToneEstimate, SkinToneEstimator};
pub use matcher::{match_tone, ToneCatalog, ToneCatalogEntry, ToneMatch};
