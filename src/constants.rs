//! Measurement constants for skin tone estimation and garment color analysis
//!
//! This module contains the fixed parameters of the two pipelines: the 8-bit
//! Lab plane encoding used for skin measurement, the skin mask bounds, the
//! ITA formula constants, and the clustering defaults.

/// 8-bit Lab plane encoding
///
/// Skin measurement operates on Lab planes scaled to the 8-bit range:
/// L in [0, 255] (L* scaled by 255/100) and b in [0, 255] (b* offset by 128).
/// The mask bounds and the ITA lightness offset below are defined on this
/// scale.
pub mod lab8 {
    /// Scale factor from L* in [0, 100] to the 8-bit L plane
    pub const L_SCALE: f32 = 255.0 / 100.0;

    /// Offset from b* to the 8-bit b plane
    pub const B_OFFSET: f32 = 128.0;
}

/// Skin mask and ITA formula parameters
pub mod skin {
    /// Skin mask lower lightness bound on the 8-bit L plane (exclusive).
    /// Excludes near-black pixels (shadow, hair).
    pub const MASK_LIGHTNESS_MIN: f32 = 20.0;

    /// Skin mask upper lightness bound on the 8-bit L plane (exclusive).
    /// Excludes near-white pixels (specular highlights, background bleed).
    pub const MASK_LIGHTNESS_MAX: f32 = 240.0;

    /// Minimum masked pixel count for a reliable estimate
    pub const MIN_SKIN_PIXELS: usize = 100;

    /// Lightness offset in the ITA formula
    pub const ITA_LIGHTNESS_OFFSET: f64 = 50.0;

    /// Substitute for a mean b plane value of exactly zero.
    /// Applies only to the exact-zero case; near-zero means pass through.
    pub const ZERO_MEAN_B_SUBSTITUTE: f64 = 0.01;
}

/// Face detection defaults passed to the external detector
pub mod detection {
    /// Detection window scale step between pyramid levels
    pub const SCALE_FACTOR: f32 = 1.1;

    /// Neighbor confirmations required to accept a candidate window
    pub const MIN_NEIGHBORS: u32 = 5;

    /// Minimum face region side length in pixels
    pub const MIN_FACE_SIZE: u32 = 80;
}

/// Dominant color extraction defaults
pub mod clustering {
    /// Number of clusters for dominant color extraction
    pub const CLUSTER_COUNT: usize = 3;

    /// Centered crop fraction of each image dimension
    pub const CROP_FRACTION: f32 = 0.5;

    /// Channel value at or above which a pixel counts as near-white
    pub const WHITE_THRESHOLD: u8 = 240;

    /// Iteration bound for k-means refinement
    pub const MAX_ITERATIONS: usize = 20;

    /// Convergence threshold for k-means on sRGB points in [0, 1]
    pub const CONVERGENCE: f32 = 0.0025;

    /// Fixed seed for reproducible cluster initialization
    pub const SEED: u64 = 42;
}
