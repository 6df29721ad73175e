//! Face region types and the pluggable detector capability
//!
//! Face detection itself is an external capability (typically a cascaded,
//! windowed detector). This module defines the region type, the tunable
//! detection parameters, the detector trait, and the policy for selecting
//! one region when the detector returns several.

use crate::constants::detection;
use image::GrayImage;
use serde::{Deserialize, Serialize};

/// Axis-aligned face region in pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceRegion {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl FaceRegion {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Region area in pixels
    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }
}

/// Tunable parameters forwarded to the external detector
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionParams {
    /// Window scale step between detection pyramid levels
    pub scale_factor: f32,

    /// Neighbor confirmations required to accept a candidate window
    pub min_neighbors: u32,

    /// Minimum region side length in pixels; smaller detections are spurious
    pub min_face_size: u32,
}

impl Default for DetectionParams {
    fn default() -> Self {
        Self {
            scale_factor: detection::SCALE_FACTOR,
            min_neighbors: detection::MIN_NEIGHBORS,
            min_face_size: detection::MIN_FACE_SIZE,
        }
    }
}

/// Pluggable face detection capability
///
/// Implementations wrap whatever detection backend the deployment uses.
/// Returning an empty list means no faces were found; `Err` is reserved for
/// failures of the detection machinery itself and is translated into a
/// structured failure at the estimator boundary.
pub trait FaceDetector {
    fn detect(
        &self,
        image: &GrayImage,
        params: &DetectionParams,
    ) -> std::result::Result<Vec<FaceRegion>, Box<dyn std::error::Error + Send + Sync>>;
}

/// Select the region to measure when detection returns several candidates
///
/// Largest area wins. Equal areas keep the earlier detection; the ordering
/// beyond area is an arbitrary but fixed policy.
pub fn select_primary_face(regions: &[FaceRegion]) -> Option<FaceRegion> {
    let mut best: Option<FaceRegion> = None;
    let mut best_area = 0u64;

    for &region in regions {
        if region.area() > best_area || best.is_none() {
            best_area = region.area();
            best = Some(region);
        }
    }

    best
}
