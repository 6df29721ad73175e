//! Face detection module
//!
//! Defines the region type, detection parameters, and the pluggable
//! detector capability used by the skin tone estimator.

pub mod face;

pub use face::{select_primary_face, DetectionParams, FaceDetector, FaceRegion};
