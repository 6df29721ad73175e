//! Color conversion and naming module
//!
//! This module holds the color space conversions shared by both analysis
//! pipelines and the fixed named color palette used for garment labels.

pub mod conversion;
pub mod named;

pub use conversion::{ColorConverter, Lab8};
pub use named::{NamedColorEntry, NamedPalette};
