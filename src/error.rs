//! Error types for the tryon_colors library

use thiserror::Error;

/// Result type alias for tryon_colors operations
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Error types for skin tone estimation and garment color analysis
///
/// Every variant is a recoverable, request-scoped condition. Callers must
/// treat a failed estimate as "cannot classify this image" and surface that
/// distinctly from a successful numeric result.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// No face region was detected in the input image
    #[error("No face detected")]
    NoFaceDetected,

    /// Too few skin pixels remained after masking the face region
    #[error("Not enough skin pixels: {found} found (minimum {minimum})")]
    InsufficientSkinPixels { found: usize, minimum: usize },

    /// Tone catalog contains no entries
    #[error("Tone catalog is empty")]
    EmptyCatalog,

    /// Tone catalog could not be loaded from its store
    #[error("Tone catalog unavailable: {message}")]
    CatalogUnavailable {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Image could not be decoded by the external decoder
    #[error("Failed to decode image: {message}")]
    DecodeFailure {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Face detector reported an internal failure
    #[error("Face detection failed: {message}")]
    DetectorFailure { message: String },
}

impl AnalysisError {
    /// Create a catalog error with context
    pub fn catalog_unavailable<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::CatalogUnavailable {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a decode error with context
    pub fn decode<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::DecodeFailure {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a detector failure carrying the underlying message
    pub fn detector(message: impl Into<String>) -> Self {
        Self::DetectorFailure {
            message: message.into(),
        }
    }

    /// Check if this error describes the analyzed image rather than the
    /// surrounding setup (catalog store, detector machinery)
    pub fn is_image_condition(&self) -> bool {
        matches!(
            self,
            AnalysisError::NoFaceDetected
                | AnalysisError::InsufficientSkinPixels { .. }
                | AnalysisError::DecodeFailure { .. }
        )
    }

    /// Get user-friendly error description for application display
    pub fn user_message(&self) -> String {
        match self {
            AnalysisError::NoFaceDetected => {
                "Could not find a face in the photo. Please retake it with your face clearly visible.".to_string()
            }
            AnalysisError::InsufficientSkinPixels { .. } => {
                "Not enough of the face was usable for analysis. Please retake the photo in even lighting.".to_string()
            }
            AnalysisError::EmptyCatalog | AnalysisError::CatalogUnavailable { .. } => {
                "The reference tone catalog is not available. Please try again later.".to_string()
            }
            AnalysisError::DecodeFailure { .. } => {
                "Could not read the image. Please check the file format and try again.".to_string()
            }
            AnalysisError::DetectorFailure { .. } => {
                "Face analysis failed. Please try with a different photo.".to_string()
            }
        }
    }
}
