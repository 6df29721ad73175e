//! Skin tone estimation from portrait photographs
//!
//! Estimates an Individual Typology Angle (ITA) for the person in a photo:
//! - Locates a face region through the pluggable detector
//! - Masks out shadow and highlight pixels inside the region
//! - Averages the Lab lightness and blue-yellow planes over the mask
//! - Converts the ratio to an angle in degrees

use crate::color::ColorConverter;
use crate::config::SkinToneConfig;
use crate::constants::skin;
use crate::detection::{select_primary_face, FaceDetector, FaceRegion};
use crate::error::{AnalysisError, Result};
use image::{imageops, RgbImage};
use tracing::debug;

/// Skin tone estimate for one image
#[derive(Debug, Clone, PartialEq)]
pub struct SkinToneEstimate {
    /// Individual Typology Angle in degrees; higher values mean lighter skin
    pub ita: f64,

    /// Number of pixels that passed the skin mask
    pub skin_pixels: usize,

    /// Face region the estimate was measured in
    pub region: FaceRegion,
}

/// Skin tone estimator over a pluggable face detector
pub struct SkinToneEstimator<D> {
    detector: D,
    config: SkinToneConfig,
    converter: ColorConverter,
}

impl<D: FaceDetector> SkinToneEstimator<D> {
    /// Create an estimator with the default configuration
    pub fn new(detector: D) -> Self {
        Self::with_config(detector, SkinToneConfig::default())
    }

    /// Create an estimator with a custom configuration
    pub fn with_config(detector: D, config: SkinToneConfig) -> Self {
        Self {
            detector,
            config,
            converter: ColorConverter::new(),
        }
    }

    /// Estimate the skin tone of the person in `image`
    ///
    /// # Arguments
    ///
    /// * `image` - Decoded RGB image, owned by the caller
    ///
    /// # Returns
    ///
    /// A `SkinToneEstimate` with the ITA value in degrees
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError` if:
    /// - The detector finds no face (`NoFaceDetected`)
    /// - Too few pixels pass the skin mask (`InsufficientSkinPixels`)
    /// - The detector itself fails (`DetectorFailure`)
    pub fn estimate(&self, image: &RgbImage) -> Result<SkinToneEstimate> {
        // Step 1: grayscale copy for detection
        let gray = imageops::grayscale(image);

        // Step 2: face detection through the external capability; machinery
        // errors are translated here, never propagated raw
        let regions = self
            .detector
            .detect(&gray, &self.config.detection)
            .map_err(|e| AnalysisError::detector(e.to_string()))?;
        debug!(candidates = regions.len(), "face detection complete");

        // Steps 3-4: zero regions is a distinct failure; among several, the
        // largest area wins with ties kept in first-encountered order
        let face = select_primary_face(&regions).ok_or(AnalysisError::NoFaceDetected)?;

        // Steps 5-7: masked plane means inside the selected region
        let (mean_l, mean_b, count) = self.masked_plane_means(image, &face);
        debug!(
            skin_pixels = count,
            region_area = face.area(),
            "skin mask applied"
        );

        if count < self.config.min_skin_pixels {
            return Err(AnalysisError::InsufficientSkinPixels {
                found: count,
                minimum: self.config.min_skin_pixels,
            });
        }

        // Guard only the exact-zero mean; near-zero values pass through
        let mean_b = if mean_b == 0.0 {
            skin::ZERO_MEAN_B_SUBSTITUTE
        } else {
            mean_b
        };

        // Step 8: ITA in degrees
        let ita = ((mean_l - skin::ITA_LIGHTNESS_OFFSET) / mean_b)
            .atan()
            .to_degrees();

        Ok(SkinToneEstimate {
            ita,
            skin_pixels: count,
            region: face,
        })
    }

    /// Mean L and b plane values over skin-masked pixels in `region`
    ///
    /// The mask keeps pixels whose 8-bit L plane value lies strictly inside
    /// the configured open interval. Region coordinates outside the image
    /// are ignored.
    fn masked_plane_means(&self, image: &RgbImage, region: &FaceRegion) -> (f64, f64, usize) {
        let (width, height) = image.dimensions();
        let x_end = region.x.saturating_add(region.width).min(width);
        let y_end = region.y.saturating_add(region.height).min(height);

        let mut sum_l = 0.0f64;
        let mut sum_b = 0.0f64;
        let mut count = 0usize;

        for y in region.y.min(height)..y_end {
            for x in region.x.min(width)..x_end {
                let [r, g, b] = image.get_pixel(x, y).0;
                let lab8 = self.converter.rgb_to_lab8(r, g, b);

                if lab8.l > self.config.mask_lightness_min
                    && lab8.l < self.config.mask_lightness_max
                {
                    sum_l += lab8.l as f64;
                    sum_b += lab8.b as f64;
                    count += 1;
                }
            }
        }

        if count == 0 {
            return (0.0, 0.0, 0);
        }
        (sum_l / count as f64, sum_b / count as f64, count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detection::DetectionParams;
    use image::{GrayImage, Rgb};

    /// Detector returning a fixed list of regions
    struct FixedDetector(Vec<FaceRegion>);

    impl FaceDetector for FixedDetector {
        fn detect(
            &self,
            _image: &GrayImage,
            _params: &DetectionParams,
        ) -> std::result::Result<Vec<FaceRegion>, Box<dyn std::error::Error + Send + Sync>>
        {
            Ok(self.0.clone())
        }
    }

    /// Detector that always fails
    struct BrokenDetector;

    impl FaceDetector for BrokenDetector {
        fn detect(
            &self,
            _image: &GrayImage,
            _params: &DetectionParams,
        ) -> std::result::Result<Vec<FaceRegion>, Box<dyn std::error::Error + Send + Sync>>
        {
            Err("cascade file missing".into())
        }
    }

    fn skin_image(width: u32, height: u32) -> RgbImage {
        RgbImage::from_pixel(width, height, Rgb([200, 160, 140]))
    }

    #[test]
    fn test_estimate_uniform_skin_region() {
        let image = skin_image(64, 64);
        let detector = FixedDetector(vec![FaceRegion::new(8, 8, 48, 48)]);
        let estimator = SkinToneEstimator::new(detector);

        let estimate = estimator.estimate(&image).unwrap();
        assert!(estimate.ita.is_finite());
        assert!(estimate.ita > -90.0 && estimate.ita < 90.0);
        assert_eq!(estimate.skin_pixels, 48 * 48);
    }

    #[test]
    fn test_lighter_skin_has_higher_ita() {
        let detector = |region| FixedDetector(vec![region]);
        let region = FaceRegion::new(0, 0, 32, 32);

        let light = SkinToneEstimator::new(detector(region))
            .estimate(&RgbImage::from_pixel(32, 32, Rgb([230, 200, 180])))
            .unwrap();
        let dark = SkinToneEstimator::new(detector(region))
            .estimate(&RgbImage::from_pixel(32, 32, Rgb([110, 80, 60])))
            .unwrap();

        assert!(light.ita > dark.ita);
    }

    #[test]
    fn test_no_face_detected() {
        let image = skin_image(64, 64);
        let estimator = SkinToneEstimator::new(FixedDetector(Vec::new()));

        match estimator.estimate(&image) {
            Err(AnalysisError::NoFaceDetected) => {}
            other => panic!("expected NoFaceDetected, got {:?}", other.map(|e| e.ita)),
        }
    }

    #[test]
    fn test_insufficient_skin_pixels_on_dark_region() {
        // Every pixel lands below the mask lower bound
        let image = RgbImage::from_pixel(64, 64, Rgb([5, 5, 5]));
        let estimator =
            SkinToneEstimator::new(FixedDetector(vec![FaceRegion::new(0, 0, 64, 64)]));

        match estimator.estimate(&image) {
            Err(AnalysisError::InsufficientSkinPixels { found, minimum }) => {
                assert_eq!(found, 0);
                assert_eq!(minimum, 100);
            }
            other => panic!("expected InsufficientSkinPixels, got {:?}", other.map(|e| e.ita)),
        }
    }

    #[test]
    fn test_insufficient_skin_pixels_on_tiny_region() {
        let image = skin_image(64, 64);
        // 9 masked pixels, below the minimum of 100
        let estimator = SkinToneEstimator::new(FixedDetector(vec![FaceRegion::new(0, 0, 3, 3)]));

        match estimator.estimate(&image) {
            Err(AnalysisError::InsufficientSkinPixels { found, .. }) => assert_eq!(found, 9),
            other => panic!("expected InsufficientSkinPixels, got {:?}", other.map(|e| e.ita)),
        }
    }

    #[test]
    fn test_detector_failure_is_translated() {
        let image = skin_image(32, 32);
        let estimator = SkinToneEstimator::new(BrokenDetector);

        match estimator.estimate(&image) {
            Err(AnalysisError::DetectorFailure { message }) => {
                assert!(message.contains("cascade file missing"));
            }
            other => panic!("expected DetectorFailure, got {:?}", other.map(|e| e.ita)),
        }
    }

    #[test]
    fn test_largest_face_is_measured() {
        // Left half light, right half dark; two candidate regions of
        // different sizes, one per half
        let mut image = RgbImage::from_pixel(128, 64, Rgb([230, 200, 180]));
        for y in 0..64 {
            for x in 64..128 {
                image.put_pixel(x, y, Rgb([110, 80, 60]));
            }
        }

        let small_light = FaceRegion::new(0, 0, 20, 20);
        let large_dark = FaceRegion::new(64, 0, 40, 40);
        let estimator =
            SkinToneEstimator::new(FixedDetector(vec![small_light, large_dark]));
        let estimate = estimator.estimate(&image).unwrap();

        assert_eq!(estimate.region, large_dark);

        let dark_only = SkinToneEstimator::new(FixedDetector(vec![large_dark]))
            .estimate(&image)
            .unwrap();
        assert!((estimate.ita - dark_only.ita).abs() < 1e-9);
    }

    #[test]
    fn test_region_clipped_to_image_bounds() {
        let image = skin_image(32, 32);
        // Region extends past the image; only the in-bounds part is measured
        let estimator =
            SkinToneEstimator::new(FixedDetector(vec![FaceRegion::new(16, 16, 100, 100)]));

        let estimate = estimator.estimate(&image).unwrap();
        assert_eq!(estimate.skin_pixels, 16 * 16);
    }
}
