//! Dominant garment color extraction
//!
//! Extracts one representative color from a product photo:
//! - Centered crop discards the background margin band
//! - Near-white pixels are suppressed, with a fallback for all-white crops
//! - The remaining colors are clustered and the largest cluster's centroid
//!   is the dominant color
//!
//! The extractor is total: every image, including degenerate all-white
//! ones, produces a best-effort color.

use crate::config::DominantColorConfig;
use crate::garment::cluster::{Clusterer, KmeansClusterer};
use image::RgbImage;
use palette::Srgb;
use tracing::debug;

/// Dominant color of a garment image
#[derive(Debug, Clone, PartialEq)]
pub struct DominantColor {
    /// Centroid on the [0, 255] RGB scale
    pub rgb: [f32; 3],

    /// Centroid as sRGB with components in [0, 1]
    pub srgb: Srgb,

    /// Number of pixels assigned to the winning cluster
    pub cluster_population: usize,
}

/// Dominant color extractor over a pluggable clustering backend
pub struct DominantColorExtractor<C = KmeansClusterer> {
    clusterer: C,
    config: DominantColorConfig,
}

impl DominantColorExtractor<KmeansClusterer> {
    /// Create an extractor with the default k-means backend and configuration
    pub fn new() -> Self {
        Self::with_config(DominantColorConfig::default())
    }

    /// Create an extractor with the default backend and a custom configuration
    pub fn with_config(config: DominantColorConfig) -> Self {
        Self {
            clusterer: KmeansClusterer::with_params(config.max_iterations, config.convergence),
            config,
        }
    }
}

impl Default for DominantColorExtractor<KmeansClusterer> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clusterer> DominantColorExtractor<C> {
    /// Create an extractor over a custom clustering backend
    pub fn with_clusterer(clusterer: C, config: DominantColorConfig) -> Self {
        Self { clusterer, config }
    }

    /// Extract the dominant color of `image`
    ///
    /// # Arguments
    ///
    /// * `image` - Decoded RGB product photo, owned by the caller
    ///
    /// # Returns
    ///
    /// The centroid of the most populous color cluster. An image with no
    /// pixels yields black with a population of zero.
    pub fn extract(&self, image: &RgbImage) -> DominantColor {
        // Step 1: centered crop
        let samples = self.cropped_samples(image);
        if samples.is_empty() {
            return DominantColor {
                rgb: [0.0, 0.0, 0.0],
                srgb: Srgb::new(0.0, 0.0, 0.0),
                cluster_population: 0,
            };
        }

        // Step 3: suppress near-white pixels; an all-white crop falls back
        // to the unfiltered samples
        let threshold = self.config.white_threshold as f32 / 255.0;
        let filtered: Vec<Srgb> = samples
            .iter()
            .copied()
            .filter(|p| p.red < threshold && p.green < threshold && p.blue < threshold)
            .collect();
        let retained = if filtered.is_empty() {
            debug!("all pixels near-white, falling back to unfiltered crop");
            samples
        } else {
            filtered
        };

        // Step 4: cluster with a fixed seed
        let k = self.config.cluster_count.min(retained.len());
        let outcome = self.clusterer.cluster(&retained, k, self.config.seed);

        // Step 5: centroid of the most populous cluster
        let Some((index, population)) = outcome.most_populous() else {
            // A conforming clusterer returns at least one centroid for a
            // nonzero k; keep the degenerate answer total anyway
            return DominantColor {
                rgb: [0.0, 0.0, 0.0],
                srgb: Srgb::new(0.0, 0.0, 0.0),
                cluster_population: 0,
            };
        };
        let centroid = outcome.centroids[index];
        debug!(
            clusters = outcome.centroids.len(),
            population, "dominant cluster selected"
        );

        DominantColor {
            rgb: [
                centroid.red * 255.0,
                centroid.green * 255.0,
                centroid.blue * 255.0,
            ],
            srgb: centroid,
            cluster_population: population,
        }
    }

    /// Flattened sRGB samples of the centered crop
    ///
    /// Crop dimensions are each dimension scaled by the configured fraction
    /// (truncating), kept at a minimum of one pixel so degenerate images
    /// still produce samples. The discarded band is symmetric.
    fn cropped_samples(&self, image: &RgbImage) -> Vec<Srgb> {
        let (width, height) = image.dimensions();
        if width == 0 || height == 0 {
            return Vec::new();
        }

        let fraction = self.config.crop_fraction.clamp(0.0, 1.0);
        let crop_w = ((width as f32 * fraction) as u32).clamp(1, width);
        let crop_h = ((height as f32 * fraction) as u32).clamp(1, height);
        let start_x = (width - crop_w) / 2;
        let start_y = (height - crop_h) / 2;

        let mut samples = Vec::with_capacity((crop_w * crop_h) as usize);
        for y in start_y..start_y + crop_h {
            for x in start_x..start_x + crop_w {
                let [r, g, b] = image.get_pixel(x, y).0;
                samples.push(Srgb::new(
                    r as f32 / 255.0,
                    g as f32 / 255.0,
                    b as f32 / 255.0,
                ));
            }
        }
        samples
    }
}
