//! Pluggable color clustering capability
//!
//! Dominant color extraction needs a partition of pixel colors into k
//! groups. The clustering backend is a pluggable capability with a small
//! contract: deterministic under a fixed seed, and convergence within a
//! bounded number of iterations (the best partition so far is returned when
//! the bound is hit). The default backend is k-means over sRGB points.

use kmeans_colors::get_kmeans;
use palette::Srgb;

use crate::constants::clustering;

/// Partition of color samples into clusters
///
/// Transient: produced and consumed within one extraction call.
#[derive(Debug, Clone)]
pub struct ClusterOutcome {
    /// Cluster centroids in sRGB, components in [0, 1]
    pub centroids: Vec<Srgb>,

    /// Cluster index assigned to each input sample
    pub assignments: Vec<u8>,
}

impl ClusterOutcome {
    /// Index of the cluster with the most assigned samples
    ///
    /// The first maximal cluster wins when populations are equal. Returns
    /// `None` for an outcome with no centroids.
    pub fn most_populous(&self) -> Option<(usize, usize)> {
        if self.centroids.is_empty() {
            return None;
        }

        let mut counts = vec![0usize; self.centroids.len()];
        for &index in &self.assignments {
            if let Some(count) = counts.get_mut(index as usize) {
                *count += 1;
            }
        }

        let mut best = 0;
        for (i, &count) in counts.iter().enumerate() {
            if count > counts[best] {
                best = i;
            }
        }

        Some((best, counts[best]))
    }
}

/// Pluggable clustering capability
pub trait Clusterer {
    /// Partition `samples` into `k` clusters
    ///
    /// `k` is at most `samples.len()`; callers guarantee both are nonzero.
    /// The same samples, k, and seed must produce the same partition.
    fn cluster(&self, samples: &[Srgb], k: usize, seed: u64) -> ClusterOutcome;
}

/// K-means clustering over sRGB points
#[derive(Debug, Clone)]
pub struct KmeansClusterer {
    max_iterations: usize,
    convergence: f32,
}

impl Default for KmeansClusterer {
    fn default() -> Self {
        Self::new()
    }
}

impl KmeansClusterer {
    /// Create a clusterer with the default iteration bound and threshold
    pub fn new() -> Self {
        Self {
            max_iterations: clustering::MAX_ITERATIONS,
            convergence: clustering::CONVERGENCE,
        }
    }

    /// Create a clusterer with a custom iteration bound and threshold
    pub fn with_params(max_iterations: usize, convergence: f32) -> Self {
        Self {
            max_iterations,
            convergence,
        }
    }
}

impl Clusterer for KmeansClusterer {
    fn cluster(&self, samples: &[Srgb], k: usize, seed: u64) -> ClusterOutcome {
        let result = get_kmeans(
            k,
            self.max_iterations,
            self.convergence,
            false,
            samples,
            seed,
        );

        ClusterOutcome {
            centroids: result.centroids,
            assignments: result.indices,
        }
    }
}
