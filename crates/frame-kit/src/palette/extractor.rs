//! Dominant color extraction by k-means clustering
//!
//! The image is downsampled to a small working size, translucent pixels are
//! discarded, and the remaining RGB samples are clustered with Lloyd's
//! algorithm seeded by k-means++. The RNG is seeded with a fixed value so the
//! same image always yields the same colors.

use image::imageops::{self, FilterType};
use image::RgbaImage;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::dominant::{DominantColorSet, PaletteEntry};
use crate::color::ColorRgba;

/// Fallback dominant color (teal).
pub const FALLBACK_DOMINANT: ColorRgba = ColorRgba::opaque(0, 179, 173);
/// Fallback secondary color (deep purple).
pub const FALLBACK_SECONDARY: ColorRgba = ColorRgba::opaque(44, 27, 71);

type Sample = [f32; 3];

/// Tuning knobs for [`ColorExtractor`].
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractOptions {
    /// Shortest side of the downsampled working image, in pixels.
    pub working_size: u32,
    /// Pixels with alpha at or below this value are ignored.
    pub alpha_threshold: u8,
    /// RNG seed for centroid initialization.
    pub seed: u64,
    /// Upper bound on Lloyd iterations.
    pub max_iterations: usize,
    /// Returned when fewer valid pixels than `k` remain.
    pub fallback: [ColorRgba; 2],
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            working_size: 100,
            alpha_threshold: 200,
            seed: 42,
            max_iterations: 50,
            fallback: [FALLBACK_DOMINANT, FALLBACK_SECONDARY],
        }
    }
}

/// Extracts dominant colors from an RGBA image.
///
/// # Example
///
/// ```
/// use frame_kit::{ColorExtractor, ColorRgba};
/// use image::{Rgba, RgbaImage};
///
/// let logo = RgbaImage::from_pixel(40, 40, Rgba([200, 10, 10, 255]));
/// let colors = ColorExtractor::new().extract(&logo, 2);
/// assert_eq!(colors.dominant(), ColorRgba::opaque(200, 10, 10));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ColorExtractor {
    options: ExtractOptions,
}

impl ColorExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ExtractOptions) -> Self {
        Self { options }
    }

    /// Override the fallback pair.
    pub fn fallback(mut self, dominant: ColorRgba, secondary: ColorRgba) -> Self {
        self.options.fallback = [dominant, secondary];
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.options.seed = seed;
        self
    }

    pub fn options(&self) -> &ExtractOptions {
        &self.options
    }

    /// Cluster the image into at most `k` colors (`k == 0` is treated as 1).
    ///
    /// Never fails: an empty or fully transparent image, or one with fewer
    /// valid pixels than `k`, returns the fallback pair.
    pub fn extract(&self, image: &RgbaImage, k: usize) -> DominantColorSet {
        let k = k.max(1);
        let [fallback_dominant, fallback_secondary] = self.options.fallback;

        let samples = self.collect_samples(image);
        if samples.len() < k {
            return DominantColorSet::fallback(fallback_dominant, fallback_secondary);
        }

        let mut rng = StdRng::seed_from_u64(self.options.seed);
        let (centroids, assignments) =
            kmeans(&samples, k, self.options.max_iterations, &mut rng);

        let mut populations = vec![0usize; centroids.len()];
        for &cluster in &assignments {
            populations[cluster] += 1;
        }

        let entries = centroids
            .iter()
            .zip(populations)
            .filter(|(_, population)| *population > 0)
            .map(|(c, population)| PaletteEntry {
                color: ColorRgba::opaque(to_channel(c[0]), to_channel(c[1]), to_channel(c[2])),
                population,
            })
            .collect();

        DominantColorSet::from_clusters(entries)
            .unwrap_or_else(|| DominantColorSet::fallback(fallback_dominant, fallback_secondary))
    }

    /// Downsample and keep the RGB of sufficiently opaque pixels.
    fn collect_samples(&self, image: &RgbaImage) -> Vec<Sample> {
        let (w, h) = image.dimensions();
        if w == 0 || h == 0 {
            return Vec::new();
        }

        let target = self.options.working_size.max(1) as u64;
        let shortest = w.min(h) as u64;
        let new_w = ((w as u64 * target) / shortest).max(1) as u32;
        let new_h = ((h as u64 * target) / shortest).max(1) as u32;

        let small = if (new_w, new_h) == (w, h) {
            image.clone()
        } else {
            imageops::resize(image, new_w, new_h, FilterType::Lanczos3)
        };

        small
            .pixels()
            .filter(|px| px.0[3] > self.options.alpha_threshold)
            .map(|px| [px.0[0] as f32, px.0[1] as f32, px.0[2] as f32])
            .collect()
    }
}

/// Cluster with the default options.
pub fn extract_dominant(image: &RgbaImage, k: usize) -> DominantColorSet {
    ColorExtractor::new().extract(image, k)
}

fn kmeans(
    samples: &[Sample],
    k: usize,
    max_iterations: usize,
    rng: &mut StdRng,
) -> (Vec<Sample>, Vec<usize>) {
    let mut centroids = initialize_centroids(samples, k, rng);
    let mut assignments = vec![usize::MAX; samples.len()];

    for _ in 0..max_iterations.max(1) {
        let changed = assign_clusters(samples, &centroids, &mut assignments);
        if !changed {
            break;
        }
        update_centroids(samples, &assignments, &mut centroids);
    }

    (centroids, assignments)
}

/// k-means++ seeding. Stops early when every sample coincides with a chosen
/// centroid, so flat images yield fewer than `k` centroids.
fn initialize_centroids(samples: &[Sample], k: usize, rng: &mut StdRng) -> Vec<Sample> {
    let mut centroids = Vec::with_capacity(k);
    centroids.push(samples[rng.gen_range(0..samples.len())]);

    let mut nearest: Vec<f32> = samples
        .iter()
        .map(|s| distance_sq(s, &centroids[0]))
        .collect();

    while centroids.len() < k {
        let total: f64 = nearest.iter().map(|&d| d as f64).sum();
        if total <= 0.0 {
            break;
        }

        let mut target = rng.gen::<f64>() * total;
        let mut chosen = samples.len() - 1;
        for (i, &d) in nearest.iter().enumerate() {
            target -= d as f64;
            if target <= 0.0 && d > 0.0 {
                chosen = i;
                break;
            }
        }
        let next = samples[chosen];
        centroids.push(next);

        for (d, s) in nearest.iter_mut().zip(samples) {
            *d = d.min(distance_sq(s, &next));
        }
    }

    centroids
}

fn assign_clusters(samples: &[Sample], centroids: &[Sample], assignments: &mut [usize]) -> bool {
    let mut changed = false;
    for (sample, assigned) in samples.iter().zip(assignments.iter_mut()) {
        let mut best = 0;
        let mut best_dist = f32::INFINITY;
        for (idx, centroid) in centroids.iter().enumerate() {
            let dist = distance_sq(sample, centroid);
            if dist < best_dist {
                best_dist = dist;
                best = idx;
            }
        }
        if *assigned != best {
            *assigned = best;
            changed = true;
        }
    }
    changed
}

/// Move each centroid to the mean of its members. Empty clusters keep their
/// previous position and are dropped by the caller.
fn update_centroids(samples: &[Sample], assignments: &[usize], centroids: &mut [Sample]) {
    let mut sums = vec![[0.0f64; 3]; centroids.len()];
    let mut counts = vec![0usize; centroids.len()];

    for (sample, &cluster) in samples.iter().zip(assignments) {
        for c in 0..3 {
            sums[cluster][c] += sample[c] as f64;
        }
        counts[cluster] += 1;
    }

    for (i, centroid) in centroids.iter_mut().enumerate() {
        if counts[i] > 0 {
            for c in 0..3 {
                centroid[c] = (sums[i][c] / counts[i] as f64) as f32;
            }
        }
    }
}

fn distance_sq(a: &Sample, b: &Sample) -> f32 {
    let dr = a[0] - b[0];
    let dg = a[1] - b[1];
    let db = a[2] - b[2];
    dr * dr + dg * dg + db * db
}

fn to_channel(v: f32) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}
