//! Sauvola binarization pipeline with per-stage timing.
//!
//! One `process` call runs windowed statistics → threshold map → black/white
//! image on a greyscale page and reports how long each stage took. Purely
//! synchronous; the only internal concurrency is whatever the selected
//! stages use themselves.
use crate::image::FloatImage;
use crate::stats::{self, StatsStrategy};
use crate::threshold::{apply_thresholds, sauvola_threshold};
use log::debug;
use serde::{Deserialize, Serialize};
use std::time::Instant;

fn default_window_size() -> usize {
    15
}

fn default_factor() -> f32 {
    0.25
}

/// Tunables of one binarization run.
#[derive(Clone, Debug, Deserialize)]
pub struct BinarizeParams {
    /// Odd side length of the statistics window, in pixels.
    #[serde(default = "default_window_size")]
    pub window_size: usize,
    /// Sauvola factor `k`, advisory range [0.2, 0.5].
    #[serde(default = "default_factor")]
    pub sauvola_factor: f32,
    /// Windowed-statistics path to run.
    #[serde(default)]
    pub strategy: StatsStrategy,
}

impl Default for BinarizeParams {
    fn default() -> Self {
        Self {
            window_size: default_window_size(),
            sauvola_factor: default_factor(),
            strategy: StatsStrategy::default(),
        }
    }
}

/// Stage timings of one run, in milliseconds.
#[derive(Clone, Debug, Default, Serialize)]
pub struct BinarizeReport {
    pub stats_ms: f64,
    pub threshold_ms: f64,
    pub total_ms: f64,
}

/// Binarized page plus its timing report.
#[derive(Clone, Debug)]
pub struct BinarizeOutput {
    pub image: FloatImage,
    pub report: BinarizeReport,
}

/// Adaptive binarizer configured once and applied per page.
#[derive(Clone, Debug, Default)]
pub struct Binarizer {
    params: BinarizeParams,
}

impl Binarizer {
    pub fn new(params: BinarizeParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &BinarizeParams {
        &self.params
    }

    /// Binarize one greyscale page.
    pub fn process(&self, src: &FloatImage) -> BinarizeOutput {
        let start = Instant::now();
        let (mean, std_dev) = stats::mean_std(src, self.params.window_size, self.params.strategy);
        let stats_ms = start.elapsed().as_secs_f64() * 1e3;
        debug!(
            "binarize: {:?} stats on {}x{}, window={}, {:.3} ms",
            self.params.strategy, src.w, src.h, self.params.window_size, stats_ms
        );

        let threshold_start = Instant::now();
        let thresholds = sauvola_threshold(&mean, &std_dev, self.params.sauvola_factor);
        let image = apply_thresholds(src, &thresholds);
        let threshold_ms = threshold_start.elapsed().as_secs_f64() * 1e3;
        let total_ms = start.elapsed().as_secs_f64() * 1e3;
        debug!("binarize: threshold {threshold_ms:.3} ms, total {total_ms:.3} ms");

        BinarizeOutput {
            image,
            report: BinarizeReport {
                stats_ms,
                threshold_ms,
                total_ms,
            },
        }
    }
}
