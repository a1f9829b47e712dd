#![doc = include_str!("../README.md")]

pub mod config;
pub mod diff;
pub mod image;
pub mod integral;
pub mod pipeline;
pub mod smooth;
pub mod stats;
pub mod threshold;

// --- High-level re-exports -------------------------------------------------

// Main entry points: binarizer + results.
pub use crate::image::FloatImage;
pub use crate::pipeline::{BinarizeOutput, BinarizeParams, BinarizeReport, Binarizer};
pub use crate::stats::StatsStrategy;

// Standalone filters that are generally useful.
pub use crate::diff::diff;
pub use crate::smooth::{gaussian_kernel, smooth, smooth_parallel};

/// Small prelude for quick experiments.
pub mod prelude {
    pub use crate::image::{ByteImage, FloatImage, PixelFormat};
    pub use crate::{BinarizeParams, Binarizer, StatsStrategy};
}
