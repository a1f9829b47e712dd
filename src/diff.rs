//! Thresholded difference of two smoothed page images.
//!
//! Both inputs are smoothed with a fixed 7×7, σ = 0.4 Gaussian before the
//! comparison to suppress pixel noise, then the delta is compared in squared
//! form against the barrier so the hot loop avoids a square root.
use crate::image::FloatImage;
use crate::smooth::{gaussian_kernel, smooth_parallel};
use log::debug;

const DIFF_KERNEL_SIZE: usize = 7;
const DIFF_KERNEL_SIGMA: f32 = 0.4;

/// Compare two equally-sized pages after Gaussian noise suppression.
///
/// Output is 255.0 where the smoothed intensities differ by more than
/// `dist_barrier` (a linear intensity threshold), 0.0 elsewhere.
pub fn diff(a: &FloatImage, b: &FloatImage, dist_barrier: f32) -> FloatImage {
    assert_eq!(
        (a.w, a.h),
        (b.w, b.h),
        "diff inputs must have equal dimensions"
    );
    let kernel = gaussian_kernel(DIFF_KERNEL_SIZE, DIFF_KERNEL_SIGMA);
    let smooth_a = smooth_parallel(a, &kernel);
    let smooth_b = smooth_parallel(b, &kernel);
    debug!(
        "diff: smoothed two {}x{} pages, barrier={dist_barrier}",
        a.w, a.h
    );

    let barrier2 = dist_barrier * dist_barrier;
    let mut dst = FloatImage::new(a.w, a.h);
    for ((out, &va), &vb) in dst.data.iter_mut().zip(&smooth_a.data).zip(&smooth_b.data) {
        let dv = va - vb;
        *out = if dv * dv > barrier2 { 255.0 } else { 0.0 };
    }
    dst
}
