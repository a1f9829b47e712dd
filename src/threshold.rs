//! Sauvola adaptive thresholding.
//!
//! Per pixel the threshold is `t = m · (1 + k · (s/128 − 1))` where `m` is
//! the local mean, `s` the local standard deviation and `k` a caller-supplied
//! factor, usually in [0.2, 0.5]. Out-of-range factors are accepted; picking
//! a sensible `k` is caller policy.
use crate::image::FloatImage;

/// Build the per-pixel threshold map from local mean and standard deviation.
pub fn sauvola_threshold(mean: &FloatImage, std_dev: &FloatImage, factor: f32) -> FloatImage {
    assert_eq!(
        (mean.w, mean.h),
        (std_dev.w, std_dev.h),
        "mean/stddev dimensions differ"
    );
    let mut dst = FloatImage::new(mean.w, mean.h);
    for ((t, &m), &s) in dst.data.iter_mut().zip(&mean.data).zip(&std_dev.data) {
        *t = m * (1.0 + factor * (s / 128.0 - 1.0));
    }
    dst
}

/// Binarize `src` against a per-pixel threshold map.
///
/// Strict less-than: a pixel equal to its threshold stays foreground (255).
pub fn apply_thresholds(src: &FloatImage, thresholds: &FloatImage) -> FloatImage {
    assert_eq!(
        (src.w, src.h),
        (thresholds.w, thresholds.h),
        "source/threshold dimensions differ"
    );
    let mut dst = FloatImage::new(src.w, src.h);
    for ((out, &v), &t) in dst.data.iter_mut().zip(&src.data).zip(&thresholds.data) {
        *out = if v < t { 0.0 } else { 255.0 };
    }
    dst
}
