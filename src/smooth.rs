//! Gaussian kernel construction and border-renormalizing 2D convolution.
//!
//! Footprint cells that fall outside the image are skipped, not substituted
//! with zeros, and the accumulated sum is divided by the weight mass actually
//! used. This keeps edge pixels at their brightness instead of darkening them
//! the way zero padding would; the policy is load-bearing and must match
//! between the serial and parallel paths.
//!
//! The parallel variant splits the output into contiguous row bands, one per
//! worker. Bands write disjoint rows and read only the shared source and
//! kernel, so its output is float-for-float identical to the serial path.
use crate::image::FloatImage;
use rayon::prelude::*;

/// Build a normalized square Gaussian kernel of odd side `size`.
///
/// The weight at `(x, y)` is `exp(−(((x−c)/c)² + ((y−c)/c)²) · ks)` with
/// `ks = 1/(2σ²)` and integer center `c = size/2`; weights are scaled so the
/// total mass is 1. For `size == 1` the zero center divisor is clamped to 1,
/// which degenerates to the identity kernel instead of NaN.
pub fn gaussian_kernel(size: usize, sigma: f32) -> FloatImage {
    assert!(size & 1 == 1, "kernel size must be odd");
    assert!(sigma > 0.0, "sigma must be positive");

    let c = (size / 2) as f32;
    let denom = (size / 2).max(1) as f32;
    let ks = 1.0 / (2.0 * sigma * sigma);

    let mut kernel = FloatImage::new(size, size);
    let mut sum = 0.0f32;
    for y in 0..size {
        let dy = (y as f32 - c) / denom;
        for x in 0..size {
            let dx = (x as f32 - c) / denom;
            let we = (-(dx * dx + dy * dy) * ks).exp();
            kernel.set(x, y, we);
            sum += we;
        }
    }
    let scale = 1.0 / sum;
    for v in &mut kernel.data {
        *v *= scale;
    }
    kernel
}

/// Convolve `src` with a square odd-sized kernel, renormalizing at borders.
pub fn smooth(src: &FloatImage, kernel: &FloatImage) -> FloatImage {
    let mut dst = FloatImage::new(src.w, src.h);
    smooth_rows(src, kernel, 0, &mut dst.data);
    dst
}

/// Row-banded parallel variant of [`smooth`].
///
/// Worker count is the available hardware parallelism minus two reserved
/// units, at least one; a single worker falls back to the serial path.
pub fn smooth_parallel(src: &FloatImage, kernel: &FloatImage) -> FloatImage {
    let workers = worker_count().min(src.h);
    if workers <= 1 {
        return smooth(src, kernel);
    }
    let band_rows = src.h.div_ceil(workers);
    let mut dst = FloatImage::new(src.w, src.h);
    dst.data
        .par_chunks_mut(band_rows * src.w)
        .enumerate()
        .for_each(|(band, out)| smooth_rows(src, kernel, band * band_rows, out));
    dst
}

fn worker_count() -> usize {
    let units = std::thread::available_parallelism().map_or(1, |n| n.get());
    units.saturating_sub(2).max(1)
}

/// Convolve rows `y0 ..` of `src` into `out` (a whole number of rows).
fn smooth_rows(src: &FloatImage, kernel: &FloatImage, y0: usize, out: &mut [f32]) {
    assert_eq!(kernel.w, kernel.h, "kernel must be square");
    assert!(kernel.w & 1 == 1, "kernel size must be odd");
    let (w, h) = (src.w, src.h);
    let rad = (kernel.w / 2) as isize;

    for (row_idx, out_row) in out.chunks_exact_mut(w).enumerate() {
        let y = y0 + row_idx;
        for (x, out_px) in out_row.iter_mut().enumerate() {
            let mut sum = 0.0f32;
            let mut weight_used = 0.0f32;
            for ky in -rad..=rad {
                let yy = y as isize + ky;
                if yy < 0 || yy >= h as isize {
                    continue;
                }
                let src_row = src.row(yy as usize);
                let k_row = kernel.row((ky + rad) as usize);
                for kx in -rad..=rad {
                    let xx = x as isize + kx;
                    if xx < 0 || xx >= w as isize {
                        continue;
                    }
                    let we = k_row[(kx + rad) as usize];
                    sum += src_row[xx as usize] * we;
                    weight_used += we;
                }
            }
            // the center tap is always in range, so weight_used > 0
            *out_px = sum / weight_used;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient_image(w: usize, h: usize) -> FloatImage {
        let mut img = FloatImage::new(w, h);
        for y in 0..h {
            for x in 0..w {
                img.set(x, y, (x * 3 + y * 7) as f32 % 256.0);
            }
        }
        img
    }

    #[test]
    fn kernel_has_unit_mass() {
        for (size, sigma) in [(3, 1.0), (7, 0.4), (11, 2.5)] {
            let kernel = gaussian_kernel(size, sigma);
            let mass: f32 = kernel.data.iter().sum();
            assert!((mass - 1.0).abs() < 1e-5, "size {size}: mass {mass}");
        }
    }

    #[test]
    fn kernel_peaks_at_center() {
        let kernel = gaussian_kernel(7, 0.4);
        let center = kernel.get(3, 3);
        assert!(kernel.data.iter().all(|&v| v <= center));
    }

    #[test]
    fn size_one_kernel_is_identity() {
        let kernel = gaussian_kernel(1, 0.5);
        assert_eq!(kernel.data, vec![1.0]);
        let img = gradient_image(5, 4);
        let smoothed = smooth(&img, &kernel);
        assert_eq!(smoothed.data, img.data);
    }

    #[test]
    fn flat_field_is_unchanged() {
        let mut img = FloatImage::new(16, 16);
        img.data.fill(255.0);
        let kernel = gaussian_kernel(7, 0.4);
        let smoothed = smooth(&img, &kernel);
        // in-range weights renormalize to 1, so even border pixels hold
        assert!((smoothed.get(0, 0) - 255.0).abs() < 1e-3);
        assert!((smoothed.get(8, 8) - 255.0).abs() < 1e-3);
    }

    #[test]
    fn smoothing_spreads_a_dark_cross() {
        let mut img = FloatImage::new(16, 16);
        img.data.fill(255.0);
        let (xc, yc) = (8, 8);
        for (x, y) in [(xc, yc), (xc + 1, yc), (xc - 1, yc), (xc, yc + 1), (xc, yc - 1)] {
            img.set(x, y, 0.0);
        }
        let kernel = gaussian_kernel(7, 0.4);
        let smoothed = smooth(&img, &kernel);
        assert!((smoothed.get(0, 0) - 255.0).abs() < 1e-3);
        assert!(smoothed.get(xc, yc) < 255.0);
    }

    #[test]
    fn parallel_matches_serial_bit_for_bit() {
        let img = gradient_image(33, 21);
        let kernel = gaussian_kernel(5, 1.2);
        let serial = smooth(&img, &kernel);
        let parallel = smooth_parallel(&img, &kernel);
        assert_eq!(serial.data, parallel.data);
    }

    #[test]
    fn parallel_handles_fewer_rows_than_workers() {
        let img = gradient_image(64, 2);
        let kernel = gaussian_kernel(3, 0.8);
        let serial = smooth(&img, &kernel);
        let parallel = smooth_parallel(&img, &kernel);
        assert_eq!(serial.data, parallel.data);
    }
}
