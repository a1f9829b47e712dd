use page_binarize::image::FloatImage;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Flat page of a single intensity.
pub fn uniform_page(width: usize, height: usize, value: f32) -> FloatImage {
    let mut img = FloatImage::new(width, height);
    img.data.fill(value);
    img
}

/// White page with one dark pixel at (x, y).
pub fn dark_spot_page(width: usize, height: usize, x: usize, y: usize) -> FloatImage {
    let mut img = uniform_page(width, height, 255.0);
    img.set(x, y, 0.0);
    img
}

/// Page with reproducible pseudo-random intensities in [0, 255].
pub fn random_page(width: usize, height: usize, seed: u64) -> FloatImage {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut img = FloatImage::new(width, height);
    for v in &mut img.data {
        *v = rng.gen_range(0..256) as f32;
    }
    img
}
