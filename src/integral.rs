//! Summed-area tables (integral images) over a float image.
//!
//! An `IntegralImage` stores the inclusive 2D prefix sum of a source image,
//! or of its squared pixel values, so any axis-aligned rectangle sum costs
//! four lookups. The fast windowed-statistics path builds one of each to get
//! first and second moments per window in O(1).
//!
//! `rect_sum` does no bounds clamping; callers clamp their window corners to
//! the image rectangle before querying.
use crate::image::FloatImage;

#[derive(Clone, Debug)]
pub struct IntegralImage {
    w: usize,
    h: usize,
    data: Vec<f32>,
}

impl IntegralImage {
    /// Build the inclusive prefix-sum table of `src`.
    pub fn sums(src: &FloatImage) -> Self {
        Self::build(src, |v| v)
    }

    /// Build the inclusive prefix-sum table of the squared pixel values.
    pub fn squared_sums(src: &FloatImage) -> Self {
        Self::build(src, |v| v * v)
    }

    fn build(src: &FloatImage, f: impl Fn(f32) -> f32) -> Self {
        let (w, h) = (src.w, src.h);
        let mut data = vec![0.0f32; w * h];

        // first row and first column are plain 1D running sums
        let mut sum = 0.0f32;
        for x in 0..w {
            sum += f(src.data[x]);
            data[x] = sum;
        }
        sum = 0.0;
        for y in 0..h {
            sum += f(src.data[y * w]);
            data[y * w] = sum;
        }

        for y in 1..h {
            let off = y * w;
            for x in 1..w {
                let i = off + x;
                data[i] = f(src.data[i]) + data[i - 1] + data[i - w] - data[i - w - 1];
            }
        }
        Self { w, h, data }
    }

    #[inline]
    fn at(&self, x: usize, y: usize) -> f32 {
        self.data[y * self.w + x]
    }

    /// Sum over the inclusive rectangle `[x_min, x_max] × [y_min, y_max]`.
    ///
    /// Requires `x_min <= x_max < w` and `y_min <= y_max < h`. The three
    /// degenerate inclusion-exclusion forms avoid reading at x = -1 / y = -1.
    #[inline]
    pub fn rect_sum(&self, x_min: usize, y_min: usize, x_max: usize, y_max: usize) -> f32 {
        let total = self.at(x_max, y_max);
        match (x_min, y_min) {
            (0, 0) => total,
            (0, _) => total - self.at(x_max, y_min - 1),
            (_, 0) => total - self.at(x_min - 1, y_max),
            (_, _) => {
                total - self.at(x_min - 1, y_max) - self.at(x_max, y_min - 1)
                    + self.at(x_min - 1, y_min - 1)
            }
        }
    }
}
