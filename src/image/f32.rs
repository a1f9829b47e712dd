//! Owned single-channel f32 image in row-major layout (stride == width).
//!
//! The base type every processing stage reads and writes. Pixel values are
//! intensities in [0, 255]. Instances have value semantics: `Clone` deep
//! copies the buffer, a move transfers ownership. No stage mutates its input;
//! every derived image is a new instance.
use super::bytes::{ByteImage, PixelFormat};

/// Failure to convert a byte image into a [`FloatImage`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConvertError {
    /// Only the 4-byte-per-pixel RGB layouts carry the channels the
    /// greyscale reduction needs.
    UnsupportedFormat(PixelFormat),
}

impl std::fmt::Display for ConvertError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConvertError::UnsupportedFormat(format) => {
                write!(f, "unsupported pixel format {format:?} (expected Rgb32 or Argb32)")
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FloatImage {
    /// Image width in pixels
    pub w: usize,
    /// Image height in pixels
    pub h: usize,
    /// Number of f32 elements between consecutive rows (equals `w`)
    pub stride: usize,
    /// Backing storage in row-major order
    pub data: Vec<f32>,
}

impl FloatImage {
    /// Construct a zero-initialized buffer of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        assert!(w > 0 && h > 0, "image dimensions must be positive");
        Self {
            w,
            h,
            stride: w,
            data: vec![0.0; w * h],
        }
    }

    /// Greyscale-reduce an interleaved byte image: each pixel stores
    /// `(R + G + B) / 3`. The single greyscale policy of the whole engine.
    pub fn from_bytes(src: &ByteImage<'_>) -> Result<Self, ConvertError> {
        match src.format {
            PixelFormat::Rgb32 | PixelFormat::Argb32 => {}
            other => return Err(ConvertError::UnsupportedFormat(other)),
        }
        let mut img = Self::new(src.w, src.h);
        for (px, out) in src.data.chunks_exact(4).zip(img.data.iter_mut()) {
            let r = px[0] as u32;
            let g = px[1] as u32;
            let b = px[2] as u32;
            *out = (r + g + b) as f32 / 3.0;
        }
        Ok(img)
    }

    #[inline]
    /// Convert (x, y) to a linear index into `data`.
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.stride + x
    }

    #[inline]
    /// Get the pixel value at (x, y).
    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.data[self.idx(x, y)]
    }

    #[inline]
    /// Set the pixel value at (x, y).
    pub fn set(&mut self, x: usize, y: usize, v: f32) {
        let i = self.idx(x, y);
        self.data[i] = v;
    }

    #[inline]
    /// Borrow row `y` as a slice of `w` pixels.
    pub fn row(&self, y: usize) -> &[f32] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }

    #[inline]
    /// Borrow row `y` mutably.
    pub fn row_mut(&mut self, y: usize) -> &mut [f32] {
        let start = y * self.stride;
        let end = start + self.w;
        &mut self.data[start..end]
    }

    /// Export as interleaved RGBA bytes: each float becomes an 8-bit luma
    /// replicated across R/G/B with alpha 255.
    ///
    /// Values are truncated toward zero, not rounded, so 254.9 exports as
    /// 254. Downstream equality checks depend on this; out-of-range values
    /// saturate to 0/255.
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.w * self.h * 4);
        for &v in &self.data {
            let luma = v as u8;
            out.extend_from_slice(&[luma, luma, luma, 255]);
        }
        out
    }
}
