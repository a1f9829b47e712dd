//! Borrowed interleaved byte-image views supplied by the caller.
//!
//! The engine itself never decodes files; collaborators hand in raw
//! interleaved channel bytes tagged with their layout, and the greyscale
//! reduction in [`super::FloatImage::from_bytes`] consumes the view.

/// Channel layout of a borrowed byte image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PixelFormat {
    /// 4 bytes per pixel: R, G, B, unused padding byte.
    Rgb32,
    /// 4 bytes per pixel: R, G, B, alpha.
    Argb32,
    /// 1 byte per pixel, single luma channel.
    Gray8,
}

impl PixelFormat {
    #[inline]
    pub fn bytes_per_pixel(self) -> usize {
        match self {
            PixelFormat::Rgb32 | PixelFormat::Argb32 => 4,
            PixelFormat::Gray8 => 1,
        }
    }
}

/// Read-only view over a caller-owned interleaved byte buffer.
#[derive(Clone, Debug)]
pub struct ByteImage<'a> {
    pub w: usize,
    pub h: usize,
    pub format: PixelFormat,
    pub data: &'a [u8],
}

impl<'a> ByteImage<'a> {
    pub fn new(w: usize, h: usize, format: PixelFormat, data: &'a [u8]) -> Self {
        assert!(w > 0 && h > 0, "image dimensions must be positive");
        assert_eq!(
            data.len(),
            w * h * format.bytes_per_pixel(),
            "byte buffer length does not match dimensions"
        );
        Self { w, h, format, data }
    }
}
