pub mod bytes;
pub mod f32;
pub mod io;

pub use self::bytes::{ByteImage, PixelFormat};
pub use self::f32::{ConvertError, FloatImage};
