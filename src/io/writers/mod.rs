//! Output writers: JPEG encoding at a fixed quality and atomic in-place file replacement.
pub mod atomic;
pub mod jpeg;

pub use atomic::write_atomic;
pub use jpeg::encode_rgb_jpeg;
