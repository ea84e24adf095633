use jpeg_encoder::{ColorType, Encoder};

use crate::error::{Error, Result};

/// Encode interleaved RGB8 pixels as a baseline JPEG at `quality` (1-100).
pub fn encode_rgb_jpeg(width: u32, height: u32, rgb_data: &[u8], quality: u8) -> Result<Vec<u8>> {
    let (w, h) = match (u16::try_from(width), u16::try_from(height)) {
        (Ok(w), Ok(h)) => (w, h),
        _ => {
            return Err(Error::Processing(format!(
                "{}x{} exceeds the JPEG size limit",
                width, height
            )));
        }
    };

    let mut buffer = Vec::new();
    let encoder = Encoder::new(&mut buffer, quality.clamp(1, 100));
    encoder
        .encode(rgb_data, w, h, ColorType::Rgb)
        .map_err(Error::external)?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_decodable_jpeg() {
        let rgb = vec![128u8; 16 * 8 * 3];
        let bytes = encode_rgb_jpeg(16, 8, &rgb, 95).unwrap();
        assert_eq!(&bytes[..2], &[0xFF, 0xD8]);
        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (16, 8));
    }

    #[test]
    fn rejects_oversized_images() {
        assert!(encode_rgb_jpeg(70_000, 1, &[], 95).is_err());
    }
}
