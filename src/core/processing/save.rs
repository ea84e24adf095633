use std::io::Cursor;
use std::path::Path;

use image::DynamicImage;
use tracing::info;

use crate::error::Result;
use crate::io::writers::{encode_rgb_jpeg, write_atomic};
use crate::types::ImageKind;

/// Encode `img` in the format of `kind`. JPEG is always written as RGB at
/// `jpeg_quality`; PNG keeps alpha; GIF and BMP are written without it.
pub fn encode_image(img: &DynamicImage, kind: ImageKind, jpeg_quality: u8) -> Result<Vec<u8>> {
    match kind {
        ImageKind::Jpeg => {
            let rgb = img.to_rgb8();
            encode_rgb_jpeg(rgb.width(), rgb.height(), rgb.as_raw(), jpeg_quality)
        }
        ImageKind::Png => {
            let mut buf = Cursor::new(Vec::new());
            img.write_to(&mut buf, kind.image_format())?;
            Ok(buf.into_inner())
        }
        ImageKind::Gif | ImageKind::Bmp => {
            let rgb = DynamicImage::ImageRgb8(img.to_rgb8());
            let mut buf = Cursor::new(Vec::new());
            rgb.write_to(&mut buf, kind.image_format())?;
            Ok(buf.into_inner())
        }
    }
}

/// Encode and replace the file at `output` in place.
pub fn save_normalized_image(
    img: &DynamicImage,
    output: &Path,
    kind: ImageKind,
    jpeg_quality: u8,
) -> Result<()> {
    let bytes = encode_image(img, kind, jpeg_quality)?;
    write_atomic(output, &bytes)?;
    info!(
        "Saved {} {}x{} ({} bytes): {:?}",
        kind,
        img.width(),
        img.height(),
        bytes.len(),
        output
    );
    Ok(())
}
