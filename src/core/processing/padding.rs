use image::{DynamicImage, Rgb, RgbImage, Rgba, RgbaImage, imageops};
use tracing::info;

use crate::types::Dimensions;

/// Background the resized image is centered on
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Canvas {
    /// RGBA filled with (255, 255, 255, 0)
    TransparentWhite,
    /// Opaque RGB white
    White,
}

/// Top-left offset that centers `inner` in `outer` (integer division).
pub fn center_offsets(inner: Dimensions, outer: Dimensions) -> (u32, u32) {
    (
        outer.width.saturating_sub(inner.width) / 2,
        outer.height.saturating_sub(inner.height) / 2,
    )
}

/// Place `img` at the center of a `target` sized canvas.
///
/// On a transparent canvas the RGBA pixels are copied as-is; on a white canvas
/// alpha is dropped.
pub fn pad_to_canvas(img: &RgbaImage, target: Dimensions, canvas: Canvas) -> DynamicImage {
    let inner = Dimensions::new(img.width(), img.height());
    let (pad_left, pad_top) = center_offsets(inner, target);

    info!(
        "Adding padding: inner={}, pad_left={}, pad_top={}, final={}",
        inner, pad_left, pad_top, target
    );

    match canvas {
        Canvas::TransparentWhite => {
            let mut padded =
                RgbaImage::from_pixel(target.width, target.height, Rgba([255, 255, 255, 0]));
            imageops::replace(&mut padded, img, pad_left as i64, pad_top as i64);
            DynamicImage::ImageRgba8(padded)
        }
        Canvas::White => {
            let rgb = DynamicImage::ImageRgba8(img.clone()).to_rgb8();
            let mut padded = RgbImage::from_pixel(target.width, target.height, Rgb([255, 255, 255]));
            imageops::replace(&mut padded, &rgb, pad_left as i64, pad_top as i64);
            DynamicImage::ImageRgb8(padded)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::GenericImageView;

    #[test]
    fn offsets_round_down() {
        assert_eq!(
            center_offsets(Dimensions::new(10, 7), Dimensions::new(20, 20)),
            (5, 6)
        );
        assert_eq!(
            center_offsets(Dimensions::new(20, 20), Dimensions::new(20, 20)),
            (0, 0)
        );
    }

    #[test]
    fn transparent_canvas_keeps_alpha() {
        let inner = RgbaImage::from_pixel(2, 4, Rgba([200, 0, 0, 255]));
        let out = pad_to_canvas(&inner, Dimensions::new(6, 4), Canvas::TransparentWhite);
        assert_eq!(out.dimensions(), (6, 4));
        assert_eq!(out.get_pixel(0, 0), Rgba([255, 255, 255, 0]));
        assert_eq!(out.get_pixel(2, 1), Rgba([200, 0, 0, 255]));
        assert_eq!(out.get_pixel(3, 3), Rgba([200, 0, 0, 255]));
        assert_eq!(out.get_pixel(4, 0), Rgba([255, 255, 255, 0]));
    }

    #[test]
    fn white_canvas_is_opaque_rgb() {
        let inner = RgbaImage::from_pixel(4, 2, Rgba([0, 0, 200, 255]));
        let out = pad_to_canvas(&inner, Dimensions::new(4, 6), Canvas::White);
        assert!(matches!(out, DynamicImage::ImageRgb8(_)));
        assert_eq!(out.get_pixel(0, 0), Rgba([255, 255, 255, 255]));
        assert_eq!(out.get_pixel(1, 2), Rgba([0, 0, 200, 255]));
        assert_eq!(out.get_pixel(1, 5), Rgba([255, 255, 255, 255]));
    }
}
