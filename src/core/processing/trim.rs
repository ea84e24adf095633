use image::{DynamicImage, GenericImageView, Rgba};
use tracing::debug;

/// Rectangle of non-background content inside an image
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct ContentBounds {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Background means (nearly) transparent or (nearly) white.
pub fn is_background(pixel: &Rgba<u8>, tolerance: u8) -> bool {
    let [r, g, b, a] = pixel.0;
    let floor = 255 - tolerance;
    a <= tolerance || (r >= floor && g >= floor && b >= floor)
}

/// Smallest rectangle holding every non-background pixel; `None` for a blank image.
pub fn find_content_bounds(img: &DynamicImage, tolerance: u8) -> Option<ContentBounds> {
    let mut min_x = u32::MAX;
    let mut min_y = u32::MAX;
    let mut max_x = 0u32;
    let mut max_y = 0u32;
    let mut found = false;

    for (x, y, pixel) in img.pixels() {
        if is_background(&pixel, tolerance) {
            continue;
        }
        found = true;
        min_x = min_x.min(x);
        min_y = min_y.min(y);
        max_x = max_x.max(x);
        max_y = max_y.max(y);
    }

    if !found {
        return None;
    }

    Some(ContentBounds {
        x: min_x,
        y: min_y,
        width: max_x - min_x + 1,
        height: max_y - min_y + 1,
    })
}

/// Crop uniform near-white/transparent margins. Blank images and images without
/// a margin come back unchanged.
pub fn trim_borders(img: DynamicImage, tolerance: u8) -> DynamicImage {
    let (width, height) = img.dimensions();
    match find_content_bounds(&img, tolerance) {
        Some(b) if b.width != width || b.height != height => {
            debug!(
                "Trimming {}x{} to {}x{} at ({}, {})",
                width, height, b.width, b.height, b.x, b.y
            );
            img.crop_imm(b.x, b.y, b.width, b.height)
        }
        _ => img,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{RgbImage, RgbaImage, Rgb};

    fn white_with_block(w: u32, h: u32, x0: u32, y0: u32, bw: u32, bh: u32) -> DynamicImage {
        let mut img = RgbImage::from_pixel(w, h, Rgb([255, 255, 255]));
        for y in y0..y0 + bh {
            for x in x0..x0 + bw {
                img.put_pixel(x, y, Rgb([20, 40, 60]));
            }
        }
        DynamicImage::ImageRgb8(img)
    }

    #[test]
    fn finds_block_inside_white_margin() {
        let img = white_with_block(20, 10, 5, 2, 6, 4);
        let bounds = find_content_bounds(&img, 10).unwrap();
        assert_eq!(
            bounds,
            ContentBounds {
                x: 5,
                y: 2,
                width: 6,
                height: 4
            }
        );
        let trimmed = trim_borders(img, 10);
        assert_eq!(trimmed.dimensions(), (6, 4));
    }

    #[test]
    fn near_white_within_tolerance_is_trimmed() {
        let mut img = RgbImage::from_pixel(8, 8, Rgb([250, 250, 250]));
        img.put_pixel(3, 3, Rgb([0, 0, 0]));
        let img = DynamicImage::ImageRgb8(img);
        assert_eq!(trim_borders(img.clone(), 10).dimensions(), (1, 1));
        // Zero tolerance keeps off-white as content
        assert_eq!(trim_borders(img, 0).dimensions(), (8, 8));
    }

    #[test]
    fn transparent_margin_is_trimmed() {
        let mut img = RgbaImage::from_pixel(10, 10, Rgba([0, 0, 0, 0]));
        img.put_pixel(4, 6, Rgba([0, 0, 0, 255]));
        img.put_pixel(7, 8, Rgba([0, 0, 0, 255]));
        let trimmed = trim_borders(DynamicImage::ImageRgba8(img), 10);
        assert_eq!(trimmed.dimensions(), (4, 3));
    }

    #[test]
    fn blank_image_is_untouched() {
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(5, 7, Rgb([255, 255, 255])));
        assert!(find_content_bounds(&img, 10).is_none());
        assert_eq!(trim_borders(img, 10).dimensions(), (5, 7));
    }
}
