use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer, images::Image};
use image::{DynamicImage, RgbaImage};
use tracing::info;

use crate::error::{Error, Result};
use crate::types::{Dimensions, ResizeFilter};

/// Largest size with the source aspect ratio that fits inside `target`.
/// Scales up as well as down; each side is floored and kept at least 1.
pub fn calculate_fit_dimensions(width: u32, height: u32, target: Dimensions) -> Dimensions {
    let width_ratio = target.width as f64 / width as f64;
    let height_ratio = target.height as f64 / height as f64;
    let ratio = width_ratio.min(height_ratio);

    let new_width = ((width as f64 * ratio).floor() as u32).clamp(1, target.width);
    let new_height = ((height as f64 * ratio).floor() as u32).clamp(1, target.height);
    Dimensions::new(new_width, new_height)
}

fn resize_alg(filter: ResizeFilter) -> ResizeAlg {
    match filter {
        ResizeFilter::Nearest => ResizeAlg::Nearest,
        ResizeFilter::Bilinear => ResizeAlg::Convolution(FilterType::Bilinear),
        ResizeFilter::CatmullRom => ResizeAlg::Convolution(FilterType::CatmullRom),
        ResizeFilter::Lanczos3 => ResizeAlg::Convolution(FilterType::Lanczos3),
    }
}

/// Resample interleaved RGBA8 pixels. Alpha is premultiplied during convolution.
pub fn resize_rgba_data(
    data: &[u8],
    original: Dimensions,
    target: Dimensions,
    filter: ResizeFilter,
) -> Result<Vec<u8>> {
    let resize_options = ResizeOptions::new().resize_alg(resize_alg(filter));
    let mut resizer = Resizer::new();

    let src_image = Image::from_vec_u8(
        original.width,
        original.height,
        data.to_vec(),
        PixelType::U8x4,
    )
    .map_err(Error::external)?;
    let mut dst_image = Image::new(target.width, target.height, PixelType::U8x4);
    resizer
        .resize(&src_image, &mut dst_image, &resize_options)
        .map_err(Error::external)?;

    Ok(dst_image.into_vec())
}

/// Resize a decoded image to exactly `target`, working in RGBA8.
pub fn resize_image(img: &DynamicImage, target: Dimensions, filter: ResizeFilter) -> Result<RgbaImage> {
    let rgba = img.to_rgba8();
    let original = Dimensions::new(rgba.width(), rgba.height());

    if original == target {
        return Ok(rgba);
    }

    info!("Resampling {} -> {} ({})", original, target, filter);
    let resized = resize_rgba_data(rgba.as_raw(), original, target, filter)?;
    RgbaImage::from_raw(target.width, target.height, resized).ok_or_else(|| {
        Error::Processing(format!("resized buffer does not match {}", target))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn fit_keeps_aspect_ratio() {
        let target = Dimensions::new(100, 100);
        assert_eq!(calculate_fit_dimensions(200, 100, target), Dimensions::new(100, 50));
        assert_eq!(calculate_fit_dimensions(50, 100, target), Dimensions::new(50, 100));
        assert_eq!(calculate_fit_dimensions(100, 100, target), target);
    }

    #[test]
    fn fit_floors_fractional_sides() {
        // 3x2 into 100x100: ratio 33.33.., 3 * 33.33 = 100, 2 * 33.33 = 66.66
        assert_eq!(
            calculate_fit_dimensions(3, 2, Dimensions::new(100, 100)),
            Dimensions::new(100, 66)
        );
    }

    #[test]
    fn fit_never_collapses_to_zero() {
        assert_eq!(
            calculate_fit_dimensions(1000, 1, Dimensions::new(10, 10)),
            Dimensions::new(10, 1)
        );
    }

    #[test]
    fn resize_produces_target_size() {
        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(40, 20, Rgba([10, 20, 30, 255])));
        let out = resize_image(&img, Dimensions::new(20, 10), ResizeFilter::Lanczos3).unwrap();
        assert_eq!(out.dimensions(), (20, 10));
        // A flat colour stays flat under any filter
        let px = out.get_pixel(10, 5).0;
        assert!((px[0] as i32 - 10).abs() <= 1);
        assert!(px[3] >= 254);
    }
}
