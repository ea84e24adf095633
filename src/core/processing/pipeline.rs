use image::{DynamicImage, GenericImageView};
use tracing::debug;

use crate::core::processing::padding::{Canvas, center_offsets, pad_to_canvas};
use crate::core::processing::resize::{calculate_fit_dimensions, resize_image};
use crate::core::processing::trim::{find_content_bounds, trim_borders};
use crate::error::Result;
use crate::types::{Dimensions, ImageKind, ResizeFilter};

/// Options for normalizing a single image
#[derive(Copy, Clone, Debug)]
pub struct NormalizeOptions {
    pub target: Dimensions,
    pub trim: Option<u8>,
    pub filter: ResizeFilter,
}

/// Whether `img` differs from what normalization would produce.
///
/// Without trimming this is a plain size comparison. With trimming the content
/// bounds are compared to the target instead, so a target-sized image with a
/// margin is still processed. An image whose content already sits centered at
/// its fitted size (the output of an earlier pass, within one pixel of
/// resampling bleed) is left alone.
pub fn needs_normalization(img: &DynamicImage, options: &NormalizeOptions) -> bool {
    let current = Dimensions::new(img.width(), img.height());
    let target = options.target;

    let Some(tolerance) = options.trim else {
        return current != target;
    };
    let Some(bounds) = find_content_bounds(img, tolerance) else {
        return current != target;
    };

    let content = Dimensions::new(bounds.width, bounds.height);
    if current != target {
        return true;
    }
    if content == target {
        return false;
    }

    let fitted = calculate_fit_dimensions(content.width, content.height, target);
    let (x, y) = center_offsets(fitted, target);
    let settled = fitted.width.abs_diff(content.width) <= 1
        && fitted.height.abs_diff(content.height) <= 1
        && bounds.x.abs_diff(x) <= 1
        && bounds.y.abs_diff(y) <= 1;
    if !settled {
        debug!(
            "Content {} at ({}, {}) differs from fitted {} at ({}, {})",
            content, bounds.x, bounds.y, fitted, x, y
        );
    }
    !settled
}

/// Trim (optionally), fit inside the target keeping aspect ratio, and center on a
/// target-sized canvas chosen by `kind`.
pub fn normalize_image(
    img: DynamicImage,
    kind: ImageKind,
    options: &NormalizeOptions,
) -> Result<DynamicImage> {
    let img = match options.trim {
        Some(tolerance) => trim_borders(img, tolerance),
        None => img,
    };

    let (width, height) = img.dimensions();
    let fitted = calculate_fit_dimensions(width, height, options.target);
    debug!(
        "Fitting {}x{} into {} -> {}",
        width, height, options.target, fitted
    );

    let resized = resize_image(&img, fitted, options.filter)?;
    let canvas = if kind.keeps_alpha() {
        Canvas::TransparentWhite
    } else {
        Canvas::White
    };
    Ok(pad_to_canvas(&resized, options.target, canvas))
}
