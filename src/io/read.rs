use std::path::Path;

use image::{DynamicImage, ImageReader};

use crate::error::Result;
use crate::types::Dimensions;

/// Decode an image, detecting its format from the file contents rather than
/// the extension.
pub fn open_image(path: &Path) -> Result<DynamicImage> {
    Ok(ImageReader::open(path)?.with_guessed_format()?.decode()?)
}

/// Image size from the header only, detecting the format from the contents.
pub fn read_dimensions(path: &Path) -> Result<Dimensions> {
    let (width, height) = ImageReader::open(path)?
        .with_guessed_format()?
        .into_dimensions()?;
    Ok(Dimensions::new(width, height))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgb, RgbImage};

    #[test]
    fn reads_png_saved_under_jpg_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("icon.jpg");
        RgbImage::from_pixel(7, 3, Rgb([1, 2, 3]))
            .save_with_format(&path, ImageFormat::Png)
            .unwrap();

        assert_eq!(read_dimensions(&path).unwrap(), Dimensions::new(7, 3));
        let img = open_image(&path).unwrap();
        assert_eq!((img.width(), img.height()), (7, 3));
    }
}
