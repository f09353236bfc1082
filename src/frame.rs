use image::imageops::{self, FilterType};
use image::{DynamicImage, ImageReader, RgbImage};
use std::path::Path;

use crate::error::{SlideshowError, SlideshowResult};

/// Bicubic, same family as the usual image-library default for downscaling.
pub const RESIZE_FILTER: FilterType = FilterType::CatmullRom;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BannerSize {
    pub width: u32,
    pub height: u32,
}

impl BannerSize {
    pub const fn new(width: u32, height: u32) -> Self {
        BannerSize { width, height }
    }
}

impl Default for BannerSize {
    fn default() -> Self {
        crate::BANNER_SIZE
    }
}

/// Decodes the image at `path`, guessing the format from its contents.
pub fn load_image(path: &Path) -> SlideshowResult<DynamicImage> {
    let reader = ImageReader::open(path)
        .map_err(|e| SlideshowError::io(path, e))?
        .with_guessed_format()
        .map_err(|e| SlideshowError::io(path, e))?;
    let img = reader.decode().map_err(|e| SlideshowError::decode(path, e))?;

    tracing::debug!(
        path = %path.display(),
        width = img.width(),
        height = img.height(),
        color = ?img.color(),
        "decoded image"
    );
    Ok(img)
}

/// Flattens to RGB8 (alpha is dropped, not composited) and resamples to
/// exactly `size`, ignoring the source aspect ratio.
pub fn normalize(img: DynamicImage, size: BannerSize) -> RgbImage {
    let rgb = img.into_rgb8();
    if rgb.dimensions() == (size.width, size.height) {
        return rgb;
    }
    imageops::resize(&rgb, size.width, size.height, RESIZE_FILTER)
}

pub fn load_frame(path: &Path, size: BannerSize) -> SlideshowResult<RgbImage> {
    load_image(path).map(|img| normalize(img, size))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, Rgba, RgbaImage};

    #[test]
    fn normalize_hits_exact_size() {
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(500, 500, Rgb([0, 0, 255])));
        let out = normalize(img, BannerSize::new(1628, 117));

        assert_eq!(out.dimensions(), (1628, 117));
        assert!(out.pixels().all(|p| *p == Rgb([0, 0, 255])));
    }

    #[test]
    fn normalize_drops_alpha() {
        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(8, 8, Rgba([10, 20, 30, 0])));
        let out = normalize(img, BannerSize::new(16, 4));

        assert_eq!(out.dimensions(), (16, 4));
        assert!(out.pixels().all(|p| *p == Rgb([10, 20, 30])));
    }

    #[test]
    fn normalize_upscales_and_downscales() {
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(3, 300, Rgb([7, 7, 7])));
        let out = normalize(img, BannerSize::new(90, 9));
        assert_eq!(out.dimensions(), (90, 9));
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let err = load_image(Path::new("definitely/not/here.png")).unwrap_err();
        assert!(matches!(err, SlideshowError::Io { .. }));
    }

    #[test]
    fn load_garbage_is_decode_error() {
        let path = std::env::temp_dir().join(format!("banner_garbage_{}.png", std::process::id()));
        std::fs::write(&path, b"this is not an image").unwrap();

        let err = load_image(&path).unwrap_err();
        std::fs::remove_file(&path).ok();
        assert!(matches!(err, SlideshowError::Decode { .. }));
    }
}
