use image::RgbImage;
use std::num::NonZeroU16;

use crate::error::{SlideshowError, SlideshowResult};
use crate::frame::BannerSize;

/// Uniform display time of every frame, in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameDelay(u32);

impl FrameDelay {
    pub const fn from_millis(ms: u32) -> Self {
        FrameDelay(ms)
    }

    pub const fn as_millis(self) -> u32 {
        self.0
    }
}

impl Default for FrameDelay {
    fn default() -> Self {
        crate::FRAME_DELAY
    }
}

/// How often the animation plays. `Times(n)` is the total number of showings,
/// first one included. `Infinite` is written as a loop count of zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoopCount {
    #[default]
    Infinite,
    Times(NonZeroU16),
}

/// Ordered, same-sized RGB frames sharing one delay.
#[derive(Debug)]
pub struct Slideshow {
    frames: Vec<RgbImage>,
    delay: FrameDelay,
    repeat: LoopCount,
}

impl Slideshow {
    pub fn new(
        frames: Vec<RgbImage>,
        delay: FrameDelay,
        repeat: LoopCount,
    ) -> SlideshowResult<Self> {
        let first = frames
            .first()
            .ok_or_else(|| SlideshowError::invalid_frames("no frames"))?
            .dimensions();
        if first.0 == 0 || first.1 == 0 {
            return Err(SlideshowError::invalid_frames(format!(
                "frame 0 is empty ({}x{})",
                first.0, first.1
            )));
        }
        if let Some((i, frame)) = frames
            .iter()
            .enumerate()
            .find(|(_, f)| f.dimensions() != first)
        {
            let (w, h) = frame.dimensions();
            return Err(SlideshowError::invalid_frames(format!(
                "frame {} is {}x{}, expected {}x{}",
                i, w, h, first.0, first.1
            )));
        }

        Ok(Slideshow {
            frames,
            delay,
            repeat,
        })
    }

    pub fn frames(&self) -> &[RgbImage] {
        &self.frames
    }

    pub fn delay(&self) -> FrameDelay {
        self.delay
    }

    pub fn repeat(&self) -> LoopCount {
        self.repeat
    }

    pub fn size(&self) -> BannerSize {
        let (width, height) = self.frames[0].dimensions();
        BannerSize { width, height }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    fn solid(w: u32, h: u32) -> RgbImage {
        RgbImage::from_pixel(w, h, Rgb([1, 2, 3]))
    }

    #[test]
    fn keeps_order_and_settings() {
        let frames = vec![
            RgbImage::from_pixel(4, 2, Rgb([255, 0, 0])),
            RgbImage::from_pixel(4, 2, Rgb([0, 255, 0])),
        ];
        let three = LoopCount::Times(NonZeroU16::new(3).unwrap());
        let show = Slideshow::new(frames, FrameDelay::from_millis(40), three).unwrap();

        assert_eq!(show.frames().len(), 2);
        assert_eq!(show.frames()[0].get_pixel(0, 0), &Rgb([255, 0, 0]));
        assert_eq!(show.frames()[1].get_pixel(0, 0), &Rgb([0, 255, 0]));
        assert_eq!(show.delay().as_millis(), 40);
        assert_eq!(show.repeat(), three);
        assert_eq!(show.size(), BannerSize::new(4, 2));
    }

    #[test]
    fn rejects_empty() {
        let err = Slideshow::new(vec![], FrameDelay::default(), LoopCount::Infinite).unwrap_err();
        assert!(matches!(err, SlideshowError::InvalidFrames(_)));
    }

    #[test]
    fn rejects_zero_sized_frames() {
        let err = Slideshow::new(vec![solid(0, 5)], FrameDelay::default(), LoopCount::Infinite)
            .unwrap_err();
        assert!(matches!(err, SlideshowError::InvalidFrames(_)));
    }

    #[test]
    fn rejects_mismatched_sizes() {
        let err = Slideshow::new(
            vec![solid(4, 2), solid(4, 2), solid(2, 4)],
            FrameDelay::default(),
            LoopCount::Infinite,
        )
        .unwrap_err();
        assert!(err.to_string().contains("frame 2 is 2x4"));
    }

    #[test]
    fn defaults_match_banner_job() {
        assert_eq!(FrameDelay::default().as_millis(), 5000);
        assert_eq!(LoopCount::default(), LoopCount::Infinite);
    }
}
