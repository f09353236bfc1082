use image::buffer::ConvertBuffer;
use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame, RgbaImage};
use std::io::Write;
use std::path::Path;

use crate::error::{SlideshowError, SlideshowResult};
use crate::slideshow::{LoopCount, Slideshow};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AnimationFormat {
    #[default]
    Gif,
    Apng,
}

impl AnimationFormat {
    /// Picks the container from the output file extension.
    pub fn from_path(path: &Path) -> SlideshowResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("gif") => Ok(AnimationFormat::Gif),
            Some("png") | Some("apng") => Ok(AnimationFormat::Apng),
            _ => Err(SlideshowError::unsupported_format(
                path.display().to_string(),
            )),
        }
    }
}

/// Encodes into memory first and hands the finished bytes to `writer`, so a
/// failing writer always surfaces as an error.
pub fn encode<W: Write>(
    show: &Slideshow,
    format: AnimationFormat,
    mut writer: W,
) -> SlideshowResult<()> {
    let bytes = encode_to_vec(show, format)?;
    writer
        .write_all(&bytes)
        .and_then(|()| writer.flush())
        .map_err(|e| SlideshowError::encode(e.to_string()))
}

pub fn encode_to_vec(show: &Slideshow, format: AnimationFormat) -> SlideshowResult<Vec<u8>> {
    let mut buf = Vec::new();
    match format {
        AnimationFormat::Gif => encode_gif(show, &mut buf)?,
        AnimationFormat::Apng => encode_apng(show, &mut buf)?,
    }
    Ok(buf)
}

/// The NETSCAPE loop field counts extra repeats after the first showing.
fn gif_repeat(repeat: LoopCount) -> Repeat {
    match repeat {
        LoopCount::Infinite => Repeat::Infinite,
        LoopCount::Times(n) => Repeat::Finite(n.get() - 1),
    }
}

/// acTL `num_plays` counts every showing; 0 means forever.
fn apng_plays(repeat: LoopCount) -> Option<u32> {
    match repeat {
        // `None` is written as num_plays = 0.
        LoopCount::Infinite => None,
        LoopCount::Times(n) => Some(u32::from(n.get())),
    }
}

fn encode_gif(show: &Slideshow, buf: &mut Vec<u8>) -> SlideshowResult<()> {
    let delay = Delay::from_numer_denom_ms(show.delay().as_millis(), 1);
    let frames = show.frames().iter().map(|rgb| {
        // GIF frames go through the RGBA path; every pixel stays opaque.
        let rgba: RgbaImage = rgb.convert();
        Frame::from_parts(rgba, 0, 0, delay)
    });

    // The trailer is written when the encoder drops; writes into a Vec cannot fail.
    let mut encoder = GifEncoder::new(buf);
    encoder
        .set_repeat(gif_repeat(show.repeat()))
        .map_err(|e| SlideshowError::encode(e.to_string()))?;
    encoder
        .encode_frames(frames)
        .map_err(|e| SlideshowError::encode(e.to_string()))
}

/// fcTL delays are u16 fractions of a second: milliseconds, then
/// centiseconds, then whole seconds.
fn apng_delay(ms: u32) -> apng_encoder::Delay {
    if let Ok(ms) = u16::try_from(ms) {
        return apng_encoder::Delay::new(ms, 1000);
    }
    if let Ok(cs) = u16::try_from(ms / 10) {
        return apng_encoder::Delay::new(cs, 100);
    }
    apng_encoder::Delay::new(u16::try_from(ms / 1000).unwrap_or(u16::MAX), 1)
}

fn encode_apng(show: &Slideshow, buf: &mut Vec<u8>) -> SlideshowResult<()> {
    let size = show.size();
    let mut encoder = apng_encoder::Encoder::create(
        buf,
        apng_encoder::Meta {
            width: size.width,
            height: size.height,
            color: apng_encoder::Color::RGB(8),
            frames: show.frames().len() as u32,
            plays: apng_plays(show.repeat()),
        },
    )
    .map_err(|e| SlideshowError::encode(format!("{:?}", e)))?;

    let frame = apng_encoder::Frame {
        delay: Some(apng_delay(show.delay().as_millis())),
        ..Default::default()
    };
    for rgb in show.frames() {
        encoder
            .write_frame(rgb.as_raw(), Some(&frame), None, None)
            .map_err(|e| SlideshowError::encode(format!("{:?}", e)))?;
    }
    encoder
        .finish()
        .map_err(|e| SlideshowError::encode(format!("{:?}", e)))
}
