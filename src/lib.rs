//! Builds the looping transfer banner: a few still logos, flattened to RGB,
//! stretched to one banner size and written as an animated GIF (or APNG).

use std::path::{Path, PathBuf};

pub mod config;
pub mod encode;
pub mod error;
pub mod frame;
pub mod slideshow;

pub use config::SlideshowConfig;
pub use encode::{encode, encode_to_vec, AnimationFormat};
pub use error::{SlideshowError, SlideshowResult};
pub use frame::{load_frame, load_image, normalize, BannerSize, RESIZE_FILTER};
pub use slideshow::{FrameDelay, LoopCount, Slideshow};

pub const INPUT_FILES: [&str; 3] = ["bitcoin.png", "usdt.png", "swift.png"];
pub const OUTPUT_FILE: &str = "transfer_banner_slideshow.gif";
pub const BANNER_SIZE: BannerSize = BannerSize::new(1628, 117);
pub const FRAME_DELAY: FrameDelay = FrameDelay::from_millis(5000);

/// Decodes and normalizes every input, in order. Stops at the first failure.
pub fn load_slideshow(config: &SlideshowConfig) -> SlideshowResult<Slideshow> {
    let frames = config
        .inputs
        .iter()
        .map(|path| load_frame(path, config.size))
        .collect::<SlideshowResult<Vec<_>>>()?;
    Slideshow::new(frames, config.delay, config.repeat)
}

/// Runs the whole job and returns the path written. The animation is fully
/// encoded before anything touches the disk, and then swapped in through a
/// sibling temp file, so a failed run leaves any previous output as it was.
#[tracing::instrument(skip_all, fields(output = %config.output.display()))]
pub fn build_slideshow(config: &SlideshowConfig) -> SlideshowResult<PathBuf> {
    let show = load_slideshow(config)?;
    let bytes = encode_to_vec(&show, config.format)?;
    write_replacing(&config.output, &bytes)?;

    tracing::info!(
        frames = show.frames().len(),
        width = config.size.width,
        height = config.size.height,
        delay_ms = config.delay.as_millis(),
        bytes = bytes.len(),
        "wrote slideshow"
    );
    Ok(config.output.clone())
}

fn temp_path_for(path: &Path) -> SlideshowResult<PathBuf> {
    let name = path.file_name().ok_or_else(|| {
        SlideshowError::io(
            path,
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "no file name"),
        )
    })?;
    let mut tmp_name = std::ffi::OsString::from(".");
    tmp_name.push(name);
    tmp_name.push(".tmp");
    Ok(path.with_file_name(tmp_name))
}

/// Writes `bytes` next to `path` and renames it over `path`.
fn write_replacing(path: &Path, bytes: &[u8]) -> SlideshowResult<()> {
    let tmp = temp_path_for(path)?;
    let result = std::fs::write(&tmp, bytes)
        .map_err(|e| SlideshowError::io(&tmp, e))
        .and_then(|()| std::fs::rename(&tmp, path).map_err(|e| SlideshowError::io(path, e)));
    if result.is_err() {
        std::fs::remove_file(&tmp).ok();
    }
    result
}
