use std::path::{Path, PathBuf};

use crate::encode::AnimationFormat;
use crate::frame::BannerSize;
use crate::slideshow::{FrameDelay, LoopCount};

/// One slideshow job. `Default` is the transfer banner: three logos in the
/// working directory, 1628x117, five seconds each, looping forever.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlideshowConfig {
    pub inputs: Vec<PathBuf>,
    pub output: PathBuf,
    pub size: BannerSize,
    pub delay: FrameDelay,
    pub repeat: LoopCount,
    pub format: AnimationFormat,
}

impl Default for SlideshowConfig {
    fn default() -> Self {
        SlideshowConfig {
            inputs: crate::INPUT_FILES.iter().map(PathBuf::from).collect(),
            output: PathBuf::from(crate::OUTPUT_FILE),
            size: BannerSize::default(),
            delay: FrameDelay::default(),
            repeat: LoopCount::default(),
            format: AnimationFormat::default(),
        }
    }
}

impl SlideshowConfig {
    /// Resolves relative input and output paths against `dir`.
    pub fn rooted_at(mut self, dir: &Path) -> Self {
        for input in &mut self.inputs {
            *input = dir.join(&*input);
        }
        self.output = dir.join(&self.output);
        self
    }
}
