use std::path::PathBuf;

pub type SlideshowResult<T> = Result<T, SlideshowError>;

#[derive(thiserror::Error, Debug)]
pub enum SlideshowError {
    #[error("i/o error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("encode error: {0}")]
    Encode(String),

    #[error("invalid frames: {0}")]
    InvalidFrames(String),

    #[error("unsupported output format: {0}")]
    UnsupportedFormat(String),
}

impl SlideshowError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn decode(path: impl Into<PathBuf>, source: image::ImageError) -> Self {
        Self::Decode {
            path: path.into(),
            source,
        }
    }

    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    pub fn invalid_frames(msg: impl Into<String>) -> Self {
        Self::InvalidFrames(msg.into())
    }

    pub fn unsupported_format(msg: impl Into<String>) -> Self {
        Self::UnsupportedFormat(msg.into())
    }
}
