//! Error taxonomy for input resolution and rendering
//!
//! Every variant is terminal: nothing in the crate retries or recovers.
//! Messages leave out their `#[source]`; print the whole chain to show it.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("width must be between 1 and {max}, got {0}", max = crate::config::MAX_WIDTH)]
    InvalidWidth(i64),

    #[error("path not found: {}", .0.display())]
    PathNotFound(PathBuf),

    #[error("not an image: {}", .0.display())]
    NotAnImage(PathBuf),

    #[error("no images found in directory: {}", .0.display())]
    EmptyDirectory(PathBuf),

    #[error("glob matched no images: {0}")]
    NoGlobMatch(String),

    #[error("no images found in current directory; pass -i, --glob, or --stdin")]
    NoImagesFound,

    #[error("no usable path from stdin")]
    NoUsableInput,

    #[error("stdin")]
    StdinRead(#[source] std::io::Error),

    #[error("invalid selection: {0:?}")]
    InvalidSelection(String),

    #[error("open {}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("decode {}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("image has zero dimension ({width}x{height})")]
    DegenerateImage { width: u32, height: u32 },
}

pub type Result<T> = std::result::Result<T, Error>;
