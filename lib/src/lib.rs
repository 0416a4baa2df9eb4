//! ASCII Term - render images as text for the terminal
//!
//! This library picks one image out of whatever the user pointed at (a file,
//! a directory, a glob, a path piped on stdin, or the current directory) and
//! converts it to rows of characters using nearest-neighbor sampling and a
//! Rec. 709 luminance ramp.
//!
//! # Example
//! ```no_run
//! use ascii_term::{RenderConfig, render_file};
//! use std::path::Path;
//!
//! let config = RenderConfig::new(60, false);
//! for row in render_file(Path::new("photo.jpg"), &config).unwrap() {
//!     println!("{row}");
//! }
//! ```

pub mod ascii;
pub mod candidates;
pub mod config;
pub mod error;
pub mod filters;
pub mod lut;
pub mod picker;
pub mod processor;
pub mod resolver;

// Re-export main types for convenience
pub use config::RenderConfig;
pub use error::{Error, Result};
pub use filters::PixelSource;
pub use lut::GlyphRamp;
pub use processor::{decode_file, process_image, render_file};
pub use resolver::{Resolver, SelectionRequest};
