use crate::ascii::{compute_height, render_rows};
use crate::config::RenderConfig;
use crate::error::{Error, Result};
use crate::filters::PixelSource;
use crate::lut::GlyphRamp;
use image::{DynamicImage, ImageFormat, ImageReader};
use log::debug;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Converts a decoded image to rows of ASCII art
///
/// Pipeline:
/// 1. Validate the width
/// 2. Reject zero-area images
/// 3. Derive the row count from the character aspect
/// 4. Build the glyph ramp once, inverted if requested
/// 5. Sample and map every cell
///
/// # Arguments
/// * `input` - The decoded image
/// * `config` - Width, inversion and character aspect
///
/// # Returns
/// One string per output row, top to bottom, each exactly `config.width` chars
pub fn process_image<I>(input: &I, config: &RenderConfig) -> Result<Vec<String>>
where
    I: PixelSource + ?Sized,
{
    // Step 1: Width
    let width = config.validate()?;

    // Step 2: Dimensions
    let (src_width, src_height) = input.dimensions();
    if src_width == 0 || src_height == 0 {
        return Err(Error::DegenerateImage {
            width: src_width,
            height: src_height,
        });
    }

    // Step 3: Output height
    let height = compute_height(src_width, src_height, width, config.char_aspect);
    debug!(
        "rendering {}x{} image as {}x{} characters",
        src_width, src_height, width, height
    );

    // Step 4: Ramp
    let ramp = GlyphRamp::new(config.invert);

    // Step 5: Sample
    Ok(render_rows(input, width, height, &ramp))
}

/// Open and decode an image file
///
/// The format is sniffed from the content, falling back to the extension.
pub fn decode_file(path: &Path) -> Result<DynamicImage> {
    let file = File::open(path).map_err(|source| Error::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let mut reader = ImageReader::new(BufReader::new(file))
        .with_guessed_format()
        .map_err(|source| Error::Open {
            path: path.to_path_buf(),
            source,
        })?;

    if reader.format().is_none() {
        if let Ok(format) = ImageFormat::from_path(path) {
            reader.set_format(format);
        }
    }

    reader.decode().map_err(|source| Error::Decode {
        path: path.to_path_buf(),
        source,
    })
}

/// Renders the image at `path`
///
/// Validates the width before touching the file so a bad width never opens it.
/// The file handle lives only inside the decode step.
pub fn render_file(path: &Path, config: &RenderConfig) -> Result<Vec<String>> {
    config.validate()?;
    let image = decode_file(path)?;
    process_image(&image, config)
}
