use crate::filters::{PixelSource, luma8};
use crate::lut::GlyphRamp;

/// Compute the output row count for a target width
///
/// Height = round(src_height * char_aspect * width / src_width), floored at 1.
///
/// # Arguments
/// * `src_width` - Source width in pixels, must be > 0
/// * `src_height` - Source height in pixels
/// * `width` - Target width in characters
/// * `char_aspect` - Character cell width-to-height ratio
pub fn compute_height(src_width: u32, src_height: u32, width: u32, char_aspect: f64) -> u32 {
    let height = (src_height as f64 * char_aspect * width as f64 / src_width as f64).round();
    height.max(1.0) as u32
}

/// Map a target coordinate to its nearest source coordinate
///
/// `floor(target * src_len / target_len)`, clamped to `src_len - 1`.
#[inline]
pub fn nearest_source(target: u32, target_len: u32, src_len: u32) -> u32 {
    let scaled = target as u64 * src_len as u64 / target_len as u64;
    (scaled as u32).min(src_len - 1)
}

/// Render an image into rows of glyphs
///
/// Nearest-neighbor samples one source pixel per output cell, reduces it to
/// luma and looks up its glyph. Rows are top-to-bottom and each holds exactly
/// `width` characters; no trimming is applied since space is the brightest glyph.
///
/// # Arguments
/// * `img` - Decoded image with non-zero dimensions
/// * `width` - Target width in characters, > 0
/// * `height` - Target height in rows, > 0
/// * `ramp` - Glyph ramp, already inverted if requested
pub fn render_rows<I>(img: &I, width: u32, height: u32, ramp: &GlyphRamp) -> Vec<String>
where
    I: PixelSource + ?Sized,
{
    let (src_width, src_height) = img.dimensions();

    // Source columns are the same for every row
    let columns: Vec<u32> = (0..width)
        .map(|x| nearest_source(x, width, src_width))
        .collect();

    (0..height)
        .map(|y| {
            let sy = nearest_source(y, height, src_height);
            columns
                .iter()
                .map(|&sx| ramp.glyph(luma8(img.rgb16(sx, sy))))
                .collect::<String>()
        })
        .collect()
}
