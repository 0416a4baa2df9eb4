use image::{DynamicImage, GenericImageView, ImageBuffer, Rgb, Rgba};

/// Read-only view of a decoded image
///
/// Exposes dimensions and per-pixel color as three channels normalized to the
/// 16-bit range, alpha already premultiplied.
pub trait PixelSource {
    fn dimensions(&self) -> (u32, u32);

    /// Color at `(x, y)` as `[r, g, b]` in `0..=65535`
    fn rgb16(&self, x: u32, y: u32) -> [u16; 3];
}

/// Widen an 8-bit channel to 16 bits (`0xff` -> `0xffff`)
#[inline]
fn widen(c: u8) -> u16 {
    c as u16 * 257
}

/// Premultiply 16-bit color channels by a 16-bit alpha
#[inline]
fn premultiply(rgb: [u16; 3], alpha: u16) -> [u16; 3] {
    if alpha == u16::MAX {
        return rgb;
    }
    let a = alpha as u32;
    rgb.map(|c| (c as u32 * a / 0xffff) as u16)
}

impl PixelSource for DynamicImage {
    fn dimensions(&self) -> (u32, u32) {
        GenericImageView::dimensions(self)
    }

    fn rgb16(&self, x: u32, y: u32) -> [u16; 3] {
        match self {
            // 16-bit color keeps its full precision
            DynamicImage::ImageRgb16(buf) => buf.rgb16(x, y),
            DynamicImage::ImageRgba16(buf) => buf.rgb16(x, y),
            _ => {
                let Rgba([r, g, b, a]) = self.get_pixel(x, y);
                premultiply([widen(r), widen(g), widen(b)], widen(a))
            }
        }
    }
}

impl PixelSource for ImageBuffer<Rgb<u16>, Vec<u16>> {
    fn dimensions(&self) -> (u32, u32) {
        ImageBuffer::dimensions(self)
    }

    fn rgb16(&self, x: u32, y: u32) -> [u16; 3] {
        self.get_pixel(x, y).0
    }
}

impl PixelSource for ImageBuffer<Rgba<u16>, Vec<u16>> {
    fn dimensions(&self) -> (u32, u32) {
        ImageBuffer::dimensions(self)
    }

    fn rgb16(&self, x: u32, y: u32) -> [u16; 3] {
        let Rgba([r, g, b, a]) = *self.get_pixel(x, y);
        premultiply([r, g, b], a)
    }
}

/// Calculate 8-bit luma from 16-bit color channels
///
/// Formula: L = 0.2126*R + 0.7152*G + 0.0722*B (Rec. 709), where each channel
/// is first shifted down to the 8-bit range.
///
/// # Arguments
/// * `rgb` - Color channels in `0..=65535`
///
/// # Returns
/// Luma clamped to [0, 255] and rounded to the nearest integer
pub fn luma8(rgb: [u16; 3]) -> u8 {
    let [r, g, b] = rgb.map(|c| (c >> 8) as f64);
    let luma = 0.2126 * r + 0.7152 * g + 0.0722 * b;
    luma.clamp(0.0, 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{RgbImage, RgbaImage};

    #[test]
    fn test_luma_extremes() {
        assert_eq!(luma8([0, 0, 0]), 0);
        assert_eq!(luma8([u16::MAX; 3]), 255);
    }

    #[test]
    fn test_luma_weights_favor_green() {
        let red = luma8([u16::MAX, 0, 0]);
        let green = luma8([0, u16::MAX, 0]);
        let blue = luma8([0, 0, u16::MAX]);
        assert_eq!(red, 54); // 0.2126 * 255 = 54.2
        assert_eq!(green, 182); // 0.7152 * 255 = 182.4
        assert_eq!(blue, 18); // 0.0722 * 255 = 18.4
        assert!(green > red && red > blue);
    }

    #[test]
    fn test_luma_drops_low_byte() {
        // 0x80ff >> 8 == 0x80
        assert_eq!(luma8([0x80ff; 3]), luma8([0x8000; 3]));
        assert_eq!(luma8([0x8000; 3]), 128);
    }

    #[test]
    fn test_dynamic_rgb8_widens_channels() {
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(1, 1, Rgb([255, 128, 0])));
        assert_eq!(img.rgb16(0, 0), [0xffff, 0x8080, 0]);
    }

    #[test]
    fn test_transparent_pixels_read_as_black() {
        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(1, 1, Rgba([255, 255, 255, 0])));
        assert_eq!(img.rgb16(0, 0), [0, 0, 0]);
        assert_eq!(luma8(img.rgb16(0, 0)), 0);
    }

    #[test]
    fn test_half_alpha_halves_channels() {
        let buf = ImageBuffer::from_pixel(1, 1, Rgba([0xffffu16, 0xffff, 0xffff, 0x8000]));
        assert_eq!(buf.rgb16(0, 0), [0x8000; 3]);
    }

    #[test]
    fn test_rgb16_keeps_precision() {
        let buf = ImageBuffer::from_pixel(2, 3, Rgb([1u16, 2, 3]));
        let img = DynamicImage::ImageRgb16(buf);
        assert_eq!(PixelSource::dimensions(&img), (2, 3));
        assert_eq!(img.rgb16(1, 2), [1, 2, 3]);
    }
}
