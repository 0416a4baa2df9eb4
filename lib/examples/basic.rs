/// Basic example: Render a synthetic test image as ASCII art
///
/// This creates a test image with a gradient and a circle and prints it twice,
/// once normally and once with the ramp inverted
use ascii_term::{RenderConfig, process_image};
use image::{DynamicImage, Rgb, RgbImage};

fn main() {
    println!("ASCII Term - Basic Example");
    println!("==========================\n");

    let width = 160;
    let height = 120;
    let mut img = RgbImage::new(width, height);

    // Horizontal gradient from black to white
    for y in 0..height {
        for x in 0..width {
            let v = (x * 255 / (width - 1)) as u8;
            img.put_pixel(x, y, Rgb([v, v, v]));
        }
    }

    // Dark red circle in the center
    let center_x = width as f32 / 2.0;
    let center_y = height as f32 / 2.0;
    let radius = 35.0;

    for y in 0..height {
        for x in 0..width {
            let dx = x as f32 - center_x;
            let dy = y as f32 - center_y;
            if (dx * dx + dy * dy).sqrt() < radius {
                img.put_pixel(x, y, Rgb([120, 0, 0]));
            }
        }
    }

    println!("Created test image: {}x{}\n", width, height);
    let img = DynamicImage::ImageRgb8(img);

    for invert in [false, true] {
        let config = RenderConfig::new(64, invert);
        let rows = process_image(&img, &config).expect("valid config and image");
        println!("invert = {} ({} rows):", invert, rows.len());
        for row in rows {
            println!("{row}");
        }
        println!();
    }
}
