//! I/O utilities for rendered output, shared between the command-line driver
//! and test code

use std::{fs::File, path::Path};

use softray::canvas::Canvas;

pub fn save_png(canvas: &Canvas, output_path: &Path) -> anyhow::Result<()> {
    let file = File::create(output_path)?;
    let mut encoder = png::Encoder::new(file, canvas.width() as u32, canvas.height() as u32);
    encoder.set_color(png::ColorType::Rgb);
    encoder.set_depth(png::BitDepth::Eight);

    let mut writer = encoder.write_header()?;

    let image_data: Vec<u8> = canvas
        .pixels()
        .iter()
        .flat_map(|p| [p.r, p.g, p.b])
        .collect();

    writer.write_image_data(&image_data)?;
    Ok(())
}
