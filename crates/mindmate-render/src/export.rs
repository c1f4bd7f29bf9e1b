//! PNG export of a raster surface.

use crate::surface::SurfaceError;
use tiny_skia::Pixmap;

/// Straight-alpha RGBA8 bytes of `pixmap`, row-major.
pub fn rgba_bytes(pixmap: &Pixmap) -> Vec<u8> {
    pixmap
        .pixels()
        .iter()
        .flat_map(|pixel| {
            let c = pixel.demultiply();
            [c.red(), c.green(), c.blue(), c.alpha()]
        })
        .collect()
}

/// Encode `pixmap` as an 8-bit RGBA PNG.
pub fn encode_png(pixmap: &Pixmap) -> Result<Vec<u8>, SurfaceError> {
    let (width, height) = (pixmap.width(), pixmap.height());
    let rgba = rgba_bytes(pixmap);

    let mut png_data = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut png_data, width, height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder
            .write_header()
            .map_err(|e| SurfaceError::Encoding(e.to_string()))?;
        writer
            .write_image_data(&rgba)
            .map_err(|e| SurfaceError::Encoding(e.to_string()))?;
        writer
            .finish()
            .map_err(|e| SurfaceError::Encoding(e.to_string()))?;
    }

    log::info!("Encoded {}x{} PNG ({} bytes)", width, height, png_data.len());
    Ok(png_data)
}
