// render turns an elevation grid plus a color ramp into a contour-banded
// raster image and encodes it as PNG
pub mod lut;

use std::io::Cursor;

use image::RgbImage;
use terrain::{ColorRamp, ElevationGrid};
use thiserror::Error;

// Band count bounds from the request contract.
pub const MIN_CONTOUR_LEVELS: u32 = 10;
pub const MAX_CONTOUR_LEVELS: u32 = 50;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("contour levels must lie in [{MIN_CONTOUR_LEVELS}, {MAX_CONTOUR_LEVELS}], got {0}")]
    InvalidLevels(u32),

    #[error("output dimensions must be positive, got {width}x{height}")]
    EmptyImage { width: u32, height: u32 },

    #[error("PNG encoding failed: {0}")]
    Encode(#[from] image::ImageError),
}

// Rasterizes an elevation field into `levels` equal-width contour bands
// spanning the field's observed min/max, each band colored from the ramp's
// lookup table at its centre quantile.
pub struct ContourRenderer {
    levels: u32,
}

impl ContourRenderer {
    pub fn new(levels: u32) -> Result<Self, RenderError> {
        if !(MIN_CONTOUR_LEVELS..=MAX_CONTOUR_LEVELS).contains(&levels) {
            return Err(RenderError::InvalidLevels(levels));
        }
        Ok(Self { levels })
    }

    pub fn render(
        &self,
        grid: &ElevationGrid,
        ramp: &ColorRamp,
        width: u32,
        height: u32,
    ) -> Result<RgbImage, RenderError> {
        if width == 0 || height == 0 {
            return Err(RenderError::EmptyImage { width, height });
        }

        let table = lut::build_lookup_table(ramp);
        let (min, max) = grid.min_max();
        let range = max - min;
        let side = grid.side();

        let mut img = RgbImage::new(width, height);
        for (px, py, pixel) in img.enumerate_pixels_mut() {
            let row = nearest_index(py, height, side);
            let col = nearest_index(px, width, side);
            let value = grid.get(row, col);

            let band = if range.abs() < f64::EPSILON {
                // Flat field: every point falls in the middle band.
                self.levels / 2
            } else {
                let normalized = (value - min) / range;
                ((normalized * self.levels as f64) as u32).min(self.levels - 1)
            };

            let quantile = (band as f32 + 0.5) / self.levels as f32;
            *pixel = table[lut::index_for(quantile)];
        }

        Ok(img)
    }
}

// Nearest grid index under the output raster, mapping pixel 0 to the first
// grid line and the last pixel to the last.
fn nearest_index(pos: u32, extent: u32, side: usize) -> usize {
    if extent <= 1 {
        return 0;
    }
    let t = pos as f64 / (extent - 1) as f64;
    (t * (side - 1) as f64).round() as usize
}

// PNG-encode into an in-memory buffer; the artifact is transient and never
// touches disk.
pub fn encode_png(img: &RgbImage) -> Result<Vec<u8>, RenderError> {
    let mut cursor = Cursor::new(Vec::new());
    img.write_to(&mut cursor, image::ImageFormat::Png)?;
    Ok(cursor.into_inner())
}
