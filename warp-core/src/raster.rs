use crate::types::Rgba;
use image::{RgbaImage, imageops};

/// Canvas-sized RGBA pixel buffer cached after an image load.
///
/// The source image is scaled to fit the canvas with its aspect ratio
/// preserved and centered on the free axis; uncovered pixels stay fully
/// transparent and therefore produce no particles. The buffer is row-major
/// with 4 bytes per pixel, so the cell at `(x, y)` starts at linear offset
/// `(y * width + x) * 4`.
#[derive(Clone, Debug)]
pub struct Raster {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Raster {
    /// Builds a raster by aspect-fitting `src` onto a `width × height`
    /// transparent canvas.
    ///
    /// If scaling the image to the canvas height keeps it within the
    /// canvas width, it is fitted to the height and centered horizontally;
    /// otherwise it is fitted to the width and centered vertically.
    /// A zero-sized source or canvas yields an all-transparent raster.
    pub fn from_image(src: &RgbaImage, width: u32, height: u32) -> Self {
        let mut canvas = RgbaImage::new(width, height);

        let (iw, ih) = src.dimensions();
        if iw > 0 && ih > 0 && width > 0 && height > 0 {
            let aspect = iw as f32 / ih as f32;
            let (sw, sh) = if height as f32 * aspect <= width as f32 {
                ((height as f32 * aspect).round().max(1.0) as u32, height)
            } else {
                (width, (width as f32 / aspect).round().max(1.0) as u32)
            };

            let scaled = imageops::resize(src, sw, sh, imageops::FilterType::Triangle);
            let ox = (width.saturating_sub(sw) / 2) as i64;
            let oy = (height.saturating_sub(sh) / 2) as i64;
            // Straight copy, no blending: the canvas is blank.
            imageops::replace(&mut canvas, &scaled, ox, oy);
        }

        Self {
            width,
            height,
            data: canvas.into_raw(),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Bounds-checked pixel lookup.
    pub fn rgba_at(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y * self.width + x) * 4) as usize;
        Some([
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ])
    }
}
