//! Badge rendering: geometry, display list, rasterizer and the PNG canvas.

pub mod layout;
pub mod paint;
pub mod raster;

use std::io::Cursor;
use std::path::Path;

use image::{ImageFormat, Rgb, RgbImage};
use sha2::{Digest, Sha256};

use crate::error::{Error, Result};

/// Square RGB raster owned by a single render call.
#[derive(Debug, Clone)]
pub struct Canvas {
    image: RgbImage,
}

impl Canvas {
    /// Allocate a `size` x `size` canvas filled with `background`.
    pub fn new(size: u32, background: Rgb<u8>) -> Self {
        Self {
            image: RgbImage::from_pixel(size, size, background),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn pixel(&self, x: u32, y: u32) -> Rgb<u8> {
        *self.image.get_pixel(x, y)
    }

    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    pub(crate) fn image_mut(&mut self) -> &mut RgbImage {
        &mut self.image
    }

    pub fn into_image(self) -> RgbImage {
        self.image
    }

    /// Encode the canvas as an in-memory PNG.
    pub fn encode_png(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        self.image
            .write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)?;
        Ok(buf)
    }

    /// Encode and write to `path`, replacing any existing file. Returns the
    /// PNG bytes that were written. The parent directory is not created.
    pub fn save_png(&self, path: &Path) -> Result<Vec<u8>> {
        let png = self.encode_png()?;
        std::fs::write(path, &png).map_err(|e| Error::io(path, e))?;
        Ok(png)
    }

    /// Hex SHA-256 over the dimensions and raw pixels. Independent of the
    /// PNG encoder's compression settings.
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.width().to_le_bytes());
        hasher.update(self.height().to_le_bytes());
        hasher.update(self.image.as_raw());
        hex::encode(hasher.finalize())
    }
}
