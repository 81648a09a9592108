//! Rendering: the binary canvas, the rasterizer that fills it, and the PNG
//! encoder that persists it.

pub mod encode;
pub mod raster;

use sha2::{Digest, Sha256};

/// A strictly binary pixel value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pixel {
    Black,
    White,
}

impl Pixel {
    /// 8-bit luma used when encoding
    pub fn luma(self) -> u8 {
        match self {
            Pixel::Black => 0,
            Pixel::White => 255,
        }
    }
}

/// Canvas dimensions in pixels (one pixel per character cell)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Dimensions {
    pub width: usize,
    pub height: usize,
}

impl Dimensions {
    pub fn area(&self) -> usize {
        self.width * self.height
    }

    pub fn is_degenerate(&self) -> bool {
        self.area() == 0
    }
}

/// Row-major grid of pixels, fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    dims: Dimensions,
    pixels: Vec<Pixel>,
}

impl Canvas {
    /// Wrap a fully populated pixel buffer. `pixels.len()` must equal
    /// `width * height`.
    pub(crate) fn from_pixels(dims: Dimensions, pixels: Vec<Pixel>) -> Self {
        debug_assert_eq!(pixels.len(), dims.area());
        Self { dims, pixels }
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    pub fn width(&self) -> usize {
        self.dims.width
    }

    pub fn height(&self) -> usize {
        self.dims.height
    }

    pub fn get(&self, x: usize, y: usize) -> Option<Pixel> {
        if x >= self.dims.width || y >= self.dims.height {
            return None;
        }
        self.pixels.get(y * self.dims.width + x).copied()
    }

    /// One row of pixels. Rows of a zero-width canvas are empty slices.
    pub fn row(&self, y: usize) -> Option<&[Pixel]> {
        if y >= self.dims.height {
            return None;
        }
        let start = y * self.dims.width;
        Some(&self.pixels[start..start + self.dims.width])
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Pixel]> + '_ {
        (0..self.dims.height).filter_map(move |y| self.row(y))
    }

    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    /// Content digest of the canvas: SHA-256 over the width and height as
    /// little-endian `u64`s followed by one luma byte per pixel, hex encoded.
    pub fn digest(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update((self.dims.width as u64).to_le_bytes());
        hasher.update((self.dims.height as u64).to_le_bytes());
        let bytes: Vec<u8> = self.pixels.iter().map(|p| p.luma()).collect();
        hasher.update(&bytes);
        hex::encode(hasher.finalize())
    }

    /// Render as text art, `#` for black and `.` for white, one line per row.
    pub fn to_ascii(&self) -> String {
        let mut out = String::with_capacity(self.dims.area() + self.dims.height);
        for row in self.rows() {
            out.extend(row.iter().map(|p| match p {
                Pixel::Black => '#',
                Pixel::White => '.',
            }));
            out.push('\n');
        }
        out
    }
}
