//! code2art
//!
//! Turns a text file into black-and-white pixel art: every character cell
//! becomes one pixel, black for visible characters and white for whitespace
//! and for the padding to the right of short lines.
//!
//! # Pipeline
//!
//! - [`Document`]: decoded lines, read once from the source
//! - [`rendering::raster`]: dimensions first, then one pass filling the canvas
//! - [`rendering::encode`]: grayscale PNG written atomically
//!
//! # Example
//!
//! ```
//! use code2art::{Document, Pixel, RasterConfig};
//!
//! let doc = Document::parse("ab\nc\n");
//! let canvas = code2art::rasterize(&doc, &RasterConfig::default());
//! assert_eq!((canvas.width(), canvas.height()), (2, 2));
//! assert_eq!(canvas.get(1, 1), Some(Pixel::White));
//! ```

use std::path::{Path, PathBuf};

pub mod document;
pub mod error;
pub mod rendering;

pub use document::{Document, Line};
pub use error::{Error, Result};
pub use rendering::raster::{compute_dimensions, rasterize, render, render_parallel};
pub use rendering::{Canvas, Dimensions, Pixel};

/// What to do with a canvas that has no area (empty input, or blank lines
/// only). Image formats cannot hold a zero-sized image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyPolicy {
    /// Fail with [`Error::DegenerateInput`]
    #[default]
    Reject,
    /// Write a single white pixel instead
    Placeholder,
}

/// Configuration for a conversion
///
/// # Examples
///
/// ```
/// let cfg = code2art::RasterConfig { threads: 4, ..Default::default() };
/// assert_eq!(cfg.empty_policy, code2art::EmptyPolicy::Reject);
/// ```
#[derive(Debug, Clone)]
pub struct RasterConfig {
    /// Worker threads for row rendering (1 = calling thread, 0 = one per CPU)
    pub threads: usize,
    /// Handling of zero-area canvases on output
    pub empty_policy: EmptyPolicy,
}

impl Default for RasterConfig {
    fn default() -> Self {
        Self {
            threads: 1,
            empty_policy: EmptyPolicy::Reject,
        }
    }
}

/// Outcome of [`convert_file`]
#[derive(Debug, Clone)]
pub struct Conversion {
    /// Dimensions of the rendered canvas (before any placeholder substitution)
    pub dimensions: Dimensions,
    /// Dimensions of the PNG actually written
    pub written: Dimensions,
    /// Where the PNG was written
    pub output: PathBuf,
}

/// Read `input`, rasterize it and write `<basename>.png` into `output_dir`.
///
/// Any failure aborts before the destination file appears.
pub fn convert_file(input: &Path, output_dir: &Path, config: &RasterConfig) -> Result<Conversion> {
    let document = Document::from_path(input)?;
    let canvas = rasterize(&document, config);
    let output = rendering::encode::output_path_for(input, output_dir);
    let encoded = rendering::encode::write_png(&canvas, &output, config.empty_policy)?;
    Ok(Conversion {
        dimensions: canvas.dimensions(),
        written: Dimensions {
            width: encoded.width as usize,
            height: encoded.height as usize,
        },
        output,
    })
}
