//! PNG output for a finished canvas.

use crate::rendering::{Canvas, Dimensions};
use crate::{EmptyPolicy, Error, Result};
use image::codecs::png::PngEncoder;
use image::{ColorType, ImageEncoder};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// An encoded image together with the dimensions actually written.
#[derive(Debug, Clone)]
pub struct EncodedImage {
    pub width: u32,
    pub height: u32,
    pub png_data: Vec<u8>,
}

fn to_u32(n: usize, what: &str) -> Result<u32> {
    u32::try_from(n).map_err(|_| Error::EncodingFailure(format!("{} {} does not fit in a PNG header", what, n)))
}

/// Encode `canvas` as 8-bit grayscale PNG (black 0, white 255).
///
/// PNG cannot represent a zero-area image, so such canvases go through
/// `policy`: rejected with [`Error::DegenerateInput`] or replaced by a single
/// white pixel.
pub fn encode_png(canvas: &Canvas, policy: EmptyPolicy) -> Result<EncodedImage> {
    let Dimensions { width, height } = canvas.dimensions();
    let (width, height, luma) = if canvas.dimensions().is_degenerate() {
        match policy {
            EmptyPolicy::Reject => return Err(Error::DegenerateInput { width, height }),
            EmptyPolicy::Placeholder => {
                log::warn!("{}x{} canvas has no area, writing a 1x1 placeholder", width, height);
                (1, 1, vec![255u8])
            }
        }
    } else {
        let luma = canvas.pixels().iter().map(|p| p.luma()).collect();
        (to_u32(width, "width")?, to_u32(height, "height")?, luma)
    };

    let mut png_data = Vec::new();
    PngEncoder::new(&mut png_data).write_image(&luma, width, height, ColorType::L8)?;
    Ok(EncodedImage {
        width,
        height,
        png_data,
    })
}

/// Destination for `input`: its base name with `.png` appended, inside `dir`.
pub fn output_path_for(input: &Path, dir: &Path) -> PathBuf {
    let mut name = input
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("output"));
    name.push(".png");
    dir.join(name)
}

/// Encode `canvas` and write it to `dest`.
///
/// The file is written next to `dest` under a temporary name and renamed into
/// place, so a failure never leaves a partial image behind.
pub fn write_png(canvas: &Canvas, dest: &Path, policy: EmptyPolicy) -> Result<EncodedImage> {
    let encoded = encode_png(canvas, policy)?;

    let mut tmp_name = OsString::from(".");
    tmp_name.push(dest.file_name().unwrap_or_default());
    tmp_name.push(".tmp");
    let tmp = dest.with_file_name(tmp_name);

    let out_err = |source| Error::OutputUnavailable {
        path: dest.to_path_buf(),
        source,
    };
    if let Err(e) = fs::write(&tmp, &encoded.png_data).and_then(|_| fs::rename(&tmp, dest)) {
        let _ = fs::remove_file(&tmp);
        return Err(out_err(e));
    }

    log::info!(
        "wrote {}x{} PNG ({} bytes) to {}",
        encoded.width,
        encoded.height,
        encoded.png_data.len(),
        dest.display()
    );
    Ok(encoded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Document;
    use crate::rendering::raster::{compute_dimensions, render};

    fn canvas_of(lines: &[&str]) -> Canvas {
        let doc = Document::from_lines(lines.iter().copied());
        render(&doc, compute_dimensions(&doc))
    }

    #[test]
    fn encodes_png_signature() {
        let img = encode_png(&canvas_of(&["a b"]), EmptyPolicy::Reject).unwrap();
        assert_eq!((img.width, img.height), (3, 1));
        assert_eq!(&img.png_data[0..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn empty_canvas_follows_policy() {
        let blank = canvas_of(&["", ""]);
        let err = encode_png(&blank, EmptyPolicy::Reject).unwrap_err();
        assert!(matches!(err, Error::DegenerateInput { width: 0, height: 2 }));

        let img = encode_png(&blank, EmptyPolicy::Placeholder).unwrap();
        assert_eq!((img.width, img.height), (1, 1));
    }

    #[test]
    fn output_name_appends_png() {
        let p = output_path_for(Path::new("/src/dir/main.go"), Path::new("/out"));
        assert_eq!(p, PathBuf::from("/out/main.go.png"));
    }

    #[test]
    fn unwritable_destination_is_reported() {
        let dest = Path::new("/definitely/not/a/dir/x.png");
        let err = write_png(&canvas_of(&["x"]), dest, EmptyPolicy::Reject).unwrap_err();
        assert!(matches!(err, Error::OutputUnavailable { .. }));
    }
}
