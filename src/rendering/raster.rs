//! Rasterizer: maps a document onto a binary canvas, one pixel per character.

use crate::document::{Document, Line};
use crate::rendering::{Canvas, Dimensions, Pixel};
use crate::RasterConfig;

/// Whitespace (Unicode `White_Space`) is white, every other character black.
pub fn classify(c: char) -> Pixel {
    if c.is_whitespace() {
        Pixel::White
    } else {
        Pixel::Black
    }
}

/// Height is the line count, width the longest line in characters.
/// An empty document yields 0x0.
pub fn compute_dimensions(document: &Document) -> Dimensions {
    let width = document.lines().iter().map(Line::len).max().unwrap_or(0);
    Dimensions {
        width,
        height: document.len(),
    }
}

// Each slot is written exactly once: by its character, or as padding.
fn fill_row(line: Option<&Line>, row: &mut [Pixel]) {
    let mut chars = line.map(Line::chars);
    for slot in row.iter_mut() {
        *slot = match chars.as_mut().and_then(|it| it.next()) {
            Some(c) => classify(c),
            None => Pixel::White,
        };
    }
}

/// Fill a `dims`-sized canvas from `document` on the calling thread.
///
/// `dims` normally comes from [`compute_dimensions`]. Rows past the end of the
/// document are padding, and characters past `dims.width` are not drawn.
pub fn render(document: &Document, dims: Dimensions) -> Canvas {
    let mut pixels = vec![Pixel::White; dims.area()];
    if dims.width > 0 {
        for (y, row) in pixels.chunks_mut(dims.width).enumerate() {
            fill_row(document.lines().get(y), row);
        }
    }
    Canvas::from_pixels(dims, pixels)
}

// Requested workers, capped by the logical CPU count and by the row count.
fn worker_count(requested: usize, rows: usize) -> usize {
    let cpus = num_cpus::get().max(1);
    let n = if requested == 0 { cpus } else { requested.min(cpus) };
    n.min(rows.max(1))
}

/// Same output as [`render`], with rows split into contiguous bands that are
/// filled on up to `threads` scoped threads. `0` means one per logical CPU;
/// larger requests are capped at the CPU count.
pub fn render_parallel(document: &Document, dims: Dimensions, threads: usize) -> Canvas {
    let threads = worker_count(threads, dims.height);

    if threads <= 1 || dims.width == 0 {
        return render(document, dims);
    }

    let rows_per_band = dims.height.div_ceil(threads);
    log::debug!(
        "rendering {}x{} canvas on {} threads ({} rows per band)",
        dims.width,
        dims.height,
        threads,
        rows_per_band
    );

    let mut pixels = vec![Pixel::White; dims.area()];
    std::thread::scope(|s| {
        for (band, span) in pixels.chunks_mut(rows_per_band * dims.width).enumerate() {
            let first_row = band * rows_per_band;
            s.spawn(move || {
                for (i, row) in span.chunks_mut(dims.width).enumerate() {
                    fill_row(document.lines().get(first_row + i), row);
                }
            });
        }
    });
    Canvas::from_pixels(dims, pixels)
}

/// Compute dimensions, then render according to `config`.
pub fn rasterize(document: &Document, config: &RasterConfig) -> Canvas {
    let dims = compute_dimensions(document);
    log::debug!("canvas dimensions {}x{}", dims.width, dims.height);
    render_parallel(document, dims, config.threads)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rendering::Pixel::{Black as B, White as W};

    #[test]
    fn classify_uses_unicode_whitespace() {
        for c in [' ', '\t', '\u{0b}', '\u{0c}', '\u{85}', '\u{a0}', '\u{2003}', '\u{3000}'] {
            assert_eq!(classify(c), W, "{:?}", c);
        }
        for c in ['a', '_', '{', 'é', '→', '\u{fffd}', '\u{200b}'] {
            assert_eq!(classify(c), B, "{:?}", c);
        }
    }

    #[test]
    fn pads_short_rows() {
        let doc = Document::from_lines(["ab", "c"]);
        let canvas = render(&doc, compute_dimensions(&doc));
        assert_eq!(canvas.row(0), Some(&[B, B][..]));
        assert_eq!(canvas.row(1), Some(&[B, W][..]));
    }

    #[test]
    fn multibyte_columns_stay_aligned() {
        let doc = Document::from_lines(["é é", "abc"]);
        let dims = compute_dimensions(&doc);
        assert_eq!(dims, Dimensions { width: 3, height: 2 });
        let canvas = render(&doc, dims);
        assert_eq!(canvas.row(0), Some(&[B, W, B][..]));
    }

    #[test]
    fn explicit_dims_clip_and_pad() {
        let doc = Document::from_lines(["abcd"]);
        let canvas = render(&doc, Dimensions { width: 2, height: 2 });
        assert_eq!(canvas.pixels(), &[B, B, W, W]);
    }

    #[test]
    fn parallel_matches_serial() {
        let doc = Document::from_lines((0..37).map(|i| format!("{}{}", " ".repeat(i % 5), "x".repeat(i))));
        let dims = compute_dimensions(&doc);
        let serial = render(&doc, dims);
        for threads in [0, 1, 2, 3, 8, 64, usize::MAX] {
            assert_eq!(render_parallel(&doc, dims, threads), serial, "threads={}", threads);
        }
    }

    #[test]
    fn worker_count_is_capped() {
        let cpus = num_cpus::get().max(1);
        assert_eq!(worker_count(0, 1000), cpus.min(1000));
        assert_eq!(worker_count(20_000, 1_000_000), cpus);
        assert_eq!(worker_count(usize::MAX, 3), cpus.min(3));
        assert_eq!(worker_count(8, 0), 1);
        assert_eq!(worker_count(1, 50), 1);
    }
}
