use crate::foundation::{
    buffer::PixelBuffer,
    core::{Dims, Rgb},
    error::PixmorphResult,
};

/// Mirror left to right: column `j` moves to `width - 1 - j`.
pub fn flip_horizontal(buf: &PixelBuffer) -> PixelBuffer {
    let last = buf.width() - 1;
    PixelBuffer::from_fn(buf.dims(), |row, col| buf.at(row, last - col))
}

/// Mirror top to bottom: row `i` moves to `height - 1 - i`.
pub fn flip_vertical(buf: &PixelBuffer) -> PixelBuffer {
    let last = buf.height() - 1;
    PixelBuffer::from_fn(buf.dims(), |row, col| buf.at(last - row, col))
}

/// `floor(0.299 r + 0.587 g + 0.114 b)`.
///
/// Evaluated with per-mille integer weights, which is the exact floor of the
/// real-valued sum. A gray pixel therefore maps to its own value.
pub fn luminance(px: Rgb) -> u8 {
    let sum = 299 * u32::from(px.r) + 587 * u32::from(px.g) + 114 * u32::from(px.b);
    (sum / 1000) as u8
}

/// Replace every pixel by its luminance in all three channels.
pub fn grayscale(buf: &PixelBuffer) -> PixelBuffer {
    buf.map(|&px| Rgb::gray(luminance(px)))
}

/// Nearest-neighbour resample to `new_width x new_height`.
///
/// Output `(i, j)` samples source row `round(i * height / new_height)` and
/// column `round(j * width / new_width)`, rounding half away from zero. When
/// upscaling by more than 2x the rounded index can land one past the last
/// row/column; it is clamped to the edge.
pub fn scale(buf: &PixelBuffer, new_width: u32, new_height: u32) -> PixmorphResult<PixelBuffer> {
    let target = Dims::new(new_width, new_height)?;
    let (src_w, src_h) = (buf.width(), buf.height());

    Ok(PixelBuffer::from_fn(target, |row, col| {
        let src_row = nearest(row, src_h, new_height);
        let src_col = nearest(col, src_w, new_width);
        buf.at(src_row, src_col)
    }))
}

fn nearest(i: u32, src_len: u32, dst_len: u32) -> u32 {
    let pos = (u64::from(i) * u64::from(src_len)) as f64 / f64::from(dst_len);
    (pos.round() as u32).min(src_len - 1)
}

#[cfg(test)]
#[path = "../../tests/unit/effects/transform.rs"]
mod tests;
