use std::fmt;

use crate::foundation::{
    core::{Dims, Rgb},
    error::{PixmorphError, PixmorphResult},
};

/// Owned, row-major grid of [`Rgb`] pixels.
///
/// Dimensions are fixed at construction and no mutable access is exposed:
/// every transform in this crate returns a fresh buffer. Cloning gives value
/// semantics.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    dims: Dims,
    pixels: Vec<Rgb>,
}

impl PixelBuffer {
    /// Wrap `pixels` (row-major) as a buffer of the given dimensions.
    pub fn new(dims: Dims, pixels: Vec<Rgb>) -> PixmorphResult<Self> {
        if pixels.len() != dims.area() {
            return Err(PixmorphError::range(format!(
                "{dims} buffer needs {} pixels, got {}",
                dims.area(),
                pixels.len()
            )));
        }
        Ok(Self { dims, pixels })
    }

    /// Build a buffer by evaluating `f(row, col)` for every position.
    pub fn from_fn(dims: Dims, mut f: impl FnMut(u32, u32) -> Rgb) -> Self {
        let mut pixels = Vec::with_capacity(dims.area());
        for row in 0..dims.height() {
            for col in 0..dims.width() {
                pixels.push(f(row, col));
            }
        }
        Self { dims, pixels }
    }

    /// Build a buffer from nested rows. All rows must have the same, non-zero length.
    pub fn from_rows(rows: Vec<Vec<Rgb>>) -> PixmorphResult<Self> {
        let height = u32::try_from(rows.len())
            .map_err(|_| PixmorphError::range("too many rows for a pixel buffer"))?;
        let width = rows.first().map_or(0, Vec::len);
        let width = u32::try_from(width)
            .map_err(|_| PixmorphError::range("row too long for a pixel buffer"))?;
        let dims = Dims::new(width, height)?;

        let mut pixels = Vec::with_capacity(dims.area());
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != width as usize {
                return Err(PixmorphError::range(format!(
                    "row {i} has {} pixels, expected {width}",
                    row.len()
                )));
            }
            pixels.extend(row);
        }
        Ok(Self { dims, pixels })
    }

    /// A buffer with every pixel set to `px`.
    pub fn filled(dims: Dims, px: Rgb) -> Self {
        Self {
            dims,
            pixels: vec![px; dims.area()],
        }
    }

    /// Width and height.
    pub fn dims(&self) -> Dims {
        self.dims
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.dims.width()
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.dims.height()
    }

    /// Pixel at `(row, col)`, or `None` when out of bounds.
    pub fn get(&self, row: u32, col: u32) -> Option<Rgb> {
        if !self.dims.contains(row, col) {
            return None;
        }
        self.pixels.get(self.dims.offset(row, col)).copied()
    }

    /// All pixels in row-major order.
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// Iterate over rows, top to bottom.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[Rgb]> + '_ {
        self.pixels.chunks_exact(self.dims.width() as usize)
    }

    /// New buffer of the same dimensions with `f` applied to every pixel.
    pub fn map(&self, f: impl FnMut(&Rgb) -> Rgb) -> Self {
        Self {
            dims: self.dims,
            pixels: self.pixels.iter().map(f).collect(),
        }
    }

    /// Pixel at an in-bounds position. Callers derive `row`/`col` from `self.dims`.
    pub(crate) fn at(&self, row: u32, col: u32) -> Rgb {
        self.pixels[self.dims.offset(row, col)]
    }
}

/// Text dump: every pixel as `(rrr,ggg,bbb)` followed by two spaces, one line per row.
impl fmt::Display for PixelBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for px in row {
                write!(f, "{px}  ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/buffer.rs"]
mod tests;
