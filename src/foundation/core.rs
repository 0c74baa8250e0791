use std::fmt;

use crate::foundation::error::{PixmorphError, PixmorphResult};

/// One RGB pixel with 8-bit channels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Pure black.
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// Pure white.
    pub const WHITE: Self = Self::new(255, 255, 255);
    /// Pure red.
    pub const RED: Self = Self::new(255, 0, 0);
    /// Pure green.
    pub const GREEN: Self = Self::new(0, 255, 0);
    /// Pure blue.
    pub const BLUE: Self = Self::new(0, 0, 255);

    /// Build a pixel from its three channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build a pixel with the same value in every channel.
    pub const fn gray(v: u8) -> Self {
        Self::new(v, v, v)
    }

    /// Channels in `[r, g, b]` order.
    pub const fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Apply `f` to every channel independently.
    pub fn map_channels(self, mut f: impl FnMut(u8) -> u8) -> Self {
        Self::new(f(self.r), f(self.g), f(self.b))
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:3},{:3},{:3})", self.r, self.g, self.b)
    }
}

/// Width and height of a pixel grid. Both are always non-zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Dims {
    width: u32,
    height: u32,
}

impl Dims {
    /// Validate and build a dimension pair.
    pub fn new(width: u32, height: u32) -> PixmorphResult<Self> {
        if width == 0 || height == 0 {
            return Err(PixmorphError::range(format!(
                "dimensions must be non-zero, got {width}x{height}"
            )));
        }
        let bytes = u128::from(width) * u128::from(height) * std::mem::size_of::<Rgb>() as u128;
        if bytes > isize::MAX as u128 {
            return Err(PixmorphError::range(format!(
                "dimensions {width}x{height} overflow the address space"
            )));
        }
        Ok(Self { width, height })
    }

    /// Number of columns.
    pub fn width(self) -> u32 {
        self.width
    }

    /// Number of rows.
    pub fn height(self) -> u32 {
        self.height
    }

    /// Total number of pixels.
    pub fn area(self) -> usize {
        self.width as usize * self.height as usize
    }

    pub(crate) fn contains(self, row: u32, col: u32) -> bool {
        row < self.height && col < self.width
    }

    pub(crate) fn offset(self, row: u32, col: u32) -> usize {
        row as usize * self.width as usize + col as usize
    }
}

impl fmt::Display for Dims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
