use std::path::Path;

use crate::foundation::{
    buffer::PixelBuffer,
    core::{Dims, Rgb},
    error::{PixmorphError, PixmorphResult},
};

/// Read and decode a plain-text pixel map from disk.
///
/// See [`parse_ppm`] for the accepted layout. IO failures surface as
/// [`PixmorphError::Io`], non-UTF-8 content as [`PixmorphError::Format`];
/// nothing is returned for a partially valid file.
#[tracing::instrument(level = "debug", skip(path), fields(path = %path.display()))]
pub fn read_ppm(path: &Path) -> PixmorphResult<PixelBuffer> {
    let text = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::InvalidData => {
            PixmorphError::format(format!("pixel map '{}' is not text: {e}", path.display()))
        }
        _ => PixmorphError::io(format!("read pixel map '{}'", path.display()), e),
    })?;
    let buf = parse_ppm(&text)?;
    tracing::debug!(width = buf.width(), height = buf.height(), "decoded pixel map");
    Ok(buf)
}

/// Decode a plain-text pixel map.
///
/// Layout: `<magic> <width> <height> <maxval>` followed by `width * height`
/// whitespace-separated `r g b` triples in row-major order. The magic token
/// only has to be present and `maxval` only has to be numeric. `#` starts a
/// comment that runs to the end of the line.
pub fn parse_ppm(text: &str) -> PixmorphResult<PixelBuffer> {
    let mut tokens = Tokens::new(text);

    tokens
        .next()
        .ok_or_else(|| PixmorphError::format("missing magic token"))?;
    let width: u32 = tokens.header_field("width")?;
    let height: u32 = tokens.header_field("height")?;
    let _maxval: u32 = tokens.header_field("maxval")?;

    let dims = Dims::new(width, height)
        .map_err(|_| PixmorphError::format(format!("invalid dimensions {width}x{height}")))?;

    // A triple takes at least six bytes of text.
    let mut pixels = Vec::with_capacity(dims.area().min(text.len() / 6 + 1));
    for row in 0..height {
        for col in 0..width {
            let mut channel = |name: &str| tokens.channel(name, row, col, dims);
            let r = channel("red")?;
            let g = channel("green")?;
            let b = channel("blue")?;
            pixels.push(Rgb::new(r, g, b));
        }
    }

    if let Some(extra) = tokens.next() {
        return Err(PixmorphError::format(format!(
            "unexpected trailing token '{extra}' after {} pixels",
            dims.area()
        )));
    }

    PixelBuffer::new(dims, pixels)
}

struct Tokens<'a> {
    inner: Box<dyn Iterator<Item = &'a str> + 'a>,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        let inner = text
            .lines()
            .map(|line| line.split_once('#').map_or(line, |(before, _)| before))
            .flat_map(str::split_whitespace);
        Self {
            inner: Box::new(inner),
        }
    }

    fn next(&mut self) -> Option<&'a str> {
        self.inner.next()
    }

    fn header_field(&mut self, name: &str) -> PixmorphResult<u32> {
        let tok = self
            .next()
            .ok_or_else(|| PixmorphError::format(format!("header is missing {name}")))?;
        tok.parse()
            .map_err(|_| PixmorphError::format(format!("header {name} '{tok}' is not numeric")))
    }

    fn channel(&mut self, name: &str, row: u32, col: u32, dims: Dims) -> PixmorphResult<u8> {
        let tok = self.next().ok_or_else(|| {
            PixmorphError::format(format!(
                "expected {} pixels for {dims}, data ends at pixel ({row}, {col})",
                dims.area()
            ))
        })?;
        let v: i64 = tok.parse().map_err(|_| {
            PixmorphError::format(format!(
                "{name} value '{tok}' at pixel ({row}, {col}) is not numeric"
            ))
        })?;
        u8::try_from(v).map_err(|_| {
            PixmorphError::format(format!(
                "{name} value {v} at pixel ({row}, {col}) is outside [0, 255]"
            ))
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/ppm.rs"]
mod tests;
