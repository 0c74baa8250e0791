use std::io::Write;

use crate::{
    foundation::{
        buffer::PixelBuffer,
        error::{PixmorphError, PixmorphResult},
    },
    render::backend::Renderer,
};

/// Renderer that prints each frame as rows of `(r,g,b)` triples.
pub struct TextRenderer<W: Write> {
    out: W,
    frames: u64,
}

impl<W: Write> TextRenderer<W> {
    /// Print frames to `out`.
    pub fn new(out: W) -> Self {
        Self { out, frames: 0 }
    }

    /// Frames written so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Give back the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn set_canvas(&mut self, canvas: &PixelBuffer) -> PixmorphResult<()> {
        writeln!(self.out, "canvas {}", canvas.dims())
            .map_err(|e| PixmorphError::io("write canvas header", e))
    }

    fn display(&mut self, frame: &PixelBuffer) -> PixmorphResult<()> {
        write!(self.out, "frame {}\n{frame}\n", self.frames)
            .and_then(|()| self.out.flush())
            .map_err(|e| PixmorphError::io(format!("write frame {}", self.frames), e))?;
        self.frames += 1;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/text.rs"]
mod tests;
