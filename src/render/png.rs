use std::path::PathBuf;

use anyhow::Context as _;

use crate::{
    foundation::{
        buffer::PixelBuffer,
        core::Dims,
        error::{PixmorphError, PixmorphResult},
    },
    render::backend::Renderer,
};

/// Renderer that writes each frame to `<dir>/frame_NNNN.png`.
///
/// Every source pixel is drawn as a filled `cell_size x cell_size` square so
/// that tiny pixel maps stay visible.
#[derive(Debug)]
pub struct PngSequenceRenderer {
    dir: PathBuf,
    cell_size: u32,
    canvas: Option<Dims>,
    written: Vec<PathBuf>,
}

impl PngSequenceRenderer {
    /// Write frames into `dir`, created on [`Renderer::set_canvas`].
    pub fn new(dir: impl Into<PathBuf>, cell_size: u32) -> PixmorphResult<Self> {
        if cell_size == 0 {
            return Err(PixmorphError::validation("png cell_size must be non-zero"));
        }
        Ok(Self {
            dir: dir.into(),
            cell_size,
            canvas: None,
            written: Vec::new(),
        })
    }

    /// Paths of the frames written so far, in order.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    fn frame_path(&self, index: usize) -> PathBuf {
        self.dir.join(format!("frame_{index:04}.png"))
    }

    fn rasterize(&self, frame: &PixelBuffer) -> PixmorphResult<(u32, u32, Vec<u8>)> {
        let cell = self.cell_size;
        let out_w = frame
            .width()
            .checked_mul(cell)
            .ok_or_else(|| PixmorphError::range("png width overflows u32"))?;
        let out_h = frame
            .height()
            .checked_mul(cell)
            .ok_or_else(|| PixmorphError::range("png height overflows u32"))?;

        let mut data = Vec::with_capacity(out_w as usize * out_h as usize * 3);
        for row in frame.rows() {
            let mut line = Vec::with_capacity(out_w as usize * 3);
            for px in row {
                for _ in 0..cell {
                    line.extend_from_slice(&px.channels());
                }
            }
            for _ in 0..cell {
                data.extend_from_slice(&line);
            }
        }
        Ok((out_w, out_h, data))
    }
}

impl Renderer for PngSequenceRenderer {
    fn set_canvas(&mut self, canvas: &PixelBuffer) -> PixmorphResult<()> {
        std::fs::create_dir_all(&self.dir).map_err(|e| {
            PixmorphError::io(format!("create frame dir '{}'", self.dir.display()), e)
        })?;
        self.canvas = Some(canvas.dims());
        self.written.clear();
        Ok(())
    }

    fn display(&mut self, frame: &PixelBuffer) -> PixmorphResult<()> {
        let canvas = self
            .canvas
            .ok_or_else(|| PixmorphError::validation("display called before set_canvas"))?;
        if frame.dims() != canvas {
            return Err(PixmorphError::range(format!(
                "frame is {} but canvas is {canvas}",
                frame.dims()
            )));
        }

        let (w, h, data) = self.rasterize(frame)?;
        let path = self.frame_path(self.written.len());
        image::save_buffer_with_format(
            &path,
            &data,
            w,
            h,
            image::ColorType::Rgb8,
            image::ImageFormat::Png,
        )
        .with_context(|| format!("write png '{}'", path.display()))?;

        tracing::trace!(path = %path.display(), "wrote frame");
        self.written.push(path);
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/png.rs"]
mod tests;
