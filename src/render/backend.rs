use crate::foundation::{buffer::PixelBuffer, error::PixmorphResult};

/// Drawing surface that frames are handed to.
///
/// Core code only calls into a renderer; it never depends on how the pixels
/// reach the screen (or a file, or a test recorder).
pub trait Renderer {
    /// Size the drawing surface to `canvas`. Called once before any frame.
    fn set_canvas(&mut self, canvas: &PixelBuffer) -> PixmorphResult<()>;

    /// Draw every pixel of `frame` as a unit cell and flush it.
    fn display(&mut self, frame: &PixelBuffer) -> PixmorphResult<()>;
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn set_canvas(&mut self, canvas: &PixelBuffer) -> PixmorphResult<()> {
        (**self).set_canvas(canvas)
    }

    fn display(&mut self, frame: &PixelBuffer) -> PixmorphResult<()> {
        (**self).display(frame)
    }
}
