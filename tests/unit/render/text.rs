use super::*;
use crate::foundation::core::{Dims, Rgb};

#[test]
fn writes_header_then_numbered_frames() {
    let dims = Dims::new(2, 1).unwrap();
    let a = PixelBuffer::filled(dims, Rgb::RED);
    let b = PixelBuffer::filled(dims, Rgb::gray(9));

    let mut r = TextRenderer::new(Vec::new());
    r.set_canvas(&a).unwrap();
    r.display(&a).unwrap();
    r.display(&b).unwrap();
    assert_eq!(r.frames(), 2);

    let text = String::from_utf8(r.into_inner()).unwrap();
    assert_eq!(
        text,
        "canvas 2x1\n\
         frame 0\n(255,  0,  0)  (255,  0,  0)  \n\n\
         frame 1\n(  9,  9,  9)  (  9,  9,  9)  \n\n"
    );
}
