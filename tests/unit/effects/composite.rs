use super::*;
use crate::foundation::core::Dims;

#[test]
fn alpha_1_is_c1_and_alpha_0_is_c2() {
    let c1 = Rgb::new(10, 20, 30);
    let c2 = Rgb::new(200, 210, 220);
    assert_eq!(blend_pixel(c1, c2, 1.0).unwrap(), c1);
    assert_eq!(blend_pixel(c1, c2, 0.0).unwrap(), c2);

    for v in [0u8, 1, 127, 128, 254, 255] {
        let a = Rgb::new(v, 255 - v, v / 2);
        let b = Rgb::new(255 - v, v, v / 3);
        assert_eq!(blend_pixel(a, b, 1.0).unwrap(), a);
        assert_eq!(blend_pixel(a, b, 0.0).unwrap(), b);
    }
}

#[test]
fn channels_blend_independently_and_truncate() {
    // red + blue at 0.5: 127.5 -> 127
    assert_eq!(
        blend_pixel(Rgb::RED, Rgb::BLUE, 0.5).unwrap(),
        Rgb::new(127, 0, 127)
    );
    // 0.25 * 100 + 0.75 * 1 = 25.75 -> 25
    assert_eq!(
        blend_pixel(Rgb::new(100, 0, 8), Rgb::new(1, 4, 0), 0.25).unwrap(),
        Rgb::new(25, 3, 2)
    );
}

#[test]
fn alpha_outside_unit_interval_is_range_error() {
    for alpha in [-0.01, 1.01, -1.0, 2.0, f64::NAN, f64::INFINITY] {
        assert!(
            matches!(
                blend_pixel(Rgb::RED, Rgb::BLUE, alpha),
                Err(PixmorphError::Range(_))
            ),
            "alpha {alpha}"
        );
    }
}

#[test]
fn blend_buffers_is_elementwise() {
    let dims = Dims::new(3, 2).unwrap();
    let a = PixelBuffer::from_fn(dims, |r, c| Rgb::gray((r * 3 + c) as u8 * 20));
    let b = PixelBuffer::filled(dims, Rgb::new(200, 100, 0));

    let out = blend_buffers(&a, &b, 0.5).unwrap();
    assert_eq!(out.dims(), dims);
    for ((pa, pb), po) in a.pixels().iter().zip(b.pixels()).zip(out.pixels()) {
        assert_eq!(*po, blend_pixel(*pa, *pb, 0.5).unwrap());
    }

    assert_eq!(blend_buffers(&a, &b, 1.0).unwrap(), a);
    assert_eq!(blend_buffers(&a, &b, 0.0).unwrap(), b);
}

#[test]
fn blend_buffers_rejects_mismatched_dims() {
    let a = PixelBuffer::filled(Dims::new(3, 2).unwrap(), Rgb::RED);
    let b = PixelBuffer::filled(Dims::new(2, 3).unwrap(), Rgb::BLUE);
    let c = PixelBuffer::filled(Dims::new(3, 3).unwrap(), Rgb::BLUE);
    assert!(matches!(
        blend_buffers(&a, &b, 0.5),
        Err(PixmorphError::Range(_))
    ));
    assert!(matches!(
        blend_buffers(&a, &c, 0.5),
        Err(PixmorphError::Range(_))
    ));
}

#[test]
fn blend_buffers_rejects_bad_alpha() {
    let a = PixelBuffer::filled(Dims::new(1, 1).unwrap(), Rgb::RED);
    assert!(matches!(
        blend_buffers(&a, &a, 1.5),
        Err(PixmorphError::Range(_))
    ));
}
