use std::error::Error as _;

use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        PixmorphError::format("x")
            .to_string()
            .contains("format error:")
    );
    assert!(PixmorphError::range("x").to_string().contains("range error:"));
    assert!(
        PixmorphError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        PixmorphError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
    assert!(
        PixmorphError::io("read 'a.ppm'", std::io::Error::other("boom"))
            .to_string()
            .contains("io error: read 'a.ppm'")
    );
}

#[test]
fn io_keeps_source() {
    let err = PixmorphError::io("read 'a.ppm'", std::io::Error::other("boom"));
    let source = err.source().expect("io error has a source");
    assert!(source.to_string().contains("boom"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = PixmorphError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
