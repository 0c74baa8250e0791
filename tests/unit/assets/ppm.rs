use std::path::PathBuf;

use super::*;

const TWO_BY_TWO: &str = "P3\n2\n2\n255\n255 0 0  0 255 0\n0 0 255  255 255 255\n";

#[test]
fn decodes_two_by_two_row_major() {
    let buf = parse_ppm(TWO_BY_TWO).unwrap();
    assert_eq!(buf.width(), 2);
    assert_eq!(buf.height(), 2);
    assert_eq!(buf.get(0, 0), Some(Rgb::RED));
    assert_eq!(buf.get(0, 1), Some(Rgb::GREEN));
    assert_eq!(buf.get(1, 0), Some(Rgb::BLUE));
    assert_eq!(buf.get(1, 1), Some(Rgb::WHITE));
}

#[test]
fn newlines_are_only_separators() {
    let text = "P3 3 1 255 1 2 3 4 5 6 7 8 9";
    let buf = parse_ppm(text).unwrap();
    assert_eq!(buf.width(), 3);
    assert_eq!(buf.height(), 1);
    assert_eq!(buf.get(0, 2), Some(Rgb::new(7, 8, 9)));
}

#[test]
fn comments_are_skipped() {
    let text = "P3 # plain pixmap\n# made by hand\n1 1\n255\n10 20 30 # only pixel\n";
    let buf = parse_ppm(text).unwrap();
    assert_eq!(buf.get(0, 0), Some(Rgb::new(10, 20, 30)));
}

#[test]
fn non_numeric_header_is_format_error() {
    for text in [
        "P3 two 2 255",
        "P3 2 x 255",
        "P3 2 2 max 0 0 0 0 0 0 0 0 0 0 0 0",
    ] {
        assert!(
            matches!(parse_ppm(text), Err(PixmorphError::Format(_))),
            "{text}"
        );
    }
}

#[test]
fn missing_header_fields_are_format_errors() {
    assert!(matches!(parse_ppm(""), Err(PixmorphError::Format(_))));
    assert!(matches!(parse_ppm("P3 2"), Err(PixmorphError::Format(_))));
    assert!(matches!(parse_ppm("P3 2 2"), Err(PixmorphError::Format(_))));
}

#[test]
fn zero_dimensions_are_format_errors() {
    assert!(matches!(parse_ppm("P3 0 2 255"), Err(PixmorphError::Format(_))));
}

#[test]
fn oversized_header_is_format_error() {
    assert!(matches!(
        parse_ppm("P3 4294967295 4294967295 255 1 2 3"),
        Err(PixmorphError::Format(_))
    ));
}

#[test]
fn huge_header_with_little_data_is_format_error() {
    let err = parse_ppm("P3 200000 200000 255 1 2 3").unwrap_err();
    assert!(matches!(err, PixmorphError::Format(_)));
    assert!(err.to_string().contains("(0, 1)"));
}

#[test]
fn short_pixel_data_is_format_error() {
    let err = parse_ppm("P3 2 1 255 1 2 3 4 5").unwrap_err();
    assert!(matches!(err, PixmorphError::Format(_)));
    assert!(err.to_string().contains("(0, 1)"));
}

#[test]
fn trailing_data_is_format_error() {
    let err = parse_ppm("P3 1 1 255 1 2 3 4").unwrap_err();
    assert!(matches!(err, PixmorphError::Format(_)));
}

#[test]
fn out_of_range_channel_is_format_error() {
    let err = parse_ppm("P3 1 1 255 1 256 3").unwrap_err();
    assert!(err.to_string().contains("green value 256"));
    assert!(matches!(
        parse_ppm("P3 1 1 255 -1 0 0"),
        Err(PixmorphError::Format(_))
    ));
    assert!(matches!(
        parse_ppm("P3 1 1 255 a 0 0"),
        Err(PixmorphError::Format(_))
    ));
}

#[test]
fn read_missing_file_is_io_error() {
    let path = PathBuf::from("target").join("ppm_unit").join("does_not_exist.ppm");
    let err = read_ppm(&path).unwrap_err();
    assert!(matches!(err, PixmorphError::Io { .. }));
    assert!(err.to_string().contains("does_not_exist.ppm"));
}

#[test]
fn read_from_disk_matches_parse() {
    let dir = PathBuf::from("target").join("ppm_unit");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("two_by_two.ppm");
    std::fs::write(&path, TWO_BY_TWO).unwrap();

    assert_eq!(read_ppm(&path).unwrap(), parse_ppm(TWO_BY_TWO).unwrap());
}

#[test]
fn non_utf8_file_is_format_error() {
    let dir = PathBuf::from("target").join("ppm_unit");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("binary.ppm");
    std::fs::write(&path, [b'P', b'6', b' ', 0xff, 0xfe, 0x00, 0x80]).unwrap();

    assert!(matches!(read_ppm(&path), Err(PixmorphError::Format(_))));
}
