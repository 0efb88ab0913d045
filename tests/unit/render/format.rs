use super::*;

#[test]
fn png_is_the_default_raster_format() {
    assert_eq!(OutputFormat::default(), OutputFormat::Png);
    assert!(OutputFormat::Png.is_raster());
    assert!(!OutputFormat::Svg.is_raster());
    assert!(!OutputFormat::Pdf.is_raster());
}

#[test]
fn jpeg_uses_short_extension() {
    assert_eq!(OutputFormat::Jpeg.graphviz_name(), "jpeg");
    assert_eq!(OutputFormat::Jpeg.extension(), "jpg");
    assert_eq!(OutputFormat::Svg.extension(), "svg");
}

#[test]
fn parse_is_case_insensitive_and_accepts_jpg() {
    assert_eq!("PNG".parse::<OutputFormat>().unwrap(), OutputFormat::Png);
    assert_eq!("jpg".parse::<OutputFormat>().unwrap(), OutputFormat::Jpeg);
    assert!("bmp".parse::<OutputFormat>().is_err());
}

#[test]
fn layout_names_match_graphviz_programs() {
    assert_eq!(LayoutEngine::default().to_string(), "dot");
    assert_eq!(LayoutEngine::Twopi.graphviz_name(), "twopi");
}
