//! Tests for input detection and handlers

use super::*;
use crate::coordinate::Coordinate;
use crate::errors::CoordError;

#[test]
fn test_detect_wkt() {
    assert_eq!(InputFormat::detect("POINT(-0.1278 51.5077)"), InputFormat::Wkt);
    assert_eq!(InputFormat::detect("  polygon ((0 0, 1 0, 1 1, 0 0))"), InputFormat::Wkt);
    assert_eq!(InputFormat::detect("POINT EMPTY"), InputFormat::Wkt);
    assert_eq!(InputFormat::detect("GEOMETRYCOLLECTION(POINT(1 2))"), InputFormat::Wkt);
}

#[test]
fn test_detect_mgrs() {
    assert_eq!(InputFormat::detect("31UDQ4826010878"), InputFormat::Mgrs);
    assert_eq!(InputFormat::detect("31U DQ 48260 10878"), InputFormat::Mgrs);
    assert_eq!(InputFormat::detect("4qfj12345678"), InputFormat::Mgrs);
    assert_eq!(InputFormat::detect("ZAH"), InputFormat::Mgrs);
}

#[test]
fn test_detect_polar_mgrs_with_modifier_letters() {
    for text in &["ZAM", "BAZ", "YZM", "AZM 123 456", "ZAM 12 34", "BAM 1234 5678"] {
        assert_eq!(InputFormat::detect(text), InputFormat::Mgrs, "{}", text);
    }
    assert_eq!(InputFormat::detect("POINT Z(1 2 3)"), InputFormat::Wkt);
    assert_eq!(InputFormat::detect("point zm (1 2 3 4)"), InputFormat::Wkt);
    assert_eq!(InputFormat::detect("LINESTRING M EMPTY"), InputFormat::Wkt);
}

#[test]
fn test_detect_freeform() {
    assert_eq!(InputFormat::detect("40°26'46\"N 79°58'56\"W"), InputFormat::Freeform);
    assert_eq!(InputFormat::detect("N 40 26 46 W 79 58 56"), InputFormat::Freeform);
    assert_eq!(InputFormat::detect("40.4461, -79.9822"), InputFormat::Freeform);
    assert_eq!(InputFormat::detect("40N 79W"), InputFormat::Freeform);
}

#[test]
fn test_format_names() {
    for name in InputFormat::names().iter() {
        let format: InputFormat = name.parse().unwrap();
        assert_eq!(format.name(), *name);
    }
    assert_eq!("DMS".parse::<InputFormat>().unwrap(), InputFormat::Freeform);
    assert!(matches!("gml".parse::<InputFormat>(), Err(CoordError::Config(_))));
}

#[test]
fn test_lonlat_handler() {
    let handler = LonLatHandler;
    let resolved = handler.resolve("-0.1278, 51.5077").unwrap();
    assert_eq!(resolved.coordinate, Coordinate::new(-0.1278, 51.5077).unwrap());
    assert_eq!(resolved.bbox, None);

    assert_eq!(handler.resolve("10 20").unwrap().coordinate, Coordinate::new(10.0, 20.0).unwrap());
    assert!(matches!(handler.resolve("10"), Err(CoordError::MalformedCoordinateString(_))));
    assert!(matches!(handler.resolve("ten,20"), Err(CoordError::MalformedCoordinateString(_))));
    assert!(matches!(handler.resolve("10,95"), Err(CoordError::OutOfRange { .. })));
}

#[test]
fn test_wkt_handler_policy() {
    let point = WktHandler.resolve("POINT(1 2)").unwrap();
    assert_eq!(point.bbox, None);

    let line = WktHandler.resolve("LINESTRING(5 5, -3 1, 6 9)").unwrap();
    assert_eq!(line.coordinate, Coordinate::new(5.0, 5.0).unwrap());
    assert_eq!(line.bbox.unwrap().to_array(), [-3.0, 1.0, 6.0, 9.0]);
}

#[test]
fn test_mgrs_handler_has_box() {
    let resolved = MgrsHandler.resolve("31UDQ4826010878").unwrap();
    assert!(resolved.bbox.unwrap().contains(&resolved.coordinate));
}

#[test]
fn test_factory() {
    assert_eq!(InputFactory::create_handler(InputFormat::Wkt).unwrap().format(), InputFormat::Wkt);
    assert!(InputFactory::create_handler(InputFormat::Auto).is_err());
    assert_eq!(InputFactory::get_handler_by_name("lonlat").unwrap().format(), InputFormat::LonLat);

    assert_eq!(InputFactory::handler_for("31UDQ48261087", InputFormat::Auto).format(), InputFormat::Mgrs);
    assert_eq!(InputFactory::handler_for("31UDQ48261087", InputFormat::Freeform).format(), InputFormat::Freeform);
}
