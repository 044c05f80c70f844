//! Tests for the WKT codec

use super::*;
use crate::coordinate::{Coordinate, Geometry, GeometryType};
use crate::errors::CoordError;

fn coord(lon: f64, lat: f64) -> Coordinate {
    Coordinate::new(lon, lat).unwrap()
}

#[test]
fn test_tokenize() {
    let tokens = tokenize("POINT (1.5 -2e1)").unwrap();
    assert_eq!(tokens, vec![
        WktToken::Word("POINT".to_string()),
        WktToken::LeftParen,
        WktToken::Number(1.5),
        WktToken::Number(-20.0),
        WktToken::RightParen,
    ]);
    assert!(tokenize("POINT(1 2);").is_err());
}

#[test]
fn test_parse_point() {
    let geometry = parse_wkt("POINT(-0.1278 51.5077)").unwrap();
    assert_eq!(geometry, Geometry::Point(coord(-0.1278, 51.5077)));
}

#[test]
fn test_parse_is_case_and_whitespace_insensitive() {
    let canonical = parse_wkt("LINESTRING(30 10,10 30,40 40)").unwrap();
    let loose = parse_wkt("  linestring (  30 10 , 10   30,\n40 40 ) ").unwrap();
    assert_eq!(canonical, loose);
}

#[test]
fn test_parse_polygon_with_hole() {
    let geometry = parse_wkt(
        "POLYGON((35 10, 45 45, 15 40, 10 20, 35 10), (20 30, 35 35, 30 20, 20 30))"
    ).unwrap();
    match &geometry {
        Geometry::Polygon(rings) => {
            assert_eq!(rings.len(), 2);
            assert_eq!(rings[0].len(), 5);
            assert_eq!(rings[1].len(), 4);
        },
        other => panic!("expected polygon, got {:?}", other),
    }
    let extent = geometry.extent().unwrap();
    assert_eq!(extent.to_array(), [10.0, 10.0, 45.0, 45.0]);
}

#[test]
fn test_parse_multipoint_both_forms() {
    let bare = parse_wkt("MULTIPOINT(10 40, 40 30, 20 20)").unwrap();
    let wrapped = parse_wkt("MULTIPOINT((10 40), (40 30), (20 20))").unwrap();
    assert_eq!(bare, wrapped);
    assert_eq!(bare.geometry_type(), GeometryType::MultiPoint);
    assert_eq!(bare.vertex_count(), 3);
}

#[test]
fn test_parse_multi_types() {
    let lines = parse_wkt("MULTILINESTRING((10 10, 20 20, 10 40), (40 40, 30 30, 40 20, 30 10))").unwrap();
    assert_eq!(lines.geometry_type(), GeometryType::MultiLineString);
    assert_eq!(lines.vertex_count(), 7);

    let polygons = parse_wkt(
        "MULTIPOLYGON(((30 20, 45 40, 10 40, 30 20)), ((15 5, 40 10, 10 20, 5 10, 15 5)))"
    ).unwrap();
    assert_eq!(polygons.geometry_type(), GeometryType::MultiPolygon);
    assert_eq!(polygons.first_coordinate(), Some(coord(30.0, 20.0)));
    assert_eq!(polygons.extent().unwrap().to_array(), [5.0, 5.0, 45.0, 40.0]);
}

#[test]
fn test_unsupported_geometry_type() {
    assert_eq!(
        parse_wkt("GEOMETRYCOLLECTION(POINT(1 2))").unwrap_err(),
        CoordError::UnsupportedGeometryType("GEOMETRYCOLLECTION".to_string())
    );
    assert!(matches!(parse_wkt("circle(1 2)"), Err(CoordError::UnsupportedGeometryType(_))));
}

#[test]
fn test_malformed_wkt() {
    let malformed = [
        "",
        "POINT",
        "POINT(1 2",
        "POINT(1 2))",
        "POINT(1)",
        "POINT(1 2 3)",
        "POINT Z(1 2 3)",
        "POINT EMPTY",
        "LINESTRING(1 2)",
        "LINESTRING(1 2 3 4)",
        "POLYGON((0 0, 1 0, 1 1, 0 1))",
        "POLYGON((0 0, 1 1, 0 0))",
        "MULTIPOINT()",
        "POINT(1, 2)",
        "(1 2)",
    ];
    for input in &malformed {
        match parse_wkt(input) {
            Err(CoordError::MalformedWkt(_)) => {},
            other => panic!("expected MalformedWkt for {:?}, got {:?}", input, other),
        }
    }
}

#[test]
fn test_out_of_range_position() {
    assert!(matches!(parse_wkt("POINT(181 0)"), Err(CoordError::OutOfRange { .. })));
    assert!(matches!(parse_wkt("LINESTRING(0 0, 0 91)"), Err(CoordError::OutOfRange { .. })));
}

#[test]
fn test_write_canonical() {
    assert_eq!(to_wkt(&coord(-0.1278, 51.5077)), "POINT(-0.1278 51.5077)");

    let multipoint = Geometry::MultiPoint(vec![coord(1.0, 2.0), coord(3.0, 4.0)]);
    assert_eq!(to_wkt(&multipoint), "MULTIPOINT((1 2),(3 4))");

    let polygon = parse_wkt("POLYGON ((0 0, 10 0, 10 10, 0 10, 0 0))").unwrap();
    assert_eq!(polygon.to_wkt(), "POLYGON((0 0,10 0,10 10,0 10,0 0))");
}

#[test]
fn test_round_trip_and_idempotence() {
    let inputs = [
        "POINT(-0.1278 51.5077)",
        "LINESTRING(30 10, 10 30, 40 40)",
        "POLYGON((35 10, 45 45, 15 40, 10 20, 35 10), (20 30, 35 35, 30 20, 20 30))",
        "MULTIPOINT(10 40, 40 30, 20 20, 30 10)",
        "MULTILINESTRING((10 10, 20 20, 10 40), (40 40, 30 30, 40 20, 30 10))",
        "MULTIPOLYGON(((40 40, 20 45, 45 30, 40 40)), ((20 35, 10 30, 10 10, 30 5, 45 20, 20 35), (30 20, 20 15, 20 25, 30 20)))",
        "POINT(0.1 -0.30000000000000004)",
    ];
    for input in &inputs {
        let geometry = parse_wkt(input).unwrap();
        let written = to_wkt(&geometry);
        let reparsed = parse_wkt(&written).unwrap();
        assert_eq!(reparsed, geometry, "{}", input);
        assert_eq!(to_wkt(&reparsed), written, "{}", input);
    }
}
