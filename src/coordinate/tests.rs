//! Tests for the coordinate model

use super::*;
use crate::errors::CoordError;

fn coord(lon: f64, lat: f64) -> Coordinate {
    Coordinate::new(lon, lat).unwrap()
}

#[test]
fn test_coordinate_accepts_domain_edges() {
    assert!(Coordinate::new(180.0, 90.0).is_ok());
    assert!(Coordinate::new(-180.0, -90.0).is_ok());
}

#[test]
fn test_coordinate_rejects_out_of_range() {
    match Coordinate::new(0.0, 90.0000001) {
        Err(CoordError::OutOfRange { axis, .. }) => assert_eq!(axis, "latitude"),
        other => panic!("expected OutOfRange, got {:?}", other),
    }
    assert!(matches!(Coordinate::new(-180.5, 0.0), Err(CoordError::OutOfRange { .. })));
    assert!(Coordinate::new(f64::NAN, 0.0).is_err());
    assert!(Coordinate::new(0.0, f64::INFINITY).is_err());
}

#[test]
fn test_wrapped_longitude() {
    let c = Coordinate::from_lon_lat_wrapped(181.0, 10.0).unwrap();
    assert!((c.lon() - -179.0).abs() < 1e-12);
    let c = Coordinate::from_lon_lat_wrapped(-180.0, 10.0).unwrap();
    assert_eq!(c.lon(), -180.0);
    assert!(Coordinate::from_lon_lat_wrapped(10.0, 91.0).is_err());
}

#[test]
fn test_is_near() {
    let a = coord(2.2945, 48.8584);
    let b = coord(2.294509, 48.858391);
    assert!(a.is_near(&b, DEFAULT_EPSILON));
    assert!(!a.is_near(&coord(2.3, 48.8584), DEFAULT_EPSILON));
}

#[test]
fn test_bbox_validation_and_contains() {
    assert!(BoundingBox::new(10.0, 0.0, 5.0, 1.0).is_err());
    let bbox = BoundingBox::new(-1.0, -2.0, 3.0, 4.0).unwrap();
    assert_eq!(bbox.width(), 4.0);
    assert_eq!(bbox.height(), 6.0);
    assert_eq!(bbox.center().unwrap(), coord(1.0, 1.0));
    assert!(bbox.contains(&coord(-1.0, 4.0)));
    assert!(!bbox.contains(&coord(3.5, 0.0)));
}

#[test]
fn test_bbox_polygon_is_closed() {
    let bbox = BoundingBox::new(0.0, 0.0, 1.0, 1.0).unwrap();
    let ring = bbox.to_polygon();
    assert_eq!(ring.len(), 5);
    assert_eq!(ring.first(), ring.last());
}

#[test]
fn test_geometry_extent_and_first_coordinate() {
    let geometry = Geometry::MultiPolygon(vec![
        vec![vec![coord(5.0, 5.0), coord(6.0, 5.0), coord(6.0, 6.0), coord(5.0, 5.0)]],
        vec![vec![coord(-3.0, 1.0), coord(-2.0, 1.0), coord(-2.0, 9.0), coord(-3.0, 1.0)]],
    ]);

    assert_eq!(geometry.geometry_type(), GeometryType::MultiPolygon);
    assert_eq!(geometry.first_coordinate(), Some(coord(5.0, 5.0)));
    assert_eq!(geometry.vertex_count(), 8);
    let extent = geometry.extent().unwrap();
    assert_eq!(extent.to_array(), [-3.0, 1.0, 6.0, 9.0]);
}

#[test]
fn test_geometry_type_keywords() {
    assert_eq!(GeometryType::from_keyword("multiLineString"), Some(GeometryType::MultiLineString));
    assert_eq!(GeometryType::from_keyword("GEOMETRYCOLLECTION"), None);
    assert_eq!(GeometryType::Polygon.keyword(), "POLYGON");
}

#[test]
fn test_serialize_as_arrays() {
    let json = serde_json::to_string(&coord(1.5, -2.0)).unwrap();
    assert_eq!(json, "[1.5,-2.0]");
    let bbox = BoundingBox::new(0.0, 1.0, 2.0, 3.0).unwrap();
    assert_eq!(serde_json::to_string(&bbox).unwrap(), "[0.0,1.0,2.0,3.0]");
}
