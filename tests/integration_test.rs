//! Integration tests for the conversion pipeline

use std::io::Write;

use coordkit::errors::CoordError;
use coordkit::{Config, ConversionInput, CoordKit, InputFormat};

const LONDON_DMS: &str = "51° 30′ 27.72″ N 0° 07′ 40.08″ W";

#[test]
fn test_wkt_point_scenario() {
    let kit = CoordKit::default();
    let result = kit.convert(&ConversionInput::Wkt("POINT(-0.1278 51.5077)".to_string())).unwrap();

    assert_eq!(result.lon_lat.to_array(), [-0.1278, 51.5077]);
    assert_eq!(result.bbox, None);
    assert_eq!(result.wkt, "POINT(-0.1278 51.5077)");
    assert_eq!(result.dms, LONDON_DMS);
    assert_eq!(result.dms_without_space, "513027.72N00740.08W");
    assert_eq!(result.mgrs, "30UXC9931410197");
}

#[test]
fn test_lon_lat_pair_matches_wkt_point() {
    let kit = CoordKit::default();
    let from_pair = kit.convert(&ConversionInput::LonLat(-0.1278, 51.5077)).unwrap();
    let from_wkt = kit.convert(&ConversionInput::Wkt("POINT(-0.1278 51.5077)".to_string())).unwrap();
    assert_eq!(from_pair, from_wkt);

    let from_text = kit.convert_text("-0.1278,51.5077", InputFormat::LonLat).unwrap();
    assert_eq!(from_text, from_pair);
}

#[test]
fn test_freeform_dms_scenario() {
    let kit = CoordKit::default();
    let result = kit.convert(&ConversionInput::Freeform("40°26'46\"N 79°58'56\"W".to_string())).unwrap();

    assert!((result.lon_lat.lat() - 40.4461).abs() < 1e-4);
    assert!((result.lon_lat.lon() + 79.9822).abs() < 1e-4);
    assert_eq!(result.bbox, None);
    assert_eq!(result.dms, "40° 26′ 46″ N 79° 58′ 56″ W");
    assert_eq!(result.dms_without_space, "402646N795856W");
    assert_eq!(result.mgrs, "17TNE8630977770");
}

#[test]
fn test_mgrs_scenario() {
    let kit = CoordKit::default();
    let result = kit.convert(&ConversionInput::Mgrs("31UDQ4826010878".to_string())).unwrap();

    assert!((result.lon_lat.lon() - 2.29).abs() < 0.01);
    assert!((result.lon_lat.lat() - 48.85).abs() < 0.01);
    let bbox = result.bbox.unwrap();
    assert!(bbox.contains(&result.lon_lat));
    assert_eq!(result.mgrs, "31UDQ4826010878");
}

#[test]
fn test_wkt_geometry_uses_first_coordinate_and_extent() {
    let kit = CoordKit::default();
    let result = kit.convert(&ConversionInput::Wkt(
        "POLYGON((5 5, 10 5, 10 10, 5 10, 5 5))".to_string()
    )).unwrap();

    assert_eq!(result.lon_lat.to_array(), [5.0, 5.0]);
    assert_eq!(result.wkt, "POINT(5 5)");
    let bbox = result.bbox.unwrap();
    assert_eq!(bbox.to_array(), [5.0, 5.0, 10.0, 10.0]);
    assert!(bbox.contains(&result.lon_lat));
}

#[test]
fn test_auto_detection() {
    let kit = CoordKit::default();
    let mgrs = kit.convert_text("31U DQ 48260 10878", InputFormat::Auto).unwrap();
    assert!(mgrs.bbox.is_some());

    let wkt = kit.convert_text("point(-0.1278 51.5077)", InputFormat::Auto).unwrap();
    assert_eq!(wkt.dms, LONDON_DMS);

    let freeform = kit.convert_text("51.5077, -0.1278", InputFormat::Auto).unwrap();
    assert_eq!(freeform.wkt, "POINT(-0.1278 51.5077)");

    for polar in &["ZAM 12 34", "BAM 1234 5678", "YZM"] {
        let result = kit.convert_text(polar, InputFormat::Auto).unwrap();
        let bbox = result.bbox.unwrap();
        assert!(bbox.contains(&result.lon_lat), "{}", polar);
    }
}

#[test]
fn test_errors_reach_the_caller() {
    let kit = CoordKit::default();
    assert!(matches!(
        kit.convert(&ConversionInput::Freeform("somewhere".to_string())),
        Err(CoordError::MalformedCoordinateString(_))
    ));
    assert!(matches!(
        kit.convert(&ConversionInput::Wkt("GEOMETRYCOLLECTION(POINT(1 2))".to_string())),
        Err(CoordError::UnsupportedGeometryType(_))
    ));
    assert!(matches!(
        kit.convert(&ConversionInput::LonLat(0.0, 90.0000001)),
        Err(CoordError::OutOfRange { .. })
    ));
    assert!(matches!(
        kit.convert(&ConversionInput::Mgrs("61UDQ4826010878".to_string())),
        Err(CoordError::InvalidZone(_))
    ));
}

#[test]
fn test_json_shape() {
    let kit = CoordKit::default();

    let point = kit.convert(&ConversionInput::LonLat(-0.1278, 51.5077)).unwrap();
    let value: serde_json::Value = serde_json::from_str(&point.to_json().unwrap()).unwrap();
    assert_eq!(value["lonLat"], serde_json::json!([-0.1278, 51.5077]));
    assert_eq!(value["wkt"], "POINT(-0.1278 51.5077)");
    assert_eq!(value["dms"], LONDON_DMS);
    assert_eq!(value["dmsWithoutSpace"], "513027.72N00740.08W");
    assert_eq!(value["mgrs"], "30UXC9931410197");
    assert!(value.get("bbox").is_none());

    let cell = kit.convert(&ConversionInput::Mgrs("31UDQ48261087".to_string())).unwrap();
    let value = serde_json::to_value(&cell).unwrap();
    assert_eq!(value["bbox"].as_array().map(|a| a.len()), Some(4));
}

#[test]
fn test_config_file_changes_output() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[mgrs]\nprecision = 3\n\n[dms]\nfraction_digits = 1").unwrap();

    let config = Config::from_file(file.path()).unwrap();
    assert_eq!(config.mgrs_precision, 3);

    let kit = CoordKit::new(config);
    let result = kit.convert(&ConversionInput::LonLat(-0.1278, 51.5077)).unwrap();
    assert_eq!(result.mgrs, "30UXC993101");
    assert_eq!(result.dms, "51° 30′ 27.7″ N 0° 07′ 40.1″ W");
}

#[test]
fn test_missing_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.toml");
    assert!(matches!(Config::from_file(&missing), Err(CoordError::Config(_))));
}

#[test]
fn test_convert_all_keeps_input_order() {
    let kit = CoordKit::default();
    let inputs = vec![
        "31UDQ4826010878",
        "not a coordinate",
        "POINT(-0.1278 51.5077)",
        "40°26'46\"N 79°58'56\"W",
    ];
    let results = kit.convert_all(&inputs, InputFormat::Auto, None);

    assert_eq!(results.len(), 4);
    assert_eq!(results[0].as_ref().unwrap().mgrs, "31UDQ4826010878");
    assert!(results[1].is_err());
    assert_eq!(results[2].as_ref().unwrap().mgrs, "30UXC9931410197");
    assert_eq!(results[3].as_ref().unwrap().mgrs, "17TNE8630977770");
}

#[test]
fn test_orchestrator_box_contains_representative_point() {
    let kit = CoordKit::default();
    let inputs = [
        ConversionInput::Mgrs("ZAH".to_string()),
        ConversionInput::Mgrs("BAN12345678".to_string()),
        ConversionInput::Mgrs("60NZF0000000000".to_string()),
        ConversionInput::Wkt("MULTIPOINT((10 40),(40 30),(20 20))".to_string()),
        ConversionInput::Wkt("LINESTRING(179 -10, -179 10)".to_string()),
    ];
    for input in &inputs {
        let result = kit.convert(input).unwrap();
        let bbox = result.bbox.unwrap();
        assert!(bbox.contains(&result.lon_lat), "{:?}: {:?} not in {:?}", input, result.lon_lat, bbox);
    }
}

#[test]
fn test_converter_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<CoordKit>();
    assert_send_sync::<coordkit::ConversionResult>();
}
