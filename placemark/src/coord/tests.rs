//! Tests for coordinate validation

use super::*;

#[test]
fn test_prague_is_valid() {
    let result = Coordinate::new(50.0755, 14.4378);
    assert!(result.is_ok(), "Valid coordinates should not error");

    let coord = result.unwrap();
    assert_eq!(coord.lat(), 50.0755);
    assert_eq!(coord.lng(), 14.4378);
}

#[test]
fn test_negative_components() {
    // Buenos Aires: 34.6037°S, 58.3816°W
    let coord = Coordinate::new(-34.6037, -58.3816).unwrap();
    assert_eq!(coord.lat(), -34.6037);
    assert_eq!(coord.lng(), -58.3816);
}

#[test]
fn test_boundaries_are_inclusive() {
    assert!(Coordinate::new(90.0, 0.0).is_ok());
    assert!(Coordinate::new(-90.0, 0.0).is_ok());
    assert!(Coordinate::new(0.0, 180.0).is_ok());
    assert!(Coordinate::new(0.0, -180.0).is_ok());
    assert!(Coordinate::new(90.0, -180.0).is_ok());
}

#[test]
fn test_invalid_latitude_too_high() {
    let result = Coordinate::new(90.0001, 0.0);
    assert!(matches!(
        result.unwrap_err(),
        CoordError::InvalidLatitude(_)
    ));
}

#[test]
fn test_invalid_latitude_too_low() {
    let result = Coordinate::new(-90.0001, 0.0);
    assert!(matches!(
        result.unwrap_err(),
        CoordError::InvalidLatitude(_)
    ));
}

#[test]
fn test_invalid_longitude_too_high() {
    let result = Coordinate::new(0.0, 180.0001);
    assert!(matches!(
        result.unwrap_err(),
        CoordError::InvalidLongitude(_)
    ));
}

#[test]
fn test_invalid_longitude_too_low() {
    let result = Coordinate::new(0.0, -180.0001);
    assert!(matches!(
        result.unwrap_err(),
        CoordError::InvalidLongitude(_)
    ));
}

#[test]
fn test_latitude_checked_before_longitude() {
    let result = Coordinate::new(100.0, 200.0);
    assert_eq!(result.unwrap_err(), CoordError::InvalidLatitude(100.0));
}

#[test]
fn test_nan_is_rejected() {
    assert!(Coordinate::new(f64::NAN, 0.0).is_err());
    assert!(Coordinate::new(0.0, f64::NAN).is_err());
}

#[test]
fn test_display_is_lat_comma_lng() {
    let coord = Coordinate::new(40.7128, -74.006).unwrap();
    assert_eq!(coord.to_string(), "40.7128,-74.006");
}

#[test]
fn test_error_message_names_range() {
    let msg = CoordError::InvalidLongitude(181.0).to_string();
    assert_eq!(msg, "Invalid longitude: 181 (must be between -180 and 180)");
}

#[test]
fn test_into_tuple() {
    let coord = Coordinate::new(48.8566, 2.3522).unwrap();
    let (lat, lng): (f64, f64) = coord.into();
    assert_eq!((lat, lng), (48.8566, 2.3522));
}

#[test]
fn test_serialize_shape() {
    let coord = Coordinate::new(48.8566, 2.3522).unwrap();
    let json = serde_json::to_string(&coord).unwrap();
    assert_eq!(json, r#"{"lat":48.8566,"lng":2.3522}"#);
}

#[test]
fn test_deserialize_revalidates() {
    let ok: Result<Coordinate, _> = serde_json::from_str(r#"{"lat":-90,"lng":180}"#);
    assert!(ok.is_ok());

    let bad: Result<Coordinate, _> = serde_json::from_str(r#"{"lat":91,"lng":0}"#);
    let err = bad.unwrap_err().to_string();
    assert!(err.contains("Invalid latitude"), "got: {}", err);
}
