//! Address entities returned by the Geocoding API.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{AddressType, LocationType};

/// A latitude/longitude pair.
///
/// Both values are kept as exact decimal numbers, so a coordinate decoded
/// from a response re-encodes to the same decimal literal instead of
/// drifting through a binary floating-point representation. Convert to
/// `f64` at the consumption boundary via `rust_decimal::prelude::ToPrimitive`.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Coordinate {
    #[serde(rename = "lat", with = "rust_decimal::serde::arbitrary_precision")]
    pub latitude: Decimal,
    #[serde(rename = "lng", with = "rust_decimal::serde::arbitrary_precision")]
    pub longitude: Decimal,
}

/// A bounding box enclosing a result, as two diagonally opposite corners.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ViewPort {
    pub northeast: Coordinate,
    pub southwest: Coordinate,
}

/// Represents the `geometry` field of a result.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Geometry {
    /// The geocoded coordinate.
    pub location: Coordinate,
    /// How precisely `location` was determined.
    pub location_type: LocationType,
    /// The recommended viewport for displaying the result.
    #[serde(rename = "viewport")]
    pub view_port: ViewPort,
}

/// A single component of an address, e.g. a street number or a country.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Component {
    /// Abbreviated textual name, e.g. `CA`.
    pub short_name: String,
    /// Full textual name, e.g. `California`.
    pub long_name: String,
    /// The types of this component, in the order the API reported them.
    pub types: Vec<AddressType>,
}

/// A single geocoding result.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Address {
    /// The components making up this address.
    #[serde(rename = "address_components")]
    pub components: Vec<Component>,
    pub geometry: Geometry,
    /// Human-readable address string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatted_address: Option<String>,
    /// Unique identifier usable with other Google APIs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub place_id: Option<String>,
    /// The types of the returned result.
    pub types: Vec<AddressType>,
}

impl Coordinate {
    pub fn new(latitude: Decimal, longitude: Decimal) -> Self {
        Coordinate {
            latitude,
            longitude,
        }
    }
}

impl ViewPort {
    pub fn new(northeast: Coordinate, southwest: Coordinate) -> Self {
        ViewPort {
            northeast,
            southwest,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coordinate(lat: &str, lng: &str) -> Coordinate {
        Coordinate::new(lat.parse().unwrap(), lng.parse().unwrap())
    }

    #[test]
    fn coordinate_wire_names() {
        let c: Coordinate =
            serde_json::from_str("{\"lat\": 37.4224764, \"lng\": -122.0842499}").unwrap();
        assert_eq!(c, coordinate("37.4224764", "-122.0842499"));
    }

    #[test]
    fn coordinate_reencodes_exactly() {
        let json = "{\"lat\":37.4238253802915,\"lng\":-122.0829009197085}";
        let c: Coordinate = serde_json::from_str(json).unwrap();
        assert_eq!(serde_json::to_string(&c).unwrap(), json);
    }

    #[test]
    fn geometry_rejects_unknown_location_type() {
        let json = "{
            \"location\": {\"lat\": 1.0, \"lng\": 2.0},
            \"location_type\": \"SOMEWHERE\",
            \"viewport\": {
                \"northeast\": {\"lat\": 1.0, \"lng\": 2.0},
                \"southwest\": {\"lat\": 1.0, \"lng\": 2.0}
            }
        }";
        assert!(serde_json::from_str::<Geometry>(json).is_err());
    }

    #[test]
    fn component_requires_both_names() {
        let json = "{\"short_name\": \"CA\", \"types\": [\"political\"]}";
        assert!(serde_json::from_str::<Component>(json).is_err());
    }
}
