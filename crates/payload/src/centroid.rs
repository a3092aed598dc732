//! Label positions of the regions on the map.

use serde::Serialize;
use serde_json::Value;

use crate::value::as_number;

/// The point where a region's label is placed on the map.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RegionCentroid {
    /// The latitude in degrees.
    pub lat: f64,
    /// The longitude in degrees.
    pub lon: f64,
}

impl RegionCentroid {
    /// Reads a centroid from a `{"lat": .., "lon": ..}` object.
    pub fn from_value(value: &Value) -> Option<RegionCentroid> {
        let lat = value.get("lat").and_then(as_number)?;
        let lon = value.get("lon").and_then(as_number)?;

        Some(Self { lat, lon })
    }
}

// Some centres are nudged so labels of small cantons don't overlap.
const SWISS_CANTONAL_CENTRES: &[(&str, f64, f64)] = &[
    ("AG", 47.40966, 8.15688),
    ("AR", 47.366352 + 0.05, 9.36791),
    ("AI", 47.317264, 9.416754),
    ("BL", 47.45176, 7.702414),
    ("BS", 47.564869, 7.615259),
    ("BE", 46.823608, 7.636667),
    ("FR", 46.718391, 7.074008),
    ("GE", 46.220528, 6.132935),
    ("GL", 46.981042 - 0.05, 9.065751),
    ("GR", 46.656248, 9.628198),
    ("JU", 47.350744, 7.156107),
    ("LU", 47.067763, 8.1102),
    ("NE", 46.995534, 6.780126),
    ("NW", 46.926755, 8.405302),
    ("OW", 46.854527 - 0.05, 8.244317 - 0.1),
    ("SH", 47.71357, 8.59167),
    ("SZ", 47.061787, 8.756585),
    ("SO", 47.304135, 7.639388),
    ("SG", 47.2332 - 0.05, 9.274744),
    ("TI", 46.295617, 8.808924),
    ("TG", 47.568715, 9.091957),
    ("UR", 46.771849, 8.628586),
    ("VD", 46.570091, 6.657809 - 0.1),
    ("VS", 46.209567, 7.604659),
    ("ZG", 47.157296, 8.537294),
    ("ZH", 47.41275, 8.65508),
];

/// Returns the built-in label position of a Swiss canton.
pub fn swiss_cantonal_centre(canton: &str) -> Option<RegionCentroid> {
    SWISS_CANTONAL_CENTRES
        .iter()
        .find(|(name, _, _)| *name == canton)
        .map(|&(_, lat, lon)| RegionCentroid { lat, lon })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn from_value_reads_numbers_and_numeric_strings() {
        let centroid = RegionCentroid::from_value(&json!({"lat": "46.5", "lon": 7}));

        assert_eq!(centroid, Some(RegionCentroid { lat: 46.5, lon: 7.0 }));
    }

    #[test]
    fn from_value_requires_both_coordinates() {
        assert_eq!(RegionCentroid::from_value(&json!({"lat": 46.5})), None);
        assert_eq!(RegionCentroid::from_value(&Value::Null), None);
    }

    #[test]
    fn every_canton_has_a_centre() {
        assert_eq!(SWISS_CANTONAL_CENTRES.len(), 26);
        assert!(swiss_cantonal_centre("CH").is_none());
        assert!(swiss_cantonal_centre("TI").is_some());
    }
}
