//! The geographic layout of map frames.

use serde::Serialize;
use serde_json::Value;

/// The `layout.geo` block of a map frame.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Geo {
    /// The map projection.
    pub projection: Projection,
    /// Whether Plotly draws its own basemap.
    pub visible: bool,
    /// The `{lat, lon}` point the map is centred on.
    pub center: Value,
    /// The visible latitudes.
    #[serde(rename = "lataxis")]
    pub lat_axis: GeoAxis,
    /// The visible longitudes.
    #[serde(rename = "lonaxis")]
    pub lon_axis: GeoAxis,
    /// The background color.
    #[serde(rename = "bgcolor")]
    pub bg_color: String,
}

/// A map projection.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Projection {
    /// The kind of projection.
    #[serde(rename = "type")]
    pub kind: ProjectionKind,
}

/// The projections the maps use.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectionKind {
    /// A transverse Mercator projection.
    #[serde(rename = "transverse mercator")]
    TransverseMercator,
}

/// A visible coordinate range of the map.
///
/// Settings may give the range directly as `[min, max]` or as a
/// `{"range": [min, max]}` object; both serialize as the latter.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct GeoAxis {
    /// The `[min, max]` range in degrees.
    pub range: Value,
}

impl GeoAxis {
    /// Reads an axis from a `lataxis` or `lonaxis` setting.
    pub fn from_setting(setting: &Value) -> GeoAxis {
        let range = match setting.get("range") {
            Some(range) => range.clone(),
            None => setting.clone(),
        };

        Self { range }
    }
}
