//! Dashboard settings and theme carried by the payload.

use serde_json::Value;
use serde_json::json;

const DEFAULT_TOTAL_COLUMN_NAME: &str = "CH";
const DEFAULT_BACKGROUND: &str = "#252e3f";

/// The map settings of the `settings.choropleth` block.
///
/// The values are passed to Plotly as they are, hence they stay JSON values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChoroplethSettings {
    /// The URL or inline GeoJSON of the region boundaries.
    pub geojson_file: Value,
    /// The GeoJSON feature property that identifies a region.
    pub feature: Value,
    /// The map center as `{"lat": .., "lon": ..}`.
    pub center: Value,
    /// The visible latitude range.
    pub lataxis: Value,
    /// The visible longitude range.
    pub lonaxis: Value,
}

/// The `settings` block of a payload.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// The map settings.
    pub choropleth: ChoroplethSettings,
    /// The column holding the country-wide aggregate.
    pub total_column_name: String,
}

impl Settings {
    /// Reads the settings, defaulting whatever is absent.
    pub fn from_value(value: Option<&Value>) -> Settings {
        let choropleth = value.and_then(|settings| settings.get("choropleth"));
        let field = |name: &str| {
            choropleth
                .and_then(|c| c.get(name))
                .cloned()
                .unwrap_or(Value::Null)
        };

        let total_column_name = value
            .and_then(|settings| settings.get("total_column_name"))
            .and_then(Value::as_str)
            .unwrap_or(DEFAULT_TOTAL_COLUMN_NAME)
            .to_string();

        Self {
            choropleth: ChoroplethSettings {
                geojson_file: field("geojson_file"),
                feature: field("feature"),
                center: field("center"),
                lataxis: field("lataxis"),
                lonaxis: field("lonaxis"),
            },
            total_column_name,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_value(None)
    }
}

/// The `theme` block of a payload.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// The page and plot background color.
    pub background: String,
}

impl Theme {
    /// Reads the theme, defaulting whatever is absent.
    pub fn from_value(value: Option<&Value>) -> Theme {
        let background = value
            .and_then(|theme| theme.get("background"))
            .and_then(Value::as_str)
            .unwrap_or(DEFAULT_BACKGROUND)
            .to_string();

        Self { background }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_value(None)
    }
}

/// The two-stop scale the dashboard shades its choropleth with.
pub fn default_color_scale() -> Value {
    json!([[0.0, "#2D384D"], [1.0, "#DB4453"]])
}
