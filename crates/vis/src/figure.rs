//! The chart description handed to Plotly.
//!
//! A [Figure] serializes to the `{data, layout}` object `Plotly.newPlot` and
//! `Plotly.react` accept. Only the attributes the dashboard uses are modelled;
//! unset optional attributes are left out of the JSON so that Plotly applies
//! its own defaults.

pub mod geo;

use serde::Serialize;
use serde_json::Value;

use crate::figure::geo::Geo;

/// A chart description: the traces to draw and the layout to draw them in.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct Figure {
    /// The traces, drawn in order.
    pub data: Vec<Trace>,
    /// The layout the traces are drawn in.
    pub layout: Layout,
}

impl Figure {
    /// Creates a figure of `data` drawn in `layout`.
    pub fn new(data: Vec<Trace>, layout: Layout) -> Figure {
        Self { data, layout }
    }
}

/// One trace of a figure. Unset attributes take Plotly's defaults.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct Trace {
    /// The trace type.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<TraceKind>,
    /// The x coordinates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<Vec<Value>>,
    /// The y coordinates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<Vec<Value>>,
    /// The latitudes of a geo trace.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lat: Option<Vec<f64>>,
    /// The longitudes of a geo trace.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lon: Option<Vec<f64>>,
    /// The feature ids a choropleth fills.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locations: Option<Vec<String>>,
    /// The fill values of a choropleth, one per location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z: Option<Vec<Value>>,
    /// The drawing mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<Mode>,
    /// The legend entry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// The text labels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<Text>,
    /// The marker style.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<Marker>,
    /// The line style.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<Line>,
    /// The hover label template.
    #[serde(rename = "hovertemplate", skip_serializing_if = "Option::is_none")]
    pub hover_template: Option<Value>,
    /// Which hover label to show.
    #[serde(rename = "hoverinfo", skip_serializing_if = "Option::is_none")]
    pub hover_info: Option<HoverInfo>,
    /// Whether the trace has a legend entry.
    #[serde(rename = "showlegend", skip_serializing_if = "Option::is_none")]
    pub show_legend: Option<bool>,
    /// Where text labels sit relative to their point.
    #[serde(rename = "textposition", skip_serializing_if = "Option::is_none")]
    pub text_position: Option<TextPosition>,
    /// The font of the text labels.
    #[serde(rename = "textfont", skip_serializing_if = "Option::is_none")]
    pub text_font: Option<Font>,
    /// The URL or object of the choropleth shapes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geojson: Option<Value>,
    /// The feature property matched against `locations`.
    #[serde(rename = "featureidkey", skip_serializing_if = "Option::is_none")]
    pub feature_id_key: Option<Value>,
    /// The color scale of the fill values.
    #[serde(rename = "colorscale", skip_serializing_if = "Option::is_none")]
    pub color_scale: Option<Value>,
    /// Whether the color bar is drawn.
    #[serde(rename = "showscale", skip_serializing_if = "Option::is_none")]
    pub show_scale: Option<bool>,
}

/// The trace types the dashboard draws.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TraceKind {
    /// Lines and points on cartesian axes.
    Scatter,
    /// Points and texts on a map.
    Scattergeo,
    /// Filled map regions.
    Choropleth,
}

/// How a scatter trace draws its points.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Connected lines.
    #[serde(rename = "lines")]
    Lines,
    /// Markers with text labels.
    #[serde(rename = "markers+text")]
    MarkersText,
    /// Text labels only.
    #[serde(rename = "text")]
    Text,
}

/// Trace text: one label for the whole trace or one label per point.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum Text {
    /// One label for the whole trace.
    Single(String),
    /// One label per point.
    PerPoint(Vec<Value>),
}

/// Which hover label a trace shows.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HoverInfo {
    /// No label, and no hover events.
    Skip,
    /// No label, but hover events are still emitted.
    None,
}

/// Where text labels sit relative to their point.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextPosition {
    /// To the right of the point.
    #[serde(rename = "center right")]
    CenterRight,
}

/// The marker style of a trace.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct Marker {
    /// The fill color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// The outline style.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<Line>,
}

/// A line style.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct Line {
    /// The width in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    /// The color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// A font.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct Font {
    /// The font family.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
    /// The text color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// The size in points.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
}

/// The layout of a figure. Unset attributes take Plotly's defaults.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct Layout {
    /// The chart title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Value>,
    /// The height in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    /// The x axis.
    #[serde(rename = "xaxis", skip_serializing_if = "Option::is_none")]
    pub x_axis: Option<Axis>,
    /// The y axis.
    #[serde(rename = "yaxis", skip_serializing_if = "Option::is_none")]
    pub y_axis: Option<Axis>,
    /// The legend box.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<Legend>,
    /// The map of geo traces.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geo: Option<Geo>,
    /// Whether a legend is drawn.
    #[serde(rename = "showlegend", skip_serializing_if = "Option::is_none")]
    pub show_legend: Option<bool>,
    /// The drag interaction; `false` disables panning and zooming.
    #[serde(rename = "dragmode", skip_serializing_if = "Option::is_none")]
    pub drag_mode: Option<bool>,
    /// How hover points are picked.
    #[serde(rename = "hovermode", skip_serializing_if = "Option::is_none")]
    pub hover_mode: Option<HoverMode>,
    /// The margins around the plot area.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<Margin>,
    /// The background color of the plot area.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plot_bgcolor: Option<String>,
    /// The background color of the whole chart.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paper_bgcolor: Option<String>,
    /// The default font.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<Font>,
}

/// A cartesian axis.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Axis {
    /// The axis type.
    #[serde(rename = "type")]
    pub kind: AxisKind,
    /// Whether grid lines are drawn.
    #[serde(rename = "showgrid")]
    pub show_grid: bool,
    /// The color of the ticks and labels.
    pub color: String,
    /// The axis title.
    pub title: Value,
    /// The visible range; powers of ten on log axes.
    pub range: [f64; 2],
    /// How the range is extended.
    #[serde(rename = "rangemode", skip_serializing_if = "Option::is_none")]
    pub range_mode: Option<RangeMode>,
}

/// The axis types the dashboard uses.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AxisKind {
    /// A logarithmic axis.
    Log,
}

/// How an axis range is extended.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RangeMode {
    /// The range always includes zero.
    Tozero,
}

/// How hover points are picked.
#[derive(Serialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HoverMode {
    /// The point closest to the cursor.
    #[default]
    Closest,
}

/// The legend box.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Legend {
    /// The horizontal anchor, as a fraction of the plot width.
    pub x: f64,
    /// The vertical anchor, as a fraction of the plot height.
    pub y: f64,
    /// The order of the entries.
    #[serde(rename = "traceorder")]
    pub trace_order: String,
    /// The font of the entries.
    pub font: Font,
    /// The background color.
    #[serde(rename = "bgcolor")]
    pub bg_color: String,
    /// The border color.
    #[serde(rename = "bordercolor")]
    pub border_color: String,
    /// The border width in pixels.
    #[serde(rename = "borderwidth")]
    pub border_width: u32,
}

/// Margins around the plot area.
#[derive(Serialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Margin {
    /// The left margin in pixels.
    pub l: u32,
    /// The right margin in pixels.
    pub r: u32,
    /// The top margin in pixels.
    pub t: u32,
    /// The bottom margin in pixels.
    pub b: u32,
}

impl Margin {
    /// Returns margins of zero pixels.
    pub fn zero() -> Margin {
        Margin::default()
    }
}
