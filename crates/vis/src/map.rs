//! The map frame: a choropleth of the regions with a value label on each.

use serde_json::Value;
use tracing::debug;
use tracing::warn;

use dashcoch_payload::Payload;
use dashcoch_payload::keys;
use dashcoch_payload::table::TimeSeriesTable;
use dashcoch_payload::value::as_number;
use dashcoch_payload::value::round_half_up;

use crate::figure::Figure;
use crate::figure::Font;
use crate::figure::HoverInfo;
use crate::figure::Layout;
use crate::figure::Line;
use crate::figure::Margin;
use crate::figure::Marker;
use crate::figure::Mode;
use crate::figure::Text;
use crate::figure::Trace;
use crate::figure::TraceKind;
use crate::figure::geo::Geo;
use crate::figure::geo::GeoAxis;
use crate::figure::geo::Projection;
use crate::figure::geo::ProjectionKind;
use crate::selection::Selection;
use crate::text::TextTarget;

const LABEL_COLOR: &str = "#ffffff";
const LABEL_SIZE: u32 = 10;

/// The tables a map frame can show.
const MAP_TABLES: [&str; 8] = [
    keys::SWISS_CASES_BY_DATE_FILLED,
    keys::SWISS_CASES_BY_DATE_FILLED_PER_CAPITA,
    keys::SWISS_CASES_BY_DATE_DIFF,
    keys::SWISS_FATALITIES_BY_DATE_FILLED,
    keys::SWISS_FATALITIES_BY_DATE_DIFF,
    keys::SWISS_HOSPITALIZATIONS_BY_DATE_FILLED,
    keys::SWISS_HOSPITALIZATIONS_BY_DATE_DIFF,
    keys::MOVING_TOTAL,
];

/// The metric shown on the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapMode {
    /// Cumulative cases per 10 000 inhabitants.
    Prevalence,
    /// Cumulative fatalities.
    Fatalities,
    /// New cases on the selected date.
    New,
    /// New fatalities on the selected date.
    NewFatalities,
    /// New hospitalizations on the selected date.
    NewHospitalizations,
    /// Current hospitalizations.
    Hospitalizations,
    /// Cumulative cases. Any unknown mode shows these.
    Cases,
}

impl MapMode {
    /// Reads the mode of a selection.
    pub fn from_mode(mode: &str) -> MapMode {
        match mode {
            "prevalence" => MapMode::Prevalence,
            "fatalities" => MapMode::Fatalities,
            "new" => MapMode::New,
            "new_fatalities" => MapMode::NewFatalities,
            "new_hospitalizations" => MapMode::NewHospitalizations,
            "hospitalizations" => MapMode::Hospitalizations,
            _ => MapMode::Cases,
        }
    }

    /// The payload table the mode reads.
    pub fn table(self) -> &'static str {
        match self {
            MapMode::Prevalence => keys::SWISS_CASES_BY_DATE_FILLED_PER_CAPITA,
            MapMode::Fatalities => keys::SWISS_FATALITIES_BY_DATE_FILLED,
            MapMode::New => keys::SWISS_CASES_BY_DATE_DIFF,
            MapMode::NewFatalities => keys::SWISS_FATALITIES_BY_DATE_DIFF,
            MapMode::NewHospitalizations => keys::SWISS_HOSPITALIZATIONS_BY_DATE_DIFF,
            MapMode::Hospitalizations => keys::SWISS_HOSPITALIZATIONS_BY_DATE_FILLED,
            MapMode::Cases => keys::SWISS_CASES_BY_DATE_FILLED,
        }
    }

    fn label_rule(self) -> LabelRule {
        match self {
            MapMode::Prevalence => LabelRule::TwoDecimals,
            MapMode::New => LabelRule::WholeIfUpdated,
            MapMode::NewFatalities | MapMode::NewHospitalizations => LabelRule::WholeOrEmpty,
            MapMode::Fatalities | MapMode::Hospitalizations | MapMode::Cases => LabelRule::Whole,
        }
    }
}

/// How a region's value becomes its map label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LabelRule {
    /// Two decimals; no label without a value.
    TwoDecimals,
    /// Nearest integer; a missing value reads as zero.
    Whole,
    /// Nearest integer; no label without a value.
    WholeOrEmpty,
    /// Nearest integer, but only for regions updated on the date.
    WholeIfUpdated,
}

impl LabelRule {
    fn label<F>(self, value: &Value, updated: F) -> String
    where
        F: FnOnce() -> bool,
    {
        let number = as_number(value);

        match (self, number) {
            (LabelRule::TwoDecimals, Some(n)) => format!("{n:.2}"),
            (LabelRule::Whole, n) => whole(n.unwrap_or(0.0)),
            (LabelRule::WholeOrEmpty, Some(n)) => whole(n),
            (LabelRule::WholeIfUpdated, Some(n)) if updated() => whole(n),
            _ => String::new(),
        }
    }
}

fn whole(n: f64) -> String {
    format!("{}", round_half_up(n) as i64)
}

/// The flattened tables of a map payload.
struct MapTables {
    tables: Vec<(&'static str, TimeSeriesTable)>,
}

impl MapTables {
    fn new(payload: &Payload) -> MapTables {
        let tables = MAP_TABLES
            .iter()
            .map(|&name| (name, payload.table(name)))
            .collect();

        Self { tables }
    }

    fn take(self, name: &str) -> TimeSeriesTable {
        self.tables
            .into_iter()
            .find(|(table, _)| *table == name)
            .map(|(_, table)| table)
            .unwrap_or_default()
    }
}

/// Builds the map frame of the selected mode at the selected date.
///
/// The date index addresses the table rows directly. Every region of
/// `region_labels` with a known centroid gets a label; every region except the
/// country-wide aggregate gets a fill value. Unknown modes show cumulative cases.
pub fn map_frame(selection: &Selection, payload: &Payload, _text: &mut dyn TextTarget) -> Figure {
    let mode = MapMode::from_mode(selection.mode.as_deref().unwrap_or_default());
    let rule = mode.label_rule();
    let date_index = selection.date_index;
    let table = MapTables::new(payload).take(mode.table());
    let settings = payload.settings();
    let theme = payload.theme();
    let regions = payload.region_labels();
    debug!(?mode, table = mode.table(), date_index, "building map frame");

    let mut lat = Vec::with_capacity(regions.len());
    let mut lon = Vec::with_capacity(regions.len());
    let mut labels = Vec::with_capacity(regions.len());

    for region in &regions {
        let Some(centroid) = payload.centroid(region) else {
            warn!(region = %region, "region has no centroid, leaving it unlabelled");
            continue;
        };

        let value = table.value(region, date_index);
        let label = rule.label(&value, || payload.region_updated(region, date_index));

        lat.push(centroid.lat);
        lon.push(centroid.lon);
        labels.push(Value::String(label));
    }

    let (locations, z): (Vec<String>, Vec<Value>) = regions
        .iter()
        .filter(|region| **region != settings.total_column_name)
        .map(|region| (region.clone(), table.value(region, date_index)))
        .unzip();

    let choropleth = Trace {
        kind: Some(TraceKind::Choropleth),
        locations: Some(locations),
        z: Some(z),
        geojson: Some(settings.choropleth.geojson_file.clone()),
        feature_id_key: Some(settings.choropleth.feature.clone()),
        color_scale: Some(payload.color_scale()),
        show_scale: Some(false),
        marker: Some(Marker {
            line: Some(Line {
                width: Some(1.0),
                color: Some(theme.background.clone()),
            }),
            ..Marker::default()
        }),
        hover_info: Some(HoverInfo::None),
        ..Trace::default()
    };

    let labels = Trace {
        kind: Some(TraceKind::Scattergeo),
        lat: Some(lat),
        lon: Some(lon),
        text: Some(Text::PerPoint(labels)),
        mode: Some(Mode::Text),
        text_font: Some(Font {
            color: Some(String::from(LABEL_COLOR)),
            size: Some(LABEL_SIZE),
            ..Font::default()
        }),
        hover_info: Some(HoverInfo::Skip),
        show_legend: Some(false),
        ..Trace::default()
    };

    let layout = Layout {
        geo: Some(Geo {
            projection: Projection {
                kind: ProjectionKind::TransverseMercator,
            },
            visible: false,
            center: settings.choropleth.center.clone(),
            lat_axis: GeoAxis::from_setting(&settings.choropleth.lataxis),
            lon_axis: GeoAxis::from_setting(&settings.choropleth.lonaxis),
            bg_color: theme.background.clone(),
        }),
        show_legend: Some(false),
        drag_mode: Some(false),
        margin: Some(Margin::zero()),
        plot_bgcolor: Some(theme.background.clone()),
        paper_bgcolor: Some(theme.background),
        ..Layout::default()
    };

    Figure::new(vec![choropleth, labels], layout)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::TextBuffer;
    use serde_json::json;

    fn payload() -> Payload {
        Payload::from_value(json!({
            "swiss_cases_by_date_filled": {
                "ZH": {"0": 10, "1": 12}, "BE": {"0": 4, "1": null}, "CH": {"0": 14, "1": 16}
            },
            "swiss_cases_by_date_filled_per_capita": {
                "ZH": {"0": 0.123, "1": 0.456}, "BE": {"0": 0.1, "1": null}, "CH": {"0": 0.2, "1": 0.3}
            },
            "swiss_cases_by_date_diff": {
                "ZH": {"0": null, "1": 2.5}, "BE": {"0": 4, "1": 7}, "CH": {"0": 4, "1": 9.5}
            },
            "swiss_fatalities_by_date_diff": {
                "ZH": {"0": null, "1": 1}, "BE": {"0": null, "1": null}
            },
            "region_updates": {"ZH": true, "BE": false, "CH": true},
            "region_labels": ["ZH", "BE", "CH"],
            "regional_centres": {
                "ZH": {"lat": 47.4, "lon": 8.6},
                "BE": {"lat": 46.8, "lon": 7.6},
                "CH": {"lat": 46.8, "lon": 8.2}
            },
            "settings": {
                "choropleth": {
                    "geojson_file": "assets/switzerland.geojson",
                    "feature": "id",
                    "center": {"lat": 46.8, "lon": 8.2},
                    "lataxis": [45.7, 47.9],
                    "lonaxis": [5.9, 10.5]
                },
                "total_column_name": "CH"
            },
            "theme": {"background": "#252e3f"}
        }))
        .unwrap()
    }

    fn frame(mode: &str, date_index: usize) -> Figure {
        let mut text = TextBuffer::new();
        map_frame(&Selection::map(mode, date_index), &payload(), &mut text)
    }

    fn labels(figure: &Figure) -> Vec<Value> {
        match &figure.data[1].text {
            Some(Text::PerPoint(labels)) => labels.clone(),
            other => panic!("unexpected label text: {other:?}"),
        }
    }

    #[test]
    fn new_mode_labels_only_updated_regions_with_values() {
        let figure = frame("new", 1);

        assert_eq!(labels(&figure), vec![json!("3"), json!(""), json!("10")]);
        assert_eq!(figure.data[0].z, Some(vec![json!(2.5), json!(7)]));
    }

    #[test]
    fn new_mode_leaves_null_values_unlabelled() {
        let figure = frame("new", 0);

        assert_eq!(labels(&figure)[0], json!(""));
    }

    #[test]
    fn aggregate_region_is_excluded_from_the_fill() {
        let figure = frame("cases", 0);
        let choropleth = &figure.data[0];

        assert_eq!(choropleth.kind, Some(TraceKind::Choropleth));
        assert_eq!(
            choropleth.locations,
            Some(vec![String::from("ZH"), String::from("BE")])
        );
        assert_eq!(choropleth.z, Some(vec![json!(10), json!(4)]));
        assert_eq!(figure.data[1].lat, Some(vec![47.4, 46.8, 46.8]));
    }

    #[test]
    fn prevalence_labels_use_two_decimals() {
        let figure = frame("prevalence", 1);

        assert_eq!(labels(&figure), vec![json!("0.46"), json!(""), json!("0.30")]);
    }

    #[test]
    fn cumulative_labels_read_missing_values_as_zero() {
        let figure = frame("cases", 1);

        assert_eq!(labels(&figure), vec![json!("12"), json!("0"), json!("16")]);
    }

    #[test]
    fn daily_difference_labels_skip_missing_values() {
        let figure = frame("new_fatalities", 1);

        assert_eq!(labels(&figure), vec![json!("1"), json!(""), json!("")]);
    }

    #[test]
    fn unknown_modes_show_cumulative_cases() {
        assert_eq!(MapMode::from_mode("icu"), MapMode::Cases);
        assert_eq!(frame("icu", 0), frame("", 0));
        assert_eq!(labels(&frame("icu", 0))[0], json!("10"));
    }

    #[test]
    fn layout_hides_the_basemap() {
        let figure = frame("fatalities", 0);
        let geo = figure.layout.geo.unwrap();

        assert_eq!(geo.projection.kind, ProjectionKind::TransverseMercator);
        assert!(!geo.visible);
        assert_eq!(geo.center, json!({"lat": 46.8, "lon": 8.2}));
        assert_eq!(geo.bg_color, "#252e3f");
        assert_eq!(figure.layout.margin, Some(Margin::zero()));
    }

    #[test]
    fn choropleth_uses_payload_geometry_and_scale() {
        let figure = frame("hospitalizations", 0);
        let choropleth = &figure.data[0];

        assert_eq!(choropleth.geojson, Some(json!("assets/switzerland.geojson")));
        assert_eq!(choropleth.feature_id_key, Some(json!("id")));
        assert_eq!(
            choropleth.color_scale,
            Some(json!([[0.0, "#2D384D"], [1.0, "#DB4453"]]))
        );
        // No hospitalization table in the payload.
        assert_eq!(choropleth.z, Some(vec![Value::Null, Value::Null]));
        assert_eq!(labels(&figure), vec![json!("0"), json!("0"), json!("0")]);
    }

    #[test]
    fn label_rule_rounds_halves_up() {
        assert_eq!(LabelRule::Whole.label(&json!(-2.5), || true), "-2");
        assert_eq!(LabelRule::Whole.label(&json!("7.5"), || true), "8");
        assert_eq!(LabelRule::WholeIfUpdated.label(&json!(3), || false), "");
    }
}
