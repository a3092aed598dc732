//! Log-log trend charts of weekly new cases against total cases.
//!
//! Both trend callbacks draw the same chart: one line per selected region,
//! running from the seventh date up to the date slider, plus a labelled point
//! at the tip of each line. They only differ in texts and colors, which are
//! bundled in a [TrendStyle].

use serde_json::Value;
use tracing::debug;
use tracing::warn;

use dashcoch_payload::Payload;
use dashcoch_payload::keys;
use dashcoch_payload::table::TimeSeriesTable;

use crate::axes::log_range;
use crate::axes::max_over;
use crate::figure::Axis;
use crate::figure::AxisKind;
use crate::figure::Figure;
use crate::figure::Font;
use crate::figure::HoverInfo;
use crate::figure::HoverMode;
use crate::figure::Layout;
use crate::figure::Legend;
use crate::figure::Line;
use crate::figure::Margin;
use crate::figure::Marker;
use crate::figure::Mode;
use crate::figure::RangeMode;
use crate::figure::Text;
use crate::figure::TextPosition;
use crate::figure::Trace;
use crate::figure::TraceKind;
use crate::hover::hovered_region;
use crate::selection::Selection;
use crate::text::TextTarget;

/// The text element showing the date of the regional chart.
pub const REGIONAL_DATE_CONTAINER: &str = "date-container-regional";
/// The text element showing the date of the cantonal chart.
pub const CANTONAL_DATE_CONTAINER: &str = "date-container-cantonal";

/// The first six dates are never plotted.
const FIRST_PLOTTED_INDEX: usize = 6;
const HEIGHT: u32 = 750;
const HIGHLIGHT_WIDTH: f64 = 2.0;
const LINE_WIDTH: f64 = 1.0;
const DIMMED_LINE_COLOR: &str = "rgba(255, 255, 255, 0.5)";
const TIP_COLOR: &str = "white";
const AXIS_COLOR: &str = "#ffffff";
const LEGEND_BORDER_COLOR: &str = "#7fafdf";

/// Texts and colors of a trend chart.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendStyle {
    /// The text element the date label is written to.
    pub date_container: &'static str,
    /// The chart title.
    pub title: Value,
    /// The title of the total-cases axis.
    pub x_title: Value,
    /// The title of the weekly-new-cases axis.
    pub y_title: Value,
    /// The Plotly hover template of the lines.
    pub hover_template: Value,
    /// The color of the hovered line and of the chart texts.
    pub accent: String,
    /// The color of the plot and legend backgrounds.
    pub background: String,
}

impl TrendStyle {
    /// The style of the regional chart, with texts from the payload's `i18n` bundle.
    pub fn regional(payload: &Payload) -> TrendStyle {
        Self {
            date_container: REGIONAL_DATE_CONTAINER,
            title: payload.i18n("plot_loglog_region_title"),
            x_title: payload.i18n("plot_loglog_region_x"),
            y_title: payload.i18n("plot_loglog_region_y"),
            hover_template: payload.i18n("plot_log_log_region_weekly_hovertemplate"),
            accent: String::from("#22E7FF"),
            background: String::from("#1F2123"),
        }
    }

    /// The style of the cantonal chart.
    pub fn cantonal() -> TrendStyle {
        Self {
            date_container: CANTONAL_DATE_CONTAINER,
            title: Value::from("Weekly new cases vs. total cases"),
            x_title: Value::from("Total cases"),
            y_title: Value::from("New cases in the past week"),
            hover_template: Value::from(
                "<br>Total cases: %{x}<br>New cases in the past week: %{y}<br>%{text}<extra></extra>",
            ),
            accent: String::from("#2cfec1"),
            background: String::from("#252e3f"),
        }
    }
}

/// Builds the regional trend chart.
pub fn regional_trend(
    selection: &Selection,
    payload: &Payload,
    text: &mut dyn TextTarget,
) -> Figure {
    trend_figure(selection, payload, &TrendStyle::regional(payload), text)
}

/// Builds the cantonal trend chart.
pub fn cantonal_trend(
    selection: &Selection,
    payload: &Payload,
    text: &mut dyn TextTarget,
) -> Figure {
    trend_figure(selection, payload, &TrendStyle::cantonal(), text)
}

/// Builds a trend chart for the selected regions up to the selected date.
///
/// The date index is a cut point: the lines end right before it and the tip
/// points sit at `date_index - 1`. The label of that date is written to the
/// style's date container. Regions missing from the payload get empty lines
/// and null tips.
pub fn trend_figure(
    selection: &Selection,
    payload: &Payload,
    style: &TrendStyle,
    text: &mut dyn TextTarget,
) -> Figure {
    let cases = payload.table(keys::SWISS_CASES_BY_DATE_FILLED);
    let moving_total = payload.table(keys::MOVING_TOTAL);
    let date_labels = moving_total.series(keys::DATE_LABEL);
    let regions = &selection.regions;
    let date_index = selection.date_index;

    for region in regions {
        if cases.get(region).is_none() || moving_total.get(region).is_none() {
            warn!(region = %region, "selected region is missing from the payload");
        }
    }

    let x_max = max_over(regions.iter().map(|region| cases.series(region)));
    let y_max = max_over(regions.iter().map(|region| moving_total.series(region)));
    debug!(x_max, y_max, date_index, "trend chart maxima");

    let hovered = hovered_region(regions, selection.hover.as_ref());
    let mut traces = Vec::with_capacity(regions.len() * 2);

    traces.extend(regions.iter().map(|region| {
        let highlighted = hovered == Some(region.as_str());
        line_trace(region, &cases, &moving_total, date_labels, date_index, highlighted, style)
    }));
    traces.extend(
        regions
            .iter()
            .map(|region| tip_trace(region, &cases, &moving_total, date_index)),
    );

    match date_index.checked_sub(1).and_then(|i| date_labels.get(i)) {
        Some(Value::Null) | None => debug!(date_index, "no date label for the selected date"),
        Some(Value::String(label)) => text.set_text(style.date_container, label),
        Some(label) => text.set_text(style.date_container, &label.to_string()),
    }

    Figure::new(traces, layout(style, x_max, y_max))
}

fn line_trace(
    region: &str,
    cases: &TimeSeriesTable,
    moving_total: &TimeSeriesTable,
    date_labels: &[Value],
    date_index: usize,
    highlighted: bool,
    style: &TrendStyle,
) -> Trace {
    let line = if highlighted {
        Line {
            width: Some(HIGHLIGHT_WIDTH),
            color: Some(style.accent.clone()),
        }
    } else {
        Line {
            width: Some(LINE_WIDTH),
            color: Some(String::from(DIMMED_LINE_COLOR)),
        }
    };

    Trace {
        kind: Some(TraceKind::Scatter),
        x: Some(slice(cases.series(region), FIRST_PLOTTED_INDEX, date_index)),
        y: Some(slice(moving_total.series(region), FIRST_PLOTTED_INDEX, date_index)),
        mode: Some(Mode::Lines),
        name: Some(region.to_string()),
        marker: Some(Marker {
            color: Some(style.accent.clone()),
            ..Marker::default()
        }),
        line: Some(line),
        text: Some(Text::PerPoint(slice(date_labels, FIRST_PLOTTED_INDEX, date_index))),
        hover_template: Some(style.hover_template.clone()),
        show_legend: Some(false),
        ..Trace::default()
    }
}

fn tip_trace(
    region: &str,
    cases: &TimeSeriesTable,
    moving_total: &TimeSeriesTable,
    date_index: usize,
) -> Trace {
    let tip = |table: &TimeSeriesTable| match date_index.checked_sub(1) {
        Some(index) => table.value(region, index),
        None => Value::Null,
    };

    Trace {
        kind: Some(TraceKind::Scatter),
        x: Some(vec![tip(cases)]),
        y: Some(vec![tip(moving_total)]),
        mode: Some(Mode::MarkersText),
        name: Some(region.to_string()),
        text: Some(Text::Single(region.to_string())),
        marker: Some(Marker {
            color: Some(String::from(TIP_COLOR)),
            ..Marker::default()
        }),
        hover_info: Some(HoverInfo::Skip),
        show_legend: Some(false),
        text_position: Some(TextPosition::CenterRight),
        ..Trace::default()
    }
}

fn layout(style: &TrendStyle, x_max: f64, y_max: f64) -> Layout {
    Layout {
        title: Some(style.title.clone()),
        height: Some(HEIGHT),
        x_axis: Some(Axis {
            kind: AxisKind::Log,
            show_grid: true,
            color: String::from(AXIS_COLOR),
            title: style.x_title.clone(),
            range: log_range(x_max),
            range_mode: None,
        }),
        y_axis: Some(Axis {
            kind: AxisKind::Log,
            show_grid: true,
            color: String::from(AXIS_COLOR),
            title: style.y_title.clone(),
            range: log_range(y_max),
            range_mode: Some(RangeMode::Tozero),
        }),
        legend: Some(Legend {
            x: 0.015,
            y: 1.0,
            trace_order: String::from("normal"),
            font: Font {
                family: Some(String::from("sans-serif")),
                color: Some(String::from(TIP_COLOR)),
                size: None,
            },
            bg_color: style.background.clone(),
            border_color: String::from(LEGEND_BORDER_COLOR),
            border_width: 1,
        }),
        drag_mode: Some(false),
        hover_mode: Some(HoverMode::Closest),
        margin: Some(Margin {
            l: 60,
            r: 20,
            t: 60,
            b: 70,
        }),
        plot_bgcolor: Some(style.background.clone()),
        paper_bgcolor: Some(style.background.clone()),
        font: Some(Font {
            color: Some(style.accent.clone()),
            ..Font::default()
        }),
        ..Layout::default()
    }
}

/// Copies `series[start..end]`, clamping `end` to the series length. Empty when `start >= end`.
fn slice(series: &[Value], start: usize, end: usize) -> Vec<Value> {
    let end = end.min(series.len());

    if start >= end {
        return Vec::new();
    }

    series[start..end].to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hover::HoverData;
    use crate::text::TextBuffer;
    use serde_json::json;

    fn column(values: impl IntoIterator<Item = Value>) -> Value {
        let rows: serde_json::Map<String, Value> = values
            .into_iter()
            .enumerate()
            .map(|(day, value)| (format!("2020-03-{:02}", day + 1), value))
            .collect();
        Value::Object(rows)
    }

    fn payload() -> Payload {
        let zh_cases = (1..=10).map(|n| json!(n * 100));
        let be_cases = (1..=10).map(|n| json!(n * 10));
        let zh_total = (1..=10).map(|n| json!(n * 20));
        let be_total = (1..=10).map(|n| if n == 9 { Value::Null } else { json!(n) });
        let labels = (1..=10).map(|n| json!(format!("{n:02}. 03.")));

        Payload::from_value(json!({
            "swiss_cases_by_date_filled": {"ZH": column(zh_cases), "BE": column(be_cases)},
            "moving_total": {
                "ZH": column(zh_total),
                "BE": column(be_total),
                "date_label": column(labels)
            },
            "i18n": {
                "plot_loglog_region_title": "Entwicklung",
                "plot_loglog_region_x": "Fälle",
                "plot_loglog_region_y": "Neue Fälle",
                "plot_log_log_region_weekly_hovertemplate": "%{y}"
            }
        }))
        .unwrap()
    }

    fn lines(figure: &Figure) -> Vec<&Trace> {
        figure
            .data
            .iter()
            .filter(|trace| trace.mode == Some(Mode::Lines))
            .collect()
    }

    #[test]
    fn emits_one_line_and_one_tip_per_region() {
        let selection = Selection::regions(["ZH", "BE"], 8);
        let mut text = TextBuffer::new();

        let figure = regional_trend(&selection, &payload(), &mut text);

        assert_eq!(figure.data.len(), 4);
        assert_eq!(lines(&figure).len(), 2);
        assert_eq!(
            figure
                .data
                .iter()
                .filter(|trace| trace.mode == Some(Mode::MarkersText))
                .count(),
            2
        );
    }

    #[test]
    fn lines_start_at_the_seventh_date_and_end_before_the_cut() {
        let selection = Selection::regions(["ZH", "BE"], 8);
        let mut text = TextBuffer::new();

        let figure = regional_trend(&selection, &payload(), &mut text);
        let zh = &figure.data[0];

        assert_eq!(zh.x, Some(vec![json!(700), json!(800)]));
        assert_eq!(zh.y, Some(vec![json!(140), json!(160)]));
        assert_eq!(
            zh.text,
            Some(Text::PerPoint(vec![json!("07. 03."), json!("08. 03.")]))
        );
    }

    #[test]
    fn tips_sit_at_the_last_included_date() {
        let selection = Selection::regions(["ZH", "BE"], 9);
        let mut text = TextBuffer::new();

        let figure = regional_trend(&selection, &payload(), &mut text);
        let be_tip = &figure.data[3];

        assert_eq!(be_tip.name.as_deref(), Some("BE"));
        assert_eq!(be_tip.x, Some(vec![json!(90)]));
        assert_eq!(be_tip.y, Some(vec![Value::Null]));
        assert_eq!(be_tip.text, Some(Text::Single(String::from("BE"))));
    }

    #[test]
    fn early_cut_points_give_empty_lines() {
        let selection = Selection::regions(["ZH"], 4);
        let mut text = TextBuffer::new();

        let figure = regional_trend(&selection, &payload(), &mut text);

        assert_eq!(figure.data[0].x, Some(Vec::new()));
        assert_eq!(figure.data[1].x, Some(vec![json!(400)]));
    }

    #[test]
    fn cut_points_past_the_end_are_clamped() {
        let selection = Selection::regions(["ZH"], 40);
        let mut text = TextBuffer::new();

        let figure = regional_trend(&selection, &payload(), &mut text);

        assert_eq!(figure.data[0].x.as_ref().map(Vec::len), Some(4));
        assert_eq!(figure.data[1].x, Some(vec![Value::Null]));
        assert_eq!(text.text(REGIONAL_DATE_CONTAINER), None);
    }

    #[test]
    fn axis_ranges_cover_the_whole_series() {
        let selection = Selection::regions(["ZH", "BE"], 7);
        let mut text = TextBuffer::new();

        let figure = regional_trend(&selection, &payload(), &mut text);
        let x_axis = figure.layout.x_axis.unwrap();
        let y_axis = figure.layout.y_axis.unwrap();

        assert_eq!(x_axis.kind, AxisKind::Log);
        assert!((x_axis.range[1] - 1000f64.log10() * 1.05).abs() < 1e-12);
        assert!((y_axis.range[1] - 200f64.log10() * 1.05).abs() < 1e-12);
    }

    #[test]
    fn missing_regions_produce_zero_ranges_and_empty_lines() {
        let selection = Selection::regions(["TI"], 8);
        let mut text = TextBuffer::new();

        let figure = regional_trend(&selection, &payload(), &mut text);

        assert_eq!(figure.layout.x_axis.unwrap().range, [0.0, 0.0]);
        assert_eq!(figure.data[0].x, Some(Vec::new()));
        assert_eq!(figure.data[1].y, Some(vec![Value::Null]));
    }

    #[test]
    fn hovered_curve_is_highlighted_by_position() {
        let selection = Selection::regions(["ZH", "BE"], 8).with_hover(HoverData::curve(1));
        let mut text = TextBuffer::new();

        let figure = regional_trend(&selection, &payload(), &mut text);
        let zh_line = figure.data[0].line.as_ref().unwrap();
        let be_line = figure.data[1].line.as_ref().unwrap();

        assert_eq!(be_line.width, Some(2.0));
        assert_eq!(be_line.color.as_deref(), Some("#22E7FF"));
        assert_eq!(zh_line.width, Some(1.0));
        assert_eq!(zh_line.color.as_deref(), Some(DIMMED_LINE_COLOR));

        let reordered = Selection::regions(["BE", "ZH"], 8).with_hover(HoverData::curve(1));
        let figure = regional_trend(&reordered, &payload(), &mut text);

        assert_eq!(figure.data[1].name.as_deref(), Some("ZH"));
        assert_eq!(figure.data[1].line.as_ref().unwrap().width, Some(2.0));
    }

    #[test]
    fn writes_the_date_label_to_the_page() {
        let selection = Selection::regions(["ZH"], 8);
        let mut text = TextBuffer::new();

        regional_trend(&selection, &payload(), &mut text);
        cantonal_trend(&Selection::regions(["ZH"], 5), &payload(), &mut text);

        assert_eq!(text.text(REGIONAL_DATE_CONTAINER), Some("08. 03."));
        assert_eq!(text.text(CANTONAL_DATE_CONTAINER), Some("05. 03."));
    }

    #[test]
    fn regional_texts_come_from_the_i18n_bundle() {
        let selection = Selection::regions(["ZH"], 8);
        let mut text = TextBuffer::new();

        let figure = regional_trend(&selection, &payload(), &mut text);

        assert_eq!(figure.layout.title, Some(json!("Entwicklung")));
        assert_eq!(figure.layout.x_axis.unwrap().title, json!("Fälle"));
        assert_eq!(figure.data[0].hover_template, Some(json!("%{y}")));
    }

    #[test]
    fn cantonal_texts_are_fixed() {
        let selection = Selection::regions(["ZH"], 8).with_scale("linear");
        let mut text = TextBuffer::new();

        let figure = cantonal_trend(&selection, &payload(), &mut text);

        assert_eq!(figure.layout.y_axis.as_ref().unwrap().title, json!("New cases in the past week"));
        assert_eq!(figure.layout.y_axis.unwrap().kind, AxisKind::Log);
        assert_eq!(figure.layout.paper_bgcolor.as_deref(), Some("#252e3f"));
    }
}
