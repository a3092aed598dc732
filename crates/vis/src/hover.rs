//! Resolves Plotly hover events to regions.

use serde::Deserialize;

/// The hover event Plotly reports for a graph.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct HoverData {
    /// The hovered points; only the first one is used.
    #[serde(default)]
    pub points: Vec<HoverPoint>,
}

/// A hovered point of a graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct HoverPoint {
    /// The index of the trace the point belongs to.
    #[serde(rename = "curveNumber")]
    pub curve_number: usize,
}

impl HoverData {
    /// Returns a hover event over a single point of the trace `curve_number`.
    pub fn curve(curve_number: usize) -> HoverData {
        Self {
            points: vec![HoverPoint { curve_number }],
        }
    }
}

/// Returns the region whose curve is hovered.
///
/// Plotly only reports the index of the hovered trace. The trend charts emit
/// one line per selected region, in selection order, so the index is looked
/// up in `selected`. Reordering the selection while the hover index stays put
/// moves the highlight to another region.
pub fn hovered_region<'a>(selected: &'a [String], hover: Option<&HoverData>) -> Option<&'a str> {
    let point = hover?.points.first()?;

    selected.get(point.curve_number).map(String::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn regions(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    #[test]
    fn hover_index_selects_region_by_position() {
        let hover = HoverData::curve(1);

        assert_eq!(hovered_region(&regions(&["ZH", "BE"]), Some(&hover)), Some("BE"));
        assert_eq!(hovered_region(&regions(&["BE", "ZH"]), Some(&hover)), Some("ZH"));
    }

    #[test]
    fn no_region_without_a_matching_curve() {
        let selected = regions(&["ZH", "BE"]);

        assert_eq!(hovered_region(&selected, None), None);
        assert_eq!(hovered_region(&selected, Some(&HoverData::default())), None);
        assert_eq!(hovered_region(&selected, Some(&HoverData::curve(3))), None);
    }

    #[test]
    fn deserializes_plotly_events() {
        let hover: HoverData = serde_json::from_str(
            r#"{"points": [{"curveNumber": 2, "pointNumber": 14, "x": 120, "y": 30}]}"#,
        )
        .unwrap();

        assert_eq!(hover, HoverData::curve(2));
    }
}
