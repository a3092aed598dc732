//! The user-interface state callbacks are invoked with.

use crate::hover::HoverData;

/// The user-interface state a callback is invoked with.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    /// The selected regions, in selection order.
    pub regions: Vec<String>,
    /// The scale toggle of the trend charts.
    pub scale: Option<String>,
    /// The metric mode of the map.
    pub mode: Option<String>,
    /// The position of the date slider.
    pub date_index: usize,
    /// The latest hover event of the graph.
    pub hover: Option<HoverData>,
}

impl Selection {
    /// Returns the selection of a trend chart. Repeated regions are kept once.
    pub fn regions<I, S>(regions: I, date_index: usize) -> Selection
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut selected: Vec<String> = Vec::new();

        for region in regions {
            let region = region.into();
            if !selected.contains(&region) {
                selected.push(region);
            }
        }

        Self {
            regions: selected,
            date_index,
            ..Selection::default()
        }
    }

    /// Returns the selection of the map.
    pub fn map<S: Into<String>>(mode: S, date_index: usize) -> Selection {
        Self {
            mode: Some(mode.into()),
            date_index,
            ..Selection::default()
        }
    }

    /// Sets the hover event.
    pub fn with_hover(mut self, hover: HoverData) -> Selection {
        self.hover = Some(hover);
        self
    }

    /// Sets the scale toggle.
    pub fn with_scale<S: Into<String>>(mut self, scale: S) -> Selection {
        self.scale = Some(scale.into());
        self
    }
}
