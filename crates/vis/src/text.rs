//! Page text updated next to the charts.

use std::collections::HashMap;

/// A page whose elements can have their text replaced.
///
/// The trend charts show the current date label in a header element outside
/// the chart itself.
pub trait TextTarget {
    /// Replaces the text of the element `element_id`.
    fn set_text(&mut self, element_id: &str, text: &str);
}

/// An in-memory [TextTarget]. The last write to an element wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBuffer {
    elements: HashMap<String, String>,
}

impl TextBuffer {
    /// Creates an empty buffer.
    pub fn new() -> TextBuffer {
        Self::default()
    }

    /// Returns the text written to `element_id`, if any.
    pub fn text(&self, element_id: &str) -> Option<&str> {
        self.elements.get(element_id).map(String::as_str)
    }

    /// Returns the elements sorted by id.
    pub fn elements(&self) -> Vec<(&str, &str)> {
        let mut elements: Vec<(&str, &str)> = self
            .elements
            .iter()
            .map(|(id, text)| (id.as_str(), text.as_str()))
            .collect();
        elements.sort_unstable();
        elements
    }
}

impl TextTarget for TextBuffer {
    fn set_text(&mut self, element_id: &str, text: &str) {
        self.elements
            .insert(element_id.to_string(), text.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_write_wins() {
        let mut buffer = TextBuffer::new();

        buffer.set_text("date-container-regional", "01. 04. – 08. 04.");
        buffer.set_text("date-container-regional", "02. 04. – 09. 04.");

        assert_eq!(buffer.text("date-container-regional"), Some("02. 04. – 09. 04."));
        assert_eq!(buffer.text("date-container-cantonal"), None);
    }
}
