//! The chart page.

use serde::Serialize;

use crate::error::Result;
use crate::figure::Figure;
use crate::render::OutputStream;
use crate::render::Render;
use crate::template::TemplateEngine;

/// A standalone HTML page showing one figure.
///
/// Page text written by a callback, such as the current date label, is shown
/// above the figure in elements with the same ids the dashboard uses.
#[derive(Debug)]
pub struct Page<'a> {
    title: &'a str,
    figure: &'a Figure,
    elements: Vec<(&'a str, &'a str)>,
}

impl<'a> Page<'a> {
    /// Creates a page titled `title` that shows `figure`.
    pub fn new(title: &'a str, figure: &'a Figure) -> Page<'a> {
        Self {
            title,
            figure,
            elements: Vec::new(),
        }
    }

    /// Sets the page text elements as `(id, text)` pairs.
    pub fn with_elements(mut self, elements: Vec<(&'a str, &'a str)>) -> Page<'a> {
        self.elements = elements;
        self
    }
}

#[derive(Serialize)]
struct PageContext<'a> {
    title: &'a str,
    elements: Vec<Element<'a>>,
    data: String,
    layout: String,
}

#[derive(Serialize)]
struct Element<'a> {
    id: &'a str,
    text: &'a str,
}

impl Render for Page<'_> {
    fn render<O>(&self, output: &mut O) -> Result<()>
    where
        O: OutputStream,
    {
        let context = PageContext {
            title: self.title,
            elements: self
                .elements
                .iter()
                .map(|&(id, text)| Element { id, text })
                .collect(),
            data: script_json(&self.figure.data)?,
            layout: script_json(&self.figure.layout)?,
        };

        let page = TemplateEngine::new()?.render_page(&context)?;
        output.write(&page)
    }
}

/// Serializes `value` for embedding in a `<script>` element.
fn script_json<T: Serialize>(value: &T) -> Result<String> {
    let json = serde_json::to_string(value)?;
    Ok(json.replace("</", "<\\/"))
}
