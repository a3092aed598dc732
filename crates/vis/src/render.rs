//! Renders figures to HTML pages.

pub mod output;
pub mod page;

use crate::error::Result;

/// A sink for rendered text.
pub trait OutputStream {
    /// Appends `data` to the output.
    fn write(&mut self, data: &str) -> Result<()>;
}

/// Something that can be rendered to an [OutputStream].
pub trait Render {
    /// Renders `self` to `output`.
    fn render<O>(&self, output: &mut O) -> Result<()>
    where
        O: OutputStream;
}
