//! Output streams of rendered pages.

use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

use crate::error::Result;
use crate::render::OutputStream;

const FILE_NAME: &str = "index.html";

/// Writes a rendered page to `index.html` in a directory.
pub struct OutputFile {
    path: PathBuf,
    file: File,
}

impl OutputFile {
    /// Creates or truncates `index.html` in `dir`.
    pub fn new(dir: &Path) -> Result<OutputFile> {
        let path = dir.join(FILE_NAME);
        let file = File::create(&path)?;
        Ok(Self { path, file })
    }

    /// Returns the path of the written file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl OutputStream for OutputFile {
    fn write(&mut self, data: &str) -> Result<()> {
        self.file.write_all(data.as_bytes())?;
        Ok(())
    }
}

impl OutputStream for String {
    fn write(&mut self, data: &str) -> Result<()> {
        self.push_str(data);
        Ok(())
    }
}
