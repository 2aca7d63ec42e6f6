//! Export sinks - format writers serializing the report models to files.
//!
//! Writers are unit structs implementing [`WriteWorkbook`] or
//! [`WriteDocument`] over `std::io::Write`. The `export_*` entry points are
//! the only code that touches the filesystem; both are wrapped identically so
//! a failure on either path surfaces as a single export error to the caller.

pub mod html;
pub mod text;
pub mod xml;

use crate::errors::Result;
use crate::report::{document::Document, workbook::Workbook};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

/// A format able to serialize a spreadsheet [`Workbook`].
pub trait WriteWorkbook {
    /// Writes the workbook to `w`.
    fn write<W: Write>(w: W, workbook: &Workbook) -> Result<()>;
}

/// A format able to serialize a [`Document`].
pub trait WriteDocument {
    /// Writes the document to `w`.
    fn write<W: Write>(w: W, document: &Document) -> Result<()>;
}

/// Writes the spreadsheet report to `path` as XML, creating parent
/// directories as needed. Returns the written path.
pub fn export_spreadsheet(workbook: &Workbook, path: impl AsRef<Path>) -> Result<PathBuf> {
    let path = path.as_ref();
    let file = create_output_file(path)?;
    xml::SpreadsheetXml::write(BufWriter::new(file), workbook)?;
    info!(path = %path.display(), "spreadsheet report written");
    Ok(path.to_path_buf())
}

/// Writes the document report to its two fixed formats: HTML at `html_path`
/// and plain text at `text_path`. Returns both written paths.
pub fn export_document(
    document: &Document,
    html_path: impl AsRef<Path>,
    text_path: impl AsRef<Path>,
) -> Result<(PathBuf, PathBuf)> {
    let html_path = html_path.as_ref();
    let text_path = text_path.as_ref();

    html::DocumentHtml::write(BufWriter::new(create_output_file(html_path)?), document)?;
    text::DocumentText::write(BufWriter::new(create_output_file(text_path)?), document)?;

    info!(
        html = %html_path.display(),
        text = %text_path.display(),
        "document report written"
    );
    Ok((html_path.to_path_buf(), text_path.to_path_buf()))
}

fn create_output_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    File::create(path).map_err(Into::into)
}
