//! Plain-text writer for the document report.
//!
//! The portable format: headings are underlined, tables are padded columns,
//! page breaks become form feeds. Styling and colors have no text rendering
//! and are dropped.

use crate::errors::Result;
use crate::export::WriteDocument;
use crate::report::document::{Block, Document};
use std::io::Write;

/// The plain-text document format.
pub struct DocumentText;

impl WriteDocument for DocumentText {
    fn write<W: Write>(mut w: W, document: &Document) -> Result<()> {
        writeln!(w, "{}", document.header_text)?;
        writeln!(w)?;

        for block in &document.blocks {
            match block {
                Block::Heading(text) => {
                    writeln!(w, "{text}")?;
                    writeln!(w, "{}", "=".repeat(text.chars().count()))?;
                }
                Block::Paragraph { text, .. } => {
                    writeln!(w, "{text}")?;
                }
                Block::Table { header, rows } => {
                    let width = std::iter::once(header[0].chars().count())
                        .chain(rows.iter().map(|r| r[0].chars().count()))
                        .max()
                        .unwrap_or(0);

                    writeln!(w, "{:width$} | {}", header[0], header[1])?;
                    for row in rows {
                        writeln!(w, "{:width$} | {}", row[0], row[1])?;
                    }
                    writeln!(w)?;
                }
                Block::PageBreak => {
                    writeln!(w, "\u{c}")?;
                }
            }
        }
        Ok(())
    }
}
