//! HTML writer for the document report.
//!
//! Renders the document model into a single self-contained page: the header
//! and footer map to `<header>`/`<footer>`, headings and callouts keep their
//! named styles as CSS classes, and page breaks become print-time breaks.

use crate::errors::Result;
use crate::export::WriteDocument;
use crate::report::document::{Block, Document, TextColor};
use std::io::Write;

const STYLE: &str = "\
body { font-family: 'Times New Roman', serif; }\n\
header, footer, h1 { text-align: center; }\n\
table { border-collapse: collapse; }\n\
td, th { border: 1px solid black; padding: 4px 12px; }\n\
.page-break { page-break-after: always; }\n";

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

const fn color_css(color: TextColor) -> &'static str {
    match color {
        TextColor::DarkRed => "darkred",
        TextColor::DarkGreen => "darkgreen",
    }
}

/// The HTML document format.
pub struct DocumentHtml;

impl WriteDocument for DocumentHtml {
    fn write<W: Write>(mut w: W, document: &Document) -> Result<()> {
        let header = escape(&document.header_text);
        writeln!(w, "<!DOCTYPE html>")?;
        writeln!(w, "<html><head><meta charset=\"utf-8\">")?;
        writeln!(w, "<title>{header}</title>")?;
        writeln!(w, "<style>{STYLE}</style></head><body>")?;
        writeln!(w, "<header>{header}</header>")?;

        for block in &document.blocks {
            match block {
                Block::Heading(text) => {
                    writeln!(w, "<h1>{}</h1>", escape(text))?;
                }
                Block::Paragraph { text, style, color } => {
                    writeln!(
                        w,
                        "<p class=\"{}\" style=\"color:{}\">{}</p>",
                        style.to_lowercase().replace(' ', "-"),
                        color_css(*color),
                        escape(text),
                    )?;
                }
                Block::Table { header, rows } => {
                    writeln!(w, "<table>")?;
                    writeln!(
                        w,
                        "<tr><th>{}</th><th>{}</th></tr>",
                        escape(&header[0]),
                        escape(&header[1]),
                    )?;
                    for row in rows {
                        writeln!(
                            w,
                            "<tr><td>{}</td><td>{}</td></tr>",
                            escape(&row[0]),
                            escape(&row[1]),
                        )?;
                    }
                    writeln!(w, "</table>")?;
                }
                Block::PageBreak => {
                    writeln!(w, "<div class=\"page-break\"></div>")?;
                }
            }
        }

        if document.page_number_footer {
            writeln!(w, "<footer class=\"page-number\"></footer>")?;
        }
        writeln!(w, "</body></html>")?;
        Ok(())
    }
}
