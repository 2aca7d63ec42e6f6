//! XML writer for the spreadsheet report.
//!
//! Serializes the workbook model through serde mirror structs: attributes
//! carry the cell kind and styling, the element text carries the value. The
//! mirror layer keeps the report model free of serialization concerns.

use crate::errors::{Error, Result};
use crate::export::WriteWorkbook;
use crate::report::workbook::{Align, Cell, CellValue, Sheet, Workbook};
use quick_xml::se::to_string;
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
#[serde(rename = "workbook")]
struct XmlWorkbook {
    sheet: Vec<XmlSheet>,
}

#[derive(Serialize)]
struct XmlSheet {
    #[serde(rename = "@name")]
    name: String,
    #[serde(rename = "@bordered", skip_serializing_if = "is_false")]
    bordered: bool,
    #[serde(rename = "@autofit", skip_serializing_if = "is_false")]
    autofit: bool,
    row: Vec<XmlRow>,
}

#[derive(Serialize)]
struct XmlRow {
    cell: Vec<XmlCell>,
}

#[derive(Serialize)]
struct XmlCell {
    #[serde(rename = "@kind")]
    kind: &'static str,
    #[serde(rename = "@bold", skip_serializing_if = "is_false")]
    bold: bool,
    #[serde(rename = "@italic", skip_serializing_if = "is_false")]
    italic: bool,
    #[serde(rename = "@align", skip_serializing_if = "Option::is_none")]
    align: Option<&'static str>,
    #[serde(rename = "@format", skip_serializing_if = "Option::is_none")]
    format: Option<&'static str>,
    #[serde(rename = "@color", skip_serializing_if = "Option::is_none")]
    color: Option<&'static str>,
    #[serde(rename = "@merge-across", skip_serializing_if = "is_zero")]
    merge_across: u32,
    #[serde(rename = "$text")]
    value: String,
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_false(b: &bool) -> bool {
    !*b
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_zero(n: &u32) -> bool {
    *n == 0
}

fn mirror_cell(cell: &Cell) -> XmlCell {
    let (kind, value) = match &cell.value {
        CellValue::Text(s) => ("text", s.clone()),
        CellValue::Number(n) => ("number", n.to_string()),
        CellValue::Formula(f) => ("formula", f.clone()),
    };

    XmlCell {
        kind,
        bold: cell.style.bold,
        italic: cell.style.italic,
        align: match cell.style.align {
            Align::Left => None,
            Align::Center => Some("center"),
            Align::Right => Some("right"),
        },
        format: cell.style.number_format,
        color: cell.style.color,
        merge_across: cell.merge_across,
        value,
    }
}

fn mirror_sheet(sheet: &Sheet) -> XmlSheet {
    XmlSheet {
        name: sheet.name.clone(),
        bordered: sheet.bordered,
        autofit: sheet.autofit,
        row: sheet
            .rows
            .iter()
            .map(|row| XmlRow {
                cell: row.iter().map(mirror_cell).collect(),
            })
            .collect(),
    }
}

/// The spreadsheet XML format.
pub struct SpreadsheetXml;

impl WriteWorkbook for SpreadsheetXml {
    fn write<W: Write>(mut w: W, workbook: &Workbook) -> Result<()> {
        let mirror = XmlWorkbook {
            sheet: workbook.sheets.iter().map(mirror_sheet).collect(),
        };

        let s = to_string(&mirror).map_err(|e| Error::Export {
            message: format!("spreadsheet XML: {e}"),
        })?;
        w.write_all(s.as_bytes())?;
        Ok(())
    }
}
