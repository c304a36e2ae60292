//! Spreadsheet export for parsed statistics.
//!
//! Writes a flat OpenDocument spreadsheet (single-file ODF XML): a bold
//! header row, then one row per stats line. A missing field becomes a
//! `=0/0` formula cell, a deliberate error marker that keeps the hole
//! visible in the sheet instead of reading as a blank or a zero.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use log::debug;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::error::Result;
use crate::stats::{StatsRow, FIELD_NAMES};

const NS_OFFICE: &str = "urn:oasis:names:tc:opendocument:xmlns:office:1.0";
const NS_TABLE: &str = "urn:oasis:names:tc:opendocument:xmlns:table:1.0";
const NS_TEXT: &str = "urn:oasis:names:tc:opendocument:xmlns:text:1.0";
const NS_STYLE: &str = "urn:oasis:names:tc:opendocument:xmlns:style:1.0";
const NS_FO: &str = "urn:oasis:names:tc:opendocument:xmlns:xsl-fo-compatible:1.0";

const MIMETYPE: &str = "application/vnd.oasis.opendocument.spreadsheet";
const HEADER_STYLE: &str = "bold-header";

/// Write `rows` to a flat OpenDocument spreadsheet at `path`.
pub fn write_ods<P: AsRef<Path>>(path: P, rows: &[StatsRow]) -> Result<()> {
    let file = BufWriter::new(File::create(path.as_ref())?);
    let mut writer = Writer::new_with_indent(file, b' ', 1);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let mut document = BytesStart::new("office:document");
    document.push_attribute(("xmlns:office", NS_OFFICE));
    document.push_attribute(("xmlns:table", NS_TABLE));
    document.push_attribute(("xmlns:text", NS_TEXT));
    document.push_attribute(("xmlns:style", NS_STYLE));
    document.push_attribute(("xmlns:fo", NS_FO));
    document.push_attribute(("office:version", "1.2"));
    document.push_attribute(("office:mimetype", MIMETYPE));
    writer.write_event(Event::Start(document))?;

    write_styles(&mut writer)?;

    writer.write_event(Event::Start(BytesStart::new("office:body")))?;
    writer.write_event(Event::Start(BytesStart::new("office:spreadsheet")))?;

    let mut table = BytesStart::new("table:table");
    table.push_attribute(("table:name", "Stats"));
    writer.write_event(Event::Start(table))?;

    write_header_row(&mut writer)?;
    for row in rows {
        write_data_row(&mut writer, row)?;
    }

    writer.write_event(Event::End(BytesEnd::new("table:table")))?;
    writer.write_event(Event::End(BytesEnd::new("office:spreadsheet")))?;
    writer.write_event(Event::End(BytesEnd::new("office:body")))?;
    writer.write_event(Event::End(BytesEnd::new("office:document")))?;

    debug!(
        "wrote {} stats rows to {}",
        rows.len(),
        path.as_ref().display()
    );
    Ok(())
}

fn write_styles<W: std::io::Write>(writer: &mut Writer<W>) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new("office:automatic-styles")))?;

    let mut style = BytesStart::new("style:style");
    style.push_attribute(("style:name", HEADER_STYLE));
    style.push_attribute(("style:family", "table-cell"));
    writer.write_event(Event::Start(style))?;

    let mut props = BytesStart::new("style:text-properties");
    props.push_attribute(("fo:font-weight", "bold"));
    writer.write_event(Event::Empty(props))?;

    writer.write_event(Event::End(BytesEnd::new("style:style")))?;
    writer.write_event(Event::End(BytesEnd::new("office:automatic-styles")))?;
    Ok(())
}

fn write_header_row<W: std::io::Write>(writer: &mut Writer<W>) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new("table:table-row")))?;
    for name in FIELD_NAMES {
        let mut cell = BytesStart::new("table:table-cell");
        cell.push_attribute(("table:style-name", HEADER_STYLE));
        cell.push_attribute(("office:value-type", "string"));
        writer.write_event(Event::Start(cell))?;
        write_text(writer, name)?;
        writer.write_event(Event::End(BytesEnd::new("table:table-cell")))?;
    }
    writer.write_event(Event::End(BytesEnd::new("table:table-row")))?;
    Ok(())
}

fn write_data_row<W: std::io::Write>(writer: &mut Writer<W>, row: &StatsRow) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new("table:table-row")))?;
    for field in row.fields() {
        match field {
            Some(value) => {
                let text = value.to_string();
                let mut cell = BytesStart::new("table:table-cell");
                cell.push_attribute(("office:value-type", "float"));
                cell.push_attribute(("office:value", text.as_str()));
                writer.write_event(Event::Start(cell))?;
                write_text(writer, &text)?;
                writer.write_event(Event::End(BytesEnd::new("table:table-cell")))?;
            }
            None => {
                let mut cell = BytesStart::new("table:table-cell");
                cell.push_attribute(("table:formula", "of:=0/0"));
                writer.write_event(Event::Empty(cell))?;
            }
        }
    }
    writer.write_event(Event::End(BytesEnd::new("table:table-row")))?;
    Ok(())
}

fn write_text<W: std::io::Write>(writer: &mut Writer<W>, text: &str) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new("text:p")))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new("text:p")))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(rows: &[StatsRow]) -> String {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stats.fods");
        write_ods(&path, rows).unwrap();
        std::fs::read_to_string(path).unwrap()
    }

    #[test]
    fn header_row_is_bold_and_complete() {
        let xml = render(&[]);
        for name in FIELD_NAMES {
            assert!(xml.contains(&format!("<text:p>{}</text:p>", name)));
        }
        assert!(xml.contains("fo:font-weight=\"bold\""));
        assert!(xml.contains(&format!("table:style-name=\"{}\"", HEADER_STYLE)));
    }

    #[test]
    fn present_fields_become_float_cells() {
        let row = StatsRow {
            bugs: Some(5),
            ..StatsRow::default()
        };
        let xml = render(&[row]);
        assert!(xml.contains("office:value-type=\"float\""));
        assert!(xml.contains("office:value=\"5\""));
    }

    #[test]
    fn missing_fields_become_error_formula_cells() {
        let row = StatsRow {
            bugs: Some(5),
            ..StatsRow::default()
        };
        let xml = render(&[row]);
        // Four of the five columns are missing on this row.
        assert_eq!(xml.matches("of:=0/0").count(), 4);
    }

    #[test]
    fn document_declares_spreadsheet_mimetype() {
        let xml = render(&[]);
        assert!(xml.contains(MIMETYPE));
    }
}
