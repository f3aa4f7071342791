//! HTML table reader
//!
//! Reads the first `<table>` of a document. `<th>` and `<td>` both count as
//! cells and `<thead>`/`<tbody>` wrappers are ignored, so header rows simply
//! come first. The reader is lenient about unclosed `<tr>`, `<td>` and void
//! elements, but the markup must otherwise tokenize as XML-ish tags.

use quick_xml::escape::resolve_xml_entity;
use quick_xml::events::{BytesRef, Event};
use quick_xml::Reader;

use crate::core::grid::Grid;
use crate::utils::error::{ConversionError, ConversionResult};

#[derive(Default)]
struct TableState {
    rows: Vec<Vec<String>>,
    row: Vec<String>,
    cell: Option<String>,
}

impl TableState {
    fn finish_cell(&mut self) {
        if let Some(text) = self.cell.take() {
            self.row.push(text.split_whitespace().collect::<Vec<_>>().join(" "));
        }
    }

    fn finish_row(&mut self) {
        self.finish_cell();
        if !self.row.is_empty() {
            self.rows.push(std::mem::take(&mut self.row));
        }
    }

    fn push_text(&mut self, text: &str) {
        if let Some(cell) = self.cell.as_mut() {
            cell.push_str(text);
        }
    }
}

/// Read the first `<table>` in `input`
pub fn parse_html(input: &str) -> ConversionResult<Grid> {
    let mut reader = Reader::from_str(input);
    let config = reader.config_mut();
    config.check_end_names = false;
    config.allow_unmatched_ends = true;
    config.check_comments = false;
    config.trim_text(false);

    let mut state = TableState::default();
    let mut table_depth = 0usize;
    let mut found = false;

    loop {
        let event = reader
            .read_event()
            .map_err(|e| ConversionError::parse("HTML", e))?;
        match event {
            Event::Eof => break,
            Event::Start(tag) => {
                let name = tag.local_name();
                let name = name.as_ref();
                if name.eq_ignore_ascii_case(b"table") {
                    table_depth += 1;
                    found = true;
                } else if table_depth == 1 && name.eq_ignore_ascii_case(b"tr") {
                    state.finish_row();
                } else if table_depth == 1
                    && (name.eq_ignore_ascii_case(b"td") || name.eq_ignore_ascii_case(b"th"))
                {
                    state.finish_cell();
                    state.cell = Some(String::new());
                } else if name.eq_ignore_ascii_case(b"br") {
                    state.push_text(" ");
                }
            }
            Event::Empty(tag) => {
                let name = tag.local_name();
                let name = name.as_ref();
                if table_depth == 1
                    && (name.eq_ignore_ascii_case(b"td") || name.eq_ignore_ascii_case(b"th"))
                {
                    state.finish_cell();
                    state.cell = Some(String::new());
                    state.finish_cell();
                } else {
                    state.push_text(" ");
                }
            }
            Event::End(tag) => {
                let name = tag.local_name();
                let name = name.as_ref();
                if name.eq_ignore_ascii_case(b"table") && table_depth > 0 {
                    table_depth -= 1;
                    if table_depth == 0 {
                        state.finish_row();
                        break;
                    }
                } else if table_depth == 1 && name.eq_ignore_ascii_case(b"tr") {
                    state.finish_row();
                } else if table_depth == 1
                    && (name.eq_ignore_ascii_case(b"td") || name.eq_ignore_ascii_case(b"th"))
                {
                    state.finish_cell();
                }
            }
            Event::Text(text) if table_depth > 0 => {
                let text = text
                    .xml_content()
                    .map_err(|e| ConversionError::parse("HTML", e))?;
                state.push_text(&text);
            }
            Event::CData(data) if table_depth > 0 => {
                state.push_text(&String::from_utf8_lossy(&data));
            }
            Event::GeneralRef(entity) if table_depth > 0 => {
                state.push_text(&resolve_entity(&entity)?);
            }
            _ => {}
        }
    }

    if !found {
        return Err(ConversionError::parse("HTML", "no <table> found in document"));
    }
    Grid::new(state.rows)
}

/// Resolve `&name;` and `&#nn;` references; unknown names are kept verbatim
fn resolve_entity(entity: &BytesRef<'_>) -> ConversionResult<String> {
    let raw = entity
        .xml_content()
        .map_err(|e| ConversionError::parse("HTML", e))?;

    if let Some(number) = raw.strip_prefix('#') {
        let code = match number.strip_prefix(['x', 'X']) {
            Some(hex) => u32::from_str_radix(hex, 16),
            None => number.parse::<u32>(),
        }
        .map_err(|e| {
            ConversionError::parse("HTML", format!("bad character reference &{};: {}", raw, e))
        })?;
        return Ok(char::from_u32(code).map(String::from).unwrap_or_default());
    }

    Ok(match resolve_xml_entity(&raw) {
        Some(text) => text.to_string(),
        None if &*raw == "nbsp" => " ".to_string(),
        None => format!("&{};", raw),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn rows(grid: &Grid) -> Vec<Vec<&str>> {
        grid.rows()
            .iter()
            .map(|r| r.iter().map(String::as_str).collect())
            .collect()
    }

    #[test]
    fn test_table_with_sections() {
        let input = r#"
<html><body>
<table>
  <thead><tr><th>_</th><th>col1</th></tr></thead>
  <tbody>
    <tr><td>row1</td><td>val11</td></tr>
    <tr><td>row2</td><td>val21</td></tr>
  </tbody>
</table>
</body></html>"#;
        let grid = parse_html(input).unwrap();
        assert_eq!(
            rows(&grid),
            vec![
                vec!["_", "col1"],
                vec!["row1", "val11"],
                vec!["row2", "val21"],
            ]
        );
    }

    #[test]
    fn test_cell_text_is_normalized() {
        let input = "<table><tr><td>  Columbus,\n   <b>Ohio</b> </td>\
                     <td>Fish &amp; Chips</td></tr></table>";
        let grid = parse_html(input).unwrap();
        assert_eq!(rows(&grid), vec![vec!["Columbus, Ohio", "Fish & Chips"]]);
    }

    #[test]
    fn test_unclosed_cells_and_rows() {
        let input = "<table><tr><td>a<td>b<tr><td>c<td>d</table>";
        let grid = parse_html(input).unwrap();
        assert_eq!(rows(&grid), vec![vec!["a", "b"], vec!["c", "d"]]);
    }

    #[test]
    fn test_character_references() {
        let input = "<table><tr><td>&#65;&#x42;</td><td>a&nbsp;b</td></tr></table>";
        let grid = parse_html(input).unwrap();
        assert_eq!(rows(&grid), vec![vec!["AB", "a b"]]);
    }

    #[test]
    fn test_no_table() {
        let err = parse_html("<p>nothing here</p>").unwrap_err();
        assert!(err.to_string().contains("no <table> found"));
    }
}
