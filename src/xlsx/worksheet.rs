use super::layout::{Grid, IDENTITY_DATA_ROW, PHOTO_COL};
use super::photo::{target_height_px, target_width_px};
use crate::units::{px_to_col_width_256, px_to_points};

/// Index of the wrap-text cell format in xl/styles.xml.
const WRAP_XF: u32 = 1;

/// Spreadsheet column letters: 0 → "A", 25 → "Z", 26 → "AA".
fn col_letter(col: u16) -> String {
    let mut n = col as u32;
    let mut letters = [0u8; 4];
    let mut len = 0;
    loop {
        letters[len] = b'A' + (n % 26) as u8;
        len += 1;
        if n < 26 {
            break;
        }
        n = n / 26 - 1;
    }
    letters[..len].iter().rev().map(|b| *b as char).collect()
}

/// "A1"-style reference for a 0-based (row, col).
fn cell_ref(row: u32, col: u16) -> String {
    format!("{}{}", col_letter(col), row + 1)
}

fn xml_escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

/// Replace CRLF and lone CR with the intra-cell line break (LF, ASCII 10).
/// Idempotent: LF-only input passes through unchanged.
pub(super) fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

fn needs_space_preserve(text: &str) -> bool {
    text.starts_with(char::is_whitespace)
        || text.ends_with(char::is_whitespace)
        || text.contains('\n')
}

fn inline_str_cell(row: u32, col: u16, style: Option<u32>, text: &str) -> String {
    let style_attr = match style {
        Some(s) => format!(" s=\"{s}\""),
        None => String::new(),
    };
    let preserve = if needs_space_preserve(text) {
        " xml:space=\"preserve\""
    } else {
        ""
    };
    format!(
        "<c r=\"{}\"{} t=\"inlineStr\"><is><t{}>{}</t></is></c>",
        cell_ref(row, col),
        style_attr,
        preserve,
        xml_escape(text),
    )
}

fn row_open(row: u32, height: Option<f32>) -> String {
    match height {
        Some(ht) => format!("<row r=\"{}\" ht=\"{ht}\" customHeight=\"1\">", row + 1),
        None => format!("<row r=\"{}\">", row + 1),
    }
}

fn worksheet_open() -> &'static str {
    "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\
     <worksheet xmlns=\"http://schemas.openxmlformats.org/spreadsheetml/2006/main\" \
     xmlns:r=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships\">"
}

/// Serialize the résumé grid. With the photo embedded, the photo column is
/// widened and the identity data row heightened to fit the picture, and the
/// drawing part is referenced; without it, no sizing is applied.
pub(super) fn resume_sheet_xml(grid: &Grid, with_photo: bool) -> String {
    let mut xml = String::with_capacity(4096);
    xml.push_str(worksheet_open());

    if with_photo {
        let width = px_to_col_width_256(target_width_px()) as f32 / 256.0;
        xml.push_str(&format!(
            "<cols><col min=\"{col}\" max=\"{col}\" width=\"{width}\" customWidth=\"1\"/></cols>",
            col = PHOTO_COL + 1,
        ));
    }

    xml.push_str("<sheetData>");
    for (row, cells) in grid.rows() {
        let height = (with_photo && row == IDENTITY_DATA_ROW)
            .then(|| px_to_points(target_height_px()));
        xml.push_str(&row_open(row, height));
        for (col, text) in cells {
            xml.push_str(&inline_str_cell(row, *col, None, text));
        }
        xml.push_str("</row>");
    }
    xml.push_str("</sheetData>");

    if with_photo {
        xml.push_str("<drawing r:id=\"rId1\"/>");
    }
    xml.push_str("</worksheet>");
    xml
}

/// The self-introduction sheet: one wrap-styled cell at A1 holding the whole
/// text, line breaks normalized so multi-line content displays without
/// manual column widening.
pub(super) fn self_introduction_xml(text: &str) -> String {
    let normalized = normalize_newlines(text);
    let mut xml = String::with_capacity(512 + normalized.len());
    xml.push_str(worksheet_open());
    xml.push_str("<sheetData>");
    xml.push_str(&row_open(0, None));
    xml.push_str(&inline_str_cell(0, 0, Some(WRAP_XF), &normalized));
    xml.push_str("</row>");
    xml.push_str("</sheetData>");
    xml.push_str("</worksheet>");
    xml
}
