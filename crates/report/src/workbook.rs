//! Count sheet layout.
//!
//! ```text
//! row 1   title, merged A1:D1
//! row 3   Date / Shift : <date>
//! row 4   Shift:         <shift>
//! row 5   TIME COUNTED:  <time>
//! row 7   ITEM CODE | ACTUAL COUNT BREAKDOWN | TOTAL | REMARKS   (autofilter)
//! row 8.. one row per item, total written as a formula with its cached result
//! ```

use rust_xlsxwriter::{
    Color, Format, FormatAlign, FormatBorder, FormatUnderline, Formula, Workbook, Worksheet,
};

use countsheet_inventory::{EvaluatedRow, FillColor};

use crate::error::ReportError;
use crate::header::ReportHeader;

pub const CONTENT_TYPE: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";
pub const SHEET_NAME: &str = "Countsheet";

const TITLE: &str = "PACKAGING MATERIALS DAILY COUNT SHEET - COHIN (BLDG. 3&6)";
const TABLE_HEADERS: [&str; 4] = ["ITEM CODE", "ACTUAL COUNT BREAKDOWN", "TOTAL", "REMARKS"];
const COLUMN_WIDTHS: [f64; 4] = [25.0, 40.0, 15.0, 30.0];
const LAST_COL: u16 = 3;

const TITLE_ROW: u32 = 0;
const DATE_ROW: u32 = 2;
const SHIFT_ROW: u32 = 3;
const TIME_ROW: u32 = 4;
const TABLE_HEADER_ROW: u32 = 6;
const FIRST_DATA_ROW: u32 = 7;
const TABLE_HEADER_HEIGHT: f64 = 20.0;

const HEADER_FILL: u32 = 0xE2E8F0;
const LABEL_FONT: &str = "Roboto Slab";
const VALUE_FONT: &str = "Courier New";

/// Cell formats for one data row; the fill depends on the row's remarks.
struct RowFormats {
    code: Format,
    text: Format,
    total: Format,
}

impl RowFormats {
    fn for_fill(fill: FillColor) -> Self {
        let mut base = Format::new()
            .set_border(FormatBorder::Thin)
            .set_align(FormatAlign::VerticalCenter);
        if let Some(rgb) = fill.rgb() {
            base = base.set_background_color(Color::RGB(rgb));
        }

        Self {
            code: base.clone().set_bold().set_italic(),
            total: base.clone().set_bold(),
            text: base,
        }
    }
}

/// Render the count sheet to xlsx bytes.
pub fn render_workbook(header: &ReportHeader, rows: &[EvaluatedRow]) -> Result<Vec<u8>, ReportError> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();

    sheet.set_name(SHEET_NAME)?;
    write_title(sheet)?;
    write_metadata(sheet, header)?;
    write_table_header(sheet)?;

    for (offset, row) in rows.iter().enumerate() {
        write_row(sheet, FIRST_DATA_ROW + offset as u32, row)?;
    }

    let last_row = TABLE_HEADER_ROW + rows.len() as u32;
    sheet.autofilter(TABLE_HEADER_ROW, 0, last_row, LAST_COL)?;

    let bytes = workbook.save_to_buffer()?;
    tracing::debug!(rows = rows.len(), bytes = bytes.len(), "count sheet rendered");
    Ok(bytes)
}

fn write_title(sheet: &mut Worksheet) -> Result<(), ReportError> {
    let format = Format::new()
        .set_font_name(LABEL_FONT)
        .set_font_size(14.0)
        .set_bold()
        .set_align(FormatAlign::Center)
        .set_background_color(Color::RGB(HEADER_FILL));

    sheet.merge_range(TITLE_ROW, 0, TITLE_ROW, LAST_COL, TITLE, &format)?;
    Ok(())
}

fn write_metadata(sheet: &mut Worksheet, header: &ReportHeader) -> Result<(), ReportError> {
    let label = Format::new().set_font_name(LABEL_FONT).set_bold();
    let value = Format::new()
        .set_font_name(VALUE_FONT)
        .set_bold()
        .set_italic()
        .set_underline(FormatUnderline::Single);

    let lines = [
        (DATE_ROW, "Date / Shift :", header.date_shift.as_str()),
        (SHIFT_ROW, "Shift:", header.shift.label()),
        (TIME_ROW, "TIME COUNTED:", header.time_counted.as_str()),
    ];
    for (row, caption, text) in lines {
        sheet.write_string_with_format(row, 0, caption, &label)?;
        write_text(sheet, row, 1, text, &value)?;
    }
    Ok(())
}

fn write_table_header(sheet: &mut Worksheet) -> Result<(), ReportError> {
    let format = Format::new()
        .set_font_name(LABEL_FONT)
        .set_font_size(10.0)
        .set_bold()
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter)
        .set_border(FormatBorder::Thin)
        .set_background_color(Color::RGB(HEADER_FILL));

    for (col, (title, width)) in TABLE_HEADERS.iter().zip(COLUMN_WIDTHS).enumerate() {
        let col = col as u16;
        sheet.write_string_with_format(TABLE_HEADER_ROW, col, *title, &format)?;
        sheet.set_column_width(col, width)?;
    }
    sheet.set_row_height(TABLE_HEADER_ROW, TABLE_HEADER_HEIGHT)?;
    Ok(())
}

fn write_row(sheet: &mut Worksheet, excel_row: u32, row: &EvaluatedRow) -> Result<(), ReportError> {
    let formats = RowFormats::for_fill(row.fill());

    write_text(sheet, excel_row, 0, row.code(), &formats.code)?;
    write_text(sheet, excel_row, 1, row.count_display(), &formats.text)?;

    let total = Formula::new(row.formula()).set_result(format!("{}", row.total()));
    sheet.write_formula_with_format(excel_row, 2, total, &formats.total)?;

    write_text(sheet, excel_row, 3, row.remarks_display(), &formats.text)?;
    Ok(())
}

// Excel has no empty string cells; keep the border/fill with a blank.
fn write_text(
    sheet: &mut Worksheet,
    row: u32,
    col: u16,
    text: &str,
    format: &Format,
) -> Result<(), ReportError> {
    if text.is_empty() {
        sheet.write_blank(row, col, format)?;
    } else {
        sheet.write_string_with_format(row, col, text, format)?;
    }
    Ok(())
}
