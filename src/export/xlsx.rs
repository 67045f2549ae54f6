// src/export/xlsx.rs

use crate::errors::AppResult;
use crate::export::excel_date::{DATE_FORMAT, TIME_FORMAT, date_serial, time_serial};
use crate::export::model::{ExportRow, HOURS_COL, get_headers};
use crate::export::{SHEET_NAME, notify_export_success};
use crate::ui::messages::info;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

const DATE_COL: usize = 1;
const START_COL: usize = 4;
const END_COL: usize = 5;

/// Export XLSX con styling e auto-larghezza colonne.
pub(crate) fn export_xlsx(rows: &[ExportRow], path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    // ---------------------------
    // Header
    // ---------------------------
    let headers = get_headers();

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in headers.iter().enumerate() {
        worksheet.write_with_format(0, col as u16, *header, &header_format)?;
    }

    worksheet.set_freeze_panes(1, 0)?;

    // ---------------------------
    // Calcolo larghezze colonne
    // ---------------------------
    let mut col_widths: Vec<usize> = headers.iter().map(|h| UnicodeWidthStr::width(*h)).collect();

    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);

    // ---------------------------
    // Scrittura righe
    // ---------------------------
    for (row_index, r) in rows.iter().enumerate() {
        let row = (row_index + 1) as u32;
        let style = if r.is_trailer() {
            CellStyle::Trailer
        } else if row_index % 2 == 0 {
            CellStyle::Band(band1)
        } else {
            CellStyle::Band(band2)
        };

        for (col, value) in r.cells().iter().enumerate() {
            write_xlsx_cell(worksheet, row, col, value, style)?;
            col_widths[col] = col_widths[col].max(UnicodeWidthStr::width(*value));
        }
    }

    // ---------------------------
    // Set column widths
    // ---------------------------
    for (c, w) in col_widths.iter().enumerate() {
        worksheet.set_column_width(c as u16, *w as f64 + 2.0)?;
    }

    workbook.save(path)?;

    notify_export_success("XLSX", path);
    Ok(())
}

#[derive(Clone, Copy)]
enum CellStyle {
    Band(Color),
    Trailer,
}

impl CellStyle {
    fn base(self) -> Format {
        match self {
            CellStyle::Band(bg) => Format::new()
                .set_background_color(bg)
                .set_pattern(FormatPattern::Solid)
                .set_border(FormatBorder::Thin),
            CellStyle::Trailer => Format::new().set_bold().set_border_top(FormatBorder::Thin),
        }
    }
}

/// Scrive una singola cella: data e orari come seriali Excel, ore come numero.
fn write_xlsx_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: usize,
    s: &str,
    style: CellStyle,
) -> AppResult<()> {
    let c = col as u16;

    let serial = match col {
        DATE_COL => date_serial(s).map(|v| (DATE_FORMAT, v)),
        START_COL | END_COL => time_serial(s).map(|v| (TIME_FORMAT, v)),
        _ => None,
    };

    if let Some((num_format, value)) = serial {
        let fmt = style.base().set_num_format(num_format);
        worksheet.write_with_format(row, c, value, &fmt)?;
        return Ok(());
    }

    if col == HOURS_COL
        && let Ok(hours) = s.parse::<f64>()
    {
        let fmt = style
            .base()
            .set_num_format("0.00")
            .set_align(FormatAlign::Right);
        worksheet.write_with_format(row, c, hours, &fmt)?;
        return Ok(());
    }

    // Testo (anche vuoto, per mantenere bordi e colore di banda)
    worksheet.write_with_format(row, c, s, &style.base())?;
    Ok(())
}
