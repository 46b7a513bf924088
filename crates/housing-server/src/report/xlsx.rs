//! Spreadsheet export

use super::{Cell, ReportRenderer, Table};
use crate::error::Result;
use rust_xlsxwriter::{Format, Workbook};

/// Excel allows at most 31 characters in a sheet name
const MAX_SHEET_NAME: usize = 31;

/// Single-sheet workbook: bold localized header row, one row per record
pub struct XlsxRenderer;

impl ReportRenderer for XlsxRenderer {
    fn render(&self, table: &Table) -> Result<Vec<u8>> {
        let mut workbook = Workbook::new();
        let header = Format::new().set_bold();

        let worksheet = workbook.add_worksheet();
        let sheet_name: String = table.title.chars().take(MAX_SHEET_NAME).collect();
        worksheet.set_name(sheet_name)?;
        worksheet.set_right_to_left(true);

        for (col, column) in table.columns.iter().enumerate() {
            let col = col as u16;
            worksheet.write_string_with_format(0, col, column.label, &header)?;
            // PDF widths are in mm; character widths come out close to mm / 2.5
            worksheet.set_column_width(col, f64::from(column.width_mm) / 2.5 + 4.0)?;
        }

        for (index, cells) in table.rows.iter().enumerate() {
            let row = index as u32 + 1;
            for (col, cell) in cells.iter().enumerate() {
                let col = col as u16;
                match cell {
                    Cell::Text(text) => {
                        worksheet.write_string(row, col, text.as_str())?;
                    }
                    Cell::Integer(value) => {
                        worksheet.write_number(row, col, *value as f64)?;
                    }
                    Cell::Number(value) => {
                        worksheet.write_number(row, col, *value)?;
                    }
                    Cell::Empty => {
                        worksheet.write_string(row, col, "")?;
                    }
                }
            }
        }

        Ok(workbook.save_to_buffer()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::Column;

    #[test]
    fn renders_a_zip_container() {
        let table = Table {
            title: "تقرير المباني".to_string(),
            file_stem: "buildings_report".to_string(),
            columns: vec![Column::new("الرقم", 20.0), Column::new("اسم المبنى", 60.0)],
            rows: vec![
                vec![Cell::Integer(1), Cell::Text("Tower A".to_string())],
                vec![Cell::Integer(2), Cell::Empty],
            ],
        };

        let bytes = XlsxRenderer.render(&table).unwrap();
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn long_titles_are_truncated_for_the_sheet_name() {
        let table = Table {
            title: "x".repeat(64),
            file_stem: "long".to_string(),
            columns: vec![Column::new("A", 10.0)],
            rows: Vec::new(),
        };
        assert!(XlsxRenderer.render(&table).is_ok());
    }
}
