#![allow(dead_code)]

use rust_xlsxwriter::{Workbook, Worksheet};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy)]
pub enum Cell<'a> {
    Text(&'a str),
    Number(f64),
    Bool(bool),
    Blank,
}

pub fn standard_headers() -> Vec<Cell<'static>> {
    vec![
        Cell::Text("Seniority"),
        Cell::Text("Years of experience"),
        Cell::Text("Availability"),
    ]
}

/// Writes a single-sheet workbook and returns its path.
pub fn write_workbook(dir: &Path, file_name: &str, rows: &[Vec<Cell<'_>>]) -> PathBuf {
    write_workbook_sheets(dir, file_name, &[("Sheet1", rows)])
}

/// Writes one worksheet per `(name, rows)` entry, in order.
pub fn write_workbook_sheets(
    dir: &Path,
    file_name: &str,
    sheets: &[(&str, &[Vec<Cell<'_>>])],
) -> PathBuf {
    let path = dir.join(file_name);
    let mut workbook = Workbook::new();
    for (name, rows) in sheets {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(*name).unwrap();
        fill_rows(worksheet, rows);
    }
    workbook.save(&path).unwrap();
    path
}

fn fill_rows(worksheet: &mut Worksheet, rows: &[Vec<Cell<'_>>]) {
    for (row_idx, row) in rows.iter().enumerate() {
        let row_num = row_idx as u32;
        for (col_idx, cell) in row.iter().enumerate() {
            let col_num = col_idx as u16;
            match cell {
                Cell::Text(value) => {
                    worksheet.write_string(row_num, col_num, *value).unwrap();
                }
                Cell::Number(value) => {
                    worksheet.write_number(row_num, col_num, *value).unwrap();
                }
                Cell::Bool(value) => {
                    worksheet.write_boolean(row_num, col_num, *value).unwrap();
                }
                Cell::Blank => {}
            }
        }
    }
}
