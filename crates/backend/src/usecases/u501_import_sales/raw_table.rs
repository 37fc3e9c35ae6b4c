//! Чтение выгрузки (xlsx/xls/ods или csv) в сырую таблицу строк

use super::error::ImportError;
use calamine::{open_workbook_auto_from_rs, Data, Reader, Sheets};
use chrono::{Duration, NaiveDate};
use std::io::Cursor;

/// Первая строка файла как заголовки, остальные непустые строки как данные
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Workbook,
    Csv,
}

/// Формат по расширению; без расширения смотрим на сигнатуру zip/OLE
pub fn detect_kind(file_name: &str, bytes: &[u8]) -> FileKind {
    let lower = file_name.to_lowercase();
    if [".xlsx", ".xlsm", ".xls", ".xlsb", ".ods"]
        .iter()
        .any(|ext| lower.ends_with(ext))
    {
        return FileKind::Workbook;
    }
    if lower.ends_with(".csv") || lower.ends_with(".txt") {
        return FileKind::Csv;
    }
    if bytes.starts_with(b"PK") || bytes.starts_with(&[0xD0, 0xCF, 0x11, 0xE0]) {
        FileKind::Workbook
    } else {
        FileKind::Csv
    }
}

pub fn read_table(file_name: &str, bytes: &[u8]) -> Result<RawTable, ImportError> {
    if bytes.is_empty() {
        return Err(ImportError::FileRead("file is empty".into()));
    }
    let table = match detect_kind(file_name, bytes) {
        FileKind::Workbook => read_workbook(bytes)?,
        FileKind::Csv => read_csv(bytes)?,
    };
    if table.headers.iter().all(|h| h.is_empty()) {
        return Err(ImportError::FileRead("no header row found".into()));
    }
    tracing::info!(
        "Read '{}': {} columns, {} rows",
        file_name,
        table.headers.len(),
        table.rows.len()
    );
    Ok(table)
}

fn read_workbook(bytes: &[u8]) -> Result<RawTable, ImportError> {
    let mut workbook: Sheets<_> = open_workbook_auto_from_rs(Cursor::new(bytes.to_vec()))
        .map_err(|e| ImportError::FileRead(format!("failed to open workbook: {}", e)))?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| ImportError::FileRead("workbook contains no sheets".into()))?;
    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| ImportError::FileRead(format!("failed to read sheet '{}': {}", sheet_name, e)))?;

    let mut rows = range
        .rows()
        .map(|row| row.iter().map(cell_to_text).collect::<Vec<_>>());
    let headers = rows.next().unwrap_or_default();
    let rows = rows.filter(|r| !is_blank(r)).collect();

    Ok(RawTable {
        headers: trim_all(headers),
        rows,
    })
}

fn read_csv(bytes: &[u8]) -> Result<RawTable, ImportError> {
    let text = String::from_utf8_lossy(bytes);
    // Strip UTF-8 BOM if present
    let text = text.trim_start_matches('\u{FEFF}');

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .delimiter(sniff_delimiter(text))
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| ImportError::FileRead(format!("failed to read CSV headers: {}", e)))?
        .iter()
        .map(str::to_string)
        .collect();

    let mut rows = Vec::new();
    for result in reader.records() {
        match result {
            Ok(record) => {
                let row: Vec<String> = record.iter().map(str::to_string).collect();
                if !is_blank(&row) {
                    rows.push(row);
                }
            }
            Err(e) => tracing::warn!("Skipping malformed CSV record: {}", e),
        }
    }

    Ok(RawTable {
        headers: trim_all(headers),
        rows,
    })
}

/// `;` for Brazilian-locale exports, `,` otherwise
fn sniff_delimiter(text: &str) -> u8 {
    let first_line = text.lines().next().unwrap_or_default();
    if first_line.matches(';').count() > first_line.matches(',').count() {
        b';'
    } else {
        b','
    }
}

fn cell_to_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(n) => {
            if n.fract() == 0.0 && n.abs() < 1e15 {
                format!("{}", *n as i64)
            } else {
                format!("{}", n)
            }
        }
        Data::Int(n) => n.to_string(),
        Data::Bool(b) => (if *b { "TRUE" } else { "FALSE" }).to_string(),
        Data::Error(e) => {
            tracing::debug!("Cell error {:?} read as empty", e);
            String::new()
        }
        Data::DateTime(dt) => excel_serial_to_text(dt.as_f64()),
        Data::DateTimeIso(s) => s.clone(),
        Data::DurationIso(s) => s.clone(),
    }
}

/// Excel serial date (1900 system) -> "YYYY-MM-DD HH:MM:SS"
fn excel_serial_to_text(serial: f64) -> String {
    let Some(epoch) = NaiveDate::from_ymd_opt(1899, 12, 30).and_then(|d| d.and_hms_opt(0, 0, 0))
    else {
        return serial.to_string();
    };
    let millis = (serial * 86_400_000.0).round() as i64;
    let Some(dt) = Duration::try_milliseconds(millis).and_then(|d| epoch.checked_add_signed(d))
    else {
        return serial.to_string();
    };
    if serial.fract() == 0.0 {
        dt.format("%Y-%m-%d").to_string()
    } else {
        dt.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}

fn is_blank(row: &[String]) -> bool {
    row.iter().all(|c| c.trim().is_empty())
}

fn trim_all(values: Vec<String>) -> Vec<String> {
    values.into_iter().map(|v| v.trim().to_string()).collect()
}
