//! CSV loading for restaurant datasets.

use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::core::schema::Record;
use crate::{SiteError, SiteResult};

/// Column used for the display name when none is configured.
pub const DEFAULT_NAME_COLUMN: &str = "name";

/// Options controlling how rows become records.
#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// Header of the column holding the restaurant name
    pub name_column: String,
    /// Apply `clean_cell` to every value
    pub clean_cells: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        LoadOptions {
            name_column: DEFAULT_NAME_COLUMN.to_string(),
            clean_cells: false,
        }
    }
}

/// Tidy a scraped cell value.
///
/// - trims whitespace; a lone `·` separator counts as empty
/// - multi-line cells keep only their last non-empty line, stripped of spaces and `·`
/// - a single remaining private-use glyph (icon font character) counts as empty
pub fn clean_cell(value: &str) -> String {
    let value = value.trim();
    if value.is_empty() || value == "·" {
        return String::new();
    }
    let strip = |line: &str| line.trim_matches(|c: char| c == ' ' || c == '·').to_string();
    let Some(text) = value.lines().map(strip).filter(|l| !l.is_empty()).last() else {
        return String::new();
    };
    let mut chars = text.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        if (c as u32) > 0xE000 {
            return String::new();
        }
    }
    text
}

/// Make header names unique so no column overwrites another.
///
/// The first occurrence keeps its name; repeats become `phone (2)`,
/// `phone (3)`, skipping any name already present in the header.
fn dedupe_headers(headers: Vec<String>) -> Vec<String> {
    let mut taken: HashSet<String> = headers.iter().cloned().collect();
    let mut seen: HashSet<String> = HashSet::with_capacity(headers.len());
    headers
        .into_iter()
        .map(|header| {
            if seen.insert(header.clone()) {
                return header;
            }
            let mut n = 2usize;
            let mut renamed = format!("{header} ({n})");
            while taken.contains(&renamed) {
                n += 1;
                renamed = format!("{header} ({n})");
            }
            warn!(column = %header, renamed = %renamed, "duplicate header column renamed");
            taken.insert(renamed.clone());
            seen.insert(renamed.clone());
            renamed
        })
        .collect()
}

/// CSV dataset loader.
///
/// The first row is the header. Every following row becomes one `Record`,
/// in file order. Rows whose field count differs from the header are rejected.
/// Repeated header names are renamed (see `dedupe_headers`).
#[derive(Debug, Clone, Default)]
pub struct CsvLoader {
    options: LoadOptions,
}

impl CsvLoader {
    /// Create a new CsvLoader.
    pub fn new(options: LoadOptions) -> Self {
        CsvLoader { options }
    }

    /// Load all records from a CSV file.
    ///
    /// # Errors
    /// Returns `SiteError::Input` if the file is missing, unreadable or
    /// malformed, and `SiteError::Record` for a row with no content.
    pub fn load(&self, path: &Path) -> SiteResult<Vec<Record>> {
        if !path.exists() {
            return Err(SiteError::input(path, "CSV file not found"));
        }
        let file = std::fs::File::open(path)
            .map_err(|e| SiteError::input(path, format!("failed to open file: {e}")))?;
        self.load_from_reader(file, path)
    }

    /// Load records from any reader. `source` is only used in error messages.
    pub fn load_from_reader<R: Read>(&self, reader: R, source: &Path) -> SiteResult<Vec<Record>> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers: Vec<String> = csv_reader
            .headers()
            .map_err(|e| SiteError::input(source, format!("failed to read header row: {e}")))?
            .iter()
            .enumerate()
            .map(|(i, h)| {
                let h = if i == 0 { h.trim_start_matches('\u{feff}') } else { h };
                h.trim().to_string()
            })
            .collect();
        let headers = dedupe_headers(headers);

        if headers.is_empty() {
            return Err(SiteError::input(source, "empty file: no header row"));
        }
        if !headers.iter().any(|h| h == &self.options.name_column) {
            return Err(SiteError::input(
                source,
                format!("header has no '{}' column", self.options.name_column),
            ));
        }
        debug!(columns = headers.len(), "read CSV header");

        let mut records = Vec::new();
        for (index, result) in csv_reader.records().enumerate() {
            let row = index + 1;
            let raw = result
                .map_err(|e| SiteError::input(source, format!("row {row}: {e}")))?;

            if raw.len() != headers.len() {
                let line = raw.position().map(|p| p.line()).unwrap_or_default();
                return Err(SiteError::input(
                    source,
                    format!(
                        "row {row} (line {line}): expected {} fields, found {}",
                        headers.len(),
                        raw.len()
                    ),
                ));
            }

            let fields: IndexMap<String, String> = headers
                .iter()
                .zip(raw.iter())
                .map(|(h, v)| {
                    let value = if self.options.clean_cells { clean_cell(v) } else { v.to_string() };
                    (h.clone(), value)
                })
                .collect();

            let record = Record::new(row, fields, &self.options.name_column);
            if record.is_blank() {
                return Err(SiteError::Record { row, message: "row has no content".to_string() });
            }
            if record.get(&self.options.name_column).is_none() {
                warn!(row, name = %record.name, "blank name, using fallback");
            }
            records.push(record);
        }

        Ok(records)
    }
}
