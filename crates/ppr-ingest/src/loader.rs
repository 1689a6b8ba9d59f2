//! Registry file loading.
//!
//! The source export is tab-separated, UTF-16 encoded text with a header
//! row. Every field is kept as raw text at this stage; schema inference on
//! dirty data is deliberately avoided. Malformed rows (wrong column count,
//! unparseable records) are skipped rather than aborting the whole load:
//! partial data beats total failure for a report-style workload.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use csv::ReaderBuilder;
use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};
use tracing::debug;

use ppr_model::{DEFAULT_REGISTRY_FILENAME, RegistryError, Result};

/// Raw registry table as loaded from disk.
#[derive(Debug, Clone)]
pub struct LoadedRegistry {
    /// All columns typed as strings, header row taken from the file.
    pub frame: DataFrame,
    /// Path the data was read from.
    pub path: PathBuf,
    /// Rows skipped because their field count did not match the header
    /// or the record failed to parse.
    pub skipped_rows: usize,
}

/// Registry filename resolved against the current working directory.
pub fn default_registry_path() -> PathBuf {
    env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(DEFAULT_REGISTRY_FILENAME)
}

/// Read the registry export at `path`, or the default export in the
/// current working directory when no path is given.
///
/// # Errors
///
/// Returns [`RegistryError::Load`] when the file is missing, the payload
/// is not UTF-16, or the header row has no columns.
pub fn read_registry(path: Option<&Path>) -> Result<LoadedRegistry> {
    let path = path.map_or_else(default_registry_path, Path::to_path_buf);
    let bytes =
        fs::read(&path).map_err(|error| RegistryError::load(&path, error.to_string()))?;
    let decoded = decode_utf16(&bytes).map_err(|reason| RegistryError::load(&path, reason))?;
    parse_delimited(&decoded, &path)
}

/// Decode a UTF-16 payload, sniffing the byte order mark.
///
/// Without a BOM the payload is assumed little-endian, matching the
/// registry exports in the wild. Unpaired surrogates are replaced rather
/// than failing the whole file; an odd byte count or empty payload means
/// the file is not UTF-16 at all.
fn decode_utf16(bytes: &[u8]) -> std::result::Result<String, String> {
    let (little_endian, payload) = match bytes {
        [] => return Err("file is empty".to_string()),
        [0xFF, 0xFE, rest @ ..] => (true, rest),
        [0xFE, 0xFF, rest @ ..] => (false, rest),
        _ => (true, bytes),
    };
    if payload.len() % 2 != 0 {
        return Err("odd byte count; not UTF-16".to_string());
    }
    let units: Vec<u16> = payload
        .chunks_exact(2)
        .map(|pair| {
            if little_endian {
                u16::from_le_bytes([pair[0], pair[1]])
            } else {
                u16::from_be_bytes([pair[0], pair[1]])
            }
        })
        .collect();
    Ok(String::from_utf16_lossy(&units))
}

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

/// Parse decoded text as a tab-delimited table with a header row.
///
/// Data cells are stored verbatim; trimming them would silently merge
/// grouping keys that differ only in whitespace.
fn parse_delimited(decoded: &str, path: &Path) -> Result<LoadedRegistry> {
    let mut reader = ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .from_reader(decoded.as_bytes());

    let mut headers: Vec<String> = Vec::new();
    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut skipped_rows = 0usize;

    for record in reader.records() {
        let record = match record {
            Ok(record) => record,
            Err(error) => {
                debug!(path = %path.display(), %error, "skipping unparseable record");
                skipped_rows += 1;
                continue;
            }
        };
        let row: Vec<String> = record.iter().map(str::to_string).collect();
        if row.iter().all(|value| value.is_empty()) {
            continue;
        }
        if headers.is_empty() {
            headers = row.iter().map(|value| normalize_header(value)).collect();
            continue;
        }
        if row.len() != headers.len() {
            debug!(
                path = %path.display(),
                expected = headers.len(),
                found = row.len(),
                "skipping row with wrong column count"
            );
            skipped_rows += 1;
            continue;
        }
        rows.push(row);
    }

    if headers.is_empty() || headers.iter().all(|name| name.is_empty()) {
        return Err(RegistryError::load(path, "no header columns"));
    }

    let columns: Vec<Column> = headers
        .iter()
        .enumerate()
        .map(|(idx, name)| {
            let values: Vec<String> = rows.iter().map(|row| row[idx].clone()).collect();
            Series::new(name.as_str().into(), values).into_column()
        })
        .collect();
    let frame =
        DataFrame::new(columns).map_err(|error| RegistryError::load(path, error.to_string()))?;

    debug!(
        path = %path.display(),
        rows = frame.height(),
        columns = frame.width(),
        skipped_rows,
        "registry loaded"
    );

    Ok(LoadedRegistry {
        frame,
        path: path.to_path_buf(),
        skipped_rows,
    })
}
