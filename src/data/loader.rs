use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use super::model::{Dataset, Series};

/// How many data rows of the raw CSV matrix become variables.
/// The source files carry the three measurement series in their first
/// three rows; anything below is blank padding or duplicated content.
const VARIABLE_ROWS: usize = 3;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`  – headerless matrix, one variable per ROW (see [`load_csv`])
/// * `.json` – column-oriented object `{ "name": [1.0, 2.0, ...], ... }`
pub fn load_file(path: &Path) -> Result<Dataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => load_csv(path),
        "json" => load_json(path),
        other => bail!("Unsupported file extension: .{other}"),
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: no header; each ROW holds one variable's measurements,
/// possibly in scientific notation:
///
/// ```text
/// 1.2e-3,1.4e-3,1.1e-3,...
/// 2.0e-3,2.1e-3,1.9e-3,...
/// 3.4e-3,3.3e-3,3.6e-3,...
/// ```
///
/// The first [`VARIABLE_ROWS`] rows that contain any data are transposed
/// into columns named `Variable1..VariableN`.  Trailing empty cells are
/// ignored; after trimming, all rows must agree on length.
fn load_csv(path: &Path) -> Result<Dataset> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("opening {}", path.display()))?;
    parse_csv(file)
}

fn parse_csv<R: Read>(input: R) -> Result<Dataset> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(input);

    let mut series: Vec<Series> = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        if series.len() == VARIABLE_ROWS {
            break;
        }

        let record = result.with_context(|| format!("CSV row {row_no}"))?;

        // Drop trailing empty cells (ragged padding in the source files).
        let mut cells: Vec<&str> = record.iter().map(str::trim).collect();
        while cells.last().is_some_and(|c| c.is_empty()) {
            cells.pop();
        }
        if cells.is_empty() {
            continue;
        }

        let values = cells
            .iter()
            .enumerate()
            .map(|(j, tok)| {
                tok.parse::<f64>()
                    .with_context(|| format!("Row {row_no}, cell {j}: '{tok}' is not a number"))
            })
            .collect::<Result<Vec<f64>>>()?;

        let name = format!("Variable{}", series.len() + 1);
        series.push(Series::new(name, values));
    }

    if series.is_empty() {
        bail!("CSV contains no data rows");
    }

    Dataset::new(series).context("assembling dataset from CSV rows")
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schemas.  Column-oriented (`df.to_json(orient='columns')`):
///
/// ```json
/// {
///   "Variable1": [0.0012, 0.0014, ...],
///   "Variable2": [0.0020, 0.0021, ...],
///   "Variable3": [0.0034, 0.0033, ...]
/// }
/// ```
///
/// or records-oriented (`orient='records'`):
///
/// ```json
/// [
///   { "Variable1": 0.0012, "Variable2": 0.0020, "Variable3": 0.0034 },
///   ...
/// ]
/// ```
#[derive(Deserialize)]
#[serde(untagged)]
enum JsonTable {
    Columns(BTreeMap<String, Vec<f64>>),
    Records(Vec<BTreeMap<String, f64>>),
}

fn load_json(path: &Path) -> Result<Dataset> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    parse_json(&text)
}

fn parse_json(text: &str) -> Result<Dataset> {
    let table: JsonTable = serde_json::from_str(text).context("parsing JSON table")?;

    // BTreeMap keeps column order stable regardless of key order on disk.
    let columns: BTreeMap<String, Vec<f64>> = match table {
        JsonTable::Columns(cols) => cols,
        JsonTable::Records(rows) => {
            let mut cols: BTreeMap<String, Vec<f64>> = BTreeMap::new();
            for (i, row) in rows.iter().enumerate() {
                for (name, &value) in row {
                    let col = cols.entry(name.clone()).or_default();
                    if col.len() != i {
                        bail!("Record {i}: column '{name}' missing in an earlier record");
                    }
                    col.push(value);
                }
            }
            cols
        }
    };

    if columns.is_empty() {
        bail!("JSON contains no columns");
    }

    let series = columns
        .into_iter()
        .map(|(name, values)| Series::new(name, values))
        .collect();

    Dataset::new(series).context("assembling dataset from JSON columns")
}
