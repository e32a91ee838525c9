use std::io::Read;
use std::sync::LazyLock;

use regex::Regex;

use crate::catalog::source::ColumnMeta;

/// Rows sampled from the head of a CSV file when inferring column types.
const CSV_SAMPLE_ROWS: usize = 100;

/// Closed set of type tags inferable from sampled values.
///
/// `Text` is the fallback when no stricter tag matches every sampled value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InferredType {
    /// Every sampled value parses as an integer.
    Integer,
    /// Every sampled value parses as a decimal number.
    Decimal,
    /// Every sampled value matches a `YYYY-MM-DD` or `DD/MM/YYYY` shape.
    Date,
    /// At least one sampled value matched nothing stricter.
    Text,
}

static DATE_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d{4}-\d{2}-\d{2}$|^\d{2}/\d{2}/\d{4}$").expect("date shape regex is valid")
});

/// Infer a column's type tag from a bounded sample of its raw values.
///
/// Empty values are skipped. Tags are tried strictest-first: a column is
/// `Integer` only when every non-empty value parses as one, `Decimal` when
/// every value parses as a float, `Date` when every value has a date shape,
/// and `Text` otherwise. An all-empty sample infers `Integer` (no value
/// contradicts any tag), matching the permissive intake behavior.
pub fn infer_column_type(sample_values: &[&str]) -> InferredType {
    let mut is_int = true;
    let mut is_decimal = true;
    let mut is_date = true;

    for value in sample_values {
        let value = value.trim();
        if value.is_empty() {
            continue;
        }
        if value.parse::<i64>().is_err() {
            is_int = false;
        }
        if value.parse::<f64>().is_err() {
            is_decimal = false;
        }
        if !DATE_SHAPE.is_match(value) {
            is_date = false;
        }
    }

    if is_int {
        InferredType::Integer
    } else if is_decimal {
        InferredType::Decimal
    } else if is_date {
        InferredType::Date
    } else {
        InferredType::Text
    }
}

/// Render the declared storage type for an inferred tag.
///
/// `Text` columns are sized to the longest sampled value, defaulting to 255
/// when the sample holds no non-empty value.
pub fn declared_type(tag: InferredType, sample_values: &[&str]) -> String {
    match tag {
        InferredType::Integer => "INT".to_string(),
        InferredType::Decimal => "DECIMAL(20, 6)".to_string(),
        InferredType::Date => "DATE".to_string(),
        InferredType::Text => {
            let max_length = sample_values
                .iter()
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(str::len)
                .max()
                .unwrap_or(0);
            format!(
                "VARCHAR({})",
                if max_length > 0 { max_length } else { 255 }
            )
        }
    }
}

/// Build column metadata from a CSV header plus up to 100 sampled rows.
///
/// Column `i`'s sample is every row value at position `i`; short rows simply
/// contribute nothing for trailing columns.
pub fn columns_from_csv<R: Read>(reader: R) -> Result<Vec<ColumnMeta>, String> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let headers = csv_reader
        .headers()
        .map_err(|e| format!("Failed to read CSV header: {e}"))?
        .clone();

    let mut rows = Vec::new();
    for record in csv_reader.records().take(CSV_SAMPLE_ROWS) {
        rows.push(record.map_err(|e| format!("Failed to read CSV row: {e}"))?);
    }

    Ok(headers
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let sample: Vec<&str> = rows.iter().filter_map(|row| row.get(i)).collect();
            let tag = infer_column_type(&sample);
            ColumnMeta::new(name, &declared_type(tag, &sample))
        })
        .collect())
}
