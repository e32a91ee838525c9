use crate::catalog::source::ColumnMeta;

/// Semantic kind of a column, deciding which matching rules and sample-query
/// templates apply to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// Numeric-like column (int/decimal/double/bigint families).
    Quantitative,
    /// Text/date-like column (varchar/mediumtext/char/date/time families).
    Categorical,
}

/// A table's columns partitioned by semantic kind, catalog order preserved
/// within each list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnClasses {
    /// Numeric-like column names, in catalog order.
    pub quantitative: Vec<String>,
    /// Text/date-like column names, in catalog order.
    pub categorical: Vec<String>,
}

impl ColumnClasses {
    /// Whether `name` is a known column of either kind.
    pub fn contains(&self, name: &str) -> bool {
        self.kind_of(name).is_some()
    }

    /// Semantic kind of `name`, or `None` when the column is unknown.
    pub fn kind_of(&self, name: &str) -> Option<ColumnKind> {
        if self.quantitative.iter().any(|c| c == name) {
            Some(ColumnKind::Quantitative)
        } else if self.categorical.iter().any(|c| c == name) {
            Some(ColumnKind::Categorical)
        } else {
            None
        }
    }

    /// Whether `name` is a known quantitative column.
    pub fn is_quantitative(&self, name: &str) -> bool {
        self.kind_of(name) == Some(ColumnKind::Quantitative)
    }
}

/// Base types classified as quantitative.
const QUANTITATIVE_TYPES: &[&str] = &["int", "decimal", "double", "bigint"];

/// Base types classified as categorical.
const CATEGORICAL_TYPES: &[&str] = &["varchar", "mediumtext", "char", "date", "time"];

/// Classify the declared base type of a single column.
///
/// The parenthesized length/precision suffix is stripped (`varchar(255)` →
/// `varchar`) and the remainder matched case-insensitively. Types outside both
/// families yield `None` and the column is excluded from classification —
/// silently, not as an error.
pub fn classify_type(declared: &str) -> Option<ColumnKind> {
    let base = declared
        .split('(')
        .next()
        .unwrap_or(declared)
        .trim()
        .to_ascii_lowercase();
    if QUANTITATIVE_TYPES.contains(&base.as_str()) {
        Some(ColumnKind::Quantitative)
    } else if CATEGORICAL_TYPES.contains(&base.as_str()) {
        Some(ColumnKind::Categorical)
    } else {
        None
    }
}

/// Partition a table's columns into quantitative and categorical lists.
pub fn classify_columns(columns: &[ColumnMeta]) -> ColumnClasses {
    let mut classes = ColumnClasses::default();
    for column in columns {
        match classify_type(&column.data_type) {
            Some(ColumnKind::Quantitative) => classes.quantitative.push(column.name.clone()),
            Some(ColumnKind::Categorical) => classes.categorical.push(column.name.clone()),
            None => {}
        }
    }
    classes
}
