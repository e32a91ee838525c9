use std::fmt;

/// SQL aggregation function selected by an aggregation synonym.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Aggregation {
    /// `AVG(column)`
    Avg,
    /// `MAX(column)`
    Max,
    /// `MIN(column)`
    Min,
    /// `SUM(column)`
    Sum,
    /// `COUNT(column)`
    Count,
}

impl fmt::Display for Aggregation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Aggregation::Avg => write!(f, "AVG"),
            Aggregation::Max => write!(f, "MAX"),
            Aggregation::Min => write!(f, "MIN"),
            Aggregation::Sum => write!(f, "SUM"),
            Aggregation::Count => write!(f, "COUNT"),
        }
    }
}

/// Sort direction for an `ORDER BY` clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    /// Ascending order, from "lowest".
    Asc,
    /// Descending order, from "highest".
    Desc,
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Asc => write!(f, "ASC"),
            SortDirection::Desc => write!(f, "DESC"),
        }
    }
}

/// Structured intermediate form between intent matching and SQL rendering.
///
/// Invariants: when `aggregation` is set, `columns` must be non-empty and the
/// aggregation renders over `columns[0]` only. `conditions` entries are fully
/// rendered predicate strings; no further catalog validation happens once one
/// is appended.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryPlan {
    /// Selected column names, distinct, in first-mention order.
    pub columns: Vec<String>,
    /// Rendered predicate strings, conjoined with `AND` at render time.
    pub conditions: Vec<String>,
    /// Grouping columns. Defaults to `columns` when an aggregation is present
    /// and no explicit grouping was requested.
    pub group_by: Vec<String>,
    /// Optional sort column and direction; later mentions overwrite earlier ones.
    pub order_by: Option<(String, SortDirection)>,
    /// Optional positive row limit from a "top N" phrase; later mentions
    /// overwrite. A "top 0" phrase never registers here.
    pub limit: Option<u64>,
    /// Optional aggregation function; later mentions overwrite.
    pub aggregation: Option<Aggregation>,
}

impl QueryPlan {
    /// Append a column mention, preserving first-mention order and dedup.
    pub fn mention_column(&mut self, name: &str) {
        if !self.columns.iter().any(|c| c == name) {
            self.columns.push(name.to_string());
        }
    }
}
