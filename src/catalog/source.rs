use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One column of a table: its name and its declared storage type,
/// e.g. `("player_height", "decimal(20, 6)")`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMeta {
    /// Column name as declared in the schema.
    pub name: String,
    /// Declared storage type, possibly with a parenthesized length/precision
    /// suffix (`varchar(255)`, `decimal(20, 6)`).
    pub data_type: String,
}

impl ColumnMeta {
    /// Convenience constructor from string slices.
    pub fn new(name: &str, data_type: &str) -> Self {
        Self {
            name: name.to_string(),
            data_type: data_type.to_string(),
        }
    }
}

/// Source of column metadata for named tables.
///
/// This is the seam between the engine and whatever owns the schema — a live
/// database connection, a parsed DDL file, or an in-memory fixture. The engine
/// only ever reads through it; it never issues queries itself.
pub trait CatalogSource {
    /// Ordered column metadata for `table`, or `None` when the table is unknown.
    fn columns(&self, table: &str) -> Option<Vec<ColumnMeta>>;
}

/// In-memory catalog keyed by table name, loadable from a JSON schema file.
///
/// The JSON shape is a map from table name to a column list:
///
/// ```json
/// { "nba": [ { "name": "ppg", "data_type": "decimal(20, 6)" } ] }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StaticCatalog {
    tables: BTreeMap<String, Vec<ColumnMeta>>,
}

impl StaticCatalog {
    /// Empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) a table's column list.
    pub fn insert_table(&mut self, table: &str, columns: Vec<ColumnMeta>) {
        self.tables.insert(table.to_string(), columns);
    }

    /// Parse a catalog from its JSON representation.
    pub fn from_json(json: &str) -> Result<Self, String> {
        let tables: BTreeMap<String, Vec<ColumnMeta>> =
            serde_json::from_str(json).map_err(|e| format!("Invalid schema JSON: {e}"))?;
        Ok(Self { tables })
    }

    /// Table names known to this catalog, in sorted order.
    pub fn table_names(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }
}

impl CatalogSource for StaticCatalog {
    fn columns(&self, table: &str) -> Option<Vec<ColumnMeta>> {
        self.tables.get(table).cloned()
    }
}
