/// Splits a table's columns into quantitative and categorical lists by declared type.
pub mod classifier;
/// Column-type inference from sampled CSV values.
pub mod infer;
/// Column catalog trait and the in-memory/JSON-backed implementation.
pub mod source;
