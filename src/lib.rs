//! Translate natural-language questions about tabular datasets into SQL, and
//! synthesize representative sample queries from a column catalog.
#![warn(missing_docs)]

use std::fmt;

use rand::Rng;

/// Column metadata intake: catalog trait, type classification, CSV inference.
pub mod catalog;
/// SQL rendering and template-driven sample-query synthesis.
pub mod generator;
/// Lexical normalization and token-to-SQL-component intent matching.
pub mod intent;

use catalog::classifier::{classify_columns, ColumnClasses};
use catalog::source::CatalogSource;
use generator::renderer;
use generator::samples::{self, GeneratedQuery};
use intent::{matcher, normalizer};

/// A successfully extracted intent: the generated SQL and a restatement of
/// what was understood.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedIntent {
    /// Natural-language restatement of the recognized request.
    pub description: String,
    /// Generated SQL text, ready for the caller to execute.
    pub sql_query: String,
}

/// Failure modes of [`extract_intent`]. All are local, recoverable, and
/// caller-visible; none are retried internally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    /// The scan produced no usable columns and no aggregation.
    UnidentifiedIntent,
    /// Rendering the final SQL string failed; carries the underlying message.
    Synthesis(String),
}

impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractError::UnidentifiedIntent => {
                write!(f, "Could not identify columns or aggregation in your query.")
            }
            ExtractError::Synthesis(message) => write!(f, "{message}"),
        }
    }
}

impl std::error::Error for ExtractError {}

/// Extract a query intent from a natural-language question against one table.
///
/// Raw SQL escape hatch: input whose trimmed text begins with the
/// case-insensitive keyword `select` is passed through verbatim and the whole
/// normalizer/matcher pipeline is skipped.
///
/// The generated SQL is never validated for syntactic well-formedness;
/// execution-time SQL errors are the caller's concern, as is the absence of
/// any escaping of embedded values.
pub fn extract_intent(
    question: &str,
    table: &str,
    source: &impl CatalogSource,
) -> Result<ExtractedIntent, ExtractError> {
    let trimmed = question.trim();
    if trimmed
        .get(..6)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("select"))
    {
        return Ok(ExtractedIntent {
            description: format!("execute your query in the {table} dataset"),
            sql_query: trimmed.to_string(),
        });
    }

    let tokens = normalizer::normalize(question);
    let classes = classify_for(table, source);
    let plan = matcher::match_tokens(&tokens, &classes);

    if plan.columns.is_empty() && plan.aggregation.is_none() {
        return Err(ExtractError::UnidentifiedIntent);
    }

    let sql_query = renderer::render_sql(&plan, table).map_err(ExtractError::Synthesis)?;
    Ok(ExtractedIntent {
        description: renderer::describe_plan(&plan),
        sql_query,
    })
}

/// Generate up to three sample queries for `table` from the default template
/// library. Returns an empty list when no templates apply.
pub fn generate_systematic_queries<R: Rng + ?Sized>(
    table: &str,
    source: &impl CatalogSource,
    rng: &mut R,
) -> Vec<GeneratedQuery> {
    samples::generate_systematic(table, &classify_for(table, source), rng)
}

/// Generate up to three sample queries for `table` scoped to one SQL
/// construct (`GROUP BY`, `ORDER BY`, `HAVING`, `WHERE`; case-insensitive).
/// An unrecognized construct yields an empty list, not an error.
pub fn generate_queries_by_construct<R: Rng + ?Sized>(
    table: &str,
    source: &impl CatalogSource,
    construct: &str,
    rng: &mut R,
) -> Vec<GeneratedQuery> {
    samples::generate_by_construct(table, &classify_for(table, source), construct, rng)
}

/// Classify a table's columns, treating an unknown table as having none.
///
/// Classification is derived fresh per request; callers needing caching can
/// layer it behind their [`CatalogSource`].
fn classify_for(table: &str, source: &impl CatalogSource) -> ColumnClasses {
    source
        .columns(table)
        .map(|columns| classify_columns(&columns))
        .unwrap_or_default()
}
