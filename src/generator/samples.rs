use std::collections::HashMap;
use std::str::FromStr;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::catalog::classifier::ColumnClasses;
use crate::generator::templates::{
    Construct, Template, CATEGORICAL_SLOT, QUANTITATIVE_SLOT, TABLE_SLOT, UNCONSTRAINED,
};

/// Upper bound on the number of sample queries returned per request.
pub const MAX_SAMPLES: usize = 3;

/// One instantiated sample query with its natural-language description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedQuery {
    /// Natural-language restatement of what the query computes.
    pub description: String,
    /// Concrete SQL text.
    pub query: String,
}

/// Expand a template library over a table's classified columns.
///
/// Templates without column placeholders instantiate exactly once; all others
/// expand over every quantitative × categorical pair. The result is
/// deduplicated by exact SQL text: the first occurrence keeps its position and
/// the latest occurrence's description wins ties.
fn expand_templates(
    table: &str,
    classes: &ColumnClasses,
    templates: &[Template],
) -> Vec<GeneratedQuery> {
    let mut unique: Vec<GeneratedQuery> = Vec::new();
    let mut by_query: HashMap<String, usize> = HashMap::new();

    let mut push = |description: String, query: String| {
        if let Some(&index) = by_query.get(&query) {
            unique[index].description = description;
        } else {
            by_query.insert(query.clone(), unique.len());
            unique.push(GeneratedQuery { description, query });
        }
    };

    for template in templates.iter().filter(|t| !t.has_placeholders()) {
        push(
            template.pattern.to_string(),
            template.sql.replace(TABLE_SLOT, table),
        );
    }

    for quantitative in &classes.quantitative {
        for categorical in &classes.categorical {
            for template in templates.iter().filter(|t| t.has_placeholders()) {
                let query = template
                    .sql
                    .replace(QUANTITATIVE_SLOT, quantitative)
                    .replace(CATEGORICAL_SLOT, categorical)
                    .replace(TABLE_SLOT, table);
                let description = template
                    .pattern
                    .replace(QUANTITATIVE_SLOT, quantitative)
                    .replace(CATEGORICAL_SLOT, categorical);
                push(description, query);
            }
        }
    }

    unique
}

/// Draw a uniform random sample without replacement of at most
/// [`MAX_SAMPLES`] queries from the deduplicated expansion.
fn sample<R: Rng + ?Sized>(unique: Vec<GeneratedQuery>, rng: &mut R) -> Vec<GeneratedQuery> {
    let count = MAX_SAMPLES.min(unique.len());
    unique.choose_multiple(rng, count).cloned().collect()
}

/// Generate up to three distinct sample queries from the default template
/// library.
pub fn generate_systematic<R: Rng + ?Sized>(
    table: &str,
    classes: &ColumnClasses,
    rng: &mut R,
) -> Vec<GeneratedQuery> {
    sample(expand_templates(table, classes, UNCONSTRAINED), rng)
}

/// Generate up to three distinct sample queries scoped to one SQL construct.
///
/// Construct lookup is case-insensitive; an unrecognized construct yields an
/// empty result, not an error.
pub fn generate_by_construct<R: Rng + ?Sized>(
    table: &str,
    classes: &ColumnClasses,
    construct: &str,
    rng: &mut R,
) -> Vec<GeneratedQuery> {
    let Ok(construct) = Construct::from_str(construct) else {
        return Vec::new();
    };
    sample(expand_templates(table, classes, construct.templates()), rng)
}
