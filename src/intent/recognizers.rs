//! Pure token-pattern recognizers.
//!
//! Each recognizer probes the token sequence at one index and either matches —
//! returning the recognized fragment plus the next index to resume scanning
//! from — or declines with `None`. The driver in
//! [`crate::intent::matcher`] composes them in a fixed priority order, so each
//! one stays independently testable.

use std::sync::LazyLock;

use regex::Regex;

use crate::catalog::classifier::ColumnClasses;
use crate::intent::plan::{Aggregation, SortDirection};

/// A rendered condition plus the index at which scanning resumes.
pub type ConditionMatch = (String, usize);

static SEASON_FORMAT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}$").expect("season regex is valid"));

fn is_all_digits(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
}

/// Recognize an aggregation synonym. Both the lowercase words and the
/// uppercase SQL names injected by synonym substitution are accepted.
pub fn recognize_aggregation(token: &str) -> Option<Aggregation> {
    match token {
        "average" | "avg" | "AVG" => Some(Aggregation::Avg),
        "maximum" | "max" | "MAX" => Some(Aggregation::Max),
        "minimum" | "min" | "MIN" => Some(Aggregation::Min),
        "sum" | "SUM" | "total" | "TOTAL" => Some(Aggregation::Sum),
        "count" => Some(Aggregation::Count),
        _ => None,
    }
}

/// Recognize the special literal conditions.
///
/// `draft_year` immediately followed by a 4-digit token emits an equality
/// condition and consumes the year. `season` immediately preceded by a
/// `YYYY-MM` token emits an equality condition using the preceding token,
/// consuming nothing ahead.
pub fn recognize_special_condition(tokens: &[String], i: usize) -> Option<ConditionMatch> {
    if tokens[i] == "draft_year" {
        if let Some(year) = tokens.get(i + 1) {
            if is_all_digits(year) && year.len() == 4 {
                return Some((format!("draft_year = '{year}'"), i + 2));
            }
        }
    }

    if tokens[i] == "season" && i > 0 && SEASON_FORMAT.is_match(&tokens[i - 1]) {
        return Some((format!("season = '{}'", tokens[i - 1]), i + 1));
    }

    None
}

/// Recognize `column <operator-word> value` over a quantitative column.
///
/// Trigger words are `{is, equals, greater, less, >, <, between}`; only the
/// mapped ones (`greater`→`>`, `less`→`<`, `equals`→`=`, symbols pass through)
/// emit a condition. `is` and `between` fit the shape but carry no mapping
/// here — `between` is handled by [`recognize_between`]. Consumes 3 tokens.
pub fn recognize_comparison(
    tokens: &[String],
    i: usize,
    classes: &ColumnClasses,
) -> Option<ConditionMatch> {
    let operator_word = tokens.get(i + 1)?;
    let value = tokens.get(i + 2)?;
    if !matches!(
        operator_word.as_str(),
        "is" | "equals" | "greater" | "less" | ">" | "<" | "between"
    ) {
        return None;
    }

    let sql_operator = match operator_word.as_str() {
        "greater" | ">" => ">",
        "less" | "<" => "<",
        "equals" => "=",
        _ => return None,
    };

    let column = &tokens[i];
    if !classes.is_quantitative(column) {
        return None;
    }
    Some((format!("{column} {sql_operator} {value}"), i + 3))
}

/// Recognize `column fewer|more than value` over a quantitative column,
/// emitting `<` / `>` respectively. Consumes 4 tokens.
pub fn recognize_fewer_more(
    tokens: &[String],
    i: usize,
    classes: &ColumnClasses,
) -> Option<ConditionMatch> {
    let column = &tokens[i];
    if !classes.is_quantitative(column) {
        return None;
    }
    let quantifier = tokens.get(i + 1)?;
    if tokens.get(i + 2)? != "than" {
        return None;
    }
    let value = tokens.get(i + 3)?;
    let sql_operator = match quantifier.as_str() {
        "fewer" => "<",
        "more" => ">",
        _ => return None,
    };
    Some((format!("{column} {sql_operator} {value}"), i + 4))
}

/// Recognize `column between v1 and v2` over a quantitative column.
/// Consumes 5 tokens.
pub fn recognize_between(
    tokens: &[String],
    i: usize,
    classes: &ColumnClasses,
) -> Option<ConditionMatch> {
    let column = &tokens[i];
    if !classes.is_quantitative(column) {
        return None;
    }
    if tokens.get(i + 1)? != "between" || tokens.get(i + 3)? != "and" {
        return None;
    }
    let low = &tokens[i + 2];
    let high = tokens.get(i + 4)?;
    Some((format!("{column} BETWEEN {low} AND {high}"), i + 5))
}

/// Recognize `highest`/`lowest` followed by a known column.
///
/// Peeks at the next token without consuming it, so the sorted column still
/// registers as a column mention on the following scan step.
pub fn recognize_sorting(
    tokens: &[String],
    i: usize,
    classes: &ColumnClasses,
) -> Option<(String, SortDirection)> {
    let direction = match tokens[i].as_str() {
        "highest" => SortDirection::Desc,
        "lowest" => SortDirection::Asc,
        _ => return None,
    };
    let column = tokens.get(i + 1)?;
    if !classes.contains(column) {
        return None;
    }
    Some((column.clone(), direction))
}

/// Recognize `top` followed by a digit token. Peeks without consuming.
/// A zero limit carries no meaning and does not register.
pub fn recognize_limit(tokens: &[String], i: usize) -> Option<u64> {
    if tokens[i] != "top" {
        return None;
    }
    let digits = tokens.get(i + 1)?;
    if !is_all_digits(digits) {
        return None;
    }
    digits.parse().ok().filter(|&n| n > 0)
}
