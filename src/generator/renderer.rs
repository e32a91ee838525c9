use crate::intent::plan::QueryPlan;

/// Render a completed query plan into a single SQL SELECT string.
///
/// Clause order is fixed: `SELECT` (aggregation over the first column, the
/// column list, or `*`), `FROM`, then optional `WHERE` (conditions joined by
/// `AND`), `GROUP BY`, `ORDER BY`, `LIMIT`. Condition values and identifiers
/// are embedded verbatim — no escaping or parameterization is performed; the
/// caller owns that trust boundary.
///
/// Fails when the plan is malformed: an aggregation with no target column has
/// nothing to aggregate over.
pub fn render_sql(plan: &QueryPlan, table: &str) -> Result<String, String> {
    let mut query = String::from("SELECT ");

    if let Some(aggregation) = plan.aggregation {
        let target = plan
            .columns
            .first()
            .ok_or_else(|| "aggregation requires at least one selected column".to_string())?;
        query.push_str(&format!("{aggregation}({target})"));
    } else if plan.columns.is_empty() {
        query.push('*');
    } else {
        query.push_str(&plan.columns.join(", "));
    }

    query.push_str(&format!(" FROM {table}"));

    if !plan.conditions.is_empty() {
        query.push_str(&format!(" WHERE {}", plan.conditions.join(" AND ")));
    }
    if !plan.group_by.is_empty() {
        query.push_str(&format!(" GROUP BY {}", plan.group_by.join(", ")));
    }
    if let Some((column, direction)) = &plan.order_by {
        query.push_str(&format!(" ORDER BY {column} {direction}"));
    }
    if let Some(limit) = plan.limit {
        query.push_str(&format!(" LIMIT {limit}"));
    }

    Ok(query)
}

/// Human-readable restatement of what the plan asks for.
pub fn describe_plan(plan: &QueryPlan) -> String {
    format!(
        "query {} with these filters: {}",
        plan.columns.join(", "),
        plan.conditions.join(" AND ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intent::plan::{Aggregation, SortDirection};

    #[test]
    fn clause_order_is_fixed() {
        let plan = QueryPlan {
            columns: vec!["ppg".into()],
            conditions: vec!["ppg > 20".into(), "draft_year = '2019'".into()],
            group_by: vec!["season".into()],
            order_by: Some(("ppg".into(), SortDirection::Desc)),
            limit: Some(5),
            aggregation: Some(Aggregation::Avg),
        };
        assert_eq!(
            render_sql(&plan, "nba").unwrap(),
            "SELECT AVG(ppg) FROM nba WHERE ppg > 20 AND draft_year = '2019' \
             GROUP BY season ORDER BY ppg DESC LIMIT 5"
        );
    }

    #[test]
    fn empty_column_list_selects_star() {
        let plan = QueryPlan {
            conditions: vec!["ppg > 20".into()],
            ..QueryPlan::default()
        };
        assert_eq!(
            render_sql(&plan, "nba").unwrap(),
            "SELECT * FROM nba WHERE ppg > 20"
        );
    }

    #[test]
    fn aggregation_without_columns_is_a_synthesis_error() {
        let plan = QueryPlan {
            aggregation: Some(Aggregation::Sum),
            ..QueryPlan::default()
        };
        assert!(render_sql(&plan, "nba").is_err());
    }
}
