use crate::catalog::classifier::ColumnClasses;
use crate::intent::plan::QueryPlan;
use crate::intent::recognizers;

/// Match a normalized token sequence against one table's column classification.
///
/// Single left-to-right scan. At each index the recognizers run in fixed
/// priority order: column mention, special literal conditions, comparison
/// conditions, fewer/more-than, between, aggregation, sorting, limit. Column
/// mentions, aggregations, sorting, and limits observe without consuming extra
/// tokens; a matched condition advances the cursor past its consumed tokens.
/// Unrecognized tokens advance by one.
///
/// After the scan, a plan with an aggregation distributes its column mentions:
/// categorical mentions become the grouping columns and quantitative mentions
/// stay as aggregation targets, provided both kinds were mentioned ("average
/// ppg by season" selects `AVG(ppg)` grouped by `season`). When only one kind
/// was mentioned, `group_by` defaults to the full mention list.
pub fn match_tokens(tokens: &[String], classes: &ColumnClasses) -> QueryPlan {
    let mut plan = QueryPlan::default();

    let mut i = 0;
    while i < tokens.len() {
        let token = &tokens[i];

        if classes.contains(token) {
            plan.mention_column(token);
        }

        if let Some((condition, next)) = recognizers::recognize_special_condition(tokens, i)
            .or_else(|| recognizers::recognize_comparison(tokens, i, classes))
            .or_else(|| recognizers::recognize_fewer_more(tokens, i, classes))
            .or_else(|| recognizers::recognize_between(tokens, i, classes))
        {
            plan.conditions.push(condition);
            i = next;
            continue;
        }

        if let Some(aggregation) = recognizers::recognize_aggregation(token) {
            plan.aggregation = Some(aggregation);
        }
        if let Some((column, direction)) = recognizers::recognize_sorting(tokens, i, classes) {
            plan.order_by = Some((column, direction));
        }
        if let Some(limit) = recognizers::recognize_limit(tokens, i) {
            plan.limit = Some(limit);
        }

        i += 1;
    }

    if plan.aggregation.is_some() && plan.group_by.is_empty() {
        let (quantitative, categorical): (Vec<String>, Vec<String>) = plan
            .columns
            .iter()
            .cloned()
            .partition(|c| classes.is_quantitative(c));
        if !quantitative.is_empty() && !categorical.is_empty() {
            plan.columns = quantitative;
            plan.group_by = categorical;
        } else {
            plan.group_by = plan.columns.clone();
        }
    }

    plan
}
