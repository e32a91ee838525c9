use nl2sql::catalog::classifier::ColumnClasses;
use nl2sql::generator::renderer::render_sql;
use nl2sql::intent::matcher::match_tokens;
use nl2sql::intent::normalizer::normalize;
use nl2sql::intent::plan::{Aggregation, QueryPlan, SortDirection};

fn nba_classes() -> ColumnClasses {
    ColumnClasses {
        quantitative: vec![
            "draft_year".into(),
            "ppg".into(),
            "apg".into(),
            "rpg".into(),
            "net_rating".into(),
        ],
        categorical: vec!["player_name".into(), "season".into()],
    }
}

fn plan_for(question: &str) -> QueryPlan {
    match_tokens(&normalize(question), &nba_classes())
}

#[test]
fn average_by_categorical_column_groups_by_it() {
    let plan = plan_for("average ppg by season");
    assert_eq!(plan.aggregation, Some(Aggregation::Avg));
    assert_eq!(plan.columns, vec!["ppg"]);
    assert_eq!(plan.group_by, vec!["season"]);
    assert_eq!(
        render_sql(&plan, "nba").unwrap(),
        "SELECT AVG(ppg) FROM nba GROUP BY season"
    );
}

#[test]
fn greater_than_condition_resolves_through_synonyms() {
    let plan = plan_for("players with ppg greater than 20");
    assert_eq!(plan.conditions, vec!["ppg > 20"]);
    assert!(plan.columns.contains(&"player_name".to_string()));
    assert_eq!(
        render_sql(&plan, "nba").unwrap(),
        "SELECT player_name, ppg FROM nba WHERE ppg > 20"
    );
}

#[test]
fn fewer_than_and_between_phrases_form_conditions() {
    let plan = plan_for("players with apg fewer than five");
    assert_eq!(plan.conditions, vec!["apg < 5"]);

    let plan = plan_for("players with ppg between 10 and 20");
    assert_eq!(plan.conditions, vec!["ppg BETWEEN 10 AND 20"]);

    let plan = plan_for("players with rpg more than ten");
    assert_eq!(plan.conditions, vec!["rpg > 10"]);
}

#[test]
fn draft_year_followed_by_a_year_becomes_an_equality() {
    let plan = plan_for("players drafted in 2019");
    assert_eq!(plan.conditions, vec!["draft_year = '2019'"]);
    assert!(plan.columns.contains(&"draft_year".to_string()));
}

#[test]
fn season_picks_up_the_preceding_year_month_literal() {
    let plan = plan_for("ppg in the 202021 season");
    assert_eq!(plan.conditions, vec!["season = '2020-21'"]);
    assert!(plan.columns.contains(&"season".to_string()));
}

#[test]
fn highest_and_top_compose_ordering_and_limit() {
    let plan = plan_for("top 5 players with highest ppg");
    assert_eq!(plan.limit, Some(5));
    assert_eq!(plan.order_by, Some(("ppg".to_string(), SortDirection::Desc)));
    assert_eq!(
        render_sql(&plan, "nba").unwrap(),
        "SELECT player_name, ppg FROM nba ORDER BY ppg DESC LIMIT 5"
    );
}

#[test]
fn zero_limit_never_renders_a_limit_clause() {
    let plan = plan_for("top zero players");
    assert_eq!(plan.limit, None);
    assert_eq!(
        render_sql(&plan, "nba").unwrap(),
        "SELECT player_name FROM nba"
    );
}

#[test]
fn lowest_orders_ascending() {
    let plan = plan_for("players with lowest net_rating");
    assert_eq!(
        plan.order_by,
        Some(("net_rating".to_string(), SortDirection::Asc))
    );
}

#[test]
fn last_aggregation_mention_wins() {
    let plan = plan_for("best worst ppg");
    assert_eq!(plan.aggregation, Some(Aggregation::Min));
}

#[test]
fn quantitative_only_aggregation_groups_by_the_target() {
    let plan = plan_for("total ppg");
    assert_eq!(plan.aggregation, Some(Aggregation::Sum));
    assert_eq!(
        render_sql(&plan, "nba").unwrap(),
        "SELECT SUM(ppg) FROM nba GROUP BY ppg"
    );
}

#[test]
fn conditions_on_categorical_columns_are_not_formed() {
    let plan = plan_for("season greater 2020");
    assert!(plan.conditions.is_empty());
    assert_eq!(plan.columns, vec!["season"]);
}
