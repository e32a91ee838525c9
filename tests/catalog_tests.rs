use nl2sql::catalog::classifier::{classify_columns, classify_type, ColumnKind};
use nl2sql::catalog::infer::{columns_from_csv, declared_type, infer_column_type, InferredType};
use nl2sql::catalog::source::ColumnMeta;

fn nba_columns() -> Vec<ColumnMeta> {
    vec![
        ColumnMeta::new("player_name", "varchar(255)"),
        ColumnMeta::new("team_abbreviation", "char(3)"),
        ColumnMeta::new("draft_year", "int"),
        ColumnMeta::new("ppg", "decimal(20, 6)"),
        ColumnMeta::new("net_rating", "double"),
        ColumnMeta::new("season", "varchar(10)"),
        ColumnMeta::new("scouting_notes", "json"),
    ]
}

#[test]
fn partition_is_disjoint_and_never_duplicates() {
    let columns = nba_columns();
    let classes = classify_columns(&columns);

    assert!(classes.quantitative.len() + classes.categorical.len() <= columns.len());
    for name in &classes.quantitative {
        assert!(!classes.categorical.contains(name));
    }
    // Unknown base types are dropped, never duplicated into either list.
    assert!(!classes.contains("scouting_notes"));
}

#[test]
fn partition_preserves_catalog_order() {
    let classes = classify_columns(&nba_columns());
    assert_eq!(classes.quantitative, vec!["draft_year", "ppg", "net_rating"]);
    assert_eq!(
        classes.categorical,
        vec!["player_name", "team_abbreviation", "season"]
    );
}

#[test]
fn base_type_matching_is_case_insensitive_and_suffix_blind() {
    assert_eq!(classify_type("BIGINT"), Some(ColumnKind::Quantitative));
    assert_eq!(classify_type("MediumText"), Some(ColumnKind::Categorical));
    assert_eq!(classify_type("time"), Some(ColumnKind::Categorical));
    assert_eq!(classify_type("decimal(10,2)"), Some(ColumnKind::Quantitative));
    assert_eq!(classify_type("geometry(point)"), None);
}

#[test]
fn inference_falls_back_to_text() {
    assert_eq!(
        infer_column_type(&["12", "twelve", "13"]),
        InferredType::Text
    );
    assert_eq!(declared_type(InferredType::Integer, &[]), "INT");
}

#[test]
fn csv_catalog_classifies_through_the_same_rules() {
    let data = "\
city,total,date
Yangon,548.97,2019-01-05
Naypyitaw,80.22,2019-03-08
Mandalay,340.53,2019-03-03
";
    let columns = columns_from_csv(data.as_bytes()).expect("CSV should parse");
    let classes = classify_columns(&columns);
    assert_eq!(classes.quantitative, vec!["total"]);
    assert_eq!(classes.categorical, vec!["city", "date"]);
}
