use nl2sql::catalog::source::StaticCatalog;
use nl2sql::{extract_intent, ExtractError};

fn nba_catalog() -> StaticCatalog {
    StaticCatalog::from_json(
        r#"{
            "nba": [
                { "name": "player_name", "data_type": "varchar(255)" },
                { "name": "player_height", "data_type": "decimal(20, 6)" },
                { "name": "player_weight", "data_type": "decimal(20, 6)" },
                { "name": "draft_year", "data_type": "int" },
                { "name": "ppg", "data_type": "decimal(20, 6)" },
                { "name": "apg", "data_type": "decimal(20, 6)" },
                { "name": "net_rating", "data_type": "decimal(20, 6)" },
                { "name": "season", "data_type": "varchar(10)" }
            ]
        }"#,
    )
    .expect("schema should parse")
}

#[test]
fn question_to_sql_pipeline() {
    let catalog = nba_catalog();

    let intent = extract_intent("average ppg by season", "nba", &catalog).unwrap();
    assert_eq!(intent.sql_query, "SELECT AVG(ppg) FROM nba GROUP BY season");

    let intent = extract_intent("players with ppg greater than 20", "nba", &catalog).unwrap();
    assert_eq!(
        intent.sql_query,
        "SELECT player_name, ppg FROM nba WHERE ppg > 20"
    );
    assert_eq!(
        intent.description,
        "query player_name, ppg with these filters: ppg > 20"
    );
}

#[test]
fn synonym_phrases_reach_the_right_columns() {
    let catalog = nba_catalog();

    let intent = extract_intent("how tall are players", "nba", &catalog).unwrap();
    assert_eq!(
        intent.sql_query,
        "SELECT player_height, player_name FROM nba"
    );

    let intent = extract_intent("players drafted in 2019", "nba", &catalog).unwrap();
    assert_eq!(
        intent.sql_query,
        "SELECT player_name, draft_year FROM nba WHERE draft_year = '2019'"
    );
}

#[test]
fn unrecognizable_input_is_an_unidentified_intent() {
    let catalog = nba_catalog();
    let err = extract_intent("asdkjaslkdj", "nba", &catalog).unwrap_err();
    assert_eq!(err, ExtractError::UnidentifiedIntent);
    assert_eq!(
        err.to_string(),
        "Could not identify columns or aggregation in your query."
    );
}

#[test]
fn unknown_tables_have_no_columns_to_match() {
    let catalog = nba_catalog();
    let err = extract_intent("average ppg by season", "mlb", &catalog).unwrap_err();
    // "average" still registers an aggregation, but with no catalog to match,
    // rendering has no target column.
    assert!(matches!(err, ExtractError::Synthesis(_)));
    // The synthesis message surfaces bare, with no added prefix.
    assert_eq!(
        err.to_string(),
        "aggregation requires at least one selected column"
    );
}

#[test]
fn raw_select_input_bypasses_the_pipeline() {
    let catalog = nba_catalog();

    let intent = extract_intent("SELECT * FROM x", "nba", &catalog).unwrap();
    assert_eq!(intent.sql_query, "SELECT * FROM x");
    assert_eq!(intent.description, "execute your query in the nba dataset");

    let intent = extract_intent("  select ppg from nba limit 1  ", "nba", &catalog).unwrap();
    assert_eq!(intent.sql_query, "select ppg from nba limit 1");
}

#[test]
fn empty_input_is_an_unidentified_intent() {
    let catalog = nba_catalog();
    assert_eq!(
        extract_intent("", "nba", &catalog).unwrap_err(),
        ExtractError::UnidentifiedIntent
    );
}
