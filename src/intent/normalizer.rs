use std::sync::LazyLock;

use regex::Regex;

/// Domain synonym table, applied as literal substring replacements in
/// declaration order.
///
/// Order is load-bearing and intentionally preserved from the reference
/// vocabulary: `"sales"` rewrites to `"total"` which a later entry rewrites to
/// `"SUM"`, and `"greater than or equal to"` is shadowed by the earlier
/// `"greater than"` entry (the remainder `"or equal to"` survives as noise
/// tokens). These overlaps are documented behavior, not accidents to resolve.
pub static SYNONYMS: &[(&str, &str)] = &[
    // NBA vocabulary
    ("players", "player_name"),
    ("how tall", "player_height"),
    ("how heavy", "player_weight"),
    ("performance", "ppg apg net_rating"),
    ("statistics", "ppg apg rpg net_rating oreb_percent dreb_percent"),
    ("points", "ppg"),
    ("rebounds", "rpg"),
    ("assists", "apg"),
    ("scoring", "ppg"),
    ("season", "season"),
    ("draft year", "draft_year"),
    ("drafted in", "draft_year"),
    // Netflix vocabulary
    ("shows", "title"),
    ("movies", "type"),
    ("genres", "listed_in"),
    ("ratings", "rating"),
    // supermarket vocabulary
    ("sales", "total"),
    ("products", "product_line"),
    ("cost", "cogs"),
    ("profit", "gross_income"),
    ("customer type", "customer_type"),
    ("payment method", "payment"),
    // general SQL vocabulary
    ("best", "MAX"),
    ("worst", "MIN"),
    ("average", "AVG"),
    ("total", "SUM"),
    ("sum", "SUM"),
    ("greater than", ">"),
    ("greater than or equal to", ">="),
    ("less than", "<"),
    ("less than or equal to", "<="),
];

/// Spelled-out number words replaced with their digit strings at token level.
static NUMBER_WORDS: &[(&str, &str)] = &[
    ("zero", "0"),
    ("one", "1"),
    ("two", "2"),
    ("three", "3"),
    ("four", "4"),
    ("five", "5"),
    ("six", "6"),
    ("seven", "7"),
    ("eight", "8"),
    ("nine", "9"),
    ("ten", "10"),
    ("eleven", "11"),
    ("twelve", "12"),
    ("thirteen", "13"),
    ("fourteen", "14"),
    ("fifteen", "15"),
    ("sixteen", "16"),
    ("seventeen", "17"),
    ("eighteen", "18"),
    ("nineteen", "19"),
    ("twenty", "20"),
];

/// ASCII punctuation stripped from the input. Hyphen and underscore are kept
/// so identifiers like `net_rating` and date-like `2020-01` survive.
const STRIPPED_PUNCTUATION: &str = "!\"#$%&'()*+,./:;<=>?@[\\]^`{|}~";

/// Rewrites a contiguous year+month digit run (`202001`) into dashed form
/// (`2020-01`). Best-effort season/date heuristic: it also rewrites unrelated
/// 6-digit quantities, which is accepted behavior.
static YEAR_MONTH_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{4})(\d{2})").expect("year-month regex is valid"));

/// Normalize a raw sentence into an ordered sequence of tokens.
///
/// Pipeline, in order: lowercase, punctuation stripping, year-month digit-run
/// reformatting, ordered synonym substitution, whitespace splitting, and
/// number-word-to-digit conversion. Never fails: empty input yields an empty
/// sequence (callers treat that as an unidentified intent downstream).
pub fn normalize(input: &str) -> Vec<String> {
    let lowered = input.to_lowercase();
    let stripped: String = lowered
        .chars()
        .filter(|c| !STRIPPED_PUNCTUATION.contains(*c))
        .collect();
    let mut text = YEAR_MONTH_RUN.replace_all(&stripped, "$1-$2").into_owned();

    for (phrase, replacement) in SYNONYMS {
        text = text.replace(phrase, replacement);
    }

    text.split_whitespace()
        .map(|token| {
            NUMBER_WORDS
                .iter()
                .find(|(word, _)| token == *word)
                .map_or_else(|| token.to_string(), |(_, digits)| (*digits).to_string())
        })
        .collect()
}
