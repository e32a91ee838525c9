/// Token-scan driver producing a [`plan::QueryPlan`] from normalized tokens.
pub mod matcher;
/// Lexical normalization: punctuation, dates, synonyms, number words.
pub mod normalizer;
/// Structured query plan sitting between intent matching and SQL rendering.
pub mod plan;
/// Individual token-pattern recognizers probed in fixed priority order.
pub mod recognizers;
