/// Renders a completed query plan into SQL text and a description.
pub mod renderer;
/// Template expansion, deduplication, and bounded random sampling.
pub mod samples;
/// Static sample-query template libraries and the SQL construct categories.
pub mod templates;
