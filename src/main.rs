//! CLI entry point for `nl2sql`.

use std::path::PathBuf;
use std::process;
use std::str::FromStr;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use nl2sql::catalog::classifier::classify_columns;
use nl2sql::catalog::infer::columns_from_csv;
use nl2sql::catalog::source::{CatalogSource, StaticCatalog};
use nl2sql::generator::templates::Construct;
use nl2sql::intent::normalizer;
use nl2sql::{extract_intent, generate_queries_by_construct, generate_systematic_queries};

#[derive(Parser)]
#[command(
    name = "nl2sql",
    about = "Translate natural-language questions about a tabular dataset into SQL"
)]
struct Cli {
    /// JSON schema file mapping table names to column lists
    #[arg(long, required_unless_present = "csv", conflicts_with = "csv")]
    schema: Option<PathBuf>,

    /// CSV file whose header and sampled rows define the table's columns
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Table the question or sample request targets
    #[arg(long)]
    table: String,

    /// Natural-language question to translate into SQL
    #[arg(long, required_unless_present = "samples", conflicts_with = "samples")]
    question: Option<String>,

    /// Generate sample queries for the table instead of answering a question
    #[arg(long)]
    samples: bool,

    /// Restrict sample queries to one SQL construct (e.g. "group by")
    #[arg(long, requires = "samples")]
    construct: Option<String>,

    /// RNG seed for reproducible sample selection
    #[arg(long)]
    seed: Option<u64>,

    /// Print verbose diagnostics
    #[arg(long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let catalog = build_catalog(&cli);

    if cli.verbose {
        if let Some(columns) = catalog.columns(&cli.table) {
            let classes = classify_columns(&columns);
            eprintln!(
                "Table '{}': quantitative {:?}, categorical {:?}",
                cli.table, classes.quantitative, classes.categorical
            );
        } else {
            eprintln!("Table '{}' not found in the catalog", cli.table);
        }
    }

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    if let Some(question) = &cli.question {
        if cli.verbose {
            eprintln!("Tokens: {:?}", normalizer::normalize(question));
        }
        match extract_intent(question, &cli.table, &catalog) {
            Ok(intent) => {
                println!("Description: {}", intent.description);
                println!("Query: {}", intent.sql_query);
            }
            Err(e) => {
                eprintln!("Error: {e}");
                process::exit(1);
            }
        }
        return;
    }

    let queries = match &cli.construct {
        Some(construct) => {
            if let Ok(parsed) = Construct::from_str(construct) {
                println!("{}", parsed.explainer());
                println!();
            }
            generate_queries_by_construct(&cli.table, &catalog, construct, &mut rng)
        }
        None => generate_systematic_queries(&cli.table, &catalog, &mut rng),
    };

    if queries.is_empty() {
        eprintln!("No sample queries available for table '{}'", cli.table);
        process::exit(1);
    }
    for query in &queries {
        println!("Description: {}", query.description);
        println!("Query: {}", query.query);
        println!();
    }
}

/// Load the column catalog from the JSON schema file, or build one by type
/// inference over the CSV file's header and sampled rows.
fn build_catalog(cli: &Cli) -> StaticCatalog {
    if let Some(schema_path) = &cli.schema {
        let content = match std::fs::read_to_string(schema_path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error reading {}: {e}", schema_path.display());
                process::exit(2);
            }
        };
        match StaticCatalog::from_json(&content) {
            Ok(catalog) => catalog,
            Err(e) => {
                eprintln!("Error parsing schema: {e}");
                process::exit(2);
            }
        }
    } else if let Some(csv_path) = &cli.csv {
        let file = match std::fs::File::open(csv_path) {
            Ok(file) => file,
            Err(e) => {
                eprintln!("Error opening {}: {e}", csv_path.display());
                process::exit(2);
            }
        };
        match columns_from_csv(file) {
            Ok(columns) => {
                let mut catalog = StaticCatalog::new();
                catalog.insert_table(&cli.table, columns);
                catalog
            }
            Err(e) => {
                eprintln!("Error inferring columns: {e}");
                process::exit(2);
            }
        }
    } else {
        // clap enforces schema-or-csv; unreachable in practice.
        eprintln!("No schema or CSV input provided");
        process::exit(2);
    }
}
