use clap::Parser;

mod cli;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Related {
            corpus,
            slug,
            limit,
            json,
        } => cli::run_related(&corpus, &slug, limit, json),
        Commands::Search {
            corpus,
            query,
            limit,
            json,
        } => cli::run_search(&corpus, &query, limit, json),
        Commands::Tags {
            corpus,
            limit,
            json,
        } => cli::run_tags(&corpus, limit, json),
        Commands::Categories { corpus, json } => cli::run_categories(&corpus, json),
    };

    if let Err(e) = result {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}
