//! Sitesmith CLI
//!
//! Resolves a business category into a renderer-ready site manifest and
//! prints it as JSON. Catalogs default to the built-in definitions and can be
//! swapped for TOML files.
//!
//! Usage:
//!   sitesmith restaurant
//!   sitesmith restaurant -k luxury,elegant
//!   sitesmith ecommerce --overrides overrides.json --stats
//!   sitesmith --list

use std::fs;
use std::path::PathBuf;
use std::process::exit;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use sitesmith::{AdHocOverride, BlockLibrary, CategoryCatalog, ManifestResolver};

#[derive(Parser)]
#[command(name = "sitesmith")]
#[command(about = "Resolve business-category site manifests")]
struct Cli {
    /// Category to resolve (e.g. restaurant, ecommerce, portfolio)
    category: Option<String>,

    /// Block catalog TOML file (defaults to the built-in blocks)
    #[arg(short, long)]
    blocks: Option<PathBuf>,

    /// Category catalog TOML file (defaults to the built-in categories)
    #[arg(short = 'c', long)]
    categories: Option<PathBuf>,

    /// Style keywords steering variant selection
    #[arg(short, long, value_delimiter = ',')]
    keywords: Vec<String>,

    /// JSON file with an array of ad-hoc overrides
    #[arg(short, long)]
    overrides: Option<PathBuf>,

    /// Print the block-id -> template projection instead of the manifest
    #[arg(short, long)]
    templates: bool,

    /// Print the processing trace to stderr
    #[arg(long)]
    stats: bool,

    /// List available categories and blocks
    #[arg(short, long)]
    list: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let library = match &cli.blocks {
        Some(path) => match BlockLibrary::from_file(path) {
            Ok(library) => library,
            Err(e) => {
                eprintln!("Error loading block catalog '{}': {}", path.display(), e);
                exit(1);
            }
        },
        None => BlockLibrary::builtin(),
    };

    let catalog = match &cli.categories {
        Some(path) => match CategoryCatalog::from_file(path) {
            Ok(catalog) => catalog,
            Err(e) => {
                eprintln!("Error loading category catalog '{}': {}", path.display(), e);
                exit(1);
            }
        },
        None => CategoryCatalog::builtin(),
    };

    if cli.list {
        let mut categories: Vec<&str> = catalog.ids().collect();
        categories.sort_unstable();
        println!("Categories:");
        for id in categories {
            println!("  {id}");
        }

        let mut blocks: Vec<&str> = library.ids().collect();
        blocks.sort_unstable();
        println!("Blocks:");
        for id in blocks {
            let variants: Vec<&str> = library
                .get(id)
                .map(|b| b.variants.iter().map(|v| v.id.as_str()).collect())
                .unwrap_or_default();
            if variants.is_empty() {
                println!("  {id}");
            } else {
                println!("  {id} (variants: {})", variants.join(", "));
            }
        }
        return;
    }

    let Some(category) = &cli.category else {
        eprintln!("Error: no category given (try --list for available categories)");
        exit(1);
    };

    let ad_hoc: Vec<AdHocOverride> = match &cli.overrides {
        Some(path) => {
            let content = match fs::read_to_string(path) {
                Ok(content) => content,
                Err(e) => {
                    eprintln!("Error reading overrides file '{}': {}", path.display(), e);
                    exit(1);
                }
            };
            match serde_json::from_str(&content) {
                Ok(overrides) => overrides,
                Err(e) => {
                    eprintln!("Error parsing overrides file '{}': {}", path.display(), e);
                    exit(1);
                }
            }
        }
        None => Vec::new(),
    };

    let resolver = ManifestResolver::new(library, catalog);
    let resolution = match resolver.resolve(category, &ad_hoc, &cli.keywords) {
        Ok(resolution) => resolution,
        Err(e) => {
            eprintln!("Error: {e}");
            exit(1);
        }
    };

    if cli.stats {
        match serde_json::to_string_pretty(&resolution.stats) {
            Ok(json) => eprintln!("{json}"),
            Err(e) => eprintln!("Error serializing stats: {e}"),
        }
    }

    let output = if cli.templates {
        serde_json::to_string_pretty(&resolution.template_map)
    } else {
        serde_json::to_string_pretty(&resolution.manifest)
    };

    match output {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("Error serializing output: {e}");
            exit(1);
        }
    }
}
