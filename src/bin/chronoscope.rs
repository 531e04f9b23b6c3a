use anyhow::Context;
use chronoscope::{
    ArcFilter, Catalog, CatalogSet, Character, Config, Renderer, Scene, ViewBuilder, ViewSummary,
    catalog,
};
use clap::{Parser, ValueEnum};
use log::info;
use serde::Serialize;
use std::io::IsTerminal;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Shape of `--format json` output.
#[derive(Serialize)]
struct JsonOutput<'a> {
    summary: ViewSummary,
    scenes: Vec<&'a Scene>,
}

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Character whose chronology to show (icarus or vega)
    #[arg(short, long)]
    character: Option<Character>,

    /// Case-insensitive text to search for in ids, titles, summaries, arcs and tags
    #[arg(short, long)]
    search: Option<String>,

    /// Arc to show, or "All"
    #[arg(short, long)]
    arc: Option<String>,

    /// Hide scenes revealed below this percentage
    #[arg(short, long)]
    min_reveal: Option<i32>,

    /// Sort by reveal percentage, highest first
    #[arg(short, long)]
    descending: bool,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// JSON or TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// JSON scene list replacing the selected character's built-in catalog
    #[arg(long)]
    catalog: Option<PathBuf>,

    #[arg(long)]
    no_color: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::from_path(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => Config::default(),
    };
    if let Some(character) = args.character {
        config.initial.character = character;
    }
    let active = config.initial.character;
    let color = config.color && !args.no_color && std::io::stdout().is_terminal();

    // A custom catalog replaces only the active character's built-in one.
    let custom = match &args.catalog {
        Some(path) => {
            info!("Loading {} catalog from {}", active, path.display());
            Some(
                Catalog::from_path(active, path)
                    .with_context(|| format!("Failed to load catalog from {}", path.display()))?,
            )
        }
        None => None,
    };
    let catalogs = match (&custom, active) {
        (Some(custom), Character::Icarus) => CatalogSet::new(custom, catalog::vega())?,
        (Some(custom), Character::Vega) => CatalogSet::new(catalog::icarus(), custom)?,
        (None, _) => CatalogSet::builtin(),
    };

    let mut view = ViewBuilder::new().catalogs(catalogs).config(config).build()?;

    let mut params = view.params().clone();
    if let Some(search) = args.search {
        params = params.with_search(search);
    }
    if let Some(arc) = args.arc.as_deref() {
        params = params.with_arc(ArcFilter::from_label(arc));
    }
    if let Some(min_reveal) = args.min_reveal {
        params = params.with_min_reveal(min_reveal);
    }
    if args.descending {
        params = params.with_sort_ascending(false);
    }
    view.replace(params);

    match args.format {
        OutputFormat::Text => print!("{}", Renderer::new(color).render_view(&view)),
        OutputFormat::Json => {
            let output = JsonOutput {
                summary: view.summary(),
                scenes: view.derived(),
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
