//! Browse the UML diagram reference catalog from the terminal.
//!
//! Usage:
//!   uml-catalog list
//!   uml-catalog show class
//!   uml-catalog show sequence --json
//!   uml-catalog export activity --out /tmp/activity
//!   uml-catalog validate --file catalogs/uml_reference_v1.json
//!
//! Unknown diagram ids are not errors: `show` and `export` print the landing
//! menu instead, the same way a request for an unknown page lands on the index.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::{LevelFilter, debug, info};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use umlcatalog::{CatalogSource, CatalogStore, DEFAULT_VIEW, DiagramType, Resolution, Resolver};

#[derive(Parser, Debug)]
#[command(name = "uml-catalog")]
#[command(about = "Reference catalog of UML diagram types")]
struct Cli {
    /// Log level (off, error, warn, info, debug, trace).
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,
    /// Catalog document to use instead of the bundled one (overrides UML_CATALOG_PATH).
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the landing menu: every diagram id and title in catalog order.
    List {
        #[arg(long)]
        json: bool,
    },
    /// Print one diagram type.
    Show {
        id: String,
        #[arg(long)]
        json: bool,
    },
    /// Write a diagram type's notation and example visuals as standalone SVG files.
    Export {
        id: String,
        #[arg(long)]
        out: PathBuf,
    },
    /// Validate a catalog document without serving it.
    Validate {
        /// Document to check; defaults to the active catalog source.
        #[arg(long)]
        file: Option<PathBuf>,
    },
}

#[derive(Serialize)]
struct MenuEntry<'a> {
    id: &'a str,
    title: &'a str,
}

fn main() {
    let cli = Cli::parse();

    let log_level = LevelFilter::from_str(&cli.log_level).unwrap_or_else(|_| {
        eprintln!("Invalid log level: {}. Using 'warn' instead.", cli.log_level);
        LevelFilter::Warn
    });
    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .init();
    debug!(cli:?; "Parsed arguments");

    if let Err(err) = run(cli) {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let source = CatalogSource::resolve(cli.catalog);
    if let Command::Validate { file } = &cli.command {
        let source = file.clone().map_or(source, CatalogSource::Path);
        let store = source.load().context("catalog definition is invalid")?;
        println!("ok: {} ({} diagram types)", store.key().0, store.len());
        return Ok(());
    }

    // The bundled catalog goes through the process-wide handle; a document
    // from disk stays private to this run.
    let private;
    let store: &CatalogStore = match &source {
        CatalogSource::Bundled => umlcatalog::initialize().context("loading catalog")?,
        CatalogSource::Path(_) => {
            private = source.load().context("loading catalog")?;
            &private
        }
    };
    info!(source:?; "catalog loaded");
    let resolver = Resolver::new(store);

    match cli.command {
        Command::List { json } => print_menu(store, json),
        Command::Show { id, json } => match resolver.resolve(&id) {
            Resolution::Found(diagram) => print_diagram(diagram, json),
            Resolution::Fallback => print_menu(store, json),
        },
        Command::Export { id, out } => match resolver.resolve(&id) {
            Resolution::Found(diagram) => export_diagram(diagram, &out),
            Resolution::Fallback => print_menu(store, false),
        },
        // Validated above without publishing anything.
        Command::Validate { .. } => Ok(()),
    }
}

fn print_menu(store: &CatalogStore, json: bool) -> Result<()> {
    let menu = store.menu();
    if json {
        let entries: Vec<MenuEntry<'_>> = menu
            .into_iter()
            .map(|(id, title)| MenuEntry { id, title })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }
    debug!("rendering {DEFAULT_VIEW} view");
    println!("{}", store.metadata().title);
    for (id, title) in menu {
        println!("{id}\t{title}");
    }
    Ok(())
}

fn print_diagram(diagram: &DiagramType, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(diagram)?);
        return Ok(());
    }
    println!("{} ({})", diagram.title, diagram.id);
    println!();
    println!("What: {}", diagram.description.what);
    println!();
    println!("Why: {}", diagram.description.why);
    println!();
    println!("Notations:");
    for (position, notation) in diagram.notations.iter().enumerate() {
        println!("  {}. {}: {}", position + 1, notation.name, notation.description);
    }
    println!();
    println!("Example: {}", diagram.example.scenario);
    println!("  {}", diagram.example.description);
    Ok(())
}

fn export_diagram(diagram: &DiagramType, out: &Path) -> Result<()> {
    fs::create_dir_all(out).with_context(|| format!("creating {}", out.display()))?;
    for (position, notation) in diagram.notations.iter().enumerate() {
        let path = out.join(format!("{:02}-{}.svg", position + 1, slug(&notation.name)));
        write_fragment(&path, &notation.visual)?;
    }
    write_fragment(&out.join("example.svg"), &diagram.example.visual)?;
    println!(
        "wrote {} files to {}",
        diagram.notations.len() + 1,
        out.display()
    );
    Ok(())
}

fn write_fragment(path: &Path, markup: &str) -> Result<()> {
    fs::write(path, markup).with_context(|| format!("writing {}", path.display()))
}

fn slug(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.ends_with('-') {
            slug.push('-');
        }
    }
    slug.trim_matches('-').to_string()
}
