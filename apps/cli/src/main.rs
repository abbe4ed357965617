use anyhow::{Context, Result};
use clap::Parser;
use client_core::{
    load_settings, DataLocation, DirectoryDocument, ListEntry, QueryOrchestrator, SelectOption,
};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "people", about = "List friends and family filtered by a name prefix")]
struct Args {
    /// Dataset URL or path; defaults to the configured data source.
    #[arg(long)]
    source: Option<String>,
    /// Case-insensitive prefix of a first name, last name, relation or "first last".
    #[arg(long, default_value = "")]
    filter: String,
    /// Print entries as JSON instead of aligned columns.
    #[arg(long)]
    json: bool,
    /// Also print the first-name and last-name dropdown options.
    #[arg(long)]
    options: bool,
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    entries: &'a [ListEntry],
    #[serde(skip_serializing_if = "Option::is_none")]
    first_names: Option<&'a [SelectOption]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    last_names: Option<&'a [SelectOption]>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let settings = load_settings();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&settings.log_filter))
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    let raw_source = args.source.unwrap_or(settings.data_source);
    let base_dir = std::env::current_dir().context("failed to resolve working directory")?;
    let location = DataLocation::resolve(&raw_source, &base_dir);
    tracing::debug!(%location, "resolved people dataset");

    let orchestrator = QueryOrchestrator::new(location.clone().into_source());
    orchestrator
        .run_query(&args.filter.to_lowercase())
        .await
        .with_context(|| format!("failed to list people from {location}"))?;
    let document = orchestrator.document().await;

    if args.json {
        let output = JsonOutput {
            entries: document.list.entries(),
            first_names: args
                .options
                .then(|| document.selectors.first_names.options()),
            last_names: args
                .options
                .then(|| document.selectors.last_names.options()),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print!("{}", format_table(document.list.entries()));
        if args.options {
            print_options(&document);
        }
    }

    Ok(())
}

fn format_table(entries: &[ListEntry]) -> String {
    let mut widths = [0usize; 3];
    for entry in entries {
        for (width, cell) in widths.iter_mut().zip(&entry.cells) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    for entry in entries {
        let line = format!(
            "{:<w0$}  {:<w1$}  {}",
            entry.cells[0],
            entry.cells[1],
            entry.cells[2],
            w0 = widths[0],
            w1 = widths[1],
        );
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

fn print_options(document: &DirectoryDocument) {
    let join = |options: &[SelectOption]| {
        options
            .iter()
            .map(|option| option.label.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    };
    println!();
    println!(
        "first names: {}",
        join(document.selectors.first_names.options())
    );
    println!("last names: {}", join(document.selectors.last_names.options()));
}
