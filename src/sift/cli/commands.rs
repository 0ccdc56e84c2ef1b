use super::print::{print_config, print_entries, print_messages, print_products};
use super::setup::{Cli, Commands, JournalCommands};
use clap::Parser;
use directories::ProjectDirs;
use sift::api::{ConfigAction, Criterion, FilterQuery, SiftApi};
use sift::catalog;
use sift::error::{Result, SiftError};
use sift::store::fs::FileStore;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

struct AppContext {
    api: SiftApi<FileStore>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Products { .. }) | None => handle_products(&ctx),
        Some(Commands::Filter {
            require,
            exclude,
            any,
            ..
        }) => handle_filter(&ctx, require, exclude, any),
        Some(Commands::Journal { action }) => match action {
            JournalCommands::Add { text } => handle_journal_add(&mut ctx, &text.join(" ")),
            JournalCommands::Remove { key } => handle_journal_remove(&mut ctx, key),
            JournalCommands::List => handle_journal_list(&ctx),
            JournalCommands::Export { destination } => {
                handle_journal_export(&mut ctx, destination.as_deref())
            }
        },
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
    }
}

/// Diagnostics go to stderr. `RUST_LOG` wins unless `--verbose` is given.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("sift=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    // A subscriber may already be installed (e.g. in tests)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = match &cli.data_dir {
        Some(dir) => dir.clone(),
        None => default_data_dir()?,
    };
    tracing::debug!("Using data directory {}", data_dir.display());

    let store = FileStore::new(&data_dir);
    let mut api = SiftApi::new(store, &data_dir);

    if let Some(path) = cli.command.as_ref().and_then(|c| c.catalog()) {
        api = api.with_products(catalog::load(path)?);
    }

    Ok(AppContext { api })
}

fn default_data_dir() -> Result<PathBuf> {
    ProjectDirs::from("com", "sift", "sift")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| {
            SiftError::invalid("could not determine a data directory; pass --data-dir")
        })
}

fn handle_products(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_products()?;
    print_products(&result.listed_products);
    print_messages(&result.messages);
    Ok(())
}

fn handle_filter(
    ctx: &AppContext,
    require: Vec<Criterion>,
    exclude: Vec<Criterion>,
    any: bool,
) -> Result<()> {
    let query = FilterQuery {
        require,
        any,
        exclude,
    };
    let result = ctx.api.filter_products(&query)?;
    print_messages(&result.messages);
    print_products(&result.listed_products);
    Ok(())
}

fn handle_journal_add(ctx: &mut AppContext, text: &str) -> Result<()> {
    let result = ctx.api.add_entry(text)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_journal_remove(ctx: &mut AppContext, key: u64) -> Result<()> {
    let result = ctx.api.remove_entry(key)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_journal_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_entries()?;
    print_entries(&result.entries);
    Ok(())
}

fn handle_journal_export(ctx: &mut AppContext, destination: Option<&Path>) -> Result<()> {
    // Paths typed by the user are relative to where they ran the command
    let destination = match destination {
        Some(path) if path.is_relative() => Some(std::env::current_dir()?.join(path)),
        Some(path) => Some(path.to_path_buf()),
        None => None,
    };
    let destination = destination.map(|p| p.to_string_lossy().into_owned());

    let result = ctx.api.export_journal(destination.as_deref())?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) if k == "catalog" && !v.trim().is_empty() => {
            // Catalog paths typed by the user are relative to where they ran the command
            let path = Path::new(&v);
            let path = if path.is_relative() {
                std::env::current_dir()?.join(path)
            } else {
                path.to_path_buf()
            };
            ConfigAction::Set(k, path.to_string_lossy().into_owned())
        }
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        if result.messages.is_empty() {
            print_config(config);
        }
    }
    print_messages(&result.messages);
    Ok(())
}
