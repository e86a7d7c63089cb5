use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use crate::config::{PickerOptions, init_options};
use crate::emoji::{Category, EmojiRecord, dataset};
use crate::history::HistoryOutcome;
use crate::picker::EmojiPicker;
use crate::selection::RankedSelection;
use crate::storage::FileStore;
use crate::view::ViewItem;

/// Nominal cell width used to give the picker a layout width.
const CLI_CELL_WIDTH: f32 = 40.0;

#[derive(Parser)]
#[command(name = "emoji-selector")]
#[command(about = "Browse, search and pick emoji from the terminal")]
pub struct Cli {
    /// emoji-datasource JSON file to use instead of the bundled dataset
    #[arg(long, global = true)]
    pub dataset: Option<PathBuf>,

    /// Directory for stored history (defaults to the platform data dir)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Options file (defaults to ~/.config/emoji-selector/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the emoji of a category
    List {
        /// Category to show (defaults to the configured one)
        #[arg(short, long, value_enum)]
        category: Option<Category>,
        /// Show at most this many emoji of a single category
        #[arg(short, long)]
        limit: Option<usize>,
        /// Reverse the order
        #[arg(long)]
        reverse: bool,
        /// Print one emoji per line with its code and aliases
        #[arg(long)]
        names: bool,
    },
    /// Search all emoji by alias
    Search {
        query: String,
        /// Print one emoji per line with its code and aliases
        #[arg(long)]
        names: bool,
    },
    /// Pick an emoji by code point (e.g. 1F600), recording it in history
    Pick {
        unified: String,
        /// Ranked selection JSON file; updated in place after the pick
        #[arg(long)]
        ranked: Option<PathBuf>,
    },
    /// Show recently used emoji
    History {
        /// Print one emoji per line with its code and aliases
        #[arg(long)]
        names: bool,
    },
}

/// Run a CLI invocation.
pub async fn run(cli: Cli) -> Result<()> {
    let mut options = init_options(cli.config.as_deref())?;
    // The command-line picker always keeps history
    options.show_history = true;

    let records = load_records(cli.dataset.as_deref())?;
    let store = match &cli.data_dir {
        Some(dir) => FileStore::new(dir),
        None => FileStore::default_location()?,
    };

    match cli.command {
        Commands::List {
            category,
            limit,
            reverse,
            names,
        } => {
            apply_list_args(&mut options, category, limit, reverse)?;
            let picker = mount(options, store, &records).await?;
            print_items(&picker.view(), picker.options().columns, names);
        }
        Commands::Search { query, names } => {
            let mut picker = mount(options, store, &records).await?;
            picker.set_search_query(query);
            print_items(&picker.view(), picker.options().columns, names);
        }
        Commands::Pick { unified, ranked } => {
            let mut picker = mount(options, store, &records).await?;

            if let Some(path) = &ranked {
                picker.set_ranked_selection(Some(read_ranked(path)?));
            }

            let record = picker
                .catalog()
                .find(&unified)
                .cloned()
                .with_context(|| format!("Unknown emoji '{}'", unified))?;

            let selection = picker.select(&record).await?;
            println!("{}", selection.glyph);

            if let HistoryOutcome::WriteFailed(e) = &selection.history {
                eprintln!("warning: history not saved: {}", e);
            }

            if let (Some(path), Some(updated)) = (&ranked, &selection.ranked_selection) {
                write_ranked(path, updated)?;
            }
        }
        Commands::History { names } => {
            let mut picker = mount(options, store, &records).await?;
            picker.select_category(Category::History);
            print_items(&picker.view(), 1, names);
        }
    }

    Ok(())
}

/// Fold `list` arguments into the options.
///
/// The `all` and `history` views never cap, so a limit there is rejected.
fn apply_list_args(
    options: &mut PickerOptions,
    category: Option<Category>,
    limit: Option<usize>,
    reverse: bool,
) -> Result<()> {
    if let Some(category) = category {
        options.category = category;
    }
    if limit.is_some() {
        if matches!(options.category, Category::All | Category::History) {
            bail!(
                "--limit applies to a single category, not '{}'",
                options.category.key()
            );
        }
        options.number_of_emojis = limit;
    }
    options.reverse_order |= reverse;
    Ok(())
}

/// Create, mount and lay out a picker.
async fn mount(
    options: PickerOptions,
    store: FileStore,
    records: &[EmojiRecord],
) -> Result<EmojiPicker<FileStore>> {
    let width = options.columns.max(1) as f32 * CLI_CELL_WIDTH;
    let mut picker = EmojiPicker::new(options, store);
    picker.mount().await;
    picker.on_layout(width, records)?;
    Ok(picker)
}

fn load_records(path: Option<&Path>) -> Result<Vec<EmojiRecord>> {
    match path {
        Some(path) => Ok(dataset::load_dataset(path)?),
        None => Ok(dataset::bundled().to_vec()),
    }
}

fn read_ranked(path: &Path) -> Result<RankedSelection> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read ranked selection {:?}", path))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse ranked selection {:?}", path))
}

fn write_ranked(path: &Path, ranked: &RankedSelection) -> Result<()> {
    let content = serde_json::to_string_pretty(ranked)?;
    std::fs::write(path, content)
        .with_context(|| format!("Failed to write ranked selection {:?}", path))
}

fn print_items(items: &[ViewItem<'_>], columns: usize, names: bool) {
    if items.is_empty() {
        println!("No emojis found");
        return;
    }

    if names {
        for item in items {
            let glyph = item.emoji.glyph().unwrap_or_else(|_| "?".to_string());
            let value = item
                .annotation
                .as_ref()
                .map(|a| format!(" [{}{}]", a.value, if a.selected { "*" } else { "" }))
                .unwrap_or_default();
            println!(
                "{}\t{}\t{}{}",
                glyph,
                item.key,
                item.emoji.short_names.join(", "),
                value
            );
        }
        return;
    }

    for row in items.chunks(columns.max(1)) {
        let line: Vec<String> = row
            .iter()
            .map(|item| match item.emoji.glyph() {
                Ok(glyph) => glyph,
                Err(e) => {
                    tracing::warn!("Skipping undecodable emoji: {}", e);
                    "?".to_string()
                }
            })
            .collect();
        println!("{}", line.join(" "));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_limit_rejected_for_all() {
        let mut options = PickerOptions::default();
        assert!(apply_list_args(&mut options, None, Some(3), false).is_err());
        assert_eq!(options.number_of_emojis, None);
    }

    #[test]
    fn test_list_limit_applies_to_category() {
        let mut options = PickerOptions::default();
        apply_list_args(&mut options, Some(Category::Food), Some(3), true).unwrap();
        assert_eq!(options.category, Category::Food);
        assert_eq!(options.number_of_emojis, Some(3));
        assert!(options.reverse_order);
    }
}
