//! vlist demo - Entry Point

use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use vlist::config::CliOverrides;
use vlist::widgets::{parse_document, SAMPLE_DOCUMENT};
use vlist::VirtualList;

/// vlist - browse a text file as a virtualized list of paragraphs
#[derive(Parser, Debug)]
#[command(name = "vlist")]
#[command(version)]
#[command(about = "Browse a text file as a lazily rendered, selectable list of paragraphs")]
pub struct Args {
    /// Text file to show (a built-in sample if not provided)
    pub file: Option<PathBuf>,

    /// Anchor the list at the bottom, newest content last
    #[arg(short, long)]
    pub backward: bool,

    /// Blank lines between items
    #[arg(short, long)]
    pub gap: Option<usize>,

    /// Wrap item navigation around the ends of the list
    #[arg(short, long)]
    pub wrap: bool,

    /// Enable mouse wheel and text selection
    #[arg(short, long)]
    pub mouse: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Args {
    /// Overrides for the flags given on the command line. Flags that were
    /// not passed leave the configured value alone.
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            backward: self.backward.then_some(true),
            gap: self.gap,
            wrap_navigation: self.wrap.then_some(true),
            enable_mouse: self.mouse.then_some(true),
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Defaults → Config File → CLI Args
    let config = {
        let config_file = vlist::config::load_config_with_precedence(args.config.clone())?;
        let merged = vlist::config::merge_config(config_file);
        vlist::config::apply_cli_overrides(merged, &args.overrides())
    };

    vlist::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    let source = match &args.file {
        Some(path) => std::fs::read_to_string(path)?,
        None => SAMPLE_DOCUMENT.to_owned(),
    };
    let items = parse_document(&source);
    info!(items = items.len(), file = ?args.file, "document loaded");

    let selected = vlist::app::run(VirtualList::new(items, config.list))?;
    if !selected.is_empty() {
        println!("{selected}");
    }

    Ok(())
}
