//! CLI entry point for page-mnemonics
//!
//! Loads a TOML page description and shows which mnemonic each visible
//! action would get, simulates a mnemonic keypress, or lists the page's
//! standard shortcuts.

use clap::{Parser, Subcommand};
use colored::*;
use page_mnemonics::config::OverlayConfig;
use page_mnemonics::overlay::{BindingRegistry, Key, KeyEvent, SessionController, SharedRegistry};
use page_mnemonics::surface::{Activation, PageChrome, PageLayout};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "page-mnemonics")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to overlay config (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the mnemonic assigned to each visible action
    Assign {
        /// Path to page description (TOML)
        #[arg(short, long)]
        page: PathBuf,
    },

    /// Hold the modifier, release KEY, and report what it triggered
    Press {
        /// Path to page description (TOML)
        #[arg(short, long)]
        page: PathBuf,

        /// Mnemonic character to release while the modifier is held
        key: char,
    },

    /// List standard shortcuts declared by menu items
    Shortcuts {
        /// Path to page description (TOML)
        #[arg(short, long)]
        page: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => OverlayConfig::load(&expand(path)?)?,
        None => OverlayConfig::default(),
    };

    match cli.command {
        Commands::Assign { page } => show_assignments(&page, config)?,
        Commands::Press { page, key } => press_mnemonic(&page, config, key)?,
        Commands::Shortcuts { page } => list_shortcuts(&page)?,
    }

    Ok(())
}

/// Expand tilde in path
fn expand(path: &Path) -> anyhow::Result<PathBuf> {
    let expanded = shellexpand::tilde(
        path.to_str()
            .ok_or_else(|| anyhow::anyhow!("Invalid path encoding"))?,
    );
    Ok(PathBuf::from(expanded.as_ref()))
}

/// Load a page description and build it against a fresh registry
fn load_page(page: &Path) -> anyhow::Result<(SharedRegistry, PageChrome)> {
    let path = expand(page)?;
    println!("{} Loading page: {}", "→".cyan(), path.display());

    let layout = PageLayout::load(&path)?;
    let registry = BindingRegistry::shared();
    let chrome = layout.build(registry.clone());
    Ok((registry, chrome))
}

fn modifier_event(controller: &SessionController, down: bool) -> KeyEvent {
    let key = Key::Modifier(controller.config().modifier);
    if down {
        KeyEvent::down(key)
    } else {
        KeyEvent::up(key)
    }
}

/// Print every assignment of one overlay session
fn show_assignments(page: &Path, config: OverlayConfig) -> anyhow::Result<()> {
    let (_registry, mut chrome) = load_page(page)?;
    let mut controller = chrome.session_controller(config);

    let press = modifier_event(&controller, true);
    controller.handle_key(chrome.surface_mut(), &press);

    let assignments = controller.assignments();
    if assignments.is_empty() {
        println!("{}", "No visible actions to underline".yellow());
    } else {
        println!("{} {} mnemonics assigned\n", "✓".green(), assignments.len());
    }

    for assignment in assignments {
        let Some(element) = chrome.surface().get(assignment.element) else {
            continue;
        };
        println!(
            "  {} {} {}",
            format!("{:<16}", assignment.combo.to_string()).cyan().bold(),
            format!("{:<13}", assignment.category.to_string()).dimmed(),
            element.render_html().trim(),
        );
    }

    let release = modifier_event(&controller, false);
    controller.handle_key(chrome.surface_mut(), &release);
    Ok(())
}

/// Simulate modifier down, KEY up, modifier up
fn press_mnemonic(page: &Path, config: OverlayConfig, key: char) -> anyhow::Result<()> {
    let (_registry, mut chrome) = load_page(page)?;
    let mut controller = chrome.session_controller(config);
    let modifier = controller.config().modifier;

    let press = modifier_event(&controller, true);
    controller.handle_key(chrome.surface_mut(), &press);
    let mnemonic = KeyEvent::up(Key::Char(key)).with_modifiers(&[modifier]);
    let response = controller.handle_key(chrome.surface_mut(), &mnemonic);
    let release = modifier_event(&controller, false);
    controller.handle_key(chrome.surface_mut(), &release);

    match response.activation {
        Some(Activation::Clicked(id)) => {
            let label = chrome
                .surface()
                .get(id)
                .map(|e| e.label().to_string())
                .unwrap_or_default();
            println!("{} Clicked {}", "✓".green(), label.bold());
        }
        Some(Activation::Navigated(href)) => {
            println!("{} Navigated to {}", "✓".green(), href.bold());
        }
        None => {
            println!("{} No action bound to {}+{}", "✗".red(), modifier, key);
            std::process::exit(1);
        }
    }

    Ok(())
}

/// List standard shortcuts registered while building the page
fn list_shortcuts(page: &Path) -> anyhow::Result<()> {
    let (registry, _chrome) = load_page(page)?;
    let registry = registry.borrow();

    for binding in registry.standard_bindings() {
        println!("{} → {}", binding.shortcut.cyan().bold(), binding.label.green());
    }

    println!("\n{} Total: {} shortcuts", "✓".green(), registry.standard_len());
    Ok(())
}
