//! CLI entry point for hotkey-autotype
//!
//! Provides command-line access to config validation, hotkey parsing and
//! keystroke encoding. This is the only place that decides to exit: every
//! library error propagates up to here.

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use colored::*;
use hotkey_autotype::{
    config::{ConfigManager, ConfigStore, ConfigWatcher, PayloadKind, TextEncoding},
    core::{keystroke, parse_hotkey},
    logging,
};
use std::{
    path::{Path, PathBuf},
    thread,
    time::Duration,
};

const DEFAULT_CONFIG: &str = "~/.config/hotkey-autotype/config.txt";

#[derive(Parser)]
#[command(name = "hotkey-autotype")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the config file
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG)]
    config: PathBuf,

    /// Config file shape
    #[arg(short, long, global = true, value_enum, default_value_t = KindArg::Literal)]
    kind: KindArg,

    /// Config file text encoding
    #[arg(short, long, global = true, value_enum, default_value_t = EncodingArg::Auto)]
    encoding: EncodingArg,

    /// Increase log verbosity (-v, -vv, -vvv); RUST_LOG overrides
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum KindArg {
    /// First line is a hotkey, then username|password lines
    Vault,
    /// Every line is hotkey|text
    Literal,
}

impl From<KindArg> for PayloadKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Vault => PayloadKind::Credential,
            KindArg::Literal => PayloadKind::Literal,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum EncodingArg {
    Auto,
    Utf8,
    Utf16le,
}

impl From<EncodingArg> for TextEncoding {
    fn from(encoding: EncodingArg) -> Self {
        match encoding {
            EncodingArg::Auto => TextEncoding::Auto,
            EncodingArg::Utf8 => TextEncoding::Utf8,
            EncodingArg::Utf16le => TextEncoding::Utf16Le,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the config and report duplicate hotkeys
    Check,

    /// List all entries (passwords are never shown)
    List {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Parse a single hotkey specification
    Parse {
        /// e.g. "LCtrl+LShift+LAlt+0x50"
        hotkey: String,
    },

    /// Show the keystroke events a text would be typed as
    Encode {
        text: String,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Write a commented starter config
    Init {
        /// Overwrite an existing file (a backup is kept)
        #[arg(long)]
        force: bool,
    },

    /// Watch the config and re-validate on every change
    Watch,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let kind = PayloadKind::from(cli.kind);

    match cli.command {
        Commands::Parse { hotkey } => parse_command(&hotkey)?,
        Commands::Encode { text, json } => encode_command(&text, json)?,
        command => {
            let manager = ConfigManager::new(expand_path(&cli.config)?, cli.encoding.into());

            match command {
                Commands::Check => check_config(&manager, kind)?,
                Commands::List { json } => list_entries(&manager, kind, json)?,
                Commands::Init { force } => init_config(&manager, kind, force)?,
                Commands::Watch => watch_config(&manager, kind)?,
                Commands::Parse { .. } | Commands::Encode { .. } => {}
            }
        }
    }

    Ok(())
}

/// Expand tilde in path
fn expand_path(path: &Path) -> anyhow::Result<PathBuf> {
    let raw = path
        .to_str()
        .ok_or_else(|| anyhow::anyhow!("Invalid path encoding"))?;

    Ok(PathBuf::from(shellexpand::tilde(raw).as_ref()))
}

/// Validate config, print a summary and any duplicate hotkeys
fn check_config(manager: &ConfigManager, kind: PayloadKind) -> anyhow::Result<()> {
    println!("{} Parsing config: {}", "→".cyan(), manager.path().display());

    let document = manager.load(kind)?;

    if let Some(hotkey) = document.hotkey() {
        println!("{} Shortcut key: {}", "✓".green(), hotkey.describe().cyan());
    }
    println!(
        "{} Found {} {} entr{}",
        "✓".green(),
        document.entries().len(),
        kind,
        if document.entries().len() == 1 { "y" } else { "ies" }
    );

    let conflicts = document.conflicts();
    if conflicts.is_empty() {
        println!("{} {}", "✓".green().bold(), "Config is valid".bold());
        return Ok(());
    }

    println!(
        "\n{} {} shortcut key{} bound more than once:",
        "⚠".yellow().bold(),
        conflicts.len(),
        if conflicts.len() == 1 { "" } else { "s" }
    );
    for conflict in conflicts {
        let lines = conflict
            .lines
            .iter()
            .map(|line| format!("#{}", line))
            .collect::<Vec<_>>()
            .join(", ");
        println!("  {} on lines {}", conflict.hotkey.describe().cyan(), lines);
    }
    println!("{}", "Only the first line of each will ever be typed.".yellow());

    Ok(())
}

/// List all entries in the config
fn list_entries(manager: &ConfigManager, kind: PayloadKind, json: bool) -> anyhow::Result<()> {
    let document = manager.load(kind)?;
    let summaries: Vec<_> = document.entries().iter().map(|e| e.summary()).collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        return Ok(());
    }

    println!(
        "{}",
        format!("Entries from: {}\n", manager.path().display()).bold()
    );

    for summary in &summaries {
        let line = format!("#{:<4}", summary.line).dimmed();
        let hotkey = summary.hotkey.describe().cyan().bold();

        match kind {
            PayloadKind::Credential => {
                println!("{} {} → {} {}", line, hotkey, summary.label.green(), "********".dimmed())
            }
            PayloadKind::Literal => println!("{} {} → {:?}", line, hotkey, summary.label),
        }
    }

    println!("\n{} Total: {} entries", "✓".green(), summaries.len());

    Ok(())
}

/// Parse one hotkey and show how it was understood
fn parse_command(spec: &str) -> anyhow::Result<()> {
    let hotkey = parse_hotkey(spec)?;

    println!("{} {}", "✓".green(), hotkey.to_string().cyan().bold());
    println!("  {:<10} {}", "name", hotkey.describe());
    println!(
        "  {:<10} 0x{:02X} ({})",
        "modifiers",
        hotkey.modifiers().bits(),
        hotkey.modifiers()
    );
    println!("  {:<10} {}", "key", hotkey.key());

    Ok(())
}

/// Print the keystroke events for a text
fn encode_command(text: &str, json: bool) -> anyhow::Result<()> {
    let events = keystroke::encode(text);

    if json {
        println!("{}", serde_json::to_string_pretty(&events)?);
        return Ok(());
    }

    for event in &events {
        println!(
            "U+{:04X} {:<4} flags=0x{:04X}",
            event.code_unit,
            format!("{:?}", event.phase),
            event.flags().bits()
        );
    }
    println!(
        "\n{} {} events for {} code units",
        "✓".green(),
        events.len(),
        text.encode_utf16().count()
    );

    Ok(())
}

fn template(kind: PayloadKind) -> &'static str {
    match kind {
        PayloadKind::Credential => {
            "# hotkey-autotype credential vault\n\
             #\n\
             # First line: shortcut key, e.g. LCtrl+LShift+LAlt+0x50\n\
             #   Modifiers: LShift RShift LCtrl RCtrl LAlt RAlt\n\
             #   Key: virtual-key code in hex, 0x01 to 0xFE\n\
             # Following lines: username|password\n\
             LCtrl+LShift+LAlt+0x50\n\
             example-user|example-password\n"
        }
        PayloadKind::Literal => {
            "# hotkey-autotype snippets\n\
             #\n\
             # Each line: shortcut key|text to type\n\
             #   Modifiers: LShift RShift LCtrl RCtrl LAlt RAlt\n\
             #   Key: virtual-key code in hex, 0x01 to 0xFE\n\
             # Text is typed exactly as written, including spaces.\n\
             LCtrl+LAlt+0x53|Kind regards\n"
        }
    }
}

/// Write a starter config
fn init_config(manager: &ConfigManager, kind: PayloadKind, force: bool) -> anyhow::Result<()> {
    if manager.path().exists() && !force {
        anyhow::bail!(
            "Config already exists: {} (use --force to overwrite)",
            manager.path().display()
        );
    }

    if let Some(parent) = manager.path().parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    let backup = manager.write_text(template(kind))?;

    println!("{} Wrote {}", "✓".green(), manager.path().display());
    if let Some(backup) = backup {
        println!("  Previous config saved to {}", backup.display());
    }

    Ok(())
}

/// Load once, then reload on every change until interrupted
fn watch_config(manager: &ConfigManager, kind: PayloadKind) -> anyhow::Result<()> {
    let document = manager.load(kind)?;
    println!(
        "{} Loaded {} entries, watching {}",
        "✓".green(),
        document.entries().len(),
        manager.path().display()
    );

    let store = ConfigStore::new(document);
    let watcher = ConfigWatcher::new(manager.path())?;

    loop {
        thread::sleep(Duration::from_millis(500));

        if !watcher.check_for_changes() {
            continue;
        }

        let reloaded = manager
            .read_text()
            .map_err(anyhow::Error::from)
            .and_then(|text| store.reload(&text).map_err(anyhow::Error::from));

        match reloaded {
            Ok(document) => println!(
                "{} Reloaded: {} entries",
                "✓".green(),
                document.entries().len()
            ),
            Err(e) => println!(
                "{} {} {}",
                "✗".red().bold(),
                e,
                "(keeping previous config)".dimmed()
            ),
        }
    }
}
