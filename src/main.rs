//! mcbe-preview — command-line front end for the render preview client.
//!
//! Submits content to the render endpoint, browses the persisted history and
//! edits settings. The interactive shells talk to `mcbe-preview-rpc` instead.

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use mcbe_preview::app::App;
use mcbe_preview::logging;
use mcbe_preview::managers::history_store::HistoryStoreTrait;
use mcbe_preview::managers::ui_state_manager::UiStateManagerTrait;
use mcbe_preview::services::image_codec;
use mcbe_preview::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use mcbe_preview::types::history::{HistoryRecord, RenderMode};

#[derive(Parser)]
#[command(name = "mcbe-preview", version, about = "Render Minecraft Bedrock text previews")]
struct Cli {
    /// Alternative config file.
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render content and record it in the history.
    Render {
        /// `text` or `tellraw`. Defaults to the last mode used.
        #[arg(long)]
        mode: Option<RenderMode>,

        /// Write the PNG here.
        #[arg(long)]
        out: Option<PathBuf>,

        content: String,
    },

    /// Inspect the render history.
    History {
        #[command(subcommand)]
        cmd: HistoryCmd,
    },

    /// Read or change settings.
    Config {
        #[command(subcommand)]
        cmd: ConfigCmd,
    },
}

#[derive(Subcommand)]
enum HistoryCmd {
    /// List entries, most recent first.
    List,

    /// Print one entry and optionally export its image.
    Show {
        index: usize,

        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
enum ConfigCmd {
    /// Print the settings as JSON.
    Get,

    /// Set a dotted key, e.g. `endpoint.base_url`, to a JSON value.
    Set { key: String, value: String },
}

fn write_image(record: &HistoryRecord, out: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let (_, bytes) = image_codec::from_data_url(&record.rendered_image)?;
    fs::write(out, bytes)?;
    println!("wrote {}", out.display());
    Ok(())
}

fn run_config(
    mut settings_engine: SettingsEngine,
    cmd: ConfigCmd,
) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        ConfigCmd::Get => {
            println!("{}", serde_json::to_string_pretty(settings_engine.get_settings())?);
        }
        ConfigCmd::Set { key, value } => {
            // Bare words are taken as strings so `config set logging.level debug` works.
            let value = serde_json::from_str(&value).unwrap_or(serde_json::Value::String(value));
            settings_engine.set_value(&key, value)?;
            println!("{} updated", key);
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut settings_engine = SettingsEngine::new(cli.config);
    let loaded = settings_engine.load();
    logging::init(&settings_engine.get_settings().logging.level);
    if let Err(e) = loaded {
        tracing::warn!(error = %e, "using default settings");
    }

    let cmd = match cli.cmd {
        Commands::Config { cmd } => {
            return run_config(settings_engine, cmd);
        }
        cmd => cmd,
    };

    let mut app = App::open(settings_engine)?;
    app.startup();

    match cmd {
        Commands::Render { mode, out, content } => {
            let mode = match mode {
                Some(mode) => {
                    app.switch_mode(mode);
                    mode
                }
                None => app.ui_state.mode(),
            };
            let record = app.submit(mode, &content).await?;
            println!("rendered {} ({} history entries)", mode.label(), app.history.len());
            if let Some(out) = out {
                write_image(&record, &out)?;
            }
        }
        Commands::History { cmd: HistoryCmd::List } => {
            let panel = app.panel();
            if panel.is_empty() {
                println!("No history yet");
            }
            for item in panel.items() {
                println!("{:>3}  {}", item.index, item.label);
            }
        }
        Commands::History {
            cmd: HistoryCmd::Show { index, out },
        } => {
            let record = app
                .history
                .get(index)
                .cloned()
                .ok_or_else(|| format!("history entry not found: {}", index))?;
            let summary = serde_json::json!({
                "mode": record.mode,
                "content": record.content,
                "time": record.timestamp,
            });
            println!("{}", serde_json::to_string_pretty(&summary)?);
            if let Some(out) = out {
                write_image(&record, &out)?;
            }
        }
        Commands::Config { .. } => {}
    }

    app.shutdown();
    Ok(())
}
