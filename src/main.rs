//! CLI entry point for themekit.

mod cli;

use clap::Parser;
use cli::{Command, ThemesCommand};
use std::sync::{Arc, Mutex};
use themekit::api::{ApiClient, Theme};
use themekit::config::{load_config, Config};
use themekit::css::ModeWatcher;
use themekit::error::ThemeError;
use themekit::reconcile::{NewTheme, SaveOutcome, SaveTarget, ThemeEditor, ThemeMeta};
use themekit::render::Renderer;
use themekit::slots::presets::PRESET_NAMES;
use themekit::slots::Mode;
use themekit::store::{CssFileEnvironment, Environment, FileStorage, NullEnvironment, ThemeStore};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::watch;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "THEMEKIT_LOG";
const DEFAULT_LOG_FILTER: &str = "warn";

#[tokio::main]
async fn main() {
    let args = cli::Args::parse();
    init_logging();

    let config = match load_config(args.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };
    let renderer = Renderer::new(config.display.color && !args.no_color);

    if let Err(e) = run(args.command, &config, &renderer).await {
        renderer.error(&e.to_string());
        std::process::exit(1);
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn open_store(config: &Config) -> ThemeStore {
    let storage = FileStorage::new(config.storage.resolved_state_path());
    let environment: Box<dyn Environment> = match &config.projection.css_output {
        Some(path) => Box::new(CssFileEnvironment::new(path.clone())),
        None => Box::new(NullEnvironment),
    };
    ThemeStore::open(Box::new(storage), environment, config.display.mode)
}

async fn run(command: Command, config: &Config, renderer: &Renderer) -> Result<(), ThemeError> {
    let mut store = open_store(config);
    let projects = matches!(
        command,
        Command::Set { .. }
            | Command::ButtonStyle { .. }
            | Command::BorderWeight { .. }
            | Command::Preset { .. }
            | Command::Reset
            | Command::Mode { .. }
            | Command::Watch
    );
    if projects && store.is_external_theme_active() && config.projection.css_output.is_some() {
        renderer.warn(
            "a persisted theme is applied; css output is left alone until `themekit themes select` clears it",
        );
    }
    match command {
        Command::Show { mode } => {
            let modes = match mode {
                Some(mode) => vec![mode],
                None => Mode::ALL.to_vec(),
            };
            for mode in modes {
                renderer.slot_table(store.slots(mode), mode);
            }
            if let Some(id) = store.loaded_theme_id() {
                renderer.field("loaded theme", id);
            }
        }
        Command::Set { mode, slot, value } => store.set_slot(mode, slot, &value)?,
        Command::ButtonStyle { mode, style } => store.set_button_style(mode, style)?,
        Command::BorderWeight { mode, weight } => store.set_border_weight(mode, weight)?,
        Command::Preset { name } => store.load_preset(&name)?,
        Command::Presets => {
            for name in PRESET_NAMES {
                println!("{name}");
            }
        }
        Command::Reset => store.reset()?,
        Command::ExportCss => print!("{}", store.export_css()),
        Command::Mode { mode } => {
            store.set_color_mode(mode);
            for (name, value) in store.current_variables().iter() {
                println!("{name}: {value};");
            }
        }
        Command::Watch => watch_modes(store, config).await,
        Command::Themes(command) => {
            let editor = ThemeEditor::new(ApiClient::new(&config.api));
            run_themes(command, &editor, &mut store, renderer).await?;
        }
    }
    Ok(())
}

async fn run_themes(
    command: ThemesCommand,
    editor: &ThemeEditor<ApiClient>,
    store: &mut ThemeStore,
    renderer: &Renderer,
) -> Result<(), ThemeError> {
    match command {
        ThemesCommand::List => {
            for theme in editor.list().await? {
                print_theme_row(&theme, store.loaded_theme_id());
            }
        }
        ThemesCommand::Load { id } => {
            let (theme, report) = editor.load_by_id(store, &id).await?;
            renderer.section(&format!("loaded {}", theme.name));
            for (mode, loaded) in [(Mode::Light, report.light_loaded), (Mode::Dark, report.dark_loaded)] {
                if !loaded {
                    renderer.warn(&format!(
                        "theme has no {mode} tokens; kept the current {mode} values"
                    ));
                }
            }
        }
        ThemesCommand::Create {
            name,
            description,
            inactive,
        } => {
            let target = SaveTarget::Create(NewTheme {
                name,
                description,
                is_active: !inactive,
            });
            let outcome = editor.save(store, target).await?;
            report_save(renderer, "created", &outcome);
        }
        ThemesCommand::Update {
            id,
            name,
            description,
            activate,
            deactivate,
        } => {
            let is_active = match (activate, deactivate) {
                (true, _) => Some(true),
                (_, true) => Some(false),
                _ => None,
            };
            let meta = ThemeMeta {
                name,
                description,
                is_active,
            };
            let outcome = editor.save(store, SaveTarget::Update { id, meta }).await?;
            report_save(renderer, "updated", &outcome);
        }
        ThemesCommand::Delete { id } => {
            editor.delete(store, &id).await?;
            renderer.section(&format!("deleted theme {id}"));
        }
        ThemesCommand::Deactivate { id } => {
            let theme = editor.deactivate(&id).await?;
            renderer.section(&format!("deactivated {}", theme.name));
        }
        ThemesCommand::Select { id, mode } => {
            let selection = editor.select(store, id, mode).await?;
            match selection.theme_id {
                Some(id) => renderer.section(&format!("applied theme {id}")),
                None => renderer.section("cleared applied theme"),
            }
        }
        ThemesCommand::Selection => {
            let selection = editor.refresh_selection(store).await?;
            let mode = selection.mode.map(|m| m.to_string());
            renderer.field("theme", selection.theme_id.as_deref().unwrap_or("none"));
            renderer.field("mode", mode.as_deref().unwrap_or("none"));
        }
    }
    Ok(())
}

fn print_theme_row(theme: &Theme, loaded: Option<&str>) {
    let status = if theme.is_active { "active" } else { "inactive" };
    let marker = if loaded == Some(theme.id.as_str()) { "*" } else { " " };
    println!("{marker} {:<8} {:<9} {}", theme.id, status, theme.name);
}

fn report_save(renderer: &Renderer, verb: &str, outcome: &SaveOutcome) {
    renderer.section(&format!("{verb} theme {} ({})", outcome.theme.name, outcome.theme.id));
    for warning in &outcome.warnings {
        renderer.warn(&warning.to_string());
    }
}

/// Feed `light`/`dark` lines from stdin into a [`ModeWatcher`] until EOF.
async fn watch_modes(store: ThemeStore, config: &Config) {
    let initial = store.color_mode();
    let store = Arc::new(Mutex::new(store));
    let (tx, rx) = watch::channel(initial);
    let handle = ModeWatcher::new(config.projection.settle_delay()).spawn(store, rx);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        match lines.next_line().await {
            Ok(Some(line)) => match Mode::from_key(&line) {
                Some(mode) => {
                    if tx.send(mode).is_err() {
                        break;
                    }
                }
                None if line.trim().is_empty() => {}
                None => tracing::warn!(line = %line.trim(), "ignoring unknown color mode"),
            },
            Ok(None) => break,
            Err(e) => {
                tracing::warn!(error = %e, "failed to read stdin; stopping watch");
                break;
            }
        }
    }
    drop(tx);
    if let Err(e) = handle.await {
        tracing::warn!(error = %e, "mode watcher task failed");
    }
}
