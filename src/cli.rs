//! CLI argument parsing via clap.

use clap::{Parser, Subcommand};
use themekit::build_info::{HELP_BUILD_METADATA, LONG_VERSION};
use themekit::palette::{BorderWeight, ButtonStyle};
use themekit::slots::{ColorSlot, Mode};

/// Edit light/dark palette themes and sync them with the theme API.
#[derive(Debug, Parser)]
#[command(name = "themekit", version, long_version = LONG_VERSION, after_help = HELP_BUILD_METADATA)]
pub struct Args {
    /// Path to config file (default: ./themekit.toml or ~/.config/themekit/themekit.toml).
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<String>,

    /// Disable color output.
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print both modes' slots, or one mode with --mode.
    Show {
        #[arg(long, value_parser = parse_mode)]
        mode: Option<Mode>,
    },
    /// Assign a palette key to a slot. `auto` unsets a derived slot.
    Set {
        #[arg(value_parser = parse_mode)]
        mode: Mode,
        #[arg(value_parser = parse_slot)]
        slot: ColorSlot,
        value: String,
    },
    /// Set a mode's button style (solid, outline, ghost).
    ButtonStyle {
        #[arg(value_parser = parse_mode)]
        mode: Mode,
        #[arg(value_parser = parse_button_style)]
        style: ButtonStyle,
    },
    /// Set a mode's border weight (none, thin, medium, thick).
    BorderWeight {
        #[arg(value_parser = parse_mode)]
        mode: Mode,
        #[arg(value_parser = parse_border_weight)]
        weight: BorderWeight,
    },
    /// Replace both modes with a named preset.
    Preset { name: String },
    /// List preset names.
    Presets,
    /// Restore both modes to their defaults.
    Reset,
    /// Print `:root` and `.dark` CSS blocks.
    ExportCss,
    /// Switch the projected color mode.
    Mode {
        #[arg(value_parser = parse_mode)]
        mode: Mode,
    },
    /// Read `light`/`dark` lines from stdin and re-project on each toggle.
    Watch,
    /// Persisted themes on the theme API.
    #[command(subcommand)]
    Themes(ThemesCommand),
}

#[derive(Debug, Subcommand)]
pub enum ThemesCommand {
    /// List persisted themes.
    List,
    /// Load a theme's light and dark tokens into the editor.
    Load { id: String },
    /// Save the editor state as a new theme.
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: Option<String>,
        /// Save without counting against the active-theme cap.
        #[arg(long)]
        inactive: bool,
    },
    /// Save the editor state over the loaded theme.
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
        /// Mark the theme active again.
        #[arg(long, conflicts_with = "deactivate")]
        activate: bool,
        #[arg(long)]
        deactivate: bool,
    },
    /// Delete a theme permanently.
    Delete { id: String },
    /// Mark a theme inactive without deleting it.
    Deactivate { id: String },
    /// Apply a theme for the current user; without an id, clear it.
    Select {
        id: Option<String>,
        #[arg(long, value_parser = parse_mode)]
        mode: Option<Mode>,
    },
    /// Show the current user's applied theme.
    Selection,
}

fn parse_mode(value: &str) -> Result<Mode, String> {
    Mode::from_key(value).ok_or_else(|| format!("expected `light` or `dark`, got `{value}`"))
}

fn parse_slot(value: &str) -> Result<ColorSlot, String> {
    ColorSlot::from_key(value).ok_or_else(|| {
        let known: Vec<&str> = ColorSlot::ALL.iter().map(|s| s.key()).collect();
        format!("unknown slot `{value}`; expected one of {}", known.join(", "))
    })
}

fn parse_button_style(value: &str) -> Result<ButtonStyle, String> {
    ButtonStyle::from_key(value)
        .ok_or_else(|| format!("expected `solid`, `outline`, or `ghost`, got `{value}`"))
}

fn parse_border_weight(value: &str) -> Result<BorderWeight, String> {
    BorderWeight::from_key(value)
        .ok_or_else(|| format!("expected `none`, `thin`, `medium`, or `thick`, got `{value}`"))
}
