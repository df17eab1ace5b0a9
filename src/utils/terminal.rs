//! Terminal color handling
//!
//! Color is decided once per run and passed around explicitly. Every painted
//! string carries its own start and reset sequences, there is no process-wide
//! toggle.

use clap::ValueEnum;
use console::Style;
use std::env;

/// Value of the `--color` flag
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}

/// Output configuration for controlling colors
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OutputConfig {
    pub use_color: bool,
}

impl OutputConfig {
    /// Resolves the flag against the environment
    ///
    /// In auto mode colors are off when `NO_COLOR` is set, `CLICOLOR=0`,
    /// `TERM=dumb`, or stdout is not a terminal. `CLICOLOR_FORCE` turns them
    /// back on for non-terminals.
    pub fn from_choice(choice: ColorChoice) -> Self {
        let use_color = match choice {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => detect_color_support(),
        };
        Self { use_color }
    }

    pub fn with_color() -> Self {
        Self { use_color: true }
    }

    pub fn without_color() -> Self {
        Self { use_color: false }
    }
}

fn detect_color_support() -> bool {
    if env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if env::var("CLICOLOR").is_ok_and(|v| v == "0") {
        return false;
    }
    if env::var("CLICOLOR_FORCE").is_ok_and(|v| v != "0" && !v.is_empty()) {
        return true;
    }
    if env::var("TERM").is_ok_and(|v| v == "dumb") {
        return false;
    }
    console::Term::stdout().features().colors_supported()
}

/// Paints a status label green when clean, red otherwise
pub fn paint_status(config: &OutputConfig, label: &str, clean: bool) -> String {
    let style = if clean {
        Style::new().green()
    } else {
        Style::new().red()
    };
    style
        .force_styling(config.use_color)
        .apply_to(label)
        .to_string()
}
