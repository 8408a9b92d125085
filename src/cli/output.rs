use colored::Colorize;
use std::env;
use std::fmt;
use std::sync::{OnceLock, RwLock};

use showroom_domain::BalanceSide;

/// Message categories used by the CLI output helpers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Section,
}

#[derive(Clone, Copy, Debug)]
pub struct OutputPreferences {
    pub color_enabled: bool,
}

impl Default for OutputPreferences {
    fn default() -> Self {
        Self {
            color_enabled: true,
        }
    }
}

static PREFERENCES: OnceLock<RwLock<OutputPreferences>> = OnceLock::new();

/// Stores preferences and applies them to `colored`. `NO_COLOR` always wins.
pub fn set_preferences(mut prefs: OutputPreferences) {
    if env::var_os("NO_COLOR").is_some() {
        prefs.color_enabled = false;
    }
    if prefs.color_enabled {
        colored::control::unset_override();
    } else {
        colored::control::set_override(false);
    }
    let lock = PREFERENCES.get_or_init(|| RwLock::new(OutputPreferences::default()));
    if let Ok(mut guard) = lock.write() {
        *guard = prefs;
    }
}

fn preferences() -> OutputPreferences {
    PREFERENCES
        .get_or_init(|| RwLock::new(OutputPreferences::default()))
        .read()
        .map(|guard| *guard)
        .unwrap_or_default()
}

pub fn format_message(kind: MessageKind, message: impl fmt::Display) -> String {
    let text = message.to_string();
    let base = match kind {
        MessageKind::Section => format!("=== {} ===", text.trim()),
        MessageKind::Success => format!("SUCCESS: {text}"),
    };

    if !preferences().color_enabled {
        return base;
    }

    match kind {
        MessageKind::Success => base.bright_green().to_string(),
        MessageKind::Section => base.bold().to_string(),
    }
}

/// Colours a rendered balance by side: Dr green, Cr yellow.
pub fn paint_balance(text: &str, side: BalanceSide) -> String {
    if !preferences().color_enabled {
        return text.to_string();
    }
    match side {
        BalanceSide::Dr => text.green().to_string(),
        BalanceSide::Cr => text.yellow().to_string(),
    }
}
