//! Consistent styling utilities for CLI output.
//!
//! Provides color and formatting helpers using owo-colors. Every helper
//! returns plain text when colors are disabled.

use owo_colors::{AnsiColors, OwoColorize};
use std::fmt::Display;

use crate::output;

/// Styles for different semantic elements.
pub struct Style;

impl Style {
    /// Style for section headers (e.g., "Supported language codes")
    pub fn header<T: Display>(text: T) -> String {
        paint(text, |t| t.bold().to_string())
    }

    /// Style for secondary/supplementary info (e.g., language names)
    pub fn secondary<T: Display>(text: T) -> String {
        paint(text, |t| t.dimmed().to_string())
    }

    /// Style for success marks
    pub fn success<T: Display>(text: T) -> String {
        paint(text, |t| t.green().to_string())
    }

    /// Style for error labels and failure marks
    pub fn error<T: Display>(text: T) -> String {
        paint(text, |t| t.red().bold().to_string())
    }

    /// Style for language codes
    pub fn code<T: Display>(text: T) -> String {
        paint(text, |t| t.yellow().to_string())
    }
}

/// Wraps `text` in the escape codes of the named color.
///
/// Unknown color names leave the text uncolored.
pub fn colorize<T: Display>(text: T, color: &str) -> String {
    match parse_color(color) {
        Some(color) => paint(text, |t| t.color(color).to_string()),
        None => text.to_string(),
    }
}

/// Like [`colorize`], but dimmed.
pub fn colorize_dimmed<T: Display>(text: T, color: &str) -> String {
    match parse_color(color) {
        Some(color) => paint(text, |t| t.color(color).dimmed().to_string()),
        None => paint(text, |t| t.dimmed().to_string()),
    }
}

/// Looks up one of the eight basic terminal colors (plus `gray`) by name.
pub fn parse_color(name: &str) -> Option<AnsiColors> {
    let color = match name.trim().to_lowercase().as_str() {
        "black" => AnsiColors::Black,
        "red" => AnsiColors::Red,
        "green" => AnsiColors::Green,
        "yellow" => AnsiColors::Yellow,
        "blue" => AnsiColors::Blue,
        "magenta" => AnsiColors::Magenta,
        "cyan" => AnsiColors::Cyan,
        "white" => AnsiColors::White,
        "gray" | "grey" => AnsiColors::BrightBlack,
        _ => return None,
    };
    Some(color)
}

fn paint<T: Display>(text: T, apply: impl FnOnce(&T) -> String) -> String {
    if output::is_no_color() {
        text.to_string()
    } else {
        apply(&text)
    }
}
