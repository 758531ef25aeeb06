//! # translate - Sentence Translation CLI
//!
//! `translate` sends one sentence to a translation service and prints the
//! result in a box, with a color-cycling spinner while the request is
//! pending.
//!
//! ## Quick Start
//!
//! ```bash
//! # Translate to Spanish
//! translate -l es -s "Hello"
//!
//! # Language names work too
//! translate --language Japanese --sentence "Good morning"
//!
//! # List known language codes
//! translate languages
//! ```
//!
//! ## Configuration
//!
//! Optional settings are read from `~/.config/translate/config.toml`:
//!
//! ```toml
//! [translate]
//! endpoint = "https://translate.googleapis.com"
//! from = "auto"
//! timeout_secs = 30
//! ```

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management.
pub mod config;

/// Diagnostic logging setup.
pub mod logging;

/// Global output configuration (quiet mode, colors).
pub mod output;

/// XDG-style path utilities for configuration.
pub mod paths;

/// Translation client and language lookup.
pub mod translation;

/// Terminal UI components (banner, boxes, spinner, colors).
pub mod ui;
