//! Configuration file loading and CLI/config merging.

mod manager;

pub use manager::{
    ConfigFile, ConfigManager, DEFAULT_ENDPOINT, DEFAULT_SOURCE_LANGUAGE, DEFAULT_TIMEOUT_SECS,
    ResolveOptions, ResolvedConfig, TranslateConfig, resolve_config,
};
