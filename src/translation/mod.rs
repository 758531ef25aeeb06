mod client;
mod error;
mod language;

pub use client::{GoogleTranslator, TranslationRequest, TranslationResult, Translator};
pub use error::{TranslationError, error_chain};
pub use language::{SUPPORTED_LANGUAGES, print_languages, resolve_language_code};
