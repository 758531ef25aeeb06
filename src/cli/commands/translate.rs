use anyhow::{Context, Result};
use std::io::Write;
use std::time::Duration;

use crate::cli::Request;
use crate::translation::{
    TranslationError, TranslationRequest, TranslationResult, Translator, error_chain,
};
use crate::ui::{
    Align, BannerOptions, BorderStyle, BoxOptions, IndicatorSummary, PALETTE, ProgressIndicator,
    Style, render_banner, render_box,
};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const DESCRIPTION: &str = "Translates a sentence into a specific language 🌍";

/// Exit status for a missing `-l`/`-s`.
pub const USAGE_EXIT_CODE: i32 = 1;

pub struct TranslateOptions {
    /// `None` when `-l` or `-s` was missing or empty.
    pub request: Option<Request>,
    /// Lowercased source language code, or `auto`.
    pub from: String,
    pub timeout: Option<Duration>,
    /// Help text printed on the usage path.
    pub help: String,
}

/// How a run ended.
#[derive(Debug)]
pub enum Outcome {
    /// Required arguments were missing; usage was printed.
    Usage,
    Translated {
        result: TranslationResult,
        indicator: IndicatorSummary,
    },
    Failed {
        error: TranslationError,
        indicator: IndicatorSummary,
    },
}

impl Outcome {
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Usage => USAGE_EXIT_CODE,
            Self::Translated { .. } => exitcode::OK,
            Self::Failed { .. } => exitcode::UNAVAILABLE,
        }
    }

    /// Final state of the progress indicator, if one was started.
    pub const fn indicator(&self) -> Option<IndicatorSummary> {
        match self {
            Self::Usage => None,
            Self::Translated { indicator, .. } | Self::Failed { indicator, .. } => Some(*indicator),
        }
    }
}

/// Runs one translation: usage on missing input, otherwise spinner,
/// translator call and the boxed result or the error.
///
/// `out` receives usage text and results, `err` receives the indicator's
/// final mark and error details.
pub async fn run_translate<T, O, E>(
    options: TranslateOptions,
    translator: &T,
    out: &mut O,
    err: &mut E,
) -> Result<Outcome>
where
    T: Translator,
    O: Write,
    E: Write,
{
    let Some(request) = options.request else {
        print_usage(out, &options.help)?;
        return Ok(Outcome::Usage);
    };

    let translation_request =
        TranslationRequest::new(request.sentence.as_str(), &request.language, &options.from);
    tracing::debug!(to = %translation_request.to, from = %translation_request.from, "starting translation");

    let mut indicator = ProgressIndicator::start(
        &format!(
            "Translating \"{}\" to {}...",
            request.sentence, request.language
        ),
        PALETTE,
    )?;

    let result = match options.timeout {
        Some(limit) => tokio::time::timeout(limit, translator.translate(&translation_request))
            .await
            .unwrap_or_else(|_| Err(TranslationError::Timeout(limit))),
        None => translator.translate(&translation_request).await,
    };

    match result {
        Ok(result) => {
            indicator.succeed("Translation completed!", err)?;
            print_translation(out, &result)?;
            Ok(Outcome::Translated {
                result,
                indicator: indicator.summary(),
            })
        }
        Err(error) => {
            indicator.fail("Translation failed.", err)?;
            writeln!(err, "{} {}", Style::error("Error:"), error_chain(&error))
                .context("Failed to write to stderr")?;
            Ok(Outcome::Failed {
                error,
                indicator: indicator.summary(),
            })
        }
    }
}

fn print_usage<W: Write>(out: &mut W, help: &str) -> Result<()> {
    let banner = render_banner(
        &format!("Translate CLI v{VERSION}"),
        &BannerOptions {
            color: Some("yellow"),
        },
    );
    let description = render_box(
        DESCRIPTION,
        &BoxOptions {
            padding: 1,
            margin: 1,
            border_color: Some("green"),
            dim_border: true,
            align: Align::Left,
            text_color: Some("green"),
            ..BoxOptions::default()
        },
    );

    writeln!(out, "{banner}").context("Failed to write to stdout")?;
    writeln!(out, "{description}").context("Failed to write to stdout")?;
    writeln!(out, "{help}").context("Failed to write to stdout")?;
    out.flush().context("Failed to flush stdout")
}

fn print_translation<W: Write>(out: &mut W, translation: &TranslationResult) -> Result<()> {
    let boxed = render_box(
        &format!(
            "{}\n\n{}",
            translation.original_text, translation.translated_text
        ),
        &BoxOptions {
            padding: 1,
            border_color: Some("green"),
            dim_border: true,
            border_style: BorderStyle::Classic,
            text_color: Some("green"),
            ..BoxOptions::default()
        },
    );

    writeln!(out, "\n{boxed}\n").context("Failed to write to stdout")?;
    out.flush().context("Failed to flush stdout")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::IndicatorState;

    const SUMMARY: IndicatorSummary = IndicatorSummary {
        state: IndicatorState::Failed,
        cycle_cancellations: 1,
        cycling: false,
    };

    #[test]
    fn test_outcome_exit_codes() {
        assert_eq!(Outcome::Usage.exit_code(), 1);
        assert_eq!(
            Outcome::Failed {
                error: TranslationError::Other("Network error".to_string()),
                indicator: SUMMARY,
            }
            .exit_code(),
            exitcode::UNAVAILABLE
        );

        let translated = Outcome::Translated {
            result: TranslationResult {
                original_text: "Hello".to_string(),
                translated_text: "Hola".to_string(),
                detected_language: None,
            },
            indicator: IndicatorSummary {
                state: IndicatorState::Succeeded,
                ..SUMMARY
            },
        };
        assert_eq!(translated.exit_code(), 0);
    }

    #[test]
    fn test_usage_has_no_indicator() {
        assert_eq!(Outcome::Usage.indicator(), None);
    }
}
