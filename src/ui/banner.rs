use figlet_rs::FIGfont;

use super::style::colorize;

/// Options for [`render_banner`].
#[derive(Debug, Clone, Default)]
pub struct BannerOptions<'a> {
    /// Color name applied to the whole banner.
    pub color: Option<&'a str>,
}

/// Renders `text` as large block letters using the standard FIGlet font.
///
/// Falls back to the plain text when the font cannot be loaded or cannot
/// render one of the characters.
pub fn render_banner(text: &str, options: &BannerOptions<'_>) -> String {
    let rendered = FIGfont::standard()
        .ok()
        .and_then(|font| font.convert(text).map(|figure| figure.to_string()))
        .unwrap_or_else(|| {
            tracing::debug!("banner font unavailable, using plain text");
            text.to_string()
        });

    match options.color {
        Some(color) => rendered
            .lines()
            .map(|line| colorize(line, color))
            .collect::<Vec<_>>()
            .join("\n"),
        None => rendered,
    }
}
