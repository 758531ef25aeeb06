//! Language codes known to the Google backend and name-to-code lookup.

use crate::ui::Style;

/// Language codes as the service spells them (ISO 639-1, plus regional
/// Chinese variants) and their English names.
pub const SUPPORTED_LANGUAGES: &[(&str, &str)] = &[
    ("af", "Afrikaans"),
    ("am", "Amharic"),
    ("ar", "Arabic"),
    ("az", "Azerbaijani"),
    ("be", "Belarusian"),
    ("bg", "Bulgarian"),
    ("bn", "Bengali"),
    ("bs", "Bosnian"),
    ("ca", "Catalan"),
    ("cs", "Czech"),
    ("cy", "Welsh"),
    ("da", "Danish"),
    ("de", "German"),
    ("el", "Greek"),
    ("en", "English"),
    ("eo", "Esperanto"),
    ("es", "Spanish"),
    ("et", "Estonian"),
    ("eu", "Basque"),
    ("fa", "Persian"),
    ("fi", "Finnish"),
    ("fr", "French"),
    ("ga", "Irish"),
    ("gl", "Galician"),
    ("gu", "Gujarati"),
    ("ha", "Hausa"),
    ("he", "Hebrew"),
    ("hi", "Hindi"),
    ("hr", "Croatian"),
    ("hu", "Hungarian"),
    ("hy", "Armenian"),
    ("id", "Indonesian"),
    ("is", "Icelandic"),
    ("it", "Italian"),
    ("ja", "Japanese"),
    ("ka", "Georgian"),
    ("kk", "Kazakh"),
    ("km", "Khmer"),
    ("kn", "Kannada"),
    ("ko", "Korean"),
    ("la", "Latin"),
    ("lo", "Lao"),
    ("lt", "Lithuanian"),
    ("lv", "Latvian"),
    ("mk", "Macedonian"),
    ("ml", "Malayalam"),
    ("mn", "Mongolian"),
    ("mr", "Marathi"),
    ("ms", "Malay"),
    ("mt", "Maltese"),
    ("my", "Myanmar (Burmese)"),
    ("ne", "Nepali"),
    ("nl", "Dutch"),
    ("no", "Norwegian"),
    ("pa", "Punjabi"),
    ("pl", "Polish"),
    ("ps", "Pashto"),
    ("pt", "Portuguese"),
    ("ro", "Romanian"),
    ("ru", "Russian"),
    ("si", "Sinhala"),
    ("sk", "Slovak"),
    ("sl", "Slovenian"),
    ("so", "Somali"),
    ("sq", "Albanian"),
    ("sr", "Serbian"),
    ("sv", "Swedish"),
    ("sw", "Swahili"),
    ("ta", "Tamil"),
    ("te", "Telugu"),
    ("th", "Thai"),
    ("tl", "Filipino"),
    ("tr", "Turkish"),
    ("uk", "Ukrainian"),
    ("ur", "Urdu"),
    ("uz", "Uzbek"),
    ("vi", "Vietnamese"),
    ("yo", "Yoruba"),
    ("zh-CN", "Chinese (Simplified)"),
    ("zh-TW", "Chinese (Traditional)"),
    ("zu", "Zulu"),
];

/// Prints all known language codes to stdout.
pub fn print_languages() {
    println!("{}", Style::header("Supported language codes"));
    for (code, name) in SUPPORTED_LANGUAGES {
        println!("{}", language_line(code, name));
    }
}

/// Pads the code before styling so escape codes do not eat the column width.
fn language_line(code: &str, name: &str) -> String {
    format!(
        "  {} {}",
        Style::code(format!("{code:6}")),
        Style::secondary(name)
    )
}

/// Maps a language code or English name to the code the service expects.
///
/// Matching is case-insensitive. `"Spanish"` and `"es"` both yield `"es"`,
/// `"zh-tw"` yields `"zh-TW"`; a bare family name such as `"chinese"` picks
/// the first variant listed. Unknown input is returned lowercased so the
/// service can decide.
pub fn resolve_language_code(input: &str) -> String {
    let wanted = input.trim().to_lowercase();

    if let Some((code, _)) = SUPPORTED_LANGUAGES
        .iter()
        .find(|(code, _)| code.eq_ignore_ascii_case(&wanted))
    {
        return (*code).to_string();
    }

    let by_name = SUPPORTED_LANGUAGES.iter().find(|(_, name)| {
        let name = name.to_lowercase();
        name == wanted || name.split(" (").next() == Some(wanted.as_str())
    });

    by_name.map_or(wanted, |(code, _)| (*code).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_language_code_accepts_codes() {
        assert_eq!(resolve_language_code("es"), "es");
        assert_eq!(resolve_language_code("ES"), "es");
        assert_eq!(resolve_language_code("zh-TW"), "zh-TW");
        assert_eq!(resolve_language_code("zh-tw"), "zh-TW");
        assert_eq!(resolve_language_code("ZH-CN"), "zh-CN");
    }

    #[test]
    fn test_resolve_language_code_accepts_names() {
        assert_eq!(resolve_language_code("Spanish"), "es");
        assert_eq!(resolve_language_code("japanese"), "ja");
        assert_eq!(resolve_language_code("chinese"), "zh-CN");
        assert_eq!(resolve_language_code("Chinese (Traditional)"), "zh-TW");
    }

    #[test]
    fn test_resolve_language_code_passes_unknown_through() {
        assert_eq!(resolve_language_code("Klingon"), "klingon");
        assert_eq!(resolve_language_code("auto"), "auto");
    }

    #[test]
    fn test_supported_languages_are_unique_ignoring_case() {
        for (i, (code, _)) in SUPPORTED_LANGUAGES.iter().enumerate() {
            assert!(
                SUPPORTED_LANGUAGES[i + 1..]
                    .iter()
                    .all(|(c, _)| !c.eq_ignore_ascii_case(code)),
                "duplicate code {code}"
            );
        }
    }

    #[test]
    fn test_language_line_pads_code_to_column() {
        let line = language_line("es", "Spanish");
        assert!(line.contains("es    "), "line: {line:?}");
        assert!(line.contains("Spanish"));

        let wide = language_line("zh-CN", "Chinese (Simplified)");
        assert!(wide.contains("zh-CN "), "line: {wide:?}");
    }
}
