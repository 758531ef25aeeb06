use clap::{CommandFactory, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "translate")]
#[command(about = "Translates a sentence into a specific language")]
#[command(override_usage = "translate -l <language> -s <sentence>")]
#[command(version)]
pub struct Args {
    /// Translate to language (code or English name, e.g. es, ja, French)
    #[arg(short = 'l', long)]
    pub language: Option<String>,

    /// Sentence to be translated
    #[arg(short = 's', long)]
    pub sentence: Option<String>,

    /// Source language (defaults to auto-detection)
    #[arg(short = 'f', long)]
    pub from: Option<String>,

    /// Translation service base URL
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Request timeout in seconds (0 disables the timeout)
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Hide the progress spinner
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Print debug diagnostics to stderr
    #[arg(short = 'v', long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List known language codes
    Languages,
}

/// A validated translation request: both fields present and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub language: String,
    pub sentence: String,
}

impl Request {
    /// Returns `None` if either value is missing or empty.
    pub fn from_parts(language: Option<&str>, sentence: Option<&str>) -> Option<Self> {
        let language = language.filter(|s| !s.is_empty())?;
        let sentence = sentence.filter(|s| !s.is_empty())?;
        Some(Self {
            language: language.to_string(),
            sentence: sentence.to_string(),
        })
    }
}

impl Args {
    pub fn request(&self) -> Option<Request> {
        Request::from_parts(self.language.as_deref(), self.sentence.as_deref())
    }
}

/// Help text as printed by `--help`.
pub fn help_text() -> String {
    Args::command().render_help().to_string()
}
