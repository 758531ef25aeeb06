use anyhow::Result;
use clap::Parser;
use std::io;
use std::process::ExitCode;

use translate_cli::cli::commands::translate::{self, TranslateOptions};
use translate_cli::cli::{Args, Command, help_text};
use translate_cli::config::{
    ConfigFile, ConfigManager, ResolveOptions, ResolvedConfig, resolve_config,
};
use translate_cli::logging;
use translate_cli::output::{self, OutputConfig};
use translate_cli::translation::{GoogleTranslator, print_languages};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let args = Args::parse();

    output::init(OutputConfig::from_flags(args.quiet, args.no_color));
    logging::init(args.verbose);

    if let Some(Command::Languages) = args.command {
        print_languages();
        return Ok(ExitCode::SUCCESS);
    }

    let request = args.request();

    // The usage path must not depend on a readable config file.
    let resolved = if request.is_some() {
        load_config(&args)?
    } else {
        resolve_config(&ResolveOptions::default(), &ConfigFile::default())?
    };

    let options = TranslateOptions {
        request,
        from: resolved.from,
        timeout: resolved.timeout,
        help: help_text(),
    };
    let translator = GoogleTranslator::new(resolved.endpoint);

    let outcome =
        translate::run_translate(options, &translator, &mut io::stdout(), &mut io::stderr())
            .await?;

    Ok(exit_code(outcome.exit_code()))
}

fn load_config(args: &Args) -> Result<ResolvedConfig> {
    let config_file = ConfigManager::new()?.load_or_default()?;
    resolve_config(
        &ResolveOptions {
            endpoint: args.endpoint.clone(),
            from: args.from.clone(),
            timeout_secs: args.timeout,
        },
        &config_file,
    )
}

fn exit_code(code: i32) -> ExitCode {
    u8::try_from(code).map_or(ExitCode::FAILURE, ExitCode::from)
}
