//! Porter CLI
//!
//! Command-line interface for the English and Russian Porter stemmers.

use anyhow::Context;
use clap::{Arg, ArgAction, ArgMatches, Command};
use porter_core::{PorterError, StemmedWord};
use porter_pipeline::{LanguageMode, Pipeline, PipelineConfig};
use std::io::{self, BufWriter, Read, Write};
use std::path::Path;
use std::process;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Output layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    /// One stem per line
    Plain,
    /// `word<TAB>stem` per line
    Pairs,
    /// A JSON array of stemmed words
    Json,
}

impl Format {
    const ALL: [Self; 3] = [Self::Plain, Self::Pairs, Self::Json];

    const fn name(self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::Pairs => "pairs",
            Self::Json => "json",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        match name {
            "plain" => Some(Self::Plain),
            "pairs" => Some(Self::Pairs),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

fn cli() -> Command {
    Command::new("porter")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Porter stemmer for English and Russian text")
        .arg(
            Arg::new("word")
                .short('w')
                .long("word")
                .value_name("WORD")
                .help("Stem WORD instead of reading input (repeatable)")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("language")
                .short('l')
                .long("language")
                .value_name("LANG")
                .help("Stemmer to use: en, ru or auto (per word, by script)")
                .env("PORTER_LANGUAGE")
                .default_value("auto"),
        )
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .value_name("FORMAT")
                .help("Output format")
                .value_parser(Format::ALL.map(Format::name))
                .default_value(Format::Plain.name()),
        )
        .arg(
            Arg::new("min-length")
                .long("min-length")
                .value_name("N")
                .help("Skip words shorter than N characters")
                .value_parser(clap::value_parser!(usize))
                .default_value("1"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Log debug information to stderr")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("files")
                .value_name("FILE")
                .help("Text files to stem; `-` or none reads standard input")
                .num_args(0..)
                .index(1),
        )
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("porter_cli=debug,porter_pipeline=debug"))
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("porter_cli=info,porter_pipeline=info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}

fn main() {
    let matches = cli().get_matches();
    init_logging(matches.get_flag("verbose"));

    if let Err(e) = run(&matches) {
        eprintln!("{e}");
        process::exit(1);
    }
}

fn run(matches: &ArgMatches) -> Result<(), anyhow::Error> {
    let config = config_from(matches)?;
    let format = format_from(matches)?;
    tracing::debug!(language = %config.language, min_length = config.min_length, ?format, "starting");

    let mut pipeline = Pipeline::new(config);
    let results = match matches.get_many::<String>("word") {
        Some(words) => words.map(|word| pipeline.stem_word(word)).collect(),
        None => {
            let files: Vec<&str> = matches
                .get_many::<String>("files")
                .map(|files| files.map(String::as_str).collect())
                .unwrap_or_default();
            stem_inputs(&mut pipeline, &files)?
        }
    };

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    render(&results, format, &mut out)?;
    out.flush()?;
    Ok(())
}

fn config_from(matches: &ArgMatches) -> Result<PipelineConfig, anyhow::Error> {
    let language = matches
        .get_one::<String>("language")
        .map_or(Ok(LanguageMode::Auto), |name| name.parse::<LanguageMode>())?;
    let min_length = matches.get_one::<usize>("min-length").copied().unwrap_or(1);
    Ok(PipelineConfig {
        language,
        min_length,
    })
}

fn format_from(matches: &ArgMatches) -> Result<Format, anyhow::Error> {
    match matches.get_one::<String>("format") {
        Some(name) => Format::from_name(name)
            .with_context(|| format!("porter: unknown output format `{name}`")),
        None => Ok(Format::Plain),
    }
}

/// Stem each input in order; no inputs means standard input
fn stem_inputs(pipeline: &mut Pipeline, files: &[&str]) -> Result<Vec<StemmedWord>, anyhow::Error> {
    if files.is_empty() {
        return stem_stdin(pipeline);
    }

    let mut results = Vec::new();
    for file in files {
        if *file == "-" {
            results.extend(stem_stdin(pipeline)?);
        } else {
            results.extend(pipeline.stem_file(Path::new(file))?);
        }
    }
    Ok(results)
}

fn stem_stdin(pipeline: &mut Pipeline) -> Result<Vec<StemmedWord>, anyhow::Error> {
    stem_reader(pipeline, "<stdin>", io::stdin().lock())
}

fn stem_reader(
    pipeline: &mut Pipeline,
    name: &str,
    mut reader: impl Read,
) -> Result<Vec<StemmedWord>, anyhow::Error> {
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|e| PorterError::unreadable(name, e))?;
    Ok(pipeline.stem_source(name, &bytes)?)
}

fn render(results: &[StemmedWord], format: Format, out: &mut impl Write) -> Result<(), anyhow::Error> {
    match format {
        Format::Plain => {
            for word in results {
                writeln!(out, "{}", word.stem)?;
            }
        }
        Format::Pairs => {
            for word in results {
                writeln!(out, "{}\t{}", word.word, word.stem)?;
            }
        }
        Format::Json => {
            serde_json::to_writer_pretty(&mut *out, results)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
