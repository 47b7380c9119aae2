use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;

use clap::Parser;
use extra_analysis::{analyzer_for, AnalysisConfig, Language};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Parser)]
#[command(
    name = "extra-analysis-stem",
    about = "Stem Esperanto or Serbian/Croatian words"
)]
struct Cli {
    /// Stemming language (eo, sr, hr, ...); overrides the config file
    #[arg(long, env = "EXTRA_ANALYSIS_LANGUAGE")]
    language: Option<Language>,

    /// Path to an analysis config file (JSON)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Lowercase words before stemming
    #[arg(long)]
    lowercase: bool,

    /// Print a JSON array instead of tab-separated lines
    #[arg(long)]
    json: bool,

    /// Write logs to stderr as JSON lines
    #[arg(long)]
    log_json: bool,

    /// Words to stem; read whitespace-separated words from stdin if none given
    words: Vec<String>,
}

#[derive(Debug, Serialize)]
struct StemmedToken<'a> {
    token: &'a str,
    stem: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_json);

    let mut config = match &cli.config {
        Some(path) => AnalysisConfig::from_path(path)?,
        None => AnalysisConfig::from_env_or_default()?,
    };
    if let Some(language) = cli.language {
        config.language = language;
    }
    config.lowercase |= cli.lowercase;

    let words = if cli.words.is_empty() {
        let mut input = String::new();
        io::stdin().read_to_string(&mut input)?;
        input.split_whitespace().map(str::to_string).collect()
    } else {
        cli.words
    };

    let filter = analyzer_for(&config);
    info!(language = %config.language, words = words.len(), "stemming");
    let stems = filter.stem_batch(&words);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    if cli.json {
        let tokens: Vec<StemmedToken<'_>> = words
            .iter()
            .zip(stems)
            .map(|(token, stem)| StemmedToken { token, stem })
            .collect();
        serde_json::to_writer_pretty(&mut out, &tokens)?;
        writeln!(out)?;
    } else {
        for (token, stem) in words.iter().zip(&stems) {
            writeln!(out, "{token}\t{stem}")?;
        }
    }
    out.flush()?;
    Ok(())
}

/// Logs go to stderr so stdout only carries stems.
fn init_logging(json: bool) {
    let json_layer = json.then(|| {
        tracing_subscriber::fmt::layer()
            .with_writer(io::stderr)
            .json()
    });
    let text_layer = (!json).then(|| {
        tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_writer(io::stderr)
    });

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "warn,extra_analysis=info".into());

    tracing_subscriber::registry()
        .with(json_layer)
        .with(text_layer)
        .with(env_filter)
        .init();
}
