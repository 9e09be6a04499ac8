use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use futures::stream::{self, StreamExt};
use serde::Serialize;
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
use tracing_subscriber::EnvFilter;

use nocebo::report::{self, LabelSummary, ReportRow, SortOrder};
use nocebo::{NoceboAnalyzer, RewriteEngine, RiskLabel, SentenceResult, DEFAULT_MODEL_PATH};

#[derive(Parser, Debug)]
#[command(name = "nocebo")]
#[command(about = "Flag anxiety-inducing language in patient-facing medical text and suggest neutral rewrites")]
#[command(version)]
struct Args {
    /// Text to analyse; multiple arguments are joined with spaces
    text: Vec<String>,

    /// Analyse the contents of a file (repeatable)
    #[arg(short, long = "file", value_name = "PATH")]
    files: Vec<PathBuf>,

    /// Classifier artifact to load at startup
    #[arg(long, env = "NOCEBO_MODEL_PATH", default_value = DEFAULT_MODEL_PATH)]
    model: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Skip neutral rewrite suggestions
    #[arg(long)]
    no_rewrite: bool,

    /// Only show sentences with at least this risk label
    #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..=3))]
    min_risk: u8,

    /// Row ordering
    #[arg(long, value_enum, default_value_t = SortArg::Original)]
    sort: SortArg,

    /// Print per-label counts and high-risk callouts (text format)
    #[arg(long)]
    summary: bool,

    /// Increase log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    Csv,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SortArg {
    Original,
    RiskDesc,
    RiskAsc,
}

impl From<SortArg> for SortOrder {
    fn from(sort: SortArg) -> Self {
        match sort {
            SortArg::Original => SortOrder::Original,
            SortArg::RiskDesc => SortOrder::RiskDesc,
            SortArg::RiskAsc => SortOrder::RiskAsc,
        }
    }
}

/// Where a block of text came from
#[derive(Debug)]
enum InputSource {
    Inline(String),
    File(PathBuf),
}

impl InputSource {
    fn name(&self) -> String {
        match self {
            InputSource::Inline(_) => "<input>".to_string(),
            InputSource::File(path) => path.display().to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
struct DocumentReport {
    source: String,
    /// Sentences detected before any risk filter
    sentences: usize,
    /// Label counts over the reported rows
    summary: LabelSummary,
    rows: Vec<ReportRow>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // WHY: JSON logs go to stderr so stdout carries only analysis output
    let default_level = match args.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .json()
        .init();

    info!(?args, "Parsed CLI arguments");

    // WHY: the model is loaded once up front; without it nothing can be analysed
    let analyzer = NoceboAnalyzer::from_artifact_path(&args.model)
        .with_context(|| format!("Failed to load classifier artifact from {}", args.model.display()))?;
    info!(model = analyzer.classifier().model_name(), "Classifier ready");

    let sources = collect_sources(&args).await?;
    let reports = analyze_sources(&analyzer, sources, &args).await?;

    let output = match args.format {
        OutputFormat::Json => serde_json::to_string_pretty(&reports)? + "\n",
        OutputFormat::Csv => {
            let rows: Vec<ReportRow> = reports.into_iter().flat_map(|r| r.rows).collect();
            report::render_csv(&rows)
        }
        OutputFormat::Text => render_text_reports(&reports, &args),
    };
    print!("{output}");

    Ok(())
}

async fn collect_sources(args: &Args) -> Result<Vec<InputSource>> {
    let mut sources = Vec::new();
    if !args.text.is_empty() {
        sources.push(InputSource::Inline(args.text.join(" ")));
    }
    sources.extend(args.files.iter().cloned().map(InputSource::File));

    if sources.is_empty() {
        eprintln!("Enter text to analyse:");
        let mut line = String::new();
        BufReader::new(tokio::io::stdin())
            .read_line(&mut line)
            .await
            .context("Failed to read text from standard input")?;
        sources.push(InputSource::Inline(line));
    }
    Ok(sources)
}

/// Analyse every source concurrently, bounded by CPU count, keeping input order
async fn analyze_sources(analyzer: &NoceboAnalyzer, sources: Vec<InputSource>, args: &Args) -> Result<Vec<DocumentReport>> {
    let with_rewrites = !args.no_rewrite;
    let min_risk = RiskLabel::new(args.min_risk)?;
    let sort = SortOrder::from(args.sort);

    let outcomes: Vec<Result<DocumentReport>> = stream::iter(sources)
        .map(|source| {
            let analyzer = analyzer.clone();
            async move {
                let name = source.name();
                let text = match source {
                    InputSource::Inline(text) => text,
                    InputSource::File(path) => tokio::fs::read_to_string(&path)
                        .await
                        .with_context(|| format!("Failed to read input file {}", path.display()))?,
                };

                // WHY: analysis is CPU-bound, keep it off the async worker threads
                let results: Vec<SentenceResult> = tokio::task::spawn_blocking(move || analyzer.analyze(&text))
                    .await
                    .context("Analysis task failed")?;
                info!(source = %name, sentences = results.len(), "Analysed input");

                let rows = report::build_report(&results, RewriteEngine::standard(), with_rewrites);
                let mut rows = report::filter_min_risk(rows, min_risk);
                report::sort_rows(&mut rows, sort);
                let summary = LabelSummary::from_rows(&rows);

                Ok::<_, anyhow::Error>(DocumentReport { source: name, sentences: results.len(), summary, rows })
            }
        })
        .buffered(num_cpus::get().max(1))
        .collect()
        .await;

    outcomes.into_iter().collect()
}

fn render_text_reports(reports: &[DocumentReport], args: &Args) -> String {
    let mut out = String::new();
    let show_headers = reports.len() > 1;

    for document in reports {
        if show_headers {
            out.push_str(&format!("== {} ==\n", document.source));
        }
        if document.sentences == 0 {
            out.push_str("No sentences detected. Try adding punctuation (., !, ?).\n");
            continue;
        }
        out.push_str(&report::render_text(&document.rows, !args.no_rewrite));
        if args.summary {
            out.push_str(&report::render_summary(&document.rows));
        }
    }
    out
}
