use crate::infra::{build_normalizer, parse_policy};
use clap::Args;
use std::path::PathBuf;
use title_mapper::config::AppConfig;
use title_mapper::error::AppError;
use title_mapper::telemetry;
use title_mapper::titles::{normalize_csv_file, BatchOptions, MatchPolicy, NameNormalizer};

/// Alias source overrides shared by the one-shot commands.
#[derive(Args, Debug, Default)]
pub(crate) struct AliasSourceArgs {
    /// Alias file (`alias,canonical` CSV or JSON array). Defaults to TITLE_MAPPER_ALIASES
    /// or the built-in company map.
    #[arg(long)]
    pub(crate) aliases: Option<PathBuf>,
    /// Tie-break when several aliases match: first_listed or longest_alias
    #[arg(long, value_parser = parse_policy)]
    pub(crate) policy: Option<MatchPolicy>,
}

#[derive(Args, Debug)]
pub(crate) struct NormalizeArgs {
    #[command(flatten)]
    pub(crate) source: AliasSourceArgs,
    /// Titles to normalize
    #[arg(required = true)]
    pub(crate) titles: Vec<String>,
}

#[derive(Args, Debug)]
pub(crate) struct BatchArgs {
    #[command(flatten)]
    pub(crate) source: AliasSourceArgs,
    /// CSV file to read
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// CSV file to write
    #[arg(long)]
    pub(crate) output: PathBuf,
    /// Header of the column holding company titles
    #[arg(long)]
    pub(crate) column: String,
    /// Append normalized titles under this header instead of rewriting the column
    #[arg(long)]
    pub(crate) output_column: Option<String>,
}

pub(crate) fn run_normalize(args: NormalizeArgs) -> Result<(), AppError> {
    let NormalizeArgs { source, titles } = args;
    let normalizer = prepare(source)?;

    for title in normalizer.normalize_list(&titles) {
        println!("{title}");
    }

    Ok(())
}

pub(crate) fn run_batch(args: BatchArgs) -> Result<(), AppError> {
    let BatchArgs {
        source,
        input,
        output,
        column,
        output_column,
    } = args;

    let normalizer = prepare(source)?;
    let options = BatchOptions {
        column,
        output_column,
    };
    let summary = normalize_csv_file(&normalizer, &input, &output, &options)?;

    println!(
        "Normalized {} rows from {} into {} ({} matched, {} unchanged)",
        summary.rows,
        input.display(),
        output.display(),
        summary.matched,
        summary.unchanged
    );

    Ok(())
}

fn prepare(source: AliasSourceArgs) -> Result<NameNormalizer, AppError> {
    let mut config = AppConfig::load()?;
    if let Some(path) = source.aliases {
        config.titles.alias_path = Some(path);
    }
    if let Some(policy) = source.policy {
        config.titles.policy = policy;
    }

    telemetry::init(&config.telemetry)?;
    build_normalizer(&config.titles)
}
