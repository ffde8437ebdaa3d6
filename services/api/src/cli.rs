use crate::commands::{run_batch, run_normalize, BatchArgs, NormalizeArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use title_mapper::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Title Mapper",
    about = "Normalize company titles to canonical names from the command line or over HTTP",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Normalize titles given on the command line, one result per line
    Normalize(NormalizeArgs),
    /// Normalize one column of a CSV file
    Batch(BatchArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Normalize(args) => run_normalize(args),
        Command::Batch(args) => run_batch(args),
    }
}
