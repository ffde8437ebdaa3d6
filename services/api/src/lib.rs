mod cli;
mod commands;
mod infra;
mod routes;
mod server;

use title_mapper::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
