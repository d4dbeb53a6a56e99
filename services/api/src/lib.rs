mod calculate;
mod cli;
mod infra;
mod render;
mod routes;
mod server;

use turnover_loss::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
