mod cli;
mod console;
mod infra;
mod routes;
mod server;

use anju::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
