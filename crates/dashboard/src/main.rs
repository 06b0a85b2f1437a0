pub mod api;
pub mod cli;
pub mod mutations;
pub mod queries;
pub mod session;
pub mod shared;
pub mod system;
pub mod views;

use clap::Parser;

use crate::api::ApiClient;
use crate::cli::Cli;
use crate::session::Session;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    system::tracing::initialize()?;

    let config = shared::config::load_config()?;
    tracing::info!("API: {}", config.api.base_url);

    let client = ApiClient::new(&config.api)?;
    let session = Session::new(client, &config);

    // Таблицы и уведомления идут в stdout, логи в stderr
    let output = cli::run(&session, cli.command).await?;
    print!("{}", output);
    Ok(())
}
