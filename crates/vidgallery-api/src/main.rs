mod error;
mod handlers;
mod metadata_store_impl;
mod setup;
mod state;
mod telemetry;

use vidgallery_core::Config;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // Load configuration
    let config = Config::from_env()?;

    telemetry::init_telemetry();

    // Initialize the application (database, storage, pipeline, routes)
    let (_state, router) = setup::initialize_app(config.clone()).await?;

    // Start the server
    setup::server::start_server(&config, router).await?;

    Ok(())
}
