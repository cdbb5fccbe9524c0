use apikey_api::{config::Config, run_server, tracing_config, Server};
use clap::Parser;
use tracing::{event, Level};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    color_eyre::install()?;
    dotenv::dotenv().ok();
    let config = Config::parse();

    tracing_config::configure("apikey-api", std::io::stdout)?;

    let Server { server, .. } = run_server(config)?;
    server.await?;

    event!(Level::INFO, "Server stopped");
    Ok(())
}
