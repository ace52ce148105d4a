use anyhow::Context;
use bookstore::{
    cli_args::CliArgs,
    server::{Server, ServerConfig},
};
use clap::Parser;

fn init_tracing() -> anyhow::Result<()> {
    tracing::subscriber::set_global_default(
        tracing_subscriber::fmt::Subscriber::builder()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .finish(),
    )
    .context("Failed to set global tracing subscriber")?;

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    if std::env::var_os("RUST_LOG").is_none() {
        std::env::set_var("RUST_LOG", "server=trace,bookstore=trace,tower_http=trace");
    }

    init_tracing()?;

    let cli_args = CliArgs::parse();

    tracing::info!("Starting ...");

    let server_config = match cli_args.config_file {
        Some(config_file) => ServerConfig::from_config_file(config_file).await?,
        None => {
            tracing::info!("No config file given, using defaults");

            ServerConfig::default()
        }
    };

    let server = Server::new(server_config);

    server.run().await?;

    Ok(())
}
