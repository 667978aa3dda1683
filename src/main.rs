use clap::Parser;
use schema_builder::adapters::health_handler::HealthHandler;
use schema_builder::cli::{Cli, Command};
use schema_builder::config::Settings;
use schema_builder::generate;
use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let settings = Settings::new_with_cli(&cli)?;

    // Initialize tracing; log records from the core crate are bridged in
    let level = tracing::Level::from_str(&settings.logging.level)?;
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match cli.command() {
        Command::Serve => serve(&settings).await,
        Command::Generate { input, strict } => {
            let document = generate::read_document(input.as_deref())?;
            let output = generate::project_document(&document, strict, settings.preview.indent)?;
            println!("{}", output);
            Ok(())
        }
    }
}

async fn serve(settings: &Settings) -> anyhow::Result<()> {
    let app = schema_builder::create_app(Arc::new(HealthHandler::new()));

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;
    info!("Starting JSON Schema Builder on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
