use actix_web::{web, App, HttpServer};
use clap::Parser;
use promptlab::api::resources::{ensure_resources, ResourceDir};
use promptlab::cli::{commands::{Cli, Commands}, run_cli};
use promptlab::config::AppConfig;
use promptlab::resolver::Resolver;
use std::path::PathBuf;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    if !matches!(cli.command, Commands::Serve) {
        if let Err(e) = run_cli(cli.command, cli.config).await {
            error!("{}", e);
            std::process::exit(1);
        }
        return Ok(());
    }

    info!("Starting Promptlab server...");

    let config = match AppConfig::load(&cli.config) {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let resource_dir = PathBuf::from(&config.resources.dir);
    if let Err(e) = ensure_resources(&resource_dir) {
        warn!("Could not prepare resources directory {}: {}", resource_dir.display(), e);
    }

    let resolver = web::Data::new(Resolver::from_config(&config));
    if resolver.provider().is_none() {
        warn!("Chat will answer with predefined responses only");
    }

    let host = config.server.host.clone();
    let port = config.server.port;
    let config = web::Data::new(config);
    let resource_dir = web::Data::new(ResourceDir(resource_dir));

    info!("Server listening on {}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .app_data(config.clone())
            .app_data(resolver.clone())
            .app_data(resource_dir.clone())
            .configure(promptlab::api::routes::configure)
    })
    .bind((host, port))?
    .run()
    .await
}
