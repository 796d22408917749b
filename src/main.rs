use std::net::SocketAddr;

use dioxus_logger::tracing::{self, Level};
use maxranked::server::{config::Config, error::Error, model::app::AppState, router, startup};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    if let Err(e) = dioxus_logger::init(Level::INFO) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = serve(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

async fn serve(config: Config) -> Result<(), Error> {
    let db = startup::connect_to_database(&config).await?;
    let geo_client = startup::build_geo_client(&config)?;

    if config.trust_forwarded_for {
        tracing::info!("Identifying voters by X-Forwarded-For");
    }

    let router = router::routes().with_state(AppState {
        db,
        geo_client,
        trust_forwarded_for: config.trust_forwarded_for,
    });

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;

    tracing::info!("Starting server on {}", config.bind_address);

    axum::serve(
        listener,
        router.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
