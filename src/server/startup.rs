use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::server::{config::Config, error::Error, service::geo::GeoClient};

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Build the geolocation client, `None` when no geolocation API is configured
pub fn build_geo_client(config: &Config) -> Result<Option<GeoClient>, Error> {
    let Some(geo_api_url) = &config.geo_api_url else {
        tracing::info!("GEO_API_URL not set, votes will be recorded without location");
        return Ok(None);
    };

    let geo_client = GeoClient::new(
        geo_api_url.as_str(),
        config.geo_max_attempts,
        config.geo_backoff,
    )?;

    Ok(Some(geo_client))
}
