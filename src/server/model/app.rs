use sea_orm::DatabaseConnection;

use crate::server::service::geo::GeoClient;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    /// Present when a geolocation API is configured
    pub geo_client: Option<GeoClient>,
    /// Whether the voter key may come from `X-Forwarded-For`
    pub trust_forwarded_for: bool,
}
