//! HTTP routing and OpenAPI documentation configuration.
//!
//! All API endpoints are registered here with their OpenAPI specifications, and Swagger UI
//! is served at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `GET /api/companies` - List companies with brands
/// - `GET /api/companies/search` - Search companies by name
/// - `GET /api/companies/suggest` - Suggest company names
/// - `GET /api/companies/{id}` - Company detail with rolled-up votes
/// - `GET /api/companies/{id}/votes` - Vote aggregate
/// - `GET /api/companies/{id}/descendants` - Descendant company IDs
/// - `GET /api/companies/{id}/hierarchy` - Direct parents and children
/// - `POST /api/companies/{id}/vote` - Vote a company up or down
/// - `POST /api/companies/{id}/parent` - Propose a parent company
/// - `POST /api/submissions/company` - Submit a company for review
/// - `POST /api/submissions/asset` - Submit a brand/asset for review
///
/// The OpenAPI specification is available at `/api/docs/openapi.json`.
///
/// # Example
/// ```ignore
/// let app_state = AppState {
///     db,
///     geo_client,
///     trust_forwarded_for: false,
/// };
/// let router = routes().with_state(app_state);
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "MaxRanked", description = "MaxRanked API"), tags(
        (name = controller::company::COMPANY_TAG, description = "Company browsing and rank API routes"),
        (name = controller::vote::VOTE_TAG, description = "Voting API routes"),
        (name = controller::submission::SUBMISSION_TAG, description = "Moderation queue submission API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::company::list_companies))
        .routes(routes!(controller::company::search_companies))
        .routes(routes!(controller::company::suggest_companies))
        .routes(routes!(controller::company::get_company))
        .routes(routes!(controller::company::get_company_votes))
        .routes(routes!(controller::company::get_company_descendants))
        .routes(routes!(controller::company::get_company_hierarchy))
        .routes(routes!(controller::vote::submit_vote))
        .routes(routes!(controller::submission::submit_parent))
        .routes(routes!(controller::submission::submit_company))
        .routes(routes!(controller::submission::submit_asset))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
