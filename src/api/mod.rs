//! HTTP API layer: route handlers, OpenAPI document and router composition.

pub mod handlers;

use axum::Router;
use utoipa::OpenApi;

use crate::app_state::AppState;

/// OpenAPI document covering every HTTP endpoint.
#[derive(Debug, OpenApi)]
#[openapi(
    info(title = "qplan-web", description = "Work-planning demo endpoints"),
    paths(handlers::work::work_handler, handlers::system::health_handler),
    components(schemas(crate::work::WorkResponse, crate::work::StaffingStats)),
    tags(
        (name = "Work", description = "Work snapshot for the planning page"),
        (name = "System", description = "Service health")
    )
)]
pub struct ApiDoc;

/// Builds the HTTP API router.
///
/// With the `swagger-ui` feature the interactive docs are served at
/// `/swagger-ui` and the raw document at `/api-docs/openapi.json`.
pub fn build_router() -> Router<AppState> {
    let router = handlers::routes();

    #[cfg(feature = "swagger-ui")]
    let router = router.merge(
        utoipa_swagger_ui::SwaggerUi::new("/swagger-ui")
            .url("/api-docs/openapi.json", ApiDoc::openapi()),
    );

    router
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openapi_lists_work_and_health_paths() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/app/web/work"));
        assert!(doc.paths.paths.contains_key("/health"));
    }

    #[test]
    fn openapi_collects_health_schema_from_path() {
        let doc = ApiDoc::openapi();
        let has_health = doc
            .components
            .is_some_and(|c| c.schemas.contains_key("HealthResponse"));
        assert!(has_health);
    }
}
