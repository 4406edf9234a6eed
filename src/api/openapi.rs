//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{bookings, checkins, equipment, events, health, users};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Eventrix API",
        version = "0.1.0",
        description = "Event and equipment booking REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api", description = "API")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Users
        users::list_users,
        users::get_user,
        users::create_user,
        users::update_user,
        users::delete_user,
        // Events
        events::list_events,
        events::get_event,
        events::create_event,
        events::update_event,
        events::delete_event,
        // Equipment
        equipment::list_equipment,
        equipment::get_equipment,
        equipment::create_equipment,
        equipment::update_equipment,
        equipment::delete_equipment,
        // Bookings
        bookings::list_bookings,
        bookings::get_booking,
        bookings::create_booking,
        bookings::update_booking,
        bookings::delete_booking,
        // Check-ins
        checkins::list_checkins,
        checkins::get_checkin,
        checkins::create_checkin,
        checkins::update_checkin,
        checkins::delete_checkin,
    ),
    components(
        schemas(
            crate::models::User,
            crate::models::Event,
            crate::models::Equipment,
            crate::models::Booking,
            crate::models::CheckIn,
            health::HealthResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "users", description = "User management"),
        (name = "events", description = "Events"),
        (name = "equipment", description = "Equipment inventory"),
        (name = "bookings", description = "Equipment bookings"),
        (name = "checkins", description = "Event attendance")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_resource_path() {
        let doc = ApiDoc::openapi();
        for path in [
            "/health",
            "/ready",
            "/users",
            "/users/{id}",
            "/events/{id}",
            "/equipment",
            "/bookings/{id}",
            "/checkins",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }

    #[test]
    fn update_responses_describe_the_insert_outcome() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();
        for path in [
            "/users/{id}",
            "/events/{id}",
            "/equipment/{id}",
            "/bookings/{id}",
            "/checkins/{id}",
        ] {
            let description = doc["paths"][path]["put"]["responses"]["200"]["description"]
                .as_str()
                .unwrap_or_default();
            assert!(
                description.contains("inserted under the path ID"),
                "{path}: {description}"
            );
        }
    }
}
