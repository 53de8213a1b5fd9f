//! HTTP routing and OpenAPI documentation configuration.
//!
//! All API endpoints are registered here with their OpenAPI specifications,
//! and Swagger UI is served at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and
/// Swagger UI documentation.
///
/// The OpenAPI specification is available at `/api/docs/openapi.json`;
/// interactive documentation is served at `/api/docs`.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "MediLink", description = "MediLink API"), tags(
        (name = controller::auth::AUTH_TAG, description = "Authentication API routes"),
        (name = controller::hospital::HOSPITAL_TAG, description = "Hospital registry routes"),
        (name = controller::donation::DONATION_TAG, description = "Donation routes"),
        (name = controller::shipment::SHIPMENT_TAG, description = "Shipment workflow routes"),
        (name = controller::logistics::LOGISTICS_TAG, description = "Logistics handler routes"),
        (name = controller::notification::NOTIFICATION_TAG, description = "Notification routes"),
        (name = controller::dashboard::DASHBOARD_TAG, description = "Dashboard metrics routes"),
        (name = controller::notice::NOTICE_TAG, description = "Published notice routes"),
        (name = controller::publication::PUBLICATION_TAG, description = "Medication offer routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::register))
        .routes(routes!(controller::auth::login))
        .routes(routes!(controller::auth::logout))
        .routes(routes!(controller::auth::get_user))
        .routes(routes!(
            controller::hospital::list_hospitals,
            controller::hospital::create_hospital
        ))
        .routes(routes!(
            controller::donation::create_donation,
            controller::donation::list_donations
        ))
        .routes(routes!(controller::shipment::create_shipment))
        .routes(routes!(controller::shipment::get_shipment))
        .routes(routes!(
            controller::logistics::create_handler,
            controller::logistics::list_handlers
        ))
        .routes(routes!(
            controller::logistics::update_handler,
            controller::logistics::delete_handler
        ))
        .routes(routes!(controller::notification::list_notifications))
        .routes(routes!(
            controller::notification::mark_notification_read,
            controller::notification::delete_notification
        ))
        .routes(routes!(controller::dashboard::get_dashboard_metrics))
        .routes(routes!(controller::notice::list_published_notices))
        .routes(routes!(controller::notice::create_notice))
        .routes(routes!(
            controller::publication::list_publications,
            controller::publication::create_publication
        ))
        .routes(routes!(controller::publication::update_publication))
        .split_for_parts();

    let routes = routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api));

    routes
}
