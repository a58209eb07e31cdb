use axum::{middleware, Router};
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{auth, book},
    middleware::error::attach_trace_id,
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "ReadTrack API",
        description = "Personal book tracking API"
    ),
    tags(
        (name = "book", description = "Book collection management"),
        (name = "auth", description = "Optional login through an external identity provider")
    )
)]
struct ApiDoc;

/// API routes with their OpenAPI operations.
pub fn router() -> OpenApiRouter<AppState> {
    OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(book::create_book, book::get_books))
        .routes(routes!(
            book::get_book_by_id,
            book::update_book,
            book::delete_book
        ))
        .routes(routes!(auth::login))
        .routes(routes!(auth::callback))
        .routes(routes!(auth::logout))
        .routes(routes!(auth::get_user))
}

/// Builds the API router with Swagger UI and request tracing.
///
/// Every request receives an `x-request-id` header before any handler runs; error
/// envelopes carry that value as `trace_id` and the header is echoed back on the
/// response. Swagger UI is served at `/api/docs`.
///
/// # Arguments
/// - `state` - Shared application state
///
/// # Returns
/// A router ready to be merged with the web application router. The session
/// layer is applied by the caller.
pub fn build(state: AppState) -> Router {
    let (api, openapi) = router().split_for_parts();

    api.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", openapi))
        .layer(middleware::from_fn(attach_trace_id))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .with_state(state)
}
