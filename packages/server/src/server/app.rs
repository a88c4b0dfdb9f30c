//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    extract::Extension,
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        HeaderValue, Method,
    },
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::domains::access::AccessControlService;
use crate::server::routes::{
    access_status_handler, approve_access_handler, elf_anomalies_handler, export_kml_handler,
    export_pdf_handler, health_handler, request_access_handler, schumann_handler, zeta_c_handler,
};

/// Shared application state
#[derive(Clone)]
pub struct AxumAppState {
    pub access: Arc<AccessControlService>,
}

/// CORS layer for the configured origins; `*` allows any origin
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let allow_origin = if allowed_origins.iter().any(|origin| origin == "*") {
        AllowOrigin::any()
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .iter()
            .filter_map(|origin| match HeaderValue::from_str(origin) {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                    None
                }
            })
            .collect();
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE])
}

/// Build the Axum application router
///
/// The access service is created once at startup and shared by every
/// request through the `Extension` layer.
pub fn build_app(access: Arc<AccessControlService>, allowed_origins: &[String]) -> Router {
    let app_state = AxumAppState { access };

    Router::new()
        // Access workflow
        .route("/api/request-access", post(request_access_handler))
        .route(
            "/api/approve-access/:request_id",
            post(approve_access_handler),
        )
        .route("/api/access-status", get(access_status_handler))
        // Mock data
        .route("/api/schumann", get(schumann_handler))
        .route("/api/zeta-c", get(zeta_c_handler))
        .route("/api/elf-anomalies", get(elf_anomalies_handler))
        // Exports
        .route("/api/export", post(export_pdf_handler))
        .route("/api/export/kml", post(export_kml_handler))
        // Health check
        .route("/health", get(health_handler))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer(allowed_origins))
                .layer(Extension(app_state)),
        )
}
