use tower_http::cors::CorsLayer;

/// Creates a permissive CORS layer.
///
/// Allows any origin, method and header. Dashboards are served from
/// arbitrary hosts and the API carries no credentials, so origins are
/// not restricted.
pub fn create_permissive_cors_layer() -> CorsLayer {
    CorsLayer::permissive()
}
