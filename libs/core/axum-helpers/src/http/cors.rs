use tower_http::cors::CorsLayer;

/// Creates a permissive CORS layer.
///
/// Allows any origin, method and header. Suitable only for APIs that carry
/// no credentials.
pub fn create_permissive_cors_layer() -> CorsLayer {
    CorsLayer::permissive()
}
