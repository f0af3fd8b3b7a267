//! Cross-origin resource sharing policy.

use tower_http::cors::CorsLayer;

/// Allows requests from any origin with any method and headers.
///
/// The shorten endpoint is called directly from browser front-ends served
/// on other origins.
pub fn layer() -> CorsLayer {
    CorsLayer::permissive()
}
