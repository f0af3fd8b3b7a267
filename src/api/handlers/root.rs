//! Handler for the liveness probe.

/// Confirms the process is serving requests.
///
/// # Endpoint
///
/// `GET /`
pub async fn root_handler() -> &'static str {
    "Server is running!"
}
