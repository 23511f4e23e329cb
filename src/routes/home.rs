//! Index route.

/// Greeting served at the site root.
pub async fn index() -> &'static str {
    "Hello from API"
}
