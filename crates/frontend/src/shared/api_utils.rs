//! API utilities for frontend-backend communication

/// Port the backend listens on (see `[server] port` in config.toml)
const BACKEND_PORT: &str = "3000";

/// Get the base URL for API requests
///
/// When the page is served by the backend itself the base is empty and
/// requests stay same-origin; under a dev server (e.g. `trunk serve` on 8080)
/// requests go to the backend port on the same host.
pub fn api_base() -> String {
    let Some(window) = web_sys::window() else {
        return String::new();
    };
    let location = window.location();
    let port = location.port().unwrap_or_default();
    if port == BACKEND_PORT {
        return String::new();
    }

    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, BACKEND_PORT)
}

/// Build a full API URL from a path
///
/// # Example
/// ```ignore
/// let url = api_url("/api/d400/options");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
