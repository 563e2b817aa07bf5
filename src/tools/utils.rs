const KNOWN_SCHEMES: [&str; 5] = ["http://", "https://", "file://", "data:", "about:"];

/// Normalize an address typed by the user by adding a missing scheme
pub fn normalize_url(url: &str) -> String {
    let trimmed = url.trim();

    if KNOWN_SCHEMES.iter().any(|scheme| trimmed.starts_with(scheme)) {
        return trimmed.to_string();
    }

    // local development servers rarely speak TLS
    if trimmed.starts_with("localhost") || trimmed.starts_with("127.0.0.1") {
        return format!("http://{}", trimmed);
    }

    format!("https://{}", trimmed)
}
