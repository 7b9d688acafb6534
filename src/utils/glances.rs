/// Port the Glances web UI listens on.
pub const GLANCES_PORT: &str = "61208";

/// Link to the Glances UI running next to the dashboard on `host`.
///
/// The dashboard's own port `8080` maps to Glances' port; any other explicit
/// port is kept as is.
pub fn glances_url(host: &str, port: Option<&str>) -> String {
    let port = match port.map(str::trim).filter(|p| !p.is_empty()) {
        Some(p) => p.replacen("8080", GLANCES_PORT, 1),
        None => GLANCES_PORT.to_string(),
    };
    format!("http://{}:{}", host, port)
}

/// Split a `Host` header into host and optional port (IPv6 literals kept whole).
pub fn split_host_header(raw: &str) -> (&str, Option<&str>) {
    let raw = raw.trim();
    if raw.starts_with('[') {
        return match raw.find("]:") {
            Some(idx) => (&raw[..=idx], Some(&raw[idx + 2..])),
            None => (raw, None),
        };
    }
    match raw.rsplit_once(':') {
        Some((h, p)) => (h, Some(p)),
        None => (raw, None),
    }
}
