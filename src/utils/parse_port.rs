/// Parse a TCP port typed by a user. Only `1..=65535` is accepted.
pub fn parse_port(value: &str) -> Result<u16, String> {
    let t = value.trim();
    let port = t
        .parse::<u32>()
        .map_err(|_| format!("Invalid port number: {}", t))?;
    if port == 0 || port > 65535 {
        return Err("Invalid port number: Port must be between 1 and 65535".to_string());
    }
    Ok(port as u16)
}
