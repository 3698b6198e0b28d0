use super::*;

#[test]
fn defaults_when_unset() {
    let config = ServerConfig::from_values(None, None);
    assert_eq!(config, ServerConfig { bind_addr: DEFAULT_BIND_ADDR.to_owned(), port: DEFAULT_PORT });
    assert_eq!(config.socket_addr(), "0.0.0.0:3000");
}

#[test]
fn explicit_values_are_used() {
    let config = ServerConfig::from_values(Some("127.0.0.1"), Some("8080"));
    assert_eq!(config.socket_addr(), "127.0.0.1:8080");
}

#[test]
fn values_are_trimmed() {
    let config = ServerConfig::from_values(Some("  127.0.0.1 "), Some(" 4000 "));
    assert_eq!(config.socket_addr(), "127.0.0.1:4000");
}

#[test]
fn invalid_port_falls_back_to_default() {
    assert_eq!(ServerConfig::from_values(None, Some("http")).port, DEFAULT_PORT);
    assert_eq!(ServerConfig::from_values(None, Some("70000")).port, DEFAULT_PORT);
}

#[test]
fn blank_bind_addr_falls_back_to_default() {
    assert_eq!(ServerConfig::from_values(Some("   "), None).bind_addr, DEFAULT_BIND_ADDR);
}
