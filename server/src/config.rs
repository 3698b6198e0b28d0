//! Server configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: String,
    pub port: u16,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `BIND_ADDR`: default `0.0.0.0`
    /// - `PORT`: default 3000; unparseable values fall back to the default
    pub fn from_env() -> Self {
        Self::from_values(std::env::var("BIND_ADDR").ok().as_deref(), std::env::var("PORT").ok().as_deref())
    }

    fn from_values(bind_addr: Option<&str>, port: Option<&str>) -> Self {
        let bind_addr = bind_addr
            .map(str::trim)
            .filter(|addr| !addr.is_empty())
            .unwrap_or(DEFAULT_BIND_ADDR)
            .to_owned();
        let port = match port.map(str::trim) {
            Some(raw) => raw.parse::<u16>().unwrap_or_else(|_| {
                tracing::warn!(port = raw, "invalid PORT, using default");
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };
        Self { bind_addr, port }
    }

    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}
