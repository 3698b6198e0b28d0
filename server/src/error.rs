//! Startup and serve errors surfaced from `run`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("leptos configuration: {0}")]
    LeptosConfig(String),
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },
    #[error("server failed: {0}")]
    Serve(#[source] std::io::Error),
}
