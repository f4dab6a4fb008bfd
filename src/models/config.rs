use serde::Deserialize;

/// Configuration options for the Newsdesk server.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Connection string of the SQLite database.
    pub database_url: String,
    /// Address the HTTP server binds to.
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
}

fn default_bind_address() -> String {
    "127.0.0.1:8080".to_string()
}
