use std::path::PathBuf;

/// Runtime settings for the API server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// TCP port for the HTTP listener.
    pub port: u16,
    /// SQLite database path (`:memory:` for a throwaway database).
    pub database: String,
    /// JSON seed file loaded when the database has no rows yet.
    pub seed: Option<PathBuf>,
    /// Serve GraphiQL on `GET /graphql`.
    pub playground: bool,
    /// Allow schema introspection queries.
    pub introspection: bool,
    /// Browser origins allowed by CORS.
    pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 4000,
            database: "galactic.db".to_string(),
            seed: None,
            playground: true,
            introspection: true,
            cors_origins: vec![
                "http://localhost:5173".to_string(),
                "http://localhost:3000".to_string(),
            ],
        }
    }
}
