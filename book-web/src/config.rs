use book_controller::ApiConfig;

pub const DEFAULT_PORT: &str = "7000";
pub const DEFAULT_LOG_FILTER: &str = "book_web=info,book_controller=info,tower_http=info";

#[derive(Debug, Clone)]
pub struct WebConfig {
    pub port: String,
    /// Leading slash, no trailing slash; empty when served from the root.
    pub base_path: String,
    pub api: ApiConfig,
}

impl WebConfig {
    /// Reads `PORT`, `BASE_PATH` and `BOOKS_API_URL`.
    pub fn from_env() -> Self {
        let port = std::env::var("PORT").unwrap_or_else(|_| DEFAULT_PORT.to_string());
        let base_path = std::env::var("BASE_PATH").unwrap_or_default();

        Self {
            port,
            base_path: normalize_base_path(&base_path),
            api: ApiConfig::from_env(),
        }
    }

    pub fn addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

pub fn normalize_base_path(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{}", trimmed)
    }
}
