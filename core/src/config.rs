//! Resolution of the API origin and base path.

/// Environment variable that overrides the API origin.
pub const API_URL_ENV: &str = "TODO_API_URL";

/// Origin used when no override is configured.
pub const DEFAULT_ORIGIN: &str = "http://127.0.0.1:8080";

/// Path prefix every endpoint lives under.
pub const API_PREFIX: &str = "/api/v1";

/// Where the todo API lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    origin: String,
}

impl ApiConfig {
    /// Use `origin` as given. A trailing slash is dropped.
    pub fn new(origin: &str) -> Self {
        Self {
            origin: origin.trim().trim_end_matches('/').to_string(),
        }
    }

    /// Resolve from `TODO_API_URL`, falling back to [`DEFAULT_ORIGIN`].
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolve through an arbitrary variable lookup. Unset and blank values
    /// both select the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        match lookup(API_URL_ENV) {
            Some(origin) if !origin.trim().is_empty() => Self::new(&origin),
            _ => Self::new(DEFAULT_ORIGIN),
        }
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Origin plus [`API_PREFIX`].
    pub fn base_path(&self) -> String {
        format!("{}{API_PREFIX}", self.origin)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ORIGIN)
    }
}
