#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Production,
    Integration,
}

impl Environment {
    /// Base URL of the vendor's XML gateway for this environment.
    #[must_use]
    pub const fn base_url(&self) -> &'static str {
        match self {
            Environment::Production => "https://onlinetools.ups.com/ups.app/xml",
            Environment::Integration => "https://wwwcie.ups.com/ups.app/xml",
        }
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Production => write!(f, "production"),
            Environment::Integration => write!(f, "integration"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub base_url: String,
    pub access_key: String,
    pub user_id: String,
    pub password: String,
    pub customer_context: Option<String>,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub log_level: String,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("base_url", &self.base_url)
            .field("access_key", &"[redacted]")
            .field("user_id", &self.user_id)
            .field("password", &"[redacted]")
            .field("customer_context", &self.customer_context)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("log_level", &self.log_level)
            .finish()
    }
}
