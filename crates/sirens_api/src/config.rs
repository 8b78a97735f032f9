use std::time::Duration;

pub const DEFAULT_API_BASE: &str = "http://localhost:8080";
pub const DEFAULT_API_PREFIX: &str = "alert/v1";
pub const DEFAULT_USER_AGENT: &str = "sirens-monitor";
pub const DEFAULT_COOLDOWN_MS: u64 = 250;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Connection settings for the alerting service. The base URL is
/// deployment-specific and must come from app configuration; the default
/// only covers local development.
#[derive(Clone, Debug)]
pub struct AlertConfig {
    pub base_url: String,
    pub api_prefix: String,
    pub user_agent: String,
    pub cooldown: Duration,
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

impl AlertConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_prefix: DEFAULT_API_PREFIX.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            cooldown: Duration::from_millis(DEFAULT_COOLDOWN_MS),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
        }
    }

    pub fn with_api_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.api_prefix = prefix.into();
        self
    }

    pub fn with_user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = ua.into();
        self
    }

    pub fn with_cooldown(mut self, duration: Duration) -> Self {
        self.cooldown = duration;
        self
    }

    pub fn with_timeout(mut self, duration: Duration) -> Self {
        self.timeout = duration;
        self
    }

    pub fn with_connect_timeout(mut self, duration: Duration) -> Self {
        self.connect_timeout = duration;
        self
    }

    pub fn api_root(&self) -> String {
        format!(
            "{}/{}/",
            self.base_url.trim_end_matches('/'),
            self.api_prefix.trim_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::AlertConfig;

    #[test]
    fn api_root_joins_base_and_prefix() {
        let config = AlertConfig::new("http://alerts.internal:9090/");
        assert_eq!(config.api_root(), "http://alerts.internal:9090/alert/v1/");
    }

    #[test]
    fn api_prefix_override_is_normalized() {
        let config = AlertConfig::new("http://localhost:8080").with_api_prefix("/alert/v2/");
        assert_eq!(config.api_root(), "http://localhost:8080/alert/v2/");
    }
}
