use std::fmt;
use std::sync::Arc;

use crate::config::config_spec::ConfigSpec;
use crate::config::errors::ApplicationError;
use crate::config::EnvironmentProvider;

/// Settings needed before the server starts
pub struct BootstrapSettings {
    server_host: String,
    server_port: u16,
    seed_items: bool,
    public_url: Option<String>,
}

impl BootstrapSettings {
    /// Load bootstrap settings through the given environment provider
    pub fn from_env_provider(env_provider: Arc<dyn EnvironmentProvider + Send + Sync>) -> Result<Self, ApplicationError> {
        let host_spec = ConfigSpec::new(env_provider.clone())
            .env_override("HOST")
            .default_value("0.0.0.0")
            .validator(ConfigSpec::validate_host_address);

        let port_spec = ConfigSpec::new(env_provider.clone())
            .env_override("PORT")
            .default_value("3000")
            .validator(|value| ConfigSpec::validate_port_range(value, 1, 65535));

        let seed_items_spec = ConfigSpec::new(env_provider.clone())
            .env_override("SEED_ITEMS")
            .default_value("true");

        let public_url_spec = ConfigSpec::new(env_provider)
            .env_override("PUBLIC_URL");

        let server_host = host_spec.load()?;
        let server_port = ConfigSpec::parse_port(&port_spec.load()?, "PORT")?;
        let seed_items = ConfigSpec::parse_bool(&seed_items_spec.load()?, "SEED_ITEMS")?;
        let public_url = public_url_spec
            .load_optional()?
            .map(|url| url.trim_end_matches('/').to_string());

        Ok(Self {
            server_host,
            server_port,
            seed_items,
            public_url,
        })
    }

    /// Convenience method that uses the system environment provider
    pub fn from_env() -> Result<Self, ApplicationError> {
        use crate::config::SystemEnvironment;
        Self::from_env_provider(Arc::new(SystemEnvironment))
    }

    pub fn server_host(&self) -> &str {
        &self.server_host
    }

    pub fn server_port(&self) -> u16 {
        self.server_port
    }

    /// Whether the item store starts with the starter catalog
    pub fn seed_items(&self) -> bool {
        self.seed_items
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    /// Base URL advertised in the OpenAPI document
    pub fn public_url(&self) -> String {
        match &self.public_url {
            Some(url) => url.clone(),
            None => format!("http://localhost:{}", self.server_port),
        }
    }
}

impl fmt::Debug for BootstrapSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BootstrapSettings")
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .field("seed_items", &self.seed_items)
            .field("public_url", &self.public_url)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MockEnvironment;
    use std::collections::HashMap;

    fn create_test_env(vars: HashMap<String, String>) -> Arc<MockEnvironment> {
        Arc::new(MockEnvironment::new(vars))
    }

    #[test]
    fn test_bootstrap_settings_with_all_vars() {
        let env_vars = HashMap::from([
            ("HOST".to_string(), "127.0.0.1".to_string()),
            ("PORT".to_string(), "8080".to_string()),
            ("SEED_ITEMS".to_string(), "false".to_string()),
            ("PUBLIC_URL".to_string(), "https://catalog.example.com/".to_string()),
        ]);
        let env_provider = create_test_env(env_vars);

        let settings = BootstrapSettings::from_env_provider(env_provider).unwrap();

        assert_eq!(settings.server_host(), "127.0.0.1");
        assert_eq!(settings.server_port(), 8080);
        assert_eq!(settings.server_address(), "127.0.0.1:8080");
        assert!(!settings.seed_items());
        assert_eq!(settings.public_url(), "https://catalog.example.com");
    }

    #[test]
    fn test_bootstrap_settings_with_defaults() {
        let env_provider = create_test_env(HashMap::new());

        let settings = BootstrapSettings::from_env_provider(env_provider).unwrap();

        assert_eq!(settings.server_host(), "0.0.0.0");
        assert_eq!(settings.server_port(), 3000);
        assert!(settings.seed_items());
        assert_eq!(settings.public_url(), "http://localhost:3000");
    }

    #[test]
    fn test_bootstrap_settings_invalid_port() {
        let env_vars = HashMap::from([("PORT".to_string(), "not-a-port".to_string())]);
        let env_provider = create_test_env(env_vars);

        let result = BootstrapSettings::from_env_provider(env_provider);

        assert!(result.is_err());
    }

    #[test]
    fn test_bootstrap_settings_invalid_seed_flag() {
        let env_vars = HashMap::from([("SEED_ITEMS".to_string(), "sometimes".to_string())]);
        let env_provider = create_test_env(env_vars);

        let err = BootstrapSettings::from_env_provider(env_provider).unwrap_err();

        assert!(matches!(err, ApplicationError::ParseError { ref setting_name, .. } if setting_name == "SEED_ITEMS"));
    }
}
