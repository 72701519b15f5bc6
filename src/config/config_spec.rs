use std::sync::Arc;

use crate::config::errors::ApplicationError;
use crate::config::EnvironmentProvider;

type Validator = Box<dyn Fn(&str) -> Result<(), String> + Send + Sync>;

/// Declarative description of a single environment-backed setting
///
/// ```text
/// ConfigSpec::new(env)
///     .env_override("PORT")
///     .default_value("3000")
///     .validator(|v| ConfigSpec::validate_port_range(v, 1, 65535))
///     .load()?
/// ```
pub struct ConfigSpec {
    env_provider: Arc<dyn EnvironmentProvider + Send + Sync>,
    env_var: Option<String>,
    default_value: Option<String>,
    validator: Option<Validator>,
}

impl ConfigSpec {
    pub fn new(env_provider: Arc<dyn EnvironmentProvider + Send + Sync>) -> Self {
        Self {
            env_provider,
            env_var: None,
            default_value: None,
            validator: None,
        }
    }

    /// Environment variable that supplies the value
    pub fn env_override(mut self, env_var: &str) -> Self {
        self.env_var = Some(env_var.to_string());
        self
    }

    /// Value used when the environment variable is not set
    pub fn default_value(mut self, value: &str) -> Self {
        self.default_value = Some(value.to_string());
        self
    }

    /// Extra validation run on the resolved value
    pub fn validator<F>(mut self, validator: F) -> Self
    where
        F: Fn(&str) -> Result<(), String> + Send + Sync + 'static,
    {
        self.validator = Some(Box::new(validator));
        self
    }

    fn setting_name(&self) -> String {
        self.env_var.clone().unwrap_or_else(|| "<unnamed>".to_string())
    }

    /// Resolve the value, falling back to the default
    ///
    /// # Errors
    /// * `InvalidSetting` - no value and no default, or the validator rejected it
    pub fn load(&self) -> Result<String, ApplicationError> {
        match self.load_optional()? {
            Some(value) => Ok(value),
            None => Err(ApplicationError::InvalidSetting {
                setting_name: self.setting_name(),
                reason: "No value provided and no default configured".to_string(),
            }),
        }
    }

    /// Resolve the value, returning `None` when neither the environment nor
    /// a default supplies one
    pub fn load_optional(&self) -> Result<Option<String>, ApplicationError> {
        let from_env = self
            .env_var
            .as_deref()
            .and_then(|key| self.env_provider.get_var(key));

        let Some(value) = from_env.or_else(|| self.default_value.clone()) else {
            return Ok(None);
        };

        if let Some(validator) = &self.validator {
            validator(&value).map_err(|reason| ApplicationError::InvalidSetting {
                setting_name: self.setting_name(),
                reason,
            })?;
        }

        Ok(Some(value))
    }

    /// Parse a boolean value from string
    pub fn parse_bool(value: &str, setting_name: &str) -> Result<bool, ApplicationError> {
        match value.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" | "enabled" => Ok(true),
            "false" | "0" | "no" | "off" | "disabled" => Ok(false),
            _ => Err(ApplicationError::ParseError {
                setting_name: setting_name.to_string(),
                error: format!(
                    "Expected boolean value, got '{}'. Valid values: true/false, 1/0, yes/no, on/off, enabled/disabled",
                    value
                ),
            }),
        }
    }

    /// Parse a port number, rejecting 0
    pub fn parse_port(value: &str, setting_name: &str) -> Result<u16, ApplicationError> {
        let port = value.trim().parse::<u16>()
            .map_err(|e| ApplicationError::ParseError {
                setting_name: setting_name.to_string(),
                error: format!("Expected port number (1-65535), got '{}': {}", value, e),
            })?;

        if port == 0 {
            return Err(ApplicationError::InvalidSetting {
                setting_name: setting_name.to_string(),
                reason: "Port number must be between 1 and 65535".to_string(),
            });
        }

        Ok(port)
    }

    pub fn validate_port_range(value: &str, min: u16, max: u16) -> Result<(), String> {
        let parsed = value.parse::<u16>()
            .map_err(|_| format!("Expected port number between {} and {}", min, max))?;

        if parsed < min || parsed > max {
            return Err(format!("Port {} is outside valid range {}-{}", parsed, min, max));
        }

        Ok(())
    }

    /// Basic shape check for an IPv4/IPv6 address or hostname; no DNS lookup
    pub fn validate_host_address(value: &str) -> Result<(), String> {
        if value.is_empty() {
            return Err("Host address cannot be empty".to_string());
        }

        if value == "[]" {
            return Err("Invalid IPv6 address format".to_string());
        }

        if value.contains(':') {
            return Ok(());
        }

        let looks_numeric = value.chars().all(|c| c.is_ascii_digit() || c == '.');
        if looks_numeric {
            return value
                .parse::<std::net::Ipv4Addr>()
                .map(|_| ())
                .map_err(|_| format!("Invalid IPv4 address: {}", value));
        }

        let valid_hostname = value.split('.').all(|label| {
            !label.is_empty()
                && label.len() <= 63
                && !label.starts_with('-')
                && !label.ends_with('-')
                && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
        });

        if valid_hostname {
            Ok(())
        } else {
            Err(format!("Invalid hostname: {}", value))
        }
    }
}
