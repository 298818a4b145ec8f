// File: src/config.rs
// Purpose: Configuration parsing from cadastro.toml

use crate::schema::{FormSchema, MessageOverrides};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub form: FormConfig,

    #[serde(default)]
    pub server: ServerConfig,

    /// Message overrides, `[messages.<field>] <rule> = "..."`
    #[serde(default)]
    pub messages: MessageOverrides,
}

/// Form behavior
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormConfig {
    /// How long the success banner stays up (default: 5)
    #[serde(default = "default_success_display_secs")]
    pub success_display_secs: u64,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_host")]
    pub host: String,
}

fn default_success_display_secs() -> u64 {
    5
}

fn default_port() -> u16 {
    3000
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            success_display_secs: default_success_display_secs(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            host: default_host(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // If file doesn't exist or is empty, return default config
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        // surface bad message overrides at load time rather than at first use
        config
            .schema()
            .with_context(|| format!("Invalid [messages] in config file: {:?}", path))?;

        Ok(config)
    }

    /// Load configuration from default path (./cadastro.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("cadastro.toml")
    }

    pub fn success_display(&self) -> Duration {
        Duration::from_secs(self.form.success_display_secs)
    }

    /// Build the registration schema with this config's messages
    pub fn schema(&self) -> Result<FormSchema> {
        FormSchema::with_messages(&self.messages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::Field;
    use crate::schema::RuleKind;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.success_display(), Duration::from_secs(5));
        assert!(config.messages.is_empty());
    }

    #[test]
    fn test_empty_config() {
        let config = toml::from_str::<Config>("").unwrap_or_default();
        assert_eq!(config.form.success_display_secs, 5);
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn test_message_overrides() {
        let toml = r#"
            [form]
            success_display_secs = 2

            [messages.nome]
            required = "Name is required"

            [messages.confirmarSenha]
            equals_field = "Passwords must match"
        "#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.success_display(), Duration::from_secs(2));

        let schema = config.schema().unwrap();
        assert_eq!(
            schema.field(Field::Name).message(RuleKind::Required),
            Some("Name is required")
        );
        assert_eq!(
            schema.field(Field::ConfirmPassword).message(RuleKind::EqualsField),
            Some("Passwords must match")
        );
    }

    #[test]
    fn test_unknown_rule_key_fails_to_parse() {
        let toml = r#"
            [messages.nome]
            uppercase = "nope"
        "#;
        assert!(toml::from_str::<Config>(toml).is_err());
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let config = Config::load("definitely/not/here/cadastro.toml").unwrap();
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn test_load_rejects_unknown_field() {
        let path = std::env::temp_dir().join(format!("cadastro-config-{}.toml", std::process::id()));
        fs::write(&path, "[messages.idade]\nrequired = \"x\"\n").unwrap();

        let result = Config::load(&path);
        fs::remove_file(&path).ok();

        let err = result.unwrap_err();
        assert!(format!("{:#}", err).contains("idade"));
    }
}
