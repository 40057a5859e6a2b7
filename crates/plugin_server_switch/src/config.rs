//! Plugin configuration: types, defaults, validation, and file loading.
//!
//! The whole configuration is one TOML document, deserialized into an
//! immutable [`PluginConfig`] value. A reload never edits a live config in
//! place; it builds and validates a fresh value, which the plugin then
//! publishes wholesale (see [`ServerSwitchPlugin::reload_config`]).
//!
//! [`ServerSwitchPlugin::reload_config`]: crate::ServerSwitchPlugin::reload_config

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Errors from loading or validating the plugin configuration.
///
/// These are configuration-validity faults, not command-execution failures:
/// command invocations never produce them.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {0}: {1}")]
    Read(PathBuf, std::io::Error),

    #[error("Failed to write config file {0}: {1}")]
    Write(PathBuf, std::io::Error),

    #[error("Failed to parse config file {0}: {1}")]
    Parse(PathBuf, toml::de::Error),

    #[error("Failed to serialize default config: {0}")]
    Serialize(toml::ser::Error),

    #[error("Invalid configuration: {0}")]
    Validation(String),
}

/// One configured target server: a user-facing alias and the port the
/// instance listens on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerIdentifier {
    pub alias: String,
    pub port: u16,
}

/// Ordered alias → port table.
///
/// Entry order is the order entries appear in the config file, and it is
/// what the 1-based position in the formatted server list is derived from.
/// Aliases are matched case-sensitively and exactly; with the handful of
/// entries this table holds, lookup is a linear scan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServerIdentifierTable(Vec<ServerIdentifier>);

impl ServerIdentifierTable {
    pub fn new(entries: Vec<ServerIdentifier>) -> Self {
        Self(entries)
    }

    /// Looks up the port configured for `alias`. Exact match only.
    pub fn port_of(&self, alias: &str) -> Option<u16> {
        self.0
            .iter()
            .find(|entry| entry.alias == alias)
            .map(|entry| entry.port)
    }

    /// Iterates entries in configuration order.
    pub fn iter(&self) -> std::slice::Iter<'_, ServerIdentifier> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Configuration of the `server` command itself.
///
/// Defaults match the plugin's stock configuration; every field can be
/// overridden from the config file. Placeholder slots in the templated
/// responses are documented per field and substituted by
/// [`templates::apply`](crate::templates::apply).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerCommandConfig {
    /// Permission node required to use the command. Empty disables the
    /// permission check entirely.
    pub required_permission: String,

    /// Response when the caller lacks `required_permission`.
    pub insufficient_permission_response: String,

    /// The ordered alias → port table of switchable server instances.
    pub server_identifiers: ServerIdentifierTable,

    /// Per-entry template for the formatted server list.
    /// Placeholders: `{0}` alias, `{1}` 1-based position, `{2}` port.
    /// The stock template starts with a newline, so concatenated entries
    /// render as a bulleted list without any extra separator logic.
    pub identifier_format: String,

    /// Response when no argument is given. Placeholder: `{0}` server list.
    pub specify_server_response: String,

    /// Response when the argument matches no alias. Placeholder: `{0}`
    /// server list.
    pub invalid_server_response: String,

    /// Response when the target is the server the caller is already on.
    pub already_connected_response: String,
}

impl Default for ServerCommandConfig {
    fn default() -> Self {
        Self {
            required_permission: "sc.switch".to_string(),
            insufficient_permission_response: "You do not have permission to use this command"
                .to_string(),
            server_identifiers: ServerIdentifierTable::new(vec![
                ServerIdentifier {
                    alias: "1".to_string(),
                    port: 7777,
                },
                ServerIdentifier {
                    alias: "2".to_string(),
                    port: 7778,
                },
            ]),
            identifier_format: "\n- {0}".to_string(),
            specify_server_response: "You must specify a server to switch to. Available:{0}"
                .to_string(),
            invalid_server_response: "Invalid server. Available:{0}".to_string(),
            already_connected_response: "You are already connected to this server.".to_string(),
        }
    }
}

/// Top-level plugin configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PluginConfig {
    /// Whether the plugin offers its command at all.
    pub is_enabled: bool,

    /// The `server` command configuration.
    pub command: ServerCommandConfig,
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            is_enabled: true,
            command: ServerCommandConfig::default(),
        }
    }
}

impl PluginConfig {
    /// Loads configuration from a TOML file.
    ///
    /// If the file doesn't exist, writes a default configuration file at
    /// the given path and returns the defaults. Loaded configurations are
    /// validated before they are returned.
    pub async fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            let content = tokio::fs::read_to_string(path)
                .await
                .map_err(|e| ConfigError::Read(path.to_path_buf(), e))?;
            let config: PluginConfig =
                toml::from_str(&content).map_err(|e| ConfigError::Parse(path.to_path_buf(), e))?;
            config.validate()?;
            Ok(config)
        } else {
            let default_config = PluginConfig::default();
            let toml_content =
                toml::to_string_pretty(&default_config).map_err(ConfigError::Serialize)?;
            tokio::fs::write(path, toml_content)
                .await
                .map_err(|e| ConfigError::Write(path.to_path_buf(), e))?;
            info!("Created default configuration file: {}", path.display());
            Ok(default_config)
        }
    }

    /// Validates the identifier table: aliases must be non-empty and
    /// unique, ports must be non-zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for entry in self.command.server_identifiers.iter() {
            if entry.alias.is_empty() {
                return Err(ConfigError::Validation(
                    "server identifier alias cannot be empty".to_string(),
                ));
            }
            if entry.port == 0 {
                return Err(ConfigError::Validation(format!(
                    "server identifier {:?} has port 0",
                    entry.alias
                )));
            }
            if !seen.insert(entry.alias.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "duplicate server identifier alias {:?}",
                    entry.alias
                )));
            }
        }
        Ok(())
    }
}
