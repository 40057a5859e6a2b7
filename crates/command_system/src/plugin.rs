//! Plugin trait definition.

use crate::command::ChatCommand;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Errors surfaced by plugin lifecycle hooks.
#[derive(Debug, Error)]
pub enum PluginError {
    #[error("Plugin initialization failed: {0}")]
    InitializationFailed(String),

    #[error("Plugin runtime error: {0}")]
    RuntimeError(String),
}

/// Lifecycle contract between the host and a plugin.
///
/// The host drives the lifecycle: it calls [`on_enable`](Plugin::on_enable)
/// once before dispatching anything to the plugin, registers whatever
/// [`commands`](Plugin::commands) returns with its command handlers, and
/// calls [`on_disable`](Plugin::on_disable) before unloading. Lifecycle
/// hooks are async because enabling a plugin may touch files or the
/// network; command execution itself is not (see
/// [`ChatCommand::execute`](crate::command::ChatCommand::execute)).
#[async_trait]
pub trait Plugin: Send + Sync {
    /// Returns the name of this plugin.
    fn name(&self) -> &str;

    /// Returns the version string of this plugin.
    fn version(&self) -> &str;

    /// Called once when the host enables the plugin, before command
    /// registration.
    async fn on_enable(&self) -> Result<(), PluginError> {
        Ok(())
    }

    /// Called once when the host disables the plugin, after its commands
    /// are unregistered.
    async fn on_disable(&self) -> Result<(), PluginError> {
        Ok(())
    }

    /// Commands the host should register on behalf of this plugin.
    ///
    /// Called after `on_enable` and again after a configuration reload, so
    /// a plugin may offer a different set (or none) as its configuration
    /// dictates.
    fn commands(&self) -> Vec<Arc<dyn ChatCommand>> {
        Vec::new()
    }
}
