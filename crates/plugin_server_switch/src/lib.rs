//! # Server Switch Plugin
//!
//! A chat-command plugin that lets players hop between server instances
//! running on the same host. Players invoke `server <alias>`; the plugin
//! resolves the alias against a configured table and instructs the player's
//! client to disconnect and reconnect to the instance listening on the
//! resolved port.
//!
//! The plugin implements no networking of its own. It talks to the host
//! through the narrow capability traits in [`command_system`]: permission
//! checks, caller resolution, and the redirect transport are all injected,
//! which also makes every path exercisable in tests with inline fakes.
//!
//! ## Configuration
//!
//! One TOML document (see [`PluginConfig`]), replaced wholesale on reload:
//!
//! ```toml
//! is_enabled = true
//!
//! [command]
//! required_permission = "sc.switch"
//! identifier_format = "\n- {0}"
//!
//! [[command.server_identifiers]]
//! alias = "1"
//! port = 7777
//!
//! [[command.server_identifiers]]
//! alias = "2"
//! port = 7778
//! ```
//!
//! Readers always see a complete, consistent snapshot: the active
//! configuration lives in an [`arc_swap::ArcSwap`] cell that
//! [`ServerSwitchPlugin::reload_config`] publishes to in one atomic store.

pub use command::{ServerSwitchCommand, NON_PLAYER_RESPONSE};
pub use config::{
    ConfigError, PluginConfig, ServerCommandConfig, ServerIdentifier, ServerIdentifierTable,
};

pub mod command;
pub mod config;
pub mod templates;

use arc_swap::ArcSwap;
use async_trait::async_trait;
use command_system::{
    CallerRegistry, ChatCommand, ConnectionRedirector, PermissionChecker, Plugin, PluginError,
};
use std::sync::Arc;
use tracing::info;

/// The plugin: owns the configuration snapshot cell and the shared command
/// instance registered with the host dispatcher.
pub struct ServerSwitchPlugin {
    config: Arc<ArcSwap<PluginConfig>>,
    command: Arc<ServerSwitchCommand>,
}

impl ServerSwitchPlugin {
    /// Builds the plugin from a validated configuration and the host
    /// capabilities it runs against. `local_port` is the port this server
    /// instance listens on; targets resolving to it are answered with the
    /// already-connected response instead of a redirect.
    pub fn new(
        config: PluginConfig,
        local_port: u16,
        permissions: Arc<dyn PermissionChecker>,
        callers: Arc<dyn CallerRegistry>,
        redirector: Arc<dyn ConnectionRedirector>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let config = Arc::new(ArcSwap::from_pointee(config));
        let command = Arc::new(ServerSwitchCommand::new(
            Arc::clone(&config),
            local_port,
            permissions,
            callers,
            redirector,
        ));
        Ok(Self { config, command })
    }

    /// Whether the plugin currently offers its command.
    pub fn is_enabled(&self) -> bool {
        self.config.load().is_enabled
    }

    /// Replaces the active configuration wholesale.
    ///
    /// The new configuration is validated first; on failure the active
    /// snapshot is left untouched. On success it is published atomically,
    /// so in-flight invocations finish against the snapshot they loaded and
    /// subsequent invocations see only the new one.
    pub fn reload_config(&self, new_config: PluginConfig) -> Result<(), ConfigError> {
        new_config.validate()?;
        self.config.store(Arc::new(new_config));
        info!("Configuration reloaded");
        Ok(())
    }
}

#[async_trait]
impl Plugin for ServerSwitchPlugin {
    fn name(&self) -> &str {
        "server_switch"
    }

    fn version(&self) -> &str {
        env!("CARGO_PKG_VERSION")
    }

    async fn on_enable(&self) -> Result<(), PluginError> {
        info!(
            version = env!("CARGO_PKG_VERSION"),
            servers = self.config.load().command.server_identifiers.len(),
            "Server switch plugin enabled"
        );
        Ok(())
    }

    async fn on_disable(&self) -> Result<(), PluginError> {
        info!("Server switch plugin disabled");
        Ok(())
    }

    fn commands(&self) -> Vec<Arc<dyn ChatCommand>> {
        if self.is_enabled() {
            vec![Arc::clone(&self.command) as Arc<dyn ChatCommand>]
        } else {
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use command_system::{CommandSender, PlayerId, RedirectInstruction};
    use std::sync::Mutex;

    struct AllowAll;

    impl PermissionChecker for AllowAll {
        fn has_permission(&self, _player: PlayerId, _node: &str) -> bool {
            true
        }
    }

    struct PlayersOnly;

    impl CallerRegistry for PlayersOnly {
        fn connected_player(&self, sender: &CommandSender) -> Option<PlayerId> {
            match sender {
                CommandSender::Player(id) => Some(*id),
                CommandSender::Console => None,
            }
        }
    }

    #[derive(Default)]
    struct RecordingRedirector {
        sent: Mutex<Vec<(PlayerId, RedirectInstruction)>>,
    }

    impl ConnectionRedirector for RecordingRedirector {
        fn redirect(&self, player: PlayerId, instruction: RedirectInstruction) {
            self.sent.lock().unwrap().push((player, instruction));
        }
    }

    fn plugin_with(config: PluginConfig) -> (ServerSwitchPlugin, Arc<RecordingRedirector>) {
        let redirector = Arc::new(RecordingRedirector::default());
        let plugin = ServerSwitchPlugin::new(
            config,
            7777,
            Arc::new(AllowAll),
            Arc::new(PlayersOnly),
            Arc::clone(&redirector) as Arc<dyn ConnectionRedirector>,
        )
        .unwrap();
        (plugin, redirector)
    }

    #[test]
    fn enabled_plugin_offers_the_server_command() {
        let (plugin, _) = plugin_with(PluginConfig::default());
        let commands = plugin.commands();
        assert_eq!(commands.len(), 1);
        assert_eq!(commands[0].name(), "server");
        assert!(commands[0].aliases().is_empty());
    }

    #[test]
    fn disabled_plugin_offers_nothing() {
        let mut config = PluginConfig::default();
        config.is_enabled = false;
        let (plugin, _) = plugin_with(config);
        assert!(!plugin.is_enabled());
        assert!(plugin.commands().is_empty());
    }

    #[test]
    fn construction_rejects_invalid_configuration() {
        let mut config = PluginConfig::default();
        config.command.server_identifiers = ServerIdentifierTable::new(vec![
            ServerIdentifier {
                alias: "1".to_string(),
                port: 7777,
            },
            ServerIdentifier {
                alias: "1".to_string(),
                port: 7778,
            },
        ]);

        let result = ServerSwitchPlugin::new(
            config,
            7777,
            Arc::new(AllowAll),
            Arc::new(PlayersOnly),
            Arc::new(RecordingRedirector::default()),
        );
        assert!(result.is_err());
    }

    #[test]
    fn reload_swaps_the_table_for_subsequent_invocations() {
        let (plugin, redirector) = plugin_with(PluginConfig::default());
        let command = plugin.commands().remove(0);
        let sender = CommandSender::Player(PlayerId::new());

        assert!(!command.execute(&["hub"], &sender).success);

        let mut new_config = PluginConfig::default();
        new_config.command.server_identifiers = ServerIdentifierTable::new(vec![ServerIdentifier {
            alias: "hub".to_string(),
            port: 7000,
        }]);
        plugin.reload_config(new_config).unwrap();

        assert!(command.execute(&["hub"], &sender).success);
        assert_eq!(redirector.sent.lock().unwrap()[0].1.target_port, 7000);
    }

    #[test]
    fn failed_reload_keeps_the_active_snapshot() {
        let (plugin, _) = plugin_with(PluginConfig::default());
        let command = plugin.commands().remove(0);
        let sender = CommandSender::Player(PlayerId::new());

        let mut bad_config = PluginConfig::default();
        bad_config.command.server_identifiers = ServerIdentifierTable::new(vec![ServerIdentifier {
            alias: "hub".to_string(),
            port: 0,
        }]);
        assert!(plugin.reload_config(bad_config).is_err());

        // The stock table is still in effect.
        let outcome = command.execute(&[], &sender);
        assert_eq!(
            outcome.response,
            "You must specify a server to switch to. Available:\n- 1\n- 2"
        );
    }

    #[test]
    fn reload_can_disable_the_plugin() {
        let (plugin, _) = plugin_with(PluginConfig::default());
        assert_eq!(plugin.commands().len(), 1);

        let mut new_config = PluginConfig::default();
        new_config.is_enabled = false;
        plugin.reload_config(new_config).unwrap();

        assert!(plugin.commands().is_empty());
    }

    #[tokio::test]
    async fn lifecycle_hooks_succeed() {
        let (plugin, _) = plugin_with(PluginConfig::default());
        assert_eq!(plugin.name(), "server_switch");
        assert!(!plugin.version().is_empty());
        plugin.on_enable().await.unwrap();
        plugin.on_disable().await.unwrap();
    }
}
