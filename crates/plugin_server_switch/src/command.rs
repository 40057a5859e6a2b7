//! The `server` chat command.

use crate::config::{PluginConfig, ServerCommandConfig};
use crate::templates;
use arc_swap::ArcSwap;
use command_system::{
    CallerRegistry, ChatCommand, CommandOutcome, CommandSender, ConnectionRedirector,
    PermissionChecker, RedirectInstruction,
};
use std::sync::Arc;
use tracing::info;

/// Response for invocations that do not come from a connected player.
///
/// A fixed string on purpose: unlike the templated responses it is not part
/// of the configuration surface.
pub const NON_PLAYER_RESPONSE: &str = "This command can only be used by players.";

/// Switches the invoking player to another configured server instance.
///
/// Each invocation reads one complete configuration snapshot, walks the
/// failure checks in order, and on success sends exactly one redirect
/// instruction through the host's [`ConnectionRedirector`]. Nothing is
/// mutated and nothing is retried; every failure is reported synchronously
/// through the response text.
pub struct ServerSwitchCommand {
    config: Arc<ArcSwap<PluginConfig>>,
    /// Port this server instance is listening on, captured at construction.
    local_port: u16,
    permissions: Arc<dyn PermissionChecker>,
    callers: Arc<dyn CallerRegistry>,
    redirector: Arc<dyn ConnectionRedirector>,
}

impl ServerSwitchCommand {
    pub fn new(
        config: Arc<ArcSwap<PluginConfig>>,
        local_port: u16,
        permissions: Arc<dyn PermissionChecker>,
        callers: Arc<dyn CallerRegistry>,
        redirector: Arc<dyn ConnectionRedirector>,
    ) -> Self {
        Self {
            config,
            local_port,
            permissions,
            callers,
            redirector,
        }
    }

    /// Renders the configured identifier table as one string, one
    /// `identifier_format` application per entry. `{0}` is the alias, `{1}`
    /// the 1-based position in configuration order, `{2}` the port. The
    /// template supplies its own leading delimiter, so entries are
    /// concatenated with no separator.
    fn formatted_server_list(config: &ServerCommandConfig) -> String {
        let mut list = String::new();
        for (index, entry) in config.server_identifiers.iter().enumerate() {
            let position = (index + 1).to_string();
            let port = entry.port.to_string();
            list.push_str(&templates::apply(
                &config.identifier_format,
                &[&entry.alias, &position, &port],
            ));
        }
        list
    }
}

impl ChatCommand for ServerSwitchCommand {
    fn name(&self) -> &str {
        "server"
    }

    fn description(&self) -> &str {
        "Switches your current server."
    }

    fn execute(&self, arguments: &[&str], sender: &CommandSender) -> CommandOutcome {
        let Some(player) = self.callers.connected_player(sender) else {
            return CommandOutcome::failure(NON_PLAYER_RESPONSE);
        };

        let config = self.config.load();
        let command = &config.command;

        if !command.required_permission.is_empty()
            && !self
                .permissions
                .has_permission(player, &command.required_permission)
        {
            return CommandOutcome::failure(command.insufficient_permission_response.clone());
        }

        let server_list = Self::formatted_server_list(command);

        if arguments.is_empty() {
            return CommandOutcome::failure(templates::apply(
                &command.specify_server_response,
                &[&server_list],
            ));
        }

        // Tokens are rejoined so an alias may itself contain spaces.
        let alias = arguments.join(" ");
        let Some(port) = command.server_identifiers.port_of(&alias) else {
            return CommandOutcome::failure(templates::apply(
                &command.invalid_server_response,
                &[&server_list],
            ));
        };

        if port == self.local_port {
            return CommandOutcome::failure(command.already_connected_response.clone());
        }

        info!(%player, alias = %alias, port, "Redirecting player to another server instance");
        self.redirector
            .redirect(player, RedirectInstruction::redirect(port));
        CommandOutcome::success("")
    }
}
