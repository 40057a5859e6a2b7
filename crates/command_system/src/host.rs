//! Host capability traits.
//!
//! Each trait covers exactly one thing a command handler may need from the
//! host process. Handlers receive them as `Arc<dyn _>` at construction; the
//! host wires in its real permission backend, player registry, and
//! connection layer, and tests substitute inline fakes.

use crate::protocol::RedirectInstruction;
use crate::types::{CommandSender, PlayerId};

/// Answers whether a player holds a permission node.
pub trait PermissionChecker: Send + Sync {
    /// Returns `true` if `player` holds `node`.
    ///
    /// Node strings are opaque to callers; their syntax belongs to the
    /// host's permission backend.
    fn has_permission(&self, player: PlayerId, node: &str) -> bool;
}

/// Resolves a command invocation origin to a connected player.
pub trait CallerRegistry: Send + Sync {
    /// Returns the connected player behind `sender`, or `None` when the
    /// sender is the console/host or is not a recognized player session.
    fn connected_player(&self, sender: &CommandSender) -> Option<PlayerId>;
}

/// Pushes a redirect instruction down a player's connection.
///
/// Fire-and-forget: the instruction is handed to the host's transport and
/// the client acts on it after its embedded delay. Delivery faults are the
/// host's concern, not the calling command's.
pub trait ConnectionRedirector: Send + Sync {
    /// Instructs `player`'s client to disconnect and reconnect per
    /// `instruction`.
    fn redirect(&self, player: PlayerId, instruction: RedirectInstruction);
}
