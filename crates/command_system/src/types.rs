//! Caller identity types.
//!
//! Commands never see raw connections. The dispatcher hands them a
//! [`CommandSender`] describing where the invocation came from, and the
//! host's [`CallerRegistry`](crate::host::CallerRegistry) resolves that to a
//! connected [`PlayerId`] when one exists.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a player connected to the server.
///
/// A wrapper around UUID that provides type safety and ensures player IDs
/// cannot be confused with other kinds of IDs in the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub Uuid);

impl PlayerId {
    /// Creates a new random player ID using UUID v4.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::str::FromStr for PlayerId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

impl Default for PlayerId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The origin of a command invocation.
///
/// The dispatcher constructs one of these per invocation. A `Player` variant
/// carries the identity the dispatcher associated with the connection; whether
/// that player is still connected is answered by the host's
/// [`CallerRegistry`](crate::host::CallerRegistry), not by this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommandSender {
    /// The server console or host process itself.
    Console,
    /// A player session.
    Player(PlayerId),
}

impl CommandSender {
    /// Returns `true` if this sender is a player session.
    pub fn is_player(&self) -> bool {
        matches!(self, CommandSender::Player(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn player_id_round_trips_through_string() {
        let id = PlayerId::new();
        let parsed = PlayerId::from_str(&id.to_string()).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn player_id_rejects_garbage() {
        assert!(PlayerId::from_str("not-a-uuid").is_err());
    }

    #[test]
    fn sender_variants() {
        assert!(!CommandSender::Console.is_player());
        assert!(CommandSender::Player(PlayerId::new()).is_player());
    }
}
