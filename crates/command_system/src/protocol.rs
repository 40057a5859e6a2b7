//! Redirect wire message.
//!
//! The shape of this message is owned by the host game protocol: the client
//! already knows how to act on a round-restart message, and this crate only
//! reproduces the fields that message carries. Do not redesign it here.

use serde::{Deserialize, Serialize};

/// How the client should treat the restart carried by a
/// [`RedirectInstruction`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundRestartKind {
    /// Restart the current round in place.
    FullRestart,
    /// Disconnect and reconnect to another server instance without forcing
    /// a full round restart on the target.
    Redirect,
}

/// Instruction for a client to disconnect and reconnect elsewhere.
///
/// Sent once per accepted server switch. All fields other than
/// `target_port` are fixed by [`RedirectInstruction::redirect`]; the host
/// protocol defines them and the plugin never varies them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RedirectInstruction {
    pub kind: RoundRestartKind,
    /// Client-side delay before reconnecting, in seconds.
    pub delay_seconds: f32,
    /// Port of the target server instance on the same host.
    pub target_port: u16,
    /// Whether the client should reconnect at all.
    pub reconnect: bool,
    /// Whether the target should fast-restart its round on join.
    pub fast_restart: bool,
}

impl RedirectInstruction {
    /// Delay the protocol prescribes for redirect restarts.
    pub const REDIRECT_DELAY_SECONDS: f32 = 0.1;

    /// Builds the redirect variant: reconnect to `target_port` after the
    /// standard delay, without a fast restart on the target.
    pub fn redirect(target_port: u16) -> Self {
        Self {
            kind: RoundRestartKind::Redirect,
            delay_seconds: Self::REDIRECT_DELAY_SECONDS,
            target_port,
            reconnect: true,
            fast_restart: false,
        }
    }
}
