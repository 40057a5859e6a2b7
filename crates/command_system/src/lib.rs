//! # Command System
//!
//! The interfaces a chat-command extension needs from its host game server.
//!
//! A plugin that adds a chat command touches the host in a handful of
//! places: it receives invocations through the dispatcher's command
//! convention, it asks who invoked it and what the invoker may do, and it
//! may push an instruction down the invoker's connection. This crate
//! defines those seams and nothing else; the dispatcher, permission
//! backend, player registry, and network transport all live in the host
//! process.
//!
//! ## Overview
//!
//! - [`ChatCommand`] / [`CommandOutcome`]: the dispatcher's command-result
//!   convention, boolean success plus a response string.
//! - [`CommandSender`] / [`PlayerId`]: who invoked a command.
//! - [`PermissionChecker`], [`CallerRegistry`], [`ConnectionRedirector`]:
//!   narrow capability traits implemented by the host and injected into
//!   command handlers.
//! - [`Plugin`]: minimal plugin lifecycle plus the command registration
//!   surface.
//! - [`RedirectInstruction`]: the game protocol's redirect message. Its
//!   shape is owned by the host protocol and treated as a fixed contract.

pub use command::{ChatCommand, CommandOutcome};
pub use host::{CallerRegistry, ConnectionRedirector, PermissionChecker};
pub use plugin::{Plugin, PluginError};
pub use protocol::{RedirectInstruction, RoundRestartKind};
pub use types::{CommandSender, PlayerId};

pub mod command;
pub mod host;
pub mod plugin;
pub mod protocol;
pub mod types;
