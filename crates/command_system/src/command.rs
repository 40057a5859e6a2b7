//! Chat command trait and result convention.

use crate::types::CommandSender;

/// Result of a command invocation, per the host dispatcher's convention:
/// a success flag plus the text shown to the caller.
///
/// A failed invocation is not an error in the `Result` sense: the response
/// text is the entire failure signal, and the dispatcher relays it to the
/// caller verbatim. Successful invocations may return an empty response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutcome {
    pub success: bool,
    pub response: String,
}

impl CommandOutcome {
    /// A successful invocation with the given response text.
    pub fn success(response: impl Into<String>) -> Self {
        Self {
            success: true,
            response: response.into(),
        }
    }

    /// A failed invocation explained by the given response text.
    pub fn failure(response: impl Into<String>) -> Self {
        Self {
            success: false,
            response: response.into(),
        }
    }
}

/// A chat command exposed to the host's command dispatcher.
///
/// The dispatcher tokenizes the raw input on whitespace, strips the command
/// name, and passes the remaining tokens to [`execute`](ChatCommand::execute)
/// together with the invocation origin. `execute` is synchronous: a command
/// invocation is a single run-to-completion computation on the dispatching
/// thread, with no suspension point and no I/O beyond what the injected host
/// capabilities perform.
pub trait ChatCommand: Send + Sync {
    /// Primary name the command is registered under.
    fn name(&self) -> &str;

    /// Alternate names the command is also registered under.
    fn aliases(&self) -> &[&str] {
        &[]
    }

    /// One-line description shown in command listings.
    fn description(&self) -> &str;

    /// Runs the command for `sender` with the given argument tokens.
    fn execute(&self, arguments: &[&str], sender: &CommandSender) -> CommandOutcome;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_constructors() {
        let ok = CommandOutcome::success("");
        assert!(ok.success);
        assert!(ok.response.is_empty());

        let err = CommandOutcome::failure("nope");
        assert!(!err.success);
        assert_eq!(err.response, "nope");
    }
}
