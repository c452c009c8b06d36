use serde::Serialize;

/// A tool result that may carry a user-facing error string.
///
/// A non-empty error tells the orchestrator to apologise instead of feeding
/// the raw result back to the model.
pub trait ToolOutcome: Serialize {
    fn error_message(&self) -> Option<&str>;
}
