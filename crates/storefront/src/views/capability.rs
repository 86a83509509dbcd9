//! Injected user-interaction capabilities.
//!
//! The coordinator never talks to a real dialog or toast system directly;
//! it is handed these two capabilities at construction. Tests inject
//! scripted and recording fakes, binaries plug in terminal or browser
//! implementations.

/// Blocking yes/no prompt. Declining must leave all state unchanged, so
/// callers ask *before* mutating anything.
pub trait ConfirmPrompt {
    /// Ask the user to confirm. `true` means proceed.
    fn confirm(&mut self, message: &str) -> bool;
}

/// Fire-and-forget user notification. Never blocks, never affects state.
pub trait Notifier {
    /// Surface a titled message to the user.
    fn notify(&mut self, title: &str, message: &str);
}
