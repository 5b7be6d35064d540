//! Confirmation guard for actions that discard unsaved work.
//!
//! # Responsibility
//! - Hold at most one deferred "discard and proceed" action.
//! - Expose a renderable prompt and map its two choices to confirm/cancel.
//!
//! # Invariants
//! - The prompt is visible if and only if an action is pending.
//! - A pending action runs at most once, and only from `confirm`.
//! - A second request replaces the first; there is no queue.

pub mod navigation;
pub mod prompt;

pub use navigation::{GuardState, NavigationGuard};
pub use prompt::{ConfirmationPrompt, PromptChoice, PromptCopy, PromptRenderer};
