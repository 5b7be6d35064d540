//! Prompt contract between the guard and the rendering layer.

/// User outcome reported by the rendering slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptChoice {
    /// Discard unsaved work and run the pending action.
    Confirm,
    /// Keep editing; drop the pending action.
    Cancel,
    /// Prompt closed without an explicit choice. Handled as `Cancel`.
    Dismissed,
}

/// Text shown by the confirmation prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptCopy {
    pub title: String,
    pub message: String,
    pub confirm_label: String,
    pub cancel_label: String,
}

impl Default for PromptCopy {
    fn default() -> Self {
        Self {
            title: "Discard unsaved changes?".to_string(),
            message: "You have unsaved changes. Leaving now will discard them.".to_string(),
            confirm_label: "Discard".to_string(),
            cancel_label: "Keep editing".to_string(),
        }
    }
}

/// Prompt bound to the guard's current pending action.
///
/// Only obtainable while the guard is awaiting confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfirmationPrompt<'g> {
    pub title: &'g str,
    pub message: &'g str,
    pub confirm_label: &'g str,
    pub cancel_label: &'g str,
}

impl<'g> ConfirmationPrompt<'g> {
    pub(crate) fn from_copy(copy: &'g PromptCopy) -> Self {
        Self {
            title: copy.title.as_str(),
            message: copy.message.as_str(),
            confirm_label: copy.confirm_label.as_str(),
            cancel_label: copy.cancel_label.as_str(),
        }
    }
}

/// Rendering slot able to show a two-choice prompt.
///
/// Implementations block until the user picks a choice or dismisses the
/// prompt; the guard applies the returned choice.
pub trait PromptRenderer {
    fn present(&mut self, prompt: &ConfirmationPrompt<'_>) -> PromptChoice;
}

impl<F> PromptRenderer for F
where
    F: FnMut(&ConfirmationPrompt<'_>) -> PromptChoice,
{
    fn present(&mut self, prompt: &ConfirmationPrompt<'_>) -> PromptChoice {
        self(prompt)
    }
}
