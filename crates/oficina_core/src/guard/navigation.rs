//! Navigation guard state machine.

use crate::guard::prompt::{ConfirmationPrompt, PromptChoice, PromptCopy, PromptRenderer};
use log::debug;
use std::fmt::{Debug, Formatter};

type PendingAction<'a> = Box<dyn FnOnce() + 'a>;

/// Observable guard state for renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardState {
    /// Nothing pending, prompt hidden.
    Idle,
    /// One action pending, prompt visible.
    AwaitingConfirmation,
}

/// Single choke point for "discard unsaved work and proceed" actions.
///
/// Prompt visibility is derived from the pending slot, so the two can never
/// disagree. Transitions are expected on one event-processing thread.
pub struct NavigationGuard<'a> {
    pending: Option<PendingAction<'a>>,
    copy: PromptCopy,
}

impl Default for NavigationGuard<'_> {
    fn default() -> Self {
        Self::with_copy(PromptCopy::default())
    }
}

impl Debug for NavigationGuard<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NavigationGuard")
            .field("state", &self.state())
            .field("copy", &self.copy)
            .finish()
    }
}

impl<'a> NavigationGuard<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Guard with custom prompt text.
    pub fn with_copy(copy: PromptCopy) -> Self {
        Self {
            pending: None,
            copy,
        }
    }

    pub fn state(&self) -> GuardState {
        if self.pending.is_some() {
            GuardState::AwaitingConfirmation
        } else {
            GuardState::Idle
        }
    }

    pub fn is_prompt_visible(&self) -> bool {
        self.pending.is_some()
    }

    /// Stores `action` and shows the prompt.
    ///
    /// A request while already awaiting confirmation replaces the earlier
    /// action; the replaced action is dropped without running.
    pub fn request_navigation(&mut self, action: impl FnOnce() + 'a) {
        let replaced = self.pending.replace(Box::new(action)).is_some();
        debug!(
            "event=guard_request module=guard status=ok replaced={}",
            replaced
        );
    }

    /// Routes `action` through the guard only when there is unsaved work.
    ///
    /// With nothing unsaved, any stale pending action is discarded and
    /// `action` runs immediately. Returns the resulting state.
    pub fn guard_unsaved(
        &mut self,
        has_unsaved_changes: bool,
        action: impl FnOnce() + 'a,
    ) -> GuardState {
        if has_unsaved_changes {
            self.request_navigation(action);
        } else {
            let discarded = self.pending.take().is_some();
            debug!(
                "event=guard_bypass module=guard status=ok discarded_stale={}",
                discarded
            );
            action();
        }
        self.state()
    }

    /// Runs the pending action once and returns to `Idle`.
    ///
    /// Returns `true` when an action ran; with nothing pending this is a
    /// no-op returning `false`.
    pub fn confirm(&mut self) -> bool {
        // Slot is emptied before the call so the action cannot be reached twice.
        let Some(action) = self.pending.take() else {
            debug!("event=guard_confirm module=guard status=noop");
            return false;
        };
        debug!("event=guard_confirm module=guard status=ok");
        action();
        true
    }

    /// Drops the pending action without running it.
    ///
    /// Returns `true` when something was discarded.
    pub fn cancel(&mut self) -> bool {
        let discarded = self.pending.take().is_some();
        debug!(
            "event=guard_cancel module=guard status={}",
            if discarded { "ok" } else { "noop" }
        );
        discarded
    }

    /// Applies a renderer outcome. Returns `true` when the action ran.
    pub fn resolve(&mut self, choice: PromptChoice) -> bool {
        match choice {
            PromptChoice::Confirm => self.confirm(),
            PromptChoice::Cancel | PromptChoice::Dismissed => {
                self.cancel();
                false
            }
        }
    }

    /// Prompt to render, present only while awaiting confirmation.
    pub fn prompt(&self) -> Option<ConfirmationPrompt<'_>> {
        self.pending
            .as_ref()
            .map(|_| ConfirmationPrompt::from_copy(&self.copy))
    }

    /// Shows the prompt through `renderer` and applies the choice.
    ///
    /// Returns `None` without calling the renderer when nothing is pending.
    pub fn present<R>(&mut self, renderer: &mut R) -> Option<PromptChoice>
    where
        R: PromptRenderer + ?Sized,
    {
        let choice = renderer.present(&self.prompt()?);
        self.resolve(choice);
        Some(choice)
    }
}
