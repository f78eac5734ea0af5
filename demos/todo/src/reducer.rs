//! Reducer logic for the Todo module.
//!
//! Every operation is total: an id that matches no item turns the operation
//! into a no-op instead of an error.

use crate::types::{Draft, DraftField, PanelState, TodoAction, TodoId, TodoItem, TodoState};
use module_store_core::{SmallVec, effect::Effect, reducer::Reducer, smallvec};

/// Reducer for the Todo module
#[derive(Clone, Copy, Debug, Default)]
pub struct TodoReducer;

impl TodoReducer {
    /// Creates a new `TodoReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn start_new(state: &mut TodoState) {
        state.draft = Draft::default();
        state.panel = PanelState::Shown;
    }

    fn start_edit(state: &mut TodoState, id: TodoId) {
        let Some(item) = state.get(id) else {
            tracing::debug!(%id, "Edit of missing todo ignored");
            return;
        };
        state.draft = Draft::for_item(item);
        state.panel = PanelState::Shown;
    }

    fn set_draft_field(state: &mut TodoState, field: DraftField, value: String) {
        state.draft.set(field, value);
    }

    /// Appends (create-mode) or overwrites (edit-mode) from the draft.
    ///
    /// The draft is reset in every case.
    fn commit_draft(state: &mut TodoState) {
        let Draft { id, title, desc } = std::mem::take(&mut state.draft);

        if id.is_new() {
            let Some(next_id) = state.next_id.checked_add(1) else {
                tracing::error!(next_id = state.next_id, "Todo ids exhausted, creation skipped");
                return;
            };
            state.next_id = next_id;
            let id = TodoId::new(next_id);
            state.items.push(TodoItem::new(id, title, desc));
            tracing::debug!(%id, "Todo created");
        } else if let Some(item) = state.get_mut(id) {
            item.title = title;
            item.desc = desc;
            tracing::debug!(%id, "Todo updated");
        } else {
            tracing::debug!(%id, "Commit for missing todo ignored");
        }
    }

    fn toggle_done(state: &mut TodoState, id: TodoId, done: bool) {
        match state.get_mut(id) {
            Some(item) => item.done = done,
            None => tracing::debug!(%id, "Toggle of missing todo ignored"),
        }
    }

    fn remove(state: &mut TodoState, id: TodoId) {
        let before = state.items.len();
        state.items.retain(|item| item.id != id);
        if state.items.len() == before {
            tracing::debug!(%id, "Removal of missing todo ignored");
        }
    }
}

impl Reducer for TodoReducer {
    type State = TodoState;
    type Action = TodoAction;
    type Environment = ();

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        _env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            TodoAction::StartNew => Self::start_new(state),
            TodoAction::StartEdit { id } => Self::start_edit(state, id),
            TodoAction::SetDraftField { field, value } => {
                Self::set_draft_field(state, field, value);
            }
            TodoAction::CommitDraft => Self::commit_draft(state),
            TodoAction::ToggleDone { id, done } => Self::toggle_done(state, id, done),
            TodoAction::Remove { id } => Self::remove(state, id),
            TodoAction::HidePanel => state.panel = PanelState::Hidden,
            TodoAction::Submit => {
                return smallvec![
                    Effect::send(TodoAction::HidePanel),
                    Effect::send(TodoAction::CommitDraft),
                ];
            }
        }

        SmallVec::new()
    }
}
