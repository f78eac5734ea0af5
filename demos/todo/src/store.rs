//! `TodoStore`: the handle a view holds.
//!
//! Wraps the generic [`Store`] with one method per user intent. Views read
//! state through the accessors and re-render from the listener callback.

use crate::reducer::TodoReducer;
use crate::types::{
    Draft, DraftField, DraftMode, PanelState, TodoAction, TodoId, TodoItem, TodoState,
};
use module_store_runtime::{Store, StoreConfig, SubscriptionId};

/// The generic store specialised for the todo module
pub type TodoRuntime = Store<TodoState, TodoAction, (), TodoReducer>;

/// Owned todo store
///
/// # Example
///
/// ```
/// use todo_module::{DraftField, TodoId, TodoStore};
///
/// let mut store = TodoStore::with_samples();
/// store.start_new();
/// store.set_draft_field(DraftField::Title, "X");
/// store.commit_draft();
///
/// assert_eq!(store.items().len(), 3);
/// assert_eq!(store.items()[2].id, TodoId::new(3));
/// ```
#[derive(Debug)]
pub struct TodoStore {
    store: TodoRuntime,
}

impl TodoStore {
    /// Empty store
    #[must_use]
    pub fn new() -> Self {
        Self::with_state(TodoState::new())
    }

    /// Store seeded with the two sample items
    #[must_use]
    pub fn with_samples() -> Self {
        Self::with_state(TodoState::with_samples())
    }

    /// Store starting from `state`
    ///
    /// A `next_id` below the highest item id is raised to it, so new items
    /// never reuse an existing id.
    #[must_use]
    pub fn with_state(state: TodoState) -> Self {
        Self::with_config(state, StoreConfig::default())
    }

    /// Store starting from `state` with a custom runtime configuration
    ///
    /// The id counter is repaired as in [`TodoStore::with_state`].
    #[must_use]
    pub fn with_config(state: TodoState, config: StoreConfig) -> Self {
        Self {
            store: Store::with_config(
                state.with_counter_repaired(),
                TodoReducer::new(),
                (),
                config,
            ),
        }
    }

    /// Dispatch any todo action
    ///
    /// Runtime errors are logged; the todo reducer itself never fails.
    pub fn send(&mut self, action: TodoAction) {
        if let Err(error) = self.store.send(action) {
            tracing::error!(%error, "Todo action aborted");
        }
    }

    /// Append (create-mode) or overwrite (edit-mode) an item from the draft
    pub fn commit_draft(&mut self) {
        self.send(TodoAction::CommitDraft);
    }

    /// Replace one draft field
    pub fn set_draft_field(&mut self, field: DraftField, value: impl Into<String>) {
        self.send(TodoAction::SetDraftField {
            field,
            value: value.into(),
        });
    }

    /// Start creating a new item
    pub fn start_new(&mut self) {
        self.send(TodoAction::StartNew);
    }

    /// Start editing the item with `id`; no-op if it does not exist
    pub fn start_edit(&mut self, id: TodoId) {
        self.send(TodoAction::StartEdit { id });
    }

    /// Set the done flag of the item with `id`
    pub fn toggle_done(&mut self, id: TodoId, done: bool) {
        self.send(TodoAction::ToggleDone { id, done });
    }

    /// Delete the item with `id`
    pub fn remove(&mut self, id: TodoId) {
        self.send(TodoAction::Remove { id });
    }

    /// Hide the panel and commit the draft
    pub fn submit(&mut self) {
        self.send(TodoAction::Submit);
    }

    /// Hide the panel without committing
    pub fn hide_panel(&mut self) {
        self.send(TodoAction::HidePanel);
    }

    /// Register a listener called with the new state after every operation
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&TodoState) + 'static,
    {
        self.store.subscribe(listener)
    }

    /// Remove a listener; returns `false` if it was not subscribed
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.store.unsubscribe(id)
    }

    /// Whole state
    #[must_use]
    pub const fn state(&self) -> &TodoState {
        self.store.state()
    }

    /// Items in display order
    #[must_use]
    pub fn items(&self) -> &[TodoItem] {
        &self.state().items
    }

    /// Current draft
    #[must_use]
    pub const fn draft(&self) -> &Draft {
        &self.state().draft
    }

    /// Whether committing the draft creates or edits
    #[must_use]
    pub const fn draft_mode(&self) -> DraftMode {
        self.draft().mode()
    }

    /// Edit panel visibility
    #[must_use]
    pub const fn panel(&self) -> PanelState {
        self.state().panel
    }

    /// Item by id
    #[must_use]
    pub fn get(&self, id: TodoId) -> Option<&TodoItem> {
        self.state().get(id)
    }

    /// Consume the store and return its state
    #[must_use]
    pub fn into_state(self) -> TodoState {
        self.store.into_state()
    }
}

impl Default for TodoStore {
    fn default() -> Self {
        Self::new()
    }
}
