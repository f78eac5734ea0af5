//! Domain types for the Todo module.
//!
//! A todo list is an ordered list of items plus an edit buffer (the draft)
//! shared by the "create" and "edit" flows, and the visibility of the panel
//! that shows that buffer.

use module_store_macros::Action;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Identifier of a todo item
///
/// Ids are assigned by the store, starting at 1. [`TodoId::NEW`] (0) never
/// names an item; in a [`Draft`] it means "create a new item".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(u32);

impl TodoId {
    /// Draft id for create-mode
    pub const NEW: Self = Self(0);

    /// Creates a `TodoId` from its numeric value
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the numeric value
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Returns true for [`TodoId::NEW`]
    #[must_use]
    pub const fn is_new(self) -> bool {
        self.0 == 0
    }
}

impl From<u32> for TodoId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single todo item
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    /// Unique identifier, assigned by the store
    pub id: TodoId,
    /// Short title
    pub title: String,
    /// Free-form description
    pub desc: String,
    /// Whether the todo is done
    pub done: bool,
}

impl TodoItem {
    /// Creates a not-done todo item
    #[must_use]
    pub fn new(id: TodoId, title: impl Into<String>, desc: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            desc: desc.into(),
            done: false,
        }
    }

    /// Sets the done flag
    #[must_use]
    pub const fn with_done(mut self, done: bool) -> Self {
        self.done = done;
        self
    }
}

/// Editable fields of a [`Draft`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DraftField {
    /// The item title
    Title,
    /// The item description
    Desc,
}

impl DraftField {
    /// Field name as used by views (`"title"`, `"desc"`)
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Desc => "desc",
        }
    }
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A field name that is neither `"title"` nor `"desc"`
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown draft field `{0}`, expected `title` or `desc`")]
pub struct ParseDraftFieldError(pub String);

impl FromStr for DraftField {
    type Err = ParseDraftFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "title" => Ok(Self::Title),
            "desc" => Ok(Self::Desc),
            other => Err(ParseDraftFieldError(other.to_string())),
        }
    }
}

/// What committing the draft will do
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DraftMode {
    /// Append a new item
    Create,
    /// Overwrite title and description of an existing item
    Edit(TodoId),
}

impl fmt::Display for DraftMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Create => f.write_str("new"),
            Self::Edit(id) => write!(f, "{id}"),
        }
    }
}

/// The in-progress edit buffer
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    /// [`TodoId::NEW`] in create-mode, otherwise the item being edited
    pub id: TodoId,
    /// Title being edited
    pub title: String,
    /// Description being edited
    pub desc: String,
}

impl Draft {
    /// Draft holding a copy of `item`'s editable fields
    #[must_use]
    pub fn for_item(item: &TodoItem) -> Self {
        Self {
            id: item.id,
            title: item.title.clone(),
            desc: item.desc.clone(),
        }
    }

    /// Create-mode or edit-mode
    #[must_use]
    pub const fn mode(&self) -> DraftMode {
        if self.id.is_new() {
            DraftMode::Create
        } else {
            DraftMode::Edit(self.id)
        }
    }

    /// Replace one field
    pub fn set(&mut self, field: DraftField, value: String) {
        match field {
            DraftField::Title => self.title = value,
            DraftField::Desc => self.desc = value,
        }
    }
}

/// Visibility of the panel showing the draft
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelState {
    /// Panel is not shown
    #[default]
    Hidden,
    /// Panel is shown
    Shown,
}

/// State of the todo module
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoState {
    /// Items in display order
    pub items: Vec<TodoItem>,
    /// Auto-increment counter
    ///
    /// Bumped before every creation, so it equals the highest id assigned
    /// so far and the next item receives `next_id + 1`.
    pub next_id: u32,
    /// Edit buffer
    pub draft: Draft,
    /// Edit panel visibility
    pub panel: PanelState,
}

impl TodoState {
    /// Creates an empty todo state
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a state seeded with the two sample items (ids 1 and 2)
    #[must_use]
    pub fn with_samples() -> Self {
        Self {
            items: vec![
                TodoItem::new(TodoId(1), "Sample01", "最初のサンプル").with_done(true),
                TodoItem::new(TodoId(2), "Sample02", "二番目のサンプル"),
            ],
            next_id: 2,
            ..Self::default()
        }
    }

    /// Highest item id, or 0 for an empty list
    #[must_use]
    pub fn max_id(&self) -> u32 {
        self.items.iter().map(|item| item.id.get()).max().unwrap_or(0)
    }

    /// Raises `next_id` to the highest item id if it lags behind
    ///
    /// States built by hand or restored from a snapshot may carry a stale
    /// counter; creating an item from one would reuse an existing id.
    #[must_use]
    pub fn with_counter_repaired(mut self) -> Self {
        let max_id = self.max_id();
        if self.next_id < max_id {
            tracing::warn!(next_id = self.next_id, max_id, "Stale id counter raised");
            self.next_id = max_id;
        }
        self
    }

    /// Returns the number of todos
    #[must_use]
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Returns the number of done todos
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|item| item.done).count()
    }

    /// Returns a todo by ID
    #[must_use]
    pub fn get(&self, id: TodoId) -> Option<&TodoItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Returns a mutable todo by ID
    pub fn get_mut(&mut self, id: TodoId) -> Option<&mut TodoItem> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    /// Checks if a todo exists
    #[must_use]
    pub fn exists(&self, id: TodoId) -> bool {
        self.get(id).is_some()
    }
}

/// Everything a view can ask the todo module to do
#[derive(Action, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TodoAction {
    /// Reset the draft to create-mode and show the panel
    StartNew,

    /// Copy an item into the draft and show the panel
    StartEdit {
        /// Item to edit
        id: TodoId,
    },

    /// Replace one draft field
    SetDraftField {
        /// Field to replace
        field: DraftField,
        /// New value
        value: String,
    },

    /// Append or overwrite an item from the draft, then reset the draft
    CommitDraft,

    /// Set an item's done flag
    ToggleDone {
        /// Item to update
        id: TodoId,
        /// New flag value
        done: bool,
    },

    /// Delete an item
    Remove {
        /// Item to delete
        id: TodoId,
    },

    /// The panel's submit button: hide the panel, then commit the draft
    Submit,

    /// Hide the panel, keeping the draft
    HidePanel,
}
