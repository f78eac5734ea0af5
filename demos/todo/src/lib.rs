//! Todo list state module.
//!
//! A single-page todo list: create, edit, mark done, delete. The module owns
//! the items, an edit buffer (the draft) and the edit panel's visibility;
//! rendering is left to whichever view holds the [`TodoStore`].
//!
//! - Domain types and actions live in [`types`]
//! - Business logic is the [`TodoReducer`]
//! - [`TodoStore`] is the handle a view keeps: one method per intent,
//!   read accessors, and listener registration for re-rendering
//!
//! # Quick Start
//!
//! ```
//! use todo_module::{DraftField, TodoId, TodoStore, TodoState};
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let mut store = TodoStore::with_samples();
//!
//! // Re-render whenever state changes
//! let renders = Rc::new(Cell::new(0));
//! let counter = Rc::clone(&renders);
//! let subscription = store.subscribe(move |_state: &TodoState| counter.set(counter.get() + 1));
//!
//! // Edit the first sample; its done flag is kept
//! store.start_edit(TodoId::new(1));
//! store.set_draft_field(DraftField::Title, "Renamed");
//! store.commit_draft();
//!
//! let first = store.get(TodoId::new(1)).unwrap();
//! assert_eq!(first.title, "Renamed");
//! assert!(first.done);
//! assert_eq!(renders.get(), 3);
//!
//! store.unsubscribe(subscription);
//! ```

pub mod reducer;
pub mod store;
pub mod types;

// Re-export commonly used types
pub use reducer::TodoReducer;
pub use store::{TodoRuntime, TodoStore};
pub use types::{
    Draft, DraftField, DraftMode, PanelState, ParseDraftFieldError, TodoAction, TodoId, TodoItem,
    TodoState,
};
