//! Shopping list state management module.
//!
//! This module contains the single source of truth for the list, including:
//! - `ListStore`, which applies add/toggle/edit/delete/clear and persists
//!   the full list after every committed change
//! - Lifecycle and change notification types
//! - Store error handling

mod error;
mod event;
mod list_store;

pub use error::{StoreError, StoreResult};
pub use event::{Lifecycle, ListEvent};
pub use list_store::{display_order, ListStore, STORAGE_KEY};
