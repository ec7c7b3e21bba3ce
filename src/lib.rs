//! A personal shopping list kept in durable local storage.
//!
//! The heart of the crate is [`store::ListStore`], the single source of truth
//! for the list: it applies add, toggle, edit, delete and clear, validates
//! quantities and units on the way in, and writes the whole list to a
//! [`storage::Storage`] backend after every committed change.
//!
//! # Modules
//!
//! - [`item`] - The `Item` entity, units and quantity rules
//! - [`storage`] - Durable key-value backends
//! - [`store`] - The list store and its change notifications
//! - [`config`] - Configuration file handling
//! - [`logger`] - Callback-based `log` implementation
//! - [`ui`] - Plain-text rendering
//! - [`cli`] / [`app`] - The `shoplist` command-line frontend

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod item;
pub mod logger;
pub mod storage;
pub mod store;
pub mod ui;

pub use error::{AppError, AppResult};
pub use item::{Item, ItemId, Unit};
pub use storage::{FileStorage, MemoryStorage, Storage};
pub use store::{ListEvent, ListStore};
