//! Store lifecycle and change notification types.

use crate::item::Item;

/// Specifying the two lifecycle states of a store.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Lifecycle {
    /// The persisted list has not been read yet; nothing is written.
    Loading,
    /// The initial load attempt finished; every mutation is written.
    Ready,
}

/// Describes a committed change, delivered to subscribers together with the
/// new list.
///
#[derive(Debug, PartialEq, Clone)]
pub enum ListEvent {
    /// The initial load finished with this many items.
    Loaded { count: usize },
    /// An item was created at the head of the list.
    Added(Item),
    /// An item's completed flag flipped. Carries the item after the change.
    Toggled(Item),
    /// An item's text, quantity or unit changed. Carries the item after the change.
    Edited(Item),
    /// An item was removed.
    Deleted(Item),
    /// Every item was removed.
    Cleared { count: usize },
}
