use super::{Lifecycle, ListEvent, StoreResult};
use crate::item::{normalize_quantity, normalize_text, Item, ItemId, Unit, DEFAULT_QUANTITY};
use crate::storage::Storage;
use log::*;
use std::collections::HashSet;

/// Well-known key the list is persisted under.
///
pub const STORAGE_KEY: &str = "shoppingItems";

type Subscriber = Box<dyn Fn(&ListEvent, &[Item])>;

/// Owns the ordered list of items and keeps it synchronized with durable
/// storage.
///
/// Every mutation builds the next list, writes it in full under
/// [`STORAGE_KEY`] and only then replaces the in-memory list, so a failed
/// write leaves both sides as they were. Input the list cannot hold (blank
/// text, unusable quantities) and unknown ids are ignored rather than
/// reported.
pub struct ListStore<S> {
    storage: S,
    items: Vec<Item>,
    lifecycle: Lifecycle,
    subscribers: Vec<Subscriber>,
}

impl<S: Storage> ListStore<S> {
    /// Return a new store that has not read its storage yet.
    ///
    pub fn new(storage: S) -> Self {
        ListStore {
            storage,
            items: vec![],
            lifecycle: Lifecycle::Loading,
            subscribers: vec![],
        }
    }

    /// Return a new store with the persisted list already loaded.
    ///
    pub fn open(storage: S) -> StoreResult<Self> {
        let mut store = ListStore::new(storage);
        store.load()?;
        Ok(store)
    }

    /// Read the persisted list, replacing anything held in memory.
    ///
    /// Absent data starts an empty list. Data that fails to parse is logged,
    /// discarded and overwritten with an empty list. Only a failing backend
    /// is returned as an error, in which case the store stays `Loading`.
    /// Calling this again once `Ready` does nothing.
    ///
    pub fn load(&mut self) -> StoreResult<&[Item]> {
        if self.lifecycle == Lifecycle::Ready {
            debug!("Shopping list already loaded, skipping reload.");
            return Ok(&self.items);
        }

        let (items, dirty) = match self.storage.get(STORAGE_KEY)? {
            None => {
                info!("No saved shopping list found, starting empty.");
                (vec![], false)
            }
            Some(raw) => match serde_json::from_str::<Vec<Item>>(&raw) {
                Ok(items) => sanitize(items),
                Err(e) => {
                    error!("Failed to parse saved shopping items, discarding them: {}", e);
                    (vec![], true)
                }
            },
        };

        if dirty {
            self.persist(&items)?;
        }
        if !self.items.is_empty() {
            warn!(
                "Discarding {} unsaved items changed before the list was loaded.",
                self.items.len()
            );
        }

        debug!("Loaded {} shopping items.", items.len());
        self.items = items;
        self.lifecycle = Lifecycle::Ready;
        self.notify(&ListEvent::Loaded {
            count: self.items.len(),
        });
        Ok(&self.items)
    }

    /// Add an item with the default quantity and unit.
    ///
    pub fn add(&mut self, text: &str) -> StoreResult<&[Item]> {
        self.add_with(text, DEFAULT_QUANTITY, Unit::Count)
    }

    /// Add an item to the head of the list. Blank text or an unusable
    /// quantity leaves the list unchanged.
    ///
    pub fn add_with(&mut self, text: &str, quantity: f64, unit: Unit) -> StoreResult<&[Item]> {
        let item = match Item::new(text, quantity, unit) {
            Ok(item) => item,
            Err(e) => {
                warn!("Ignoring add of {:?}: {}", text, e);
                return Ok(&self.items);
            }
        };

        let mut next = Vec::with_capacity(self.items.len() + 1);
        next.push(item.clone());
        next.extend(self.items.iter().cloned());
        self.commit(next, ListEvent::Added(item))
    }

    /// Flip the completed flag of the item with the given id.
    ///
    pub fn toggle(&mut self, id: &ItemId) -> StoreResult<&[Item]> {
        let index = match self.index_of(id) {
            Some(index) => index,
            None => return Ok(&self.items),
        };

        let mut next = self.items.clone();
        next[index].completed = !next[index].completed;
        let event = ListEvent::Toggled(next[index].clone());
        self.commit(next, event)
    }

    /// Replace text, quantity and unit of the item with the given id,
    /// keeping its id and completed flag.
    ///
    pub fn edit(
        &mut self,
        id: &ItemId,
        text: &str,
        quantity: f64,
        unit: Unit,
    ) -> StoreResult<&[Item]> {
        let index = match self.index_of(id) {
            Some(index) => index,
            None => return Ok(&self.items),
        };
        let validated = normalize_text(text)
            .and_then(|text| normalize_quantity(quantity, unit).map(|quantity| (text, quantity)));
        let (text, quantity) = match validated {
            Ok(fields) => fields,
            Err(e) => {
                warn!("Ignoring edit of item {}: {}", id, e);
                return Ok(&self.items);
            }
        };

        let mut next = self.items.clone();
        let item = &mut next[index];
        item.text = text;
        item.quantity = quantity;
        item.unit = unit;
        let event = ListEvent::Edited(item.clone());
        self.commit(next, event)
    }

    /// Remove the item with the given id.
    ///
    pub fn delete(&mut self, id: &ItemId) -> StoreResult<&[Item]> {
        let index = match self.index_of(id) {
            Some(index) => index,
            None => return Ok(&self.items),
        };

        let mut next = self.items.clone();
        let removed = next.remove(index);
        self.commit(next, ListEvent::Deleted(removed))
    }

    /// Remove every item.
    ///
    pub fn clear(&mut self) -> StoreResult<&[Item]> {
        let count = self.items.len();
        self.commit(vec![], ListEvent::Cleared { count })
    }

    /// Register a callback invoked after every committed change.
    ///
    pub fn subscribe<F>(&mut self, callback: F)
    where
        F: Fn(&ListEvent, &[Item]) + 'static,
    {
        self.subscribers.push(Box::new(callback));
    }

    /// Returns the list in storage order, most recently added first.
    ///
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Returns the list in the order it should be shown.
    ///
    pub fn display_order(&self) -> Vec<&Item> {
        display_order(&self.items)
    }

    pub fn get(&self, id: &ItemId) -> Option<&Item> {
        self.items.iter().find(|item| &item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of items not yet purchased.
    ///
    pub fn remaining(&self) -> usize {
        self.items.iter().filter(|item| !item.completed).count()
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    /// True until the initial load has finished; never true again after.
    ///
    pub fn is_loading(&self) -> bool {
        self.lifecycle == Lifecycle::Loading
    }

    fn index_of(&self, id: &ItemId) -> Option<usize> {
        let index = self.items.iter().position(|item| &item.id == id);
        if index.is_none() {
            debug!("No shopping item with id {}, ignoring.", id);
        }
        index
    }

    /// Write `next` (unless still loading), then make it the current list
    /// and notify subscribers.
    ///
    fn commit(&mut self, next: Vec<Item>, event: ListEvent) -> StoreResult<&[Item]> {
        match self.lifecycle {
            Lifecycle::Ready => self.persist(&next)?,
            Lifecycle::Loading => {
                warn!("Shopping list not loaded yet, change kept in memory only.")
            }
        }
        self.items = next;
        self.notify(&event);
        Ok(&self.items)
    }

    fn persist(&mut self, items: &[Item]) -> StoreResult<()> {
        let json = serde_json::to_string(items)?;
        self.storage.set(STORAGE_KEY, &json)?;
        trace!("Persisted {} shopping items.", items.len());
        Ok(())
    }

    fn notify(&self, event: &ListEvent) {
        for subscriber in &self.subscribers {
            subscriber(event, &self.items);
        }
    }
}

/// Stable partition of the list: incomplete items first, completed items
/// after, each group in its original relative order.
///
pub fn display_order(items: &[Item]) -> Vec<&Item> {
    items
        .iter()
        .filter(|item| !item.completed)
        .chain(items.iter().filter(|item| item.completed))
        .collect()
}

/// Repair a freshly parsed list. Returns the list and whether anything had
/// to change.
///
fn sanitize(items: Vec<Item>) -> (Vec<Item>, bool) {
    let mut seen = HashSet::new();
    let mut dirty = false;
    let mut clean = Vec::with_capacity(items.len());

    for mut item in items {
        let text = match normalize_text(&item.text) {
            Ok(text) => text,
            Err(_) => {
                warn!("Dropping saved item {} with empty text.", item.id);
                dirty = true;
                continue;
            }
        };
        if !seen.insert(item.id.clone()) {
            warn!("Dropping saved item with duplicate id {}.", item.id);
            dirty = true;
            continue;
        }
        let quantity = normalize_quantity(item.quantity, item.unit).unwrap_or_else(|e| {
            warn!("Resetting quantity of saved item {}: {}", item.id, e);
            DEFAULT_QUANTITY
        });

        if text != item.text || quantity != item.quantity {
            dirty = true;
        }
        item.text = text;
        item.quantity = quantity;
        clean.push(item);
    }

    (clean, dirty)
}
