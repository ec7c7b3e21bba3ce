use crate::store::ListEvent;

/// Confirmation message for a committed change, or `None` when the change
/// needs no confirmation.
///
pub fn toast(event: &ListEvent) -> Option<String> {
    match event {
        ListEvent::Loaded { .. } => None,
        ListEvent::Added(item) => Some(format!("Added {} to your list", item.text)),
        ListEvent::Toggled(item) if item.completed => {
            Some(format!("{} marked as purchased", item.text))
        }
        ListEvent::Toggled(item) => Some(format!("{} marked as not purchased", item.text)),
        ListEvent::Edited(item) => Some(format!("Updated {}", item.text)),
        ListEvent::Deleted(item) => Some(format!("Removed {} from your list", item.text)),
        ListEvent::Cleared { .. } => Some("Shopping list cleared".to_string()),
    }
}
