use crate::item::Item;
use crate::store::display_order;

const EMPTY_TITLE: &str = "Your shopping list is empty";
const EMPTY_HINT: &str = "Add some items to get started";

/// Render one row: position, checkbox, name and quantity.
///
pub fn render_item(position: usize, item: &Item) -> String {
    let checkbox = if item.completed { "[x]" } else { "[ ]" };
    format!(
        "{:>3}. {} {} ({})",
        position,
        checkbox,
        item.text,
        item.quantity_label()
    )
}

/// Render the whole list in display order, numbered from 1.
///
pub fn render_list(items: &[Item]) -> String {
    if items.is_empty() {
        return format!("{}\n{}\n", EMPTY_TITLE, EMPTY_HINT);
    }

    let mut output = String::new();
    for (index, item) in display_order(items).into_iter().enumerate() {
        output.push_str(&render_item(index + 1, item));
        output.push('\n');
    }
    output
}

/// Render the "remaining" line shown under the list.
///
pub fn render_summary(remaining: usize, total: usize) -> String {
    format!("{} of {} items remaining", remaining, total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{ItemId, Unit};

    fn item(id: &str, text: &str, quantity: f64, unit: Unit, completed: bool) -> Item {
        Item {
            id: ItemId::from(id),
            text: text.to_string(),
            quantity,
            unit,
            completed,
        }
    }

    #[test]
    fn test_render_item_rows() {
        let bread = item("1", "Bread", 2.0, Unit::Count, false);
        assert_eq!(render_item(1, &bread), "  1. [ ] Bread (2 x)");

        let cheese = item("2", "Cheese", 0.5, Unit::Kilogram, true);
        assert_eq!(render_item(12, &cheese), " 12. [x] Cheese (0.50 kg)");
    }

    #[test]
    fn test_render_empty_list() {
        let output = render_list(&[]);
        assert!(output.contains("Your shopping list is empty"));
        assert!(output.contains("Add some items"));
    }

    #[test]
    fn test_render_list_puts_completed_last() {
        let items = vec![
            item("1", "Bread", 1.0, Unit::Count, true),
            item("2", "Cheese", 0.5, Unit::Kilogram, false),
        ];
        let output = render_list(&items);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "  1. [ ] Cheese (0.50 kg)");
        assert_eq!(lines[1], "  2. [x] Bread (1 x)");
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn test_render_summary() {
        assert_eq!(render_summary(1, 2), "1 of 2 items remaining");
        assert_eq!(render_summary(0, 3), "0 of 3 items remaining");
    }
}
