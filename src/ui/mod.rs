//! Plain-text presentation of the shopping list.
//!
//! Nothing here holds state: every function renders what the store hands it.

mod list;
mod toast;

pub use list::{render_item, render_list, render_summary};
pub use toast::toast;
