//! UI Components
//!
//! Leptos components rendering the list as a projection of `AppContext`.

mod item_form;
mod item_filter;
mod item_list;
mod list_item;
mod clear_button;

pub use item_form::ItemForm;
pub use item_filter::ItemFilter;
pub use item_list::ItemList;
pub use list_item::ListItem;
pub use clear_button::ClearButton;
