//! UI Components
//!
//! Leptos components for the food dashboard.

mod text_input;
mod modal;
mod header;
mod food_form;
mod add_food_modal;
mod edit_food_modal;
mod food_card;
mod dashboard;

pub use text_input::TextInput;
pub use modal::Modal;
pub use header::Header;
pub use food_form::{FoodFormFields, FoodFormState};
pub use add_food_modal::AddFoodModal;
pub use edit_food_modal::EditFoodModal;
pub use food_card::FoodCard;
pub use dashboard::Dashboard;
