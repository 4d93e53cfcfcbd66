//! Application Context
//!
//! Shared dashboard state provided via Leptos Context API.

use leptos::prelude::*;

use crate::api::HttpFoodApi;
use crate::config::AppConfig;
use crate::models::FoodPlate;

/// Dashboard-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    config: StoredValue<AppConfig>,
    /// Add dialog visibility
    pub modal_open: RwSignal<bool>,
    /// Edit dialog visibility
    pub edit_modal_open: RwSignal<bool>,
    /// Item targeted by the edit dialog
    pub editing_food: RwSignal<Option<FoodPlate>>,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config: StoredValue::new(config),
            modal_open: RwSignal::new(false),
            edit_modal_open: RwSignal::new(false),
            editing_food: RwSignal::new(None),
        }
    }

    /// Build a backend client from the configured base URL
    pub fn api(&self) -> HttpFoodApi {
        self.config.with_value(HttpFoodApi::new)
    }

    pub fn toggle_modal(&self) {
        self.modal_open.update(|open| *open = !*open);
    }

    pub fn toggle_edit_modal(&self) {
        self.edit_modal_open.update(|open| *open = !*open);
    }

    /// Target `food` with the edit dialog and open it
    pub fn start_editing(&self, food: FoodPlate) {
        self.editing_food.set(Some(food));
        self.toggle_edit_modal();
    }

    pub fn clear_editing(&self) {
        self.editing_food.set(None);
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
