//! Food Dashboard App
//!
//! Root component: provides the store and context, then renders the dashboard.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::Dashboard;
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::store::MenuState;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    log::info!("Using food API at {}", config.api_url);

    // Provide context to all children
    provide_context(Store::new(MenuState::default()));
    provide_context(AppContext::new(config));

    view! {
        <main class="app-layout">
            <Dashboard />
        </main>
    }
}
