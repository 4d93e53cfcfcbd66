//! Header Component
//!
//! Title bar with the "new plate" action.

use leptos::prelude::*;

#[component]
pub fn Header(#[prop(into)] open_modal: Callback<()>) -> impl IntoView {
    view! {
        <header class="app-header">
            <div class="header-content">
                <span class="logo">"GoRestaurant"</span>
                <nav>
                    <button type="button" class="new-food-btn" on:click=move |_| open_modal.run(())>
                        <div class="text">"Novo Prato"</div>
                        <div class="icon">"+"</div>
                    </button>
                </nav>
            </div>
        </header>
    }
}
