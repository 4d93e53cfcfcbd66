//! Modal Component
//!
//! Overlay dialog; clicking the backdrop closes it.

use leptos::prelude::*;

#[component]
pub fn Modal(
    #[prop(into)] is_open: Signal<bool>,
    #[prop(into)] set_is_open: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class="modal-overlay"
            style:display=move || if is_open.get() { "flex" } else { "none" }
            on:click=move |_| set_is_open.run(())
        >
            <div class="modal-content" on:click=|ev| ev.stop_propagation()>
                {children()}
            </div>
        </div>
    }
}
