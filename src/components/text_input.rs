//! Text Input Component
//!
//! Controlled text field showing focus, filled and error state.

use leptos::prelude::*;

/// A form text field bound to a string signal
#[component]
pub fn TextInput(
    name: &'static str,
    #[prop(into)] placeholder: String,
    value: RwSignal<String>,
    #[prop(into)] error: Signal<Option<String>>,
) -> impl IntoView {
    let (is_focused, set_is_focused) = signal(false);

    let container_class = move || {
        let mut class = String::from("input-container");
        if error.with(Option::is_some) {
            class.push_str(" errored");
        }
        if is_focused.get() {
            class.push_str(" focused");
        }
        if !value.with(|v| v.is_empty()) {
            class.push_str(" filled");
        }
        class
    };

    view! {
        <div class=container_class>
            <input
                type="text"
                name=name
                placeholder=placeholder
                prop:value=move || value.get()
                on:focus=move |_| set_is_focused.set(true)
                on:blur=move |_| set_is_focused.set(false)
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            {move || error.get().map(|message| view! {
                <div class="input-error" title=message.clone()>
                    "⚠"
                    <span>{message.clone()}</span>
                </div>
            })}
        </div>
    }
}
