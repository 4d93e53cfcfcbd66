//! Add Food Modal
//!
//! Dialog collecting a new plate. Emits a create intent once the form
//! validates, then resets and closes.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::components::{FoodFormFields, FoodFormState, Modal};
use crate::models::FoodInput;

#[component]
pub fn AddFoodModal(
    #[prop(into)] is_open: Signal<bool>,
    #[prop(into)] set_is_open: Callback<()>,
    #[prop(into)] on_add_food: Callback<FoodInput, Result<(), String>>,
) -> impl IntoView {
    let form = FoodFormState::new();

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if form.submit(on_add_food) {
            form.reset();
            set_is_open.run(());
        }
    };

    view! {
        <Modal is_open=is_open set_is_open=set_is_open>
            <form class="food-form" on:submit=handle_submit>
                <h1>"Novo Prato"</h1>

                <FoodFormFields form=form />

                <button type="submit" data-testid="add-food-button">
                    <p class="text">"Adicionar Prato"</p>
                    <div class="icon">"✔"</div>
                </button>
            </form>
        </Modal>
    }
}
