//! Edit Food Modal
//!
//! Same form as the add dialog, pre-filled from the plate being edited.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::components::{FoodFormFields, FoodFormState, Modal};
use crate::models::{FoodInput, FoodPlate};

#[component]
pub fn EditFoodModal(
    #[prop(into)] is_open: Signal<bool>,
    #[prop(into)] set_is_open: Callback<()>,
    #[prop(into)] editing_food: Signal<Option<FoodPlate>>,
    #[prop(into)] on_update_food: Callback<FoodInput, Result<(), String>>,
) -> impl IntoView {
    let form = FoodFormState::new();

    // Re-fill whenever a new plate is targeted
    Effect::new(move |_| {
        if let Some(food) = editing_food.get() {
            form.fill(food.input());
        }
    });

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if form.submit(on_update_food) {
            set_is_open.run(());
        }
    };

    view! {
        <Modal is_open=is_open set_is_open=set_is_open>
            <form class="food-form" on:submit=handle_submit>
                <h1>"Editar Prato"</h1>

                <FoodFormFields form=form />

                <button type="submit" data-testid="edit-food-button">
                    <div class="text">"Editar Prato"</div>
                    <div class="icon">"✔"</div>
                </button>
            </form>
        </Modal>
    }
}
