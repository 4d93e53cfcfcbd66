//! Food Card Component
//!
//! One plate in the dashboard grid with edit, delete and availability controls.

use leptos::prelude::*;

use crate::models::FoodPlate;

/// Flip the card's local availability and return the value to send
fn flip_availability(is_available: RwSignal<bool>) -> bool {
    let next = !is_available.get_untracked();
    is_available.set(next);
    next
}

#[component]
pub fn FoodCard(
    food: FoodPlate,
    #[prop(into)] on_delete: Callback<u32>,
    #[prop(into)] on_edit: Callback<FoodPlate>,
    #[prop(into)] on_toggle_availability: Callback<(u32, bool)>,
) -> impl IntoView {
    let id = food.id;
    let is_available = RwSignal::new(food.available);
    let price = food.formatted_price();
    let switch_id = format!("available-switch-{}", id);
    let editing = food.clone();

    view! {
        <div class=move || if is_available.get() { "food-card" } else { "food-card unavailable" }>
            <header>
                <img src=food.image alt=food.name.clone() />
            </header>
            <section class="body">
                <h2>{food.name}</h2>
                <p>{food.description}</p>
                <p class="price">{price}</p>
            </section>
            <section class="footer">
                <div class="icon-container">
                    <button
                        type="button"
                        class="icon"
                        title="Editar"
                        data-testid=format!("edit-food-{}", id)
                        on:click=move |_| on_edit.run(editing.clone())
                    >
                        "✎"
                    </button>
                    <button
                        type="button"
                        class="icon"
                        title="Excluir"
                        data-testid=format!("remove-food-{}", id)
                        on:click=move |_| on_delete.run(id)
                    >
                        "🗑"
                    </button>
                </div>

                <div class="availability-container">
                    <p>{move || if is_available.get() { "Disponível" } else { "Indisponível" }}</p>
                    <label for=switch_id.clone() class="switch">
                        <input
                            id=switch_id.clone()
                            type="checkbox"
                            prop:checked=move || is_available.get()
                            data-testid=format!("change-status-food-{}", id)
                            on:change=move |_| {
                                let available = flip_availability(is_available);
                                on_toggle_availability.run((id, available));
                            }
                        />
                        <span class="slider"></span>
                    </label>
                </div>
            </section>
        </div>
    }
}
