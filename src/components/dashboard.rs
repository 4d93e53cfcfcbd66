//! Dashboard Page
//!
//! Owns the menu collection and is the only component that reaches the
//! backend. Dialogs and cards get callbacks into the flows in `actions`.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions;
use crate::components::{AddFoodModal, EditFoodModal, FoodCard, Header};
use crate::context::use_app_context;
use crate::models::{FoodInput, FoodPlate};
use crate::store::{use_menu_store, MenuStateStoreFields};

const NO_EDITING_FOOD: &str = "Nenhum prato selecionado para edição";

#[component]
pub fn Dashboard() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_menu_store();

    // Load the menu once on mount
    Effect::new(move |_| {
        spawn_local(async move {
            actions::load_foods(&ctx.api(), &store).await;
        });
    });

    let handle_add_food = Callback::new(move |input: FoodInput| -> Result<(), String> {
        spawn_local(async move {
            let _ = actions::add_food(&ctx.api(), &store, input).await;
        });
        Ok(())
    });

    let handle_update_food = Callback::new(move |input: FoodInput| -> Result<(), String> {
        let Some(editing) = ctx.editing_food.get_untracked() else {
            return Err(NO_EDITING_FOOD.to_string());
        };
        spawn_local(async move {
            if actions::update_food(&ctx.api(), &store, &editing, input).await.is_ok() {
                ctx.clear_editing();
            }
        });
        Ok(())
    });

    let handle_toggle_availability = Callback::new(move |(id, available): (u32, bool)| {
        spawn_local(async move {
            let _ = actions::update_availability(&ctx.api(), &store, id, available).await;
        });
    });

    let handle_delete_food = Callback::new(move |id: u32| {
        spawn_local(async move {
            let _ = actions::delete_food(&ctx.api(), &store, id).await;
        });
    });

    let handle_edit_food = Callback::new(move |food: FoodPlate| ctx.start_editing(food));
    let toggle_modal = Callback::new(move |_: ()| ctx.toggle_modal());
    let toggle_edit_modal = Callback::new(move |_: ()| ctx.toggle_edit_modal());

    view! {
        <Header open_modal=toggle_modal />

        <AddFoodModal
            is_open=ctx.modal_open
            set_is_open=toggle_modal
            on_add_food=handle_add_food
        />
        <EditFoodModal
            is_open=ctx.edit_modal_open
            set_is_open=toggle_edit_modal
            editing_food=ctx.editing_food
            on_update_food=handle_update_food
        />

        <div class="foods-container" data-testid="foods-list">
            <For
                each=move || store.foods().get()
                key=|food| {
                    // Every displayed field, so edits re-render the card
                    (
                        food.id,
                        food.name.clone(),
                        food.image.clone(),
                        food.price.clone(),
                        food.description.clone(),
                        food.available,
                    )
                }
                children=move |food| {
                    view! {
                        <FoodCard
                            food=food
                            on_delete=handle_delete_food
                            on_edit=handle_edit_food
                            on_toggle_availability=handle_toggle_availability
                        />
                    }
                }
            />
        </div>
    }
}
