//! Dashboard Operations
//!
//! The load/create/update/toggle/delete flows. Each one talks to the backend
//! through [`FoodApi`] and then reconciles the local collection.
//! Failures are logged here and otherwise swallowed.

use crate::api::{ApiResult, FoodApi};
use crate::models::{FoodInput, FoodPlate, NewFood};
use crate::store::{self, FoodCollection};

/// Fetch the full menu and replace the local collection
pub async fn load_foods<A, C>(api: &A, foods: &C)
where
    A: FoodApi + ?Sized,
    C: FoodCollection,
{
    match api.list_foods().await {
        Ok(loaded) => {
            log::info!("Loaded {} foods", loaded.len());
            foods.modify(|list| store::replace_all(list, loaded));
        }
        Err(err) => log::error!("Failed to load foods: {}", err),
    }
}

/// Create a food (available by default) and append the backend's copy
pub async fn add_food<A, C>(api: &A, foods: &C, input: FoodInput) -> ApiResult<FoodPlate>
where
    A: FoodApi + ?Sized,
    C: FoodCollection,
{
    let result = api.create_food(&NewFood::from(input)).await;
    match &result {
        Ok(created) => {
            log::debug!("Created food #{}", created.id);
            foods.modify(|list| store::add_food(list, created.clone()));
        }
        Err(err) => log::error!("Failed to create food: {}", err),
    }
    result
}

/// Save edited fields for `editing`, preserving its id and availability
pub async fn update_food<A, C>(
    api: &A,
    foods: &C,
    editing: &FoodPlate,
    input: FoodInput,
) -> ApiResult<FoodPlate>
where
    A: FoodApi + ?Sized,
    C: FoodCollection,
{
    let result = api.update_food(&editing.with_input(input)).await;
    match &result {
        Ok(updated) => {
            log::debug!("Updated food #{}", editing.id);
            // id is immutable once assigned
            let mut updated = updated.clone();
            updated.id = editing.id;
            foods.modify(|list| store::replace_food(list, updated));
        }
        Err(err) => log::error!("Failed to update food #{}: {}", editing.id, err),
    }
    result
}

/// Send only the availability flag and patch it locally on success
pub async fn update_availability<A, C>(api: &A, foods: &C, id: u32, available: bool) -> ApiResult<()>
where
    A: FoodApi + ?Sized,
    C: FoodCollection,
{
    let result = api.update_availability(id, available).await;
    match &result {
        Ok(()) => {
            foods.modify(|list| store::set_availability(list, id, available));
        }
        Err(err) => log::error!("Failed to set availability of food #{}: {}", id, err),
    }
    result
}

/// Delete on the backend and drop the item locally.
///
/// The local removal happens even when the request fails, so the list can
/// diverge from the server until the next reload.
pub async fn delete_food<A, C>(api: &A, foods: &C, id: u32) -> ApiResult<()>
where
    A: FoodApi + ?Sized,
    C: FoodCollection,
{
    let result = api.delete_food(id).await;
    if let Err(err) = &result {
        log::error!("Failed to delete food #{}: {}", id, err);
    }
    foods.modify(|list| store::remove_food(list, id));
    result
}
