//! Backend API
//!
//! REST bindings for the food resource, organized behind the `FoodApi` trait
//! so the dashboard flows can run against any backend.

mod error;
mod foods;

use async_trait::async_trait;

use crate::models::{FoodPlate, NewFood};

pub use error::{ApiError, ApiResult};
pub use foods::HttpFoodApi;

/// CRUD operations on the `/foods` resource.
///
/// Futures are `?Send`: in the browser everything runs on one thread.
#[async_trait(?Send)]
pub trait FoodApi {
    /// GET /foods
    async fn list_foods(&self) -> ApiResult<Vec<FoodPlate>>;

    /// POST /foods
    async fn create_food(&self, food: &NewFood) -> ApiResult<FoodPlate>;

    /// PUT /foods/:id
    async fn update_food(&self, food: &FoodPlate) -> ApiResult<FoodPlate>;

    /// PATCH /foods/:id with only the availability flag
    async fn update_availability(&self, id: u32, available: bool) -> ApiResult<()>;

    /// DELETE /foods/:id
    async fn delete_food(&self, id: u32) -> ApiResult<()>;
}
