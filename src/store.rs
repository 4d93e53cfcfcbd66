//! Menu State Store
//!
//! The dashboard's food collection, kept in a Leptos `reactive_stores` store
//! for field-level reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::FoodPlate;

/// Page-level state owned by the dashboard
#[derive(Clone, Debug, Default, Store)]
pub struct MenuState {
    /// Every food plate currently shown
    pub foods: Vec<FoodPlate>,
}

/// Type alias for the store
pub type MenuStore = Store<MenuState>;

/// Get the menu store from context
pub fn use_menu_store() -> MenuStore {
    expect_context::<MenuStore>()
}

/// Write access to the food collection.
///
/// Implemented by the reactive store; tests also use plain cells.
pub trait FoodCollection {
    fn modify<R>(&self, f: impl FnOnce(&mut Vec<FoodPlate>) -> R) -> R;
}

impl FoodCollection for MenuStore {
    fn modify<R>(&self, f: impl FnOnce(&mut Vec<FoodPlate>) -> R) -> R {
        let field = self.foods();
        let mut foods = field.write();
        f(&mut *foods)
    }
}

#[cfg(test)]
impl FoodCollection for std::cell::RefCell<Vec<FoodPlate>> {
    fn modify<R>(&self, f: impl FnOnce(&mut Vec<FoodPlate>) -> R) -> R {
        f(&mut *self.borrow_mut())
    }
}

// ========================
// Collection Helpers
// ========================

/// Replace the whole collection (initial load)
pub fn replace_all(foods: &mut Vec<FoodPlate>, loaded: Vec<FoodPlate>) {
    *foods = loaded;
}

/// Append a newly created food
pub fn add_food(foods: &mut Vec<FoodPlate>, food: FoodPlate) {
    foods.push(food);
}

/// Replace the food with the same id. Returns false if absent.
pub fn replace_food(foods: &mut [FoodPlate], updated: FoodPlate) -> bool {
    match foods.iter_mut().find(|food| food.id == updated.id) {
        Some(food) => {
            *food = updated;
            true
        }
        None => false,
    }
}

/// Patch only the availability flag of the food with `id`
pub fn set_availability(foods: &mut [FoodPlate], id: u32, available: bool) -> bool {
    match foods.iter_mut().find(|food| food.id == id) {
        Some(food) => {
            food.available = available;
            true
        }
        None => false,
    }
}

/// Remove the food with `id`
pub fn remove_food(foods: &mut Vec<FoodPlate>, id: u32) -> bool {
    let before = foods.len();
    foods.retain(|food| food.id != id);
    foods.len() != before
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_food(id: u32, name: &str) -> FoodPlate {
        FoodPlate {
            id,
            name: name.to_string(),
            image: format!("https://example.com/{}.png", id),
            price: "10.00".to_string(),
            description: format!("{} description", name),
            available: true,
        }
    }

    #[test]
    fn test_replace_food_by_id() {
        let mut foods = vec![make_food(1, "A"), make_food(2, "B")];
        let updated = FoodPlate { price: "12.50".to_string(), ..make_food(2, "B2") };

        assert!(replace_food(&mut foods, updated.clone()));
        assert_eq!(foods[0], make_food(1, "A"));
        assert_eq!(foods[1], updated);

        assert!(!replace_food(&mut foods, make_food(9, "X")));
        assert_eq!(foods.len(), 2);
    }

    #[test]
    fn test_set_availability_touches_only_flag() {
        let mut foods = vec![make_food(1, "A"), make_food(2, "B")];

        assert!(set_availability(&mut foods, 2, false));
        assert_eq!(foods[1], FoodPlate { available: false, ..make_food(2, "B") });
        assert_eq!(foods[0], make_food(1, "A"));
        assert!(!set_availability(&mut foods, 3, false));
    }

    #[test]
    fn test_remove_food() {
        let mut foods = vec![make_food(1, "A"), make_food(2, "B")];
        assert!(remove_food(&mut foods, 1));
        assert_eq!(foods, vec![make_food(2, "B")]);
        assert!(!remove_food(&mut foods, 1));
    }

    #[test]
    fn test_add_and_replace_all() {
        let mut foods = Vec::new();
        add_food(&mut foods, make_food(1, "A"));
        add_food(&mut foods, make_food(2, "B"));
        assert_eq!(foods.iter().map(|f| f.id).collect::<Vec<_>>(), vec![1, 2]);

        replace_all(&mut foods, vec![make_food(5, "E")]);
        assert_eq!(foods, vec![make_food(5, "E")]);
    }

    #[test]
    fn test_ref_cell_collection() {
        let cell = std::cell::RefCell::new(vec![make_food(1, "A")]);
        let len = cell.modify(|foods| {
            add_food(foods, make_food(2, "B"));
            foods.len()
        });
        assert_eq!(len, 2);
    }
}
