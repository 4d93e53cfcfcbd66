//! Frontend Models
//!
//! Data structures matching the REST backend's food resource.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A menu item (matches backend)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FoodPlate {
    pub id: u32,
    pub name: String,
    pub image: String,
    pub price: String,
    pub description: String,
    pub available: bool,
}

impl FoodPlate {
    /// Apply user-edited fields, keeping id and availability
    pub fn with_input(&self, input: FoodInput) -> FoodPlate {
        FoodPlate {
            id: self.id,
            available: self.available,
            name: input.name,
            image: input.image,
            price: input.price,
            description: input.description,
        }
    }

    /// The editable fields, used to pre-fill the edit form
    pub fn input(&self) -> FoodInput {
        FoodInput {
            name: self.name.clone(),
            image: self.image.clone(),
            price: self.price.clone(),
            description: self.description.clone(),
        }
    }

    pub fn formatted_price(&self) -> String {
        format_price(&self.price)
    }
}

/// User-editable fields collected by the add/edit dialogs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct FoodInput {
    #[validate(custom(function = "crate::validation::validate_name"))]
    pub name: String,
    #[validate(custom(function = "crate::validation::validate_image"))]
    pub image: String,
    #[validate(custom(function = "crate::validation::validate_price"))]
    pub price: String,
    #[validate(custom(function = "crate::validation::validate_description"))]
    pub description: String,
}

/// POST /foods body
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewFood {
    pub available: bool,
    #[serde(flatten)]
    pub input: FoodInput,
}

impl From<FoodInput> for NewFood {
    fn from(input: FoodInput) -> Self {
        Self { available: true, input }
    }
}

/// PATCH /foods/:id body
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AvailabilityPatch {
    pub available: bool,
}

/// Format a decimal price string as Brazilian reais, e.g. `R$ 1.234,50`.
/// Unparseable input is shown as-is.
pub fn format_price(price: &str) -> String {
    let parsed = match price.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => return format!("R$ {}", price),
    };

    let cents = (parsed.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let mut grouped = String::new();
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    let sign = if parsed < 0.0 && cents > 0 { "-" } else { "" };
    format!("R$ {}{},{:02}", sign, grouped, cents % 100)
}
