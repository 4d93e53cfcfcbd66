//! Form Validation
//!
//! Field rules for the food dialogs and the mapping from
//! `validator::ValidationErrors` to per-field messages.

use std::borrow::Cow;
use std::collections::BTreeMap;

use validator::{Validate, ValidateUrl, ValidationError, ValidationErrors};

use crate::models::FoodInput;

pub const IMAGE_REQUIRED: &str = "Link de imagem obrigatório";
pub const IMAGE_INVALID: &str = "Link de imagem inválido";
pub const NAME_REQUIRED: &str = "Nome obrigatório";
pub const PRICE_REQUIRED: &str = "Preço obrigatório";
pub const PRICE_NOT_NUMBER: &str = "O preço deve ser um número";
pub const DESCRIPTION_REQUIRED: &str = "Descrição obrigatória";

const URL_SCHEMES: &[&str] = &["http://", "https://", "ftp://"];

/// Field name -> user-facing message
pub type FieldErrors = BTreeMap<String, String>;

fn field_error(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}

fn require(value: &str, message: &'static str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(field_error("required", message))
    } else {
        Ok(())
    }
}

pub fn validate_name(value: &str) -> Result<(), ValidationError> {
    require(value, NAME_REQUIRED)
}

pub fn validate_description(value: &str) -> Result<(), ValidationError> {
    require(value, DESCRIPTION_REQUIRED)
}

pub fn validate_image(value: &str) -> Result<(), ValidationError> {
    require(value, IMAGE_REQUIRED)?;

    let value = value.trim().to_string();
    let lower = value.to_ascii_lowercase();
    let has_scheme = URL_SCHEMES.iter().any(|scheme| lower.starts_with(scheme));
    if has_scheme && value.validate_url() {
        Ok(())
    } else {
        Err(field_error("url", IMAGE_INVALID))
    }
}

pub fn validate_price(value: &str) -> Result<(), ValidationError> {
    require(value, PRICE_REQUIRED)?;

    let compact: String = value.chars().filter(|c| !c.is_whitespace()).collect();
    match compact.parse::<f64>() {
        Ok(price) if price.is_finite() => Ok(()),
        _ => Err(field_error("number", PRICE_NOT_NUMBER)),
    }
}

/// Flatten a validation failure into one message per field.
/// When a field carries several errors the last one wins.
pub fn get_validation_errors(errors: &ValidationErrors) -> FieldErrors {
    let mut messages = FieldErrors::new();
    for (field, field_errors) in errors.field_errors() {
        for error in field_errors.iter() {
            let message = error
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| error.code.to_string());
            messages.insert(field.to_string(), message);
        }
    }
    messages
}

/// Validate the form, returning per-field messages on failure
pub fn validate_food(input: &FoodInput) -> Result<(), FieldErrors> {
    input.validate().map_err(|errors| get_validation_errors(&errors))
}

/// Result of submitting a food dialog
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Validation failed; nothing was emitted
    Invalid(FieldErrors),
    /// The intent callback rejected the input
    Failed(String),
    /// The intent was emitted; the dialog should close
    Submitted,
}

/// Validate and, if valid, hand the input to the dialog's intent callback
pub fn submit_food_form<F>(input: FoodInput, on_submit: F) -> SubmitOutcome
where
    F: FnOnce(FoodInput) -> Result<(), String>,
{
    if let Err(errors) = validate_food(&input) {
        return SubmitOutcome::Invalid(errors);
    }

    match on_submit(input) {
        Ok(()) => SubmitOutcome::Submitted,
        Err(message) => SubmitOutcome::Failed(message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_input() -> FoodInput {
        FoodInput {
            name: "Ao molho".to_string(),
            image: "https://storage.example.com/food1.png".to_string(),
            price: "19.90".to_string(),
            description: "Macarrão ao molho branco, fughi e cheiro verde.".to_string(),
        }
    }

    #[test]
    fn test_valid_input_passes() {
        assert_eq!(validate_food(&valid_input()), Ok(()));
    }

    #[test]
    fn test_empty_form_reports_every_field() {
        let errors = validate_food(&FoodInput::default()).unwrap_err();

        assert_eq!(errors.len(), 4);
        assert_eq!(errors["image"], IMAGE_REQUIRED);
        assert_eq!(errors["name"], NAME_REQUIRED);
        assert_eq!(errors["price"], PRICE_REQUIRED);
        assert_eq!(errors["description"], DESCRIPTION_REQUIRED);
    }

    #[test]
    fn test_blank_name_is_required() {
        let input = FoodInput { name: "   ".to_string(), ..valid_input() };
        let errors = validate_food(&input).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors["name"], NAME_REQUIRED);
    }

    #[test]
    fn test_malformed_image_url() {
        for image in ["not a url", "www.example.com/a.png", "mailto:chef@example.com"] {
            let input = FoodInput { image: image.to_string(), ..valid_input() };
            let errors = validate_food(&input).unwrap_err();
            assert_eq!(errors["image"], IMAGE_INVALID, "image {:?}", image);
        }
    }

    #[test]
    fn test_price_must_be_numeric() {
        let input = FoodInput { price: "dezenove".to_string(), ..valid_input() };
        let errors = validate_food(&input).unwrap_err();
        assert_eq!(errors["price"], PRICE_NOT_NUMBER);

        let input = FoodInput { price: " 7 ".to_string(), ..valid_input() };
        assert!(validate_food(&input).is_ok());
    }

    #[test]
    fn test_price_ignores_inner_whitespace() {
        let input = FoodInput { price: "1 000".to_string(), ..valid_input() };
        assert_eq!(validate_food(&input), Ok(()));

        let input = FoodInput { price: "1 0a0".to_string(), ..valid_input() };
        assert_eq!(validate_food(&input).unwrap_err()["price"], PRICE_NOT_NUMBER);
    }

    #[test]
    fn test_get_validation_errors_falls_back_to_code() {
        let mut errors = ValidationErrors::new();
        errors.add("name", ValidationError::new("required"));
        let messages = get_validation_errors(&errors);
        assert_eq!(messages["name"], "required");
    }

    #[test]
    fn test_submit_with_empty_name_never_calls_back() {
        let mut calls = 0;
        let input = FoodInput { name: String::new(), ..valid_input() };

        let outcome = submit_food_form(input, |_| {
            calls += 1;
            Ok(())
        });

        assert_eq!(calls, 0);
        match outcome {
            SubmitOutcome::Invalid(errors) => assert_eq!(errors["name"], NAME_REQUIRED),
            other => panic!("expected Invalid, got {:?}", other),
        }
    }

    #[test]
    fn test_submit_with_bad_price_never_calls_back() {
        let mut calls = 0;
        let input = FoodInput { price: "abc".to_string(), ..valid_input() };

        let outcome = submit_food_form(input, |_| {
            calls += 1;
            Ok(())
        });

        assert_eq!(calls, 0);
        assert!(matches!(outcome, SubmitOutcome::Invalid(ref e) if e["price"] == PRICE_NOT_NUMBER));
    }

    #[test]
    fn test_submit_valid_calls_back_once_with_fields() {
        let mut received = Vec::new();

        let outcome = submit_food_form(valid_input(), |input| {
            received.push(input);
            Ok(())
        });

        assert_eq!(outcome, SubmitOutcome::Submitted);
        assert_eq!(received, vec![valid_input()]);
    }

    #[test]
    fn test_submit_callback_failure_is_reported() {
        let outcome = submit_food_form(valid_input(), |_| Err("boom".to_string()));
        assert_eq!(outcome, SubmitOutcome::Failed("boom".to_string()));
    }
}
