//! Food Form
//!
//! Field signals and inputs shared by the add and edit dialogs.

use leptos::prelude::*;

use crate::components::TextInput;
use crate::models::FoodInput;
use crate::validation::{submit_food_form, FieldErrors, SubmitOutcome};

pub const UNEXPECTED_ERROR_MESSAGE: &str =
    "Desculpe. Aconteceu um erro. Tente adicionar o prato novamente.";

/// Form state for one dialog
#[derive(Clone, Copy)]
pub struct FoodFormState {
    pub image: RwSignal<String>,
    pub name: RwSignal<String>,
    pub price: RwSignal<String>,
    pub description: RwSignal<String>,
    /// Per-field validation messages
    pub errors: RwSignal<FieldErrors>,
    /// Set when the intent callback fails
    pub unexpected_error: RwSignal<Option<String>>,
}

impl FoodFormState {
    pub fn new() -> Self {
        Self {
            image: RwSignal::new(String::new()),
            name: RwSignal::new(String::new()),
            price: RwSignal::new(String::new()),
            description: RwSignal::new(String::new()),
            errors: RwSignal::new(FieldErrors::new()),
            unexpected_error: RwSignal::new(None),
        }
    }

    /// Snapshot of the current field values
    pub fn input(&self) -> FoodInput {
        FoodInput {
            name: self.name.get_untracked(),
            image: self.image.get_untracked(),
            price: self.price.get_untracked(),
            description: self.description.get_untracked(),
        }
    }

    /// Load values (edit pre-fill) and drop stale messages
    pub fn fill(&self, input: FoodInput) {
        self.name.set(input.name);
        self.image.set(input.image);
        self.price.set(input.price);
        self.description.set(input.description);
        self.clear_messages();
    }

    pub fn reset(&self) {
        self.fill(FoodInput::default());
    }

    pub fn clear_messages(&self) {
        self.errors.set(FieldErrors::new());
        self.unexpected_error.set(None);
    }

    /// Message for one field, as a signal for `TextInput`
    pub fn error_for(&self, field: &'static str) -> Signal<Option<String>> {
        let errors = self.errors;
        Signal::derive(move || errors.with(|errors| errors.get(field).cloned()))
    }

    /// Validate and emit the dialog's intent.
    ///
    /// Returns true when the dialog should close.
    pub fn submit(&self, on_submit: Callback<FoodInput, Result<(), String>>) -> bool {
        self.clear_messages();

        match submit_food_form(self.input(), |input| on_submit.run(input)) {
            SubmitOutcome::Submitted => true,
            SubmitOutcome::Invalid(errors) => {
                log::debug!("Food form rejected: {:?}", errors);
                self.errors.set(errors);
                false
            }
            SubmitOutcome::Failed(message) => {
                log::warn!("Food form submission failed: {}", message);
                self.unexpected_error.set(Some(message));
                false
            }
        }
    }
}

impl Default for FoodFormState {
    fn default() -> Self {
        Self::new()
    }
}

/// Error banner plus the four food inputs
#[component]
pub fn FoodFormFields(form: FoodFormState) -> impl IntoView {
    view! {
        {move || form.unexpected_error.get().map(|_| view! {
            <strong class="form-error">
                <span class="icon">"☹"</span>
                {UNEXPECTED_ERROR_MESSAGE}
            </strong>
        })}

        <TextInput name="image" placeholder="Cole o link aqui" value=form.image error=form.error_for("image") />
        <TextInput name="name" placeholder="Ex: Moda Italiana" value=form.name error=form.error_for("name") />
        <TextInput name="price" placeholder="Ex: 19.90" value=form.price error=form.error_for("price") />
        <TextInput name="description" placeholder="Descrição" value=form.description error=form.error_for("description") />
    }
}
