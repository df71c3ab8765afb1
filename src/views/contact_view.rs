// ============================================================================
// CONTACT VIEW - Errores por campo, botón de envío y mensaje de éxito
// ============================================================================

use std::cell::Cell;

use wasm_bindgen::JsValue;
use web_sys::{Element, HtmlButtonElement, HtmlFormElement};

use super::View;
use crate::dom::{get_element_by_id, input_value, set_class, set_style, set_text_content};
use crate::models::{Field, FieldValues};
use crate::utils::constants::ERROR_CLASS;
use crate::viewmodels::ContactState;

/// Input + slot de error (opcional) de un campo
struct FieldElements {
    field: Field,
    input: Element,
    error_slot: Option<Element>,
}

pub struct DomContactView {
    form: HtmlFormElement,
    fields: Vec<FieldElements>,
    success: Element,
    submit: HtmlButtonElement,
    /// Último `form_resets` aplicado
    applied_resets: Cell<u32>,
}

impl DomContactView {
    pub fn new(
        form: HtmlFormElement,
        inputs: Vec<(Field, Element)>,
        success: Element,
        submit: HtmlButtonElement,
    ) -> Self {
        let fields = inputs
            .into_iter()
            .map(|(field, input)| {
                let error_slot = get_element_by_id(&field.error_id());
                if error_slot.is_none() {
                    log::warn!("⚠️ [CONTACT] Sin slot #{} para errores", field.error_id());
                }
                FieldElements {
                    field,
                    input,
                    error_slot,
                }
            })
            .collect();

        Self {
            form,
            fields,
            success,
            submit,
            applied_resets: Cell::new(0),
        }
    }

    pub fn form(&self) -> &HtmlFormElement {
        &self.form
    }

    pub fn input(&self, field: Field) -> Option<&Element> {
        self.fields
            .iter()
            .find(|elements| elements.field == field)
            .map(|elements| &elements.input)
    }

    /// Snapshot de los valores actuales de los inputs
    pub fn read_values(&self) -> FieldValues {
        let mut values = FieldValues::default();
        for elements in &self.fields {
            values.set(elements.field, input_value(&elements.input));
        }
        values
    }

    /// Texto actual del botón de envío
    pub fn submit_label(&self) -> String {
        self.submit.text_content().unwrap_or_default()
    }

    fn render_field(&self, elements: &FieldElements, message: Option<String>) -> Result<(), JsValue> {
        set_class(&elements.input, ERROR_CLASS, message.is_some())?;
        if let Some(slot) = &elements.error_slot {
            set_text_content(slot, message.as_deref().unwrap_or(""));
        }
        Ok(())
    }
}

impl View<ContactState> for DomContactView {
    fn render(&self, state: &ContactState) -> Result<(), JsValue> {
        // Reset de los inputs solo cuando el viewmodel lo pide
        if state.form_resets != self.applied_resets.get() {
            self.form.reset();
            self.applied_resets.set(state.form_resets);
        }

        for elements in &self.fields {
            let message = state
                .errors
                .error_for(elements.field)
                .map(|error| error.to_string());
            self.render_field(elements, message)?;
        }

        self.submit.set_disabled(state.submit.disabled);
        if let Some(label) = &state.submit.label {
            self.submit.set_text_content(Some(label.as_str()));
        }

        match &state.success_message {
            Some(message) => {
                set_text_content(&self.success, message);
                set_style(&self.success, "color", "var(--success-color)")?;
            }
            None => set_text_content(&self.success, ""),
        }
        Ok(())
    }
}
