// ============================================================================
// CONTACT VIEWMODEL - Máquina de estados del formulario de contacto
// ============================================================================
// Idle -> Validating -> { Invalid, Submitting }
// Invalid -> Idle cuando la re-validación pasa
// Submitting -> Idle tras el delay simulado (no hay red, siempre éxito)
// ============================================================================

use super::validation::{validate_form, ValidationReport};
use super::{Command, Component};
use crate::config::AppConfig;
use crate::models::{Field, FieldValues, FormStatus};

/// Estado del botón de envío
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SubmitControl {
    pub disabled: bool,
    /// `None`: la vista deja el texto del botón tal cual
    pub label: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactState {
    pub status: FormStatus,
    pub values: FieldValues,
    pub errors: ValidationReport,
    pub success_message: Option<String>,
    pub submit: SubmitControl,
    /// Se incrementa cada vez que hay que resetear los inputs del formulario
    pub form_resets: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContactEvent {
    /// Un campo perdió el foco; `values` es el snapshot actual del formulario
    Blur { field: Field, values: FieldValues },
    /// Submit del formulario; `submit_label` es el texto actual del botón
    Submit { values: FieldValues, submit_label: String },
    /// Fin de la latencia simulada
    SubmissionCompleted,
    /// Fin del tiempo visible del mensaje de éxito
    SuccessExpired,
}

pub struct ContactViewModel {
    state: ContactState,
    /// Texto original del botón, guardado mientras se envía
    original_label: Option<String>,
    submit_delay_ms: u32,
    success_clear_ms: u32,
    success_message: String,
    sending_label: String,
}

impl ContactViewModel {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            state: ContactState::default(),
            original_label: None,
            submit_delay_ms: config.timing.submit_delay_ms,
            success_clear_ms: config.timing.success_clear_ms,
            success_message: config.success_message.clone(),
            sending_label: config.sending_label.clone(),
        }
    }

    /// Re-validar los cuatro campos y actualizar errores
    fn revalidate(&mut self, values: FieldValues) -> bool {
        let previous = self.state.status;
        self.state.status = FormStatus::Validating;
        self.state.errors = validate_form(&values);
        self.state.values = values;
        let valid = self.state.errors.is_valid();

        if !valid {
            log::debug!(
                "📝 [CONTACT] Campos inválidos: {:?}",
                self.state.errors.invalid_fields()
            );
        }

        // Validating solo existe durante la validación; se restaura o resuelve aquí
        self.state.status = match previous {
            FormStatus::Submitting => FormStatus::Submitting,
            _ if valid => FormStatus::Idle,
            _ => FormStatus::Invalid,
        };
        valid
    }

    fn on_blur(&mut self, field: Field, values: FieldValues) -> Vec<Command<ContactEvent>> {
        // Solo re-valida si el campo tiene contenido
        if values.trimmed(field).is_empty() {
            return Vec::new();
        }
        self.revalidate(values);
        Vec::new()
    }

    fn on_submit(&mut self, values: FieldValues, submit_label: String) -> Vec<Command<ContactEvent>> {
        if self.state.status == FormStatus::Submitting {
            log::warn!("⚠️ [CONTACT] Envío en curso, submit ignorado");
            return Vec::new();
        }

        self.state.success_message = None;

        if !self.revalidate(values) {
            log::info!("❌ [CONTACT] Formulario inválido, envío cancelado");
            return Vec::new();
        }

        self.state.status = FormStatus::Submitting;
        self.original_label = Some(submit_label);
        self.state.submit = SubmitControl {
            disabled: true,
            label: Some(self.sending_label.clone()),
        };
        log::info!("📨 [CONTACT] Enviando mensaje (simulado)...");

        vec![Command::After {
            delay_ms: self.submit_delay_ms,
            event: ContactEvent::SubmissionCompleted,
        }]
    }

    fn on_completed(&mut self) -> Vec<Command<ContactEvent>> {
        if self.state.status != FormStatus::Submitting {
            return Vec::new();
        }

        self.state.success_message = Some(self.success_message.clone());
        self.state.values.clear();
        self.state.form_resets += 1;
        self.state.submit = SubmitControl {
            disabled: false,
            label: self.original_label.take(),
        };
        self.state.errors = ValidationReport::default();
        self.state.status = FormStatus::Idle;
        log::info!("✅ [CONTACT] Mensaje enviado");

        vec![Command::After {
            delay_ms: self.success_clear_ms,
            event: ContactEvent::SuccessExpired,
        }]
    }
}

impl Component for ContactViewModel {
    type Event = ContactEvent;
    type State = ContactState;

    fn state(&self) -> &ContactState {
        &self.state
    }

    fn on_event(&mut self, event: ContactEvent) -> Vec<Command<ContactEvent>> {
        match event {
            ContactEvent::Blur { field, values } => self.on_blur(field, values),
            ContactEvent::Submit { values, submit_label } => self.on_submit(values, submit_label),
            ContactEvent::SubmissionCompleted => self.on_completed(),
            ContactEvent::SuccessExpired => {
                // Los timers no se cancelan: limpia el mensaje que haya
                self.state.success_message = None;
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ValidationError;

    fn valid_values() -> FieldValues {
        FieldValues::new("Jo", "a@b.co", "Hi!", "1234567890")
    }

    fn submit(vm: &mut ContactViewModel, values: FieldValues) -> Vec<Command<ContactEvent>> {
        vm.on_event(ContactEvent::Submit {
            values,
            submit_label: "Send Message".to_string(),
        })
    }

    #[test]
    fn test_valid_submit_goes_to_submitting() {
        let mut vm = ContactViewModel::new(&AppConfig::default());
        let commands = submit(&mut vm, valid_values());

        assert_eq!(vm.state().status, FormStatus::Submitting);
        assert_eq!(
            vm.state().submit,
            SubmitControl { disabled: true, label: Some("Sending...".to_string()) }
        );
        assert_eq!(
            commands,
            vec![Command::After { delay_ms: 1500, event: ContactEvent::SubmissionCompleted }]
        );
    }

    #[test]
    fn test_completion_resets_form() {
        let mut vm = ContactViewModel::new(&AppConfig::default());
        submit(&mut vm, valid_values());
        let commands = vm.on_event(ContactEvent::SubmissionCompleted);

        let state = vm.state();
        assert_eq!(state.status, FormStatus::Idle);
        assert_eq!(state.values, FieldValues::default());
        assert_eq!(state.form_resets, 1);
        assert!(state.errors.is_valid());
        assert_eq!(
            state.submit,
            SubmitControl { disabled: false, label: Some("Send Message".to_string()) }
        );
        assert!(state.success_message.as_deref().unwrap().starts_with("Thank you!"));
        assert_eq!(
            commands,
            vec![Command::After { delay_ms: 5000, event: ContactEvent::SuccessExpired }]
        );

        vm.on_event(ContactEvent::SuccessExpired);
        assert!(vm.state().success_message.is_none());
    }

    #[test]
    fn test_invalid_submit_halts() {
        let mut vm = ContactViewModel::new(&AppConfig::default());
        let mut values = valid_values();
        values.set(Field::Subject, "Hi");

        assert!(submit(&mut vm, values).is_empty());
        assert_eq!(vm.state().status, FormStatus::Invalid);
        assert_eq!(vm.state().errors.invalid_fields(), vec![Field::Subject]);
        assert_eq!(vm.state().submit, SubmitControl::default());
    }

    #[test]
    fn test_blur_on_empty_field_does_nothing() {
        let mut vm = ContactViewModel::new(&AppConfig::default());
        let values = FieldValues::new("  ", "", "", "");
        vm.on_event(ContactEvent::Blur { field: Field::Name, values });
        assert_eq!(*vm.state(), ContactState::default());
    }

    #[test]
    fn test_blur_revalidates_whole_form() {
        let mut vm = ContactViewModel::new(&AppConfig::default());
        let values = FieldValues::new("Jo", "", "", "");
        vm.on_event(ContactEvent::Blur { field: Field::Name, values });

        let errors = &vm.state().errors;
        assert!(errors.error_for(Field::Name).is_none());
        assert_eq!(errors.error_for(Field::Email), Some(&ValidationError::Required(Field::Email)));
        assert_eq!(errors.invalid_fields(), vec![Field::Email, Field::Subject, Field::Message]);
        assert_eq!(vm.state().status, FormStatus::Invalid);
    }

    #[test]
    fn test_invalid_returns_to_idle_on_correction() {
        let mut vm = ContactViewModel::new(&AppConfig::default());
        let mut values = valid_values();
        values.set(Field::Email, "a@b");
        submit(&mut vm, values.clone());
        assert_eq!(vm.state().status, FormStatus::Invalid);

        values.set(Field::Email, "a@b.co");
        vm.on_event(ContactEvent::Blur { field: Field::Email, values });
        assert_eq!(vm.state().status, FormStatus::Idle);
        assert!(vm.state().errors.is_valid());
    }

    #[test]
    fn test_double_submit_ignored() {
        let mut vm = ContactViewModel::new(&AppConfig::default());
        submit(&mut vm, valid_values());
        assert!(submit(&mut vm, valid_values()).is_empty());
        assert_eq!(vm.state().status, FormStatus::Submitting);
    }

    #[test]
    fn test_submit_clears_previous_success() {
        let mut vm = ContactViewModel::new(&AppConfig::default());
        submit(&mut vm, valid_values());
        vm.on_event(ContactEvent::SubmissionCompleted);
        assert!(vm.state().success_message.is_some());

        submit(&mut vm, FieldValues::default());
        assert!(vm.state().success_message.is_none());
        assert_eq!(vm.state().status, FormStatus::Invalid);
    }

    #[test]
    fn test_stray_completion_is_ignored() {
        let mut vm = ContactViewModel::new(&AppConfig::default());
        assert!(vm.on_event(ContactEvent::SubmissionCompleted).is_empty());
        assert_eq!(*vm.state(), ContactState::default());
    }
}
