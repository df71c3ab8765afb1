// ============================================================================
// CONTACT FORM - Campos, valores y errores de validación
// ============================================================================

use thiserror::Error;

/// Espacios que recorta el `trim()` del navegador: White_Space de Unicode
/// menos U+0085 (NEL), más el BOM U+FEFF
fn is_form_whitespace(c: char) -> bool {
    c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{0085}')
}

/// Recortar un valor de input como lo hace el navegador
pub fn trim_input(value: &str) -> &str {
    value.trim_matches(is_form_whitespace)
}

/// Longitud de un valor de input en unidades UTF-16 (`input.value.length`)
pub fn input_len(value: &str) -> usize {
    value.encode_utf16().count()
}

/// Campo del formulario de contacto
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    /// Orden de validación y de pintado de errores
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    /// ID del input en el DOM
    pub fn id(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }

    /// ID del slot de texto de error (`<id>Error`)
    pub fn error_id(self) -> String {
        format!("{}Error", self.id())
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Subject => "Subject",
            Field::Message => "Message",
        }
    }

    /// Longitud mínima (unidades UTF-16, tras trim). El email usa patrón en su lugar.
    pub fn min_len(self) -> Option<usize> {
        match self {
            Field::Name => Some(2),
            Field::Email => None,
            Field::Subject => Some(3),
            Field::Message => Some(10),
        }
    }
}

/// Error de validación de un campo; `Display` es el texto que ve el usuario
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{} is required", .0.label())]
    Required(Field),
    #[error("{} must be at least {min} characters", .field.label())]
    TooShort { field: Field, min: usize },
    #[error("Please enter a valid email address")]
    InvalidEmail,
}

impl ValidationError {
    pub fn field(&self) -> Field {
        match self {
            ValidationError::Required(field) => *field,
            ValidationError::TooShort { field, .. } => *field,
            ValidationError::InvalidEmail => Field::Email,
        }
    }
}

/// Snapshot de los valores del formulario (tal cual están en los inputs)
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldValues {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl FieldValues {
    pub fn new(name: &str, email: &str, subject: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            email: email.to_string(),
            subject: subject.to_string(),
            message: message.to_string(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Subject => self.subject = value,
            Field::Message => self.message = value,
        }
    }

    /// Valor del campo sin espacios al inicio/final
    pub fn trimmed(&self, field: Field) -> &str {
        trim_input(self.get(field))
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Estado de la máquina del formulario
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FormStatus {
    #[default]
    Idle,
    /// Transitorio: solo existe mientras se ejecuta la validación completa
    Validating,
    Invalid,
    Submitting,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_slot_ids() {
        assert_eq!(Field::Name.error_id(), "nameError");
        assert_eq!(Field::Message.error_id(), "messageError");
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(ValidationError::Required(Field::Subject).to_string(), "Subject is required");
        assert_eq!(
            ValidationError::TooShort { field: Field::Name, min: 2 }.to_string(),
            "Name must be at least 2 characters"
        );
        assert_eq!(
            ValidationError::TooShort { field: Field::Message, min: 10 }.to_string(),
            "Message must be at least 10 characters"
        );
        assert_eq!(ValidationError::InvalidEmail.to_string(), "Please enter a valid email address");
        assert_eq!(ValidationError::InvalidEmail.field(), Field::Email);
    }

    #[test]
    fn test_values_get_set() {
        let mut values = FieldValues::default();
        values.set(Field::Subject, "  Hola ");
        assert_eq!(values.get(Field::Subject), "  Hola ");
        assert_eq!(values.trimmed(Field::Subject), "Hola");
        values.clear();
        assert_eq!(values, FieldValues::default());
    }

    #[test]
    fn test_trim_input_strips_bom_keeps_nel() {
        assert_eq!(trim_input("\u{FEFF} Hola\u{3000}"), "Hola");
        assert_eq!(trim_input("\u{FEFF}"), "");
        assert_eq!(trim_input("\u{0085}x\u{0085}"), "\u{0085}x\u{0085}");
    }

    #[test]
    fn test_input_len_counts_utf16_units() {
        assert_eq!(input_len("Jo"), 2);
        assert_eq!(input_len("😀"), 2);
        assert_eq!(input_len("é"), 1);
    }
}
