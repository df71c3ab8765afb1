// ============================================================================
// VALIDATION - Reglas de los cuatro campos del formulario de contacto
// ============================================================================

use lazy_static::lazy_static;
use regex::Regex;

use crate::models::{input_len, trim_input, Field, FieldValues, ValidationError};

lazy_static! {
    // local@dominio.tld: sin espacios, una sola @, un punto después de la @
    static ref EMAIL_RE: Regex =
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid");
}

/// Validar formato de email (el valor ya debe venir con trim)
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Validar un campo: vacío primero, luego la regla adicional
pub fn validate_field(field: Field, raw: &str) -> Result<(), ValidationError> {
    let value = trim_input(raw);

    if value.is_empty() {
        return Err(ValidationError::Required(field));
    }

    match field.min_len() {
        Some(min) if input_len(value) < min => Err(ValidationError::TooShort { field, min }),
        Some(_) => Ok(()),
        None => {
            if is_valid_email(value) {
                Ok(())
            } else {
                Err(ValidationError::InvalidEmail)
            }
        }
    }
}

/// Resultado de validar el formulario completo
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationReport {
    errors: Vec<ValidationError>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error_for(&self, field: Field) -> Option<&ValidationError> {
        self.errors.iter().find(|error| error.field() == field)
    }

    pub fn invalid_fields(&self) -> Vec<Field> {
        self.errors.iter().map(ValidationError::field).collect()
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }
}

/// Validar los cuatro campos (siempre todos, sin cortocircuito)
pub fn validate_form(values: &FieldValues) -> ValidationReport {
    let errors = Field::ALL
        .iter()
        .filter_map(|field| validate_field(*field, values.get(*field)).err())
        .collect();
    ValidationReport { errors }
}
