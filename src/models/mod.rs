pub mod form;
pub mod project;

pub use form::{input_len, trim_input, Field, FieldValues, FormStatus, ValidationError};
pub use project::{CategoryFilter, ProjectCard, ALL_CATEGORIES};
