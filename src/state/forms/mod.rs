//! Form domain layer
//!
//! Type-safe field state, the per-form controllers, and their synchronous
//! validation rules.

mod field;
mod form_state;
mod validate;

pub use field::{FieldValue, FormField};
pub use form_state::{
    EnrollmentForm, Form, FormState, LoginForm, RegistrationForm, SubmitPhase,
};
pub use validate::ValidationError;
