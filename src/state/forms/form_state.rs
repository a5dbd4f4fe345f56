//! Form state management and form structs

use super::field::FormField;
use crate::api::{EnrollmentRequest, LoginRequest, RegistrationRequest};

/// Country codes offered by the enrollment phone selector
const COUNTRY_CODES: &[&str] = &["+91", "+1", "+44"];

/// Course categories offered by the enrollment form
const COURSE_OPTIONS: &[&str] = &[
    "web-development",
    "data-science",
    "machine-learning",
    "cloud-computing",
    "cyber-security",
    "digital-marketing",
    "ui-ux-design",
];

/// Institutions offered by the enrollment form
const INSTITUTION_OPTIONS: &[&str] = &[
    "stanford-university",
    "harvard-university",
    "bits-pilani",
    "amity-university",
];

const GENDER_OPTIONS: &[&str] = &["Male", "Female", "Other"];

/// Submission lifecycle of a form.
///
/// `Submitting` covers the single await on the network call; validation is
/// synchronous and never leaves `Editing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Editing,
    Submitting,
}

impl SubmitPhase {
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmitPhase::Submitting)
    }
}

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_active_field_mut(&mut self) -> &mut FormField;
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// Enum representing all possible form states
#[derive(Debug, Clone, Default)]
pub enum FormState {
    #[default]
    None,
    Enroll(EnrollmentForm),
    Login(LoginForm),
    Register(RegistrationForm),
}

impl FormState {
    pub fn next_field(&mut self) {
        match self {
            FormState::None => {}
            FormState::Enroll(f) => f.next_field(),
            FormState::Login(f) => f.next_field(),
            FormState::Register(f) => f.next_field(),
        }
    }

    pub fn prev_field(&mut self) {
        match self {
            FormState::None => {}
            FormState::Enroll(f) => f.prev_field(),
            FormState::Login(f) => f.prev_field(),
            FormState::Register(f) => f.prev_field(),
        }
    }

    pub fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        match self {
            FormState::None => None,
            FormState::Enroll(f) => Some(f.get_active_field_mut()),
            FormState::Login(f) => Some(f.get_active_field_mut()),
            FormState::Register(f) => Some(f.get_active_field_mut()),
        }
    }
}

// Enrollment Form
#[derive(Debug, Clone)]
pub struct EnrollmentForm {
    pub name: FormField,
    pub email: FormField,
    pub country_code: FormField,
    pub phone: FormField,
    pub course: FormField,
    pub institution: FormField,
    pub consent: FormField,
    pub active_field_index: usize,
    pub phase: SubmitPhase,
}

impl EnrollmentForm {
    pub fn new() -> Self {
        Self {
            name: FormField::text("name", "Name"),
            email: FormField::text("email", "Email"),
            country_code: FormField::select_with_default(
                "countryCode",
                "Country Code",
                COUNTRY_CODES,
                0,
            ),
            phone: FormField::text("phone", "Mobile Number"),
            course: FormField::select("course", "Category", COURSE_OPTIONS),
            institution: FormField::select("institution", "Institution", INSTITUTION_OPTIONS),
            consent: FormField::checkbox("consent", "Consent to be contacted"),
            active_field_index: 0,
            phase: SubmitPhase::default(),
        }
    }

    pub fn to_request(&self) -> EnrollmentRequest {
        EnrollmentRequest {
            name: self.name.as_text().to_string(),
            email: self.email.as_text().to_string(),
            phone: self.phone.as_text().to_string(),
            country_code: self.country_code.as_text().to_string(),
            course: self.course.as_text().to_string(),
            institution: self.institution.as_text().to_string(),
            consent: self.consent.is_checked(),
        }
    }
}

impl Default for EnrollmentForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for EnrollmentForm {
    fn field_count(&self) -> usize {
        7
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(6);
    }
    fn get_active_field_mut(&mut self) -> &mut FormField {
        match self.active_field_index {
            0 => &mut self.name,
            1 => &mut self.email,
            2 => &mut self.country_code,
            3 => &mut self.phone,
            4 => &mut self.course,
            5 => &mut self.institution,
            _ => &mut self.consent,
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.name),
            1 => Some(&self.email),
            2 => Some(&self.country_code),
            3 => Some(&self.phone),
            4 => Some(&self.course),
            5 => Some(&self.institution),
            6 => Some(&self.consent),
            _ => None,
        }
    }
}

// Login Form
#[derive(Debug, Clone)]
pub struct LoginForm {
    pub email: FormField,
    pub password: FormField,
    pub active_field_index: usize,
    pub phase: SubmitPhase,
}

impl LoginForm {
    pub fn new() -> Self {
        Self {
            email: FormField::text("email", "Email Address"),
            password: FormField::secret("password", "Password"),
            active_field_index: 0,
            phase: SubmitPhase::default(),
        }
    }

    pub fn to_request(&self) -> LoginRequest {
        LoginRequest {
            email: self.email.as_text().to_string(),
            password: self.password.as_text().to_string(),
        }
    }
}

impl Default for LoginForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for LoginForm {
    fn field_count(&self) -> usize {
        2
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(1);
    }
    fn get_active_field_mut(&mut self) -> &mut FormField {
        match self.active_field_index {
            0 => &mut self.email,
            _ => &mut self.password,
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.email),
            1 => Some(&self.password),
            _ => None,
        }
    }
}

// Registration Form
#[derive(Debug, Clone)]
pub struct RegistrationForm {
    pub full_name: FormField,
    pub date_of_birth: FormField,
    pub gender: FormField,
    pub email: FormField,
    pub mobile_number: FormField,
    pub password: FormField,
    pub confirm_password: FormField,
    /// Render-only reveal toggle for the password field
    pub show_password: bool,
    pub active_field_index: usize,
    pub phase: SubmitPhase,
}

impl RegistrationForm {
    pub fn new() -> Self {
        Self {
            full_name: FormField::text("fullName", "Full Name"),
            date_of_birth: FormField::text("dateOfBirth", "Date of Birth (YYYY-MM-DD)"),
            gender: FormField::select("gender", "Gender", GENDER_OPTIONS),
            email: FormField::text("email", "Email Address"),
            mobile_number: FormField::text("mobileNumber", "Mobile Number"),
            password: FormField::secret("password", "Password"),
            confirm_password: FormField::secret("confirmPassword", "Confirm Password"),
            show_password: false,
            active_field_index: 0,
            phase: SubmitPhase::default(),
        }
    }

    /// Reset every field to its default value (after a confirmed success)
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn toggle_show_password(&mut self) {
        self.show_password = !self.show_password;
    }

    pub fn to_request(&self) -> RegistrationRequest {
        RegistrationRequest {
            full_name: self.full_name.as_text().to_string(),
            date_of_birth: self.date_of_birth.as_text().to_string(),
            gender: self.gender.as_text().to_string(),
            email: self.email.as_text().to_string(),
            mobile_number: self.mobile_number.as_text().to_string(),
            password: self.password.as_text().to_string(),
            confirm_password: self.confirm_password.as_text().to_string(),
        }
    }
}

impl Default for RegistrationForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for RegistrationForm {
    fn field_count(&self) -> usize {
        7
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(6);
    }
    fn get_active_field_mut(&mut self) -> &mut FormField {
        match self.active_field_index {
            0 => &mut self.full_name,
            1 => &mut self.date_of_birth,
            2 => &mut self.gender,
            3 => &mut self.email,
            4 => &mut self.mobile_number,
            5 => &mut self.password,
            _ => &mut self.confirm_password,
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.full_name),
            1 => Some(&self.date_of_birth),
            2 => Some(&self.gender),
            3 => Some(&self.email),
            4 => Some(&self.mobile_number),
            5 => Some(&self.password),
            6 => Some(&self.confirm_password),
            _ => None,
        }
    }
}
