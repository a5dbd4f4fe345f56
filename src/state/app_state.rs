//! Application state definitions

use super::auth::AuthSession;
use super::forms::{EnrollmentForm, FormState, LoginForm, RegistrationForm};
use std::time::{Duration, Instant};

/// How long a toast stays on screen
const TOAST_TTL: Duration = Duration::from_secs(4);

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Home,
    Enroll,
    Login,
    Register,
    Dashboard,
}

/// Severity of a toast notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

/// A transient user-facing notification
#[derive(Debug, Clone)]
pub struct Toast {
    pub level: ToastLevel,
    pub message: String,
    created: Instant,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: ToastLevel::Success,
            message: message.into(),
            created: Instant::now(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: ToastLevel::Error,
            message: message.into(),
            created: Instant::now(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.created.elapsed() >= TOAST_TTL
    }
}

/// Top-level mutable state for the TUI
#[derive(Debug, Default)]
pub struct AppState {
    pub current_view: View,
    /// Form mounted for the current view, if the view is a form
    pub form: FormState,
    pub auth: AuthSession,
    pub toast: Option<Toast>,
    /// Selected entry on the home menu
    pub home_selected: usize,
}

impl AppState {
    /// Switch views, mounting the target view's form and discarding the
    /// previous one.
    pub fn open_view(&mut self, view: View) {
        self.current_view = view;
        self.form = match view {
            View::Enroll => FormState::Enroll(EnrollmentForm::new()),
            View::Login => FormState::Login(LoginForm::new()),
            View::Register => FormState::Register(RegistrationForm::new()),
            View::Home | View::Dashboard => FormState::None,
        };
    }

    pub fn show_success(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::success(message));
    }

    pub fn show_error(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::error(message));
    }

    /// Drop the toast once its TTL has elapsed
    pub fn expire_toast(&mut self) {
        if self.toast.as_ref().is_some_and(Toast::is_expired) {
            self.toast = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        let state = AppState::default();
        assert_eq!(state.current_view, View::Home);
        assert!(matches!(state.form, FormState::None));
        assert!(state.toast.is_none());
        assert!(!state.auth.is_authenticated());
    }

    #[test]
    fn test_open_view_mounts_matching_form() {
        let mut state = AppState::default();

        state.open_view(View::Enroll);
        assert!(matches!(state.form, FormState::Enroll(_)));

        state.open_view(View::Login);
        assert!(matches!(state.form, FormState::Login(_)));

        state.open_view(View::Register);
        assert!(matches!(state.form, FormState::Register(_)));

        state.open_view(View::Dashboard);
        assert!(matches!(state.form, FormState::None));
    }

    #[test]
    fn test_open_view_discards_previous_form_state() {
        let mut state = AppState::default();
        state.open_view(View::Login);
        if let FormState::Login(form) = &mut state.form {
            form.email.set_text("a@b.com".to_string());
        }

        // Leaving and returning remounts a fresh form
        state.open_view(View::Home);
        state.open_view(View::Login);
        if let FormState::Login(form) = &state.form {
            assert_eq!(form.email.as_text(), "");
        } else {
            panic!("expected login form");
        }
    }

    #[test]
    fn test_toasts_replace_each_other() {
        let mut state = AppState::default();
        state.show_error("first");
        state.show_success("second");
        let toast = state.toast.as_ref().unwrap();
        assert_eq!(toast.level, ToastLevel::Success);
        assert_eq!(toast.message, "second");
    }

    #[test]
    fn test_fresh_toast_not_expired() {
        let toast = Toast::error("boom");
        assert!(!toast.is_expired());
    }

    #[test]
    fn test_expire_toast_keeps_fresh_toast() {
        let mut state = AppState::default();
        state.show_success("ok");
        state.expire_toast();
        assert!(state.toast.is_some());
    }
}
