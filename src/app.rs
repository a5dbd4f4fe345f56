//! Application state and core logic

use crate::api::{LoginResponse, PortalApi, PortalClient};
use crate::config::PortalConfig;
use crate::state::{AppState, FieldValue, FormState, SubmitPhase, View};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Entries on the home menu, in display order
pub const HOME_MENU: &[(&str, View)] = &[
    ("Enroll in a course", View::Enroll),
    ("Student Login", View::Login),
    ("Student Registration", View::Register),
];

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Backend client for REST communication
    api: Box<dyn PortalApi>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance backed by the real client
    pub fn new() -> Self {
        let config = PortalConfig::load().unwrap_or_default();
        Self::with_api(Box::new(PortalClient::new(config.api_base_url)))
    }

    /// Create an App with a specific backend client
    pub fn with_api(api: Box<dyn PortalApi>) -> Self {
        Self {
            state: AppState::default(),
            api,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Per-frame housekeeping
    pub fn tick(&mut self) {
        self.state.expire_toast();
    }

    fn navigate(&mut self, view: View) {
        self.state.open_view(view);
    }

    /// Handle a key event for the current view
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        match self.state.current_view {
            View::Home => self.handle_home_key(key),
            View::Enroll => self.handle_enroll_key(key).await,
            View::Login => self.handle_login_key(key).await,
            View::Register => self.handle_register_key(key).await,
            View::Dashboard => self.handle_dashboard_key(key),
        }
        Ok(())
    }

    /// Handle keys on the home menu
    fn handle_home_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                if self.state.home_selected == 0 {
                    self.state.home_selected = HOME_MENU.len() - 1;
                } else {
                    self.state.home_selected -= 1;
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.state.home_selected = (self.state.home_selected + 1) % HOME_MENU.len();
            }
            KeyCode::Enter => {
                let (_, view) = HOME_MENU[self.state.home_selected.min(HOME_MENU.len() - 1)];
                self.navigate(view);
            }
            KeyCode::Char('q') | KeyCode::Esc => {
                self.quit = true;
            }
            _ => {}
        }
    }

    /// Handle keys on the dashboard
    fn handle_dashboard_key(&mut self, key: KeyEvent) {
        match key.code {
            // Logout tears the session down to anonymous
            KeyCode::Char('l') => {
                self.state.auth.logout();
                self.navigate(View::Home);
            }
            KeyCode::Esc => self.navigate(View::Home),
            _ => {}
        }
    }

    /// Handle keys in the Enrollment form
    async fn handle_enroll_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.submit_enrollment().await,
            KeyCode::Esc => self.navigate(View::Home),
            _ => self.edit_active_field(key),
        }
    }

    /// Handle keys in the Login form
    async fn handle_login_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.submit_login().await,
            KeyCode::Esc => self.navigate(View::Home),
            _ => self.edit_active_field(key),
        }
    }

    /// Handle keys in the Registration form
    async fn handle_register_key(&mut self, key: KeyEvent) {
        match key.code {
            // Show/hide the password (rendering only)
            KeyCode::Char('p') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                if let FormState::Register(form) = &mut self.state.form {
                    form.toggle_show_password();
                }
            }
            KeyCode::Enter => self.submit_registration().await,
            KeyCode::Esc => self.navigate(View::Home),
            _ => self.edit_active_field(key),
        }
    }

    /// Route an editing key to the active field of the mounted form
    fn edit_active_field(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Tab | KeyCode::Down => self.state.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.form.prev_field(),
            KeyCode::Left => {
                if let Some(field) = self.state.form.get_active_field_mut() {
                    field.select_prev();
                }
            }
            KeyCode::Right => {
                if let Some(field) = self.state.form.get_active_field_mut() {
                    field.select_next();
                }
            }
            KeyCode::Backspace => {
                if let Some(field) = self.state.form.get_active_field_mut() {
                    field.pop_char();
                }
            }
            KeyCode::Char(' ') => {
                if let Some(field) = self.state.form.get_active_field_mut() {
                    if matches!(field.value, FieldValue::Checkbox(_)) {
                        field.toggle();
                    } else {
                        field.push_char(' ');
                    }
                }
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                if let Some(field) = self.state.form.get_active_field_mut() {
                    field.push_char(c);
                }
            }
            _ => {}
        }
    }

    /// Submit the enrollment form.
    ///
    /// On success the entered values are kept; the confirmation toast is the
    /// only visible effect. Failures surface a generic notice and log the
    /// underlying error.
    async fn submit_enrollment(&mut self) {
        {
            let FormState::Enroll(form) = &self.state.form else {
                return;
            };
            if let Err(rule) = form.validate() {
                let message = rule.to_string();
                self.state.show_error(message);
                return;
            }
        }

        let request = match &mut self.state.form {
            FormState::Enroll(form) => {
                form.phase = SubmitPhase::Submitting;
                form.to_request()
            }
            _ => return,
        };

        let result = self.api.submit_enrollment(&request).await;

        if let FormState::Enroll(form) = &mut self.state.form {
            form.phase = SubmitPhase::Editing;
        }

        match result {
            Ok(()) => {
                tracing::info!(email = %request.email, course = %request.course, "enrollment submitted");
                self.state.show_success("Form submitted successfully!");
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to submit enrollment");
                self.state.show_error("Failed to submit the form.");
            }
        }
    }

    /// Submit the login form and, on success, establish the session
    async fn submit_login(&mut self) {
        {
            let FormState::Login(form) = &self.state.form else {
                return;
            };
            // The trigger is disabled while a request is in flight
            if form.phase.is_submitting() {
                return;
            }
            if let Err(rule) = form.validate() {
                let message = rule.to_string();
                self.state.show_error(message);
                return;
            }
        }

        let request = match &mut self.state.form {
            FormState::Login(form) => {
                form.phase = SubmitPhase::Submitting;
                form.to_request()
            }
            _ => return,
        };

        let result = self.api.login(&request).await;

        if let FormState::Login(form) = &mut self.state.form {
            form.phase = SubmitPhase::Editing;
        }

        match result {
            Ok(LoginResponse {
                success: true,
                message,
                user: Some(user),
            }) => {
                let message = if message.is_empty() {
                    "Login successful!".to_string()
                } else {
                    message
                };
                self.state.show_success(message);
                self.state.auth.login(user);
                self.navigate(View::Dashboard);
            }
            // success=false (or a success without a user) has no handled
            // path; the form stays as entered
            Ok(_) => {}
            Err(err) => {
                let message = err
                    .server_message()
                    .unwrap_or("An unexpected error occurred.")
                    .to_string();
                self.state.show_error(message);
            }
        }
    }

    /// Submit the registration form; a confirmed success resets the form
    /// and moves to the login view
    async fn submit_registration(&mut self) {
        {
            let FormState::Register(form) = &self.state.form else {
                return;
            };
            if let Err(rule) = form.validate() {
                let message = rule.to_string();
                self.state.show_error(message);
                return;
            }
        }

        let request = match &mut self.state.form {
            FormState::Register(form) => {
                form.phase = SubmitPhase::Submitting;
                form.to_request()
            }
            _ => return,
        };

        let result = self.api.register(&request).await;

        if let FormState::Register(form) = &mut self.state.form {
            form.phase = SubmitPhase::Editing;
        }

        match result {
            Ok(response) => {
                let message = if response.message.is_empty() {
                    "Registration successful!".to_string()
                } else {
                    response.message
                };
                self.state.show_success(message);
                if let FormState::Register(form) = &mut self.state.form {
                    form.reset();
                }
                self.navigate(View::Login);
            }
            Err(err) => {
                let message = err
                    .server_message()
                    .unwrap_or("Something went wrong. Please try again.")
                    .to_string();
                self.state.show_error(message);
            }
        }
    }
}
