//! Shared authentication context
//!
//! Explicit context object owned by `AppState`: starts anonymous, the login
//! flow stores the signed-in user, logout clears it.

use crate::api::AuthUser;

#[derive(Debug, Clone, Default)]
pub struct AuthSession {
    user: Option<AuthUser>,
}

impl AuthSession {
    /// Store the signed-in user
    pub fn login(&mut self, user: AuthUser) {
        self.user = Some(user);
    }

    /// Clear the session back to anonymous
    pub fn logout(&mut self) {
        self.user = None;
    }

    pub fn current_user(&self) -> Option<&AuthUser> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_user() -> AuthUser {
        AuthUser {
            id: "u1".to_string(),
            full_name: "Asha Rao".to_string(),
            email: "asha@example.com".to_string(),
        }
    }

    #[test]
    fn test_starts_anonymous() {
        let session = AuthSession::default();
        assert!(!session.is_authenticated());
        assert!(session.current_user().is_none());
    }

    #[test]
    fn test_login_stores_user() {
        let mut session = AuthSession::default();
        session.login(test_user());
        assert!(session.is_authenticated());
        assert_eq!(session.current_user().unwrap().id, "u1");
    }

    #[test]
    fn test_logout_clears_user() {
        let mut session = AuthSession::default();
        session.login(test_user());
        session.logout();
        assert!(!session.is_authenticated());
    }
}
