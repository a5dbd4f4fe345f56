//! Trait abstraction for the backend client to enable mocking in tests

use super::client::ApiError;
use super::types::{
    EnrollmentRequest, LoginRequest, LoginResponse, RegistrationRequest, RegistrationResponse,
};
use async_trait::async_trait;

/// Trait for backend submission operations, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PortalApi: Send + Sync {
    /// Submit an enrollment interest form
    async fn submit_enrollment(&self, request: &EnrollmentRequest) -> Result<(), ApiError>;

    /// Authenticate a student
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError>;

    /// Register a new student account
    async fn register(
        &self,
        request: &RegistrationRequest,
    ) -> Result<RegistrationResponse, ApiError>;
}
