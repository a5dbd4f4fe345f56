//! Backend API module for REST communication

mod client;
mod traits;
mod types;

pub use client::{ApiError, PortalClient};
pub use traits::PortalApi;
pub use types::{
    AuthUser, EnrollmentRequest, LoginRequest, LoginResponse, RegistrationRequest,
    RegistrationResponse,
};

#[cfg(test)]
pub use traits::MockPortalApi;
