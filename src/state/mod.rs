//! Application state module

mod app_state;
mod auth;
mod forms;

pub use app_state::*;
pub use auth::*;
pub use forms::*;
