//! Core domain types for chatdesk

mod client_type;
mod log_level;

pub use client_type::{ClientType, CredentialField};
pub use log_level::LogLevel;
