//! chatdesk - settings and debug log viewer for an AI chat-completion client
//!
//! ## Pieces
//!
//! - **Debug view**: tracing events are formatted into text lines, broadcast
//!   to subscribers and shown in a log buffer with toggle-able filter words
//!   and a quick text filter.
//! - **Settings**: the chosen client type, model and API version are kept in
//!   `config/chat_completion_settings.json`; API keys and the Azure endpoint
//!   live in a process-wide credential store seeded from the environment.

pub mod client;
pub mod config;
pub mod domain;
pub mod gui;
pub mod logs;

pub use domain::*;
