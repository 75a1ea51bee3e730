//! Reusable UI components

pub mod chat_message;
pub mod header;
pub mod loading;

pub use chat_message::ChatMessage;
pub use header::Header;
pub use loading::{ErrorAlert, LoadingSpinner};
