//! postinput - auto-growing post textarea
//!
//! Keeps the post field tall enough to show everything typed into it. The
//! resize handler and a headless textarea live in `postinput_ui`; this crate
//! binds them to the page, loads configuration and carries the bits of the
//! submit form around the field.

pub mod config;
pub mod constants;
pub mod error;
pub mod prompt;
pub mod session;
pub mod submission;

pub use config::{ConfigError, LogLevel, ResizeConfig};
pub use error::DomError;
pub use prompt::{placeholder_for, submit_prompt};
pub use session::{Edit, Outcome, Session};
pub use submission::{post_payload, SubmitError};

// WASM entry point
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
pub use wasm::*;
