//! Domain layer for Heartline.
//!
//! Holds the records the client shows, the backend interfaces it talks to and
//! the view state that does not need a backend: the verification wizard, the
//! icebreaker game and the profile modal carousel.

pub mod config;
pub mod error;
pub mod icebreaker;
pub mod messaging;
pub mod page;
pub mod profile;
pub mod subscription;
pub mod suggestion;
pub mod user;
pub mod verification;

// Re-export common error type
pub use error::{HeartlineError, Result};
