//! User domain module.
//!
//! ```ignore
//! use heartline_core::user::User;
//! ```

mod model;

pub use model::User;
