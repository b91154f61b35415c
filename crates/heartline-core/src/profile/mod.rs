//! Profile domain module.
//!
//! # Module Structure
//!
//! - `model`: `Profile` and the records embedded in it
//! - `modal`: Photo carousel and detail overlay state for one profile
//! - `repository`: `CandidateSource`, the backend that hands out profiles

mod modal;
mod model;
mod repository;

pub use modal::ProfileModal;
pub use model::{GrowthGoal, IcebreakerAnswer, Profile};
pub use repository::CandidateSource;
