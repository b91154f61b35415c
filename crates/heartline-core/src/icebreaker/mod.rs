//! Icebreaker question game.

mod game;
mod questions;

pub use game::{GamePhase, IcebreakerGame};
pub use questions::{QUESTIONS, Question};
