//! Question/answer loop with random selection without replacement.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use super::questions::{QUESTIONS, Question};
use crate::error::{HeartlineError, Result};
use crate::profile::IcebreakerAnswer;

/// Where the game currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    NotStarted,
    Asking(Question),
    /// Every question has been answered or skipped.
    Completed,
}

/// One icebreaker session.
///
/// A question is never offered twice in a session: answered and skipped
/// questions are both retired. After all ten have been retired the game is
/// `Completed` until it is reset or restarted.
#[derive(Debug)]
pub struct IcebreakerGame {
    phase: GamePhase,
    answered: Vec<IcebreakerAnswer>,
    retired: Vec<u32>,
    rng: StdRng,
}

impl Default for IcebreakerGame {
    fn default() -> Self {
        Self::new()
    }
}

impl IcebreakerGame {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Game with a caller-supplied generator, for reproducible sessions.
    pub fn with_rng(rng: StdRng) -> Self {
        Self {
            phase: GamePhase::NotStarted,
            answered: Vec::new(),
            retired: Vec::new(),
            rng,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_started(&self) -> bool {
        self.phase != GamePhase::NotStarted
    }

    pub fn is_completed(&self) -> bool {
        self.phase == GamePhase::Completed
    }

    pub fn current_question(&self) -> Option<&Question> {
        match &self.phase {
            GamePhase::Asking(question) => Some(question),
            _ => None,
        }
    }

    /// Answers given this session, in order.
    pub fn answered(&self) -> &[IcebreakerAnswer] {
        &self.answered
    }

    /// Questions not yet answered or skipped.
    pub fn remaining(&self) -> usize {
        QUESTIONS.len() - self.retired.len()
    }

    /// Starts a fresh session and draws the first question.
    pub fn start(&mut self) -> GamePhase {
        self.answered.clear();
        self.retired.clear();
        self.draw_next()
    }

    /// Records an answer to the current question and draws the next one.
    ///
    /// Does nothing when no question is showing.
    pub fn submit_answer(&mut self, answer: &str) -> Result<GamePhase> {
        let GamePhase::Asking(question) = self.phase else {
            return Ok(self.phase);
        };
        if answer.is_empty() {
            return Err(HeartlineError::validation("answer", "an answer is required"));
        }
        self.answered.push(IcebreakerAnswer::new(question.text, answer));
        self.retired.push(question.id);
        Ok(self.draw_next())
    }

    /// Moves past the current question without recording an answer.
    pub fn skip(&mut self) -> GamePhase {
        if let GamePhase::Asking(question) = self.phase {
            self.retired.push(question.id);
            return self.draw_next();
        }
        self.phase
    }

    /// Back to the start screen with nothing recorded.
    pub fn reset(&mut self) {
        self.phase = GamePhase::NotStarted;
        self.answered.clear();
        self.retired.clear();
    }

    fn draw_next(&mut self) -> GamePhase {
        let open: Vec<&Question> = QUESTIONS
            .iter()
            .filter(|q| !self.retired.contains(&q.id))
            .filter(|q| !self.answered.iter().any(|a| a.question == q.text))
            .collect();

        self.phase = match open.choose(&mut self.rng) {
            Some(question) => GamePhase::Asking(**question),
            None => GamePhase::Completed,
        };
        tracing::debug!(phase = ?self.phase, remaining = open.len(), "Icebreaker question drawn");
        self.phase
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn seeded(seed: u64) -> IcebreakerGame {
        IcebreakerGame::with_rng(StdRng::seed_from_u64(seed))
    }

    #[test]
    fn test_not_started_by_default() {
        let game = seeded(1);
        assert_eq!(game.phase(), GamePhase::NotStarted);
        assert!(game.current_question().is_none());
    }

    #[test]
    fn test_answers_never_repeat_and_game_completes_after_ten() {
        for seed in 0..20 {
            let mut game = seeded(seed);
            game.start();
            let mut asked = HashSet::new();
            let mut steps = 0;
            while let Some(question) = game.current_question().copied() {
                assert!(asked.insert(question.id), "question {} repeated", question.id);
                assert!(!game.answered().iter().any(|a| a.question == question.text));
                game.submit_answer("because").unwrap();
                steps += 1;
            }
            assert_eq!(steps, 10);
            assert!(game.is_completed());
            assert_eq!(game.answered().len(), 10);
        }
    }

    #[test]
    fn test_mixed_skips_and_answers_complete_after_ten() {
        let mut game = seeded(42);
        game.start();
        let mut asked = HashSet::new();
        let mut step = 0;
        while let Some(question) = game.current_question().copied() {
            assert!(asked.insert(question.id));
            if step % 3 == 0 {
                game.skip();
            } else {
                game.submit_answer("sure").unwrap();
            }
            step += 1;
        }
        assert_eq!(step, 10);
        assert_eq!(game.remaining(), 0);
        assert_eq!(game.answered().len(), 6);
    }

    #[test]
    fn test_empty_answer_rejected() {
        let mut game = seeded(3);
        game.start();
        let before = game.current_question().copied();
        assert!(game.submit_answer("").unwrap_err().is_validation());
        assert_eq!(game.current_question().copied(), before);
        assert!(game.answered().is_empty());
    }

    #[test]
    fn test_answer_before_start_is_ignored() {
        let mut game = seeded(5);
        assert_eq!(game.submit_answer("hi").unwrap(), GamePhase::NotStarted);
        assert_eq!(game.skip(), GamePhase::NotStarted);
    }

    #[test]
    fn test_reset_and_restart_clear_history() {
        let mut game = seeded(7);
        game.start();
        game.submit_answer("one").unwrap();
        game.reset();
        assert_eq!(game.phase(), GamePhase::NotStarted);
        assert!(game.answered().is_empty());
        assert_eq!(game.remaining(), 10);

        game.start();
        game.submit_answer("two").unwrap();
        game.start();
        assert!(game.answered().is_empty());
        assert!(game.current_question().is_some());
    }

    #[test]
    fn test_same_seed_same_order() {
        let order = |seed| {
            let mut game = seeded(seed);
            game.start();
            let mut ids = Vec::new();
            while let Some(q) = game.current_question().copied() {
                ids.push(q.id);
                game.skip();
            }
            ids
        };
        assert_eq!(order(11), order(11));
    }
}
