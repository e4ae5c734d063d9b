//! Trivia quiz grading
//!
//! Questions come from a random-clue endpoint as JSON. Answers are graded
//! with a fuzzy string comparison since the expected answers are scraped and
//! often carry markup or small spelling variations.

mod similarity;

pub use similarity::{compare_two_strings, strip_tags};

use serde::Deserialize;

use crate::error::QuizError;

/// Points awarded when a question has no value
pub const DEFAULT_POINTS: u32 = 100;

/// Minimum similarity for an answer to be accepted (exclusive)
pub const ACCEPT_THRESHOLD: f64 = 0.75;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Category {
    pub title: String,
}

/// A trivia clue
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Question {
    pub question: String,
    pub answer: String,
    #[serde(default)]
    pub value: Option<u32>,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub invalid_count: Option<u32>,
}

impl Question {
    /// Parse an endpoint payload, rejecting clues flagged invalid
    pub fn from_json(payload: &str) -> Result<Self, QuizError> {
        let question: Question = serde_json::from_str(payload)?;
        match question.invalid_count {
            Some(n) if n > 0 => Err(QuizError::Invalid(n)),
            _ => Ok(question),
        }
    }

    pub fn points(&self) -> u32 {
        self.value.unwrap_or(DEFAULT_POINTS)
    }

    pub fn category_title(&self) -> &str {
        self.category.as_ref().map_or("", |c| c.title.as_str())
    }

    /// Whether `guess` is close enough to the expected answer
    pub fn accepts(&self, guess: &str) -> bool {
        let expected = strip_tags(&self.answer.to_uppercase());
        compare_two_strings(&expected, &guess.to_uppercase()) > ACCEPT_THRESHOLD
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AnswerStatus {
    #[default]
    Unanswered,
    Wrong,
    Correct,
    /// The answer was given away; a correct answer now scores nothing
    Revealed,
}

/// Result of submitting an answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Correct { awarded: u32 },
    Wrong,
    NoQuestion,
}

/// Score keeping across questions
#[derive(Debug, Clone, Default)]
pub struct QuizSession {
    score: u32,
    status: AnswerStatus,
    question: Option<Question>,
}

impl QuizSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a new question
    pub fn load(&mut self, question: Question) {
        log::debug!("Quiz question loaded: {}", question.category_title());
        self.question = Some(question);
        self.status = AnswerStatus::Unanswered;
    }

    /// Grade an answer against the current question.
    ///
    /// A correct answer consumes the question; the caller fetches the next.
    pub fn answer(&mut self, guess: &str) -> Verdict {
        let Some(question) = self.question.as_ref() else {
            return Verdict::NoQuestion;
        };

        if !question.accepts(guess) {
            self.status = AnswerStatus::Wrong;
            return Verdict::Wrong;
        }

        let awarded = if self.status == AnswerStatus::Revealed {
            0
        } else {
            question.points()
        };
        self.score = self.score.saturating_add(awarded);
        self.status = AnswerStatus::Correct;
        self.question = None;
        Verdict::Correct { awarded }
    }

    /// Give away the answer. Later correct answers on this question score 0.
    pub fn reveal(&mut self) -> Option<&str> {
        let question = self.question.as_ref()?;
        self.status = AnswerStatus::Revealed;
        Some(question.answer.as_str())
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn status(&self) -> AnswerStatus {
        self.status
    }

    pub fn question(&self) -> Option<&Question> {
        self.question.as_ref()
    }

    pub fn needs_question(&self) -> bool {
        self.question.is_none()
    }
}
