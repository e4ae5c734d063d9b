//! Hex color guessing game
//!
//! A random `RRGGBB` target is shown as a swatch; the player guesses its six
//! hex digits and learns which positions were right.

use rand::Rng;

use crate::sim::{SimRng, seeded};

/// Hex digits in a color code
pub const CODE_LEN: usize = 6;

const DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Result of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Exact match; a new target was drawn
    Solved,
    /// Per-position matches
    Partial([bool; CODE_LEN]),
}

#[derive(Debug, Clone)]
pub struct ColorMind {
    target: [u8; CODE_LEN],
    last: Option<String>,
    matched: [bool; CODE_LEN],
    rng: SimRng,
}

impl ColorMind {
    pub fn new(seed: u64) -> Self {
        let mut rng = seeded(seed);
        let target = random_code(&mut rng);
        Self {
            target,
            last: None,
            matched: [false; CODE_LEN],
            rng,
        }
    }

    /// Target as six upper-case hex digits
    pub fn target(&self) -> &str {
        // DIGITS is ASCII
        std::str::from_utf8(&self.target).unwrap_or_default()
    }

    /// Target as a CSS color
    pub fn css(&self) -> String {
        format!("#{}", self.target())
    }

    /// Previous wrong guess, shown as a second swatch
    pub fn last(&self) -> Option<&str> {
        self.last.as_deref()
    }

    pub fn matched(&self) -> [bool; CODE_LEN] {
        self.matched
    }

    /// Draw a new target and forget previous guesses
    pub fn reroll(&mut self) {
        self.target = random_code(&mut self.rng);
        self.last = None;
        self.matched = [false; CODE_LEN];
        log::debug!("Color target rerolled");
    }

    /// Compare a guess digit by digit, case-insensitively.
    ///
    /// Missing or non-hex positions never match.
    pub fn guess(&mut self, guess: &str) -> GuessOutcome {
        let guess = guess.trim().to_ascii_uppercase();
        let bytes = guess.as_bytes();
        let mut matched = [false; CODE_LEN];
        for (i, slot) in matched.iter_mut().enumerate() {
            *slot = bytes.get(i) == Some(&self.target[i]);
        }

        if bytes.len() == CODE_LEN && matched.iter().all(|m| *m) {
            self.reroll();
            return GuessOutcome::Solved;
        }

        self.last = Some(guess);
        self.matched = matched;
        GuessOutcome::Partial(matched)
    }
}

fn random_code<R: Rng>(rng: &mut R) -> [u8; CODE_LEN] {
    std::array::from_fn(|_| DIGITS[rng.random_range(0..DIGITS.len())])
}
