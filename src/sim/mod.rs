//! Discrete step simulation module
//!
//! All gameplay logic lives here. This module must be pure:
//! - One call = one tick, no clocks
//! - RNG is passed in by the owner, never global
//! - No rendering or platform dependencies

pub mod automaton;
pub mod collision;
pub mod flappy;
pub mod pong;
pub mod rng;
pub mod snake;
pub mod state;

pub use automaton::Grid;
pub use collision::{gap_contains, spans_overlap, wrap_torus};
pub use flappy::{Block, FlappyInput, FlappyState};
pub use pong::{Ball, PongInput, PongState, Side};
pub use rng::{SimRng, random_aligned, seeded};
pub use snake::{Direction, SnakeInput, SnakeState};
pub use state::{SimPhase, StepOutcome};
