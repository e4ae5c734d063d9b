//! Arcade Sim - discrete step simulations for a portfolio arcade
//!
//! Core modules:
//! - `sim`: Pure per-tick steppers (cellular automaton, snake, flappy, pong)
//! - `driver`: Frame-capped, visibility-gated driver loop model
//! - `arcade`: Per-instance game controllers wiring state, RNG and input
//! - `renderer`: Render adapter contract (100x100 logical surface)
//! - `quiz`: Trivia question model and fuzzy answer grading
//! - `colormind`: Hex color guessing game
//! - `persistence`: Local key-value storage for settings and best scores

pub mod arcade;
pub mod colormind;
pub mod driver;
pub mod error;
pub mod highscores;
pub mod input;
pub mod persistence;
pub mod platform;
pub mod quiz;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use arcade::{FlappyGame, LifeGame, PongGame, SnakeGame};
pub use driver::{Runner, Simulation};
pub use error::{PersistError, QuizError};
pub use highscores::BestScores;
pub use settings::Settings;

/// Simulation configuration constants
pub mod consts {
    /// Logical drawing surface edge (units), shared by all games
    pub const SURFACE_SIZE: i32 = 100;
    /// Same as `SURFACE_SIZE`, for float physics
    pub const SURFACE_SIZE_F: f32 = SURFACE_SIZE as f32;

    /// Frame cap for the mini-games and the automaton
    pub const TARGET_FPS: u32 = 12;

    /// Snake cell size; every snake/food coordinate is a multiple of this
    pub const BLOCK_SIZE: i32 = 4;
    /// Snake start cell
    pub const SNAKE_START: (i32, i32) = (48, 48);

    /// Flappy downward acceleration per tick
    pub const GRAVITY: f32 = 0.89;
    /// Upward velocity change per flap
    pub const FLAP_IMPULSE: f32 = 4.0;
    /// Flaps are ignored unless velocity is above this
    pub const FLAP_VELOCITY_FLOOR: f32 = -4.0;
    /// Leftward block scroll per tick
    pub const BLOCK_SPEED: f32 = 3.0;
    /// Player square edge
    pub const PLAYER_SIZE: f32 = 8.0;
    /// Player's fixed horizontal position
    pub const PLAYER_X: f32 = 25.0;
    pub const PLAYER_START_Y: f32 = 45.0;
    pub const PLAYER_START_VELOCITY: f32 = -2.0;
    /// Wall-clock block spawn period
    pub const SPAWN_INTERVAL_MS: f64 = 3000.0;

    /// Retry cap for rejection sampling of random positions
    pub const MAX_SAMPLE_RETRIES: u32 = 64;

    // === Pong ===
    /// Pong runs at display rate rather than the mini-game cap
    pub const PONG_FPS: u32 = 60;
    /// Walls the ball bounces off
    pub const COURT_TOP: f32 = 5.0;
    pub const COURT_BOTTOM: f32 = 95.0;
    /// Past these the ball is out
    pub const COURT_LEFT: f32 = 2.0;
    pub const COURT_RIGHT: f32 = 98.0;
    /// Left edge of each paddle
    pub const LEFT_PADDLE_X: f32 = 6.0;
    pub const RIGHT_PADDLE_X: f32 = 91.0;
    pub const PADDLE_WIDTH: f32 = 3.0;
    /// Half the paddle height
    pub const PADDLE_HALF: f32 = 10.0;
    /// Paddle travel per tick towards the pointer
    pub const PADDLE_SPEED: f32 = 2.0;
    pub const BALL_SIZE: f32 = 2.0;
    pub const BALL_SERVE_SPEED: f32 = 1.0;
    /// Speed gain per paddle hit
    pub const BALL_SPEEDUP: f32 = 1.1;
    pub const BALL_MAX_SPEED: f32 = 3.0;

    /// Default automaton grid (each cell drawn as a 2x2 square)
    pub const LIFE_WIDTH: usize = 50;
    pub const LIFE_HEIGHT: usize = 50;
    /// Fraction of cells alive after a reseed
    pub const LIFE_DENSITY: f32 = 0.3;
}
