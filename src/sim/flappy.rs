//! Flappy stepper
//!
//! Physics and block scrolling advance once per tick. Block spawning is driven
//! by wall-clock time and lives in [`FlappyState::spawn_block`], called by the
//! driver's interval timer rather than by [`step`].

use rand::Rng;

use super::collision::{gap_contains, spans_overlap};
use super::state::StepOutcome;
use crate::consts::*;

/// An obstacle column with an open gap
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Block {
    /// Left edge
    pub x: f32,
    /// Vertical center of the gap
    pub center: f32,
    /// Gap height
    pub gap: f32,
    pub width: f32,
}

impl Block {
    /// New block at the right edge with randomized gap and width
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self {
            x: SURFACE_SIZE_F,
            center: rng.random_range(15..=85) as f32,
            gap: rng.random_range(25..=40) as f32,
            width: rng.random_range(10..=25) as f32,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn gap_top(&self) -> f32 {
        self.center - self.gap / 2.0
    }

    pub fn gap_bottom(&self) -> f32 {
        self.center + self.gap / 2.0
    }

    /// Whether the player square at height `y` crashes into this block
    pub fn hits_player(&self, y: f32) -> bool {
        spans_overlap(PLAYER_X, PLAYER_X + PLAYER_SIZE, self.x, self.right())
            && !gap_contains(y, y + PLAYER_SIZE, self.center, self.gap)
    }
}

/// Pending intent for the next tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlappyInput {
    /// At least one flap key was pressed since the last tick
    pub flap: bool,
}

/// Flappy world state
#[derive(Debug, Clone, PartialEq)]
pub struct FlappyState {
    /// Top edge of the player square
    pub y: f32,
    /// Vertical velocity, positive is downward
    pub velocity: f32,
    /// Obstacles, oldest (leftmost) first
    pub blocks: Vec<Block>,
    pub score: u32,
    /// Highest score reached before a reset
    pub best: u32,
}

impl Default for FlappyState {
    fn default() -> Self {
        Self {
            y: PLAYER_START_Y,
            velocity: PLAYER_START_VELOCITY,
            blocks: Vec::new(),
            score: 0,
            best: 0,
        }
    }
}

impl FlappyState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply the upward impulse unless already rising fast.
    ///
    /// Returns whether the flap took effect.
    pub fn flap(&mut self) -> bool {
        if self.velocity > FLAP_VELOCITY_FLOOR {
            self.velocity -= FLAP_IMPULSE;
            true
        } else {
            false
        }
    }

    /// Append a freshly randomized block at the right edge
    pub fn spawn_block<R: Rng>(&mut self, rng: &mut R) {
        let block = Block::random(rng);
        log::trace!("Spawned block at center {} gap {}", block.center, block.gap);
        self.blocks.push(block);
    }

    /// Player square is entirely off the surface
    pub fn out_of_bounds(&self) -> bool {
        self.y > SURFACE_SIZE_F || self.y + PLAYER_SIZE < 0.0
    }

    pub fn collides(&self) -> bool {
        self.blocks.iter().any(|b| b.hits_player(self.y))
    }

    /// Everything back to initial values except `best`
    pub fn reset(&mut self) {
        let best = self.best.max(self.score);
        *self = Self {
            best,
            ..Self::default()
        };
    }
}

/// Advance physics and scrolling by one tick
pub fn step(state: &mut FlappyState, input: &FlappyInput) -> StepOutcome {
    if input.flap {
        state.flap();
    }

    state.velocity += GRAVITY;
    state.y += state.velocity;

    for block in &mut state.blocks {
        block.x -= BLOCK_SPEED;
    }
    let before = state.blocks.len();
    state.blocks.retain(|b| b.right() >= 0.0);
    state.score += (before - state.blocks.len()) as u32;

    if state.out_of_bounds() || state.collides() {
        log::debug!("Flappy crashed at y={:.1} (score {})", state.y, state.score);
        state.reset();
        return StepOutcome::Terminal;
    }

    StepOutcome::Continue
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::rng::seeded;
    use proptest::prelude::*;

    fn gap_block(x: f32, width: f32) -> Block {
        Block {
            x,
            center: 50.0,
            gap: 30.0,
            width,
        }
    }

    #[test]
    fn test_collision_boundary() {
        let block = gap_block(20.0, 20.0);
        // Fully inside [35, 65]
        assert!(!block.hits_player(35.0));
        assert!(!block.hits_player(50.0));
        assert!(!block.hits_player(57.0));
        // Bottom edge reaches 66
        assert!(block.hits_player(58.0));
        // Top edge above 35
        assert!(block.hits_player(34.5));
    }

    #[test]
    fn test_no_collision_without_horizontal_overlap() {
        let block = gap_block(40.0, 10.0);
        assert!(!block.hits_player(0.0));
    }

    #[test]
    fn test_step_inside_gap_survives() {
        let mut state = FlappyState {
            y: 40.0,
            velocity: -GRAVITY,
            blocks: vec![gap_block(23.0, 20.0)],
            score: 3,
            best: 0,
        };
        let outcome = step(&mut state, &FlappyInput::default());
        assert_eq!(outcome, StepOutcome::Continue);
        assert_eq!(state.blocks[0].x, 20.0);
        assert_eq!(state.score, 3);
    }

    #[test]
    fn test_step_outside_gap_resets() {
        let mut state = FlappyState {
            y: 60.0,
            velocity: -GRAVITY,
            blocks: vec![gap_block(23.0, 20.0)],
            score: 7,
            best: 4,
        };
        let outcome = step(&mut state, &FlappyInput::default());
        assert_eq!(outcome, StepOutcome::Terminal);
        assert_eq!(
            state,
            FlappyState {
                best: 7,
                ..FlappyState::default()
            }
        );
    }

    #[test]
    fn test_block_scored_exactly_once() {
        let mut state = FlappyState {
            y: 40.0,
            velocity: -GRAVITY,
            blocks: vec![gap_block(-10.0, 12.0)],
            ..FlappyState::default()
        };
        step(&mut state, &FlappyInput::default());
        assert!(state.blocks.is_empty());
        assert_eq!(state.score, 1);

        for _ in 0..3 {
            state.velocity = -GRAVITY;
            step(&mut state, &FlappyInput::default());
        }
        assert_eq!(state.score, 1);
    }

    #[test]
    fn test_block_kept_while_right_edge_on_surface() {
        let mut state = FlappyState {
            y: 40.0,
            velocity: -GRAVITY,
            blocks: vec![gap_block(-8.0, 12.0)],
            ..FlappyState::default()
        };
        step(&mut state, &FlappyInput::default());
        assert_eq!(state.blocks.len(), 1);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_flap_respects_floor() {
        let mut state = FlappyState {
            velocity: 0.0,
            ..FlappyState::default()
        };
        assert!(state.flap());
        assert_eq!(state.velocity, -4.0);
        // -4 is not above the floor
        assert!(!state.flap());
        assert_eq!(state.velocity, -4.0);
    }

    #[test]
    fn test_gravity_then_position() {
        let mut state = FlappyState::new();
        step(&mut state, &FlappyInput::default());
        let v = PLAYER_START_VELOCITY + GRAVITY;
        assert!((state.velocity - v).abs() < 1e-5);
        assert!((state.y - (PLAYER_START_Y + v)).abs() < 1e-5);
    }

    #[test]
    fn test_falling_off_surface_is_terminal() {
        let mut state = FlappyState {
            y: 99.0,
            velocity: 2.0,
            score: 2,
            ..FlappyState::default()
        };
        assert_eq!(step(&mut state, &FlappyInput::default()), StepOutcome::Terminal);
        assert_eq!(state.best, 2);
        assert_eq!(state.y, PLAYER_START_Y);
    }

    #[test]
    fn test_spawned_blocks_in_range() {
        let mut rng = seeded(8);
        let mut state = FlappyState::new();
        for _ in 0..200 {
            state.spawn_block(&mut rng);
        }
        for b in &state.blocks {
            assert_eq!(b.x, 100.0);
            assert!((15.0..=85.0).contains(&b.center));
            assert!((25.0..=40.0).contains(&b.gap));
            assert!((10.0..=25.0).contains(&b.width));
        }
    }

    proptest! {
        #[test]
        fn score_only_grows_between_resets(
            seed in any::<u64>(),
            flaps in proptest::collection::vec(any::<bool>(), 1..300),
        ) {
            let mut rng = seeded(seed);
            let mut state = FlappyState::new();
            for (i, flap) in flaps.into_iter().enumerate() {
                if i % 36 == 0 {
                    state.spawn_block(&mut rng);
                }
                let before = state.score;
                match step(&mut state, &FlappyInput { flap }) {
                    StepOutcome::Continue => prop_assert!(state.score >= before),
                    StepOutcome::Terminal => {
                        prop_assert_eq!(state.score, 0);
                        prop_assert!(state.best >= before);
                    }
                }
                prop_assert!(state.blocks.iter().all(|b| b.right() >= 0.0));
            }
        }
    }
}
