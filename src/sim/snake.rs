//! Snake stepper
//!
//! The board is a 100x100 torus of `BLOCK_SIZE` cells. Unlike the automaton,
//! leaving one edge re-enters from the opposite one.

use glam::IVec2;
use rand::Rng;

use super::collision::wrap_torus;
use super::rng::random_aligned;
use super::state::StepOutcome;
use crate::consts::{BLOCK_SIZE, SNAKE_START, SURFACE_SIZE};

/// Heading of the snake (screen coordinates, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    pub fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }

    /// Unit offset for one cell of movement
    pub fn delta(self) -> IVec2 {
        match self {
            Direction::North => IVec2::new(0, -1),
            Direction::South => IVec2::new(0, 1),
            Direction::East => IVec2::new(1, 0),
            Direction::West => IVec2::new(-1, 0),
        }
    }
}

/// Pending intent for the next tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SnakeInput {
    /// Requested heading (latest key press wins)
    pub turn: Option<Direction>,
}

/// Snake world state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnakeState {
    /// Occupied cells, head first. `path.len() == length` between ticks.
    pub path: Vec<IVec2>,
    pub length: usize,
    pub direction: Direction,
    pub food: IVec2,
    /// Longest length reached before a reset
    pub best: usize,
}

impl SnakeState {
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        Self {
            path: vec![start_cell()],
            length: 1,
            direction: Direction::East,
            food: random_food(rng),
            best: 0,
        }
    }

    pub fn head(&self) -> IVec2 {
        self.path[0]
    }

    /// Change heading unless it would reverse in place.
    ///
    /// Returns whether the heading was accepted.
    pub fn turn(&mut self, direction: Direction) -> bool {
        if direction == self.direction.opposite() {
            return false;
        }
        self.direction = direction;
        true
    }

    /// Back to a single start cell, keeping `best` and the heading
    pub fn reset<R: Rng>(&mut self, rng: &mut R) {
        self.best = self.best.max(self.length);
        self.length = 1;
        self.path.clear();
        self.path.push(start_cell());
        self.food = random_food(rng);
    }
}

fn start_cell() -> IVec2 {
    IVec2::new(SNAKE_START.0, SNAKE_START.1)
}

/// Food cell with both coordinates on the block grid
pub fn random_food<R: Rng>(rng: &mut R) -> IVec2 {
    let max = SURFACE_SIZE - BLOCK_SIZE;
    let x = random_aligned(rng, max, BLOCK_SIZE);
    let y = random_aligned(rng, max, BLOCK_SIZE);
    IVec2::new(x, y)
}

/// Cell one block away from `from` in `direction`, wrapped onto the torus
pub fn advance(from: IVec2, direction: Direction) -> IVec2 {
    let next = from + direction.delta() * BLOCK_SIZE;
    IVec2::new(
        wrap_torus(next.x, SURFACE_SIZE),
        wrap_torus(next.y, SURFACE_SIZE),
    )
}

/// Advance the snake by one tick
pub fn step<R: Rng>(state: &mut SnakeState, input: &SnakeInput, rng: &mut R) -> StepOutcome {
    if let Some(direction) = input.turn {
        state.turn(direction);
    }

    let head = advance(state.head(), state.direction);
    let eats = head == state.food;

    // The tail cell is vacated this tick unless the snake grows
    let occupied = if eats {
        &state.path[..]
    } else {
        &state.path[..state.path.len() - 1]
    };
    if occupied.contains(&head) {
        log::debug!("Snake hit itself at {:?} (length {})", head, state.length);
        state.reset(rng);
        return StepOutcome::Terminal;
    }

    state.path.insert(0, head);
    if eats {
        state.length += 1;
        state.food = random_food(rng);
    }
    state.path.truncate(state.length);

    StepOutcome::Continue
}
