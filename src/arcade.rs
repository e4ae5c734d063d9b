//! Game controllers
//!
//! Each controller owns its world state and RNG exclusively. Two instances of
//! the same game never share anything.

use crate::consts::*;
use crate::driver::Simulation;
use crate::input;
use crate::settings::Settings;
use crate::sim::{
    FlappyInput, FlappyState, Grid, PongInput, PongState, SimRng, SnakeInput, SnakeState,
    StepOutcome, flappy, pong, seeded, snake,
};

/// Snake cabinet
#[derive(Debug, Clone)]
pub struct SnakeGame {
    state: SnakeState,
    rng: SimRng,
}

impl SnakeGame {
    pub fn new(seed: u64) -> Self {
        let mut rng = seeded(seed);
        let state = SnakeState::new(&mut rng);
        Self { state, rng }
    }

    /// Start with a previously recorded best length
    pub fn with_best(mut self, best: usize) -> Self {
        self.state.best = best;
        self
    }

    pub fn state(&self) -> &SnakeState {
        &self.state
    }
}

impl Simulation for SnakeGame {
    type Input = SnakeInput;

    fn apply_key(input: &mut SnakeInput, key: &str) -> bool {
        match input::snake_direction(key) {
            Some(direction) => {
                input.turn = Some(direction);
                true
            }
            None => false,
        }
    }

    fn step(&mut self, input: &SnakeInput) -> StepOutcome {
        snake::step(&mut self.state, input, &mut self.rng)
    }
}

/// Flappy cabinet
#[derive(Debug, Clone)]
pub struct FlappyGame {
    state: FlappyState,
    rng: SimRng,
    spawn_interval_ms: f64,
}

impl FlappyGame {
    pub fn new(seed: u64) -> Self {
        Self {
            state: FlappyState::new(),
            rng: seeded(seed),
            spawn_interval_ms: SPAWN_INTERVAL_MS,
        }
    }

    pub fn with_best(mut self, best: u32) -> Self {
        self.state.best = best;
        self
    }

    pub fn with_spawn_interval(mut self, interval_ms: f64) -> Self {
        self.spawn_interval_ms = interval_ms;
        self
    }

    pub fn state(&self) -> &FlappyState {
        &self.state
    }
}

impl Simulation for FlappyGame {
    type Input = FlappyInput;

    fn apply_key(input: &mut FlappyInput, key: &str) -> bool {
        if input::is_flap_key(key) {
            input.flap = true;
            true
        } else {
            false
        }
    }

    fn step(&mut self, input: &FlappyInput) -> StepOutcome {
        flappy::step(&mut self.state, input)
    }

    fn interval_ms(&self) -> Option<f64> {
        Some(self.spawn_interval_ms)
    }

    fn on_interval(&mut self) {
        self.state.spawn_block(&mut self.rng);
    }
}

/// Self-playing pong panel, driven by the pointer
#[derive(Debug, Clone, Default)]
pub struct PongGame {
    state: PongState,
}

impl PongGame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_best(mut self, best: u32) -> Self {
        self.state.best = best;
        self
    }

    pub fn state(&self) -> &PongState {
        &self.state
    }
}

impl Simulation for PongGame {
    type Input = PongInput;

    fn apply_key(_input: &mut PongInput, _key: &str) -> bool {
        false
    }

    fn apply_pointer_move(input: &mut PongInput, _x: f32, y: f32) -> bool {
        input.pointer_y = Some(y);
        true
    }

    fn apply_pointer_up(input: &mut PongInput) -> bool {
        input.serve = true;
        true
    }

    fn step(&mut self, input: &PongInput) -> StepOutcome {
        pong::step(&mut self.state, input)
    }
}

/// Intent for the automaton
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LifeInput {
    pub reseed: bool,
}

/// Cellular automaton panel
#[derive(Debug, Clone)]
pub struct LifeGame {
    grid: Grid,
    rng: SimRng,
    density: f32,
}

impl LifeGame {
    pub fn new(seed: u64, width: usize, height: usize, density: f32) -> Self {
        let mut rng = seeded(seed);
        let grid = Grid::random(width, height, density, &mut rng);
        Self { grid, rng, density }
    }

    pub fn from_settings(seed: u64, settings: &Settings) -> Self {
        Self::new(
            seed,
            settings.life_width,
            settings.life_height,
            settings.life_density,
        )
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    fn reseed(&mut self) {
        self.grid = Grid::random(
            self.grid.width(),
            self.grid.height(),
            self.density,
            &mut self.rng,
        );
        log::debug!("Automaton reseeded ({} alive)", self.grid.population());
    }
}

impl Simulation for LifeGame {
    type Input = LifeInput;

    fn apply_key(input: &mut LifeInput, key: &str) -> bool {
        if input::is_reseed_key(key) {
            input.reseed = true;
            true
        } else {
            false
        }
    }

    fn step(&mut self, input: &LifeInput) -> StepOutcome {
        if input.reseed {
            self.reseed();
        }
        self.grid.step();
        StepOutcome::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::Runner;
    use crate::sim::SimPhase;

    /// 60 Hz display frames starting at `from_ms`
    fn frames(from_ms: f64, count: u32) -> impl Iterator<Item = f64> {
        (0..count).map(move |i| from_ms + f64::from(i) * 1000.0 / 60.0)
    }

    #[test]
    fn test_hidden_snake_is_frozen() {
        let mut runner = Runner::new(SnakeGame::new(11), TARGET_FPS).with_focus(true);
        runner.frame(0.0);
        let before = runner.sim().state().clone();

        runner.set_visible(false);
        assert!(!runner.key_down("ArrowDown"));
        for t in frames(100.0, 1000) {
            runner.frame(t);
        }
        assert_eq!(runner.sim().state(), &before);
        assert_eq!(runner.phase(), SimPhase::Idle);
    }

    #[test]
    fn test_hidden_flappy_is_frozen() {
        let mut runner = Runner::new(FlappyGame::new(12), TARGET_FPS).with_focus(true);
        runner.frame(0.0);
        runner.set_visible(false);
        let before = runner.sim().state().clone();
        for t in frames(100.0, 2000) {
            runner.frame(t);
        }
        assert_eq!(runner.sim().state(), &before);
        assert!(runner.sim().state().blocks.is_empty());
    }

    #[test]
    fn test_flappy_spawns_on_wall_clock() {
        // Interval shorter than the fall time so the player is still alive
        let mut runner = Runner::new(FlappyGame::new(13).with_spawn_interval(200.0), TARGET_FPS)
            .with_focus(true);
        for t in frames(0.0, 13) {
            runner.frame(t);
        }
        assert!(!runner.sim().state().blocks.is_empty());
    }

    #[test]
    fn test_snake_paced_by_configured_rate() {
        let settings = Settings {
            target_fps: 30,
            ..Settings::default()
        }
        .sanitized();
        let mut runner = Runner::new(SnakeGame::new(17), settings.target_fps).with_focus(true);
        // Two seconds of display frames
        for t in frames(0.0, 120) {
            runner.frame(t);
        }
        assert!((58..=61).contains(&runner.ticks()), "got {} ticks", runner.ticks());
    }

    #[test]
    fn test_snake_key_turns_on_next_tick() {
        let mut runner = Runner::new(SnakeGame::new(14), 1).with_focus(true);
        assert!(runner.key_down("ArrowDown"));
        assert_eq!(runner.sim().state().direction, snake::Direction::East);
        runner.frame(0.0);
        assert_eq!(runner.sim().state().direction, snake::Direction::South);
    }

    #[test]
    fn test_instances_do_not_share_state() {
        let mut a = Runner::new(SnakeGame::new(15), 1).with_focus(true);
        let b = Runner::new(SnakeGame::new(15), 1).with_focus(true);
        a.frame(0.0);
        assert_ne!(a.sim().state(), b.sim().state());
        assert_eq!(b.sim().state().path.len(), 1);
    }

    #[test]
    fn test_life_reseed_key() {
        let mut runner = Runner::new(LifeGame::new(16, 10, 10, 0.0), 1).with_focus(true);
        runner.frame(0.0);
        assert_eq!(runner.sim().grid().population(), 0);
        assert!(runner.key_down("r"));
        // Reseed keeps the configured density, which is zero here
        runner.frame(1000.0);
        assert_eq!(runner.sim().grid().population(), 0);
        assert_eq!(runner.ticks(), 2);
    }

    #[test]
    fn test_pong_serves_on_click_and_follows_pointer() {
        let mut runner = Runner::new(PongGame::new(), PONG_FPS).with_focus(true);
        assert!(runner.pointer_move(50.0, 90.0));
        runner.frame(0.0);
        assert!(!runner.sim().state().playing);

        assert!(runner.pointer_up());
        runner.frame(100.0);
        let state = runner.sim().state();
        assert!(state.playing);
        assert_eq!(state.target_y, Some(90.0));
        assert!(state.paddle_y > 50.0);
    }

    #[test]
    fn test_unfocused_pong_ignores_pointer() {
        let mut runner = Runner::new(PongGame::new(), PONG_FPS);
        assert!(!runner.pointer_move(0.0, 10.0));
        assert!(!runner.pointer_up());
        runner.frame(0.0);
        assert_eq!(runner.sim().state(), &PongState::new());
    }

    #[test]
    fn test_best_carried_from_storage() {
        let game = FlappyGame::new(17).with_best(9);
        assert_eq!(game.state().best, 9);
        let game = SnakeGame::new(17).with_best(4);
        assert_eq!(game.state().best, 4);
        let game = PongGame::new().with_best(2);
        assert_eq!(game.state().best, 2);
    }
}
