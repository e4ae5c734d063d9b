//! Self-playing pong stepper
//!
//! Both paddles share one height and chase the pointer, so the player rallies
//! against themselves. Every paddle hit scores a point; losing the ball resets
//! the rally and serves from the other side.

use glam::Vec2;
use std::f32::consts::FRAC_PI_4;

use super::collision::spans_overlap;
use super::state::StepOutcome;
use crate::consts::*;

/// Court side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Left edge of this side's paddle
    fn paddle_x(self) -> f32 {
        match self {
            Side::Left => LEFT_PADDLE_X,
            Side::Right => RIGHT_PADDLE_X,
        }
    }

    /// Horizontal heading of a ball leaving this side's paddle
    fn outward(self) -> f32 {
        match self {
            Side::Left => 1.0,
            Side::Right => -1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    /// Top-left corner
    pub pos: Vec2,
    /// Unit heading
    pub dir: Vec2,
    pub speed: f32,
}

/// Pending intent for the next tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PongInput {
    /// Latest pointer height in surface units
    pub pointer_y: Option<f32>,
    /// Start the rally
    pub serve: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PongState {
    /// Center of both paddles
    pub paddle_y: f32,
    /// Height the paddles move towards, kept between ticks
    pub target_y: Option<f32>,
    pub ball: Ball,
    /// False while waiting for a serve
    pub playing: bool,
    /// Paddle the next serve leaves from
    pub serve_from: Side,
    /// Paddle hits in the current rally
    pub score: u32,
    pub best: u32,
}

impl Default for PongState {
    fn default() -> Self {
        let mut state = Self {
            paddle_y: SURFACE_SIZE_F / 2.0,
            target_y: None,
            ball: Ball {
                pos: Vec2::ZERO,
                dir: Vec2::X,
                speed: BALL_SERVE_SPEED,
            },
            playing: false,
            serve_from: Side::Left,
            score: 0,
            best: 0,
        };
        state.park();
        state
    }
}

impl PongState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Center the paddles and put the ball on the serving paddle
    pub fn park(&mut self) {
        self.paddle_y = SURFACE_SIZE_F / 2.0;
        let x = match self.serve_from {
            Side::Left => LEFT_PADDLE_X + PADDLE_WIDTH + 1.0,
            Side::Right => RIGHT_PADDLE_X - BALL_SIZE - 1.0,
        };
        self.ball = Ball {
            pos: Vec2::new(x, self.paddle_y - BALL_SIZE / 2.0),
            dir: Vec2::new(self.serve_from.outward(), 0.0),
            speed: BALL_SERVE_SPEED,
        };
    }

    /// Step the paddles towards the pointer, staying inside the court.
    ///
    /// Within one step of the target they hold still.
    pub fn move_paddles(&mut self) {
        let Some(target) = self.target_y else {
            return;
        };
        let delta = target - self.paddle_y;
        if delta.abs() <= PADDLE_SPEED {
            return;
        }
        self.paddle_y = (self.paddle_y + PADDLE_SPEED * delta.signum())
            .clamp(COURT_TOP + PADDLE_HALF, COURT_BOTTOM - PADDLE_HALF);
    }

    /// Paddle the ball is touching while heading into it
    pub fn paddle_hit(&self) -> Option<Side> {
        let side = if self.ball.dir.x < 0.0 {
            Side::Left
        } else {
            Side::Right
        };
        let x = side.paddle_x();
        let hit = spans_overlap(self.ball.pos.x, self.ball.pos.x + BALL_SIZE, x, x + PADDLE_WIDTH)
            && spans_overlap(
                self.ball.pos.y,
                self.ball.pos.y + BALL_SIZE,
                self.paddle_y - PADDLE_HALF,
                self.paddle_y + PADDLE_HALF,
            );
        hit.then_some(side)
    }

    /// Send the ball back off `side`'s paddle.
    ///
    /// The upper half deflects 45 degrees upward, the lower half 45 degrees
    /// downward, dead center straight. Each hit speeds the ball up to the cap.
    pub fn deflect(&mut self, side: Side) {
        let center = self.ball.pos.y + BALL_SIZE / 2.0;
        let angle = if center < self.paddle_y {
            -FRAC_PI_4
        } else if center > self.paddle_y {
            FRAC_PI_4
        } else {
            0.0
        };
        self.ball.speed = (self.ball.speed * BALL_SPEEDUP).min(BALL_MAX_SPEED);
        self.ball.dir = Vec2::new(side.outward() * angle.cos(), angle.sin());
        self.score += 1;
    }

    /// Side the ball left the court through, if it did
    pub fn out_side(&self) -> Option<Side> {
        if self.ball.pos.x + BALL_SIZE < COURT_LEFT {
            Some(Side::Left)
        } else if self.ball.pos.x > COURT_RIGHT {
            Some(Side::Right)
        } else {
            None
        }
    }

    /// End the rally. The next serve comes from the side opposite the exit.
    pub fn reset(&mut self, exit: Side) {
        self.best = self.best.max(self.score);
        self.score = 0;
        self.playing = false;
        self.serve_from = exit.opposite();
        self.park();
    }
}

/// Advance the rally by one tick
pub fn step(state: &mut PongState, input: &PongInput) -> StepOutcome {
    if let Some(y) = input.pointer_y {
        state.target_y = Some(y);
    }

    if !state.playing {
        if !input.serve {
            return StepOutcome::Continue;
        }
        state.playing = true;
    }

    state.move_paddles();

    if let Some(side) = state.paddle_hit() {
        state.deflect(side);
    }

    let ball = &mut state.ball;
    let above = ball.pos.y < COURT_TOP && ball.dir.y < 0.0;
    let below = ball.pos.y + BALL_SIZE > COURT_BOTTOM && ball.dir.y > 0.0;
    if above || below {
        ball.dir.y = -ball.dir.y;
    }
    ball.pos += ball.dir * ball.speed;

    if let Some(exit) = state.out_side() {
        log::debug!("Pong ball out {:?} after {} hits", exit, state.score);
        state.reset(exit);
        return StepOutcome::Terminal;
    }

    StepOutcome::Continue
}
