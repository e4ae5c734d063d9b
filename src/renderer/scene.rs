//! Scene painting for each simulation state

use super::{Color, Render, Surface};
use crate::consts::*;
use crate::sim::{FlappyState, Grid, PongState, SnakeState};

impl Render for SnakeState {
    fn render(&self, surface: &mut dyn Surface) {
        let block = BLOCK_SIZE as f32;
        surface.clear(Color::Black);
        surface.fill_rect(self.food.x as f32, self.food.y as f32, block, block, Color::Red);
        for cell in self.path.iter().take(self.length) {
            surface.fill_rect(cell.x as f32, cell.y as f32, block, block, Color::White);
        }
    }
}

impl Render for FlappyState {
    fn render(&self, surface: &mut dyn Surface) {
        surface.clear(Color::Black);
        for block in &self.blocks {
            // Column above the gap, then below it
            surface.fill_rect(block.x, 0.0, block.width, block.gap_top(), Color::White);
            surface.fill_rect(
                block.x,
                block.gap_bottom(),
                block.width,
                SURFACE_SIZE_F - block.gap_bottom(),
                Color::White,
            );
        }
        surface.fill_rect(PLAYER_X, self.y, PLAYER_SIZE, PLAYER_SIZE, Color::White);
    }
}

impl Render for PongState {
    fn render(&self, surface: &mut dyn Surface) {
        surface.clear(Color::Black);
        // Net
        surface.fill_rect(
            SURFACE_SIZE_F / 2.0 - 0.5,
            COURT_TOP,
            1.0,
            COURT_BOTTOM - COURT_TOP,
            Color::White,
        );
        let top = self.paddle_y - PADDLE_HALF;
        for x in [LEFT_PADDLE_X, RIGHT_PADDLE_X] {
            surface.fill_rect(x, top, PADDLE_WIDTH, 2.0 * PADDLE_HALF, Color::White);
        }
        surface.fill_rect(self.ball.pos.x, self.ball.pos.y, BALL_SIZE, BALL_SIZE, Color::Red);
    }
}

impl Render for Grid {
    fn render(&self, surface: &mut dyn Surface) {
        surface.clear(Color::Black);
        if self.width() == 0 || self.height() == 0 {
            return;
        }
        let cell_w = SURFACE_SIZE_F / self.width() as f32;
        let cell_h = SURFACE_SIZE_F / self.height() as f32;
        for y in 0..self.height() {
            for x in 0..self.width() {
                if self.get(x, y) {
                    surface.fill_rect(x as f32 * cell_w, y as f32 * cell_h, cell_w, cell_h, Color::White);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Block;
    use glam::IVec2;

    #[derive(Debug, Clone, PartialEq)]
    enum Op {
        Clear(Color),
        Rect(f32, f32, f32, f32, Color),
    }

    #[derive(Default)]
    struct Recorder {
        ops: Vec<Op>,
    }

    impl Surface for Recorder {
        fn clear(&mut self, color: Color) {
            self.ops.push(Op::Clear(color));
        }

        fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
            self.ops.push(Op::Rect(x, y, width, height, color));
        }
    }

    #[test]
    fn test_snake_scene() {
        let state = SnakeState {
            path: vec![IVec2::new(8, 4), IVec2::new(4, 4)],
            length: 2,
            direction: crate::sim::Direction::East,
            food: IVec2::new(20, 40),
            best: 0,
        };
        let mut surface = Recorder::default();
        state.render(&mut surface);
        assert_eq!(
            surface.ops,
            vec![
                Op::Clear(Color::Black),
                Op::Rect(20.0, 40.0, 4.0, 4.0, Color::Red),
                Op::Rect(8.0, 4.0, 4.0, 4.0, Color::White),
                Op::Rect(4.0, 4.0, 4.0, 4.0, Color::White),
            ]
        );
    }

    #[test]
    fn test_flappy_scene_columns() {
        let state = FlappyState {
            blocks: vec![Block {
                x: 60.0,
                center: 50.0,
                gap: 30.0,
                width: 12.0,
            }],
            ..FlappyState::default()
        };
        let before = state.clone();
        let mut surface = Recorder::default();
        state.render(&mut surface);
        assert_eq!(
            surface.ops,
            vec![
                Op::Clear(Color::Black),
                Op::Rect(60.0, 0.0, 12.0, 35.0, Color::White),
                Op::Rect(60.0, 65.0, 12.0, 35.0, Color::White),
                Op::Rect(PLAYER_X, PLAYER_START_Y, 8.0, 8.0, Color::White),
            ]
        );
        assert_eq!(state, before);
    }

    #[test]
    fn test_pong_scene() {
        let state = PongState::new();
        let mut surface = Recorder::default();
        state.render(&mut surface);
        assert_eq!(
            surface.ops,
            vec![
                Op::Clear(Color::Black),
                Op::Rect(49.5, 5.0, 1.0, 90.0, Color::White),
                Op::Rect(6.0, 40.0, 3.0, 20.0, Color::White),
                Op::Rect(91.0, 40.0, 3.0, 20.0, Color::White),
                Op::Rect(10.0, 49.0, 2.0, 2.0, Color::Red),
            ]
        );
    }

    #[test]
    fn test_grid_scene_scales_cells() {
        let grid = Grid::from_rows(&["#.", ".#"]);
        let mut surface = Recorder::default();
        grid.render(&mut surface);
        assert_eq!(
            surface.ops,
            vec![
                Op::Clear(Color::Black),
                Op::Rect(0.0, 0.0, 50.0, 50.0, Color::White),
                Op::Rect(50.0, 50.0, 50.0, 50.0, Color::White),
            ]
        );
    }
}
