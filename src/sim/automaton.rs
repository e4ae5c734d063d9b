//! Cellular automaton grid and stepper
//!
//! Birth on exactly 3 neighbours, survival on 3 or 4 (B3/S34). This is not
//! Conway's B3/S23; the visible behaviour depends on it.

use rand::Rng;

use super::collision::alive_neighbours;

/// Next generation of a row-major `width * height` buffer.
///
/// Panics if `cells.len() != width * height`.
pub fn step(cells: &[bool], width: usize, height: usize) -> Vec<bool> {
    assert_eq!(
        cells.len(),
        width * height,
        "grid buffer length must equal width * height"
    );

    let mut next = vec![false; cells.len()];
    for y in 0..height {
        for x in 0..width {
            let n = alive_neighbours(cells, width, height, x, y);
            let i = y * width + x;
            next[i] = matches!((cells[i], n), (true, 3) | (true, 4) | (false, 3));
        }
    }
    next
}

/// Fixed-size automaton world
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// All-dead grid
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![false; width * height],
        }
    }

    /// Wrap an existing buffer. Panics on a length mismatch.
    pub fn from_cells(width: usize, height: usize, cells: Vec<bool>) -> Self {
        assert_eq!(cells.len(), width * height, "grid buffer length must equal width * height");
        Self { width, height, cells }
    }

    /// Load from ASCII rows, `#` alive and `.` dead. All rows must share one width.
    pub fn from_rows(rows: &[&str]) -> Self {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.len());
        let mut cells = Vec::with_capacity(width * height);
        for row in rows {
            assert_eq!(row.len(), width, "pattern rows must have equal width");
            for b in row.bytes() {
                cells.push(match b {
                    b'#' => true,
                    b'.' => false,
                    _ => panic!("pattern rows may only contain '.' or '#'"),
                });
            }
        }
        Self { width, height, cells }
    }

    /// Seeded random fill, each cell alive with probability `density`
    pub fn random<R: Rng>(width: usize, height: usize, density: f32, rng: &mut R) -> Self {
        let density = density.clamp(0.0, 1.0);
        let cells = (0..width * height)
            .map(|_| rng.random::<f32>() < density)
            .collect();
        Self { width, height, cells }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Out-of-range coordinates read as dead
    pub fn get(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height && self.cells[y * self.width + x]
    }

    pub fn set(&mut self, x: usize, y: usize, alive: bool) {
        assert!(x < self.width && y < self.height, "cell ({x}, {y}) out of bounds");
        self.cells[y * self.width + x] = alive;
    }

    /// Number of alive cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Advance one generation in place
    pub fn step(&mut self) {
        self.cells = step(&self.cells, self.width, self.height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::rng::seeded;
    use proptest::prelude::*;

    fn center_after_step(rows: &[&str]) -> bool {
        let mut grid = Grid::from_rows(rows);
        grid.step();
        grid.get(1, 1)
    }

    #[test]
    fn test_dead_center_with_three_neighbours_is_born() {
        assert!(center_after_step(&["#.#", "...", ".#."]));
    }

    #[test]
    fn test_dead_center_with_two_neighbours_stays_dead() {
        assert!(!center_after_step(&["#.#", "...", "..."]));
    }

    #[test]
    fn test_alive_with_two_neighbours_dies() {
        assert!(!center_after_step(&["#..", ".#.", "..#"]));
    }

    #[test]
    fn test_alive_with_three_neighbours_survives() {
        assert!(center_after_step(&["#.#", ".#.", "..#"]));
    }

    #[test]
    fn test_alive_with_four_neighbours_survives() {
        assert!(center_after_step(&["#.#", ".#.", "#.#"]));
    }

    #[test]
    fn test_alive_with_five_neighbours_dies() {
        assert!(!center_after_step(&["###", ".#.", "#.#"]));
    }

    #[test]
    fn test_block_is_still_life() {
        let rows = ["....", ".##.", ".##.", "...."];
        let mut grid = Grid::from_rows(&rows);
        grid.step();
        assert_eq!(grid, Grid::from_rows(&rows));
    }

    #[test]
    fn test_edges_do_not_wrap() {
        // A vertical blinker touching the left edge. With wraparound the right
        // column would see it; without it the right column stays dead.
        let mut grid = Grid::from_rows(&["#....", "#....", "#...."]);
        grid.step();
        assert!(!grid.get(4, 1));
        assert!(grid.get(1, 1));
    }

    #[test]
    #[should_panic(expected = "width * height")]
    fn test_length_mismatch_panics() {
        let _ = step(&[false; 5], 2, 2);
    }

    #[test]
    fn test_random_density_extremes() {
        let mut rng = seeded(3);
        assert_eq!(Grid::random(10, 10, 0.0, &mut rng).population(), 0);
        assert_eq!(Grid::random(10, 10, 1.0, &mut rng).population(), 100);
    }

    proptest! {
        #[test]
        fn step_preserves_dimensions(seed in any::<u64>(), w in 1usize..24, h in 1usize..24) {
            let mut rng = seeded(seed);
            let mut grid = Grid::random(w, h, 0.4, &mut rng);
            grid.step();
            prop_assert_eq!(grid.cells().len(), w * h);
            prop_assert_eq!((grid.width(), grid.height()), (w, h));
        }
    }
}
