//! Collision and rule predicates shared by the steppers
//!
//! Everything here is plain scalar arithmetic over the 100x100 surface.

/// Wrap a coordinate onto `[0, size)` (torus topology).
#[inline]
pub fn wrap_torus(value: i32, size: i32) -> i32 {
    value.rem_euclid(size)
}

/// Whether open spans `(a_start, a_end)` and `(b_start, b_end)` overlap.
///
/// Touching edges do not count as overlap.
#[inline]
pub fn spans_overlap(a_start: f32, a_end: f32, b_start: f32, b_end: f32) -> bool {
    a_start < b_end && b_start < a_end
}

/// Whether `[top, bottom]` fits inside a gap of height `gap` centered on `center`.
///
/// Boundaries are inclusive: a span that exactly touches the gap edge is inside.
#[inline]
pub fn gap_contains(top: f32, bottom: f32, center: f32, gap: f32) -> bool {
    let half = gap / 2.0;
    top >= center - half && bottom <= center + half
}

/// Number of alive cells among the 8 neighbours of `(x, y)`.
///
/// Neighbours outside the grid are absent (no wraparound).
pub fn alive_neighbours(cells: &[bool], width: usize, height: usize, x: usize, y: usize) -> u8 {
    let mut count = 0u8;
    for dy in -1isize..=1 {
        for dx in -1isize..=1 {
            if dx == 0 && dy == 0 {
                continue;
            }
            let nx = x as isize + dx;
            let ny = y as isize + dy;
            if nx < 0 || ny < 0 || nx >= width as isize || ny >= height as isize {
                continue;
            }
            if cells[ny as usize * width + nx as usize] {
                count += 1;
            }
        }
    }
    count
}
