//! Keyboard mapping
//!
//! Keys are `KeyboardEvent.key` values. Mapping produces intent only; the
//! simulations decide what to do with it on their next tick.

use crate::sim::Direction;

/// Heading requested by a snake key (arrows or WASD)
pub fn snake_direction(key: &str) -> Option<Direction> {
    match key {
        "ArrowUp" | "w" => Some(Direction::North),
        "ArrowDown" | "s" => Some(Direction::South),
        "ArrowLeft" | "a" => Some(Direction::West),
        "ArrowRight" | "d" => Some(Direction::East),
        _ => None,
    }
}

pub fn is_flap_key(key: &str) -> bool {
    matches!(key, "ArrowUp" | "w" | " ")
}

/// Re-randomize the automaton
pub fn is_reseed_key(key: &str) -> bool {
    matches!(key, "r" | "R")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snake_keys() {
        assert_eq!(snake_direction("ArrowUp"), Some(Direction::North));
        assert_eq!(snake_direction("s"), Some(Direction::South));
        assert_eq!(snake_direction("a"), Some(Direction::West));
        assert_eq!(snake_direction("ArrowRight"), Some(Direction::East));
        assert_eq!(snake_direction("W"), None);
        assert_eq!(snake_direction(" "), None);
    }

    #[test]
    fn test_flap_keys() {
        assert!(is_flap_key(" "));
        assert!(is_flap_key("w"));
        assert!(!is_flap_key("ArrowDown"));
    }
}
