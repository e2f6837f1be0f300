//! Numeric input field parsing. Invalid input is silently clamped to the
//! field's default instead of being reported; placing something visible
//! beats erroring in the operator console (see DESIGN.md).

/// Parse an obstacle coordinate field: integers in [0, 19] are accepted,
/// anything else (non-integer, out of range, empty) falls back to 0.
pub fn parse_obstacle_coord(input: &str) -> u8 {
    match input.trim().parse::<i64>() {
        Ok(n) if (0..20).contains(&n) => n as u8,
        _ => 0,
    }
}

/// Parse a robot coordinate field: integers in [1, 18] are accepted so the
/// 3x3 footprint stays on the grid, anything else falls back to 1.
pub fn parse_robot_coord(input: &str) -> u8 {
    match input.trim().parse::<i64>() {
        Ok(n) if (1..19).contains(&n) => n as u8,
        _ => 1,
    }
}
