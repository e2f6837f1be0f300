use serde::{Deserialize, Serialize};

/// Side length of the square world.
pub const GRID_SIZE: u8 = 20;

/// A rendered grid location. Rows run top to bottom, columns left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayCell {
    pub row: u8,
    pub col: u8,
}

/// Map world (x, y), origin at the bottom-left, to a rendered cell.
/// Every entity placed on the grid must go through this so all layers agree
/// on cell identity.
pub fn to_display(x: u8, y: u8) -> DisplayCell {
    DisplayCell {
        row: GRID_SIZE - 1 - y,
        col: x,
    }
}

/// Inverse of [`to_display`].
pub fn from_display(cell: DisplayCell) -> (u8, u8) {
    (cell.col, GRID_SIZE - 1 - cell.row)
}
