use serde::{Deserialize, Serialize};

/// Facing of an entity on the grid. The wire encoding uses the ordinals
/// 0, 2, 4, 6, 8; the odd values are reserved and never appear on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Heading {
    North,
    East,
    South,
    West,
    /// Undirected; valid for obstacles only, never for the robot.
    Skip,
}

impl Heading {
    pub const CARDINALS: [Heading; 4] =
        [Heading::North, Heading::East, Heading::South, Heading::West];

    /// Forward offset (dx, dy) in world coordinates. Skip has no forward.
    pub fn offset(&self) -> (i32, i32) {
        match self {
            Heading::North => (0, 1),
            Heading::East => (1, 0),
            Heading::South => (0, -1),
            Heading::West => (-1, 0),
            Heading::Skip => (0, 0),
        }
    }

    pub fn is_cardinal(&self) -> bool {
        !matches!(self, Heading::Skip)
    }

    /// Operator-facing label, matching the controller wording.
    pub fn label(&self) -> &'static str {
        match self {
            Heading::North => "Up",
            Heading::East => "Right",
            Heading::South => "Down",
            Heading::West => "Left",
            Heading::Skip => "None",
        }
    }
}

impl From<Heading> for u8 {
    fn from(heading: Heading) -> u8 {
        match heading {
            Heading::North => 0,
            Heading::East => 2,
            Heading::South => 4,
            Heading::West => 6,
            Heading::Skip => 8,
        }
    }
}

impl TryFrom<u8> for Heading {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Heading::North),
            2 => Ok(Heading::East),
            4 => Ok(Heading::South),
            6 => Ok(Heading::West),
            8 => Ok(Heading::Skip),
            other => Err(format!("unknown heading ordinal {}", other)),
        }
    }
}
