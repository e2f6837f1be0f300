use serde::{Deserialize, Serialize};

use super::heading::Heading;
use crate::common::{DomainError, DomainResult};

/// Largest number of obstacles the id pool can name.
pub const MAX_OBSTACLES: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u8,
    pub x: u8,
    pub y: u8,
    pub facing: Heading,
}

/// Owns the placed obstacles and their small ids. Ids come from the pool
/// 1..=10, lowest free first, and return to the pool on removal.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ObstacleRegistry {
    obstacles: Vec<Obstacle>,
}

impl ObstacleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place an obstacle. The (0, 0) input doubles as "nothing entered" in
    /// the operator form and is skipped (see DESIGN.md). Returns the id of
    /// the new obstacle, or None when the input was skipped.
    pub fn add(&mut self, x: u8, y: u8, facing: Heading) -> DomainResult<Option<u8>> {
        if x == 0 && y == 0 {
            return Ok(None);
        }
        let id = self.allocate_id()?;
        self.obstacles.push(Obstacle { id, x, y, facing });
        Ok(Some(id))
    }

    /// Remove by id. Returns whether an obstacle was actually removed.
    pub fn remove(&mut self, id: u8) -> bool {
        let before = self.obstacles.len();
        self.obstacles.retain(|ob| ob.id != id);
        self.obstacles.len() < before
    }

    /// Insertion-order snapshot.
    pub fn list(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    pub fn clear(&mut self) {
        self.obstacles.clear();
    }

    fn allocate_id(&self) -> DomainResult<u8> {
        (1..=MAX_OBSTACLES as u8)
            .find(|candidate| self.obstacles.iter().all(|ob| ob.id != *candidate))
            .ok_or(DomainError::RegistryFull {
                capacity: MAX_OBSTACLES,
            })
    }
}
