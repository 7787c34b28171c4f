//! Tile-spawn collaborator seam
//!
//! New tiles come from an external service (the original deployment posts
//! the occupied tiles to an HTTP endpoint keyed by grid radius). The
//! engine only needs the resulting tile list, so the transport lives
//! behind this trait.

use thiserror::Error;

use crate::tile::Tile;

/// Spawner failure. Recovered by the engine as "zero tiles produced";
/// the in-flight move still completes.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("tile spawner unavailable: {reason}")]
pub struct SpawnError {
    pub reason: String,
}

impl SpawnError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Source of new tiles after each board change
pub trait TileSpawner {
    /// Given the occupied tiles and the grid radius, produce the tiles to
    /// add to the board.
    fn spawn_tiles(&mut self, occupied: &[Tile], grid_radius: u32) -> Result<Vec<Tile>, SpawnError>;
}
