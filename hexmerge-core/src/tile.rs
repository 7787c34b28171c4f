//! Tiles and the pure predicates the merge engine is built on

use serde::{Deserialize, Serialize};

use crate::coords::CubeCoord;

/// A numbered tile on the board
///
/// Immutable value record: merging produces new tiles rather than
/// mutating in place. Serializes flat as `{x, y, z, value}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    #[serde(flatten)]
    pub coords: CubeCoord,
    pub value: u32,
}

impl Tile {
    pub const fn new(coords: CubeCoord, value: u32) -> Self {
        Self { coords, value }
    }
}

/// Component-wise sum of two cube coordinates
pub fn add_coords(a: CubeCoord, b: CubeCoord) -> CubeCoord {
    CubeCoord::new(a.x + b.x, a.y + b.y, a.z + b.z)
}

/// Exact equality on all three axes
pub fn coords_equal(a: CubeCoord, b: CubeCoord) -> bool {
    a.x == b.x && a.y == b.y && a.z == b.z
}

/// Tiles are equal when both position and value match
pub fn tiles_equal(a: &Tile, b: &Tile) -> bool {
    a.value == b.value && coords_equal(a.coords, b.coords)
}

/// Whether two tiles may merge: both present and equal in value
pub fn can_merge(a: Option<&Tile>, b: Option<&Tile>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a.value == b.value,
        _ => false,
    }
}
