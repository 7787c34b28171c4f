//! hexmerge core - hexagonal 2048 game-logic engine
//!
//! This crate provides the core game logic for hexmerge:
//! - Hex coordinate systems (Cube/Axial/Offset) and conversions
//! - Grid topology (directions, axis roles, boundary slots, cell sets)
//! - Tile operations (coordinate arithmetic, merge eligibility)
//! - Merge engine (per-direction lane merging, move availability,
//!   board seeding, change notifications)
//!
//! New tiles come from an external collaborator behind the
//! [`TileSpawner`] trait; rendering and transport live outside.

pub mod coords;
pub mod engine;
pub mod grid;
pub mod spawn;
pub mod tile;

// Re-exports for convenient access
pub use coords::{cube_to_axial, cube_to_offset, to_cube, AxialCoord, CubeCoord, HexCoords, OffsetCoord};
pub use engine::{Board, MergeOutcome, TileMove};
pub use grid::{boundary_coord, Axis, Grid, MoveDirection, ALL_DIRECTIONS};
pub use spawn::{SpawnError, TileSpawner};
pub use tile::{add_coords, can_merge, coords_equal, tiles_equal, Tile};
