//! Merge engine: full-board moves, move availability, board seeding
//!
//! A move partitions the board into lanes (tiles sharing a main-axis
//! value), collapses each lane toward the move direction, and logs every
//! displaced tile for animation replay. When anything changed, the board
//! asks the spawn collaborator for new tiles and notifies its observers.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::coords::CubeCoord;
use crate::grid::{boundary_coord, Grid, MoveDirection, ALL_DIRECTIONS};
use crate::spawn::TileSpawner;
use crate::tile::{add_coords, can_merge, coords_equal, Tile};

/// One tile displacement within a move, for animation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileMove {
    pub from: Tile,
    pub to: Tile,
}

/// Result of one full-board move
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeOutcome {
    /// Whether any lane changed (a tile moved or merged)
    pub changed: bool,
    /// Displacements in ascending lane order, then lane processing order
    pub actions: Vec<TileMove>,
    /// The board after the move, including any spawned tiles
    pub tiles: Vec<Tile>,
}

struct LaneOutcome {
    changed: bool,
    actions: Vec<TileMove>,
    tiles: Vec<Tile>,
}

type BoardListener = Box<dyn FnMut()>;

/// The game board: current tiles on a fixed grid
///
/// Callers must serialize moves; the engine assumes single-caller
/// discipline and holds no internal lock.
pub struct Board {
    grid: Grid,
    tiles: Vec<Tile>,
    listeners: Vec<BoardListener>,
}

impl Board {
    pub fn new(radius: u32) -> Self {
        Self {
            grid: Grid::new(radius),
            tiles: Vec::new(),
            listeners: Vec::new(),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Register an observer fired after every board mutation
    pub fn subscribe(&mut self, listener: impl FnMut() + 'static) {
        self.listeners.push(Box::new(listener));
    }

    fn notify(&mut self) {
        for listener in &mut self.listeners {
            listener();
        }
    }

    /// Seed a fresh board from the spawn collaborator
    pub fn init(&mut self, spawner: &mut dyn TileSpawner) {
        self.tiles.clear();
        let spawned = self.request_tiles(spawner);
        self.add_tiles(spawned);
    }

    /// Append tiles and notify observers
    pub fn add_tiles(&mut self, tiles: Vec<Tile>) {
        self.tiles.extend(tiles);
        self.notify();
    }

    fn request_tiles(&self, spawner: &mut dyn TileSpawner) -> Vec<Tile> {
        match spawner.spawn_tiles(&self.tiles, self.grid.radius()) {
            Ok(tiles) => tiles,
            Err(err) => {
                // Recoverable: the move completes without a spawn this turn
                tracing::warn!(error = %err, "tile spawn failed, no new tiles this turn");
                Vec::new()
            }
        }
    }

    // ========================================================================
    // MERGING
    // ========================================================================

    /// Collapse the whole board toward `direction`.
    ///
    /// Lanes are processed in ascending main-axis order so the action log
    /// replays deterministically. If any lane changed, the merged board
    /// replaces the current one, the spawner is asked for new tiles, and
    /// observers are notified.
    pub fn merge_all(
        &mut self,
        direction: MoveDirection,
        spawner: &mut dyn TileSpawner,
    ) -> MergeOutcome {
        let main_axis = direction.main_axis();
        let size = self.grid.size();

        let mut changed = false;
        let mut actions = Vec::new();
        let mut merged = Vec::with_capacity(self.tiles.len());

        for axis_value in -size..=size {
            let lane: Vec<Tile> = self
                .tiles
                .iter()
                .filter(|tile| tile.coords.axis(main_axis) == axis_value)
                .copied()
                .collect();
            if lane.is_empty() {
                continue;
            }

            let outcome = merge_lane(axis_value, lane, direction, size);
            changed |= outcome.changed;
            actions.extend(outcome.actions);
            merged.extend(outcome.tiles);
        }

        if changed {
            self.tiles = merged;
            let spawned = self.request_tiles(spawner);
            self.add_tiles(spawned);
        }

        MergeOutcome {
            changed,
            actions,
            tiles: self.tiles.clone(),
        }
    }

    // ========================================================================
    // MOVE AVAILABILITY
    // ========================================================================

    /// Whether any move is still possible.
    ///
    /// A board with free cells always has a move (space itself allows
    /// movement and spawning). A full board has one only if some tile has
    /// an equal-valued neighbor.
    pub fn has_moves(&self) -> bool {
        if self.tiles.len() != self.grid.expected_tile_count() {
            return true;
        }

        let by_coord: FxHashMap<CubeCoord, u32> = self
            .tiles
            .iter()
            .map(|tile| (tile.coords, tile.value))
            .collect();

        self.tiles.iter().any(|tile| {
            ALL_DIRECTIONS.iter().any(|dir| {
                let neighbor = add_coords(tile.coords, dir.offset());
                by_coord.get(&neighbor) == Some(&tile.value)
            })
        })
    }
}

/// Collapse one lane toward `direction`.
///
/// Tiles are walked in positive-axis descending order and packed into
/// boundary-stepped slots. Equal-value adjacent pairs always merge
/// pairwise: three equal tiles collapse into a doubled tile plus the odd
/// one out, never a triple. A tile already sitting in its slot with an
/// unchanged value is kept as is and logs no action.
fn merge_lane(
    main_axis_value: i32,
    mut tiles: Vec<Tile>,
    direction: MoveDirection,
    grid_size: i32,
) -> LaneOutcome {
    let positive_axis = direction.positive_axis();
    tiles.sort_by(|a, b| {
        b.coords
            .axis(positive_axis)
            .cmp(&a.coords.axis(positive_axis))
    });

    let mut slot = boundary_coord(main_axis_value, direction, grid_size);
    let step = direction.inverse().offset();

    let mut changed = false;
    let mut actions = Vec::new();
    let mut merged = Vec::with_capacity(tiles.len());

    let mut i = 0;
    while i < tiles.len() {
        let tile = tiles[i];
        let partner = tiles.get(i + 1);

        // The last tile in a lane has no partner and never merges
        let (value, consumed) = if can_merge(Some(&tile), partner) {
            (tile.value * 2, 2)
        } else {
            (tile.value, 1)
        };

        if tile.value == value && coords_equal(tile.coords, slot) {
            merged.push(tile);
        } else {
            let landed = Tile::new(slot, value);
            actions.push(TileMove {
                from: tile,
                to: landed,
            });
            if consumed == 2 {
                actions.push(TileMove {
                    from: tiles[i + 1],
                    to: landed,
                });
            }
            merged.push(landed);
            changed = true;
        }

        slot = add_coords(slot, step);
        i += consumed;
    }

    LaneOutcome {
        changed,
        actions,
        tiles: merged,
    }
}
