//! Grid topology: directions, axis roles, and the playable cell set
//!
//! Every move direction assigns a role to each of the three cube axes:
//! the main axis identifies a tile's lane (unchanged while sliding), the
//! positive axis orders tiles toward the direction of travel, and the
//! negative axis is the remaining one.

use serde::{Deserialize, Serialize};

use crate::coords::CubeCoord;

/// One of the three cube axes
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl CubeCoord {
    /// Value along the given axis
    pub fn axis(&self, axis: Axis) -> i32 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    /// Copy with the given axis replaced
    pub fn with_axis(mut self, axis: Axis, value: i32) -> Self {
        match axis {
            Axis::X => self.x = value,
            Axis::Y => self.y = value,
            Axis::Z => self.z = value,
        }
        self
    }
}

/// The six hex move directions
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MoveDirection {
    Top,
    Bottom,
    TopRight,
    TopLeft,
    BottomRight,
    BottomLeft,
}

pub const ALL_DIRECTIONS: [MoveDirection; 6] = [
    MoveDirection::Top,
    MoveDirection::Bottom,
    MoveDirection::TopRight,
    MoveDirection::TopLeft,
    MoveDirection::BottomRight,
    MoveDirection::BottomLeft,
];

impl MoveDirection {
    /// Axis whose value tiles keep while sliding in this direction.
    /// Lanes are the sets of tiles sharing a main-axis value.
    pub fn main_axis(self) -> Axis {
        match self {
            MoveDirection::Top | MoveDirection::Bottom => Axis::X,
            MoveDirection::TopRight | MoveDirection::BottomLeft => Axis::Y,
            MoveDirection::TopLeft | MoveDirection::BottomRight => Axis::Z,
        }
    }

    /// Axis used as the descending sort key when collapsing a lane
    /// toward this direction.
    pub fn positive_axis(self) -> Axis {
        match self {
            MoveDirection::Top => Axis::Y,
            MoveDirection::Bottom => Axis::Z,
            MoveDirection::TopRight => Axis::X,
            MoveDirection::BottomLeft => Axis::Z,
            MoveDirection::TopLeft => Axis::Y,
            MoveDirection::BottomRight => Axis::X,
        }
    }

    /// The remaining axis
    pub fn negative_axis(self) -> Axis {
        match self {
            MoveDirection::Top => Axis::Z,
            MoveDirection::Bottom => Axis::Y,
            MoveDirection::TopRight => Axis::Z,
            MoveDirection::BottomLeft => Axis::X,
            MoveDirection::TopLeft => Axis::X,
            MoveDirection::BottomRight => Axis::Y,
        }
    }

    /// Unit step in cube coordinates toward this direction
    pub fn offset(self) -> CubeCoord {
        match self {
            MoveDirection::TopRight => CubeCoord::new(1, 0, -1),
            MoveDirection::TopLeft => CubeCoord::new(-1, 1, 0),
            MoveDirection::Top => CubeCoord::new(0, 1, -1),
            MoveDirection::BottomRight => CubeCoord::new(1, -1, 0),
            MoveDirection::BottomLeft => CubeCoord::new(-1, 0, 1),
            MoveDirection::Bottom => CubeCoord::new(0, -1, 1),
        }
    }

    /// The opposite direction
    pub fn inverse(self) -> Self {
        match self {
            MoveDirection::Top => MoveDirection::Bottom,
            MoveDirection::Bottom => MoveDirection::Top,
            MoveDirection::TopRight => MoveDirection::BottomLeft,
            MoveDirection::BottomLeft => MoveDirection::TopRight,
            MoveDirection::TopLeft => MoveDirection::BottomRight,
            MoveDirection::BottomRight => MoveDirection::TopLeft,
        }
    }
}

/// Coordinate at the extreme positive end of a lane.
///
/// Tiles in the lane identified by `main_axis_value` collapse into this
/// slot first, then step by `-offset(inverse(direction))` per placement.
pub fn boundary_coord(
    main_axis_value: i32,
    direction: MoveDirection,
    grid_size: i32,
) -> CubeCoord {
    let positive_axis_value = if main_axis_value <= 0 {
        grid_size
    } else {
        grid_size - main_axis_value
    };
    let negative_axis_value = -(main_axis_value + positive_axis_value);

    CubeCoord::default()
        .with_axis(direction.main_axis(), main_axis_value)
        .with_axis(direction.positive_axis(), positive_axis_value)
        .with_axis(direction.negative_axis(), negative_axis_value)
}

/// The playable hexagonal grid for a given radius
///
/// Radius 1 is a single cell, radius 2 is 7 cells, radius 3 is 19, and so
/// on. The cell set is recomputed whenever the radius changes and is
/// otherwise an immutable reference set.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    radius: u32,
    size: i32,
    cells: Vec<CubeCoord>,
}

impl Grid {
    pub fn new(radius: u32) -> Self {
        let size = radius as i32 - 1;
        let mut cells = Vec::new();
        for x in -size..=size {
            for y in -size..=size {
                let z = -(x + y);
                if z.abs() <= size {
                    cells.push(CubeCoord::new(x, y, z));
                }
            }
        }
        Self { radius, size, cells }
    }

    pub fn radius(&self) -> u32 {
        self.radius
    }

    /// Grid size (radius − 1): the max absolute axis value of any cell
    pub fn size(&self) -> i32 {
        self.size
    }

    /// All valid cells, `max(|x|,|y|,|z|) <= size`
    pub fn cells(&self) -> &[CubeCoord] {
        &self.cells
    }

    pub fn contains(&self, coord: CubeCoord) -> bool {
        coord.is_well_formed() && coord.ring() <= self.size
    }

    /// Number of cells on a full grid: `1 + 6 * (1 + 2 + .. + size)`
    pub fn expected_tile_count(&self) -> usize {
        (1 + 3 * self.size * (self.size + 1)) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inverse_is_involution() {
        for dir in ALL_DIRECTIONS {
            assert_eq!(dir.inverse().inverse(), dir);
        }
    }

    #[test]
    fn test_offsets_are_well_formed_units() {
        for dir in ALL_DIRECTIONS {
            let offset = dir.offset();
            assert!(offset.is_well_formed());
            assert_eq!(offset.ring(), 1);
        }
    }

    #[test]
    fn test_axis_roles_are_distinct() {
        for dir in ALL_DIRECTIONS {
            let (m, p, n) = (dir.main_axis(), dir.positive_axis(), dir.negative_axis());
            assert_ne!(m, p);
            assert_ne!(m, n);
            assert_ne!(p, n);
        }
    }

    #[test]
    fn test_offset_keeps_main_axis_fixed() {
        // Sliding in a direction never changes a tile's lane
        for dir in ALL_DIRECTIONS {
            assert_eq!(dir.offset().axis(dir.main_axis()), 0);
            assert_eq!(dir.offset().axis(dir.positive_axis()), 1);
            assert_eq!(dir.offset().axis(dir.negative_axis()), -1);
        }
    }

    #[test]
    fn test_boundary_coord_on_rim() {
        let grid = Grid::new(4);
        for dir in ALL_DIRECTIONS {
            for main in -grid.size()..=grid.size() {
                let coord = boundary_coord(main, dir, grid.size());
                assert!(coord.is_well_formed());
                assert_eq!(coord.ring(), grid.size());
                assert_eq!(coord.axis(dir.main_axis()), main);
                // One more step in the move direction leaves the grid
                assert!(!grid.contains(crate::tile::add_coords(coord, dir.offset())));
            }
        }
    }

    #[test]
    fn test_grid_cell_count_closed_form() {
        for radius in 1..=6u32 {
            let grid = Grid::new(radius);
            assert_eq!(grid.cells().len(), grid.expected_tile_count());
        }
        assert_eq!(Grid::new(1).expected_tile_count(), 1);
        assert_eq!(Grid::new(2).expected_tile_count(), 7);
        assert_eq!(Grid::new(3).expected_tile_count(), 19);
    }

    #[test]
    fn test_contains() {
        let grid = Grid::new(2);
        assert!(grid.contains(CubeCoord::new(0, 0, 0)));
        assert!(grid.contains(CubeCoord::new(1, -1, 0)));
        assert!(!grid.contains(CubeCoord::new(2, -2, 0)));
        // Off-lattice coordinate is never on the grid
        assert!(!grid.contains(CubeCoord::new(1, 1, 1)));
    }
}
