//! Hex coordinate systems and conversions
//!
//! Cube coordinates are canonical (invariant: x + y + z == 0). Axial and
//! Offset are 2-axis views of the same position; conversions are lossless
//! and invertible. Offset uses the odd-column scheme.

use serde::{Deserialize, Serialize};

/// Cube hex coordinates, the canonical representation
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CubeCoord {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl CubeCoord {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Check the cube-coordinate constraint
    pub fn is_well_formed(&self) -> bool {
        self.x + self.y + self.z == 0
    }

    /// Distance from the grid center
    pub fn ring(&self) -> i32 {
        self.x.abs().max(self.y.abs()).max(self.z.abs())
    }
}

/// Axial hex coordinates (col = x, row = z)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AxialCoord {
    pub col: i32,
    pub row: i32,
}

impl AxialCoord {
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }
}

/// Offset hex coordinates, odd-column scheme
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OffsetCoord {
    pub col: i32,
    pub row: i32,
}

impl OffsetCoord {
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }
}

/// Any of the three coordinate systems, tagged by variant
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum HexCoords {
    Cube(CubeCoord),
    Axial(AxialCoord),
    Offset(OffsetCoord),
}

/// Convert any coordinate representation to cube coordinates
pub fn to_cube(coords: HexCoords) -> CubeCoord {
    match coords {
        HexCoords::Cube(cube) => cube,
        HexCoords::Axial(axial) => {
            let x = axial.col;
            let z = axial.row;
            CubeCoord::new(x, -(x + z), z)
        }
        HexCoords::Offset(offset) => {
            let x = offset.col;
            // & 1 = % 2 for positive and negative values
            let z = offset.row - (offset.col - (offset.col & 1)) / 2;
            CubeCoord::new(x, -(x + z), z)
        }
    }
}

/// Convert cube coordinates to axial coordinates
pub fn cube_to_axial(cube: CubeCoord) -> AxialCoord {
    AxialCoord::new(cube.x, cube.z)
}

/// Convert cube coordinates to offset coordinates (odd-column)
pub fn cube_to_offset(cube: CubeCoord) -> OffsetCoord {
    OffsetCoord::new(cube.x, cube.z + (cube.x - (cube.x & 1)) / 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axial_round_trip() {
        for x in -4..=4 {
            for z in -4..=4 {
                let cube = CubeCoord::new(x, -(x + z), z);
                let back = to_cube(HexCoords::Axial(cube_to_axial(cube)));
                assert_eq!(back, cube);
            }
        }
    }

    #[test]
    fn test_offset_round_trip() {
        for x in -4..=4 {
            for z in -4..=4 {
                let cube = CubeCoord::new(x, -(x + z), z);
                let back = to_cube(HexCoords::Offset(cube_to_offset(cube)));
                assert_eq!(back, cube);
            }
        }
    }

    #[test]
    fn test_cube_is_identity() {
        let cube = CubeCoord::new(2, -3, 1);
        assert_eq!(to_cube(HexCoords::Cube(cube)), cube);
    }

    #[test]
    fn test_conversions_preserve_invariant() {
        for col in -5..=5 {
            for row in -5..=5 {
                let from_axial = to_cube(HexCoords::Axial(AxialCoord::new(col, row)));
                assert!(from_axial.is_well_formed());
                let from_offset = to_cube(HexCoords::Offset(OffsetCoord::new(col, row)));
                assert!(from_offset.is_well_formed());
            }
        }
    }

    #[test]
    fn test_negative_column_parity() {
        // (col & 1) must behave as floor-mod-2 for negative columns too
        let cube = to_cube(HexCoords::Offset(OffsetCoord::new(-3, 0)));
        assert_eq!(cube, CubeCoord::new(-3, 1, 2));
        assert_eq!(cube_to_offset(cube), OffsetCoord::new(-3, 0));
    }
}
