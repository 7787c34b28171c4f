//! Text rendering of the board
//!
//! Rows follow the z axis (z = -size at the top), columns the x axis, so
//! the printed shape matches the move directions: Top decreases z,
//! TopRight increases x while decreasing z.

use rustc_hash::FxHashMap;

use hexmerge_core::{CubeCoord, Grid, Tile};

const CELL_WIDTH: usize = 5;

pub fn render_board(grid: &Grid, tiles: &[Tile]) -> String {
    let size = grid.size();
    let by_coord: FxHashMap<CubeCoord, u32> =
        tiles.iter().map(|tile| (tile.coords, tile.value)).collect();

    let max_row_len = (2 * size + 1) as usize;
    let mut out = String::new();
    for z in -size..=size {
        let x_min = (-size).max(-size - z);
        let x_max = size.min(size - z);
        let row_len = (x_max - x_min + 1) as usize;
        let indent = (max_row_len - row_len) * CELL_WIDTH / 2;
        out.push_str(&" ".repeat(indent));
        for x in x_min..=x_max {
            let coords = CubeCoord::new(x, -(x + z), z);
            match by_coord.get(&coords) {
                Some(value) => out.push_str(&format!("{:^width$}", value, width = CELL_WIDTH)),
                None => out.push_str(&format!("{:^width$}", ".", width = CELL_WIDTH)),
            }
        }
        out.push('\n');
    }
    out
}
