// src/border.rs
use crate::grid::{Coord, Grid, Tile};

/// Обрамляет карту стеной толщиной `border` клеток.
///
/// Результат размером `(width + 2·border) × (height + 2·border)`: в центре
/// исходная карта без изменений, всё остальное — стена. `border = 0` даёт копию.
#[must_use]
pub fn add_border(grid: &Grid, border: u32) -> Grid {
    let mut framed = Grid::new(
        grid.width + 2 * border,
        grid.height + 2 * border,
        Tile::Wall,
    );
    let offset = border as i32;

    for coord in grid.coords() {
        if let (Some(tile), Some(cell)) = (
            grid.get(coord),
            framed.get_mut(coord.offset(offset, offset)),
        ) {
            *cell = tile;
        }
    }

    framed
}

/// Переводит координату карты без рамки в координату обрамлённой карты
#[must_use]
pub fn to_framed(coord: Coord, border: u32) -> Coord {
    coord.offset(border as i32, border as i32)
}
