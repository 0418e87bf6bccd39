// src/smoothing.rs
use crate::grid::{Coord, Grid, Tile};

/// Порог клеточного автомата: больше — стена, меньше — пол, ровно — без изменений
const WALL_NEIGHBOUR_THRESHOLD: u8 = 4;

/// Количество стен среди восьми соседей клетки.
/// Соседи за пределами карты считаются стенами.
#[must_use]
pub fn wall_neighbour_count(grid: &Grid, coord: Coord) -> u8 {
    let mut count = 0;
    for dx in -1..=1 {
        for dy in -1..=1 {
            if dx == 0 && dy == 0 {
                continue;
            }
            if grid.get(coord.offset(dx, dy)).unwrap_or(Tile::Wall) == Tile::Wall {
                count += 1;
            }
        }
    }
    count
}

/// Один синхронный проход автомата.
///
/// Все клетки читаются из снимка до прохода и пишутся в отдельный буфер,
/// который затем подменяет данные карты.
pub fn smooth_step(grid: &mut Grid) {
    let mut next = grid.tiles().to_vec();
    let width = grid.width as usize;

    for coord in grid.coords() {
        let idx = coord.y as usize * width + coord.x as usize;
        let walls = wall_neighbour_count(grid, coord);
        if walls > WALL_NEIGHBOUR_THRESHOLD {
            next[idx] = Tile::Wall;
        } else if walls < WALL_NEIGHBOUR_THRESHOLD {
            next[idx] = Tile::Floor;
        }
    }

    std::mem::swap(grid.tiles_mut(), &mut next);
}

/// Применяет ровно `iterations` проходов сглаживания
pub fn smooth(grid: &mut Grid, iterations: usize) {
    for _ in 0..iterations {
        smooth_step(grid);
    }
}
