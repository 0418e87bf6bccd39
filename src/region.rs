// src/region.rs
use crate::grid::{Coord, Grid, Tile};
use serde::Serialize;
use std::collections::VecDeque;

/// Связная (по четырём направлениям) область клеток одного типа
///
/// Клетки хранятся в порядке обхода в ширину от первой найденной клетки.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Region {
    pub tile: Tile,
    pub tiles: Vec<Coord>,
}

impl Region {
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}

/// Разбивает все клетки типа `tile` на максимальные связные области.
///
/// Обход карты — x снаружи, y внутри; области возвращаются в порядке
/// обнаружения их первой клетки. Каждая клетка посещается ровно один раз.
#[must_use]
pub fn find_regions(grid: &Grid, tile: Tile) -> Vec<Region> {
    let width = grid.width as usize;
    let mut visited = vec![false; grid.tiles().len()];
    let mut regions = Vec::new();

    // Очередь для BFS
    let mut queue = VecDeque::new();

    for start in grid.coords() {
        let start_idx = start.y as usize * width + start.x as usize;
        if visited[start_idx] || grid.get(start) != Some(tile) {
            continue;
        }

        let mut tiles = Vec::new();
        visited[start_idx] = true;
        queue.push_back(start);

        while let Some(coord) = queue.pop_front() {
            tiles.push(coord);
            for neighbour in coord.cardinal_neighbours() {
                if grid.get(neighbour) != Some(tile) {
                    continue;
                }
                let nidx = neighbour.y as usize * width + neighbour.x as usize;
                if !visited[nidx] {
                    visited[nidx] = true;
                    queue.push_back(neighbour);
                }
            }
        }

        regions.push(Region { tile, tiles });
    }

    regions
}

/// Итог фильтрации областей
#[derive(Debug, Clone, Default)]
pub struct FilterOutcome {
    /// Сколько мелких областей стен превращено в пол
    pub removed_wall_regions: usize,
    /// Сколько мелких областей пола залито стеной
    pub removed_floor_regions: usize,
    /// Уцелевшие области пола — будущие комнаты, в порядке обнаружения
    pub room_regions: Vec<Region>,
}

fn fill_region(grid: &mut Grid, region: &Region, tile: Tile) {
    for &coord in &region.tiles {
        if let Some(cell) = grid.get_mut(coord) {
            *cell = tile;
        }
    }
}

/// Удаляет мелкие области: сначала стены (`< wall_threshold` → пол),
/// затем пол (`< room_threshold` → стена).
///
/// Области пола ищутся заново уже после первого прохода.
pub fn filter_regions(
    grid: &mut Grid,
    wall_threshold: usize,
    room_threshold: usize,
) -> FilterOutcome {
    let mut outcome = FilterOutcome::default();

    for region in find_regions(grid, Tile::Wall) {
        if region.len() < wall_threshold {
            fill_region(grid, &region, Tile::Floor);
            outcome.removed_wall_regions += 1;
        }
    }

    for region in find_regions(grid, Tile::Floor) {
        if region.len() < room_threshold {
            fill_region(grid, &region, Tile::Wall);
            outcome.removed_floor_regions += 1;
        } else {
            outcome.room_regions.push(region);
        }
    }

    outcome
}
