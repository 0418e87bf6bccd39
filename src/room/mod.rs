// src/room/mod.rs
//! Комнаты пещеры
//!
//! Комната строится из уцелевшей после фильтрации области пола:
//! - `tiles` — снимок клеток области на момент построения
//! - `edge_tiles` — клетки, касающиеся стены или края карты (из них ищутся проходы)
//! - `centroid` — округлённый центр масс, нужен только для визуализации связей
//!
//! Сами связи между комнатами хранит [`graph::RoomGraph`]: комнаты не ссылаются
//! друг на друга, а связаны рёбрами графа по индексам.

pub mod connect;
pub mod graph;
pub mod passage;
pub mod png;

use crate::grid::{Coord, Grid, Tile};
use crate::region::Region;
use serde::Serialize;

pub use connect::{Passage, connect_rooms};
pub use graph::RoomGraph;

#[derive(Debug, Clone, Serialize)]
pub struct Room {
    pub tiles: Vec<Coord>,
    pub edge_tiles: Vec<Coord>,
    pub centroid: Coord,
    /// Комната, с которой начинается проверка достижимости
    pub is_main_room: bool,
    /// Достижима ли комната из главной по связям
    pub accessible_from_main_room: bool,
}

impl Room {
    /// Строит комнату из области пола на карте без рамки
    #[must_use]
    pub fn new(region: Region, grid: &Grid) -> Self {
        let edge_tiles = region
            .tiles
            .iter()
            .copied()
            .filter(|&tile| is_edge_tile(grid, tile))
            .collect();
        let centroid = centroid(&region.tiles);

        Self {
            tiles: region.tiles,
            edge_tiles,
            centroid,
            is_main_room: false,
            accessible_from_main_room: false,
        }
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.tiles.len()
    }
}

/// Клетка граничит со стеной или с краем карты
fn is_edge_tile(grid: &Grid, tile: Coord) -> bool {
    tile.cardinal_neighbours()
        .any(|neighbour| grid.get(neighbour).is_none_or(|t| t == Tile::Wall))
}

fn centroid(tiles: &[Coord]) -> Coord {
    if tiles.is_empty() {
        return Coord::new(0, 0);
    }
    let count = tiles.len() as f64;
    let (sum_x, sum_y) = tiles.iter().fold((0i64, 0i64), |(sx, sy), c| {
        (sx + i64::from(c.x), sy + i64::from(c.y))
    });
    Coord::new(
        (sum_x as f64 / count).round() as i32,
        (sum_y as f64 / count).round() as i32,
    )
}
