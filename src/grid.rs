// src/grid.rs
use crate::error::{CaveError, GridError};
use image::{ImageBuffer, Luma};
use serde::{Deserialize, Serialize};

/// Состояние клетки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tile {
    Wall,
    Floor,
}

impl Tile {
    /// Яркость клетки в градациях серого: стена чёрная, пол белый
    #[must_use]
    pub fn to_luma(self) -> u8 {
        match self {
            Tile::Wall => 0,
            Tile::Floor => 255,
        }
    }
}

/// Целочисленная координата клетки
///
/// Знаковая, чтобы соседи за пределами карты выражались без переполнений.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

/// Смещения четырёх соседей по сторонам
pub const CARDINAL_DIRECTIONS: [(i32, i32); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

impl Coord {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Манхэттенское расстояние, метрика поиска ближайших комнат
    #[must_use]
    pub fn manhattan_distance(self, other: Coord) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    pub fn cardinal_neighbours(self) -> impl Iterator<Item = Coord> {
        CARDINAL_DIRECTIONS
            .into_iter()
            .map(move |(dx, dy)| self.offset(dx, dy))
    }
}

/// Прямоугольная карта клеток
///
/// Хранится построчно: индекс клетки `y * width + x`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    pub width: u32,
    pub height: u32,
    data: Vec<Tile>,
}

impl Grid {
    /// Создаёт карту, целиком заполненную `fill`
    #[must_use]
    pub fn new(width: u32, height: u32, fill: Tile) -> Self {
        Self {
            width,
            height,
            data: vec![fill; width as usize * height as usize],
        }
    }

    /// Строит карту из строк вида `"#..#"`: `#` — стена, всё остальное — пол.
    ///
    /// Строки должны быть одинаковой длины; удобно для тестов и отладки.
    #[must_use]
    pub fn from_rows(rows: &[&str]) -> Self {
        let height = rows.len() as u32;
        let width = rows.first().map_or(0, |row| row.chars().count()) as u32;
        let mut grid = Self::new(width, height, Tile::Wall);
        for (y, row) in rows.iter().enumerate() {
            for (x, symbol) in row.chars().enumerate() {
                if symbol != '#' {
                    if let Some(cell) = grid.get_mut(Coord::new(x as i32, y as i32)) {
                        *cell = Tile::Floor;
                    }
                }
            }
        }
        grid
    }

    #[must_use]
    pub fn in_bounds(&self, coord: Coord) -> bool {
        coord.x >= 0
            && coord.y >= 0
            && (coord.x as u32) < self.width
            && (coord.y as u32) < self.height
    }

    /// Лежит ли клетка на внешнем контуре карты
    #[must_use]
    pub fn is_boundary(&self, coord: Coord) -> bool {
        coord.x == 0
            || coord.y == 0
            || coord.x as u32 == self.width - 1
            || coord.y as u32 == self.height - 1
    }

    fn index(&self, coord: Coord) -> Option<usize> {
        self.in_bounds(coord)
            .then(|| coord.y as usize * self.width as usize + coord.x as usize)
    }

    #[must_use]
    pub fn get(&self, coord: Coord) -> Option<Tile> {
        self.index(coord).map(|idx| self.data[idx])
    }

    pub fn get_mut(&mut self, coord: Coord) -> Option<&mut Tile> {
        self.index(coord).map(|idx| &mut self.data[idx])
    }

    /// Записывает клетку и возвращает её прежнее значение
    pub fn set(&mut self, coord: Coord, tile: Tile) -> Result<Tile, GridError> {
        let (width, height) = (self.width, self.height);
        let cell = self.get_mut(coord).ok_or(GridError::OutOfBounds {
            x: coord.x,
            y: coord.y,
            width,
            height,
        })?;
        Ok(std::mem::replace(cell, tile))
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.data
    }

    pub(crate) fn tiles_mut(&mut self) -> &mut Vec<Tile> {
        &mut self.data
    }

    /// Количество клеток заданного типа
    #[must_use]
    pub fn count(&self, tile: Tile) -> usize {
        self.data.iter().filter(|&&t| t == tile).count()
    }

    /// Все координаты карты в порядке обхода генератора: x снаружи, y внутри
    pub fn coords(&self) -> impl Iterator<Item = Coord> + use<> {
        let (width, height) = (self.width as i32, self.height as i32);
        (0..width).flat_map(move |x| (0..height).map(move |y| Coord::new(x, y)))
    }

    pub fn to_grayscale_image(&self) -> Vec<u8> {
        self.data.iter().map(|&t| t.to_luma()).collect()
    }

    pub fn save_as_png(&self, path: &str) -> Result<(), CaveError> {
        let img: ImageBuffer<Luma<u8>, Vec<u8>> =
            ImageBuffer::from_raw(self.width, self.height, self.to_grayscale_image()).ok_or(
                CaveError::ImageBuffer {
                    width: self.width,
                    height: self.height,
                },
            )?;
        img.save(path)?;
        Ok(())
    }
}
