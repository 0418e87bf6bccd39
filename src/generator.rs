// src/generator.rs
//! Полный проход генерации пещеры
//!
//! Заполнение → сглаживание → фильтрация областей → комнаты → соединение → рамка.
//! Каждый вызов строит карту с нуля; параметры проверяются до первого этапа.

use crate::border::add_border;
use crate::config::CaveGenerationParams;
use crate::error::CaveError;
use crate::fill::{random_fill, seed_from_str, time_derived_seed};
use crate::grid::{Grid, Tile};
use crate::region::filter_regions;
use crate::room::{Passage, RoomGraph, connect_rooms};
use crate::smoothing::smooth;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Нефатальные замечания к результату генерации
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationWarning {
    /// На карте не осталось ни одной клетки пола
    EmptyResult,
}

/// Результат генерации
#[derive(Debug, Clone)]
pub struct Cave {
    /// Готовая карта вместе с рамкой
    pub grid: Grid,
    /// Комнаты и связи между ними; координаты — без учёта рамки
    pub rooms: RoomGraph,
    /// Прорезанные проходы в порядке создания
    pub passages: Vec<Passage>,
    /// Фактически использованный сид (для воспроизведения)
    pub seed: u64,
    pub border_size: u32,
    pub warnings: Vec<GenerationWarning>,
}

/// Сид прохода: вычисляется ровно один раз
#[must_use]
pub fn resolve_seed(params: &CaveGenerationParams) -> u64 {
    if params.use_random_seed {
        time_derived_seed()
    } else {
        seed_from_str(&params.seed)
    }
}

/// Генерирует пещеру по параметрам
pub fn generate_cave(params: &CaveGenerationParams) -> Result<Cave, CaveError> {
    generate_cave_with_seed(params, resolve_seed(params))
}

/// Генерирует пещеру с явно заданным сидом, игнорируя `seed` и `use_random_seed`
pub fn generate_cave_with_seed(
    params: &CaveGenerationParams,
    seed: u64,
) -> Result<Cave, CaveError> {
    params.validate()?;

    tracing::info!(
        seed,
        width = params.width,
        height = params.height,
        "Генерация пещеры"
    );

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut grid = random_fill(params.width, params.height, params.fill_percent, &mut rng);

    smooth(&mut grid, params.smoothing_iterations);

    let filtered = filter_regions(&mut grid, params.wall_threshold, params.room_threshold);
    tracing::debug!(
        removed_walls = filtered.removed_wall_regions,
        removed_floors = filtered.removed_floor_regions,
        rooms = filtered.room_regions.len(),
        "Мелкие области удалены"
    );

    let mut rooms = RoomGraph::from_regions(filtered.room_regions, &grid);

    let passages = if params.connect_rooms {
        connect_rooms(&mut grid, &mut rooms, params.passage_radius)
    } else {
        Vec::new()
    };

    let grid = add_border(&grid, params.border_size);

    let mut warnings = Vec::new();
    if grid.count(Tile::Floor) == 0 {
        tracing::warn!(seed, "В пещере не осталось ни одной клетки пола");
        warnings.push(GenerationWarning::EmptyResult);
    }

    tracing::info!(
        rooms = rooms.len(),
        passages = passages.len(),
        width = grid.width,
        height = grid.height,
        "Пещера готова"
    );

    Ok(Cave {
        grid,
        rooms,
        passages,
        seed,
        border_size: params.border_size,
        warnings,
    })
}
