// src/fill.rs
use crate::grid::{Coord, Grid, Tile};
use rand::Rng;
use std::time::{SystemTime, UNIX_EPOCH};

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Превращает строковый сид в число для `ChaCha8Rng::seed_from_u64`.
///
/// Строка из цифр берётся как есть, остальные хешируются FNV-1a,
/// чтобы один и тот же сид давал одну карту на любой платформе.
#[must_use]
pub fn seed_from_str(seed: &str) -> u64 {
    if let Ok(value) = seed.trim().parse::<u64>() {
        return value;
    }
    seed.bytes().fold(FNV_OFFSET_BASIS, |hash, byte| {
        (hash ^ u64::from(byte)).wrapping_mul(FNV_PRIME)
    })
}

/// Сид из текущего времени. Вызывается один раз в начале генерации.
#[must_use]
pub fn time_derived_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_nanos() as u64)
}

/// Начальное случайное заполнение карты
///
/// Контур карты всегда стена. Каждая внутренняя клетка становится стеной,
/// если выпавшее число из `0..100` меньше `fill_percent`.
/// Порядок обхода фиксирован (x снаружи, y внутри): ровно одно случайное число на клетку.
pub fn random_fill<R: Rng>(width: u32, height: u32, fill_percent: u32, rng: &mut R) -> Grid {
    let mut grid = Grid::new(width, height, Tile::Wall);

    for x in 0..width as i32 {
        for y in 0..height as i32 {
            let coord = Coord::new(x, y);
            if grid.is_boundary(coord) {
                continue;
            }
            if rng.gen_range(0..100) >= fill_percent {
                if let Some(cell) = grid.get_mut(coord) {
                    *cell = Tile::Floor;
                }
            }
        }
    }

    grid
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use rstest::rstest;

    fn fill(width: u32, height: u32, fill_percent: u32, seed: u64) -> Grid {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        random_fill(width, height, fill_percent, &mut rng)
    }

    #[rstest]
    fn numeric_seed_is_used_verbatim() {
        assert_eq!(seed_from_str("42"), 42);
        assert_eq!(seed_from_str(" 7 "), 7);
    }

    #[rstest]
    fn text_seed_hash_is_stable() {
        // Эталонные значения FNV-1a
        assert_eq!(seed_from_str(""), 0xcbf2_9ce4_8422_2325);
        assert_eq!(seed_from_str("a"), 0xaf63_dc4c_8601_ec8c);
        assert_ne!(seed_from_str("granite"), seed_from_str("basalt"));
    }

    #[rstest]
    fn boundary_is_always_wall() {
        let grid = fill(12, 9, 0, 3);
        for coord in grid.coords() {
            let expected = if grid.is_boundary(coord) {
                Tile::Wall
            } else {
                Tile::Floor
            };
            assert_eq!(grid.get(coord), Some(expected));
        }
    }

    #[rstest]
    fn full_fill_is_all_wall() {
        let grid = fill(10, 10, 100, 99);
        assert_eq!(grid.count(Tile::Floor), 0);
    }

    #[rstest]
    fn draw_order_is_x_outer_y_inner() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let expected: Vec<bool> = (0..4).map(|_| rng.gen_range(0..100u32) < 50).collect();

        let grid = fill(4, 4, 50, 5);
        let interior = [
            Coord::new(1, 1),
            Coord::new(1, 2),
            Coord::new(2, 1),
            Coord::new(2, 2),
        ];
        for (coord, is_wall) in interior.into_iter().zip(expected) {
            let tile = if is_wall { Tile::Wall } else { Tile::Floor };
            assert_eq!(grid.get(coord), Some(tile));
        }
    }

    proptest! {
        #[test]
        fn prop_fill_is_deterministic(
            width in 1u32..40,
            height in 1u32..40,
            fill_percent in 0u32..=100,
            seed in any::<u64>()
        ) {
            prop_assert_eq!(
                fill(width, height, fill_percent, seed),
                fill(width, height, fill_percent, seed)
            );
        }
    }
}
