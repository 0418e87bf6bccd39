// src/room/passage.rs
use crate::grid::{Coord, Grid, Tile};

/// Целочисленная линия между двумя клетками (алгоритм Брезенхэма)
///
/// Шаг всегда по доминирующей оси, ошибка по второй оси копится
/// начиная с половины длины. Обе конечные точки входят в результат.
#[must_use]
pub fn line(from: Coord, to: Coord) -> Vec<Coord> {
    let dx = to.x - from.x;
    let dy = to.y - from.y;

    let (longest, shortest, inverted) = if dx.abs() >= dy.abs() {
        (dx.abs(), dy.abs(), false)
    } else {
        (dy.abs(), dx.abs(), true)
    };
    let (step, gradient_step) = if inverted {
        (dy.signum(), dx.signum())
    } else {
        (dx.signum(), dy.signum())
    };

    let mut points = Vec::with_capacity(longest as usize + 1);
    let (mut x, mut y) = (from.x, from.y);
    let mut gradient_accumulation = longest / 2;

    for _ in 0..longest {
        points.push(Coord::new(x, y));

        if inverted {
            y += step;
        } else {
            x += step;
        }

        gradient_accumulation += shortest;
        if gradient_accumulation >= longest {
            if inverted {
                x += gradient_step;
            } else {
                y += gradient_step;
            }
            gradient_accumulation -= longest;
        }
    }
    points.push(Coord::new(x, y));

    points
}

/// Заливает полом круг радиуса `radius` (`dx² + dy² ≤ r²`), обрезанный по краям карты.
/// Возвращает количество клеток, которые были стеной.
pub fn stamp_disc(grid: &mut Grid, center: Coord, radius: u32) -> usize {
    let r = radius as i32;
    let mut carved = 0;
    for dx in -r..=r {
        for dy in -r..=r {
            if dx * dx + dy * dy > r * r {
                continue;
            }
            if let Some(cell) = grid.get_mut(center.offset(dx, dy)) {
                if *cell == Tile::Wall {
                    carved += 1;
                }
                *cell = Tile::Floor;
            }
        }
    }
    carved
}

/// Прорезает проход: линия от `from` до `to`, в каждой точке которой ставится круг.
/// Возвращает количество новых клеток пола.
pub fn carve_passage(grid: &mut Grid, from: Coord, to: Coord, radius: u32) -> usize {
    line(from, to)
        .into_iter()
        .map(|point| stamp_disc(grid, point, radius))
        .sum()
}
