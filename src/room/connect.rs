// src/room/connect.rs
//! Соединение комнат проходами
//!
//! Соединение идёт в две фазы:
//!
//! 1. **Ближайшие пары.** Каждая комната, у которой ещё нет ни одной связи,
//!    соединяется с ближайшей (по манхэттенскому расстоянию между краевыми клетками)
//!    комнатой, с которой она ещё не связана.
//! 2. **Достижимость.** Пока есть комнаты, недостижимые из главной, ищется самая
//!    близкая пара «недостижимая — достижимая» по всей карте и соединяется.
//!    Каждая итерация делает достижимой хотя бы одну новую комнату, поэтому цикл
//!    завершается не более чем за `n - 1` шагов.
//!
//! Главной назначается первая комната: именно она первой инициирует соединение
//! в первой фазе.
//!
//! При равных расстояниях побеждает пара, найденная первой в порядке обхода
//! (комнаты по индексу, затем краевые клетки в порядке хранения).

use crate::grid::{Coord, Grid};
use crate::room::graph::RoomGraph;
use crate::room::passage::carve_passage;
use serde::Serialize;

/// Прорезанный проход между двумя комнатами
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Passage {
    pub room_a: usize,
    pub room_b: usize,
    pub tile_a: Coord,
    pub tile_b: Coord,
    pub distance: u32,
}

/// Ближайшая пара краевых клеток из комнаты `a` в одну из комнат `candidates`
fn closest_pair(
    rooms: &RoomGraph,
    a: usize,
    candidates: impl IntoIterator<Item = usize>,
) -> Option<Passage> {
    let mut best: Option<Passage> = None;

    for b in candidates {
        if a == b || rooms.are_connected(a, b) {
            continue;
        }
        for &tile_a in &rooms.room(a).edge_tiles {
            for &tile_b in &rooms.room(b).edge_tiles {
                let distance = tile_a.manhattan_distance(tile_b);
                if best.is_none_or(|current| distance < current.distance) {
                    best = Some(Passage {
                        room_a: a,
                        room_b: b,
                        tile_a,
                        tile_b,
                        distance,
                    });
                }
            }
        }
    }

    best
}

fn create_passage(
    grid: &mut Grid,
    rooms: &mut RoomGraph,
    passage: Passage,
    passage_radius: u32,
) -> Passage {
    let carved = carve_passage(grid, passage.tile_a, passage.tile_b, passage_radius);
    rooms.connect(passage.room_a, passage.room_b);
    tracing::trace!(
        room_a = passage.room_a,
        room_b = passage.room_b,
        distance = passage.distance,
        carved,
        "Проход прорезан"
    );
    passage
}

/// Фаза 1: каждая комната без связей соединяется с ближайшей
fn connect_nearest(
    grid: &mut Grid,
    rooms: &mut RoomGraph,
    passage_radius: u32,
) -> Vec<Passage> {
    let mut passages = Vec::new();

    for a in 0..rooms.len() {
        // Комната могла получить связь, будучи чьей-то ближайшей
        if rooms.connection_count(a) > 0 {
            continue;
        }
        if let Some(passage) = closest_pair(rooms, a, 0..rooms.len()) {
            passages.push(create_passage(grid, rooms, passage, passage_radius));
        }
    }

    passages
}

/// Фаза 2: присоединяет недостижимые комнаты к достижимым, пока все не станут достижимы
fn enforce_accessibility(
    grid: &mut Grid,
    rooms: &mut RoomGraph,
    passage_radius: u32,
) -> Vec<Passage> {
    let mut passages = Vec::new();

    while !rooms.all_accessible() {
        let (accessible, isolated): (Vec<usize>, Vec<usize>) =
            (0..rooms.len()).partition(|&idx| rooms.room(idx).accessible_from_main_room);

        let mut best: Option<Passage> = None;
        for &a in &isolated {
            if let Some(candidate) = closest_pair(rooms, a, accessible.iter().copied()) {
                if best.is_none_or(|current| candidate.distance < current.distance) {
                    best = Some(candidate);
                }
            }
        }

        match best {
            Some(passage) => passages.push(create_passage(grid, rooms, passage, passage_radius)),
            None => break,
        }
    }

    passages
}

/// Соединяет все комнаты так, чтобы из любой можно было дойти до любой.
///
/// Проходы прорезаются на карте без рамки. При меньше чем двух комнатах ничего не делает.
pub fn connect_rooms(
    grid: &mut Grid,
    rooms: &mut RoomGraph,
    passage_radius: u32,
) -> Vec<Passage> {
    if rooms.len() < 2 {
        return Vec::new();
    }

    rooms.set_main_room(0);

    let mut passages = connect_nearest(grid, rooms, passage_radius);
    let nearest = passages.len();
    passages.extend(enforce_accessibility(grid, rooms, passage_radius));

    tracing::debug!(
        rooms = rooms.len(),
        nearest,
        forced = passages.len() - nearest,
        "Комнаты соединены"
    );
    passages
}
