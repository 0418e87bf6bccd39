use cavegen::region::{filter_regions, find_regions};
use cavegen::room::connect_rooms;
use cavegen::{
    CaveGenerationParams, Coord, Grid, RoomGraph, Tile, generate_cave, generate_cave_with_seed,
};
use proptest::prelude::*;
use rstest::{fixture, rstest};

#[fixture]
fn small_cave() -> CaveGenerationParams {
    CaveGenerationParams {
        width: 60,
        height: 40,
        fill_percent: 48,
        smoothing_iterations: 5,
        wall_threshold: 15,
        room_threshold: 15,
        passage_radius: 1,
        border_size: 1,
        seed: "pipeline".to_string(),
        ..CaveGenerationParams::default()
    }
}

#[rstest]
fn same_seed_gives_same_cave(small_cave: CaveGenerationParams) {
    let first = generate_cave(&small_cave).unwrap();
    let second = generate_cave(&small_cave).unwrap();

    assert_eq!(first.grid, second.grid);
    assert_eq!(first.passages, second.passages);
    assert_eq!(
        first.rooms.connection_pairs(),
        second.rooms.connection_pairs()
    );
}

#[rstest]
fn framed_edges_are_walls(small_cave: CaveGenerationParams) {
    let cave = generate_cave(&small_cave).unwrap();
    let grid = &cave.grid;
    assert_eq!((grid.width, grid.height), (62, 42));
    for coord in grid.coords() {
        let on_frame = coord.x == 0
            || coord.y == 0
            || coord.x == grid.width as i32 - 1
            || coord.y == grid.height as i32 - 1;
        if on_frame {
            assert_eq!(grid.get(coord), Some(Tile::Wall), "frame cell {coord:?}");
        }
    }
}

#[rstest]
fn connected_cave_has_a_single_floor_region(small_cave: CaveGenerationParams) {
    let cave = generate_cave(&small_cave).unwrap();
    assert!(cave.rooms.is_fully_connected());
    assert_eq!(
        find_regions(&cave.grid, Tile::Floor).len(),
        usize::from(!cave.rooms.is_empty())
    );
}

#[rstest]
fn filter_then_connect_on_handmade_map() {
    // Две комнаты по 10 клеток на расстоянии 3 и одна крошечная область
    let mut grid = Grid::from_rows(&[
        "###########",
        "#.#########",
        "###########",
        "##.....####",
        "##.....####",
        "###########",
        "###########",
        "#####.....#",
        "#####.....#",
        "###########",
    ]);

    let outcome = filter_regions(&mut grid, 0, 5);
    assert_eq!(outcome.removed_floor_regions, 1);
    assert_eq!(grid.get(Coord::new(1, 1)), Some(Tile::Wall));

    let mut rooms = RoomGraph::from_regions(outcome.room_regions, &grid);
    assert_eq!(rooms.len(), 2);
    assert!(rooms.rooms().iter().all(|room| room.size() == 10));

    let passages = connect_rooms(&mut grid, &mut rooms, 1);

    assert_eq!(passages.len(), 1);
    assert_eq!(passages[0].distance, 3);
    assert!(rooms.are_connected(0, 1));
    assert_eq!(find_regions(&grid, Tile::Floor).len(), 1);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn prop_every_room_is_reachable(seed in any::<u64>(), fill_percent in 40u32..55) {
        let params = CaveGenerationParams {
            width: 40,
            height: 30,
            fill_percent,
            wall_threshold: 10,
            room_threshold: 10,
            passage_radius: 1,
            ..CaveGenerationParams::default()
        };
        let cave = generate_cave_with_seed(&params, seed).unwrap();

        prop_assert!(cave.rooms.is_fully_connected());
        prop_assert!(cave.rooms.all_accessible() || cave.rooms.len() < 2);
        for (a, b) in cave.rooms.connection_pairs() {
            prop_assert!(cave.rooms.are_connected(b, a));
        }
    }
}
