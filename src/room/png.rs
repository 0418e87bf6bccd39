// src/room/png.rs
//! Визуализация связей между комнатами
//!
//! Карта рисуется в оттенках серого, поверх неё — отрезки между центрами
//! соединённых комнат и точки в самих центрах. Главная комната отмечается
//! отдельным цветом. Координаты комнат сдвигаются на толщину рамки.

use crate::border::to_framed;
use crate::error::CaveError;
use crate::generator::Cave;
use crate::grid::Tile;
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_line_segment_mut};

const WALL_COLOR: Rgb<u8> = Rgb([40, 36, 32]);
const FLOOR_COLOR: Rgb<u8> = Rgb([200, 190, 170]);
const CONNECTION_COLOR: Rgb<u8> = Rgb([220, 40, 40]);
const CENTROID_COLOR: Rgb<u8> = Rgb([40, 90, 220]);
const MAIN_ROOM_COLOR: Rgb<u8> = Rgb([40, 180, 60]);

/// Рисует карту пещеры со связями комнат
#[must_use]
pub fn render_connections(cave: &Cave) -> RgbImage {
    let grid = &cave.grid;
    let mut img = RgbImage::new(grid.width, grid.height);

    for coord in grid.coords() {
        let color = match grid.get(coord) {
            Some(Tile::Floor) => FLOOR_COLOR,
            _ => WALL_COLOR,
        };
        img.put_pixel(coord.x as u32, coord.y as u32, color);
    }

    for (a, b) in cave.rooms.connection_pairs() {
        let start = to_framed(cave.rooms.room(a).centroid, cave.border_size);
        let end = to_framed(cave.rooms.room(b).centroid, cave.border_size);
        draw_line_segment_mut(
            &mut img,
            (start.x as f32, start.y as f32),
            (end.x as f32, end.y as f32),
            CONNECTION_COLOR,
        );
    }

    for room in cave.rooms.rooms() {
        let center = to_framed(room.centroid, cave.border_size);
        let color = if room.is_main_room {
            MAIN_ROOM_COLOR
        } else {
            CENTROID_COLOR
        };
        draw_filled_circle_mut(&mut img, (center.x, center.y), 1, color);
    }

    img
}

pub fn save_connections_png(cave: &Cave, path: &str) -> Result<(), CaveError> {
    render_connections(cave).save(path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CaveGenerationParams;
    use crate::generator::generate_cave;
    use rstest::rstest;

    #[rstest]
    fn overlay_matches_framed_grid_size() {
        let params = CaveGenerationParams {
            width: 40,
            height: 24,
            border_size: 2,
            seed: "overlay".to_string(),
            ..CaveGenerationParams::default()
        };
        let cave = generate_cave(&params).unwrap();
        let img = render_connections(&cave);
        assert_eq!(img.dimensions(), (44, 28));
        // Угол рамки всегда стена
        assert_eq!(*img.get_pixel(0, 0), WALL_COLOR);
    }
}
