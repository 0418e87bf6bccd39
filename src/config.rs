// src/config.rs
//! Конфигурация генерации пещер
//!
//! Этот модуль определяет все параметры, управляющие генерацией одной карты:
//! - Размеры карты и ширина рамки
//! - Плотность начального заполнения и число итераций сглаживания
//! - Пороги удаления мелких областей стен и пола
//! - Соединение комнат и радиус проходов
//! - Сид генератора
//!
//! Структура поддерживает сериализацию в TOML/JSON для настройки через конфигурационные файлы.

use crate::error::{CaveError, ConfigError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Максимальный размер стороны карты (вместе с рамкой)
pub const MAX_DIMENSION: u32 = 16_384;

/// Основные параметры генерации пещеры
///
/// Все поля необязательны в TOML-файле: отсутствующие берут значения по умолчанию.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CaveGenerationParams {
    /// Ширина карты в клетках, без рамки (по умолчанию 128)
    #[serde(default = "default_width")]
    pub width: u32,

    /// Высота карты в клетках, без рамки (по умолчанию 72)
    #[serde(default = "default_height")]
    pub height: u32,

    /// Вероятность стены при начальном заполнении, в процентах (0–100)
    #[serde(default = "default_fill_percent")]
    pub fill_percent: u32,

    /// Количество проходов клеточного автомата
    #[serde(default = "default_smoothing_iterations")]
    pub smoothing_iterations: usize,

    /// Области стен меньше этого размера превращаются в пол
    #[serde(default = "default_wall_threshold")]
    pub wall_threshold: usize,

    /// Области пола меньше этого размера заливаются стеной, остальные становятся комнатами
    #[serde(default = "default_room_threshold")]
    pub room_threshold: usize,

    /// Соединять ли комнаты проходами
    #[serde(default = "default_connect_rooms")]
    pub connect_rooms: bool,

    /// Радиус кисти, которой прорезаются проходы (0 = линия в одну клетку)
    #[serde(default = "default_passage_radius")]
    pub passage_radius: u32,

    /// Толщина стены вокруг готовой карты
    #[serde(default = "default_border_size")]
    pub border_size: u32,

    /// Сид: число используется как есть, любая другая строка хешируется
    #[serde(default)]
    pub seed: String,

    /// Игнорировать `seed` и взять сид из текущего времени
    #[serde(default)]
    pub use_random_seed: bool,
}

impl CaveGenerationParams {
    /// Загружает параметры из TOML-файла
    ///
    /// # Пример
    /// ```toml
    /// # cave.toml
    /// width = 96
    /// height = 64
    /// fill_percent = 48
    /// seed = "dwarf fortress"
    /// ```
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, CaveError> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, CaveError> {
        let params: Self = toml::from_str(contents)?;
        Ok(params)
    }

    /// Проверяет параметры до запуска генерации.
    ///
    /// Неотрицательность порогов, радиуса и рамки гарантируется беззнаковыми типами.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::NonPositiveDimensions {
                width: self.width,
                height: self.height,
            });
        }

        for value in [self.width, self.height] {
            if value > MAX_DIMENSION {
                return Err(ConfigError::DimensionTooLarge {
                    value,
                    max: MAX_DIMENSION,
                });
            }
        }

        if self.fill_percent > 100 {
            return Err(ConfigError::FillPercentOutOfRange(self.fill_percent));
        }

        let extent = self.width.max(self.height);
        if self.passage_radius > extent {
            return Err(ConfigError::PassageRadiusOutOfRange {
                radius: self.passage_radius,
                extent,
            });
        }

        // Рамка добавляется с обеих сторон
        let framed = u64::from(extent) + 2 * u64::from(self.border_size);
        if framed > u64::from(MAX_DIMENSION) {
            return Err(ConfigError::BorderTooLarge {
                border: self.border_size,
                max: MAX_DIMENSION,
            });
        }

        Ok(())
    }
}

fn default_width() -> u32 {
    128
}
fn default_height() -> u32 {
    72
}
fn default_fill_percent() -> u32 {
    47
}
fn default_smoothing_iterations() -> usize {
    5
}
fn default_wall_threshold() -> usize {
    50
}
fn default_room_threshold() -> usize {
    50
}
fn default_connect_rooms() -> bool {
    true
}
fn default_passage_radius() -> u32 {
    2
}
fn default_border_size() -> u32 {
    1
}

impl Default for CaveGenerationParams {
    fn default() -> Self {
        Self {
            width: 128,
            height: 72,
            fill_percent: 47,
            smoothing_iterations: 5,
            wall_threshold: 50,
            room_threshold: 50,
            connect_rooms: true,
            passage_radius: 2,
            border_size: 1,
            seed: String::new(),
            use_random_seed: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_params_are_valid() {
        assert_eq!(CaveGenerationParams::default().validate(), Ok(()));
    }

    #[rstest]
    fn empty_toml_yields_defaults() {
        let params = CaveGenerationParams::from_toml_str("").unwrap();
        assert_eq!(params, CaveGenerationParams::default());
    }

    #[rstest]
    fn bundled_config_parses() {
        let params =
            CaveGenerationParams::from_toml_str(include_str!("../config/cave.toml")).unwrap();
        assert_eq!(params.validate(), Ok(()));
        assert!(params.connect_rooms);
    }

    #[rstest]
    fn partial_toml_overrides_only_given_fields() {
        let params = CaveGenerationParams::from_toml_str(
            r#"
            width = 40
            seed = "granite"
            connect_rooms = false
            "#,
        )
        .unwrap();

        assert_eq!(params.width, 40);
        assert_eq!(params.height, 72);
        assert_eq!(params.seed, "granite");
        assert!(!params.connect_rooms);
        assert_eq!(params.passage_radius, 2);
    }

    #[rstest]
    fn malformed_toml_is_rejected() {
        let result = CaveGenerationParams::from_toml_str("width = \"wide\"");
        assert!(matches!(result, Err(CaveError::Toml(_))));
    }

    #[rstest]
    #[case(0, 10)]
    #[case(10, 0)]
    #[case(0, 0)]
    fn zero_dimensions_are_rejected(#[case] width: u32, #[case] height: u32) {
        let params = CaveGenerationParams {
            width,
            height,
            ..CaveGenerationParams::default()
        };
        assert_eq!(
            params.validate(),
            Err(ConfigError::NonPositiveDimensions { width, height })
        );
    }

    #[rstest]
    fn oversized_dimension_is_rejected() {
        let params = CaveGenerationParams {
            width: MAX_DIMENSION + 1,
            ..CaveGenerationParams::default()
        };
        assert_eq!(
            params.validate(),
            Err(ConfigError::DimensionTooLarge {
                value: MAX_DIMENSION + 1,
                max: MAX_DIMENSION
            })
        );
    }

    #[rstest]
    #[case(0, true)]
    #[case(100, true)]
    #[case(101, false)]
    fn fill_percent_range(#[case] fill_percent: u32, #[case] valid: bool) {
        let params = CaveGenerationParams {
            fill_percent,
            ..CaveGenerationParams::default()
        };
        assert_eq!(params.validate().is_ok(), valid);
    }

    #[rstest]
    fn passage_radius_longer_than_map_is_rejected() {
        let params = CaveGenerationParams {
            width: 20,
            height: 10,
            passage_radius: 21,
            ..CaveGenerationParams::default()
        };
        assert_eq!(
            params.validate(),
            Err(ConfigError::PassageRadiusOutOfRange {
                radius: 21,
                extent: 20
            })
        );
    }

    #[rstest]
    fn border_overflowing_max_dimension_is_rejected() {
        let params = CaveGenerationParams {
            width: MAX_DIMENSION,
            border_size: 1,
            ..CaveGenerationParams::default()
        };
        assert!(matches!(
            params.validate(),
            Err(ConfigError::BorderTooLarge { border: 1, .. })
        ));
    }
}
