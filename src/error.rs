// src/error.rs
//! Ошибки генератора пещер
//!
//! - [`ConfigError`] — некорректные параметры, проверяются до запуска любого этапа
//! - [`GridError`] — обращение за пределы сетки
//! - [`CaveError`] — общая ошибка крейта (конфигурация, ввод-вывод, форматы)

use thiserror::Error;

/// Ошибка валидации параметров генерации
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("map dimensions must be positive, got {width}x{height}")]
    NonPositiveDimensions { width: u32, height: u32 },

    #[error("map dimension {value} exceeds the maximum of {max}")]
    DimensionTooLarge { value: u32, max: u32 },

    #[error("fill percent must be within 0..=100, got {0}")]
    FillPercentOutOfRange(u32),

    #[error("passage radius {radius} exceeds the longer map side {extent}")]
    PassageRadiusOutOfRange { radius: u32, extent: u32 },

    #[error("border size {border} makes the framed map exceed {max} tiles per side")]
    BorderTooLarge { border: u32, max: u32 },
}

/// Обращение к клетке вне сетки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("coordinate ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
    },
}

#[derive(Debug, Error)]
pub enum CaveError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Grid(#[from] GridError),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse TOML configuration: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to serialize room report: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to write image: {0}")]
    Image(#[from] image::ImageError),

    #[error("failed to create image buffer of {width}x{height}")]
    ImageBuffer { width: u32, height: u32 },
}
