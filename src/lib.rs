pub mod border;
pub mod config;
pub mod error;
pub mod fill;
pub mod generator;
pub mod grid;
pub mod region;
pub mod room;
pub mod smoothing;

pub use config::CaveGenerationParams;
pub use error::{CaveError, ConfigError, GridError};
pub use generator::{Cave, GenerationWarning, generate_cave, generate_cave_with_seed};
pub use grid::{Coord, Grid, Tile};
pub use room::{Passage, Room, RoomGraph};
