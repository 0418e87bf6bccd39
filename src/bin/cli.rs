use cavegen::room::png::save_connections_png;
use cavegen::{CaveError, CaveGenerationParams, generate_cave};
use clap::Parser;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Генератор пещер на клеточных автоматах
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Путь к конфигурационному файлу в формате TOML (без него — параметры по умолчанию)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Сид генерации; перекрывает сид из конфигурации
    #[arg(short, long)]
    seed: Option<String>,

    /// Путь для сохранения карты (по умолчанию: ./cave.png)
    #[arg(short, long, default_value = "cave.png")]
    output: PathBuf,

    /// Путь для JSON-сводки по комнатам и проходам
    #[arg(short, long)]
    rooms: Option<PathBuf>,

    /// Путь для PNG с наложенными связями комнат
    #[arg(long)]
    overlay: Option<PathBuf>,
}

#[derive(Serialize)]
struct RoomReport<'a> {
    seed: u64,
    width: u32,
    height: u32,
    border_size: u32,
    rooms: Vec<cavegen::room::graph::RoomSummary>,
    passages: &'a [cavegen::Passage],
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("cavegen=info,cavegen_cli=info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(false))
        .init();
}

fn main() -> Result<(), CaveError> {
    init_tracing();

    let cli = Cli::parse();

    let mut params = match &cli.config {
        Some(path) => {
            tracing::info!(path = %path.display(), "🔍 Загрузка конфигурации");
            CaveGenerationParams::from_toml_file(path)?
        }
        None => CaveGenerationParams::default(),
    };

    if let Some(seed) = cli.seed {
        params.seed = seed;
        params.use_random_seed = false;
    }

    let cave = generate_cave(&params)?;

    tracing::info!(path = %cli.output.display(), "Сохранение карты");
    cave.grid.save_as_png(&cli.output.to_string_lossy())?;

    if let Some(path) = &cli.rooms {
        let report = RoomReport {
            seed: cave.seed,
            width: cave.grid.width,
            height: cave.grid.height,
            border_size: cave.border_size,
            rooms: cave.rooms.report(),
            passages: &cave.passages,
        };
        fs::write(path, serde_json::to_string_pretty(&report)?)?;
        tracing::info!(path = %path.display(), "Сводка по комнатам сохранена");
    }

    if let Some(path) = &cli.overlay {
        save_connections_png(&cave, &path.to_string_lossy())?;
        tracing::info!(path = %path.display(), "Карта связей сохранена");
    }

    tracing::info!(seed = cave.seed, "Готово!");
    Ok(())
}
