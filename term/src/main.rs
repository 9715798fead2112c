use anyhow::Context;
use clap::{Parser, ValueEnum};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use sapper_core::{CellCount, Coord, Game, GameConfig};
use tracing_subscriber::filter::LevelFilter;

mod input;
mod render;
mod session;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Preset {
    Beginner,
    Intermediate,
    Expert,
}

impl From<Preset> for GameConfig {
    fn from(preset: Preset) -> Self {
        match preset {
            Preset::Beginner => GameConfig::beginner(),
            Preset::Intermediate => GameConfig::intermediate(),
            Preset::Expert => GameConfig::expert(),
        }
    }
}

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Starting board, individual dimensions below override it
    #[arg(short, long, value_enum, default_value_t = Preset::Beginner)]
    preset: Preset,

    /// Square board with this many cells per side
    #[arg(long, conflicts_with_all = ["rows", "cols"])]
    size: Option<Coord>,

    #[arg(long)]
    rows: Option<Coord>,

    #[arg(long)]
    cols: Option<Coord>,

    /// Number of mines
    #[arg(short, long)]
    mines: Option<CellCount>,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,
}

impl Args {
    fn game_config(&self) -> anyhow::Result<GameConfig> {
        let preset = GameConfig::from(self.preset);
        let rows = self.size.or(self.rows).unwrap_or(preset.rows);
        let cols = self.size.or(self.cols).unwrap_or(preset.cols);
        let mines = self.mines.unwrap_or(preset.mines);
        GameConfig::new(rows, cols, mines).context("invalid board configuration")
    }
}

/// Maps the `log` verbosity picked on the command line onto the subscriber's filter.
fn level_filter(level: log::LevelFilter) -> LevelFilter {
    match level {
        log::LevelFilter::Off => LevelFilter::OFF,
        log::LevelFilter::Error => LevelFilter::ERROR,
        log::LevelFilter::Warn => LevelFilter::WARN,
        log::LevelFilter::Info => LevelFilter::INFO,
        log::LevelFilter::Debug => LevelFilter::DEBUG,
        log::LevelFilter::Trace => LevelFilter::TRACE,
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(level_filter(args.verbose.log_level_filter()))
        .with_writer(std::io::stderr)
        .init();
    log::debug!("seed: {:?}", args.seed);

    let config = args.game_config()?;
    let mut rng = match args.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    };

    let mut game = Game::new(config, &mut rng).context("could not generate board")?;
    log::info!("Started {}x{} game with {} mines", config.rows, config.cols, config.mines);

    session::run(
        &mut game,
        &mut rng,
        std::io::stdin().lock(),
        std::io::stdout().lock(),
    )
}
