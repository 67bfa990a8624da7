use anyhow::Result;
use bet_snake::game::GameConfig;
use bet_snake::logging::{LogTarget, init_logging};
use bet_snake::modes::{PlayMode, SimulateConfig, SimulateMode};
use bet_snake::render::MarkerStyle;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bet_snake")]
#[command(version, about = "A snake that roams the grid and chases your bets")]
struct Cli {
    /// Run interactively or as a headless simulation
    #[arg(long, default_value = "play")]
    mode: Mode,

    /// JSON config file; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Grid width (simulate mode, or when the terminal size is unknown)
    #[arg(long)]
    cols: Option<u32>,

    /// Grid height (simulate mode, or when the terminal size is unknown)
    #[arg(long)]
    rows: Option<u32>,

    /// Start with single-bet mode (each bet replaces the previous one)
    #[arg(long)]
    single: bool,

    /// How bets and the snake are drawn
    #[arg(long, default_value = "shape")]
    style: Style,

    /// Seed for reproducible roaming and bet looks
    #[arg(long)]
    seed: Option<u64>,

    /// Frames to run in simulate mode
    #[arg(long, default_value = "3600")]
    frames: u64,

    /// Place a random bet every N frames in simulate mode (0 = never)
    #[arg(long, default_value = "90")]
    bet_every: u64,

    /// Write logs to this file (play mode logs nowhere without it)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log level filter, overridden by RUST_LOG [default: info for play, warn for simulate]
    #[arg(long)]
    log_level: Option<String>,
}

#[derive(Clone, ValueEnum)]
enum Mode {
    /// Place bets with the mouse or keyboard and watch the snake chase them
    Play,
    /// Run a seeded, headless simulation and print a summary
    Simulate,
}

#[derive(Clone, Copy, ValueEnum)]
enum Style {
    Emoji,
    Shape,
    Flat,
}

impl From<Style> for MarkerStyle {
    fn from(style: Style) -> Self {
        match style {
            Style::Emoji => MarkerStyle::Emoji,
            Style::Shape => MarkerStyle::Shape,
            Style::Flat => MarkerStyle::Flat,
        }
    }
}

impl Cli {
    /// Load the config file, if any, and apply flag overrides
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::load(path)?,
            None => GameConfig::default(),
        };

        if let Some(cols) = self.cols {
            config.grid_cols = cols;
        }
        if let Some(rows) = self.rows {
            config.grid_rows = rows;
        }
        if self.single {
            config.multi_mode = false;
        }

        config.validate()?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.game_config()?;

    // Dispatch to appropriate mode
    match cli.mode {
        Mode::Play => {
            let target = match &cli.log_file {
                Some(path) => LogTarget::File(path),
                None => LogTarget::Off,
            };
            init_logging(target, cli.log_level.as_deref().unwrap_or("info"))?;

            let mut play_mode = PlayMode::new(config, cli.style.into(), cli.seed)?;
            play_mode.run().await?;
        }
        Mode::Simulate => {
            let target = match &cli.log_file {
                Some(path) => LogTarget::File(path),
                None => LogTarget::Stderr,
            };
            init_logging(target, cli.log_level.as_deref().unwrap_or("warn"))?;

            let simulate_config = SimulateConfig {
                frames: cli.frames,
                bet_every: cli.bet_every,
                ..SimulateConfig::new(config, cli.seed.unwrap_or(0))
            };
            let mut simulate_mode = SimulateMode::new(simulate_config)?;
            simulate_mode.print_header();
            let report = simulate_mode.run();
            println!("{}", report);
        }
    }

    Ok(())
}
