/// Command-line configuration.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::entities::DEFAULT_FPS;

#[derive(Parser, Debug, Clone)]
#[command(name = "balloon_pop", about = "Pop the balloons, spare the bombs")]
pub struct Config {
    /// Frame-rate cap for the menu and game loops.
    #[arg(long, default_value_t = DEFAULT_FPS, value_parser = clap::value_parser!(u32).range(1..))]
    pub fps: u32,

    /// Seed the balloon RNG for a reproducible session.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write logs here (filter with RUST_LOG).  Without it nothing is logged,
    /// since the terminal belongs to the game.
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fps: DEFAULT_FPS,
            seed: None,
            log_file: None,
        }
    }
}

impl Config {
    /// Time budget for one frame.
    pub fn frame_duration(&self) -> Duration {
        Duration::from_secs(1) / self.fps.max(1)
    }
}
