//! Startup configuration and command-line flags.

use std::fmt;

use clap::Parser;

pub const DEFAULT_WIDTH: i32 = 50;
pub const DEFAULT_CELL_SIZE: i32 = 16;
pub const DEFAULT_FPS: u32 = 60;

/// Largest window side accepted, in pixels.
pub const MAX_WINDOW_SIDE: i32 = 16_384;

/// Animated A* shortest paths on random weighted grid graphs.
#[derive(Parser, Clone, Debug, PartialEq, Eq)]
#[command(name = "astar-demo", version)]
pub struct Config {
    /// Side of the square grid, in cells.
    #[arg(long, default_value_t = DEFAULT_WIDTH, allow_negative_numbers = true)]
    pub width: i32,

    /// Side of one cell, in pixels.
    #[arg(long, default_value_t = DEFAULT_CELL_SIZE, allow_negative_numbers = true)]
    pub cell_size: i32,

    /// Frames per second; one path node is shown per frame.
    #[arg(long, default_value_t = DEFAULT_FPS)]
    pub fps: u32,

    /// Seed for edge lengths. Random when omitted.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Run this many frames without opening a window, then exit.
    #[arg(long)]
    pub headless_frames: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            cell_size: DEFAULT_CELL_SIZE,
            fps: DEFAULT_FPS,
            seed: None,
            headless_frames: None,
        }
    }
}

/// A configuration value that cannot be used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    NonPositiveWidth(i32),
    NonPositiveCellSize(i32),
    ZeroFps,
    /// `width * cell_size` exceeds [`MAX_WINDOW_SIDE`].
    WindowTooLarge { width: i32, cell_size: i32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveWidth(w) => write!(f, "config: width must be positive, got {w}"),
            Self::NonPositiveCellSize(c) => {
                write!(f, "config: cell size must be positive, got {c}")
            }
            Self::ZeroFps => f.write_str("config: fps must be positive"),
            Self::WindowTooLarge { width, cell_size } => write!(
                f,
                "config: {width} cells of {cell_size} px exceed the {MAX_WINDOW_SIDE} px window limit"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    /// Check every field, returning the first problem found, or the window
    /// side in pixels.
    pub fn validate(&self) -> Result<u32, ConfigError> {
        if self.width <= 0 {
            return Err(ConfigError::NonPositiveWidth(self.width));
        }
        if self.cell_size <= 0 {
            return Err(ConfigError::NonPositiveCellSize(self.cell_size));
        }
        if self.fps == 0 {
            return Err(ConfigError::ZeroFps);
        }
        self.window_side()
    }

    /// Side of the square window in pixels.
    pub fn window_side(&self) -> Result<u32, ConfigError> {
        let too_large = ConfigError::WindowTooLarge {
            width: self.width,
            cell_size: self.cell_size,
        };
        match self.width.checked_mul(self.cell_size) {
            Some(side) if (1..=MAX_WINDOW_SIDE).contains(&side) => Ok(side as u32),
            _ => Err(too_large),
        }
    }
}
