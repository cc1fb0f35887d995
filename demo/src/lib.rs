//! Animated A* shortest paths on random weighted grid graphs.
//!
//! Each round generates a fresh graph, searches a path from its first node to
//! the node at index `width - 1`, and highlights one path node per frame.
//! When the path is exhausted the next round starts.

pub mod animation;
pub mod config;
pub mod render;

use std::error::Error;
use std::fmt;

use gridpath_core::{EventLoopDriver, HeadlessDriver};
use gridpath_winit::{WinitConfig, WinitDriver};
use rand::SeedableRng;
use rand::rngs::StdRng;

pub use animation::Animation;
pub use config::{Config, ConfigError};

/// Why [`run`] stopped early.
#[derive(Debug)]
pub enum DemoError {
    /// The configuration was rejected before anything started.
    Config(ConfigError),
    /// The frame loop backend failed.
    Backend(Box<dyn Error>),
}

impl DemoError {
    /// Process exit status: 2 for a bad configuration, 1 otherwise.
    pub fn exit_status(&self) -> u8 {
        match self {
            Self::Config(_) => 2,
            Self::Backend(_) => 1,
        }
    }
}

impl fmt::Display for DemoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "invalid configuration: {e}"),
            Self::Backend(e) => write!(f, "backend: {e}"),
        }
    }
}

impl Error for DemoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Backend(e) => Some(e.as_ref()),
        }
    }
}

impl From<ConfigError> for DemoError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

/// Validate `config` and run the animation until the window is closed, or
/// for `config.headless_frames` frames without a window.
pub fn run(config: &Config) -> Result<(), DemoError> {
    let side = config.validate()?;

    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let animation = Animation::new(config.width, config.cell_size, rng);

    let result = match config.headless_frames {
        Some(frames) => {
            log::info!("running {frames} frames headless");
            HeadlessDriver {
                width: side as usize,
                height: side as usize,
                frames,
            }
            .run(animation)
        }
        None => WinitDriver::new(WinitConfig {
            title: "A* pathfinding".into(),
            width: side,
            height: side,
            fps: config.fps,
        })
        .run(animation),
    };
    result.map_err(DemoError::Backend)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headless_run_completes() {
        let config = Config {
            width: 6,
            cell_size: 4,
            seed: Some(17),
            headless_frames: Some(200),
            ..Config::default()
        };
        run(&config).unwrap();
    }

    #[test]
    fn invalid_config_is_rejected_before_running() {
        let config = Config {
            width: 0,
            headless_frames: Some(1),
            ..Config::default()
        };
        let err = run(&config).unwrap_err();
        assert!(matches!(err, DemoError::Config(ConfigError::NonPositiveWidth(0))));
        assert_eq!(err.exit_status(), 2);
        assert_eq!(
            err.to_string(),
            "invalid configuration: config: width must be positive, got 0"
        );
    }

    #[test]
    fn oversized_window_is_a_config_error() {
        let config = Config {
            width: 5_000,
            headless_frames: Some(1),
            ..Config::default()
        };
        let err = run(&config).unwrap_err();
        assert!(matches!(err, DemoError::Config(ConfigError::WindowTooLarge { .. })));
        assert_eq!(err.exit_status(), 2);
    }

    #[test]
    fn backend_errors_exit_with_one() {
        let err = DemoError::Backend("surface lost".into());
        assert_eq!(err.exit_status(), 1);
        assert_eq!(err.to_string(), "backend: surface lost");
        assert!(err.source().is_some());
    }
}
