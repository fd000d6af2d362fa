//! Random game levels: scattered walls whose density grows with the level
//! number, re-rolled until the end can be reached.

use log::{trace, warn};
use maze_core::{Grid, Point, Range};
use maze_paths::PathRange;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::error::{LevelError, Result};

/// Level generation settings.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LevelConfig {
    pub rows: i32,
    pub cols: i32,
    /// Wall probability on level 1.
    pub base_wall_chance: f64,
    /// Added per level after the first.
    pub wall_chance_step: f64,
    /// Upper bound on the wall probability.
    pub max_wall_chance: f64,
    /// How many times an unsolvable grid is re-rolled before giving up.
    pub max_attempts: u32,
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self {
            rows: 20,
            cols: 40,
            base_wall_chance: 0.2,
            wall_chance_step: 0.05,
            max_wall_chance: 0.5,
            max_attempts: 20,
        }
    }
}

impl LevelConfig {
    /// Wall probability for `level` (1-based), clamped to `[0, 1]`.
    pub fn wall_chance(&self, level: u32) -> f64 {
        let steps = level.saturating_sub(1) as f64;
        (self.base_wall_chance + steps * self.wall_chance_step)
            .min(self.max_wall_chance)
            .clamp(0.0, 1.0)
    }

    /// Check that start and end columns can never collide.
    pub fn validate(&self) -> Result<()> {
        if self.rows < 1 || self.cols < 4 {
            return Err(LevelError::TooSmall {
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }

    #[inline]
    pub fn bounds(&self) -> Range {
        Range::sized(self.rows, self.cols)
    }
}

/// One generated level.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Level {
    pub grid: Grid,
    pub level: u32,
    pub wall_chance: f64,
    /// Grids rolled, the returned one included.
    pub attempts: u32,
    /// Whether the end is reachable. Only `false` when every attempt failed.
    pub solvable: bool,
}

/// Level and maze generator.
pub struct LevelGen<R: Rng> {
    pub rng: R,
    config: LevelConfig,
    paths: PathRange,
}

impl LevelGen<StdRng> {
    /// Deterministic generator: the same seed yields the same levels.
    pub fn seeded(config: LevelConfig, seed: u64) -> Result<Self> {
        Self::new(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> LevelGen<R> {
    pub fn new(config: LevelConfig, rng: R) -> Result<Self> {
        config.validate()?;
        let paths = PathRange::new(config.bounds());
        Ok(Self { rng, config, paths })
    }

    #[inline]
    pub fn config(&self) -> &LevelConfig {
        &self.config
    }

    /// Replace the settings, e.g. to change the board size between sessions.
    pub fn set_config(&mut self, config: LevelConfig) -> Result<()> {
        config.validate()?;
        self.paths.set_range(config.bounds());
        self.config = config;
        Ok(())
    }

    /// Generate level `level` (1-based).
    ///
    /// The start lies in the left quarter of the board and the end in the
    /// right quarter. Grids are re-rolled until BFS connects them, at most
    /// `max_attempts` extra times; after that the last grid is returned
    /// with `solvable == false`.
    pub fn level(&mut self, level: u32) -> Result<Level> {
        if level == 0 {
            return Err(LevelError::ZeroLevel);
        }
        let wall_chance = self.config.wall_chance(level);
        let mut attempts = 0;
        loop {
            attempts += 1;
            let grid = self.roll(wall_chance)?;
            let solvable = self
                .paths
                .bfs_path(&grid, grid.start(), grid.end())
                .found();
            trace!(
                "level {level} attempt {attempts}: {} -> {}, {} walls, solvable {solvable}",
                grid.start(),
                grid.end(),
                grid.wall_count(),
            );
            if solvable || attempts > self.config.max_attempts {
                if !solvable {
                    warn!("level {level}: no solvable grid after {attempts} attempts");
                }
                return Ok(Level {
                    grid,
                    level,
                    wall_chance,
                    attempts,
                    solvable,
                });
            }
        }
    }

    /// Roll one grid with the configured size.
    fn roll(&mut self, wall_chance: f64) -> Result<Grid> {
        let LevelConfig { rows, cols, .. } = self.config;
        let quarter = f64::from(cols) / 4.0;

        let start = Point::new(
            self.rng.random_range(0..rows),
            (self.rng.random::<f64>() * quarter) as i32,
        );
        let end = Point::new(
            self.rng.random_range(0..rows),
            (f64::from(cols) - 1.0 - self.rng.random::<f64>() * quarter).floor() as i32,
        );

        let rng = &mut self.rng;
        let grid = Grid::with_walls(rows, cols, start, end, |_| rng.random_bool(wall_chance))?;
        Ok(grid)
    }
}
