//! Terminal demo model: command-line options, board setup and the text
//! rendering of a search's exploration and path.
//!
//! Legend: `S` start, `E` end, `#` wall, `*` path, `o` explored, `.` untouched.

use log::info;
use maze_core::{Grid, Tile};
use maze_gen::{LevelConfig, LevelError, LevelGen};
use maze_paths::{Algorithm, ParseAlgorithmError, PathRange, SearchResult, manhattan};
use thiserror::Error;

/// Which board to search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Board {
    /// A random game level (1-based).
    Level(u32),
    /// A perfect maze of the given size.
    Maze { rows: i32, cols: i32 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub algorithms: Vec<Algorithm>,
    pub board: Board,
    pub seed: Option<u64>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            algorithms: vec![Algorithm::Bfs],
            board: Board::Level(1),
            seed: None,
        }
    }
}

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("unknown argument {0:?}")]
    UnknownArg(String),

    #[error("{0} expects a value")]
    MissingValue(&'static str),

    #[error("bad value {value:?} for {flag}")]
    BadValue { flag: &'static str, value: String },

    #[error(transparent)]
    Algorithm(#[from] ParseAlgorithmError),

    #[error(transparent)]
    Level(#[from] LevelError),
}

impl Options {
    /// Parse `[bfs|dfs|astar|all] [--level N | --maze RxC] [--seed N]`.
    pub fn parse(args: impl IntoIterator<Item = String>) -> Result<Self, DemoError> {
        let mut opts = Options::default();
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--level" => {
                    let v = args.next().ok_or(DemoError::MissingValue("--level"))?;
                    opts.board = Board::Level(number("--level", &v)?);
                }
                "--maze" => {
                    let v = args.next().ok_or(DemoError::MissingValue("--maze"))?;
                    let (rows, cols) = v.split_once(['x', 'X']).ok_or(DemoError::BadValue {
                        flag: "--maze",
                        value: v.clone(),
                    })?;
                    opts.board = Board::Maze {
                        rows: number("--maze", rows)?,
                        cols: number("--maze", cols)?,
                    };
                }
                "--seed" => {
                    let v = args.next().ok_or(DemoError::MissingValue("--seed"))?;
                    opts.seed = Some(number("--seed", &v)?);
                }
                "all" => opts.algorithms = Algorithm::ALL.to_vec(),
                s if s.starts_with('-') => return Err(DemoError::UnknownArg(arg)),
                s => opts.algorithms = vec![s.parse()?],
            }
        }
        Ok(opts)
    }
}

fn number<T: std::str::FromStr>(flag: &'static str, value: &str) -> Result<T, DemoError> {
    value.trim().parse().map_err(|_| DemoError::BadValue {
        flag,
        value: value.to_string(),
    })
}

/// Build the board and run every requested search on it.
pub fn run(opts: &Options) -> Result<String, DemoError> {
    let seed = opts.seed.unwrap_or_else(rand::random);
    info!("seed {seed}");
    let mut lg = LevelGen::seeded(LevelConfig::default(), seed)?;

    let mut out = String::new();
    let grid = match opts.board {
        Board::Level(n) => {
            let level = lg.level(n)?;
            out.push_str(&format!(
                "level {} (seed {seed}): wall chance {:.0}%, {} attempt(s){}\n",
                level.level,
                level.wall_chance * 100.0,
                level.attempts,
                if level.solvable { "" } else { ", unsolvable" },
            ));
            level.grid
        }
        Board::Maze { rows, cols } => {
            out.push_str(&format!("{rows}x{cols} maze (seed {seed})\n"));
            lg.maze(rows, cols)?
        }
    };
    out.push_str(&format!(
        "start {} end {}, distance to go {}\n",
        grid.start(),
        grid.end(),
        manhattan(grid.start(), grid.end()),
    ));

    let mut pr = PathRange::new(grid.bounds());
    for &alg in &opts.algorithms {
        let r = alg.run(&mut pr, &grid, grid.start(), grid.end());
        let outcome = match r.steps() {
            Some(n) => format!("{n} steps"),
            None => "no path".to_string(),
        };
        out.push_str(&format!(
            "\n{alg} ({}): explored {}, {outcome}\n",
            alg.description(),
            r.explored(),
        ));
        out.push_str(&render(&grid, &r));
    }
    Ok(out)
}

/// Draw `grid` with the search's explored cells and path overlaid.
pub fn render(grid: &Grid, result: &SearchResult) -> String {
    const UNTOUCHED: u8 = 0;
    const EXPLORED: u8 = 1;
    const PATH: u8 = 2;

    let bounds = grid.bounds();
    let mut overlay = vec![UNTOUCHED; bounds.len()];
    let path = result.path.as_deref().unwrap_or_default();
    for (points, mark) in [(result.visited.as_slice(), EXPLORED), (path, PATH)] {
        for &p in points {
            if let Some(i) = bounds.index(p) {
                overlay[i] = mark;
            }
        }
    }

    let mut out = String::with_capacity(bounds.len() + bounds.rows() as usize);
    for r in 0..grid.rows() {
        for cell in grid.row(r) {
            let ch = match (cell.tile(), bounds.index(cell.pos()).map(|i| overlay[i])) {
                (Tile::Floor, Some(PATH)) => '*',
                (Tile::Floor, Some(EXPLORED)) => 'o',
                (tile, _) => tile.glyph(),
            };
            out.push(ch);
        }
        out.push('\n');
    }
    out
}
