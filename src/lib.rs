use std::{
    error,
    fmt::Display,
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::{ArgGroup, Parser};

pub mod board;
pub mod render;
pub mod storage;
pub mod trace;
pub mod tracer;

pub use board::{Board, BoardBuilder, CellKind};
pub use render::{ConsoleRenderer, GuiRenderer, OutputMode, Renderer};
pub use storage::{Discipline, Storage};
pub use trace::TraceState;
pub use tracer::{BestPaths, CircuitTracer};

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    MissingDimensions,
    InvalidDimensions(String),
    InconsistentRow(usize, usize, usize), // (row index, expected column count, given column count)
    RowCountMismatch(usize, usize),       // (expected row count, given row count)
    InvalidCellText(String),
    InvalidCharForBoard(char),
    MultipleStartPosition(Position, Position),
    MultipleEndPosition(Position, Position),
    NoStartPosition,
    NoEndPosition,
    EmptyBoard,
    EmptyStorage,
    NonAdjacentExtension(Position, Position), // (current head, requested position)
    RevisitExtension(Position),
    BlockedExtension(Position),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::MissingDimensions => write!(
                f,
                "Expect a leading line with the row and column count of board."
            ),
            Error::InvalidDimensions(s) => write!(
                f,
                "Invalid text({}) for dimensions of board, expect \"<rows> <cols>\".",
                s
            ),
            Error::InconsistentRow(r_ind, expect_col_n, this_col_n) => write!(
                f,
                "Expect {} column(s) in each row, given {} in row {}.",
                expect_col_n, this_col_n, r_ind
            ),
            Error::RowCountMismatch(expect_row_n, this_row_n) => write!(
                f,
                "Expect {} row(s) in board, given {}.",
                expect_row_n, this_row_n
            ),
            Error::InvalidCellText(s) => {
                write!(f, "Invalid text({}) for cell, expect a single character.", s)
            }
            Error::InvalidCharForBoard(c) => write!(f, "Invalid character({}) for board.", c),
            Error::MultipleStartPosition(last_pos, pos) => write!(
                f,
                "Expect only one start position, given two({}, {}).",
                last_pos, pos
            ),
            Error::MultipleEndPosition(last_pos, pos) => write!(
                f,
                "Expect only one end position, given two({}, {}).",
                last_pos, pos
            ),
            Error::NoStartPosition => write!(f, "No start position in board."),
            Error::NoEndPosition => write!(f, "No end position in board."),
            Error::EmptyBoard => write!(f, "Given board has no cells."),
            Error::EmptyStorage => write!(f, "Can't retrieve from an empty storage."),
            Error::NonAdjacentExtension(head, pos) => write!(
                f,
                "Can't extend trace from {} to non-adjacent position {}.",
                head, pos
            ),
            Error::RevisitExtension(pos) => {
                write!(f, "Can't extend trace to {}, it's already on the trace.", pos)
            }
            Error::BlockedExtension(pos) => {
                write!(f, "Can't extend trace to {}, it isn't open on board.", pos)
            }
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
#[command(
    name = "circuit_tracer",
    about = "Search all shortest traces between start and end on a circuit board.",
    group(ArgGroup::new("storage").required(true).args(["stack", "queue"])),
    group(ArgGroup::new("output").required(true).args(["console", "gui"]))
)]
pub struct CLIArgs {
    /// Use a stack as storage of search states
    #[arg(short = 's')]
    pub stack: bool,
    /// Use a queue as storage of search states
    #[arg(short = 'q')]
    pub queue: bool,
    /// Print results to console
    #[arg(short = 'c')]
    pub console: bool,
    /// Show results in GUI(not implemented, falls back to console)
    #[arg(short = 'g')]
    pub gui: bool,
    pub input_path: PathBuf,
}

impl CLIArgs {
    pub fn discipline(&self) -> Discipline {
        if self.queue {
            Discipline::Queue
        } else {
            Discipline::Stack
        }
    }

    pub fn output_mode(&self) -> OutputMode {
        if self.gui {
            OutputMode::Gui
        } else {
            OutputMode::Console
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn all_dirs() -> &'static [Direction] {
        static ALL_DIRECTIONS: [Direction; 4] = [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ];

        &ALL_DIRECTIONS
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    r: usize,
    c: usize,
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.r, self.c)
    }
}

impl Position {
    pub fn new(r: usize, c: usize) -> Self {
        Self { r, c }
    }

    pub fn r(&self) -> usize {
        self.r
    }

    pub fn c(&self) -> usize {
        self.c
    }

    /// Position one step away along `dir`, `None` if the step leaves the first row or column.
    pub fn neighbor(&self, dir: Direction) -> Option<Self> {
        match dir {
            Direction::Up if self.r > 0 => Some(Self::new(self.r - 1, self.c)),
            Direction::Down => Some(Self::new(self.r + 1, self.c)),
            Direction::Left if self.c > 0 => Some(Self::new(self.r, self.c - 1)),
            Direction::Right => Some(Self::new(self.r, self.c + 1)),
            _ => None,
        }
    }

    pub fn manhattan_distance(&self, other: &Position) -> usize {
        self.r.abs_diff(other.r) + self.c.abs_diff(other.c)
    }

    pub fn is_adjacent(&self, other: &Position) -> bool {
        self.manhattan_distance(other) == 1
    }
}

pub fn read_board<P: AsRef<Path>>(path: P) -> Result<Board> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let mut lines = reader.lines().enumerate();
    let mut builder = loop {
        let Some((ind, line)) = lines.next() else {
            return Err(Error::MissingDimensions.into());
        };
        let line = line.with_context(|| {
            format!(
                "Failed to read line {} in given file({}).",
                ind + 1,
                path.as_ref().display()
            )
        })?;
        if !line.trim().is_empty() {
            break BoardBuilder::from_dimensions(line.as_str()).with_context(|| {
                format!(
                    "Failed to parse dimensions in line {} of given file({}).",
                    ind + 1,
                    path.as_ref().display()
                )
            })?;
        }
    };

    for (ind, line) in lines {
        let line = line.with_context(|| {
            format!(
                "Failed to read line {} in given file({}).",
                ind + 1,
                path.as_ref().display()
            )
        })?;
        builder.add_row(line.as_str()).with_context(|| {
            format!(
                "Failed to parse line {} in given file({}).",
                ind + 1,
                path.as_ref().display()
            )
        })?;
    }

    Ok(builder.build()?)
}
