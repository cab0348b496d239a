use std::{fmt::Display, str::FromStr};

use crate::{Error, Position};

pub const OPEN_CHAR: char = 'O';
pub const BLOCKED_CHAR: char = 'X';
pub const START_CHAR: char = '1';
pub const END_CHAR: char = '2';
pub const TRACE_CHAR: char = 'T';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Open,
    Blocked,
    Start,
    End,
}

impl TryFrom<char> for CellKind {
    type Error = Error;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            OPEN_CHAR => Ok(CellKind::Open),
            BLOCKED_CHAR => Ok(CellKind::Blocked),
            START_CHAR => Ok(CellKind::Start),
            END_CHAR => Ok(CellKind::End),
            other => Err(Error::InvalidCharForBoard(other)),
        }
    }
}

impl Display for CellKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl CellKind {
    pub fn to_char(&self) -> char {
        match self {
            CellKind::Open => OPEN_CHAR,
            CellKind::Blocked => BLOCKED_CHAR,
            CellKind::Start => START_CHAR,
            CellKind::End => END_CHAR,
        }
    }
}

/// Grid of cells with exactly one start and one end, immutable once built.
#[derive(Debug)]
pub struct Board {
    cells: Vec<CellKind>,
    row_n: usize,
    col_n: usize,
    start_pos: Position,
    end_pos: Position,
}

impl Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.cells.chunks(self.col_n) {
            let row_str = row
                .iter()
                .map(|cell| cell.to_string())
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(f, "{}", row_str)?;
        }

        Ok(())
    }
}

impl FromStr for Board {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut lines = s.lines().filter(|line| !line.trim().is_empty());
        let dim_line = lines.next().ok_or(Error::MissingDimensions)?;
        let mut builder = BoardBuilder::from_dimensions(dim_line)?;
        for line in lines {
            builder.add_row(line)?;
        }

        builder.build()
    }
}

impl Board {
    pub fn cell_kind(&self, pos: &Position) -> Option<CellKind> {
        self.pos_to_ind(pos).map(|ind| self.cells[ind])
    }

    /// Whether a trace may step onto `pos`: inside the board and either open or the end.
    pub fn is_open(&self, pos: &Position) -> bool {
        self.cell_kind(pos)
            .is_some_and(|kind| matches!(kind, CellKind::Open | CellKind::End))
    }

    pub fn starting_position(&self) -> &Position {
        &self.start_pos
    }

    pub fn ending_position(&self) -> &Position {
        &self.end_pos
    }

    pub fn num_rows(&self) -> usize {
        self.row_n
    }

    pub fn num_cols(&self) -> usize {
        self.col_n
    }

    pub fn cell_n(&self) -> usize {
        self.row_n * self.col_n
    }

    pub(crate) fn pos_to_ind(&self, pos: &Position) -> Option<usize> {
        if self.is_inside(pos) {
            Some(pos.r() * self.col_n + pos.c())
        } else {
            None
        }
    }

    fn is_inside(&self, pos: &Position) -> bool {
        pos.r() < self.row_n && pos.c() < self.col_n
    }
}

#[derive(Debug)]
pub struct BoardBuilder {
    cells: Vec<CellKind>,
    expect_row_n: usize,
    expect_col_n: usize,
    row_n: usize,
    start_pos: Option<Position>,
    end_pos: Option<Position>,
}

impl BoardBuilder {
    pub fn new(expect_row_n: usize, expect_col_n: usize) -> Self {
        Self {
            cells: Vec::new(),
            expect_row_n,
            expect_col_n,
            row_n: 0,
            start_pos: None,
            end_pos: None,
        }
    }

    /// Builder sized by a `<rows> <cols>` line.
    pub fn from_dimensions(text: &str) -> Result<Self, Error> {
        let dims = text
            .split_whitespace()
            .map(|s| s.parse::<usize>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| Error::InvalidDimensions(text.to_string()))?;
        match dims[..] {
            [row_n, col_n] if row_n.checked_mul(col_n).is_some() => {
                Ok(Self::new(row_n, col_n))
            }
            _ => Err(Error::InvalidDimensions(text.to_string())),
        }
    }

    /// Add one row of whitespace separated cells, blank lines are skipped.
    pub fn add_row(&mut self, text: &str) -> Result<(), Error> {
        if text.trim().is_empty() {
            return Ok(());
        }

        let cell_texts = text.split_whitespace().collect::<Vec<_>>();
        if cell_texts.len() != self.expect_col_n {
            return Err(Error::InconsistentRow(
                self.row_n,
                self.expect_col_n,
                cell_texts.len(),
            ));
        }

        for (ind, cell_text) in cell_texts.into_iter().enumerate() {
            let mut chars = cell_text.chars();
            let (Some(c), None) = (chars.next(), chars.next()) else {
                return Err(Error::InvalidCellText(cell_text.to_string()));
            };

            let pos = Position::new(self.row_n, ind);
            let kind = CellKind::try_from(c)?;
            match kind {
                CellKind::Start => {
                    if let Some(last_pos) = self.start_pos.as_ref() {
                        return Err(Error::MultipleStartPosition(last_pos.clone(), pos));
                    }

                    self.start_pos = Some(pos);
                }
                CellKind::End => {
                    if let Some(last_pos) = self.end_pos.as_ref() {
                        return Err(Error::MultipleEndPosition(last_pos.clone(), pos));
                    }

                    self.end_pos = Some(pos);
                }
                CellKind::Open | CellKind::Blocked => (),
            }
            self.cells.push(kind);
        }
        self.row_n += 1;

        Ok(())
    }

    pub fn build(self) -> Result<Board, Error> {
        if self.expect_row_n == 0 || self.expect_col_n == 0 {
            return Err(Error::EmptyBoard);
        }
        if self.row_n != self.expect_row_n {
            return Err(Error::RowCountMismatch(self.expect_row_n, self.row_n));
        }
        debug_assert_eq!(self.cells.len(), self.row_n * self.expect_col_n);
        let Some(start_pos) = self.start_pos else {
            return Err(Error::NoStartPosition);
        };
        let Some(end_pos) = self.end_pos else {
            return Err(Error::NoEndPosition);
        };

        Ok(Board {
            cells: self.cells,
            row_n: self.row_n,
            col_n: self.expect_col_n,
            start_pos,
            end_pos,
        })
    }
}
