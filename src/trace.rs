use std::fmt::Display;

use crate::{
    board::{CellKind, TRACE_CHAR},
    Board, Error, Position,
};

/// One candidate trace from the start of a board.
///
/// The start cell itself is not part of the path, the first entry is always one of its
/// neighbors. A trace is never changed once created, [`TraceState::extend`] gives a new one,
/// so states sharing a prefix can sit in storage independently.
#[derive(Debug, Clone)]
pub struct TraceState<'a> {
    board: &'a Board,
    path: Vec<Position>,
    visited: Vec<bool>,
}

impl<'a> TraceState<'a> {
    /// Trace with a single entry at `pos`, which must be an open neighbor of the board's start.
    pub fn seed(board: &'a Board, pos: Position) -> Result<Self, Error> {
        let start_pos = board.starting_position();
        if !start_pos.is_adjacent(&pos) {
            return Err(Error::NonAdjacentExtension(start_pos.clone(), pos));
        }
        let Some(ind) = board.pos_to_ind(&pos).filter(|_| board.is_open(&pos)) else {
            return Err(Error::BlockedExtension(pos));
        };

        let mut visited = vec![false; board.cell_n()];
        visited[ind] = true;
        Ok(Self {
            board,
            path: vec![pos],
            visited,
        })
    }

    /// New trace with `pos` appended to the path of this one.
    pub fn extend(&self, pos: Position) -> Result<Self, Error> {
        let head = self.head();
        if !head.is_adjacent(&pos) {
            return Err(Error::NonAdjacentExtension(head.clone(), pos));
        }
        let Some(ind) = self.board.pos_to_ind(&pos).filter(|_| self.board.is_open(&pos)) else {
            return Err(Error::BlockedExtension(pos));
        };
        if self.visited[ind] {
            return Err(Error::RevisitExtension(pos));
        }

        let mut path = Vec::with_capacity(self.path.len() + 1);
        path.extend_from_slice(&self.path);
        path.push(pos);
        let mut visited = self.visited.clone();
        visited[ind] = true;

        Ok(Self {
            board: self.board,
            path,
            visited,
        })
    }

    /// Whether this trace can step onto `pos` next.
    pub fn is_open(&self, pos: &Position) -> bool {
        self.board.is_open(pos)
            && self
                .board
                .pos_to_ind(pos)
                .is_some_and(|ind| !self.visited[ind])
    }

    pub fn is_complete(&self) -> bool {
        self.head() == self.board.ending_position()
    }

    pub fn path_len(&self) -> usize {
        self.path.len()
    }

    pub fn path(&self) -> &[Position] {
        &self.path
    }

    pub fn head(&self) -> &Position {
        self.path
            .last()
            .expect("trace path always holds its seed position")
    }

    pub fn board(&self) -> &'a Board {
        self.board
    }
}

impl Display for TraceState<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for r in 0..self.board.num_rows() {
            let row_str = (0..self.board.num_cols())
                .map(|c| {
                    let pos = Position::new(r, c);
                    let on_path = self
                        .board
                        .pos_to_ind(&pos)
                        .is_some_and(|ind| self.visited[ind]);
                    match self.board.cell_kind(&pos) {
                        Some(CellKind::Open) if on_path => TRACE_CHAR,
                        Some(CellKind::Open) => ' ',
                        Some(kind) => kind.to_char(),
                        None => ' ',
                    }
                })
                .map(String::from)
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(f, "{}", row_str)?;
        }

        Ok(())
    }
}
