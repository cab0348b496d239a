use log::{debug, info, trace};

use crate::{Board, Direction, Discipline, Error, Storage, TraceState};

/// Complete traces tied for the shortest length found so far.
#[derive(Debug)]
pub struct BestPaths<'a> {
    shortest_len: usize,
    traces: Vec<TraceState<'a>>,
}

impl<'a> BestPaths<'a> {
    /// Accumulator that only accepts traces no longer than `len_bound`.
    pub fn new(len_bound: usize) -> Self {
        Self {
            shortest_len: len_bound,
            traces: Vec::new(),
        }
    }

    /// Keep `trace` if it ties the current shortest length, or restart from it if it's shorter.
    pub fn offer(&mut self, trace: TraceState<'a>) {
        let len = trace.path_len();
        if len < self.shortest_len {
            debug!("Found a shorter trace of length {} ending at {}.", len, trace.head());
            self.shortest_len = len;
            self.traces.clear();
            self.traces.push(trace);
        } else if len == self.shortest_len {
            self.traces.push(trace);
        }
    }

    pub fn shortest_len(&self) -> Option<usize> {
        if self.traces.is_empty() {
            None
        } else {
            Some(self.shortest_len)
        }
    }

    pub fn traces(&self) -> &[TraceState<'a>] {
        &self.traces
    }

    pub fn into_traces(self) -> Vec<TraceState<'a>> {
        self.traces
    }

    pub fn len(&self) -> usize {
        self.traces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.traces.is_empty()
    }
}

#[derive(Debug)]
pub struct CircuitTracer<'a> {
    board: &'a Board,
}

impl<'a> CircuitTracer<'a> {
    pub fn new(board: &'a Board) -> Self {
        Self { board }
    }

    /// Enumerate every simple trace from start to end and keep all of the shortest ones.
    ///
    /// `discipline` only changes the order states are explored in, the returned set of
    /// traces is the same for both.
    pub fn search(&self, discipline: Discipline) -> Result<BestPaths<'a>, Error> {
        let mut storage = Storage::new(discipline);
        let start_pos = self.board.starting_position();
        for next_pos in Direction::all_dirs()
            .iter()
            .flat_map(|dir| start_pos.neighbor(*dir))
            .filter(|pos| self.board.is_open(pos))
        {
            storage.store(TraceState::seed(self.board, next_pos)?);
        }
        debug!(
            "Seeded {} trace(s) around start {} using {:?}.",
            storage.len(),
            start_pos,
            discipline
        );

        // No simple trace can be longer than the cell count, since cells never repeat.
        let mut best_paths = BestPaths::new(self.board.cell_n());
        let mut explored_n = 0usize;
        while !storage.is_empty() {
            let cur_trace = storage.retrieve()?;
            explored_n += 1;
            if cur_trace.is_complete() {
                best_paths.offer(cur_trace);
                continue;
            }

            trace!(
                "Expand trace of length {} at {}, {} state(s) pending.",
                cur_trace.path_len(),
                cur_trace.head(),
                storage.len()
            );
            for next_pos in Direction::all_dirs()
                .iter()
                .flat_map(|dir| cur_trace.head().neighbor(*dir))
                .filter(|pos| cur_trace.is_open(pos))
            {
                storage.store(cur_trace.extend(next_pos)?);
            }
        }

        info!(
            "Explored {} state(s), found {} shortest trace(s){}.",
            explored_n,
            best_paths.len(),
            best_paths
                .shortest_len()
                .map(|len| format!(" of length {}", len))
                .unwrap_or_default()
        );

        Ok(best_paths)
    }
}
