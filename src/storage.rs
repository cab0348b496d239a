use std::collections::VecDeque;

use crate::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Discipline {
    Stack,
    Queue,
}

/// Storage of pending search states, last-in-first-out or first-in-first-out.
#[derive(Debug)]
pub enum Storage<T> {
    Stack(Vec<T>),
    Queue(VecDeque<T>),
}

impl<T> Storage<T> {
    pub fn new(discipline: Discipline) -> Self {
        match discipline {
            Discipline::Stack => Storage::Stack(Vec::new()),
            Discipline::Queue => Storage::Queue(VecDeque::new()),
        }
    }

    pub fn discipline(&self) -> Discipline {
        match self {
            Storage::Stack(_) => Discipline::Stack,
            Storage::Queue(_) => Discipline::Queue,
        }
    }

    pub fn store(&mut self, item: T) {
        match self {
            Storage::Stack(items) => items.push(item),
            Storage::Queue(items) => items.push_back(item),
        }
    }

    pub fn retrieve(&mut self) -> Result<T, Error> {
        let item = match self {
            Storage::Stack(items) => items.pop(),
            Storage::Queue(items) => items.pop_front(),
        };

        item.ok_or(Error::EmptyStorage)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn len(&self) -> usize {
        match self {
            Storage::Stack(items) => items.len(),
            Storage::Queue(items) => items.len(),
        }
    }
}
