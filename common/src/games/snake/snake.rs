use std::collections::VecDeque;

use super::types::Cell;

/// Snake body, head first. Never empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snake {
    body: VecDeque<Cell>,
}

impl Snake {
    pub fn new(head: Cell) -> Self {
        Self {
            body: VecDeque::from([head]),
        }
    }

    /// Builds a snake from explicit cells, head first. Returns `None` for an empty list.
    pub fn from_cells(cells: impl IntoIterator<Item = Cell>) -> Option<Self> {
        let snake = Self {
            body: cells.into_iter().collect(),
        };
        (!snake.is_empty()).then_some(snake)
    }

    pub fn head(&self) -> Cell {
        *self.body.front().expect("Snake body should never be empty")
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.body.iter().copied()
    }

    pub fn body_excluding_head(&self) -> impl Iterator<Item = Cell> + '_ {
        self.body.iter().skip(1).copied()
    }

    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// True when the head sits on one of the other segments.
    pub fn bites_itself(&self) -> bool {
        let head = self.head();
        self.body_excluding_head().any(|c| c == head)
    }

    /// Pushes `new_head` to the front. Without `grow` the last segment is
    /// dropped so the length stays the same.
    pub fn advance(&mut self, new_head: Cell, grow: bool) {
        self.body.push_front(new_head);
        if !grow {
            self.body.pop_back();
        }
    }
}
