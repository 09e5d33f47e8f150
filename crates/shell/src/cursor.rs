//! Card grid layout and cursor.

/// Columns used to lay out `card_count` cards: the smallest square that fits.
///
/// 12 cards form a 4x3 grid, 20 cards a 5x4 grid.
pub fn grid_columns(card_count: usize) -> usize {
    let mut columns = 1;
    while columns * columns < card_count {
        columns += 1;
    }
    columns
}

/// Position of the highlighted card, in table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    index: usize,
    len: usize,
    columns: usize,
}

impl Cursor {
    pub fn new(len: usize) -> Self {
        Self {
            index: 0,
            len,
            columns: grid_columns(len),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// (column, row) of the cursor.
    pub fn position(&self) -> (usize, usize) {
        (self.index % self.columns, self.index / self.columns)
    }

    pub fn move_left(&mut self) {
        if self.index % self.columns > 0 {
            self.index -= 1;
        }
    }

    pub fn move_right(&mut self) {
        if self.index % self.columns + 1 < self.columns && self.index + 1 < self.len {
            self.index += 1;
        }
    }

    pub fn move_up(&mut self) {
        if self.index >= self.columns {
            self.index -= self.columns;
        }
    }

    pub fn move_down(&mut self) {
        if self.index + self.columns < self.len {
            self.index += self.columns;
        }
    }
}
