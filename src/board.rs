use crate::{Coords, BOARD_HEIGHT, BOARD_WIDTH};

/// What a single board cell holds. The board never stores anything else,
/// so there is no "corrupted cell" arm anywhere downstream.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Cell {
    Empty,
    Snake,
    Food,
}

/// Receiver for single-cell changes. The simulation calls this synchronously
/// on every board write; the terminal repaints exactly that cell, tests
/// record or ignore the calls.
pub trait CellSink {
    fn cell_changed(&mut self, pos: Coords, cell: Cell);
}

pub struct Board {
    cells: [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
}

impl Board {
    /// Total cell count, which is also the snake's maximum length.
    pub const CELLS: usize = BOARD_WIDTH as usize * BOARD_HEIGHT as usize;

    pub fn new() -> Self {
        Board { cells: [[Cell::Empty; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize] }
    }

    /// Sets every cell to empty, notifying the sink of each one.
    pub fn reset(&mut self, sink: &mut dyn CellSink) {
        for y in 0..BOARD_HEIGHT {
            for x in 0..BOARD_WIDTH {
                self.set((x, y), Cell::Empty, sink);
            }
        }
    }

    pub fn set(&mut self, pos: Coords, cell: Cell, sink: &mut dyn CellSink) {
        self.cells[pos.1 as usize][pos.0 as usize] = cell;
        sink.cell_changed(pos, cell);
    }

    pub fn get(&self, pos: Coords) -> Cell {
        self.cells[pos.1 as usize][pos.0 as usize]
    }
}


#[cfg(test)]
mod tests {
    use super::test_sinks::{NullSink, RecordingSink};
    use super::*;

    #[test]
    fn new_board_is_all_empty() {
        let board = Board::new();
        for y in 0..BOARD_HEIGHT {
            for x in 0..BOARD_WIDTH {
                assert_eq!(board.get((x, y)), Cell::Empty);
            }
        }
    }

    #[test]
    fn set_writes_and_notifies_one_cell() {
        let mut board = Board::new();
        let mut sink = RecordingSink::new();

        board.set((3, 1), Cell::Food, &mut sink);

        assert_eq!(board.get((3, 1)), Cell::Food);
        assert_eq!(sink.changes, vec![((3, 1), Cell::Food)]);
    }

    #[test]
    fn reset_clears_and_notifies_every_cell() {
        let mut board = Board::new();
        board.set((2, 2), Cell::Snake, &mut NullSink);
        board.set((4, 0), Cell::Food, &mut NullSink);

        let mut sink = RecordingSink::new();
        board.reset(&mut sink);

        assert_eq!(sink.changes.len(), Board::CELLS);
        assert!(sink.changes.iter().all(|&(_, cell)| cell == Cell::Empty));
        assert_eq!(board.get((2, 2)), Cell::Empty);
        assert_eq!(board.get((4, 0)), Cell::Empty);
    }
}
