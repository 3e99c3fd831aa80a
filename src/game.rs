use crate::board::{Board, Cell, CellSink};
use crate::snake::{next_position, Direction, Snake};
use crate::{Coords, BOARD_HEIGHT, BOARD_WIDTH};

use rand::seq::SliceRandom;

/// Result of a single simulation step. `Lost` is a normal value of the
/// state machine, not an error.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Outcome {
    Continuing,
    Won,
    Lost,
}

/// Owns the whole simulation state. The surrounding shell feeds it at most
/// one direction per tick and receives repaint notifications through the
/// sink it passes in.
pub struct Game {
    board: Board,
    snake: Snake,
}

impl Game {
    pub fn new(sink: &mut dyn CellSink) -> Self {
        let mut game = Game {
            board: Board::new(),
            snake: Snake::new((BOARD_WIDTH / 2, BOARD_HEIGHT / 2), Direction::Right),
        };
        game.reset(sink);
        game
    }

    /// Fresh game state: empty board, length-1 snake at the center facing
    /// right, food at the right edge of the snake's row.
    pub fn reset(&mut self, sink: &mut dyn CellSink) {
        self.board.reset(sink);
        self.snake = Snake::new((BOARD_WIDTH / 2, BOARD_HEIGHT / 2), Direction::Right);

        for &pos in self.snake.body() {
            self.board.set(pos, Cell::Snake, sink);
        }

        self.board.set((BOARD_WIDTH - 1, self.snake.head().1), Cell::Food, sink);
    }

    /// Advances the simulation by one step. `None` means no direction
    /// change was requested this tick.
    pub fn tick(&mut self, requested: Option<Direction>, sink: &mut dyn CellSink) -> Outcome {
        if let Some(direction) = requested {
            self.snake.update_direction(direction);
        }

        let next = next_position(self.snake.head(), self.snake.direction());

        match self.board.get(next) {
            Cell::Snake => {
                // The tail cell is vacated in the same step the head enters
                // it, so moving onto the current tail is not a collision.
                if next == self.snake.tail() {
                    self.advance(next, sink);
                    Outcome::Continuing
                } else {
                    Outcome::Lost
                }
            }
            Cell::Food => {
                self.snake.move_forward(next, true);
                self.board.set(next, Cell::Snake, sink);

                if self.snake.len() == Board::CELLS {
                    // Board is full; there is no empty cell for new food.
                    Outcome::Won
                } else {
                    self.place_food(sink);
                    Outcome::Continuing
                }
            }
            Cell::Empty => {
                self.advance(next, sink);
                Outcome::Continuing
            }
        }
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Non-growing move: the tail cell empties as the head advances.
    fn advance(&mut self, new_head: Coords, sink: &mut dyn CellSink) {
        self.board.set(self.snake.tail(), Cell::Empty, sink);
        self.board.set(new_head, Cell::Snake, sink);
        self.snake.move_forward(new_head, false);
    }

    fn place_food(&mut self, sink: &mut dyn CellSink) {
        let mut empties = Vec::with_capacity(Board::CELLS);

        for y in 0..BOARD_HEIGHT {
            for x in 0..BOARD_WIDTH {
                if self.board.get((x, y)) == Cell::Empty {
                    empties.push((x, y));
                }
            }
        }

        let pos = *empties
            .choose(&mut rand::thread_rng())
            .expect("no empty cell left to place food on");
        self.board.set(pos, Cell::Food, sink);
    }
}
