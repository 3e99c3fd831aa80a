use crate::{Coords, BOARD_HEIGHT, BOARD_WIDTH};
use Direction::*;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    pub fn opposite(self) -> Direction {
        match self {
            Up => Down,
            Right => Left,
            Down => Up,
            Left => Right,
        }
    }
}

/// The only place movement geometry is defined: one unit step in `direction`
/// with modular wraparound on the corresponding axis (torus, no walls).
pub fn next_position(pos: Coords, direction: Direction) -> Coords {
    let (x, y) = pos;
    match direction {
        Up => (x, (y + BOARD_HEIGHT - 1) % BOARD_HEIGHT),
        Right => ((x + 1) % BOARD_WIDTH, y),
        Down => (x, (y + 1) % BOARD_HEIGHT),
        Left => ((x + BOARD_WIDTH - 1) % BOARD_WIDTH, y),
    }
}

/// Body positions ordered tail first, head last. The backing vector is
/// allocated once with capacity for the whole board; the snake can never
/// outgrow it because the game is won at exactly that length.
pub struct Snake {
    body: Vec<Coords>,
    direction: Direction,
}

impl Snake {
    pub fn new(pos: Coords, direction: Direction) -> Self {
        let mut body = Vec::with_capacity(BOARD_WIDTH as usize * BOARD_HEIGHT as usize);
        body.push(pos);
        Snake { body, direction }
    }

    pub fn head(&self) -> Coords {
        *self.body.last().unwrap()
    }

    pub fn tail(&self) -> Coords {
        self.body[0]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn body(&self) -> &[Coords] {
        &self.body
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Applies the requested direction unless it would reverse the snake
    /// into itself in a single tick.
    pub fn update_direction(&mut self, requested: Direction) {
        if requested != self.direction.opposite() {
            self.direction = requested;
        }
    }

    /// The only mutation path for the body. A non-growing move vacates the
    /// tail slot as the head advances; a growing move keeps the tail and
    /// extends the length by one.
    pub fn move_forward(&mut self, new_head: Coords, grow: bool) {
        if grow {
            self.body.push(new_head);
        } else {
            self.body.rotate_left(1);
            *self.body.last_mut().unwrap() = new_head;
        }
    }

    #[cfg(test)]
    pub fn from_body(body: Vec<Coords>, direction: Direction) -> Self {
        assert!(!body.is_empty());
        let mut snake = Snake {
            body: Vec::with_capacity(BOARD_WIDTH as usize * BOARD_HEIGHT as usize),
            direction,
        };
        snake.body.extend(body);
        snake
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_position_wraps_on_every_edge() {
        assert_eq!(next_position((2, 0), Up), (2, BOARD_HEIGHT - 1));
        assert_eq!(next_position((2, BOARD_HEIGHT - 1), Down), (2, 0));
        assert_eq!(next_position((0, 3), Left), (BOARD_WIDTH - 1, 3));
        assert_eq!(next_position((BOARD_WIDTH - 1, 3), Right), (0, 3));
    }

    #[test]
    fn next_position_steps_one_cell_in_the_interior() {
        assert_eq!(next_position((2, 2), Up), (2, 1));
        assert_eq!(next_position((2, 2), Right), (3, 2));
        assert_eq!(next_position((2, 2), Down), (2, 3));
        assert_eq!(next_position((2, 2), Left), (1, 2));
    }

    #[test]
    fn update_direction_rejects_exact_opposite() {
        let mut snake = Snake::new((2, 2), Right);
        snake.update_direction(Left);
        assert_eq!(snake.direction(), Right);
    }

    #[test]
    fn update_direction_accepts_turns() {
        let mut snake = Snake::new((2, 2), Right);
        snake.update_direction(Up);
        assert_eq!(snake.direction(), Up);
        snake.update_direction(Left);
        assert_eq!(snake.direction(), Left);
    }

    #[test]
    fn non_growing_move_shifts_tail_out() {
        let mut snake = Snake::from_body(vec![(1, 1), (2, 1), (2, 2)], Down);
        snake.move_forward((2, 3), false);
        assert_eq!(snake.body(), &[(2, 1), (2, 2), (2, 3)]);
        assert_eq!(snake.len(), 3);
    }

    #[test]
    fn growing_move_keeps_tail() {
        let mut snake = Snake::from_body(vec![(1, 1), (2, 1)], Right);
        snake.move_forward((3, 1), true);
        assert_eq!(snake.body(), &[(1, 1), (2, 1), (3, 1)]);
        assert_eq!(snake.len(), 3);
    }

    #[test]
    fn head_and_tail_are_the_body_ends() {
        let snake = Snake::from_body(vec![(0, 0), (1, 0), (1, 1)], Down);
        assert_eq!(snake.tail(), (0, 0));
        assert_eq!(snake.head(), (1, 1));
    }
}
