use crate::board::{Cell, CellSink};
use crate::{Coords, BOARD_HEIGHT, BOARD_WIDTH};
use std::{io::{Stdout, Write, stdout}, time::Duration};

use crossterm::{cursor, execute, queue, style, terminal};
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::event::{Event, KeyEvent, read, poll};

const SNAKE_CHAR: char = '█';
const FOOD_CHAR: char = 'O';
const EMPTY_CHAR: char = ' ';
const DEAD_SNAKE_CHAR: char = 'X';

// Board cells are drawn inside a one-character border.
const GRID_OFFSET: u16 = 1;
const STATUS_ROW: u16 = BOARD_HEIGHT as u16 + 2 * GRID_OFFSET + 1;

pub struct TermManager {
    stdout: Stdout,
}

impl TermManager {
    pub fn new() -> Self {
        TermManager { stdout: stdout() }
    }

    pub fn setup(&mut self) {
        execute!(self.stdout, EnterAlternateScreen).expect("Error entering alt screen");
        self.set_raw_mode(true);
        self.set_cursor_visibility(false);
        self.clear();
        self.draw_border();
    }

    pub fn restore(&mut self) {
        self.set_raw_mode(false);
        self.set_cursor_visibility(true);
        execute!(self.stdout, LeaveAlternateScreen).expect("Error leaving alt screen");
    }

    pub fn read_key_blocking(&self) -> KeyEvent {
        loop {
            if let Event::Key(ev) = read().unwrap() {
                return ev;
            }
        }
    }

    /// Drains every key event queued since the last call.
    pub fn read_key_events_queue(&self) -> Vec<KeyEvent> {
        let mut events = vec![];

        while poll(Duration::from_millis(1)).unwrap() {
            if let Event::Key(ev) = read().unwrap() {
                events.push(ev);
            }
        }

        events
    }

    /// Repaints the snake body with the dead-snake marker after a loss.
    pub fn mark_dead(&mut self, body: &[Coords]) {
        for &pos in body {
            self.print_cell(pos, DEAD_SNAKE_CHAR);
        }
        self.flush();
    }

    /// Prints a one-line message on the row below the board.
    pub fn status_line(&mut self, msg: &str) {
        queue!(
            self.stdout,
            cursor::MoveTo(0, STATUS_ROW),
            terminal::Clear(ClearType::CurrentLine),
            style::Print(msg)
        )
        .expect("Error printing status line");
        self.flush();
    }

    pub fn clear_status(&mut self) {
        queue!(self.stdout, cursor::MoveTo(0, STATUS_ROW), terminal::Clear(ClearType::CurrentLine))
            .expect("Error clearing status line");
        self.flush();
    }

    pub fn flush(&mut self) {
        self.stdout.flush().expect("Error flushing.");
    }

    ///////////////////////////////////////////////////////////////////////////

    fn draw_border(&mut self) {
        let width = BOARD_WIDTH as u16 + 2 * GRID_OFFSET;
        let height = BOARD_HEIGHT as u16 + 2 * GRID_OFFSET;

        for x in 0..width {
            let ch = if x == 0 || x == width - 1 { '+' } else { '-' };
            self.print_at((x, 0), ch);
            self.print_at((x, height - 1), ch);
        }

        for y in 1..height - 1 {
            self.print_at((0, y), '|');
            self.print_at((width - 1, y), '|');
        }

        self.flush();
    }

    fn print_cell(&mut self, pos: Coords, ch: char) {
        self.print_at((pos.0 as u16 + GRID_OFFSET, pos.1 as u16 + GRID_OFFSET), ch);
    }

    fn print_at(&mut self, pos: (u16, u16), ch: char) {
        queue!(self.stdout, cursor::MoveTo(pos.0, pos.1), style::Print(ch)).unwrap();
    }

    fn clear(&mut self) {
        execute!(self.stdout, terminal::Clear(ClearType::All)).expect("Error clearing.");
    }

    fn set_raw_mode(&self, option: bool) {
        let res = if option {
            terminal::enable_raw_mode()
        } else {
            terminal::disable_raw_mode()
        };

        res.expect("Error setting raw mode.");
    }

    fn set_cursor_visibility(&mut self, option: bool) {
        let res = if option {
            execute!(self.stdout, cursor::Show)
        } else {
            execute!(self.stdout, cursor::Hide)
        };

        res.expect("Error setting cursor visibility.");
    }
}

impl CellSink for TermManager {
    fn cell_changed(&mut self, pos: Coords, cell: Cell) {
        let ch = match cell {
            Cell::Snake => SNAKE_CHAR,
            Cell::Food => FOOD_CHAR,
            Cell::Empty => EMPTY_CHAR,
        };
        self.print_cell(pos, ch);
    }
}
