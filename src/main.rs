mod board;
mod game;
mod snake;
mod term;

pub type BoardInt = u8;
pub type Coords = (BoardInt, BoardInt);

pub const BOARD_WIDTH: BoardInt = 5;
pub const BOARD_HEIGHT: BoardInt = 5;

use std::{process::exit, thread::sleep, time::Duration};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use game::{Game, Outcome};
use snake::Direction;
use term::TermManager;

const FRAME_RATE: u64 = 60;
const FRAMES_PER_TICK: u64 = 10;
const MAX_WAIT_FRAMES: u64 = 60;

fn main() {
    let mut term = TermManager::new();
    term.setup();
    show_intro(&mut term);

    let mut game = Game::new(&mut term);
    term.flush();

    loop {
        let requested = poll_direction(&mut term);

        match game.tick(requested, &mut term) {
            Outcome::Continuing => {
                term.flush();
                wait_frames(FRAMES_PER_TICK);
            }
            Outcome::Won => {
                if !play_again(&mut term, "You won! Continue? (y/n)") {
                    break;
                }
                game.reset(&mut term);
                term.flush();
            }
            Outcome::Lost => {
                term.mark_dead(game.snake().body());
                if !play_again(&mut term, "You lost! Continue? (y/n)") {
                    break;
                }
                game.reset(&mut term);
                term.flush();
            }
        }
    }

    clean_exit(&mut term);
}

fn show_intro(term: &mut TermManager) {
    term.status_line("Arrow keys or WASD to move, q to quit. Press any key to begin.");

    if is_quit(&term.read_key_blocking()) {
        clean_exit(term);
    }

    term.clear_status();
}

/// Drains all pending key events and keeps only the most recent one that
/// maps to a direction; stale inputs are discarded.
fn poll_direction(term: &mut TermManager) -> Option<Direction> {
    let mut requested = None;

    for key_ev in term.read_key_events_queue() {
        if is_quit(&key_ev) {
            clean_exit(term);
        }

        match key_ev.code {
            KeyCode::Char('w') | KeyCode::Up => requested = Some(Direction::Up),
            KeyCode::Char('a') | KeyCode::Left => requested = Some(Direction::Left),
            KeyCode::Char('s') | KeyCode::Down => requested = Some(Direction::Down),
            KeyCode::Char('d') | KeyCode::Right => requested = Some(Direction::Right),
            _ => {}
        }
    }

    requested
}

/// Blocks on the continue question until the player answers y or n.
fn play_again(term: &mut TermManager, question: &str) -> bool {
    term.status_line(question);

    loop {
        let key_ev = term.read_key_blocking();

        if is_quit(&key_ev) {
            clean_exit(term);
        }

        match key_ev.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => {
                term.clear_status();
                return true;
            }
            KeyCode::Char('n') | KeyCode::Char('N') => return false,
            _ => {}
        }
    }
}

/// Fixed-rate pacing between ticks, saturated at one second's worth of frames.
fn wait_frames(frames: u64) {
    let frames = frames.min(MAX_WAIT_FRAMES);
    sleep(Duration::from_nanos(1_000_000_000 / FRAME_RATE * frames));
}

fn clean_exit(term: &mut TermManager) -> ! {
    term.restore();
    exit(0);
}

fn is_quit(ev: &KeyEvent) -> bool {
    matches!(
        ev,
        KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL }
            | KeyEvent { code: KeyCode::Char('q'), modifiers: _ }
    )
}
