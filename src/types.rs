//! Core types shared across the engine
//! This module contains pure data types with no game logic

use serde::{Deserialize, Serialize};

/// Side length of the standard board
pub const DEFAULT_BOARD_SIZE: usize = 4;

/// Smallest board the engine will play on. With two start tiles on a
/// 2x2 or larger board there is always at least one legal move after a
/// reset, so a freshly reset game is never terminal.
pub const MIN_BOARD_SIZE: usize = 2;

/// Number of tiles seeded at game start and after every reset
pub const START_TILES: usize = 2;

/// A spawned tile is a 4 once in every `SPAWN_ODDS` spawns, otherwise a 2
pub const SPAWN_ODDS: u32 = 10;

/// Cell on the board (None = empty, Some = power-of-two tile value)
pub type Cell = Option<u32>;

/// Move directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Parse direction from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" | "u" => Some(Direction::Up),
            "down" | "d" => Some(Direction::Down),
            "left" | "l" => Some(Direction::Left),
            "right" | "r" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    /// True for moves that slide along rows rather than columns
    pub fn is_horizontal(&self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    /// True for moves that pack tiles toward the high-index end of a lane
    pub fn is_reversed(&self) -> bool {
        matches!(self, Direction::Right | Direction::Down)
    }
}

/// Engine configuration supplied at game construction.
///
/// The classic game is 4x4; any size down to [`MIN_BOARD_SIZE`] is accepted
/// and smaller requests are clamped up to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Side length of the square board
    pub board_size: usize,
}

impl GameConfig {
    pub fn with_board_size(board_size: usize) -> Self {
        Self {
            board_size: board_size.max(MIN_BOARD_SIZE),
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
        }
    }
}
