//! Read-only view of a game for presentation collaborators.
//!
//! The snapshot is plain data: the renderer gets everything it needs to
//! draw a frame without being able to mutate engine state.

use serde::{Deserialize, Serialize};

use crate::types::DEFAULT_BOARD_SIZE;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Side length of the board
    pub size: usize,
    /// Row-major grid of tile values, 0 = empty
    pub board: Vec<Vec<u32>>,
    pub score: u32,
    pub high_score: u32,
    pub game_over: bool,
    /// RNG seed for this game (replay identity)
    pub seed: u64,
    /// Monotonic episode id (increments on reset)
    pub episode_id: u32,
}

impl GameSnapshot {
    /// Tile value at (x, y), 0 = empty
    pub fn tile(&self, x: usize, y: usize) -> u32 {
        self.board[y][x]
    }

    /// Sum of all tile values on the board
    pub fn tile_sum(&self) -> u64 {
        self.board
            .iter()
            .flat_map(|row| row.iter())
            .map(|&v| u64::from(v))
            .sum()
    }

    pub fn playable(&self) -> bool {
        !self.game_over
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            size: DEFAULT_BOARD_SIZE,
            board: vec![vec![0; DEFAULT_BOARD_SIZE]; DEFAULT_BOARD_SIZE],
            score: 0,
            high_score: 0,
            game_over: false,
            seed: 0,
            episode_id: 0,
        }
    }
}
