//! Game state module - drives a complete 2048 game
//!
//! Ties the board, RNG, scoring, and the persistence seam together.
//! Every turn is one synchronous call to [`GameState::apply_move`]: slide
//! and merge, then (only if something changed) spawn one tile and re-check
//! for game over. Nothing here blocks, yields, or spawns threads; callers
//! serialize moves themselves.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::rng::TileRng;
use crate::snapshot::GameSnapshot;
use crate::store::{HighScoreStore, NullStore};
use crate::types::{Direction, GameConfig, START_TILES};

/// Outcome of a single [`GameState::apply_move`] call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveResult {
    /// The move changed at least one cell (compression alone counts)
    pub moved: bool,
    /// Total value of tiles created by merges during this move
    pub score_delta: u32,
    /// The board is full with no merge available in either axis
    pub terminal: bool,
    /// Row-major grid after the move, 0 = empty
    pub board: Vec<Vec<u32>>,
}

/// Complete game state
pub struct GameState {
    board: Board,
    rng: TileRng,
    score: u32,
    high_score: u32,
    game_over: bool,
    /// Monotonic episode id (increments on reset).
    episode_id: u32,
    store: Box<dyn HighScoreStore>,
}

impl GameState {
    /// Create a standard 4x4 game with the given RNG seed
    pub fn new(seed: u64) -> Self {
        Self::with_store(GameConfig::default(), seed, Box::new(NullStore))
    }

    /// Create a game with a custom board size
    pub fn with_config(config: GameConfig, seed: u64) -> Self {
        Self::with_store(config, seed, Box::new(NullStore))
    }

    /// Create a game wired to a persistence collaborator.
    ///
    /// The store is read exactly once here; a failed load counts as
    /// "no prior high score".
    pub fn with_store(config: GameConfig, seed: u64, mut store: Box<dyn HighScoreStore>) -> Self {
        let high_score = match store.load() {
            Ok(value) => value,
            Err(err) => {
                log::warn!("high score load failed, starting from 0: {err:#}");
                0
            }
        };

        let mut state = Self {
            board: Board::new(config.board_size),
            rng: TileRng::new(seed),
            score: 0,
            high_score,
            game_over: false,
            episode_id: 0,
            store,
        };
        state.seed_start_tiles();
        state
    }

    /// Resume play on a caller-supplied board (e.g. a restored game)
    pub fn with_board(board: Board, seed: u64) -> Self {
        let game_over = board.is_terminal();
        Self {
            board,
            rng: TileRng::new(seed),
            score: 0,
            high_score: 0,
            game_over,
            episode_id: 0,
            store: Box::new(NullStore),
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Apply one directional move.
    ///
    /// If the move changes nothing, the board, score, terminal flag, and
    /// RNG are all left untouched and no tile spawns. Moves on a finished
    /// game are ignored the same way until [`GameState::reset`].
    pub fn apply_move(&mut self, direction: Direction) -> MoveResult {
        if self.game_over {
            return self.unchanged_result();
        }

        let outcome = self.board.shift(direction);
        if !outcome.moved {
            debug_assert_eq!(outcome.score_delta, 0);
            return self.unchanged_result();
        }

        self.add_score(outcome.score_delta);
        self.spawn_tile();
        self.game_over = self.board.is_terminal();
        if self.game_over {
            log::debug!(
                "game over: episode {} finished at score {}",
                self.episode_id,
                self.score
            );
        }

        MoveResult {
            moved: true,
            score_delta: outcome.score_delta,
            terminal: self.game_over,
            board: self.board.to_rows(),
        }
    }

    /// Place one random tile (2 or 4, 9:1) in a uniformly random empty cell.
    ///
    /// The moved-gate in `apply_move` guarantees an empty cell exists;
    /// calling this on a full board is a programming error.
    pub(crate) fn spawn_tile(&mut self) {
        let empty = self.board.empty_cells();
        debug_assert!(!empty.is_empty(), "spawn_tile called on a full board");
        if empty.is_empty() {
            return;
        }

        let slot = empty[self.rng.pick(empty.len())];
        let value = self.rng.spawn_value();
        self.board.set_by_index(slot, Some(value));
    }

    /// Start a fresh game on the same board size, keeping the high score
    pub fn reset(&mut self) -> GameSnapshot {
        self.board.clear();
        self.score = 0;
        self.episode_id = self.episode_id.wrapping_add(1);
        self.seed_start_tiles();
        // Always false for boards of at least MIN_BOARD_SIZE: two start
        // tiles on four or more cells leave a legal move.
        self.game_over = self.board.is_terminal();
        self.snapshot()
    }

    fn seed_start_tiles(&mut self) {
        for _ in 0..START_TILES {
            self.spawn_tile();
        }
    }

    fn add_score(&mut self, delta: u32) {
        if delta == 0 {
            return;
        }
        self.score += delta;
        if self.score > self.high_score {
            self.high_score = self.score;
            if let Err(err) = self.store.save(self.high_score) {
                log::warn!("high score save failed, keeping in-memory value: {err:#}");
            }
        }
    }

    fn unchanged_result(&self) -> MoveResult {
        MoveResult {
            moved: false,
            score_delta: 0,
            terminal: self.game_over,
            board: self.board.to_rows(),
        }
    }

    /// Fill a reusable snapshot without allocating a new one
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_u32_grid(&mut out.board);
        out.size = self.board.size();
        out.score = self.score;
        out.high_score = self.high_score;
        out.game_over = self.game_over;
        out.seed = self.rng.seed();
        out.episode_id = self.episode_id;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}

impl fmt::Debug for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameState")
            .field("board", &self.board)
            .field("score", &self.score)
            .field("high_score", &self.high_score)
            .field("game_over", &self.game_over)
            .field("episode_id", &self.episode_id)
            .finish_non_exhaustive()
    }
}
