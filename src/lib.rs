//! Pure 2048 board engine - deterministic, synchronous, and UI-free
//!
//! This crate is the logic core of a 2048 game. It owns the grid, the
//! current and high scores, and the terminal flag, and it exposes exactly
//! the operations a frontend needs:
//!
//! - **Deterministic**: the same seed produces identical games, so whole
//!   move sequences are replayable in tests
//! - **Synchronous**: every operation runs to completion with no blocking,
//!   no threads, and no internal locking; callers serialize moves
//! - **UI-free**: rendering, input capture, and storage live outside the
//!   crate. The presentation layer reads [`GameSnapshot`]s; the high score
//!   reaches disk through the [`HighScoreStore`] trait
//!
//! # Module Structure
//!
//! - [`board`]: N x N grid with the slide/merge transform and game-over scan
//! - [`game_state`]: the full game driver - moves, spawning, scoring, reset
//! - [`rng`]: seedable tile randomness (ChaCha8)
//! - [`snapshot`]: read-only view handed to renderers
//! - [`store`]: persistence seam for the high score
//! - [`types`]: directions, cells, configuration
//!
//! # Game Rules
//!
//! - A move slides every row (Left/Right) or column (Up/Down) toward the
//!   chosen edge, packing tiles across gaps
//! - Two equal neighbours merge into one tile of double value; a tile
//!   merges at most once per move; each merge adds the new tile's value to
//!   the score
//! - After every move that changed the board, one new tile (2 with
//!   probability 0.9, otherwise 4) spawns in a random empty cell
//! - A move that changes nothing is a no-op: no spawn, no score, no state
//! - The game is over when the board is full and no two adjacent tiles are
//!   equal in either axis; only [`GameState::reset`] resumes play
//!
//! # Example
//!
//! ```
//! use twenty48_core::{Direction, GameState};
//!
//! let mut game = GameState::new(12345);
//!
//! let result = game.apply_move(Direction::Left);
//! if result.moved {
//!     // score_delta holds the merge points from this move
//!     assert_eq!(game.score(), result.score_delta);
//! }
//!
//! // The renderer works from snapshots, never from the engine itself.
//! let snap = game.snapshot();
//! assert_eq!(snap.size, 4);
//! ```

pub mod board;
pub mod game_state;
pub mod rng;
pub mod snapshot;
pub mod store;
pub mod types;

// Re-export commonly used types for convenience
pub use board::{slide_line, Board, ShiftOutcome};
pub use game_state::{GameState, MoveResult};
pub use rng::TileRng;
pub use snapshot::GameSnapshot;
pub use store::{HighScoreStore, MemoryStore, NullStore};
pub use types::{Cell, Direction, GameConfig, DEFAULT_BOARD_SIZE};
