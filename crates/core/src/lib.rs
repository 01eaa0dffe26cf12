//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the game rules and simulation. It has **zero
//! dependencies** on UI or I/O:
//!
//! - **Deterministic**: the piece source is injected, so a seed (or a scripted
//!   sequence) reproduces a game exactly
//! - **Testable**: every rule is reachable through the public API
//! - **Portable**: runs under the terminal shell or headless
//!
//! # Module Structure
//!
//! - [`shapes`]: the seven tetromino shapes, colors, and their four orientations
//! - [`piece`]: the active falling piece
//! - [`board`]: 10x20 grid with placement validation, locking, and line clearing
//! - [`rng`]: piece source trait and the default uniform random source
//! - [`game_state`]: the controller: gravity, moves, locking, scoring, game over
//! - [`snapshot`]: read-only copies of the state for renderers
//!
//! # Game Rules
//!
//! - Each new piece is drawn uniformly at random, spawns centered at row 0
//! - Gravity moves the piece down one row every 500ms
//! - A blocked downward move locks the piece; blocked sideways moves and
//!   rotations are refused
//! - Every cleared line is worth 100 points
//! - The game ends when a freshly spawned piece does not fit
//!
//! # Example
//!
//! ```
//! use tui_blockfall_core::GameState;
//! use tui_blockfall_types::{GameAction, FALL_INTERVAL_MS};
//!
//! let mut game = GameState::with_seed(12345);
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//! assert!(game.tick(FALL_INTERVAL_MS));
//!
//! assert_eq!(game.score(), 0);
//! assert!(!game.game_over());
//! ```

pub mod board;
pub mod game_state;
pub mod piece;
pub mod rng;
pub mod shapes;
pub mod snapshot;

pub use tui_blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use game_state::{GameState, LockEvent};
pub use piece::Tetromino;
pub use rng::{PieceSource, SimpleRng, UniformSource};
pub use shapes::{color_of, get_shape, shape, ShapeEntry, ShapeMatrix};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
