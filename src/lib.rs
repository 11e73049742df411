//! # robot-board
//!
//! A deterministic grid board for battery-powered robots. Robots move one cell
//! per turn in a cardinal direction, bump into walls, board edges and each
//! other, and can ask what they see along their row and column.
//!
//! The crate decides nothing on its own: an external driver (a game loop, an
//! LLM agent, a test) picks directions and reads back [`BoardEvent`]s and
//! perception text. Renderers consume a [`BoardSnapshot`].
//!
//! ```
//! use robot_board::{Board, Direction};
//!
//! let mut board = Board::new(5, 5)?;
//! board.add_robot("A", 2, 2)?;
//! board.add_wall(2, 4)?;
//!
//! let event = board.move_robot("A", Direction::South)?;
//! assert!(event.success);
//! assert_eq!(event.message, "A moved south.");
//!
//! let event = board.move_robot("A", Direction::South)?;
//! assert!(!event.success);
//! # Ok::<(), robot_board::BoardError>(())
//! ```

pub mod board;
pub mod entity;
pub mod event;
pub mod snapshot;
pub mod vision;

pub use board::*;
pub use entity::*;
pub use event::*;
pub use snapshot::*;
pub use vision::*;
