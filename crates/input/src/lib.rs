//! Terminal input layer.
//!
//! Maps crossterm key events onto [`GameAction`] values and provides a
//! DAS/ARR repeat handler for held movement keys, including terminals that
//! never report key releases.
//!
//! [`GameAction`]: tui_blockfall_types::GameAction

pub mod handler;
pub mod map;

pub use tui_blockfall_types as types;

pub use handler::InputHandler;
pub use map::{action_for_key, should_quit};
