//! Blockfall (workspace facade crate).
//!
//! This package re-exports the workspace members under stable module paths;
//! the implementation lives in dedicated crates under `crates/`.

pub use tui_blockfall_core as core;
pub use tui_blockfall_input as input;
pub use tui_blockfall_store as store;
pub use tui_blockfall_term as term;
pub use tui_blockfall_types as types;
