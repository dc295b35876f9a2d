//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions over boards. Rules are kept
//! apart from history bookkeeping so they can be tested in isolation.

pub mod delta;
pub mod win;

pub use delta::resolve;
pub use win::{LINES, WinnerResult, evaluate};
