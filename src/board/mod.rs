//! Board: the fixed two-row track and its event squares.
//!
//! The board only answers questions about positions. It never touches
//! players; movement lives on `Player` and resolution in `effects`.

pub mod layout;

pub use layout::{Board, SquareEvents, COLUMNS, ROWS};
