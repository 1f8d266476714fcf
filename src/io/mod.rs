//! The seams between the rules and whoever is playing.
//!
//! The engine asks an `InputProvider` for decisions and tells an
//! `OutputSink` what happened. Both are traits so that the same turn logic
//! drives a terminal session (`console`) or a scripted test (`scripted`).
//!
//! ## Contract
//!
//! - `request_choice` blocks until one of the offered options is chosen.
//!   Invalid input is the provider's problem: it re-prompts and never
//!   hands the engine anything outside `options`.
//! - `request_any_key` blocks until the player acknowledges the prompt.
//! - `request_text` returns one line of free text, used for names.
//! - `emit` is fire-and-forget and preserves ordering.
//!
//! The only error a provider returns is running out of input.

mod console;
mod scripted;

pub use console::{ConsoleInput, ConsoleOutput};
pub use scripted::{RecordingSink, ScriptedInput};

use crate::core::{GameError, MenuOption};

/// Source of player decisions.
pub trait InputProvider {
    /// Ask the player to pick one of `options`.
    fn request_choice<T: MenuOption>(&mut self, prompt: &str, options: &[T]) -> Result<T, GameError>;

    /// Wait for the player to acknowledge `prompt`.
    fn request_any_key(&mut self, prompt: &str) -> Result<(), GameError>;

    /// Read a line of free text.
    fn request_text(&mut self, prompt: &str) -> Result<String, GameError>;
}

/// Destination for narrative text.
pub trait OutputSink {
    fn emit(&mut self, text: &str);
}
