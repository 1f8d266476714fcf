//! Deterministic input and output for tests and replays.

use std::collections::VecDeque;

use super::{InputProvider, OutputSink};
use crate::core::{parse_option, GameError, MenuOption};

/// Answers menu prompts from a fixed list of keys.
///
/// Each `request_choice` consumes keys until one is valid for the offered
/// options; rejected keys are remembered, mirroring a console re-prompt.
/// Acknowledgment prompts consume nothing; text prompts take the next key
/// verbatim. Running out of keys is
/// `GameError::InputClosed`.
///
/// ```
/// use life_track::core::{Action, GameError};
/// use life_track::io::{InputProvider, ScriptedInput};
///
/// let mut input = ScriptedInput::new(["7", "2"]);
/// assert_eq!(input.request_choice("Action?", &Action::MENU).unwrap(), Action::Move);
/// assert_eq!(input.rejected(), &["7".to_string()]);
/// assert!(matches!(
///     input.request_choice("Action?", &Action::MENU),
///     Err(GameError::InputClosed { .. })
/// ));
/// ```
#[derive(Clone, Debug, Default)]
pub struct ScriptedInput {
    keys: VecDeque<String>,
    choice_prompts: Vec<String>,
    any_key_prompts: Vec<String>,
    text_prompts: Vec<String>,
    rejected: Vec<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Queue more keys at the end of the script.
    pub fn push<S: Into<String>>(&mut self, key: S) {
        self.keys.push_back(key.into());
    }

    /// Keys not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.keys.len()
    }

    /// Every prompt that asked for a choice, in order.
    #[must_use]
    pub fn choice_prompts(&self) -> &[String] {
        &self.choice_prompts
    }

    /// Every acknowledgment prompt, in order.
    #[must_use]
    pub fn any_key_prompts(&self) -> &[String] {
        &self.any_key_prompts
    }

    /// Every free-text prompt, in order.
    #[must_use]
    pub fn text_prompts(&self) -> &[String] {
        &self.text_prompts
    }

    /// Keys that matched no offered option.
    #[must_use]
    pub fn rejected(&self) -> &[String] {
        &self.rejected
    }
}

impl InputProvider for ScriptedInput {
    fn request_choice<T: MenuOption>(&mut self, prompt: &str, options: &[T]) -> Result<T, GameError> {
        self.choice_prompts.push(prompt.to_string());
        while let Some(key) = self.keys.pop_front() {
            match parse_option(options, &key) {
                Some(choice) => return Ok(choice),
                None => self.rejected.push(key),
            }
        }
        Err(GameError::input_closed(prompt))
    }

    fn request_any_key(&mut self, prompt: &str) -> Result<(), GameError> {
        self.any_key_prompts.push(prompt.to_string());
        Ok(())
    }

    fn request_text(&mut self, prompt: &str) -> Result<String, GameError> {
        self.text_prompts.push(prompt.to_string());
        self.keys
            .pop_front()
            .ok_or_else(|| GameError::input_closed(prompt))
    }
}

/// Keeps every emitted message.
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    lines: Vec<String>,
}

impl RecordingSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Whether any message contains `needle`.
    #[must_use]
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|l| l.contains(needle))
    }

    /// Number of messages containing `needle`.
    #[must_use]
    pub fn count(&self, needle: &str) -> usize {
        self.lines.iter().filter(|l| l.contains(needle)).count()
    }
}

impl OutputSink for RecordingSink {
    fn emit(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }
}
