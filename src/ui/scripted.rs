//! Headless presenter that replays canned answers and records output.

use std::collections::VecDeque;

use log::warn;

use super::{Hud, Presenter};
use crate::errors::GameError;
use crate::events::Tone;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    /// 0-based option index.
    Choice(usize),
    Confirm(bool),
    Quantity(u32),
}

/// Answers prompts from a queue. Runs out with `GameError::InputClosed`,
/// which is how scripted sessions end.
#[derive(Debug, Default)]
pub struct ScriptedPresenter {
    answers: VecDeque<Answer>,
    pub messages: Vec<(Tone, String)>,
    pub screens: Vec<Hud>,
    pub pauses: usize,
}

impl ScriptedPresenter {
    pub fn new(answers: impl IntoIterator<Item = Answer>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    /// True if any recorded message contains `needle`.
    pub fn saw(&self, needle: &str) -> bool {
        self.messages.iter().any(|(_, message)| message.contains(needle))
    }

    pub fn count(&self, needle: &str) -> usize {
        self.messages
            .iter()
            .filter(|(_, message)| message.contains(needle))
            .count()
    }

    fn next(&mut self) -> Result<Answer, GameError> {
        self.answers.pop_front().ok_or(GameError::InputClosed)
    }
}

impl Presenter for ScriptedPresenter {
    fn begin_screen(&mut self, hud: &Hud) -> Result<(), GameError> {
        self.screens.push(hud.clone());
        Ok(())
    }

    fn choose(&mut self, title: &str, options: &[String]) -> Result<usize, GameError> {
        match self.next()? {
            Answer::Choice(index) if index < options.len() => Ok(index),
            other => {
                warn!("script answer {:?} does not fit menu {:?}", other, title);
                Err(GameError::InputClosed)
            }
        }
    }

    fn confirm(&mut self, prompt: &str) -> Result<bool, GameError> {
        match self.next()? {
            Answer::Confirm(yes) => Ok(yes),
            other => {
                warn!("script answer {:?} does not fit prompt {:?}", other, prompt);
                Err(GameError::InputClosed)
            }
        }
    }

    fn ask_quantity(&mut self, prompt: &str, max: u32) -> Result<Option<u32>, GameError> {
        match self.next()? {
            Answer::Quantity(0) => Ok(None),
            Answer::Quantity(n) if n <= max => Ok(Some(n)),
            other => {
                warn!("script answer {:?} does not fit prompt {:?}", other, prompt);
                Err(GameError::InputClosed)
            }
        }
    }

    fn notify(&mut self, message: &str, tone: Tone) {
        self.messages.push((tone, message.to_string()));
    }

    fn pause(&mut self) -> Result<(), GameError> {
        self.pauses += 1;
        Ok(())
    }
}
