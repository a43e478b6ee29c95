//! Typewriter text cycling (stateful).

use std::time::Duration;

use crate::error::EffectError;
use crate::lifecycle::{Lifecycle, TimerToken};

/// What the typewriter is doing with the current phrase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Typing,
    Paused,
    Deleting,
}

/// Types out a phrase, holds it, deletes it, and moves on to the next one.
#[derive(Debug)]
pub struct TypewriterCycler {
    phrases: Vec<String>,
    /// Length of each phrase in chars.
    lengths: Vec<usize>,
    phrase_index: usize,
    char_count: usize,
    mode: Mode,
    type_interval: Duration,
    pause: Duration,
    /// Wall time accumulated towards the next tick.
    pending: Duration,
    lifecycle: Lifecycle,
}

impl TypewriterCycler {
    /// Build a cycler over `phrases`.
    ///
    /// Deleting runs at half of `type_interval`; `pause` is how long a fully
    /// typed phrase stays on screen.
    pub fn new<I, S>(
        phrases: I,
        type_interval: Duration,
        pause: Duration,
    ) -> Result<Self, EffectError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let phrases: Vec<String> = phrases.into_iter().map(Into::into).collect();
        if phrases.is_empty() {
            return Err(EffectError::EmptyPhrases);
        }
        if type_interval.is_zero() {
            return Err(EffectError::ZeroInterval);
        }
        let lengths = phrases.iter().map(|p| p.chars().count()).collect();

        Ok(Self {
            phrases,
            lengths,
            phrase_index: 0,
            char_count: 0,
            mode: Mode::Typing,
            type_interval,
            pause,
            pending: Duration::ZERO,
            lifecycle: Lifecycle::default(),
        })
    }

    /// Begin cycling and return the token for the first tick.
    pub fn start(&mut self) -> TimerToken {
        self.pending = Duration::ZERO;
        self.lifecycle.start()
    }

    /// Stop cycling. Outstanding tick tokens become stale.
    pub fn stop(&mut self) {
        if self.lifecycle.stop() {
            tracing::debug!("Typewriter stopped on phrase {}", self.phrase_index);
        }
    }

    pub fn is_running(&self) -> bool {
        self.lifecycle.is_running()
    }

    /// Advance the state machine by one tick and return the next tick's token.
    ///
    /// A stale token, or a stopped cycler, leaves the state untouched and
    /// returns `None`.
    pub fn tick(&mut self, token: TimerToken) -> Option<TimerToken> {
        if !self.lifecycle.accepts(token) {
            tracing::trace!("Ignoring typewriter tick scheduled before teardown");
            return None;
        }

        match self.mode {
            Mode::Typing => {
                let len = self.lengths[self.phrase_index];
                if self.char_count < len {
                    self.char_count += 1;
                }
                if self.char_count >= len {
                    self.mode = Mode::Paused;
                }
            }
            Mode::Paused => self.mode = Mode::Deleting,
            Mode::Deleting => {
                self.char_count = self.char_count.saturating_sub(1);
                if self.char_count == 0 {
                    self.phrase_index = (self.phrase_index + 1) % self.phrases.len();
                    self.mode = Mode::Typing;
                    tracing::trace!("Typewriter moved to phrase {}", self.phrase_index);
                }
            }
        }

        Some(token)
    }

    /// Feed elapsed wall time and run every tick that has come due.
    ///
    /// Returns the number of ticks run.
    pub fn advance(&mut self, elapsed: Duration) -> usize {
        let Some(token) = self.lifecycle.current() else {
            return 0;
        };

        self.pending += elapsed;
        let mut ticks = 0;
        loop {
            let delay = self.delay();
            if self.pending < delay {
                break;
            }
            self.pending -= delay;
            if self.tick(token).is_none() {
                break;
            }
            ticks += 1;
        }
        ticks
    }

    /// Wait before the next tick in the current mode.
    pub fn delay(&self) -> Duration {
        match self.mode {
            Mode::Typing => self.type_interval,
            Mode::Paused => self.pause,
            Mode::Deleting => self.type_interval / 2,
        }
    }

    /// The visible part of the current phrase.
    pub fn text(&self) -> &str {
        let phrase = &self.phrases[self.phrase_index];
        let end = phrase
            .char_indices()
            .nth(self.char_count)
            .map_or(phrase.len(), |(i, _)| i);
        &phrase[..end]
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn phrase_index(&self) -> usize {
        self.phrase_index
    }

    pub fn char_count(&self) -> usize {
        self.char_count
    }

    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }
}

impl Drop for TypewriterCycler {
    fn drop(&mut self) {
        self.stop();
    }
}
