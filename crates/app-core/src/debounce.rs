//! Temporal hysteresis over the raw per-frame gesture stream.
//!
//! A raw label only becomes the stable gesture after it has been observed
//! for `hold_frames` consecutive frames; any differing frame restarts the
//! count at that frame (the observing frame itself counts as 1). Confirmed
//! transitions drive materialization, and in spelling grammars a second,
//! longer hold appends letters to the buffer.

use crate::constants::*;
use crate::gesture::Gesture;
use crate::grammar::Grammar;

#[derive(Clone, Debug)]
pub struct DebounceConfig {
    /// Consecutive identical raw frames before the stable gesture changes.
    pub hold_frames: u32,
    /// Additional consecutive stable frames before a letter is appended.
    pub letter_confirm_frames: u32,
}

impl Default for DebounceConfig {
    fn default() -> Self {
        Self {
            hold_frames: HOLD_FRAMES,
            letter_confirm_frames: LETTER_CONFIRM_FRAMES,
        }
    }
}

impl DebounceConfig {
    pub fn for_grammar(grammar: &Grammar) -> Self {
        Self {
            hold_frames: if grammar.spelling {
                HOLD_FRAMES_SPELLING
            } else {
                HOLD_FRAMES
            },
            letter_confirm_frames: LETTER_CONFIRM_FRAMES,
        }
    }
}

/// Confirmed outcomes of one observed frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DebounceEvent {
    /// Enter or refresh materialization with this text.
    Materialize(String),
    /// Leave materialization; particles drift back to ambient.
    Scatter,
    /// A letter was appended to the spelling buffer.
    LetterCommitted(&'static str),
    /// A confirmed fist wiped the spelling buffer.
    BufferCleared,
}

pub struct GestureDebouncer {
    config: DebounceConfig,
    stable: Gesture,
    pending: Gesture,
    hold_count: u32,
    letter_hold: u32,
    last_committed: Option<&'static str>,
    buffer: String,
    materialized: Option<String>,
}

impl GestureDebouncer {
    pub fn new(config: DebounceConfig) -> Self {
        Self {
            config,
            stable: Gesture::None,
            pending: Gesture::None,
            hold_count: 0,
            letter_hold: 0,
            last_committed: None,
            buffer: String::new(),
            materialized: None,
        }
    }

    pub fn stable(&self) -> Gesture {
        self.stable
    }

    /// Joined contents of the spelling buffer.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Text currently materialized, if any.
    pub fn materialized(&self) -> Option<&str> {
        self.materialized.as_deref()
    }

    /// Feed one raw frame; confirmed transitions land in `events`.
    pub fn observe(&mut self, raw: Gesture, grammar: &Grammar, events: &mut Vec<DebounceEvent>) {
        if raw == self.stable {
            self.pending = raw;
            self.hold_count = 0;
        } else {
            if raw == self.pending {
                self.hold_count += 1;
            } else {
                self.pending = raw;
                self.hold_count = 1;
            }
            if self.hold_count >= self.config.hold_frames {
                self.confirm(raw, grammar, events);
            }
        }

        if grammar.spelling {
            self.spell_tick(grammar, events);
        }
    }

    fn confirm(&mut self, g: Gesture, grammar: &Grammar, events: &mut Vec<DebounceEvent>) {
        self.stable = g;
        self.pending = g;
        self.hold_count = 0;
        self.letter_hold = 0;

        match g {
            Gesture::Fist => {
                if grammar.spelling && !self.buffer.is_empty() {
                    self.buffer.clear();
                    events.push(DebounceEvent::BufferCleared);
                }
                self.drop_materialization(events);
            }
            Gesture::None => {
                self.last_committed = None;
                self.drop_materialization(events);
            }
            Gesture::Sign(_) => {
                if grammar.spelling {
                    // Letters materialize through the buffer in spell_tick.
                    return;
                }
                match grammar.display_for(g) {
                    Some(text) => {
                        if self.materialized.as_deref() != Some(text) {
                            self.materialized = Some(text.to_owned());
                            events.push(DebounceEvent::Materialize(text.to_owned()));
                        }
                    }
                    None => self.drop_materialization(events),
                }
            }
        }
    }

    /// Runs every spelling-mode frame: the per-letter hold counter and the
    /// repeat guard that only a stable `none` resets.
    fn spell_tick(&mut self, grammar: &Grammar, events: &mut Vec<DebounceEvent>) {
        let letter = match grammar.display_for(self.stable) {
            Some(l) if self.stable.is_sign() => l,
            _ => return,
        };
        self.letter_hold += 1;
        if self.letter_hold >= self.config.letter_confirm_frames
            && self.last_committed != Some(letter)
        {
            self.buffer.push_str(letter);
            self.last_committed = Some(letter);
            events.push(DebounceEvent::LetterCommitted(letter));
            self.materialized = Some(self.buffer.clone());
            events.push(DebounceEvent::Materialize(self.buffer.clone()));
        }
    }

    fn drop_materialization(&mut self, events: &mut Vec<DebounceEvent>) {
        if self.materialized.take().is_some() {
            events.push(DebounceEvent::Scatter);
        }
    }
}
