//! Frame classification: hand features in, one gesture symbol out.
//!
//! Classification itself is pure — all temporal context lives in the
//! [`HandHistory`](crate::history::HandHistory) the motion predicates read.
//! Rules are walked strictly in table order and the first match wins; the
//! relative order of entries in a grammar is part of its contract, since
//! visually similar shapes are disambiguated by which specific check runs
//! first.

use crate::grammar::Grammar;
use crate::history::HandHistory;
use crate::landmark::HandFeatures;

/// The classifier's discrete per-frame output.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Gesture {
    /// No recognizable shape (or no hand at all).
    None,
    /// Closed hand; drives particle repulsion and clears the spelling buffer.
    Fist,
    /// A named shape from the active grammar.
    Sign(&'static str),
}

impl Gesture {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gesture::None => "none",
            Gesture::Fist => "fist",
            Gesture::Sign(s) => s,
        }
    }

    pub fn is_sign(&self) -> bool {
        matches!(self, Gesture::Sign(_))
    }
}

/// Classify one frame of detections against a grammar.
///
/// Two-hand rules run first when two hands are present; otherwise (and as a
/// fallback) the single-hand priority list runs against hand 0 with its
/// history. A frame with no match is [`Gesture::None`].
pub fn classify_frame(
    hands: &[HandFeatures],
    histories: &[HandHistory; 2],
    grammar: &Grammar,
) -> Gesture {
    if hands.is_empty() {
        return Gesture::None;
    }

    if hands.len() >= 2 {
        for rule in grammar.two_hand {
            if (rule.test)(&hands[0], &hands[1]) {
                return rule.gesture;
            }
        }
    }

    let hand = &hands[0];
    let history = &histories[0];
    for rule in grammar.single {
        if (rule.test)(hand, history) {
            return rule.gesture;
        }
    }

    Gesture::None
}
