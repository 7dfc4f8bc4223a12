//! Gesture grammars: ordered rule tables plus the display-text lookup.
//!
//! A grammar is data — an ordered slice of (predicate, symbol, display)
//! entries for each of the two-hand and single-hand passes. New vocabularies
//! are additive: append a rule or a table, never edit classifier code. Entry
//! order is contractual; inserting a rule above an existing one can
//! reclassify shapes that used to fall through to it.

use fnv::FnvHashMap;

use crate::constants::*;
use crate::gesture::Gesture;
use crate::history::HandHistory;
use crate::landmark::{Finger, HandFeatures};

/// One single-hand entry: first predicate to pass decides the frame.
pub struct SignRule {
    pub gesture: Gesture,
    pub display: Option<&'static str>,
    pub test: fn(&HandFeatures, &HandHistory) -> bool,
}

/// One two-hand entry, tested before any single-hand rule.
pub struct TwoHandRule {
    pub gesture: Gesture,
    pub display: Option<&'static str>,
    pub test: fn(&HandFeatures, &HandFeatures) -> bool,
}

/// An ordered gesture vocabulary.
pub struct Grammar {
    pub name: &'static str,
    pub two_hand: &'static [TwoHandRule],
    pub single: &'static [SignRule],
    /// Spelling grammars confirm letters into a buffer instead of
    /// materializing each symbol's text directly.
    pub spelling: bool,
    display: FnvHashMap<&'static str, &'static str>,
}

impl Grammar {
    fn build(
        name: &'static str,
        two_hand: &'static [TwoHandRule],
        single: &'static [SignRule],
        spelling: bool,
    ) -> Self {
        let mut display = FnvHashMap::default();
        for rule in two_hand {
            if let (Gesture::Sign(sym), Some(text)) = (rule.gesture, rule.display) {
                display.insert(sym, text);
            }
        }
        for rule in single {
            if let (Gesture::Sign(sym), Some(text)) = (rule.gesture, rule.display) {
                display.insert(sym, text);
            }
        }
        Self {
            name,
            two_hand,
            single,
            spelling,
            display,
        }
    }

    /// Conversational signs that each materialize a phrase.
    pub fn phrases() -> Self {
        Self::build("phrases", PHRASE_TWO_HAND, PHRASE_SINGLE, false)
    }

    /// Letter shapes that spell into the confirmation buffer.
    pub fn letters() -> Self {
        Self::build("letters", &[], LETTER_SINGLE, true)
    }

    /// Display text for a confirmed symbol, if the grammar maps one.
    pub fn display_for(&self, g: Gesture) -> Option<&'static str> {
        match g {
            Gesture::Sign(sym) => self.display.get(sym).copied(),
            _ => None,
        }
    }
}

// ── Shared predicates ──────────────────────────────────────

fn bunched(h: &HandFeatures, _: &HandHistory) -> bool {
    h.bunch < BUNCH_THRESHOLD
}

fn fist(h: &HandFeatures, _: &HandHistory) -> bool {
    h.all_down()
}

fn index_with_thumb(h: &HandFeatures) -> bool {
    h.only_index() && h.thumb_out && h.thumb_lateral > THUMB_LATERAL_MIN
}

// ── Phrase grammar ─────────────────────────────────────────

fn tips_meet(a: &HandFeatures, b: &HandFeatures) -> bool {
    a.only_index() && b.only_index() && a.index_tip.distance(b.index_tip) < TWO_HAND_TIP_THRESHOLD
}

fn love_sign(h: &HandFeatures, _: &HandHistory) -> bool {
    h.thumb_out && h.finger_up == [true, false, false, true]
}

fn peace_sign(h: &HandFeatures, _: &HandHistory) -> bool {
    h.pair_up()
}

fn call_me(h: &HandFeatures, _: &HandHistory) -> bool {
    index_with_thumb(h)
}

fn index_only(h: &HandFeatures, _: &HandHistory) -> bool {
    h.only_index()
}

fn pinky_only(h: &HandFeatures, _: &HandHistory) -> bool {
    h.only_pinky()
}

fn open_wave(h: &HandFeatures, hist: &HandHistory) -> bool {
    h.all_up() && hist.oscillation_x(OSCILLATION_WINDOW)
}

fn open_sweep(h: &HandFeatures, hist: &HandHistory) -> bool {
    h.all_up() && hist.sustained_shift_x(SWEEP_WINDOW, SWEEP_MIN_SHIFT)
}

fn open_palm(h: &HandFeatures, _: &HandHistory) -> bool {
    h.all_up()
}

fn thumbs_up(h: &HandFeatures, _: &HandHistory) -> bool {
    h.all_down() && h.thumb_out && h.thumb_drop < -THUMB_VERTICAL_MARGIN
}

fn thumbs_down(h: &HandFeatures, _: &HandHistory) -> bool {
    h.all_down() && h.thumb_out && h.thumb_drop > THUMB_VERTICAL_MARGIN
}

static PHRASE_TWO_HAND: &[TwoHandRule] = &[TwoHandRule {
    gesture: Gesture::Sign("meet"),
    display: Some("NICE TO MEET YOU"),
    test: tips_meet,
}];

// Most specific shapes first; motion-qualified open-palm rules before the
// plain open palm; thumb-qualified closed shapes before the bare fist.
static PHRASE_SINGLE: &[SignRule] = &[
    SignRule {
        gesture: Gesture::Sign("gather"),
        display: Some("WHAT DO YOU WANT?"),
        test: bunched,
    },
    SignRule {
        gesture: Gesture::Sign("love"),
        display: Some("I LOVE YOU"),
        test: love_sign,
    },
    SignRule {
        gesture: Gesture::Sign("peace"),
        display: Some("PEACE!"),
        test: peace_sign,
    },
    SignRule {
        gesture: Gesture::Sign("call_me"),
        display: Some("CALL ME"),
        test: call_me,
    },
    SignRule {
        gesture: Gesture::Sign("hello"),
        display: Some("HELLO"),
        test: index_only,
    },
    SignRule {
        gesture: Gesture::Sign("thanks"),
        display: Some("THANK YOU"),
        test: pinky_only,
    },
    SignRule {
        gesture: Gesture::Sign("wave"),
        display: Some("GOODBYE!"),
        test: open_wave,
    },
    SignRule {
        gesture: Gesture::Sign("sweep"),
        display: Some("SEE YOU LATER"),
        test: open_sweep,
    },
    SignRule {
        gesture: Gesture::Sign("open"),
        display: Some("WELCOME!"),
        test: open_palm,
    },
    SignRule {
        gesture: Gesture::Sign("yes"),
        display: Some("GREAT!"),
        test: thumbs_up,
    },
    SignRule {
        gesture: Gesture::Sign("no"),
        display: Some("OH NO"),
        test: thumbs_down,
    },
    SignRule {
        gesture: Gesture::Fist,
        display: None,
        test: fist,
    },
];

// ── Letter grammar ─────────────────────────────────────────

fn pair_spread(h: &HandFeatures, _: &HandHistory) -> bool {
    h.pair_up() && !h.pair_horizontal && h.pair_spread > PAIR_SPREAD_MIN
}

fn pair_sideways(h: &HandFeatures, _: &HandHistory) -> bool {
    h.pair_horizontal && !h.up(Finger::Ring) && !h.up(Finger::Pinky)
}

fn pair_close(h: &HandFeatures, _: &HandHistory) -> bool {
    h.pair_up()
}

fn three_up(h: &HandFeatures, _: &HandHistory) -> bool {
    h.finger_up == [true, true, true, false]
}

fn letter_l(h: &HandFeatures, _: &HandHistory) -> bool {
    index_with_thumb(h)
}

fn index_z_stroke(h: &HandFeatures, hist: &HandHistory) -> bool {
    h.only_index() && hist.z_stroke()
}

fn thumb_pinky(h: &HandFeatures, _: &HandHistory) -> bool {
    h.only_pinky() && h.thumb_out
}

fn four_up_thumb_tucked(h: &HandFeatures, _: &HandHistory) -> bool {
    h.all_up() && !h.thumb_out
}

fn closed_thumb_side(h: &HandFeatures, _: &HandHistory) -> bool {
    h.all_down() && h.thumb_lateral > THUMB_LATERAL_MIN
}

// Tip-distance checks before orientation checks before pair default (V, H,
// then U); motion-qualified index (Z) before the plain index letter; the
// thumb-at-side closed hand (A) before the bare fist.
static LETTER_SINGLE: &[SignRule] = &[
    SignRule {
        gesture: Gesture::Sign("O"),
        display: Some("O"),
        test: bunched,
    },
    SignRule {
        gesture: Gesture::Sign("W"),
        display: Some("W"),
        test: three_up,
    },
    SignRule {
        gesture: Gesture::Sign("V"),
        display: Some("V"),
        test: pair_spread,
    },
    SignRule {
        gesture: Gesture::Sign("H"),
        display: Some("H"),
        test: pair_sideways,
    },
    SignRule {
        gesture: Gesture::Sign("U"),
        display: Some("U"),
        test: pair_close,
    },
    SignRule {
        gesture: Gesture::Sign("L"),
        display: Some("L"),
        test: letter_l,
    },
    SignRule {
        gesture: Gesture::Sign("Z"),
        display: Some("Z"),
        test: index_z_stroke,
    },
    SignRule {
        gesture: Gesture::Sign("D"),
        display: Some("D"),
        test: index_only,
    },
    SignRule {
        gesture: Gesture::Sign("Y"),
        display: Some("Y"),
        test: thumb_pinky,
    },
    SignRule {
        gesture: Gesture::Sign("I"),
        display: Some("I"),
        test: pinky_only,
    },
    SignRule {
        gesture: Gesture::Sign("B"),
        display: Some("B"),
        test: four_up_thumb_tucked,
    },
    SignRule {
        gesture: Gesture::Sign("A"),
        display: Some("A"),
        test: closed_thumb_side,
    },
    SignRule {
        gesture: Gesture::Fist,
        display: None,
        test: fist,
    },
];
