//! Per-hand motion history.
//!
//! A bounded ring of feature snapshots feeds the motion-dependent grammar
//! predicates: net displacement, lateral oscillation, and the three-segment
//! Z stroke. Cleared whenever the hand disappears, so stale motion never
//! leaks into a new detection.

use std::collections::VecDeque;

use glam::Vec2;

use crate::constants::*;
use crate::landmark::HandFeatures;

/// One frame's worth of motion-relevant features.
#[derive(Clone, Debug)]
pub struct Snapshot {
    pub wrist: Vec2,
    pub palm: Vec2,
    pub thumb_tip: Vec2,
    pub index_tip: Vec2,
    pub pinch: f32,
    pub finger_up: [bool; 4],
}

/// Net displacement over a trailing window.
#[derive(Clone, Copy, Debug)]
pub struct Motion {
    pub delta: Vec2,
    pub mag: f32,
}

/// Bounded, oldest-evicting sequence of [`Snapshot`]s for one hand slot.
#[derive(Debug)]
pub struct HandHistory {
    samples: VecDeque<Snapshot>,
    capacity: usize,
}

impl Default for HandHistory {
    fn default() -> Self {
        Self::new(HISTORY_CAPACITY)
    }
}

impl HandHistory {
    pub fn new(capacity: usize) -> Self {
        Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, f: &HandFeatures) {
        if self.samples.len() >= self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(Snapshot {
            wrist: f.wrist,
            palm: f.palm,
            thumb_tip: f.thumb_tip,
            index_tip: f.index_tip,
            pinch: f.pinch,
            finger_up: f.finger_up,
        });
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Net wrist displacement over the trailing `frames` samples, or `None`
    /// if the history is shorter than that.
    pub fn motion(&self, frames: usize) -> Option<Motion> {
        if self.samples.len() < frames || frames < 2 {
            return None;
        }
        let start = &self.samples[self.samples.len() - frames];
        let end = self.samples.back()?;
        let delta = end.wrist - start.wrist;
        Some(Motion {
            delta,
            mag: delta.length(),
        })
    }

    /// Side-to-side wave: at least [`OSCILLATION_MIN_SWINGS`] sign reversals
    /// of the wrist's lateral step within the trailing window.
    pub fn oscillation_x(&self, window: usize) -> bool {
        if self.samples.len() < window {
            return false;
        }
        let recent: Vec<f32> = self
            .samples
            .iter()
            .skip(self.samples.len() - window)
            .map(|s| s.wrist.x)
            .collect();
        let mut swings = 0;
        for i in 2..recent.len() {
            let prev = recent[i - 1] - recent[i - 2];
            let curr = recent[i] - recent[i - 1];
            if prev * curr < 0.0 && curr.abs() > OSCILLATION_MIN_STEP {
                swings += 1;
            }
        }
        swings >= OSCILLATION_MIN_SWINGS
    }

    /// Sustained lateral shift: net wrist x-displacement over the window
    /// exceeds `min_shift`, with most steps moving the same way.
    pub fn sustained_shift_x(&self, window: usize, min_shift: f32) -> bool {
        if self.samples.len() < window {
            return false;
        }
        let recent: Vec<f32> = self
            .samples
            .iter()
            .skip(self.samples.len() - window)
            .map(|s| s.wrist.x)
            .collect();
        let net = recent[recent.len() - 1] - recent[0];
        if net.abs() < min_shift {
            return false;
        }
        let with_net = recent
            .windows(2)
            .filter(|w| (w[1] - w[0]) * net > 0.0)
            .count();
        with_net as f32 >= SWEEP_CONSISTENCY * (recent.len() - 1) as f32
    }

    /// Three-segment Z stroke traced by the index fingertip over the most
    /// recent [`Z_STROKE_WINDOW`] samples: rightward bar, down-left diagonal,
    /// rightward bar.
    pub fn z_stroke(&self) -> bool {
        let window = Z_STROKE_WINDOW;
        if self.samples.len() < window {
            return false;
        }
        let trail: Vec<Vec2> = self
            .samples
            .iter()
            .skip(self.samples.len() - window)
            .map(|s| s.index_tip)
            .collect();
        let seg = window / 3;
        let net = |a: usize, b: usize| trail[b] - trail[a];
        let first = net(0, seg);
        let second = net(seg, 2 * seg);
        let third = net(2 * seg, window - 1);

        first.x > Z_SEGMENT_MIN
            && first.y.abs() < first.x
            && second.x < -Z_SEGMENT_MIN
            && second.y > Z_SEGMENT_MIN
            && third.x > Z_SEGMENT_MIN
            && third.y.abs() < third.x
    }
}
