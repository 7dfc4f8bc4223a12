//! Hand landmark geometry.
//!
//! A detector (an external collaborator) delivers 21 normalized 2-D points
//! per hand each frame. This module names the anatomical indices and derives
//! the per-frame [`HandFeatures`] that every grammar predicate reads, so
//! landmark bookkeeping happens exactly once per hand per frame.

use glam::Vec2;

use crate::constants::*;

/// Points per detected hand.
pub const LANDMARKS_PER_HAND: usize = 21;

/// Anatomical landmark indices within a [`HandSample`].
pub mod idx {
    pub const WRIST: usize = 0;
    pub const THUMB_MCP: usize = 2;
    pub const THUMB_IP: usize = 3;
    pub const THUMB_TIP: usize = 4;
    pub const INDEX_MCP: usize = 5;
    pub const INDEX_PIP: usize = 6;
    pub const INDEX_TIP: usize = 8;
    /// Middle-finger knuckle, used as the palm center.
    pub const PALM: usize = 9;
    pub const MIDDLE_PIP: usize = 10;
    pub const MIDDLE_TIP: usize = 12;
    pub const RING_MCP: usize = 13;
    pub const RING_PIP: usize = 14;
    pub const RING_TIP: usize = 16;
    pub const PINKY_MCP: usize = 17;
    pub const PINKY_PIP: usize = 18;
    pub const PINKY_TIP: usize = 20;
}

/// One detected hand in one frame: 21 normalized landmarks, x and y in
/// \[0, 1\] with y growing downward.
#[derive(Clone, Debug)]
pub struct HandSample {
    pub points: [Vec2; LANDMARKS_PER_HAND],
}

impl HandSample {
    #[inline]
    pub fn point(&self, i: usize) -> Vec2 {
        self.points[i]
    }
}

/// The four non-thumb fingers, in index order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Finger {
    Index,
    Middle,
    Ring,
    Pinky,
}

impl Finger {
    pub const ALL: [Finger; 4] = [Finger::Index, Finger::Middle, Finger::Ring, Finger::Pinky];

    pub fn tip(self) -> usize {
        match self {
            Finger::Index => idx::INDEX_TIP,
            Finger::Middle => idx::MIDDLE_TIP,
            Finger::Ring => idx::RING_TIP,
            Finger::Pinky => idx::PINKY_TIP,
        }
    }

    pub fn pip(self) -> usize {
        match self {
            Finger::Index => idx::INDEX_PIP,
            Finger::Middle => idx::MIDDLE_PIP,
            Finger::Ring => idx::RING_PIP,
            Finger::Pinky => idx::PINKY_PIP,
        }
    }

    pub fn mcp(self) -> usize {
        match self {
            Finger::Index => idx::INDEX_MCP,
            Finger::Middle => idx::PALM,
            Finger::Ring => idx::RING_MCP,
            Finger::Pinky => idx::PINKY_MCP,
        }
    }
}

/// Geometry derived from one [`HandSample`], computed once per frame.
#[derive(Clone, Debug)]
pub struct HandFeatures {
    pub wrist: Vec2,
    pub palm: Vec2,
    pub thumb_tip: Vec2,
    pub index_tip: Vec2,
    pub middle_tip: Vec2,
    pub ring_tip: Vec2,
    pub pinky_tip: Vec2,
    /// Tip above its mid joint, per finger (index order).
    pub finger_up: [bool; 4],
    /// Thumb splayed: tip-to-base distance beats ip-to-base by a ratio.
    pub thumb_out: bool,
    /// Lateral offset of the thumb tip from the index knuckle.
    pub thumb_lateral: f32,
    /// Thumb tip minus wrist, vertical (positive = below).
    pub thumb_drop: f32,
    /// Thumb-to-index fingertip distance.
    pub pinch: f32,
    /// Largest fingertip-to-thumb-tip distance across the four fingers.
    pub bunch: f32,
    /// Index-to-middle fingertip distance.
    pub pair_spread: f32,
    /// Index and middle both extended sideways (lateral reach dominates).
    pub pair_horizontal: bool,
}

impl HandFeatures {
    pub fn from_sample(hand: &HandSample) -> Self {
        let mut finger_up = [false; 4];
        for (i, f) in Finger::ALL.iter().enumerate() {
            finger_up[i] = hand.point(f.tip()).y < hand.point(f.pip()).y;
        }

        let thumb_tip = hand.point(idx::THUMB_TIP);
        let thumb_base = hand.point(idx::THUMB_MCP);
        let tip_reach = thumb_tip.distance(thumb_base);
        let ip_reach = hand.point(idx::THUMB_IP).distance(thumb_base);
        let thumb_out = tip_reach > ip_reach * THUMB_EXTENDED_RATIO;

        let tips = [
            hand.point(idx::INDEX_TIP),
            hand.point(idx::MIDDLE_TIP),
            hand.point(idx::RING_TIP),
            hand.point(idx::PINKY_TIP),
        ];
        let bunch = tips
            .iter()
            .map(|t| t.distance(thumb_tip))
            .fold(0.0_f32, f32::max);

        let pair_horizontal = [Finger::Index, Finger::Middle].iter().all(|f| {
            let reach = hand.point(f.tip()) - hand.point(f.mcp());
            reach.x.abs() > HORIZONTAL_ASPECT * reach.y.abs()
                && reach.length() > HORIZONTAL_MIN_REACH
        });

        let wrist = hand.point(idx::WRIST);
        Self {
            wrist,
            palm: hand.point(idx::PALM),
            thumb_tip,
            index_tip: tips[0],
            middle_tip: tips[1],
            ring_tip: tips[2],
            pinky_tip: tips[3],
            finger_up,
            thumb_out,
            thumb_lateral: (thumb_tip.x - hand.point(idx::INDEX_MCP).x).abs(),
            thumb_drop: thumb_tip.y - wrist.y,
            pinch: thumb_tip.distance(tips[0]),
            bunch,
            pair_spread: tips[0].distance(tips[1]),
            pair_horizontal,
        }
    }

    #[inline]
    pub fn up(&self, f: Finger) -> bool {
        self.finger_up[f as usize]
    }

    pub fn all_up(&self) -> bool {
        self.finger_up.iter().all(|&u| u)
    }

    pub fn all_down(&self) -> bool {
        self.finger_up.iter().all(|&u| !u)
    }

    /// Index extended, middle/ring/pinky down.
    pub fn only_index(&self) -> bool {
        self.finger_up == [true, false, false, false]
    }

    /// Pinky extended, index/middle/ring down.
    pub fn only_pinky(&self) -> bool {
        self.finger_up == [false, false, false, true]
    }

    /// Index and middle extended, ring and pinky down.
    pub fn pair_up(&self) -> bool {
        self.finger_up == [true, true, false, false]
    }
}
