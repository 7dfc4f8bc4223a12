//! Detector seam: a hand-landmark producer behind a channel.
//!
//! The detector runs at its own cadence on its own thread and delivers
//! [`DetectorFrame`]s over an `mpsc` channel; the session drains whatever
//! has arrived at each draw tick and never blocks waiting for a detection.
//! Consumers don't need to know whether frames came from real hardware or a
//! simulator. Dropping the receiver disconnects the source, which exits on
//! its next send.

use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use smallvec::SmallVec;

use crate::landmark::HandSample;

/// One detector delivery: zero, one, or two detected hands.
#[derive(Clone, Debug, Default)]
pub struct DetectorFrame {
    pub hands: SmallVec<[HandSample; 2]>,
}

/// Knobs forwarded to the detector collaborator.
#[derive(Clone, Debug)]
pub struct DetectorOptions {
    pub max_hands: usize,
    pub model_complexity: u32,
    pub min_detection_confidence: f32,
    pub min_tracking_confidence: f32,
}

impl Default for DetectorOptions {
    fn default() -> Self {
        Self {
            max_hands: 2,
            model_complexity: 1,
            min_detection_confidence: 0.7,
            min_tracking_confidence: 0.6,
        }
    }
}

/// Anything that can deliver [`DetectorFrame`]s over a channel.
pub trait HandSource: Send + 'static {
    fn run(self: Box<Self>, tx: Sender<DetectorFrame>);
}

/// Spawn a hand source on its own thread and return the receiving end.
pub fn spawn_hand_source<S: HandSource>(source: S) -> Receiver<DetectorFrame> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || Box::new(source).run(tx));
    rx
}
