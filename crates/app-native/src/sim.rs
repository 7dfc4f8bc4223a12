//! Simulated hand-landmark source.
//!
//! Stands in for the camera + detector pipeline: a scripted pose timeline is
//! synthesized as 21-landmark frames at ~30 Hz with per-point jitter, so the
//! whole classify → debounce → materialize path runs without hardware. The
//! session consumes it through the same channel a real detector would feed.

use std::sync::mpsc::Sender;
use std::thread;
use std::time::Duration;

use app_core::detect::{DetectorFrame, DetectorOptions, HandSource};
use app_core::error::{Result, SetupError};
use app_core::landmark::{idx, HandSample, LANDMARKS_PER_HAND};
use glam::Vec2;
use rand::prelude::*;
use smallvec::smallvec;

const FRAME_INTERVAL: Duration = Duration::from_millis(33);
const JITTER: f32 = 0.002;

#[derive(Clone, Copy, Debug)]
enum Pose {
    Absent,
    Open,
    /// Open palm oscillating laterally (reads as a wave).
    Waving,
    Fist,
    /// Fist sweeping across the frame, pushing particles around.
    FistDrift,
    IndexOnly,
    PairSpread,
    PairSideways,
    PinkyOnly,
    Bunched,
}

struct Step {
    pose: Pose,
    seconds: f32,
}

fn phrase_script() -> Vec<Step> {
    vec![
        Step { pose: Pose::Open, seconds: 2.0 },
        Step { pose: Pose::Waving, seconds: 2.5 },
        Step { pose: Pose::Absent, seconds: 0.8 },
        Step { pose: Pose::PairSpread, seconds: 2.0 },
        Step { pose: Pose::FistDrift, seconds: 3.0 },
        Step { pose: Pose::IndexOnly, seconds: 2.0 },
        Step { pose: Pose::Bunched, seconds: 2.0 },
        Step { pose: Pose::Absent, seconds: 1.0 },
    ]
}

fn spelling_script() -> Vec<Step> {
    vec![
        Step { pose: Pose::PairSideways, seconds: 1.6 },
        Step { pose: Pose::Absent, seconds: 0.6 },
        Step { pose: Pose::PinkyOnly, seconds: 1.6 },
        Step { pose: Pose::Absent, seconds: 1.2 },
        Step { pose: Pose::Fist, seconds: 1.5 },
        Step { pose: Pose::Absent, seconds: 0.8 },
    ]
}

pub struct SimHandSource {
    script: Vec<Step>,
    seed: u64,
}

impl SimHandSource {
    /// "Acquire" the simulated detector. Mirrors a real acquisition: invalid
    /// options are a terminal setup error, not a per-frame condition.
    pub fn acquire(options: &DetectorOptions, spelling: bool, seed: u64) -> Result<Self> {
        if options.max_hands == 0 {
            return Err(SetupError::Detector(
                "at least one hand slot is required".to_owned(),
            ));
        }
        Ok(Self {
            script: if spelling {
                spelling_script()
            } else {
                phrase_script()
            },
            seed,
        })
    }
}

impl HandSource for SimHandSource {
    fn run(self: Box<Self>, tx: Sender<DetectorFrame>) {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let total: f32 = self.script.iter().map(|s| s.seconds).sum();
        let mut clock = 0.0_f32;

        loop {
            let mut t = clock % total;
            let step = self
                .script
                .iter()
                .find(|s| {
                    let hit = t < s.seconds;
                    if !hit {
                        t -= s.seconds;
                    }
                    hit
                })
                .expect("script covers the full cycle");

            let frame = match step.pose {
                Pose::Absent => DetectorFrame::default(),
                pose => DetectorFrame {
                    hands: smallvec![synth_hand(pose, t, &mut rng)],
                },
            };
            if tx.send(frame).is_err() {
                // Consumer hung up: the session stopped.
                return;
            }
            clock += FRAME_INTERVAL.as_secs_f32();
            thread::sleep(FRAME_INTERVAL);
        }
    }
}

/// Build one landmark set for a pose at `t` seconds into its step.
fn synth_hand(pose: Pose, t: f32, rng: &mut StdRng) -> HandSample {
    let center = match pose {
        Pose::Waving => Vec2::new(0.5 + 0.05 * (t * 20.0).sin(), 0.5),
        Pose::FistDrift => Vec2::new(0.25 + 0.5 * (t / 3.0).min(1.0), 0.5),
        _ => Vec2::new(0.5, 0.5),
    };
    let mut hand = base_hand(center);
    match pose {
        Pose::Open | Pose::Waving => {
            for f in 0..4 {
                raise(&mut hand, f);
            }
        }
        Pose::IndexOnly => raise(&mut hand, 0),
        Pose::PinkyOnly => raise(&mut hand, 3),
        Pose::PairSpread => {
            hand.points[idx::INDEX_TIP] = center + Vec2::new(-0.07, -0.20);
            hand.points[idx::MIDDLE_TIP] = center + Vec2::new(0.03, -0.20);
        }
        Pose::PairSideways => {
            hand.points[idx::INDEX_PIP] = center + Vec2::new(-0.12, -0.01);
            hand.points[idx::INDEX_TIP] = center + Vec2::new(-0.22, -0.02);
            hand.points[idx::MIDDLE_PIP] = center + Vec2::new(-0.08, 0.00);
            hand.points[idx::MIDDLE_TIP] = center + Vec2::new(-0.18, -0.01);
        }
        Pose::Bunched => {
            let thumb = center + Vec2::new(-0.04, -0.10);
            hand.points[idx::THUMB_TIP] = thumb;
            hand.points[idx::INDEX_TIP] = thumb + Vec2::new(0.01, -0.02);
            hand.points[idx::MIDDLE_TIP] = thumb + Vec2::new(0.02, 0.01);
            hand.points[idx::RING_TIP] = thumb + Vec2::new(-0.01, 0.02);
            hand.points[idx::PINKY_TIP] = thumb + Vec2::new(-0.02, -0.01);
        }
        Pose::Fist | Pose::FistDrift | Pose::Absent => {}
    }
    for p in &mut hand.points {
        *p += Vec2::new(
            (rng.gen::<f32>() - 0.5) * 2.0 * JITTER,
            (rng.gen::<f32>() - 0.5) * 2.0 * JITTER,
        );
    }
    hand
}

/// Closed hand centered on `center`: fingers curled, thumb tucked.
fn base_hand(center: Vec2) -> HandSample {
    let mut points = [Vec2::ZERO; LANDMARKS_PER_HAND];
    points[idx::WRIST] = center + Vec2::new(0.0, 0.15);
    points[1] = center + Vec2::new(-0.05, 0.10);
    points[idx::THUMB_MCP] = center + Vec2::new(-0.08, 0.06);
    points[idx::THUMB_IP] = center + Vec2::new(-0.10, 0.01);
    points[idx::THUMB_TIP] = center + Vec2::new(-0.08, 0.02);
    let cols = [-0.04_f32, 0.0, 0.04, 0.08];
    for (f, col) in cols.into_iter().enumerate() {
        let mcp = 5 + f * 4;
        points[mcp] = center + Vec2::new(col, 0.0);
        points[mcp + 1] = center + Vec2::new(col, -0.08); // pip
        points[mcp + 2] = center + Vec2::new(col, -0.02); // dip
        points[mcp + 3] = center + Vec2::new(col, 0.0); // tip, curled
    }
    HandSample { points }
}

fn raise(hand: &mut HandSample, finger: usize) {
    let tip = 5 + finger * 4 + 3;
    hand.points[tip].y -= 0.20;
}
