// End-to-end session tests: detections in, stable gestures and draw
// commands out, plus the detector channel plumbing.

mod common;

use std::sync::mpsc::Sender;

use app_core::constants::HOLD_FRAMES;
use app_core::detect::{spawn_hand_source, DetectorFrame, HandSource};
use app_core::gesture::Gesture;
use app_core::render::{DrawCommand, Viewport};
use app_core::session::{GestureMode, Session, SessionConfig};
use common::*;
use smallvec::smallvec;

fn new_session(mode: GestureMode) -> Session {
    let config = SessionConfig {
        mode,
        seed: 5,
        ..SessionConfig::default()
    };
    Session::new(
        config,
        Viewport::new(800.0, 600.0),
        Box::new(MockGlyphs::default()),
    )
}

fn frame_of(hands: &[app_core::landmark::HandSample]) -> DetectorFrame {
    DetectorFrame {
        hands: hands.iter().cloned().collect(),
    }
}

#[test]
fn held_sign_materializes_and_fist_scatters() {
    let mut session = new_session(GestureMode::Phrases);

    session.on_detection(&frame_of(&[open_hand()]));
    assert_eq!(session.raw_gesture(), Gesture::Sign("open"));
    assert_eq!(session.gesture_label(), "WELCOME!");
    assert_eq!(session.status_line(), "");

    for _ in 0..HOLD_FRAMES {
        session.tick(1.0 / 60.0);
    }
    assert_eq!(session.stable_gesture(), Gesture::Sign("open"));
    assert!(session.field().text_mode());

    // A held fist tears the text down and drives repulsion.
    session.on_detection(&frame_of(&[closed_hand()]));
    assert_eq!(session.gesture_label(), "Fist detected");
    for _ in 0..HOLD_FRAMES {
        session.tick(1.0 / 60.0);
    }
    assert_eq!(session.stable_gesture(), Gesture::Fist);
    assert!(!session.field().text_mode());
}

#[test]
fn losing_the_hand_resets_raw_state_but_ticks_continue() {
    let mut session = new_session(GestureMode::Phrases);

    session.on_detection(&frame_of(&[index_only()]));
    assert_eq!(session.raw_gesture(), Gesture::Sign("hello"));

    session.on_detection(&frame_of(&[]));
    assert_eq!(session.raw_gesture(), Gesture::None);
    assert_eq!(session.hand_count(), 0);
    assert_eq!(session.status_line(), "Show your hand to the camera");

    // Draw ticks between detections are fine; the last raw gesture is reused.
    for _ in 0..30 {
        session.tick(1.0 / 60.0);
    }
    assert_eq!(session.stable_gesture(), Gesture::None);
}

#[test]
fn spelling_session_collects_letters_into_the_buffer() {
    let mut session = new_session(GestureMode::Spelling);

    session.on_detection(&frame_of(&[pinky_only()]));
    assert_eq!(session.raw_gesture(), Gesture::Sign("I"));
    for _ in 0..40 {
        session.tick(1.0 / 60.0);
    }
    assert_eq!(session.spelling_buffer(), "I");
    assert!(session.field().text_mode());

    session.on_detection(&frame_of(&[closed_hand()]));
    for _ in 0..20 {
        session.tick(1.0 / 60.0);
    }
    assert_eq!(session.spelling_buffer(), "");
    assert!(!session.field().text_mode());
}

#[test]
fn draw_emits_background_then_stars_then_particles() {
    let mut session = new_session(GestureMode::Phrases);
    session.tick(1.0 / 60.0);

    let mut commands = Vec::new();
    session.draw(&mut commands);
    // Background gradient plus both nebulae lead the frame.
    assert!(matches!(commands[0], DrawCommand::Gradient { .. }));
    assert!(matches!(commands[1], DrawCommand::Gradient { .. }));
    assert!(matches!(commands[2], DrawCommand::Gradient { .. }));
    let disks = commands
        .iter()
        .filter(|c| matches!(c, DrawCommand::Disk { .. }))
        .count();
    assert!(disks > 0);
}

#[test]
fn raw_fist_drives_repulsion_before_confirmation() {
    let mut session = new_session(GestureMode::Phrases);
    session.on_detection(&frame_of(&[closed_hand()]));
    // One tick, far fewer than the hold threshold.
    session.tick(1.0 / 60.0);

    let mut commands = Vec::new();
    session.draw(&mut commands);
    // The fist glow rides at the end of the command stream.
    assert!(matches!(
        commands.last(),
        Some(DrawCommand::Disk { radius, .. }) if *radius == 4.0
    ));
}

#[test]
fn resize_is_survivable_mid_session() {
    let mut session = new_session(GestureMode::Phrases);
    session.on_detection(&frame_of(&[open_hand()]));
    for _ in 0..5 {
        session.tick(1.0 / 60.0);
    }
    session.resize(Viewport::new(500.0, 400.0));
    for _ in 0..20 {
        session.tick(1.0 / 60.0);
    }
    let mut commands = Vec::new();
    session.draw(&mut commands);
    assert!(!commands.is_empty());
}

struct ThreeFrames;

impl HandSource for ThreeFrames {
    fn run(self: Box<Self>, tx: Sender<DetectorFrame>) {
        for _ in 0..3 {
            let frame = DetectorFrame {
                hands: smallvec![open_hand()],
            };
            if tx.send(frame).is_err() {
                return;
            }
        }
    }
}

#[test]
fn hand_sources_deliver_over_the_channel_and_disconnect() {
    let rx = spawn_hand_source(ThreeFrames);
    let frames: Vec<DetectorFrame> = rx.iter().collect();
    assert_eq!(frames.len(), 3);
    assert_eq!(frames[0].hands.len(), 1);
}
