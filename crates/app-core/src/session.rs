//! The session: one object wiring classifier, debouncer, raster, and field.
//!
//! Created on start, fed detections as they arrive, ticked once per
//! displayed frame, and dropped on stop. Detection cadence and draw cadence
//! are independent: a tick without a fresh detection reuses the last raw
//! gesture, and any number of detections may land between two ticks.

use glam::Vec2;

use crate::debounce::{DebounceConfig, DebounceEvent, GestureDebouncer};
use crate::detect::{DetectorFrame, DetectorOptions};
use crate::field::{FieldConfig, ParticleField};
use crate::gesture::{classify_frame, Gesture};
use crate::grammar::Grammar;
use crate::history::HandHistory;
use crate::landmark::HandFeatures;
use crate::raster::{sample_text, GlyphRaster};
use crate::render::{DrawCommand, Viewport};

/// Which built-in grammar the session classifies against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureMode {
    /// Each sign materializes its phrase.
    Phrases,
    /// Letter signs spell into the confirmation buffer.
    Spelling,
}

#[derive(Clone, Debug)]
pub struct SessionConfig {
    pub mode: GestureMode,
    pub seed: u64,
    pub detector: DetectorOptions,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            mode: GestureMode::Phrases,
            seed: 7,
            detector: DetectorOptions::default(),
        }
    }
}

pub struct Session {
    grammar: Grammar,
    debouncer: GestureDebouncer,
    histories: [HandHistory; 2],
    field: ParticleField,
    raster: Box<dyn GlyphRaster>,
    viewport: Viewport,
    raw: Gesture,
    hand_count: usize,
    fist_px: Option<Vec2>,
    status: &'static str,
    label: String,
    events: Vec<DebounceEvent>,
}

const STATUS_NO_HAND: &str = "Show your hand to the camera";

impl Session {
    pub fn new(config: SessionConfig, viewport: Viewport, raster: Box<dyn GlyphRaster>) -> Self {
        let grammar = match config.mode {
            GestureMode::Phrases => Grammar::phrases(),
            GestureMode::Spelling => Grammar::letters(),
        };
        let debouncer = GestureDebouncer::new(DebounceConfig::for_grammar(&grammar));
        let field = ParticleField::new(FieldConfig::for_viewport(viewport, config.seed), viewport);
        log::info!(
            "session start: grammar={} viewport={}x{}",
            grammar.name,
            viewport.width,
            viewport.height
        );
        Self {
            grammar,
            debouncer,
            histories: [HandHistory::default(), HandHistory::default()],
            field,
            raster,
            viewport,
            raw: Gesture::None,
            hand_count: 0,
            fist_px: None,
            status: STATUS_NO_HAND,
            label: String::new(),
            events: Vec::new(),
        }
    }

    /// Ingest one detector delivery: update histories, classify the frame,
    /// and refresh the repulsion source and observational labels.
    pub fn on_detection(&mut self, frame: &DetectorFrame) {
        if frame.hands.is_empty() {
            self.hand_count = 0;
            self.raw = Gesture::None;
            self.fist_px = None;
            for h in &mut self.histories {
                h.clear();
            }
            self.status = STATUS_NO_HAND;
            self.label.clear();
            return;
        }

        let features: Vec<HandFeatures> = frame
            .hands
            .iter()
            .take(2)
            .map(HandFeatures::from_sample)
            .collect();
        for (i, f) in features.iter().enumerate() {
            self.histories[i].push(f);
        }
        if features.len() < 2 {
            self.histories[1].clear();
        }

        self.raw = classify_frame(&features, &self.histories, &self.grammar);
        self.hand_count = features.len();

        // Repulsion follows the raw fist immediately; only materialization
        // waits for the debouncer. The detector's x is mirrored into screen
        // space (selfie view).
        self.fist_px = if self.raw == Gesture::Fist {
            let palm = features[0].palm;
            Some(Vec2::new(
                (1.0 - palm.x) * self.viewport.width,
                palm.y * self.viewport.height,
            ))
        } else {
            None
        };

        self.status = "";
        self.label.clear();
        if let Some(text) = self.grammar.display_for(self.raw) {
            self.label.push_str(text);
        } else if self.raw == Gesture::Fist {
            self.label.push_str("Fist detected");
        } else {
            self.label.push_str("Tracking hand...");
        }
    }

    /// Advance one frame: debounce the current raw gesture, apply any
    /// confirmed transition to the field, then step the simulation.
    pub fn tick(&mut self, dt: f32) {
        let mut events = std::mem::take(&mut self.events);
        events.clear();
        self.debouncer.observe(self.raw, &self.grammar, &mut events);
        for event in &events {
            match event {
                DebounceEvent::Materialize(text) => self.materialize(text),
                DebounceEvent::Scatter => self.field.scatter(),
                DebounceEvent::LetterCommitted(letter) => {
                    log::debug!("letter committed: {letter}");
                }
                DebounceEvent::BufferCleared => {
                    log::debug!("spelling buffer cleared");
                }
            }
        }
        self.events = events;

        self.field.set_repulsion(self.fist_px);
        self.field.tick(dt);
    }

    fn materialize(&mut self, text: &str) {
        match sample_text(text, self.viewport, self.raster.as_mut()) {
            Ok(points) => self.field.assign_targets(points),
            Err(e) => {
                // Raster failure degrades to a scatter, never a crash.
                log::warn!("text raster failed: {e:#}");
                self.field.assign_targets(Vec::new());
            }
        }
    }

    pub fn draw(&self, out: &mut Vec<DrawCommand>) {
        self.field.draw(out);
    }

    /// React to a viewport change; pool size is fixed, star bounds and the
    /// narrow-profile radius are resampled.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.field.resize(viewport);
    }

    /// Hand-presence status line (empty while a hand is tracked).
    pub fn status_line(&self) -> &str {
        self.status
    }

    /// Display text of the current recognition, for the label surface.
    pub fn gesture_label(&self) -> &str {
        &self.label
    }

    pub fn raw_gesture(&self) -> Gesture {
        self.raw
    }

    pub fn stable_gesture(&self) -> Gesture {
        self.debouncer.stable()
    }

    pub fn spelling_buffer(&self) -> &str {
        self.debouncer.buffer()
    }

    pub fn hand_count(&self) -> usize {
        self.hand_count
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }
}
