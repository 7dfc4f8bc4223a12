/// Tuning constants for the gesture pipeline and the particle field.
///
/// These express intended behavior (hold counts, thresholds in normalized
/// landmark units, pixel-space forces) and keep magic numbers out of the
/// code.
// Viewport profile
pub const NARROW_VIEWPORT_PX: f32 = 600.0;

// Particle pool (fixed for the life of the field)
pub const PARTICLE_COUNT: usize = 1400;
pub const PARTICLE_COUNT_NARROW: usize = 800;
pub const STAR_COUNT: usize = 200;
pub const STAR_COUNT_NARROW: usize = 120;

// Ambient drift
pub const BASE_SPEED: f32 = 0.3; // initial velocity spread (px/tick)
pub const AMBIENT_JITTER: f32 = 0.02;
pub const AMBIENT_DAMPING: f32 = 0.99;

// Fist repulsion (pixel space)
pub const REPEL_RADIUS: f32 = 130.0;
pub const REPEL_RADIUS_NARROW: f32 = 80.0;
pub const REPEL_STRENGTH: f32 = 8.0;

// Text materialization
pub const TEXT_PARTICLE_BUDGET: usize = 800;
pub const TEXT_FORM_SPEED: f32 = 0.06; // fraction of target delta gained per tick
pub const TEXT_FORM_DAMPING: f32 = 0.82;
pub const TEXT_ALPHA_RISE: f32 = 0.04;
pub const TEXT_SCATTER_SPEED: f32 = 0.04; // text alpha decay per tick
pub const SCATTER_JITTER: f32 = 0.5;
pub const SCATTER_FRICTION: f32 = 0.92;

// Toroidal wrap margin (px past each edge before re-entry)
pub const WRAP_MARGIN: f32 = 10.0;

// Particle pulse
pub const PULSE_AMPLITUDE: f32 = 0.15;
pub const PULSE_SPEED_MIN: f32 = 0.005;
pub const PULSE_SPEED_SPAN: f32 = 0.02;
pub const PARTICLE_ALPHA_MIN: f32 = 0.3;
pub const PARTICLE_ALPHA_SPAN: f32 = 0.6;
pub const PARTICLE_SIZE_MIN: f32 = 0.5;
pub const PARTICLE_SIZE_SPAN: f32 = 2.5;
pub const GLOW_RADIUS_FACTOR: f32 = 3.0;
pub const GLOW_ALPHA_FACTOR: f32 = 0.15;

// Star twinkle
pub const STAR_SIZE_MIN: f32 = 0.2;
pub const STAR_SIZE_SPAN: f32 = 1.5;
pub const TWINKLE_SPEED_MIN: f32 = 0.01;
pub const TWINKLE_SPEED_SPAN: f32 = 0.03;
pub const STAR_ALPHA_BASE: f32 = 0.3;
pub const STAR_ALPHA_SWING: f32 = 0.3;

// Debounce
pub const HOLD_FRAMES: u32 = 10;
pub const HOLD_FRAMES_SPELLING: u32 = 8;
pub const LETTER_CONFIRM_FRAMES: u32 = 15;

// Motion history
pub const HISTORY_CAPACITY: usize = 25;
pub const OSCILLATION_WINDOW: usize = 18;
pub const OSCILLATION_MIN_SWINGS: usize = 3;
pub const OSCILLATION_MIN_STEP: f32 = 0.002;
pub const Z_STROKE_WINDOW: usize = 12;
pub const Z_SEGMENT_MIN: f32 = 0.03; // per-segment net displacement
pub const SWEEP_WINDOW: usize = 14;
pub const SWEEP_MIN_SHIFT: f32 = 0.25;
pub const SWEEP_CONSISTENCY: f32 = 0.7; // share of steps moving with the net direction

// Geometry thresholds (normalized landmark units)
pub const THUMB_EXTENDED_RATIO: f32 = 1.2; // tip-to-base vs ip-to-base
pub const BUNCH_THRESHOLD: f32 = 0.07; // all fingertips within this of the thumb tip
pub const TWO_HAND_TIP_THRESHOLD: f32 = 0.12;
pub const THUMB_LATERAL_MIN: f32 = 0.08;
pub const PAIR_SPREAD_MIN: f32 = 0.06; // index/middle tip gap for the spread pair
pub const HORIZONTAL_ASPECT: f32 = 1.5; // lateral span over vertical span
pub const HORIZONTAL_MIN_REACH: f32 = 0.1; // tip-to-knuckle reach for a sideways finger
pub const THUMB_VERTICAL_MARGIN: f32 = 0.08; // thumb tip above/below wrist

// Text raster
pub const RASTER_GRID_STEP: u32 = 6;
pub const RASTER_GRID_STEP_NARROW: u32 = 4;
pub const RASTER_ALPHA_THRESHOLD: u8 = 128;
pub const MAX_TEXT_WIDTH_FRAC: f32 = 0.85;
pub const LINE_HEIGHT_FACTOR: f32 = 1.2;
pub const FONT_VIEWPORT_FRAC: f32 = 0.08;
pub const FONT_MAX_PX: f32 = 100.0;
pub const FONT_VIEWPORT_FRAC_NARROW: f32 = 0.14;
pub const FONT_MAX_PX_NARROW: f32 = 60.0;

// Fist cursor glow
pub const FIST_CORE_RADIUS: f32 = 4.0;
pub const FIST_GLOW_ALPHA: f32 = 0.12;
pub const FIST_CORE_ALPHA: f32 = 0.7;

// Nebula drift (scene-clock driven)
pub const NEBULA_ALPHA: f32 = 0.04;
pub const NEBULA_CLOCK_RATE: f32 = 0.1;

// Palettes: near-white particle glows and cool star tints
pub const GLOW_COLORS: [[f32; 3]; 5] = [
    [1.0, 1.0, 1.0],
    [0.902, 0.922, 1.0],
    [0.961, 0.961, 1.0],
    [0.863, 0.902, 0.98],
    [0.98, 0.98, 1.0],
];

pub const STAR_COLORS: [[f32; 3]; 8] = [
    [1.0, 1.0, 1.0],
    [0.941, 0.941, 1.0],
    [0.91, 0.91, 1.0],
    [0.98, 0.98, 0.996],
    [0.961, 0.961, 1.0],
    [0.867, 0.894, 1.0],
    [0.933, 0.933, 1.0],
    [1.0, 1.0, 1.0],
];

// Deep-space background and nebula tints
pub const SPACE_INNER: [f32; 3] = [0.039, 0.039, 0.102];
pub const SPACE_OUTER: [f32; 3] = [0.0, 0.0, 0.02];
pub const NEBULA_VIOLET: [f32; 3] = [0.165, 0.102, 0.369];
pub const NEBULA_BLUE: [f32; 3] = [0.039, 0.165, 0.369];
