//! The particle field: ambient drift, fist repulsion, and text
//! materialization.
//!
//! The pool is allocated once and mutated in place every tick; particles are
//! identified by pool position and never reallocated. Each tick applies, per
//! particle: pulse-phase advance, exactly one of the three velocity rules
//! (converging, scattering, ambient), the guarded repulsion impulse,
//! integration, and the toroidal wrap.

use glam::Vec2;
use rand::prelude::*;

use crate::constants::*;
use crate::render::{rgba, DrawCommand, Viewport};

#[derive(Clone, Debug)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    pub color: usize,
    pub alpha: f32,
    pub pulse: f32,
    pub pulse_speed: f32,
    pub target: Option<Vec2>,
    pub is_text: bool,
    pub text_alpha: f32,
}

#[derive(Clone, Debug)]
pub struct Star {
    pub pos: Vec2,
    pub size: f32,
    pub twinkle: f32,
    pub twinkle_speed: f32,
    pub color: usize,
}

/// Pool sizes and forces, chosen per viewport profile.
#[derive(Clone, Debug)]
pub struct FieldConfig {
    pub particle_count: usize,
    pub star_count: usize,
    pub text_budget: usize,
    pub repel_radius: f32,
    pub repel_strength: f32,
    pub seed: u64,
}

impl FieldConfig {
    pub fn for_viewport(viewport: Viewport, seed: u64) -> Self {
        if viewport.is_narrow() {
            Self {
                particle_count: PARTICLE_COUNT_NARROW,
                star_count: STAR_COUNT_NARROW,
                text_budget: TEXT_PARTICLE_BUDGET,
                repel_radius: REPEL_RADIUS_NARROW,
                repel_strength: REPEL_STRENGTH,
                seed,
            }
        } else {
            Self {
                particle_count: PARTICLE_COUNT,
                star_count: STAR_COUNT,
                text_budget: TEXT_PARTICLE_BUDGET,
                repel_radius: REPEL_RADIUS,
                repel_strength: REPEL_STRENGTH,
                seed,
            }
        }
    }
}

/// Outward impulse on a particle at `pos` from a repulsion source. Zero at
/// the source itself (guarded) and beyond the radius; inside, scaled by
/// `(radius - dist) / radius`.
pub fn repel_impulse(pos: Vec2, source: Vec2, radius: f32, strength: f32) -> Vec2 {
    let delta = pos - source;
    let dist = delta.length();
    if dist <= f32::EPSILON || dist >= radius {
        return Vec2::ZERO;
    }
    let force = (radius - dist) / radius;
    delta / dist * force * strength
}

pub struct ParticleField {
    particles: Vec<Particle>,
    stars: Vec<Star>,
    bounds: Viewport,
    text_mode: bool,
    repel_source: Option<Vec2>,
    repel_radius: f32,
    repel_strength: f32,
    text_budget: usize,
    clock: f32,
    rng: StdRng,
}

impl ParticleField {
    pub fn new(config: FieldConfig, viewport: Viewport) -> Self {
        let mut rng = StdRng::seed_from_u64(config.seed);
        let particles = (0..config.particle_count)
            .map(|_| spawn_particle(&mut rng, viewport))
            .collect();
        let stars = (0..config.star_count)
            .map(|_| spawn_star(&mut rng, viewport))
            .collect();
        Self {
            particles,
            stars,
            bounds: viewport,
            text_mode: false,
            repel_source: None,
            repel_radius: config.repel_radius,
            repel_strength: config.repel_strength,
            text_budget: config.text_budget,
            clock: 0.0,
            rng,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn text_mode(&self) -> bool {
        self.text_mode
    }

    pub fn repel_radius(&self) -> f32 {
        self.repel_radius
    }

    pub fn set_repulsion(&mut self, source: Option<Vec2>) {
        self.repel_source = source;
    }

    /// Assign sampled glyph points as targets: previous assignments are
    /// cleared, the points are shuffled, and `min(budget, points, pool)`
    /// particles become text members. An empty sample leaves the field
    /// scattered.
    pub fn assign_targets(&mut self, mut points: Vec<Vec2>) {
        for p in &mut self.particles {
            p.is_text = false;
            p.target = None;
        }
        points.shuffle(&mut self.rng);
        let count = self
            .text_budget
            .min(points.len())
            .min(self.particles.len());
        for (p, &target) in self.particles.iter_mut().zip(points.iter()).take(count) {
            p.target = Some(target);
            p.is_text = true;
        }
        self.text_mode = count > 0;
        log::debug!("materialize: {count} of {} sampled points", points.len());
    }

    /// Leave materialization; text members fade back to ambient over the
    /// following ticks.
    pub fn scatter(&mut self) {
        self.text_mode = false;
    }

    /// React to a viewport change: stars are redistributed, bounds and the
    /// repulsion radius follow the new profile, the pool size stays fixed.
    pub fn resize(&mut self, viewport: Viewport) {
        self.bounds = viewport;
        self.repel_radius = if viewport.is_narrow() {
            REPEL_RADIUS_NARROW
        } else {
            REPEL_RADIUS
        };
        let rng = &mut self.rng;
        for s in &mut self.stars {
            s.pos = Vec2::new(
                rng.gen::<f32>() * viewport.width,
                rng.gen::<f32>() * viewport.height,
            );
        }
    }

    /// Advance one simulation step. `dt` only drives the decorative scene
    /// clock; the physics constants are per-tick.
    pub fn tick(&mut self, dt: f32) {
        self.clock += dt;
        let bounds = self.bounds;
        let text_mode = self.text_mode;
        let repel = self.repel_source;
        let repel_radius = self.repel_radius;
        let repel_strength = self.repel_strength;
        let rng = &mut self.rng;

        for star in &mut self.stars {
            star.twinkle += star.twinkle_speed;
        }

        for p in &mut self.particles {
            p.pulse += p.pulse_speed;

            let converging = text_mode && p.is_text && p.target.is_some();
            if converging {
                let target = p.target.unwrap();
                p.vel += (target - p.pos) * TEXT_FORM_SPEED;
                p.vel *= TEXT_FORM_DAMPING;
                p.text_alpha = (p.text_alpha + TEXT_ALPHA_RISE).min(1.0);
            } else if p.text_alpha > 0.0 {
                p.text_alpha = (p.text_alpha - TEXT_SCATTER_SPEED).max(0.0);
                if p.text_alpha <= 0.0 {
                    p.is_text = false;
                    p.target = None;
                }
                p.vel.x += (rng.gen::<f32>() - 0.5) * SCATTER_JITTER;
                p.vel.y += (rng.gen::<f32>() - 0.5) * SCATTER_JITTER;
                p.vel *= SCATTER_FRICTION;
            } else {
                p.vel.x += (rng.gen::<f32>() - 0.5) * AMBIENT_JITTER;
                p.vel.y += (rng.gen::<f32>() - 0.5) * AMBIENT_JITTER;
                p.vel *= AMBIENT_DAMPING;
            }

            if let Some(source) = repel {
                p.vel += repel_impulse(p.pos, source, repel_radius, repel_strength);
            }

            p.pos += p.vel;
            wrap(&mut p.pos, bounds);
        }
    }

    /// Emit this frame's draw commands: background, nebulae, stars,
    /// particles (glow + core), and the fist cursor glow.
    pub fn draw(&self, out: &mut Vec<DrawCommand>) {
        let w = self.bounds.width;
        let h = self.bounds.height;
        let t = self.clock * NEBULA_CLOCK_RATE;

        out.push(DrawCommand::Gradient {
            center: self.bounds.center(),
            radius: w * 0.7,
            inner: rgba(SPACE_INNER, 1.0),
            outer: rgba(SPACE_OUTER, 1.0),
        });
        out.push(DrawCommand::Gradient {
            center: Vec2::new(w * 0.3 + t.sin() * 100.0, h * 0.4 + (t * 0.7).cos() * 80.0),
            radius: w * 0.4,
            inner: rgba(NEBULA_VIOLET, NEBULA_ALPHA),
            outer: rgba(NEBULA_VIOLET, 0.0),
        });
        out.push(DrawCommand::Gradient {
            center: Vec2::new(w * 0.7 + (t * 1.2).cos() * 80.0, h * 0.6 + (t * 0.8).sin() * 60.0),
            radius: w * 0.35,
            inner: rgba(NEBULA_BLUE, NEBULA_ALPHA),
            outer: rgba(NEBULA_BLUE, 0.0),
        });

        for s in &self.stars {
            let alpha = STAR_ALPHA_BASE + s.twinkle.sin() * STAR_ALPHA_SWING;
            out.push(DrawCommand::Disk {
                center: s.pos,
                radius: s.size,
                color: rgba(STAR_COLORS[s.color], alpha.max(0.0)),
            });
        }

        for p in &self.particles {
            let pulse_alpha = p.alpha + p.pulse.sin() * PULSE_AMPLITUDE;
            let a = if p.is_text {
                pulse_alpha.max(p.text_alpha)
            } else {
                pulse_alpha
            }
            .clamp(0.0, 1.0);
            let color = GLOW_COLORS[p.color];
            out.push(DrawCommand::Disk {
                center: p.pos,
                radius: p.size * GLOW_RADIUS_FACTOR,
                color: rgba(color, a * GLOW_ALPHA_FACTOR),
            });
            out.push(DrawCommand::Disk {
                center: p.pos,
                radius: p.size,
                color: rgba(color, a),
            });
        }

        if let Some(source) = self.repel_source {
            out.push(DrawCommand::Gradient {
                center: source,
                radius: self.repel_radius,
                inner: [1.0, 1.0, 1.0, FIST_GLOW_ALPHA],
                outer: [0.86, 0.88, 1.0, 0.0],
            });
            out.push(DrawCommand::Disk {
                center: source,
                radius: FIST_CORE_RADIUS,
                color: [1.0, 1.0, 1.0, FIST_CORE_ALPHA],
            });
        }
    }
}

fn spawn_particle(rng: &mut StdRng, viewport: Viewport) -> Particle {
    Particle {
        pos: Vec2::new(
            rng.gen::<f32>() * viewport.width,
            rng.gen::<f32>() * viewport.height,
        ),
        vel: Vec2::new(
            (rng.gen::<f32>() - 0.5) * BASE_SPEED,
            (rng.gen::<f32>() - 0.5) * BASE_SPEED,
        ),
        size: PARTICLE_SIZE_MIN + rng.gen::<f32>() * PARTICLE_SIZE_SPAN,
        color: rng.gen_range(0..GLOW_COLORS.len()),
        alpha: PARTICLE_ALPHA_MIN + rng.gen::<f32>() * PARTICLE_ALPHA_SPAN,
        pulse: rng.gen::<f32>() * std::f32::consts::TAU,
        pulse_speed: PULSE_SPEED_MIN + rng.gen::<f32>() * PULSE_SPEED_SPAN,
        target: None,
        is_text: false,
        text_alpha: 0.0,
    }
}

fn spawn_star(rng: &mut StdRng, viewport: Viewport) -> Star {
    Star {
        pos: Vec2::new(
            rng.gen::<f32>() * viewport.width,
            rng.gen::<f32>() * viewport.height,
        ),
        size: STAR_SIZE_MIN + rng.gen::<f32>() * STAR_SIZE_SPAN,
        twinkle: rng.gen::<f32>() * std::f32::consts::TAU,
        twinkle_speed: TWINKLE_SPEED_MIN + rng.gen::<f32>() * TWINKLE_SPEED_SPAN,
        color: rng.gen_range(0..STAR_COLORS.len()),
    }
}

/// Toroidal boundary: a particle crossing an edge re-enters just past the
/// opposite one.
fn wrap(pos: &mut Vec2, bounds: Viewport) {
    if pos.x < -WRAP_MARGIN {
        pos.x = bounds.width + WRAP_MARGIN;
    } else if pos.x > bounds.width + WRAP_MARGIN {
        pos.x = -WRAP_MARGIN;
    }
    if pos.y < -WRAP_MARGIN {
        pos.y = bounds.height + WRAP_MARGIN;
    } else if pos.y > bounds.height + WRAP_MARGIN {
        pos.y = -WRAP_MARGIN;
    }
}
