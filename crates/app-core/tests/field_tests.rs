// Particle-field tests: toroidal bounds, repulsion guards, and the
// materialization round trip.

use app_core::constants::WRAP_MARGIN;
use app_core::field::{repel_impulse, FieldConfig, ParticleField};
use app_core::render::Viewport;
use glam::Vec2;

fn small_field(seed: u64) -> ParticleField {
    let viewport = Viewport::new(800.0, 600.0);
    let config = FieldConfig {
        particle_count: 60,
        star_count: 8,
        text_budget: 40,
        repel_radius: 130.0,
        repel_strength: 8.0,
        seed,
    };
    ParticleField::new(config, viewport)
}

fn assert_in_bounds(field: &ParticleField, viewport: Viewport) {
    for p in field.particles() {
        assert!(
            p.pos.x >= -WRAP_MARGIN - 1e-3 && p.pos.x <= viewport.width + WRAP_MARGIN + 1e-3,
            "x out of wrapped bounds: {}",
            p.pos.x
        );
        assert!(
            p.pos.y >= -WRAP_MARGIN - 1e-3 && p.pos.y <= viewport.height + WRAP_MARGIN + 1e-3,
            "y out of wrapped bounds: {}",
            p.pos.y
        );
    }
}

#[test]
fn positions_stay_within_wrapped_bounds() {
    let viewport = Viewport::new(800.0, 600.0);
    let mut field = small_field(42);
    // Keep a repulsion source active so velocities grow well past the margin.
    field.set_repulsion(Some(Vec2::new(400.0, 300.0)));
    for _ in 0..400 {
        field.tick(1.0 / 60.0);
        assert_in_bounds(&field, viewport);
    }
}

#[test]
fn repulsion_is_guarded_at_the_source() {
    let src = Vec2::new(100.0, 100.0);
    assert_eq!(repel_impulse(src, src, 130.0, 8.0), Vec2::ZERO);
}

#[test]
fn repulsion_at_half_radius_pushes_outward() {
    let src = Vec2::new(200.0, 200.0);
    let pos = Vec2::new(200.0 + 65.0, 200.0);
    let impulse = repel_impulse(pos, src, 130.0, 8.0);
    // (radius - dist) / radius = 0.5, scaled by strength, pointing +x.
    assert!((impulse.x - 4.0).abs() < 1e-4);
    assert!(impulse.y.abs() < 1e-6);
}

#[test]
fn repulsion_is_zero_beyond_the_radius() {
    let src = Vec2::new(0.0, 0.0);
    let pos = Vec2::new(200.0, 0.0);
    assert_eq!(repel_impulse(pos, src, 130.0, 8.0), Vec2::ZERO);
}

#[test]
fn assign_targets_respects_the_budget() {
    let mut field = small_field(7);
    let points: Vec<Vec2> = (0..200)
        .map(|i| Vec2::new((i % 20) as f32 * 10.0, (i / 20) as f32 * 10.0))
        .collect();
    field.assign_targets(points);
    assert!(field.text_mode());
    let members = field.particles().iter().filter(|p| p.is_text).count();
    // Budget 40 caps the 200 sampled points.
    assert_eq!(members, 40);
}

#[test]
fn fewer_points_than_budget_assigns_them_all() {
    let mut field = small_field(7);
    let points: Vec<Vec2> = (0..12).map(|i| Vec2::new(i as f32 * 5.0, 50.0)).collect();
    field.assign_targets(points);
    let members = field.particles().iter().filter(|p| p.is_text).count();
    assert_eq!(members, 12);
}

#[test]
fn empty_sample_is_a_no_op_materialization() {
    let mut field = small_field(7);
    field.assign_targets(vec![Vec2::new(10.0, 10.0); 30]);
    assert!(field.text_mode());

    field.assign_targets(Vec::new());
    assert!(!field.text_mode());
    assert!(field.particles().iter().all(|p| p.target.is_none()));
}

#[test]
fn materialization_round_trip_returns_every_particle_to_ambient() {
    let mut field = small_field(21);
    let points: Vec<Vec2> = (0..50).map(|i| Vec2::new(100.0 + i as f32 * 8.0, 300.0)).collect();
    field.assign_targets(points);

    for _ in 0..40 {
        field.tick(1.0 / 60.0);
        for p in field.particles() {
            assert!((0.0..=1.0).contains(&p.text_alpha));
        }
    }
    assert!(field.particles().iter().any(|p| p.text_alpha > 0.9));

    field.scatter();
    for _ in 0..60 {
        field.tick(1.0 / 60.0);
        for p in field.particles() {
            assert!((0.0..=1.0).contains(&p.text_alpha));
        }
    }
    for p in field.particles() {
        assert!(!p.is_text);
        assert_eq!(p.text_alpha, 0.0);
        assert!(p.target.is_none());
    }
}

#[test]
fn converging_particles_close_on_their_targets() {
    let mut field = small_field(3);
    let target = Vec2::new(400.0, 300.0);
    field.assign_targets(vec![target; 60]);

    let start: Vec<f32> = field
        .particles()
        .iter()
        .map(|p| p.pos.distance(target))
        .collect();
    for _ in 0..120 {
        field.tick(1.0 / 60.0);
    }
    for (p, d0) in field.particles().iter().zip(start) {
        if p.is_text {
            let d1 = p.pos.distance(target);
            assert!(
                d1 < d0.max(20.0),
                "text particle did not converge: {d0} -> {d1}"
            );
        }
    }
}

#[test]
fn resize_keeps_the_pool_and_moves_the_stars() {
    let mut field = small_field(11);
    let before = field.particles().len();
    field.resize(Viewport::new(400.0, 300.0));
    assert_eq!(field.particles().len(), before);
    // Narrow profile shrinks the repulsion radius.
    assert!(field.repel_radius() < 130.0);

    for _ in 0..200 {
        field.tick(1.0 / 60.0);
        assert_in_bounds(&field, Viewport::new(400.0, 300.0));
    }
}
