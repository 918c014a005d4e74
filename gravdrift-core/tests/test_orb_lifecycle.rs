//! Orb sizing, fading, grace period and absorption quota

use glam::Vec2;
use gravdrift_core::orb::{size_for_count, Orb, OrbId, OrbPhase};
use gravdrift_core::tests::test_helpers::{approx_eq_f32, test_orb};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_size_is_clamped_for_any_birth_count() {
    assert_eq!(size_for_count(0), 15.0);
    assert_eq!(size_for_count(10), 15.0);
    assert_eq!(size_for_count(40), 60.0);
    assert_eq!(size_for_count(1000), 60.0);

    for count in [0, 10, 40, 1000] {
        let orb = test_orb(0, Vec2::ZERO, count, 0.0);
        assert!((15.0..=60.0).contains(&orb.size), "count {} gave size {}", count, orb.size);
    }
}

#[test]
fn test_derived_properties_scale_with_size() {
    let small = test_orb(0, Vec2::ZERO, 10, 0.0);
    assert!(approx_eq_f32(small.gravity_strength, 500.0, 1e-3));
    assert_eq!(small.required_particles, 15);

    let large = test_orb(1, Vec2::ZERO, 40, 0.0);
    assert!(approx_eq_f32(large.gravity_strength, 1500.0, 1e-3));
    assert_eq!(large.required_particles, 50);

    // count 25 -> size 37.5 -> strength 1000, quota floor(32.5)
    let mid = test_orb(2, Vec2::ZERO, 25, 0.0);
    assert!(approx_eq_f32(mid.size, 37.5, 1e-4));
    assert!(approx_eq_f32(mid.gravity_strength, 1000.0, 1e-2));
    assert_eq!(mid.required_particles, 32);
}

#[test]
fn test_spawned_color_lies_between_yellow_and_blue() {
    let mut rng = StdRng::seed_from_u64(11);
    for i in 0..50 {
        let orb = Orb::spawn(OrbId(i), Vec2::ZERO, 20, &mut rng, 0.0);
        assert!((100.0..=255.0).contains(&orb.color.r));
        assert!((150.0..=220.0).contains(&orb.color.g));
        assert!((100.0..=255.0).contains(&orb.color.b));
        assert_eq!(orb.absorbed_particles, 0);
        assert_eq!(orb.alpha, 0.0);
    }
}

#[test]
fn test_grace_period_blocks_absorption() {
    let orb = test_orb(0, Vec2::new(50.0, 50.0), 10, 1000.0);
    let nearby = Vec2::new(52.0, 50.0);

    assert!(!orb.can_absorb(5000.0));
    assert!(!orb.is_in_range(nearby, 5000.0));
    assert!(orb.can_absorb(5000.5));
    assert!(orb.is_in_range(nearby, 5000.5));
}

#[test]
fn test_absorption_radius_is_strict() {
    let orb = test_orb(0, Vec2::new(50.0, 50.0), 10, 0.0);

    assert!(orb.is_in_range(Vec2::new(56.9, 50.0), 4001.0));
    assert!(!orb.is_in_range(Vec2::new(57.0, 50.0), 4001.0));
}

#[test]
fn test_quota_triggers_death_exactly_at_requirement() {
    let mut orb = test_orb(0, Vec2::ZERO, 10, 0.0);
    assert_eq!(orb.required_particles, 15);

    for i in 0..14 {
        orb.absorb(5000.0 + i as f64);
    }
    assert!(!orb.is_dying());

    orb.absorb(6000.0);
    assert!(orb.is_dying());
    assert_eq!(orb.absorbed_particles, orb.required_particles);
    assert_eq!(orb.phase, OrbPhase::Dying { since: 6000.0 });
}

#[test]
fn test_overshoot_is_tolerated_by_one_increment() {
    let mut orb = test_orb(0, Vec2::ZERO, 10, 0.0);
    for _ in 0..orb.required_particles {
        orb.absorb(5000.0);
    }

    // A late absorption past the quota counts but does not restart the fade.
    orb.absorb(5100.0);
    assert_eq!(orb.absorbed_particles, orb.required_particles + 1);
    assert_eq!(orb.phase, OrbPhase::Dying { since: 5000.0 });
}

#[test]
fn test_dying_orb_is_out_of_range() {
    let mut orb = test_orb(0, Vec2::ZERO, 10, 0.0);
    orb.start_death(4500.0);

    assert!(!orb.is_in_range(Vec2::ZERO, 4600.0));
}

#[test]
fn test_death_transition_is_latched() {
    let mut orb = test_orb(0, Vec2::ZERO, 10, 0.0);
    orb.start_death(100.0);
    orb.start_death(200.0);

    assert_eq!(orb.phase, OrbPhase::Dying { since: 100.0 });
}

#[test]
fn test_removable_only_after_fade_out() {
    let mut orb = test_orb(0, Vec2::ZERO, 10, 0.0);
    assert!(!orb.is_removable(100_000.0));

    orb.start_death(1000.0);
    assert!(!orb.is_removable(1299.0));
    assert!(orb.is_removable(1300.0));
}

#[test]
fn test_alpha_stays_in_unit_range() {
    let mut orb = test_orb(0, Vec2::ZERO, 10, 0.0);
    for t in [0.0, 100.0, 499.0, 500.0, 9000.0] {
        orb.step(t);
        assert!((0.0..=1.0).contains(&orb.alpha));
    }
    orb.start_death(9000.0);
    for t in [9000.0, 9100.0, 9300.0, 20_000.0] {
        orb.step(t);
        assert!((0.0..=1.0).contains(&orb.alpha));
    }
    assert_eq!(orb.alpha, 0.0);
}
