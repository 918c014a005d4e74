//! Pointer press/drag/release handling and orb condensation

use glam::Vec2;
use gravdrift_core::interaction::{apply_pointer_event, PointerEvent};
use gravdrift_core::tests::test_helpers::{cluster, quiet_world, resting_particle};

#[test]
fn test_press_and_drag_move_the_gravity_source() {
    let mut world = quiet_world();
    assert_eq!(world.gravity_source, None);

    apply_pointer_event(&mut world, PointerEvent::Press(Vec2::new(10.0, 20.0)), 0.0);
    assert_eq!(world.gravity_source, Some(Vec2::new(10.0, 20.0)));

    apply_pointer_event(&mut world, PointerEvent::Drag(Vec2::new(30.0, 40.0)), 16.0);
    assert_eq!(world.gravity_source, Some(Vec2::new(30.0, 40.0)));

    apply_pointer_event(&mut world, PointerEvent::Release(Vec2::new(30.0, 40.0)), 32.0);
    assert_eq!(world.gravity_source, None);
}

#[test]
fn test_release_with_ten_nearby_spawns_one_orb() {
    let mut world = quiet_world();
    let center = Vec2::new(200.0, 200.0);
    world.particles.extend(cluster(center, 3.0, 10, 0.0));
    world.particles.push(resting_particle(Vec2::new(500.0, 500.0), 0.0));
    world.particles.push(resting_particle(Vec2::new(220.0, 200.0), 0.0));

    apply_pointer_event(&mut world, PointerEvent::Press(center), 0.0);
    let outcome = apply_pointer_event(&mut world, PointerEvent::Release(center), 100.0);

    assert!(outcome.spawned_orb.is_some());
    assert_eq!(outcome.consumed, 10);
    assert_eq!(world.orbs.len(), 1);
    assert_eq!(world.particles.len(), 2);
    assert!(world.particles.iter().all(|p| p.pos.distance(center) >= 6.0));

    let orb = &world.orbs[0];
    assert_eq!(orb.pos, center);
    assert_eq!(orb.size, 15.0);
    assert_eq!(orb.created_at, 100.0);
    assert_eq!(world.gravity_source, None);
}

#[test]
fn test_release_with_nine_nearby_does_nothing() {
    let mut world = quiet_world();
    let center = Vec2::new(200.0, 200.0);
    world.particles.extend(cluster(center, 3.0, 9, 0.0));

    let outcome = apply_pointer_event(&mut world, PointerEvent::Release(center), 100.0);

    assert_eq!(outcome.spawned_orb, None);
    assert_eq!(outcome.consumed, 0);
    assert!(world.orbs.is_empty());
    assert_eq!(world.particles.len(), 9);
}

#[test]
fn test_release_radius_is_strict() {
    let mut world = quiet_world();
    let center = Vec2::new(100.0, 100.0);
    world.particles.extend(cluster(center, 2.0, 9, 0.0));
    world.particles.push(resting_particle(Vec2::new(106.0, 100.0), 0.0));

    let outcome = apply_pointer_event(&mut world, PointerEvent::Release(center), 0.0);

    assert_eq!(outcome.spawned_orb, None);
    assert_eq!(world.particles.len(), 10);
}

#[test]
fn test_large_cluster_sets_orb_size_from_count() {
    let mut world = quiet_world();
    let center = Vec2::new(300.0, 300.0);
    world.particles.extend(cluster(center, 1.0, 25, 0.0));
    world.particles.extend(cluster(center, 4.0, 15, 0.0));

    let outcome = apply_pointer_event(&mut world, PointerEvent::Release(center), 0.0);

    assert_eq!(outcome.consumed, 40);
    assert!(world.particles.is_empty());
    assert_eq!(world.orbs[0].size, 60.0);
    assert_eq!(world.orbs[0].required_particles, 50);
}

#[test]
fn test_orb_ids_are_unique() {
    let mut world = quiet_world();
    let a = Vec2::new(100.0, 100.0);
    let b = Vec2::new(400.0, 300.0);
    world.particles.extend(cluster(a, 2.0, 10, 0.0));
    world.particles.extend(cluster(b, 2.0, 10, 0.0));

    let first = apply_pointer_event(&mut world, PointerEvent::Release(a), 0.0);
    let second = apply_pointer_event(&mut world, PointerEvent::Release(b), 0.0);

    assert_ne!(first.spawned_orb, second.spawned_orb);
    assert_eq!(world.orbs.len(), 2);
}
