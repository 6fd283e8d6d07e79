use glam::DVec2;
use particle_physics::{ANCHOR_MASS, DEFAULT_MASS, G};
use particle_simulation::diagnostics::{total_energy, total_momentum};
use particle_simulation::{ParticleSystem, DEFAULT_SEED};

fn system(count: usize, bounds: f64, seed: u64) -> ParticleSystem {
    ParticleSystem::new(count, bounds, seed).unwrap()
}

#[test]
fn same_seed_same_trajectory() {
    let mut a = system(25, 100.0, 7);
    let mut b = system(25, 100.0, 7);
    assert_eq!(a.particles(), b.particles());

    for _ in 0..10 {
        a.update(0.1);
        b.update(0.1);
    }
    assert_eq!(a.particles(), b.particles());
}

#[test]
fn different_seed_different_placement() {
    let a = system(10, 100.0, 1);
    let b = system(10, 100.0, 2);
    assert_ne!(a.particles()[0].position(), b.particles()[0].position());
}

#[test]
fn anchor_invariant() {
    for count in [2, 3, 50] {
        let s = system(count, 100.0, DEFAULT_SEED);
        let anchor = s.particles()[count - 1];
        assert_eq!(anchor.position(), DVec2::ZERO);
        assert_eq!(anchor.velocity(), DVec2::ZERO);
        assert_eq!(anchor.mass(), ANCHOR_MASS);
    }
}

#[test]
fn particles_start_at_rest() {
    let s = system(40, 100.0, DEFAULT_SEED);
    for p in s.particles() {
        assert_eq!(p.velocity(), DVec2::ZERO);
        assert_eq!(p.acceleration(), DVec2::ZERO);
    }
}

#[test]
fn placement_respects_bounds() {
    let bounds = 25.0;
    let s = system(500, bounds, 3);
    for p in &s.particles()[..s.anchor_index()] {
        assert!((-bounds..=bounds).contains(&p.x), "x = {}", p.x);
        assert!((-bounds..=bounds).contains(&p.y), "y = {}", p.y);
        assert_eq!(p.mass(), DEFAULT_MASS);
    }
}

#[test]
fn accumulators_are_clear_after_update() {
    let mut s = system(10, 100.0, DEFAULT_SEED);
    s.update(0.1);
    assert!(s.particles().iter().all(|p| p.acceleration() == DVec2::ZERO));
    s.update_parallel(0.1);
    assert!(s.particles().iter().all(|p| p.acceleration() == DVec2::ZERO));
    s.update_symmetric(0.1);
    assert!(s.particles().iter().all(|p| p.acceleration() == DVec2::ZERO));
}

#[test]
fn zero_dt_is_a_kinematic_no_op() {
    let mut s = system(10, 100.0, DEFAULT_SEED);
    s.update(0.5);
    let before = s.snapshot();
    s.update(0.0);
    assert_eq!(s.snapshot(), before);
    assert!(s.particles().iter().all(|p| p.acceleration() == DVec2::ZERO));
}

#[test]
fn two_body_matches_inverse_square() {
    let dt = 1.0;
    let mut s = system(2, 50.0, 42);
    let start = s.particles()[0].position();
    let d = start.length();
    assert!(d > 0.0);

    s.update(dt);

    // velocity after one tick from rest is a * dt
    let body = s.particles()[0];
    let expected = G * ANCHOR_MASS / (d * d);
    assert!((body.velocity().length() - expected * dt).abs() <= expected * 1e-12);
    assert!(body.velocity().dot(start) < 0.0, "body falls towards the anchor");

    let anchor = s.anchor();
    let expected = G * DEFAULT_MASS / (d * d);
    assert!((anchor.velocity().length() - expected * dt).abs() <= expected * 1e-12);
    assert!(anchor.velocity().dot(start) > 0.0, "anchor is pulled towards the body");
}

#[test]
fn coincident_bodies_go_non_finite() {
    // zero bounds puts the only free body on top of the anchor
    let mut s = system(2, 0.0, DEFAULT_SEED);
    assert_eq!(s.particles()[0].position(), DVec2::ZERO);
    s.update(0.1);
    assert!(!s.particles()[0].velocity().is_finite());
    assert!(!s.anchor().velocity().is_finite());
}

#[test]
fn every_ordered_pair_is_evaluated() {
    for n in [1usize, 2, 3, 8, 33] {
        let mut s = system(n, 100.0, DEFAULT_SEED);
        s.update(0.1);
        assert_eq!(s.force_evaluations(), (n * (n - 1)) as u64);
    }
}

#[test]
fn symmetric_variant_halves_the_work() {
    let n = 12;
    let mut s = system(n, 100.0, DEFAULT_SEED);
    s.update_symmetric(0.1);
    assert_eq!(s.force_evaluations(), (n * (n - 1) / 2) as u64);
}

#[test]
fn parallel_update_is_bit_identical() {
    let mut reference = system(64, 100.0, 11);
    let mut parallel = reference.clone();
    for _ in 0..5 {
        reference.update(0.1);
        parallel.update_parallel(0.1);
    }
    assert_eq!(reference.particles(), parallel.particles());
    assert_eq!(reference.force_evaluations(), parallel.force_evaluations());
}

#[test]
fn symmetric_update_agrees_within_rounding() {
    let mut reference = system(20, 100.0, 5);
    let mut symmetric = reference.clone();
    for _ in 0..5 {
        reference.update(0.1);
        symmetric.update_symmetric(0.1);
    }
    for (r, s) in reference.particles().iter().zip(symmetric.particles()) {
        let dv = (r.velocity() - s.velocity()).length();
        assert!(dv <= r.velocity().length() * 1e-9 + 1e-18, "dv = {dv}");
        let dx = (r.position() - s.position()).length();
        assert!(dx <= 1e-9, "dx = {dx}");
    }
}

#[test]
fn three_body_scenario() {
    let mut s = system(3, 100.0, 1337);
    let before = s.snapshot();
    s.update(0.01);
    let after = s.snapshot();

    for (b, a) in before.iter().zip(&after) {
        let delta = DVec2::new(a.x - b.x, a.y - b.y);
        assert!(delta.is_finite());
        assert!(delta != DVec2::ZERO);
    }
    // the anchor is not exempt from being pulled
    assert_ne!(s.anchor().position(), DVec2::ZERO);
    assert_eq!(s.anchor_index(), 2);
}

#[test]
fn circular_orbit_stays_bound() {
    let mut s = system(2, 100.0, DEFAULT_SEED);
    let r = 100.0;
    let speed = (G * ANCHOR_MASS / r).sqrt();
    {
        let body = &mut s.particles_mut()[0];
        body.x = r;
        body.y = 0.0;
        body.set_velocity(0.0, speed);
    }
    let e0 = total_energy(s.particles());
    let p0 = total_momentum(s.particles());

    for _ in 0..1000 {
        s.update(0.5);
    }

    let radius = (s.particles()[0].position() - s.anchor().position()).length();
    assert!((radius - r).abs() < 1.0, "radius drifted to {radius}");
    let e1 = total_energy(s.particles());
    assert!(((e1 - e0) / e0).abs() < 0.01);

    let p1 = total_momentum(s.particles());
    assert!((p1 - p0).length() <= p0.length() * 1e-9);
}

#[test]
fn snapshot_tracks_population_order() {
    let mut s = system(6, 100.0, DEFAULT_SEED);
    s.particles_mut()[1].set_velocity(2.0, -1.0);
    let snap = s.snapshot();
    assert_eq!(snap.len(), s.len());
    for (state, p) in snap.iter().zip(s.particles()) {
        assert_eq!((state.x, state.y, state.vx, state.vy), (p.x, p.y, p.vx, p.vy));
    }
    assert_eq!((snap[1].vx, snap[1].vy), (2.0, -1.0));
}
