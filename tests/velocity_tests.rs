use approx::assert_relative_eq;
use driftboat::controller::{fling_scale, DESKTOP_FLING_SCALE, MOBILE_FLING_SCALE};
use driftboat::{HeadlessSurface, DragController, PositionHistory, Vec2, HISTORY_CAPACITY};
use proptest::prelude::*;

#[test]
fn empty_history_has_zero_velocity() {
    assert_eq!(PositionHistory::new().launch_velocity(0.5), Vec2::zero());
}

#[test]
fn single_sample_has_zero_velocity() {
    let mut h = PositionHistory::new();
    h.push(Vec2::new(10.0, 10.0), 0.0);
    assert_eq!(h.launch_velocity(1.25), Vec2::zero());
}

#[test]
fn uses_oldest_and_newest_samples() {
    let mut h = PositionHistory::new();
    h.push(Vec2::new(0.0, 0.0), 0.0);
    h.push(Vec2::new(500.0, -500.0), 10.0);
    h.push(Vec2::new(100.0, 50.0), 100.0);

    let v = h.launch_velocity(1.0);
    // 100px and 50px over 0.1s, 0.016s per frame
    assert_relative_eq!(v.x, 16.0, epsilon = 1e-9);
    assert_relative_eq!(v.y, 8.0, epsilon = 1e-9);
}

#[test]
fn near_simultaneous_samples_use_16ms_floor() {
    let mut h = PositionHistory::new();
    h.push(Vec2::new(0.0, 0.0), 1000.0);
    h.push(Vec2::new(32.0, 0.0), 1001.0);
    assert_relative_eq!(h.launch_velocity(1.0).x, 32.0, epsilon = 1e-9);

    let mut same = PositionHistory::new();
    same.push(Vec2::new(0.0, 0.0), 5.0);
    same.push(Vec2::new(32.0, 0.0), 5.0);
    assert!(same.launch_velocity(1.0).is_finite());
}

#[test]
fn eviction_drops_oldest_sample() {
    let mut h = PositionHistory::new();
    for i in 0..(HISTORY_CAPACITY + 3) {
        h.push(Vec2::new(i as f64, 0.0), i as f64 * 16.0);
    }
    assert_eq!(h.len(), HISTORY_CAPACITY);
    assert_eq!(h.oldest().unwrap().pos.x, 3.0);
    let times: Vec<f64> = h.iter().map(|s| s.time_ms).collect();
    assert!(times.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn narrow_viewports_fling_harder() {
    assert_eq!(fling_scale(767.0), MOBILE_FLING_SCALE);
    assert_eq!(fling_scale(768.0), DESKTOP_FLING_SCALE);
    assert_eq!(fling_scale(1920.0), DESKTOP_FLING_SCALE);
}

#[test]
fn controller_applies_viewport_multiplier() {
    let release = |viewport: f64| {
        let surface = HeadlessSurface::new(1000.0, 600.0, Vec2::new(80.0, 40.0))
            .with_viewport_width(viewport);
        let mut c = DragController::without_observer(surface, Default::default()).unwrap();
        c.pointer_down(1);
        c.pointer_move(Vec2::new(100.0, 100.0), 0.0);
        c.pointer_move(Vec2::new(200.0, 100.0), 50.0);
        c.pointer_up(50.0);
        c.velocity().x
    };
    assert_relative_eq!(release(400.0), release(1200.0) * 2.5, epsilon = 1e-9);
}

proptest! {
    #[test]
    fn velocity_sign_matches_net_displacement(
        points in prop::collection::vec((-2000.0f64..2000.0, -2000.0f64..2000.0), 2..12),
        step in 1.0f64..40.0,
    ) {
        let mut h = PositionHistory::new();
        for (i, &(x, y)) in points.iter().enumerate() {
            h.push(Vec2::new(x, y), i as f64 * step);
        }
        let oldest = h.oldest().unwrap().pos;
        let newest = h.newest().unwrap().pos;
        let v = h.launch_velocity(0.5);

        prop_assert_eq!(v.x.signum() * (newest.x - oldest.x).signum() >= 0.0, true);
        prop_assert_eq!(v.y.signum() * (newest.y - oldest.y).signum() >= 0.0, true);
        if newest.x != oldest.x {
            prop_assert_eq!(v.x > 0.0, newest.x > oldest.x);
        }
    }
}
