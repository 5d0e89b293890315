mod common;

use common::*;
use driftboat::{Cursor, DragConfig, Length, Phase, Surface, Vec2};

#[test]
fn grab_freezes_element_at_rendered_position() {
    let surface = scene().with_origin(50.0, 20.0).with_resting(Vec2::new(300.0, 120.0));
    let mut c = controller(surface);
    c.surface_mut().set_rotation(Some(4.0));

    assert!(c.pointer_down(7));

    let s = c.surface();
    assert_eq!(s.style.left, Some(Length::Px(300.0)));
    assert_eq!(s.style.top, Some(Length::Px(120.0)));
    assert_eq!(s.style.bottom, None);
    assert_eq!(s.style.rotation, None);
    assert_eq!(s.style.opacity, Some(1.0));
    assert!(!s.has_class("visible"));
    assert!(s.animations.is_empty());
    assert!(!s.text_selection);
    assert_eq!(s.cursor, Some(Cursor::Grabbing));
    assert_eq!(s.captured_pointer, Some(7));
    assert_eq!(c.phase(), Phase::Dragging);
    assert_eq!(c.position(), Vec2::new(300.0, 120.0));
}

#[test]
fn grab_strips_launch_and_steady_classes() {
    let surface = scene().with_class("launching").with_class("bobbing");
    let config = DragConfig::new().with_steady_classes(["bobbing"]);
    let mut c = controller_with(surface, config);

    c.pointer_down(1);

    for class in ["visible", "launching", "bobbing"] {
        assert!(!c.surface().has_class(class), "{} still present", class);
    }
}

#[test]
fn clear_animation_delay_is_opt_in() {
    let mut c = controller(scene());
    c.pointer_down(1);
    assert!(!c.surface().style.animation_delay_cleared);

    let config = DragConfig::new().with_clear_animation_delay(true);
    let mut c = controller_with(scene(), config);
    c.pointer_down(1);
    assert!(c.surface().style.animation_delay_cleared);
}

#[test]
fn pointer_becomes_visual_center() {
    let mut c = controller(scene().with_origin(10.0, 30.0));
    c.pointer_down(1);
    c.pointer_move(Vec2::new(510.0, 230.0), 0.0);

    // 80x40 element, container at (10, 30)
    assert_eq!(c.surface().style.left, Some(Length::Px(460.0)));
    assert_eq!(c.surface().style.top, Some(Length::Px(180.0)));
    assert_eq!(c.position(), Vec2::new(460.0, 180.0));
}

#[test]
fn moves_are_ignored_when_not_dragging() {
    let mut c = controller(scene());
    c.pointer_move(Vec2::new(500.0, 500.0), 0.0);
    assert_eq!(c.surface().style.left, None);
    assert!(c.history().is_empty());
}

#[test]
fn drag_tilt_follows_last_two_samples() {
    let mut c = controller(scene());
    c.pointer_down(1);
    c.pointer_move(Vec2::new(100.0, 100.0), 0.0);
    assert_eq!(c.surface().style.rotation, None);

    c.pointer_move(Vec2::new(105.0, 100.0), 16.0);
    assert_eq!(c.surface().style.rotation, Some(10.0));

    c.pointer_move(Vec2::new(300.0, 100.0), 32.0);
    assert_eq!(c.surface().style.rotation, Some(25.0));

    c.pointer_move(Vec2::new(200.0, 100.0), 48.0);
    assert_eq!(c.surface().style.rotation, Some(-25.0));
}

#[test]
fn history_keeps_six_most_recent() {
    let mut c = controller(scene());
    c.pointer_down(1);
    for i in 0..10 {
        c.pointer_move(Vec2::new(i as f64 * 10.0, 50.0), i as f64 * 16.0);
    }
    assert_eq!(c.history().len(), 6);
    assert_eq!(c.history().oldest().unwrap().pos.x, 40.0);
    assert_eq!(c.history().newest().unwrap().pos.x, 90.0);
}

#[test]
fn release_restores_selection_and_cursor() {
    let mut c = controller(scene());
    c.pointer_down(1);
    c.pointer_up(10.0);

    assert!(c.surface().text_selection);
    assert_eq!(c.surface().cursor, Some(Cursor::Grab));
    assert_ne!(c.phase(), Phase::Dragging);
}

#[test]
fn pointer_up_without_drag_is_ignored() {
    let mut c = controller(scene());
    c.pointer_up(0.0);
    c.pointer_cancel(0.0);
    c.blur(0.0);
    assert_eq!(c.phase(), Phase::Idle);
    assert!(!c.needs_frame());
}

#[test]
fn blur_ends_drag_like_pointer_up() {
    let mut c = controller(scene());
    c.pointer_down(1);
    c.blur(5.0);
    assert_eq!(c.phase(), Phase::Falling);
    assert!(c.surface().text_selection);
}

#[test]
fn cancel_ends_drag() {
    let mut c = controller(scene());
    c.pointer_down(1);
    c.pointer_cancel(5.0);
    assert_eq!(c.phase(), Phase::Falling);
}

#[test]
fn window_move_without_buttons_ends_drag() {
    let mut c = controller(scene());
    c.pointer_down(1);

    c.window_pointer_move(1, 5.0);
    assert_eq!(c.phase(), Phase::Dragging);

    c.window_pointer_move(0, 6.0);
    assert_eq!(c.phase(), Phase::Falling);
}

#[test]
fn refused_pointer_capture_still_drags() {
    let mut surface = scene();
    surface.refuse_capture = true;
    let mut c = controller(surface);

    assert!(c.pointer_down(3));
    assert_eq!(c.surface().captured_pointer, None);
    c.pointer_move(Vec2::new(400.0, 200.0), 0.0);
    assert_eq!(c.position(), Vec2::new(360.0, 180.0));
}

#[test]
fn grab_interrupts_fall_and_owns_position_exclusively() {
    let mut c = controller(scene());
    let mut now = 0.0;
    c.pointer_down(1);
    c.pointer_up(now);
    run_until(&mut c, &mut now, 5, |_| false);
    assert_eq!(c.phase(), Phase::Falling);

    assert!(c.pointer_down(1));
    let held = c.position();
    let frames_before = c.observer().frames.len();
    assert!(!c.needs_frame());

    for _ in 0..20 {
        now += FRAME_MS;
        c.tick(now);
    }

    assert_eq!(c.phase(), Phase::Dragging);
    assert_eq!(c.position(), held);
    assert_eq!(c.observer().frames.len(), frames_before);
    assert_eq!(c.surface().style.top, Some(Length::Px(held.y)));
}

#[test]
fn gated_grab_requires_active_class() {
    let config = DragConfig::new().with_active_classes(["arrived"]);
    let mut c = controller_with(scene(), config);

    assert!(!c.pointer_down(1));
    assert_eq!(c.phase(), Phase::Idle);
    assert!(c.surface().text_selection);

    c.surface_mut().add_class("arrived");
    assert!(c.pointer_down(1));
    assert_eq!(c.phase(), Phase::Dragging);
}

#[test]
fn active_class_arms_interactivity() {
    let config = DragConfig::new()
        .with_active_classes(["arrived", "docked"])
        .with_pointer_on_active(true);
    let mut c = controller_with(scene(), config);

    assert!(!c.classes_changed());
    assert!(!c.surface().interactive);

    c.surface_mut().add_class("docked");
    assert!(c.classes_changed());
    assert!(c.surface().interactive);
    assert_eq!(c.surface().cursor, Some(Cursor::Grab));
}

#[test]
fn already_active_class_arms_on_bind() {
    let config = DragConfig::new()
        .with_active_classes(["arrived"])
        .with_pointer_on_active(true);
    let c = controller_with(scene().with_class("arrived"), config);
    assert!(c.surface().interactive);
}

#[test]
fn arming_is_off_without_opt_in() {
    let config = DragConfig::new().with_active_classes(["arrived"]);
    let mut c = controller_with(scene().with_class("arrived"), config);
    assert!(!c.classes_changed());
    assert!(!c.surface().interactive);
}
