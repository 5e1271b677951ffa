//! End-to-end engine behavior through the public API

use std::sync::mpsc;

use eye_float::consts::{BLINK_CLOSE_TICKS, TICK_MS};
use eye_float::renderer::Shape;
use eye_float::sim::BlinkPhase;
use eye_float::{EyeEvent, EyeSettings, EyeWidgetEngine, Part};
use glam::DVec2;
use proptest::prelude::*;

fn engine(seed: u64) -> EyeWidgetEngine {
    EyeWidgetEngine::new(&EyeSettings {
        seed: Some(seed),
        ..Default::default()
    })
}

fn count(frame: &[eye_float::DrawCommand], part: Part) -> usize {
    frame.iter().filter(|c| c.part == part).count()
}

#[test]
fn fresh_widget_frame_contents() {
    let mut engine = engine(7);
    engine.resize(240.0, 160.0);
    let frame = engine.render();

    assert_eq!(count(&frame, Part::TrackingLine), 0);
    assert_eq!(count(&frame, Part::TargetRing), 0);
    for part in [
        Part::EyeWhite,
        Part::Eyelid,
        Part::Iris,
        Part::Outline,
        Part::Pupil,
    ] {
        assert_eq!(count(&frame, part), 1, "{part:?}");
    }
    assert_eq!(
        frame
            .iter()
            .filter(|c| matches!(c.part, Part::Glow(_)))
            .count(),
        5
    );
    assert_eq!(count(&frame, Part::Glint), 2);

    // Layering: every glow ring precedes the white, which precedes the eyelid, ...
    let pos = |part: Part| frame.iter().position(|c| c.part == part).unwrap();
    assert!(pos(Part::Glow(1)) < pos(Part::EyeWhite));
    assert!(pos(Part::EyeWhite) < pos(Part::Eyelid));
    assert!(pos(Part::Eyelid) < pos(Part::Iris));
    assert!(pos(Part::Iris) < pos(Part::Outline));
    assert!(pos(Part::Outline) < pos(Part::Pupil));
    assert!(pos(Part::Pupil) < pos(Part::Glint));
}

#[test]
fn reference_track_values() {
    let mut engine = engine(7);
    engine.resize(200.0, 200.0);
    engine.set_eye_size(40.0);
    let g = *engine.geometry();
    assert_eq!(g.center, DVec2::new(100.0, 100.0));
    assert!((g.iris_radius - 14.0).abs() < 1e-9);
    assert!((g.pupil_radius - 5.6).abs() < 1e-9);

    engine.track(140.0, 100.0);
    assert!((engine.gaze().iris_offset() - DVec2::new(13.0, 0.0)).length() < 1e-9);
    assert!((engine.gaze().pupil_offset() - DVec2::new(2.52, 0.0)).length() < 1e-9);

    let frame = engine.render();
    let pupil = frame.iter().find(|c| c.part == Part::Pupil).unwrap();
    match pupil.shape {
        Shape::Circle { center, .. } => assert!((center.x - 115.52).abs() < 1e-9),
        _ => panic!("pupil is not a circle"),
    }
    assert_eq!(count(&frame, Part::TrackingLine), 1);
}

#[test]
fn press_drag_release_gesture() {
    let mut engine = engine(3);
    engine.resize(200.0, 200.0);
    let (tx, rx) = mpsc::channel();
    engine.set_listener(move |event: EyeEvent| {
        let _ = tx.send(event);
    });

    assert!(engine.handle_press(110.0, 100.0));
    assert!(engine.handle_move(400.0, 100.0));
    engine.handle_release();

    let events: Vec<_> = rx.try_iter().collect();
    assert_eq!(
        events,
        vec![
            EyeEvent::Track { x: 110.0, y: 100.0 },
            EyeEvent::Track { x: 400.0, y: 100.0 },
            EyeEvent::Move { x: 400.0, y: 100.0 },
            EyeEvent::Click,
        ]
    );

    // Gaze eases back to exact center once released
    for _ in 0..300 {
        engine.on_tick(TICK_MS);
    }
    assert!(engine.gaze().is_settled());
    assert_eq!(count(&engine.render(), Part::TrackingLine), 0);
}

#[test]
fn blink_cycle_visible_in_eyelid() {
    let mut engine = engine(5);
    engine.resize(200.0, 200.0);
    engine.trigger_blink();

    let eyelid_height = |engine: &EyeWidgetEngine| {
        let frame = engine.render();
        match frame.iter().find(|c| c.part == Part::Eyelid).unwrap().shape {
            Shape::Oval { bounds } => bounds.height(),
            _ => panic!("eyelid is not an oval"),
        }
    };

    // Open eyelid covers one radius, closed covers the full eye
    assert!((eyelid_height(&engine) - 80.0).abs() < 1e-9);
    let mut last = eyelid_height(&engine);
    for _ in 0..BLINK_CLOSE_TICKS {
        engine.on_tick(TICK_MS);
        let h = eyelid_height(&engine);
        assert!(h > last);
        last = h;
    }
    assert_eq!(engine.blink().phase(), BlinkPhase::Reopening);
    assert!((last - 160.0).abs() < 1e-9);

    // Re-triggering while closed does nothing
    engine.trigger_blink();
    assert_eq!(engine.blink().phase(), BlinkPhase::Reopening);

    for _ in 0..4 {
        engine.on_tick(TICK_MS);
    }
    assert_eq!(engine.blink().phase(), BlinkPhase::Idle);
    assert!((eyelid_height(&engine) - 80.0).abs() < 1e-9);
}

#[test]
fn auto_blink_keeps_going_until_detached() {
    let mut engine = engine(11);
    engine.resize(200.0, 200.0);

    let mut blinks = 0;
    let mut was = false;
    // 30 s of ticks: at least 30 / 8 blinks
    for _ in 0..(30_000.0 / TICK_MS) as u32 {
        engine.on_tick(TICK_MS);
        let now = engine.blink().is_blinking();
        if now && !was {
            blinks += 1;
        }
        was = now;
    }
    assert!(blinks >= 3, "only {blinks} auto-blinks");

    engine.detach();
    for _ in 0..(30_000.0 / TICK_MS) as u32 {
        engine.on_tick(TICK_MS);
        assert!(!engine.blink().is_blinking());
    }
    assert!(engine.state().timers.is_empty());

    // Resizing re-attaches and restarts the cadence
    engine.resize(200.0, 200.0);
    assert!(engine.is_attached());
    assert!(engine.state().auto_blink_pending());
}

#[test]
fn zero_size_widget_degrades() {
    let mut engine = engine(1);
    engine.resize(0.0, 0.0);
    engine.track(50.0, 50.0);
    let frame = engine.render();
    assert!(!frame.is_empty());
    assert_eq!(engine.gaze().iris_offset(), DVec2::ZERO);
    assert!(!engine.handle_press(1.0, 1.0));
}

proptest! {
    #[test]
    fn tracking_stays_inside_eye(
        w in 10.0f64..2000.0,
        h in 10.0f64..2000.0,
        points in proptest::collection::vec((-5000.0f64..5000.0, -5000.0f64..5000.0), 1..20),
    ) {
        let mut engine = engine(9);
        engine.resize(w, h);
        let g = *engine.geometry();
        for (x, y) in points {
            engine.track(x, y);
            prop_assert!(engine.gaze().iris_offset().length() <= g.max_iris_offset() + 1e-9);
            prop_assert!(engine.gaze().pupil_offset().length() <= g.max_pupil_offset() + 1e-9);
            // Pupil disc never leaves the eye
            let pupil = engine.gaze().pupil_center(&g);
            prop_assert!(pupil.distance(g.center) + g.pupil_radius <= g.eye_radius + 1e-9);
        }
    }

    #[test]
    fn gaze_bounds_survive_geometry_changes(
        ops in proptest::collection::vec(
            (0u8..4, -5000.0f64..5000.0, -5000.0f64..5000.0),
            1..40,
        ),
    ) {
        let mut engine = engine(11);
        engine.resize(800.0, 800.0);
        for (kind, a, b) in ops {
            match kind {
                0 => engine.resize(a.abs() % 2000.0, b.abs() % 2000.0),
                1 => engine.set_eye_size(a.abs() % 500.0 + 0.5),
                2 => {
                    engine.track(a, b);
                }
                _ => {
                    engine.stop_tracking();
                    engine.on_tick(TICK_MS);
                }
            }
            let g = *engine.geometry();
            prop_assert!(engine.gaze().iris_offset().length() <= g.max_iris_offset().max(0.0) + 1e-9);
            prop_assert!(engine.gaze().pupil_offset().length() <= g.max_pupil_offset().max(0.0) + 1e-9);
        }
    }
}
