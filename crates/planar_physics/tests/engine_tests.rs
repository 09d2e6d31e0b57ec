//! Integration tests for planar_physics

use approx::assert_relative_eq;
use planar_physics::prelude::*;

fn dynamic_circle(x: f32, y: f32, radius: f32, vx: f32, vy: f32) -> Circle {
    Circle::new(x, y, radius).with_body(Body::dynamic().with_velocity(vx, vy))
}

#[test]
fn test_cull_keeps_anchor_on_upper_bound() {
    let mut engine = Engine::with_bounds(0.0, 0.0, 600.0, 800.0, Vec2::ZERO);
    engine.spawn(Circle::new(600.0, 400.0, 5.0).with_body(Body::fixed()), "edge");
    engine.spawn(Circle::new(600.01, 400.0, 5.0).with_body(Body::fixed()), "beyond");
    engine.spawn(Circle::new(0.0, 0.0, 5.0).with_body(Body::fixed()), "origin");
    engine.spawn(Circle::new(300.0, 800.5, 5.0).with_body(Body::fixed()), "below");

    let next = engine.step(0.01);
    let names: Vec<_> = next.entities().iter().map(|e| e.display).collect();
    assert_eq!(names, vec!["edge", "origin"]);
}

#[test]
fn test_cull_applies_after_integration() {
    let mut engine = Engine::with_bounds(0.0, 0.0, 100.0, 100.0, Vec2::ZERO);
    engine.spawn(dynamic_circle(99.0, 50.0, 5.0, 2.0, 0.0), ());
    engine.spawn(dynamic_circle(50.0, 50.0, 5.0, 1.0, 0.0), ());
    engine.advance(1.0);
    assert_eq!(engine.len(), 1);
    assert_eq!(engine.entities()[0].shape.anchor(), Vec2::new(51.0, 50.0));
}

#[test]
fn test_null_forcing_step_is_identity() {
    let mut engine = Engine::new(Vec2::ZERO);
    engine.spawn(dynamic_circle(100.0, 100.0, 10.0, 0.0, 0.0), ());
    engine.spawn(Circle::new(300.0, 300.0, 5.0).with_body(Body::fixed()), ());
    engine.spawn(Rectangle::new(500.0, 500.0, 50.0, 50.0), ());
    engine.spawn(Line::new(700.0, 100.0, 800.0, 150.0).unwrap(), ());

    let next = engine.step(0.0);
    assert_eq!(next.entities(), engine.entities());
    assert!(next.contact_events().is_empty());
}

#[test]
fn test_rectangle_and_line_never_interact() {
    let mut engine = Engine::new(Vec2::ZERO);
    engine.spawn(Rectangle::new(100.0, 100.0, 200.0, 200.0).with_body(Body::dynamic()), ());
    engine.spawn(Line::new(50.0, 150.0, 350.0, 250.0).unwrap().with_body(Body::dynamic()), ());
    let initial = engine.entities().to_vec();

    for _ in 0..50 {
        engine = engine.step(0.01);
        assert_eq!(engine.entities(), initial.as_slice());
        assert!(engine.contact_events().is_empty());
    }
}

#[test]
fn test_rectangles_and_lines_pass_through_each_other() {
    let mut engine = Engine::new(Vec2::ZERO);
    engine.spawn(Rectangle::new(100.0, 100.0, 50.0, 50.0).with_body(Body::dynamic().with_velocity(5.0, 0.0)), ());
    engine.spawn(Rectangle::new(120.0, 100.0, 50.0, 50.0).with_body(Body::fixed()), ());
    engine.spawn(Line::new(100.0, 120.0, 200.0, 120.0).unwrap().with_body(Body::dynamic().with_velocity(0.0, 1.0)), ());
    engine.spawn(Line::new(100.0, 121.0, 200.0, 119.0).unwrap().with_body(Body::fixed()), ());

    engine.advance(0.0);
    assert!(engine.contact_events().is_empty());
    let moved = engine.entities()[0].shape.as_rectangle().unwrap();
    assert_eq!(moved.position(), Vec2::new(105.0, 100.0));
    assert_eq!(moved.body.velocity, Vec2::new(5.0, 0.0));
}

#[test]
fn test_static_pairs_are_skipped() {
    let mut engine = Engine::new(Vec2::ZERO);
    engine.spawn(Circle::new(100.0, 100.0, 10.0).with_body(Body::fixed()), ());
    engine.spawn(Circle::new(105.0, 100.0, 10.0).with_body(Body::fixed()), ());
    let next = engine.step(1.0);
    assert_eq!(next.entities(), engine.entities());
}

#[test]
fn test_circle_pair_resolution_in_step() {
    let mut engine = Engine::new(Vec2::ZERO);
    engine.spawn(dynamic_circle(100.0, 100.0, 10.0, 0.0, 0.0), ());
    engine.spawn(dynamic_circle(115.0, 100.0, 10.0, 0.0, 0.0), ());

    let next = engine.step(1.0);
    let a = next.entities()[0].shape.as_circle().unwrap();
    let b = next.entities()[1].shape.as_circle().unwrap();
    assert_eq!(b.center().distance_squared(a.center()).sqrt(), a.radius + b.radius);
    assert_eq!(a.body.velocity, Vec2::ZERO);
    assert_eq!(b.body.velocity, Vec2::ZERO);
}

#[test]
fn test_dynamic_circle_bounces_off_static_peg() {
    let mut engine = Engine::new(Vec2::ZERO);
    // velocity is applied during integration, so start one step earlier
    engine.spawn(dynamic_circle(100.0, 90.0, 10.0, 0.0, 5.0), ());
    engine.spawn(Circle::new(100.0, 100.0, 5.0).with_body(Body::fixed()), ());

    let next = engine.step(0.0);
    let ball = next.entities()[0].shape.as_circle().unwrap();
    assert_relative_eq!(ball.body.velocity.y, -0.9 * 5.0, epsilon = 1e-5);
    assert_eq!(ball.center(), Vec2::new(100.0, 85.0));
    assert_eq!(next.entities()[1], engine.entities()[1]);
    assert_eq!(
        next.contact_events(),
        &[ContactEvent { first: 0, second: 1, kind: ContactKind::CircleCircle }]
    );
}

#[test]
fn test_circle_line_dispatch_in_either_order() {
    for line_first in [false, true] {
        let mut engine = Engine::new(Vec2::ZERO);
        let line = Line::new(50.0, 100.0, 150.0, 100.0).unwrap().with_body(Body::fixed());
        let ball = dynamic_circle(100.0, 90.0, 10.0, 0.0, 20.0);
        if line_first {
            engine.spawn(line, ());
            engine.spawn(ball, ());
        } else {
            engine.spawn(ball, ());
            engine.spawn(line, ());
        }

        engine.advance(0.0);
        let ball_index = if line_first { 1 } else { 0 };
        let ball = engine.entities()[ball_index].shape.as_circle().unwrap();
        assert_eq!(ball.center(), Vec2::new(100.0, 90.0));
        assert_relative_eq!(ball.body.velocity.y, -20.0 * 0.81, epsilon = 1e-4);
        assert_eq!(engine.contact_events()[0].kind, ContactKind::CircleLine);
    }
}

#[test]
fn test_circle_rectangle_dispatch_in_either_order() {
    for rect_first in [false, true] {
        let mut engine = Engine::new(Vec2::ZERO);
        let floor = Rectangle::new(0.0, 100.0, 200.0, 20.0).with_body(Body::fixed());
        let ball = dynamic_circle(50.0, 89.0, 10.0, 0.0, 5.0);
        if rect_first {
            engine.spawn(floor, ());
            engine.spawn(ball, ());
        } else {
            engine.spawn(ball, ());
            engine.spawn(floor, ());
        }

        engine.advance(0.0);
        let ball_index = if rect_first { 1 } else { 0 };
        let ball = engine.entities()[ball_index].shape.as_circle().unwrap();
        assert_relative_eq!(ball.y, 90.0, epsilon = 1e-5);
        assert_relative_eq!(ball.body.velocity.y, -4.5, epsilon = 1e-5);
        assert_eq!(engine.contact_events()[0].kind, ContactKind::CircleRectangle);
    }
}

#[test]
fn test_later_pairs_see_earlier_resolutions() {
    // a is pushed left by b, which brings it into contact with c
    let mut engine = Engine::new(Vec2::ZERO);
    engine.spawn(dynamic_circle(100.0, 100.0, 10.0, 0.0, 0.0), "a");
    engine.spawn(Circle::new(110.0, 100.0, 10.0).with_body(Body::fixed()), "b");
    engine.spawn(Circle::new(75.0, 100.0, 10.0).with_body(Body::fixed()), "c");

    engine.advance(0.0);
    let a = engine.entities()[0].shape.as_circle().unwrap();
    // pushed to x = 90 by b, then back to x = 95 by c
    assert_relative_eq!(a.x, 95.0, epsilon = 1e-4);
    let pairs: Vec<_> = engine.contact_events().iter().map(|e| (e.first, e.second)).collect();
    assert_eq!(pairs, vec![(0, 1), (0, 2)]);
}

#[test]
fn test_damping_and_acceleration_shape_motion() {
    let mut engine = Engine::new(Vec2::new(0.0, 10.0));
    engine.spawn(
        Circle::new(100.0, 100.0, 5.0).with_body(
            Body::dynamic()
                .with_acceleration(4.0, 0.0)
                .with_damping(0.5),
        ),
        (),
    );
    engine.advance(0.5);
    let ball = engine.entities()[0].shape.as_circle().unwrap();
    assert_eq!(ball.body.velocity, Vec2::new(1.0, 2.5));
    assert_eq!(ball.center(), Vec2::new(101.0, 102.5));
}

#[test]
fn test_line_translates_with_its_velocity() {
    let mut engine = Engine::new(Vec2::ZERO);
    engine.spawn(Line::new(100.0, 100.0, 200.0, 150.0).unwrap().with_body(Body::dynamic().with_velocity(3.0, -2.0)), ());
    engine.advance(1.0);
    let line = engine.entities()[0].shape.as_line().unwrap();
    assert_eq!(line.start(), Vec2::new(103.0, 98.0));
    assert_eq!(line.end(), Vec2::new(203.0, 148.0));
    assert_eq!(line.segment(), Vec2::new(100.0, 50.0));
}

#[test]
fn test_long_run_stays_finite() {
    let mut engine = Engine::with_bounds(0.0, 0.0, 600.0, 800.0, Vec2::new(0.0, 9.8));
    engine.spawn(Rectangle::new(500.0, 50.0, 50.0, 400.0).with_body(Body::fixed()), ());
    engine.spawn(Rectangle::new(0.0, 50.0, 50.0, 400.0).with_body(Body::fixed()), ());
    engine.spawn(Line::new(50.0, 300.0, 400.0, 350.0).unwrap().with_body(Body::fixed()), ());
    engine.spawn(Line::new(500.0, 400.0, 100.0, 450.0).unwrap().with_body(Body::fixed()), ());
    for i in 0..7 {
        for j in 0..3 {
            engine.spawn(
                Circle::new(i as f32 * 60.0 + 100.0, j as f32 * 60.0 + 100.0, 5.0).with_body(Body::fixed()),
                (),
            );
        }
    }
    for k in 0..10 {
        let x = 60.0 + k as f32 * 35.0;
        engine.spawn(dynamic_circle(x, 30.0 + k as f32 * 7.0, 10.0, (k % 5) as f32 - 2.0, 1.0), ());
    }

    for _ in 0..2000 {
        engine.advance(0.01);
        for entity in engine.entities() {
            assert!(entity.shape.anchor().is_finite());
            assert!(entity.shape.body().velocity.is_finite());
        }
    }
    // static scenery never leaves
    assert!(engine.len() >= 25);
}
