// End-to-end throws through the public API
use approx::assert_abs_diff_eq;
use cart_toss::angle_calculations::discriminant;
use cart_toss::{
    solve_motion, AnimationConfig, AnimationDriver, CatalogLayout, Direction, FixedRateClock,
    FrameOutcome, MarkerState, MarkerStyle, PathKind,
};
use nalgebra::Vector2;

fn config() -> AnimationConfig {
    AnimationConfig::default()
}

#[test]
fn test_reference_throw() {
    let params = solve_motion(Vector2::new(600.0, 400.0), Vector2::new(100.0, 50.0), 0.0, &config())
        .unwrap();
    assert_eq!(params.direction, Direction::Leftward);
    assert!(params.initial_speed > 0);
    assert!(params.discriminant().unwrap() >= 0.0);

    let mut driver = AnimationDriver::new(config()).unwrap();
    let run = driver.start(params, 0.0);

    let mut frames: Vec<MarkerState> = Vec::new();
    let mut clock = FixedRateClock::new(0.0, 1000.0 / 60.0);
    let outcome = driver
        .drive(&mut clock, &mut |marker: &MarkerState| frames.push(marker.clone()))
        .unwrap();

    // First rendered frame sits on the launch point
    let first = frames[0].position().unwrap();
    assert_abs_diff_eq!(first.x, 600.0, epsilon = 1e-9);
    assert_abs_diff_eq!(first.y, 400.0, epsilon = 1e-9);

    match outcome {
        FrameOutcome::Finished { run: finished, final_position, frames: count } => {
            assert_eq!(finished, run);
            assert!(final_position.x <= 100.0);
            assert_eq!(count, frames.len());
        }
        other => panic!("unexpected outcome {other:?}"),
    }

    // Visibility is false immediately after the final frame
    assert!(!frames.last().unwrap().is_visible());
    assert!(!driver.marker().is_visible());
}

#[test]
fn test_solver_terminates_across_geometry() {
    let spans = [-2000.0, -640.0, -1.0, 0.5, 3.0, 250.0, 1920.0];
    let rises = [-900.0, -10.0, 0.0, 10.0, 350.0, 1200.0];
    for &dx in &spans {
        for &rise in &rises {
            let origin = Vector2::new(1000.0, 800.0);
            let target = Vector2::new(1000.0 + dx, 800.0 - rise);
            let params = solve_motion(origin, target, 0.0, &config()).unwrap();
            assert_eq!(params.path, PathKind::Ballistic);
            assert!(params.initial_speed > 0);
            assert!(params.launch_angle.is_finite());
            assert!(params.discriminant().unwrap() >= 0.0);

            // One less unit of speed would not reach
            let slower = discriminant(
                (params.initial_speed - 1) as f64,
                params.horizontal_span,
                params.vertical_span,
                params.gravity,
            );
            assert!(params.initial_speed == 1 || slower.discriminant < 0.0);

            let expected = if dx < 0.0 { Direction::Leftward } else { Direction::Rightward };
            assert_eq!(params.direction, expected);
        }
    }
}

#[test]
fn test_every_catalog_card_lands_on_cart() {
    let layout = CatalogLayout::default();
    for card in 0..layout.card_count {
        let geometry = layout.click_geometry(card, 0.0).unwrap();
        let mut driver = AnimationDriver::new(config()).unwrap();
        driver.launch(&geometry, 0.0).unwrap();

        let direction = driver.current_motion().unwrap().direction;
        let mut last_x: Option<f64> = None;
        let mut clock = FixedRateClock::new(0.0, 16.0);
        let outcome = driver
            .drive(&mut clock, &mut |marker: &MarkerState| {
                if let Some(p) = marker.position() {
                    if let Some(prev) = last_x {
                        match direction {
                            Direction::Leftward => assert!(p.x <= prev),
                            Direction::Rightward => assert!(p.x >= prev),
                        }
                    }
                    last_x = Some(p.x);
                }
            })
            .unwrap();

        match outcome {
            FrameOutcome::Finished { final_position, .. } => match direction {
                Direction::Leftward => assert!(final_position.x <= layout.cart.left),
                Direction::Rightward => assert!(final_position.x >= layout.cart.left),
            },
            other => panic!("card {card}: unexpected outcome {other:?}"),
        }
    }
}

#[test]
fn test_zero_span_does_not_hang_or_emit_nan() {
    let params = solve_motion(Vector2::new(300.0, 400.0), Vector2::new(300.0, 50.0), 0.0, &config())
        .unwrap();
    assert_eq!(params.path, PathKind::Vertical);

    let mut driver = AnimationDriver::new(config()).unwrap();
    driver.start(params, 0.0);
    let mut clock = FixedRateClock::new(0.0, 16.0).with_limit(10_000);
    let outcome = driver
        .drive(&mut clock, &mut |marker: &MarkerState| {
            if let Some(p) = marker.position() {
                assert!(p.x.is_finite() && p.y.is_finite());
                assert_eq!(p.x, 300.0);
            }
        })
        .unwrap();
    assert!(matches!(outcome, FrameOutcome::Finished { .. }));
    assert!(!driver.marker().is_visible());
}

#[test]
fn test_rapid_double_click() {
    let layout = CatalogLayout::default();
    let mut driver = AnimationDriver::new(config()).unwrap();

    let first = driver.launch(&layout.click_geometry(0, 0.0).unwrap(), 0.0).unwrap();
    driver.tick(16.0);
    driver.tick(32.0);
    let second = driver.launch(&layout.click_geometry(5, 0.0).unwrap(), 40.0).unwrap();
    assert_ne!(first, second);
    assert_eq!(driver.current_run(), Some(second));

    let mut clock = FixedRateClock::new(48.0, 16.0);
    let outcome = driver.drive(&mut clock, &mut |_: &MarkerState| {}).unwrap();
    assert!(matches!(outcome, FrameOutcome::Finished { run, .. } if run == second));
    assert!(!driver.marker().is_visible());
    assert_eq!(driver.tick(10_000.0), FrameOutcome::Idle);
}

#[test]
fn test_marker_style_pixel_strings() {
    let mut driver = AnimationDriver::new(config()).unwrap();
    let params = solve_motion(Vector2::new(600.4, 399.6), Vector2::new(100.0, 50.0), 0.0, &config())
        .unwrap();
    driver.start(params, 0.0);
    driver.tick(0.0);
    let style = MarkerStyle::from(driver.marker());
    assert!(style.visible);
    assert_eq!(style.left, "600px");
    assert_eq!(style.top, "400px");
}

#[test]
fn test_scroll_offset_changes_solution() {
    let origin = Vector2::new(600.0, 900.0);
    let target = Vector2::new(100.0, 50.0);
    let unscrolled = solve_motion(origin, target, 0.0, &config()).unwrap();
    let scrolled = solve_motion(origin, target, 500.0, &config()).unwrap();
    assert!(scrolled.vertical_span < unscrolled.vertical_span);
    assert!(scrolled.initial_speed < unscrolled.initial_speed);
}
