//! Property-based tests for the floating window controller

use proptest::prelude::*;
use realmterm::config::WindowConfig;
use realmterm::window::{Handle, Interaction, Point, Viewport, WindowController};

fn point() -> impl Strategy<Value = Point> {
    (-2000.0f32..4000.0, -2000.0f32..4000.0).prop_map(|(x, y)| Point::new(x, y))
}

proptest! {
    #[test]
    fn test_resize_never_below_minimum(moves in prop::collection::vec(point(), 1..20)) {
        let config = WindowConfig::default();
        let mut window = WindowController::new(config.clone(), Viewport::new(1280.0, 800.0));
        let _capture = window.pointer_down(Handle::ResizeCorner, Point::new(0.0, 0.0));
        for pointer in moves {
            window.pointer_move(pointer);
            let geometry = window.geometry();
            prop_assert!(geometry.width >= config.min_width);
            prop_assert!(geometry.height >= config.min_height);
        }
    }

    #[test]
    fn test_drag_moves_by_exact_delta(start in point(), end in point()) {
        let mut window = WindowController::default();
        let before = window.geometry();
        let capture = window.pointer_down(Handle::TitleBar, start);
        window.pointer_move(end);
        window.pointer_up();
        drop(capture);

        let after = window.geometry();
        let tolerance = 1e-2;
        prop_assert!(((after.x - before.x) - (end.x - start.x)).abs() < tolerance);
        prop_assert!(((after.y - before.y) - (end.y - start.y)).abs() < tolerance);
        prop_assert_eq!((after.width, after.height), (before.width, before.height));
        prop_assert_eq!(window.interaction(), Interaction::Idle);
    }

    #[test]
    fn test_maximize_twice_returns_to_default(
        moves in prop::collection::vec(point(), 0..5),
        width in 200.0f32..4000.0,
        height in 200.0f32..3000.0,
    ) {
        let mut window = WindowController::new(WindowConfig::default(), Viewport::new(width, height));
        let default = window.geometry();
        let capture = window.begin_drag(Point::new(0.0, 0.0));
        for pointer in moves {
            window.pointer_move(pointer);
        }
        drop(capture);

        window.toggle_maximize();
        window.toggle_maximize();
        prop_assert_eq!(window.geometry(), default);
        prop_assert!(!window.is_maximized());
    }
}
