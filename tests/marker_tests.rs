//! Marker controller behaviour across both board presets.

use iso_garden::config::BoardConfig;
use iso_garden::input::{Arrow, KeyInput};
use iso_garden::model::{Cell, Coord, MoveMode};
use iso_garden::state::{MarkerAction, MarkerState};

const EPS: f64 = 1e-9;

fn key(k: &str) -> MarkerAction {
    MarkerAction::Key(KeyInput::from_key(k).expect("recognised key"))
}

fn run(mut s: MarkerState, keys: &[&str]) -> MarkerState {
    for k in keys {
        s = s.apply(key(k));
    }
    s
}

fn assert_on_board(s: &MarkerState) {
    let max_x = (s.config.cols - 1) as f64;
    let max_y = (s.config.rows - 1) as f64;
    assert!(
        (0.0..=max_x).contains(&s.pos.x) && (0.0..=max_y).contains(&s.pos.y),
        "marker left the board: {:?}",
        s.pos
    );
}

#[test]
fn test_simple_left_three_times_clamps() {
    let s = run(
        MarkerState::new(BoardConfig::simple()),
        &["ArrowLeft", "ArrowLeft", "ArrowLeft"],
    );
    assert_eq!(s.pos, Coord::new(0.0, 1.0));
}

#[test]
fn test_simple_moves_whole_cells_on_grid_axes() {
    let s = MarkerState::new(BoardConfig::simple());
    assert_eq!(s.apply(key("ArrowRight")).pos, Coord::new(2.0, 1.0));
    assert_eq!(s.apply(key("ArrowDown")).pos, Coord::new(1.0, 2.0));
    assert_eq!(s.apply(key("ArrowUp")).pos, Coord::new(1.0, 0.0));
}

#[test]
fn test_fine_up_nine_times_crosses_one_cell() {
    let s = run(MarkerState::new(BoardConfig::fine()), &["ArrowUp"; 9]);
    assert!((s.pos.x - 1.5).abs() < EPS, "x = {}", s.pos.x);
    assert!((s.pos.y - 1.5).abs() < EPS, "y = {}", s.pos.y);
    assert_eq!(s.mode, MoveMode::ScreenOrtho);
}

#[test]
fn test_double_toggle_restores_mode() {
    let s = run(MarkerState::new(BoardConfig::fine()), &["ArrowDown", "ArrowLeft"]);
    let t = run(s.clone(), &["m", "M"]);
    assert_eq!(t.mode, s.mode);
    assert_eq!(t.pos, s.pos);
}

#[test]
fn test_grid_axis_table() {
    let start = run(MarkerState::new(BoardConfig::fine()), &["m"]);
    assert_eq!(start.mode, MoveMode::GridAxis);
    let step = 1.0 / 9.0;
    let cases = [
        ("ArrowUp", 0.0, -step),
        ("ArrowDown", 0.0, step),
        ("ArrowLeft", -step, 0.0),
        ("ArrowRight", step, 0.0),
    ];
    for (k, dx, dy) in cases {
        let t = start.apply(key(k));
        assert!((t.pos.x - (2.5 + dx)).abs() < EPS, "{k} x");
        assert!((t.pos.y - (2.5 + dy)).abs() < EPS, "{k} y");
    }
}

#[test]
fn test_screen_ortho_table() {
    let start = MarkerState::new(BoardConfig::fine());
    let step = 1.0 / 9.0;
    let cases = [
        ("ArrowUp", -step, -step),
        ("ArrowDown", step, step),
        ("ArrowLeft", -step, step),
        ("ArrowRight", step, -step),
    ];
    for (k, dx, dy) in cases {
        let t = start.apply(key(k));
        assert!((t.pos.x - (2.5 + dx)).abs() < EPS, "{k} x");
        assert!((t.pos.y - (2.5 + dy)).abs() < EPS, "{k} y");
    }
}

#[test]
fn test_long_key_sequences_stay_on_board() {
    let keys = ["ArrowUp", "ArrowRight", "m", "ArrowRight", "ArrowDown", "ArrowLeft"];
    for cfg in [BoardConfig::simple(), BoardConfig::fine()] {
        let mut s = MarkerState::new(cfg);
        // deterministic pseudo-random walk heavy on one direction to hit every edge
        for i in 0..400usize {
            let k = keys[(i * 7 + i / 13) % keys.len()];
            s = s.apply(key(k));
            assert_on_board(&s);
        }
        for _ in 0..60 {
            s = s.apply(key("ArrowDown"));
            assert_on_board(&s);
        }
    }
}

#[test]
fn test_screen_ortho_corner_clamps_each_axis() {
    let s = run(MarkerState::new(BoardConfig::fine()), &["ArrowRight"; 40]);
    assert!((s.pos.x - 4.0).abs() < EPS);
    assert_eq!(s.pos.y, 0.0);
    assert_eq!(s.selected(), Cell { x: 4, y: 0 });
}

#[test]
fn test_selection_follows_rounding() {
    let s = MarkerState {
        pos: Coord::new(1.6, 1.4),
        ..MarkerState::new(BoardConfig::fine())
    };
    assert_eq!(s.selected(), Cell { x: 2, y: 1 });
}

#[test]
fn test_unrecognised_keys_do_not_map() {
    assert!(KeyInput::from_key("x").is_none());
    assert_eq!(
        KeyInput::from_key("ArrowLeft"),
        Some(KeyInput::Move(Arrow::Left))
    );
}

#[test]
fn test_every_session_starts_from_the_default_board() {
    let s = MarkerState::default()
        .apply(MarkerAction::Reconfigure(BoardConfig::simple()))
        .apply(key("ArrowLeft"));
    assert_eq!(s.config, BoardConfig::simple());

    let next_session = MarkerState::default();
    assert_eq!(next_session.config, BoardConfig::default());
    assert_eq!(next_session.config, BoardConfig::fine());
    assert_eq!(next_session.pos, Coord::new(2.5, 2.5));
    assert_eq!(next_session.mode, MoveMode::ScreenOrtho);
}
