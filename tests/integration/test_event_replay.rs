//! Integration Tests for Event Script Replay
//!
//! Parses JSON-lines scripts and drives the portfolio with them on a
//! simulated clock, the way `realmterm --events` does.

use std::io::Write;
use std::time::{Duration, Instant};

use realmterm::events::parse_script;
use realmterm::{Error, Portfolio, RealmView, Section, UiEvent};

fn replay(script: &str) -> Portfolio {
    let events = parse_script(script).expect("script should parse");
    let mut app = Portfolio::default();
    let mut now = Instant::now();
    for event in events {
        if let UiEvent::Wait { ms } = event {
            now += Duration::from_millis(ms);
        }
        app.handle_event(event, now);
    }
    app
}

#[test]
fn test_scripted_unlock_session() {
    let app = replay(
        r#"
{"type":"click","control":"open"}
{"type":"navigate","section":"game"}
{"type":"type","text":"unlock game GAME_MASTER"}
{"type":"key","key":"enter"}
{"type":"wait","ms":1500}
"#,
    );
    assert_eq!(app.view(), RealmView::Content(Section::Game));
    assert!(app.session().notices().is_empty());
    assert_eq!(app.terminal().history().len(), 1);
}

#[test]
fn test_scripted_drag_and_maximize() {
    let app = replay(
        r#"
{"type":"viewport_resized","width":1200,"height":800}
{"type":"click","control":"toggle"}
{"type":"pointer_down","target":"title_bar","x":310,"y":210}
{"type":"pointer_move","x":410,"y":260}
{"type":"pointer_up"}
{"type":"pointer_move","x":900,"y":900}
"#,
    );
    let geometry = app.terminal().window().geometry();
    assert_eq!((geometry.x, geometry.y), (420.0, 250.0));
    assert!(!app.is_pointer_captured());

    let app = replay(
        r#"
{"type":"click","control":"open"}
{"type":"click","control":"maximize"}
"#,
    );
    assert!(app.terminal().window().is_maximized());
}

#[test]
fn test_history_keys_in_script() {
    let app = replay(
        r#"
{"type":"click","control":"open"}
{"type":"submit","line":"pwd"}
{"type":"submit","line":"whoami"}
{"type":"key","key":"up"}
{"type":"key","key":"up"}
"#,
    );
    assert_eq!(app.terminal().input().buffer(), "pwd");
}

#[test]
fn test_exit_in_script_closes_terminal() {
    let app = replay(
        r#"
{"type":"click","control":"open"}
{"type":"submit","line":"quit"}
{"type":"submit","line":"ls"}
"#,
    );
    assert!(!app.session().is_terminal_open());
    assert_eq!(app.terminal().history().len(), 1);
}

#[test]
fn test_script_file_errors() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "{{\"type\":\"tick\"}}").unwrap();
    writeln!(file, "not json").unwrap();

    let text = std::fs::read_to_string(file.path()).unwrap();
    match parse_script(&text) {
        Err(Error::InvalidEvent { line, .. }) => assert_eq!(line, 2),
        other => panic!("expected InvalidEvent, got {:?}", other),
    }
}
