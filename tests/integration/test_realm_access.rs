//! Integration Tests for Realm Access
//!
//! Locked navigation, unlock codes typed into the terminal, transitions and
//! notices, all driven through the portfolio app.

#[path = "../test_utils/fixtures.rs"]
mod fixtures;

use fixtures::{after_ms, contents, open_portfolio};
use realmterm::config::{Config, RealmsConfig, TimingConfig};
use realmterm::{GatedRealm, Portfolio, RealmView, Section, UiEvent, Viewport};

#[test]
fn test_wrong_code_is_silent_and_keeps_realm_locked() {
    let (mut app, now) = open_portfolio();
    app.submit("unlock design WRONG", now);

    let transcript = contents(app.terminal().transcript());
    assert_eq!(
        transcript.last().map(String::as_str),
        Some("🔓 Attempting to unlock design realm...")
    );
    assert!(!app.session().gate().is_unlocked(GatedRealm::Design));

    app.handle_event(UiEvent::Tick, after_ms(now, 5_000));
    assert_eq!(app.terminal().transcript().len(), transcript.len());
}

#[test]
fn test_cd_into_locked_realm_raises_notice() {
    let (mut app, now) = open_portfolio();
    app.submit("cd design", now);

    assert!(!app.session().is_transitioning());
    assert_eq!(app.view(), RealmView::Content(Section::Home));
    let notices = app.session().notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].realm(), GatedRealm::Design);
    assert_eq!(notices[0].hint(), "Try: unlock design DESIGN_2024");
}

#[test]
fn test_unlock_then_enter() {
    let (mut app, now) = open_portfolio();
    app.submit("cd design", now);
    app.submit("unlock design DESIGN_2024", after_ms(now, 200));

    assert!(app.session().notices().is_empty());
    assert_eq!(app.view(), RealmView::Hidden);

    app.handle_event(UiEvent::Tick, after_ms(now, 1_000));
    assert_eq!(app.view(), RealmView::Hidden);
    app.handle_event(UiEvent::Tick, after_ms(now, 1_700));
    assert_eq!(app.view(), RealmView::Content(Section::Design));
    assert_eq!(app.prompt(), "~/design $");

    app.submit("ls", after_ms(now, 1_800));
    let listing = contents(app.terminal().transcript()).pop().unwrap_or_default();
    assert!(listing.contains("📁 design/"));
    assert!(listing.contains("🔒 game/"));
}

#[test]
fn test_unlocked_realm_stays_open() {
    let (mut app, now) = open_portfolio();
    app.submit("unlock game GAME_MASTER", now);
    app.submit("unlock game nope", now);
    app.handle_event(UiEvent::Tick, after_ms(now, 1_500));
    app.submit("cd ~", after_ms(now, 1_600));
    app.handle_event(UiEvent::Tick, after_ms(now, 3_200));
    app.submit("cd game", after_ms(now, 3_300));
    app.handle_event(UiEvent::Tick, after_ms(now, 4_800));

    assert_eq!(app.view(), RealmView::Content(Section::Game));
    assert!(app.session().notices().is_empty());
}

#[test]
fn test_notices_expire_and_stagger() {
    let mut app = Portfolio::default();
    let now = std::time::Instant::now();
    app.handle_event(UiEvent::Navigate { section: Section::Game }, now);
    app.handle_event(UiEvent::Navigate { section: Section::Design }, now);

    assert_eq!(app.session().visible_notices(now).count(), 1);
    assert_eq!(app.session().visible_notices(after_ms(now, 80)).count(), 2);

    let report = app.handle_event(UiEvent::Tick, after_ms(now, 5_000));
    assert_eq!(report.expired_notices, 2);
    assert!(app.session().notices().is_empty());
}

#[test]
fn test_dismissing_a_notice() {
    let mut app = Portfolio::default();
    let now = std::time::Instant::now();
    app.handle_event(UiEvent::Navigate { section: Section::Game }, now);
    let id = app.session().notices()[0].id().to_string();
    app.handle_event(UiEvent::DismissNotice { id }, now);
    assert!(app.session().notices().is_empty());
}

#[test]
fn test_configured_secrets_and_timing() {
    let config = Config {
        realms: RealmsConfig {
            design: "letmein".to_string(),
            ..RealmsConfig::default()
        },
        timing: TimingConfig {
            transition_ms: 10,
            ..TimingConfig::default()
        },
        ..Config::default()
    };
    let mut app = Portfolio::new(config, Viewport::default());
    let now = std::time::Instant::now();
    app.open_terminal();

    app.submit("unlock design DESIGN_2024", now);
    assert!(!app.session().gate().is_unlocked(GatedRealm::Design));

    app.submit("unlock design letmein", now);
    app.handle_event(UiEvent::Tick, after_ms(now, 10));
    assert_eq!(app.view(), RealmView::Content(Section::Design));
}
