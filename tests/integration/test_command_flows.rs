//! Integration Tests for Command Execution Flows
//!
//! Runs whole command lines through the interpreter and checks what lands in
//! the transcript and which effects come back.

#[path = "../test_utils/fixtures.rs"]
mod fixtures;

use fixtures::{contents, open_portfolio, Shell};
use realmterm::commands::{self, TerminalEffect};
use realmterm::terminal::{InputEditor, InputResult, Key};
use realmterm::{EntryKind, Section};

#[test]
fn test_every_verb_echoes_once_and_answers() {
    for verb in commands::verbs() {
        if matches!(*verb, "clear" | "cls") {
            continue;
        }
        let mut shell = Shell::new();
        shell.run(verb);

        let kinds = shell.kinds();
        assert_eq!(kinds[0], EntryKind::Command, "{} did not echo first", verb);
        assert_eq!(
            kinds.iter().filter(|k| **k == EntryKind::Command).count(),
            1,
            "{} echoed more than once",
            verb
        );
        assert!(kinds.len() >= 2, "{} produced no response", verb);
    }
}

#[test]
fn test_unknown_tokens_produce_one_error() {
    for token in ["foo", "LS", "Help", "unlock-all", "💥"] {
        let mut shell = Shell::new();
        let effects = shell.run(&format!("{} with args", token));
        assert!(effects.is_empty());
        assert_eq!(shell.kinds(), vec![EntryKind::Command, EntryKind::Error]);
        assert!(shell.last().contains(token));
    }
}

#[test]
fn test_clear_empties_transcript() {
    let mut shell = Shell::new();
    shell.run("ls");
    shell.run("whoami");
    shell.run("cls");
    assert!(shell.transcript.is_empty());
    assert_eq!(shell.history.len(), 3);
}

#[test]
fn test_help_is_a_single_listing() {
    let mut shell = Shell::new();
    shell.run("help");
    assert_eq!(shell.kinds(), vec![EntryKind::Command, EntryKind::Output]);
    let listing = shell.last();
    for spec in commands::COMMANDS {
        assert!(listing.contains(spec.description));
    }
}

#[test]
fn test_cd_dev_requests_navigation() {
    let mut shell = Shell::new();
    assert_eq!(shell.run("cd dev"), vec![TerminalEffect::Navigate(Section::Dev)]);
    assert_eq!(contents(&shell.transcript)[0], "~ $ cd dev");
}

#[test]
fn test_prompt_follows_section() {
    let mut shell = Shell::new();
    shell.section = Section::Projects;
    shell.run("pwd");
    assert_eq!(
        contents(&shell.transcript),
        vec!["~/projects $ pwd".to_string(), "~/projects".to_string()]
    );
}

#[test]
fn test_unlock_reports_optimistically() {
    let mut shell = Shell::new();
    let effects = shell.run("unlock game WRONG");
    assert_eq!(
        effects,
        vec![TerminalEffect::UnlockAttempt {
            code: "WRONG".to_string(),
            realm: "game".to_string(),
        }]
    );
    assert_eq!(shell.kinds(), vec![EntryKind::Command, EntryKind::Output]);
}

#[test]
fn test_tab_completion() {
    let mut editor = InputEditor::new();
    editor.type_str("who");
    editor.process_key(Key::Tab);
    assert_eq!(editor.buffer(), "whoami ");

    let mut editor = InputEditor::new();
    editor.type_str("h");
    assert!(matches!(
        editor.process_key(Key::Tab),
        InputResult::CompletionSuggestions(_)
    ));
    assert_eq!(editor.buffer(), "h");
}

#[test]
fn test_full_session_through_the_app() {
    let (mut app, now) = open_portfolio();
    for line in ["whoami", "projects", "  ", "history"] {
        app.submit(line, now);
    }
    let history: Vec<_> = app.terminal().history().entries().to_vec();
    assert_eq!(history, vec!["whoami", "projects", "history"]);

    let listing = contents(app.terminal().transcript()).pop().unwrap_or_default();
    assert!(listing.contains("1  whoami"));
    assert!(listing.contains("3  history"));
}
