//! Unit Tests for History Navigation
//!
//! Arrow-key recall through the input editor, including the boundary cases
//! at both ends of the log.

use realmterm::terminal::{CommandHistory, InputEditor, InputResult, Key, Recall};

fn editor_with(lines: &[&str]) -> InputEditor {
    let mut editor = InputEditor::new();
    for line in lines {
        editor.type_str(line);
        editor.process_key(Key::Enter);
    }
    editor
}

#[test]
fn test_up_at_oldest_is_idempotent() {
    let mut editor = editor_with(&["ls", "pwd", "whoami"]);
    for _ in 0..3 {
        editor.process_key(Key::Up);
    }
    assert_eq!(editor.buffer(), "ls");
    for _ in 0..5 {
        editor.process_key(Key::Up);
        assert_eq!(editor.buffer(), "ls");
        assert_eq!(editor.history().cursor(), Some(2));
    }
}

#[test]
fn test_down_when_not_browsing_keeps_input() {
    let mut editor = editor_with(&["ls"]);
    editor.type_str("draft");
    assert_eq!(editor.process_key(Key::Down), InputResult::NoOp);
    assert_eq!(editor.buffer(), "draft");
}

#[test]
fn test_down_past_newest_clears_input() {
    let mut editor = editor_with(&["ls", "pwd"]);
    editor.process_key(Key::Up);
    editor.process_key(Key::Down);
    assert_eq!(editor.buffer(), "");
    assert_eq!(editor.history().cursor(), None);
}

#[test]
fn test_submit_resets_browsing() {
    let mut editor = editor_with(&["ls", "pwd"]);
    editor.process_key(Key::Up);
    editor.process_key(Key::Up);
    editor.process_key(Key::Enter);
    assert_eq!(editor.history().cursor(), None);
    assert_eq!(editor.history().entries().last().map(String::as_str), Some("ls"));

    editor.process_key(Key::Up);
    assert_eq!(editor.buffer(), "ls");
}

#[test]
fn test_up_on_empty_history() {
    let mut editor = InputEditor::new();
    editor.type_str("x");
    assert_eq!(editor.process_key(Key::Up), InputResult::NoOp);
    assert_eq!(editor.buffer(), "x");
}

#[test]
fn test_history_keeps_duplicates_in_order() {
    let mut history = CommandHistory::new();
    for line in ["ls", "ls", "pwd"] {
        history.push(line);
    }
    assert_eq!(history.step_back(), Recall::Show("pwd".to_string()));
    assert_eq!(history.step_back(), Recall::Show("ls".to_string()));
    assert_eq!(history.step_back(), Recall::Show("ls".to_string()));
    assert_eq!(history.cursor(), Some(2));
}
