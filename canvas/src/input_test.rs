#![allow(clippy::float_cmp)]

use super::*;
use crate::history::HistoryEntry;

// =============================================================
// Helpers
// =============================================================

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn path_of(history: &History, id: StrokeId) -> Vec<Point> {
    history
        .entries()
        .iter()
        .chain(history.trash())
        .filter_map(HistoryEntry::as_stroke)
        .find(|s| s.id == id)
        .map(|s| s.path.clone())
        .unwrap_or_default()
}

// =============================================================
// Tool
// =============================================================

#[test]
fn default_tool_is_pen() {
    assert_eq!(Tool::default(), Tool::Pen);
}

#[test]
fn tool_parses_names() {
    assert_eq!("pen".parse::<Tool>(), Ok(Tool::Pen));
    assert_eq!("wiper".parse::<Tool>(), Ok(Tool::Eraser));
    assert_eq!("Eraser".parse::<Tool>(), Ok(Tool::Eraser));
}

#[test]
fn tool_parse_rejects_unknown() {
    assert_eq!("brush".parse::<Tool>(), Err(ParseToolError("brush".to_owned())));
}

#[test]
fn from_fragment_strips_hash() {
    assert_eq!(Tool::from_fragment("#wiper"), Tool::Eraser);
    assert_eq!(Tool::from_fragment("#pen"), Tool::Pen);
}

#[test]
fn from_fragment_unknown_falls_back_to_pen() {
    assert_eq!(Tool::from_fragment(""), Tool::Pen);
    assert_eq!(Tool::from_fragment("#more"), Tool::Pen);
}

#[test]
fn tool_names_round_trip_through_fragment() {
    for tool in [Tool::Pen, Tool::Eraser] {
        assert_eq!(Tool::from_fragment(&format!("#{}", tool.as_str())), tool);
    }
}

#[test]
fn pen_line_style_uses_foreground_and_pen_width() {
    let style = Style::default();
    let line = Tool::Pen.line_style(&style);
    assert_eq!(line.color.as_deref(), Some("#000000"));
    assert_eq!(line.width, 4.0);
}

#[test]
fn eraser_line_style_has_no_color() {
    let style = Style::default();
    let line = Tool::Eraser.line_style(&style);
    assert_eq!(line.color, None);
    assert_eq!(line.width, 16.0);
}

// =============================================================
// StrokeBuilders
// =============================================================

#[test]
fn start_commits_stroke_immediately() {
    let mut history = History::new();
    let mut builders = StrokeBuilders::new();
    builders.start(1, Tool::Pen, &Style::default(), &mut history, pt(1.0, 1.0));

    assert_eq!(history.len(), 1);
    assert!(builders.is_active(1));
    let id = builders.get(1).unwrap().stroke;
    assert_eq!(path_of(&history, id), vec![pt(1.0, 1.0)]);
}

#[test]
fn start_drains_trash() {
    let mut history = History::new();
    let mut builders = StrokeBuilders::new();
    builders.start(1, Tool::Pen, &Style::default(), &mut history, pt(0.0, 0.0));
    builders.finish(1, &mut history, pt(1.0, 0.0));
    history.undo();
    assert!(history.can_redo());

    builders.start(2, Tool::Pen, &Style::default(), &mut history, pt(0.0, 0.0));
    assert!(!history.can_redo());
}

#[test]
fn extend_appends_and_returns_segment() {
    let mut history = History::new();
    let mut builders = StrokeBuilders::new();
    builders.start(1, Tool::Pen, &Style::default(), &mut history, pt(0.0, 0.0));

    let seg = builders.extend(1, &mut history, pt(3.0, 4.0)).unwrap();
    assert_eq!(seg.from, pt(0.0, 0.0));
    assert_eq!(seg.to, pt(3.0, 4.0));
    assert_eq!(seg.line.color.as_deref(), Some("#000000"));

    let seg = builders.extend(1, &mut history, pt(5.0, 5.0)).unwrap();
    assert_eq!(seg.from, pt(3.0, 4.0));
}

#[test]
fn extend_unknown_id_is_ignored() {
    let mut history = History::new();
    let mut builders = StrokeBuilders::new();
    assert!(builders.extend(9, &mut history, pt(1.0, 1.0)).is_none());
    assert!(history.is_empty());
}

#[test]
fn finish_unknown_id_is_ignored() {
    let mut history = History::new();
    let mut builders = StrokeBuilders::new();
    assert!(builders.finish(9, &mut history, pt(1.0, 1.0)).is_none());
    assert!(builders.is_empty());
}

#[test]
fn finish_appends_last_point_and_releases() {
    let mut history = History::new();
    let mut builders = StrokeBuilders::new();
    builders.start(1, Tool::Pen, &Style::default(), &mut history, pt(0.0, 0.0));
    let id = builders.get(1).unwrap().stroke;
    builders.extend(1, &mut history, pt(1.0, 0.0));
    assert!(builders.finish(1, &mut history, pt(2.0, 0.0)).is_some());

    assert!(!builders.is_active(1));
    assert_eq!(path_of(&history, id), vec![pt(0.0, 0.0), pt(1.0, 0.0), pt(2.0, 0.0)]);
}

#[test]
fn interleaved_contacts_keep_separate_paths() {
    let mut history = History::new();
    let mut builders = StrokeBuilders::new();
    let style = Style::default();
    builders.start(1, Tool::Pen, &style, &mut history, pt(0.0, 0.0));
    builders.start(2, Tool::Eraser, &style, &mut history, pt(100.0, 0.0));
    builders.extend(1, &mut history, pt(1.0, 0.0));
    builders.extend(2, &mut history, pt(101.0, 0.0));
    builders.finish(2, &mut history, pt(102.0, 0.0));
    builders.finish(1, &mut history, pt(2.0, 0.0));

    let strokes: Vec<_> = history.visible_strokes().collect();
    assert_eq!(strokes.len(), 2);
    assert_eq!(strokes[0].path, vec![pt(0.0, 0.0), pt(1.0, 0.0), pt(2.0, 0.0)]);
    assert_eq!(strokes[1].path, vec![pt(100.0, 0.0), pt(101.0, 0.0), pt(102.0, 0.0)]);
    assert!(strokes[1].is_eraser());
}

#[test]
fn style_is_captured_at_start() {
    let mut history = History::new();
    let mut builders = StrokeBuilders::new();
    let mut style = Style::default();
    builders.start(1, Tool::Pen, &style, &mut history, pt(0.0, 0.0));
    style.set_foreground("#FF0000");
    style.set_pen_width(30.0);

    let seg = builders.extend(1, &mut history, pt(1.0, 1.0)).unwrap();
    assert_eq!(seg.line.color.as_deref(), Some("#000000"));
    assert_eq!(seg.line.width, 4.0);
}

#[test]
fn undone_stroke_keeps_growing_in_trash() {
    let mut history = History::new();
    let mut builders = StrokeBuilders::new();
    builders.start(1, Tool::Pen, &Style::default(), &mut history, pt(0.0, 0.0));
    let id = builders.get(1).unwrap().stroke;
    history.undo();

    assert!(builders.extend(1, &mut history, pt(1.0, 1.0)).is_some());
    history.redo();
    assert_eq!(path_of(&history, id), vec![pt(0.0, 0.0), pt(1.0, 1.0)]);
}

#[test]
fn discarded_stroke_releases_tracking() {
    let mut history = History::new();
    let mut builders = StrokeBuilders::new();
    builders.start(1, Tool::Pen, &Style::default(), &mut history, pt(0.0, 0.0));
    history.undo();
    history.clear_trash();

    assert!(builders.extend(1, &mut history, pt(1.0, 1.0)).is_none());
    assert!(!builders.is_active(1));
}

#[test]
fn restart_same_id_retargets_new_stroke() {
    let mut history = History::new();
    let mut builders = StrokeBuilders::new();
    let style = Style::default();
    builders.start(1, Tool::Pen, &style, &mut history, pt(0.0, 0.0));
    let first = builders.get(1).unwrap().stroke;
    builders.start(1, Tool::Pen, &style, &mut history, pt(50.0, 50.0));
    let second = builders.get(1).unwrap().stroke;

    builders.finish(1, &mut history, pt(51.0, 51.0));
    assert_ne!(first, second);
    assert_eq!(path_of(&history, first), vec![pt(0.0, 0.0)]);
    assert_eq!(path_of(&history, second).len(), 2);
    assert_eq!(builders.len(), 0);
}

// =============================================================
// command_for_key
// =============================================================

#[test]
fn hotkeys_map_to_commands() {
    assert_eq!(command_for_key("u"), Some(Command::Undo));
    assert_eq!(command_for_key("R"), Some(Command::Redo));
    assert_eq!(command_for_key("c"), Some(Command::Clear));
    assert_eq!(command_for_key("p"), Some(Command::SelectTool(Tool::Pen)));
    assert_eq!(command_for_key("W"), Some(Command::SelectTool(Tool::Eraser)));
}

#[test]
fn unbound_keys_map_to_nothing() {
    assert_eq!(command_for_key("x"), None);
    assert_eq!(command_for_key(""), None);
    assert_eq!(command_for_key("Undo"), None);
    assert_eq!(command_for_key("Enter"), None);
}
