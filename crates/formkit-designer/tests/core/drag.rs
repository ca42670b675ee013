use crate::support::*;
use formkit_core::{EditorEvent, Key, Modifiers, Rect};
use formkit_designer::DragMode;

#[test]
fn test_pointer_down_classifies_edges() {
    let cases = [
        ((15.0, 15.0), DragMode::Move),
        ((5.0, 5.0), DragMode::UlCorner),
        ((115.0, 5.0), DragMode::UrCorner),
        ((5.0, 55.0), DragMode::LlCorner),
        ((115.0, 55.0), DragMode::LrCorner),
        ((5.0, 30.0), DragMode::Left),
        ((115.0, 30.0), DragMode::Right),
        ((60.0, 5.0), DragMode::Top),
        ((60.0, 55.0), DragMode::Bottom),
    ];
    for ((x, y), expected) in cases {
        let mut editor = editor_with(&[Rect::new(10.0, 10.0, 100.0, 40.0)]);
        down(&mut editor, x, y);
        assert_eq!(editor.drag_mode(), expected, "pointer at ({}, {})", x, y);
    }
}

#[test]
fn test_release_at_anchor_is_bit_identical() {
    let original = Rect::new(10.3, 20.7, 100.1, 40.9);
    let mut editor = editor_with(&[original]);
    let id = ids(&editor)[0];

    down(&mut editor, 50.0, 40.0);
    move_to(&mut editor, 90.0, 75.0);
    move_to(&mut editor, 13.0, 2.0);
    up(&mut editor, 50.0, 40.0);

    assert_eq!(bounds(&editor, id), original);
    assert_eq!(editor.drag_mode(), DragMode::None);
}

#[test]
fn test_deltas_are_not_accumulated() {
    let mut editor = editor_with(&[Rect::new(100.0, 100.0, 50.0, 50.0)]);
    let id = ids(&editor)[0];

    down(&mut editor, 120.0, 120.0);
    for step in 1..=10 {
        move_to(&mut editor, 120.0 + step as f64, 120.0);
    }
    up(&mut editor, 130.0, 120.0);
    assert_eq!(bounds(&editor, id), Rect::new(110.0, 100.0, 50.0, 50.0));
}

#[test]
fn test_group_drag_is_all_or_nothing() {
    let mut editor = editor_with(&[
        Rect::new(10.0, 100.0, 50.0, 50.0),
        Rect::new(500.0, 100.0, 50.0, 50.0),
    ]);
    let all = ids(&editor);
    editor.select_all();

    down(&mut editor, 520.0, 120.0);
    assert_eq!(editor.selected(), all.as_slice());

    move_to(&mut editor, 500.0, 120.0);
    assert_eq!(bounds(&editor, all[0]), Rect::new(10.0, 100.0, 50.0, 50.0));
    assert_eq!(bounds(&editor, all[1]), Rect::new(500.0, 100.0, 50.0, 50.0));

    // Back inside the canvas the gesture continues.
    move_to(&mut editor, 515.0, 130.0);
    assert_eq!(bounds(&editor, all[0]), Rect::new(5.0, 110.0, 50.0, 50.0));
    assert_eq!(bounds(&editor, all[1]), Rect::new(495.0, 110.0, 50.0, 50.0));
    up(&mut editor, 515.0, 130.0);
}

#[test]
fn test_right_and_bottom_limits_keep_margin() {
    let mut editor = editor_with(&[Rect::new(900.0, 600.0, 100.0, 100.0)]);
    let id = ids(&editor)[0];

    drag(&mut editor, (950.0, 650.0), (964.0, 708.0));
    assert_eq!(bounds(&editor, id), Rect::new(914.0, 658.0, 100.0, 100.0));

    drag(&mut editor, (950.0, 700.0), (951.0, 700.0));
    assert_eq!(bounds(&editor, id), Rect::new(914.0, 658.0, 100.0, 100.0));
}

#[test]
fn test_resize_floor_clamps_instead_of_rejecting() {
    let mut editor = editor_with(&[Rect::new(10.0, 10.0, 100.0, 40.0)]);
    let id = ids(&editor)[0];

    drag(&mut editor, (115.0, 30.0), (-85.0, 30.0));
    assert_eq!(bounds(&editor, id), Rect::new(10.0, 10.0, 10.0, 40.0));
}

#[test]
fn test_top_left_floor_pins_opposite_corner() {
    let mut editor = editor_with(&[Rect::new(100.0, 100.0, 100.0, 40.0)]);
    let id = ids(&editor)[0];

    drag(&mut editor, (95.0, 95.0), (300.0, 300.0));
    assert_eq!(bounds(&editor, id), Rect::new(190.0, 130.0, 10.0, 10.0));
}

#[test]
fn test_drag_modifies_once_on_release() {
    let mut editor = editor_with(&[Rect::new(100.0, 100.0, 50.0, 50.0)]);
    down(&mut editor, 120.0, 120.0);
    move_to(&mut editor, 130.0, 130.0);
    move_to(&mut editor, 140.0, 140.0);
    assert_eq!(form_changes(&editor.take_events()), 0);

    up(&mut editor, 140.0, 140.0);
    assert_eq!(form_changes(&editor.take_events()), 1);
}

#[test]
fn test_escape_cancels_drag() {
    let mut editor = editor_with(&[Rect::new(100.0, 100.0, 50.0, 50.0)]);
    let id = ids(&editor)[0];
    down(&mut editor, 120.0, 120.0);
    move_to(&mut editor, 130.0, 120.0);
    key(&mut editor, Key::Escape, Modifiers::default());
    assert_eq!(editor.drag_mode(), DragMode::None);

    move_to(&mut editor, 200.0, 120.0);
    assert_eq!(bounds(&editor, id), Rect::new(110.0, 100.0, 50.0, 50.0));
}

#[test]
fn test_nudge_steps_follow_modifiers() {
    let mut editor = editor_with(&[Rect::new(100.0, 100.0, 50.0, 50.0)]);
    let id = ids(&editor)[0];
    editor.select(id);

    key(&mut editor, Key::ArrowRight, Modifiers::default());
    assert_eq!(bounds(&editor, id).x, 101.0);
    key(&mut editor, Key::ArrowDown, Modifiers::shift());
    assert_eq!(bounds(&editor, id).y, 110.0);
    key(&mut editor, Key::ArrowLeft, Modifiers::ctrl());
    assert_eq!(bounds(&editor, id).x, 51.0);
}

#[test]
fn test_nudge_off_canvas_moves_nothing() {
    let mut editor = editor_with(&[
        Rect::new(5.0, 100.0, 50.0, 50.0),
        Rect::new(300.0, 100.0, 50.0, 50.0),
    ]);
    let all = ids(&editor);
    editor.select_all();
    editor.take_events();

    key(&mut editor, Key::ArrowLeft, Modifiers::shift());
    assert_eq!(bounds(&editor, all[0]).x, 5.0);
    assert_eq!(bounds(&editor, all[1]).x, 300.0);
    let events = editor.take_events();
    assert_eq!(form_changes(&events), 0);
    assert_eq!(warnings(&events), 0);
}

#[test]
fn test_area_select_picks_intersecting_controls() {
    let mut editor = editor_with(&[
        Rect::new(100.0, 100.0, 50.0, 50.0),
        Rect::new(160.0, 160.0, 20.0, 20.0),
        Rect::new(400.0, 400.0, 20.0, 20.0),
    ]);
    let all = ids(&editor);

    down(&mut editor, 200.0, 200.0);
    assert_eq!(editor.drag_mode(), DragMode::AreaSelect);
    move_to(&mut editor, 125.0, 125.0);
    assert_eq!(editor.rubber_band(), Some(Rect::new(125.0, 125.0, 75.0, 75.0)));
    up(&mut editor, 125.0, 125.0);

    assert_eq!(editor.selected(), &[all[0], all[1]]);
    assert_eq!(editor.rubber_band(), None);
    assert!(editor
        .take_events()
        .iter()
        .any(|e| matches!(e, EditorEvent::RubberBand { rect: None })));
}

#[test]
fn test_area_select_with_shift_adds() {
    let mut editor = editor_with(&[
        Rect::new(100.0, 100.0, 50.0, 50.0),
        Rect::new(400.0, 400.0, 20.0, 20.0),
    ]);
    let all = ids(&editor);
    editor.select(all[1]);

    down_with(&mut editor, 200.0, 200.0, Modifiers::shift());
    move_to(&mut editor, 120.0, 120.0);
    up_with(&mut editor, 120.0, 120.0, Modifiers::shift());
    assert_eq!(editor.selected(), &[all[1], all[0]]);
}

#[test]
fn test_focus_loss_cancels_area_select() {
    let mut editor = editor_with(&[Rect::new(100.0, 100.0, 50.0, 50.0)]);
    down(&mut editor, 300.0, 300.0);
    move_to(&mut editor, 90.0, 90.0);
    editor.handle_input(&formkit_core::InputEvent::FocusLost);

    assert_eq!(editor.drag_mode(), DragMode::None);
    assert_eq!(editor.rubber_band(), None);
    up(&mut editor, 90.0, 90.0);
    assert!(editor.selected().is_empty());
}

#[test]
fn test_unfocused_empty_click_does_not_start_area_select() {
    let mut editor = editor_with(&[Rect::new(100.0, 100.0, 50.0, 50.0)]);
    editor.handle_input(&formkit_core::InputEvent::FocusLost);
    down(&mut editor, 300.0, 300.0);
    assert_eq!(editor.drag_mode(), DragMode::None);
}

#[test]
fn test_modal_dialog_blocks_input() {
    let mut editor = editor_with(&[Rect::new(100.0, 100.0, 50.0, 50.0)]);
    editor.set_modal_open(true);
    click(&mut editor, 120.0, 120.0);
    key(&mut editor, Key::Char('a'), Modifiers::ctrl());
    assert!(editor.selected().is_empty());
    assert!(editor.take_events().is_empty());

    editor.set_modal_open(false);
    click(&mut editor, 120.0, 120.0);
    assert_eq!(editor.selected().len(), 1);
}

#[test]
fn test_press_without_release_persists_previous_drag() {
    let mut editor = editor_with(&[Rect::new(100.0, 100.0, 50.0, 50.0)]);
    let id = ids(&editor)[0];

    down(&mut editor, 120.0, 120.0);
    move_to(&mut editor, 220.0, 120.0);
    assert_eq!(bounds(&editor, id), Rect::new(200.0, 100.0, 50.0, 50.0));
    assert_eq!(form_changes(&editor.take_events()), 0);

    // The release was lost; the next press lands in empty space.
    click(&mut editor, 600.0, 600.0);
    assert_eq!(form_changes(&editor.take_events()), 1);
    assert_eq!(bounds(&editor, id), Rect::new(200.0, 100.0, 50.0, 50.0));
    assert_eq!(editor.drag_mode(), DragMode::None);
}

#[test]
fn test_press_on_control_removes_rubber_band() {
    let mut editor = editor_with(&[Rect::new(100.0, 100.0, 50.0, 50.0)]);
    let id = ids(&editor)[0];

    down(&mut editor, 400.0, 400.0);
    move_to(&mut editor, 300.0, 300.0);
    assert!(editor.rubber_band().is_some());
    editor.take_events();

    down(&mut editor, 120.0, 120.0);
    assert_eq!(editor.rubber_band(), None);
    assert_eq!(editor.drag_mode(), DragMode::Move);
    assert_eq!(editor.selected(), &[id]);
    assert!(editor
        .take_events()
        .iter()
        .any(|e| matches!(e, EditorEvent::RubberBand { rect: None })));

    up(&mut editor, 120.0, 120.0);
    assert_eq!(editor.rubber_band(), None);
    assert_eq!(editor.drag_mode(), DragMode::None);
}
