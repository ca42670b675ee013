use crate::support::*;
use formkit_core::{EditorEvent, LayoutError, MessageLevel, Rect};
use formkit_designer::{ControlType, FormDocument, FormEditor, TabletProfile};
use formkit_settings::EditorConfig;

fn empty_editor() -> FormEditor {
    FormEditor::new(FormDocument::new(), EditorConfig::default())
}

fn names(editor: &FormEditor) -> Vec<String> {
    editor
        .document()
        .sections
        .iter()
        .map(|s| s.name.clone())
        .collect()
}

#[test]
fn test_add_section_activates_it() {
    let mut editor = empty_editor();
    assert_eq!(editor.active_section(), None);

    assert_eq!(editor.add_section(), 0);
    assert_eq!(editor.add_section(), 1);
    assert_eq!(editor.active_section(), Some(1));
    assert_eq!(names(&editor), vec!["New Section", "New Section 1"]);
}

#[test]
fn test_switching_sections_rebuilds_page() {
    let mut editor = empty_editor();
    editor.add_section();
    editor.add_control(ControlType::Label).unwrap();
    editor.add_section();
    assert!(editor.adapters().is_empty());

    editor.take_events();
    editor.set_active_section(0).unwrap();
    assert_eq!(editor.adapters().len(), 1);
    assert!(editor.selected().is_empty());
    assert!(editor
        .take_events()
        .iter()
        .any(|e| matches!(e, EditorEvent::ControlPlaced { .. })));
}

#[test]
fn test_remove_section_out_of_range_warns() {
    let mut editor = empty_editor();
    editor.add_section();
    editor.take_events();

    let err = editor.remove_section(4).unwrap_err();
    assert_eq!(err, LayoutError::SectionOutOfRange { index: 4, count: 1 });
    let events = editor.take_events();
    assert!(matches!(
        events.as_slice(),
        [EditorEvent::Message { level: MessageLevel::Warning, .. }]
    ));
    assert_eq!(editor.document().sections.len(), 1);
}

#[test]
fn test_remove_active_section_moves_to_neighbour() {
    let mut editor = empty_editor();
    editor.add_section();
    editor.add_section();
    editor.add_section();
    editor.set_active_section(2).unwrap();

    editor.remove_section(2).unwrap();
    assert_eq!(editor.active_section(), Some(1));

    editor.remove_section(0).unwrap();
    assert_eq!(editor.active_section(), Some(0));
    assert_eq!(names(&editor), vec!["New Section 1"]);
}

#[test]
fn test_rename_section() {
    let mut editor = empty_editor();
    editor.add_section();
    editor.rename_section(0, "Autonomous").unwrap();
    assert_eq!(names(&editor), vec!["Autonomous"]);

    assert!(editor.rename_section(1, "Teleop").is_err());
}

#[test]
fn test_move_sections_at_ends_is_rejected() {
    let mut editor = empty_editor();
    editor.add_section();
    editor.add_section();
    editor.rename_section(0, "A").unwrap();
    editor.rename_section(1, "B").unwrap();

    assert!(matches!(
        editor.move_section_left(0),
        Err(LayoutError::CannotMoveSection { .. })
    ));
    assert!(matches!(
        editor.move_section_right(1),
        Err(LayoutError::CannotMoveSection { .. })
    ));

    editor.set_active_section(0).unwrap();
    editor.move_section_right(0).unwrap();
    assert_eq!(names(&editor), vec!["B", "A"]);
    assert_eq!(editor.active_section(), Some(1));
}

#[test]
fn test_same_background_image_is_noop() {
    let mut editor = empty_editor();
    editor.add_section();
    editor.set_background_image(0, "field.png").unwrap();
    let logged = editor.undo_log().len();
    editor.take_events();

    editor.set_background_image(0, "field.png").unwrap();
    assert_eq!(editor.undo_log().len(), logged);
    assert!(editor.take_events().is_empty());
    assert_eq!(editor.document().sections[0].background_image_ref, "field.png");
}

#[test]
fn test_add_control_gets_fresh_tag_and_selection() {
    let mut editor = empty_editor();
    assert_eq!(
        editor.add_control(ControlType::Text),
        Err(LayoutError::NoActiveSection)
    );

    editor.add_section();
    let first = editor.add_control(ControlType::Text).unwrap();
    let second = editor.add_control(ControlType::Updown).unwrap();
    assert_eq!(editor.selected(), &[second]);
    assert_eq!(editor.record(first).unwrap().tag, "tag_1");
    assert_eq!(editor.record(second).unwrap().tag, "tag_2");
    assert_eq!(
        editor.record(second).unwrap().control_type(),
        ControlType::Updown
    );
}

#[test]
fn test_edit_control_keeps_geometry() {
    let mut editor = editor_with(&[Rect::new(10.0, 10.0, 100.0, 40.0)]);
    let id = ids(&editor)[0];

    let mut edited = editor.record(id).unwrap().clone();
    edited.tag = "team_number".into();
    edited.x = 500.0;
    edited.width = 1.0;
    editor.edit_control(id, edited).unwrap();

    let record = editor.record(id).unwrap().clone();
    assert_eq!(record.tag, "team_number");
    assert_eq!(record.bounds(), Rect::new(10.0, 10.0, 100.0, 40.0));

    assert!(matches!(
        editor.edit_control(999, record),
        Err(LayoutError::UnknownControl { id: 999 })
    ));
}

#[test]
fn test_tablet_bounds_the_canvas() {
    let mut editor = editor_with(&[Rect::new(10.0, 10.0, 100.0, 40.0)]);
    let id = ids(&editor)[0];
    editor.set_tablet(TabletProfile::new("Small", 300.0, 200.0));

    drag(&mut editor, (50.0, 30.0), (250.0, 30.0));
    assert_eq!(bounds(&editor, id), Rect::new(10.0, 10.0, 100.0, 40.0));

    drag(&mut editor, (50.0, 30.0), (230.0, 30.0));
    assert_eq!(bounds(&editor, id), Rect::new(190.0, 10.0, 100.0, 40.0));
}

#[test]
fn test_blank_editor_uses_configured_client_size() {
    let config = EditorConfig {
        client_width: 800.0,
        client_height: 600.0,
        ..EditorConfig::default()
    };
    let editor = FormEditor::blank(config);
    assert_eq!(
        editor.document().tablet,
        TabletProfile::new("Default", 800.0, 600.0)
    );
    assert_eq!(names(&editor), vec!["New Section"]);
    assert_eq!(editor.active_section(), Some(0));
}

#[test]
fn test_unsized_tablet_falls_back_to_client_size() {
    let mut doc = FormDocument::with_tablet(TabletProfile::new("Unsized", 0.0, 0.0));
    let section = doc.create_section();
    doc.sections[section].items.push(formkit_designer::ControlRecord::new(
        ControlType::Label,
        "tag_1",
        Rect::new(10.0, 10.0, 100.0, 40.0),
    ));
    let config = EditorConfig {
        client_width: 300.0,
        client_height: 200.0,
        ..EditorConfig::default()
    };
    let mut editor = FormEditor::new(doc, config);
    let id = ids(&editor)[0];

    drag(&mut editor, (50.0, 30.0), (250.0, 30.0));
    assert_eq!(bounds(&editor, id), Rect::new(10.0, 10.0, 100.0, 40.0));

    drag(&mut editor, (50.0, 30.0), (230.0, 30.0));
    assert_eq!(bounds(&editor, id), Rect::new(190.0, 10.0, 100.0, 40.0));
}

#[test]
fn test_locked_layout_allows_selection_only() {
    let mut editor = editor_with(&[Rect::new(10.0, 10.0, 100.0, 40.0)]);
    let id = ids(&editor)[0];
    editor.set_layout_locked(true);
    assert!(editor.is_layout_locked());

    drag(&mut editor, (50.0, 30.0), (150.0, 30.0));
    assert_eq!(editor.selected(), &[id]);
    assert_eq!(bounds(&editor, id), Rect::new(10.0, 10.0, 100.0, 40.0));

    editor.take_events();
    assert_eq!(editor.nudge(1.0, 0.0), Err(LayoutError::Locked));
    assert_eq!(editor.delete_selected(), Err(LayoutError::Locked));
    assert!(editor.cut().is_err());
    assert!(editor.paste().is_err());
    assert_eq!(warnings(&editor.take_events()), 4);
    assert_eq!(editor.adapters().len(), 1);

    editor.set_layout_locked(false);
    editor.nudge(1.0, 0.0).unwrap();
    assert_eq!(bounds(&editor, id).x, 11.0);
}
