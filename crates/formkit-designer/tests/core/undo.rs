use crate::support::*;
use formkit_core::Rect;
use formkit_designer::{
    ControlType, FormDocument, FormEditor, TabletProfile, UndoOperation, UndoPayload, UndoTarget,
};
use formkit_settings::EditorConfig;

fn kinds(editor: &FormEditor) -> Vec<(UndoOperation, UndoTarget)> {
    editor
        .undo_log()
        .entries()
        .map(|e| (e.operation, e.target))
        .collect()
}

#[test]
fn test_every_structural_edit_is_logged() {
    let mut editor = FormEditor::new(FormDocument::new(), EditorConfig::default());
    editor.add_section();
    editor.add_section();
    editor.rename_section(1, "Endgame").unwrap();
    editor.move_section_left(1).unwrap();
    editor.set_background_image(0, "bg.png").unwrap();
    let id = editor.add_control(ControlType::Boolean).unwrap();
    let mut record = editor.record(id).unwrap().clone();
    record.tag = "climbed".into();
    editor.edit_control(id, record).unwrap();
    editor.delete_selected().unwrap();
    editor.set_tablet(TabletProfile::new("Big", 1280.0, 800.0));
    editor.set_layout_locked(true);
    editor.remove_section(1).unwrap();

    assert_eq!(
        kinds(&editor),
        vec![
            (UndoOperation::Add, UndoTarget::Section),
            (UndoOperation::Add, UndoTarget::Section),
            (UndoOperation::Rename, UndoTarget::Section),
            (UndoOperation::Move, UndoTarget::Section),
            (UndoOperation::Edit, UndoTarget::Image),
            (UndoOperation::Add, UndoTarget::Control),
            (UndoOperation::Edit, UndoTarget::Control),
            (UndoOperation::Delete, UndoTarget::Control),
            (UndoOperation::Edit, UndoTarget::Tablet),
            (UndoOperation::Lock, UndoTarget::Tablet),
            (UndoOperation::Delete, UndoTarget::Section),
        ]
    );
}

#[test]
fn test_control_delete_records_section_and_positions() {
    let mut editor = editor_with(&[
        Rect::new(10.0, 10.0, 50.0, 50.0),
        Rect::new(100.0, 10.0, 50.0, 50.0),
        Rect::new(200.0, 10.0, 50.0, 50.0),
    ]);
    let all = ids(&editor);
    let originals: Vec<_> = editor.document().sections[0].items.clone();
    editor.select(all[2]);
    editor.select(all[0]);
    editor.delete_selected().unwrap();

    match &editor.undo_log().last().unwrap().payload {
        UndoPayload::ControlsRemoved { section, removed } => {
            assert_eq!(*section, 0);
            assert_eq!(
                removed,
                &vec![(0, originals[0].clone()), (2, originals[2].clone())]
            );
        }
        other => panic!("unexpected payload {:?}", other),
    }
}

#[test]
fn test_section_delete_stores_section_and_index() {
    let mut editor = editor_with(&[Rect::new(10.0, 10.0, 50.0, 50.0)]);
    let section = editor.document().sections[0].clone();
    editor.remove_section(0).unwrap();

    assert_eq!(
        editor.undo_log().last().unwrap().payload,
        UndoPayload::SectionRemoved { index: 0, section }
    );
}

#[test]
fn test_paste_logs_one_add_entry() {
    let mut editor = editor_with(&[
        Rect::new(10.0, 10.0, 50.0, 50.0),
        Rect::new(100.0, 10.0, 50.0, 50.0),
    ]);
    editor.select_all();
    editor.copy().unwrap();
    editor.paste().unwrap();

    assert_eq!(editor.undo_log().len(), 1);
    match &editor.undo_log().last().unwrap().payload {
        UndoPayload::ControlsAdded {
            first_index,
            records,
            ..
        } => {
            assert_eq!(*first_index, 2);
            assert_eq!(records.len(), 2);
        }
        other => panic!("unexpected payload {:?}", other),
    }
}

#[test]
fn test_gestures_and_selection_are_not_logged() {
    let mut editor = editor_with(&[Rect::new(10.0, 10.0, 50.0, 50.0)]);
    drag(&mut editor, (30.0, 30.0), (60.0, 60.0));
    editor.select_all();
    editor.nudge(1.0, 1.0).unwrap();
    assert!(editor.undo_log().is_empty());
}

#[test]
fn test_log_is_bounded_by_config() {
    let config = EditorConfig {
        max_undo_depth: 3,
        ..Default::default()
    };
    let mut editor = FormEditor::new(FormDocument::new(), config);
    for _ in 0..5 {
        editor.add_section();
    }
    assert_eq!(editor.undo_log().len(), 3);
    assert_eq!(
        editor.undo_log().entries().next().unwrap().payload,
        UndoPayload::SectionAdded { index: 2 }
    );
}
