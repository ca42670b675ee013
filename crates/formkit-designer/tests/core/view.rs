use formkit_core::{
    AppEvent, Button, EditorEvent, EventBus, EventCategory, EventFilter, InputEvent, Modifiers,
    Point, Rect,
};
use formkit_designer::{ControlRecord, ControlType, EditorView, FormDocument, FormEditor};
use formkit_settings::EditorConfig;
use parking_lot::Mutex;
use std::sync::Arc;

fn editor() -> FormEditor {
    let mut doc = FormDocument::new();
    let section = doc.create_section();
    doc.sections[section].items.push(ControlRecord::new(
        ControlType::Label,
        "tag_1",
        Rect::new(10.0, 10.0, 100.0, 40.0),
    ));
    FormEditor::new(doc, EditorConfig::default())
}

fn record_editor_events(bus: &EventBus) -> Arc<Mutex<Vec<EditorEvent>>> {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    bus.subscribe(
        EventFilter::Categories(vec![EventCategory::Editor]),
        move |event| {
            if let AppEvent::Editor(e) = event {
                sink.lock().push(e);
            }
        },
    );
    seen
}

fn pointer(kind: &str, x: f64, y: f64) -> AppEvent {
    let position = Point::new(x, y);
    let modifiers = Modifiers::default();
    AppEvent::Input(match kind {
        "down" => InputEvent::PointerDown {
            position,
            button: Button::Primary,
            modifiers,
        },
        "move" => InputEvent::PointerMove {
            position,
            modifiers,
        },
        _ => InputEvent::PointerUp {
            position,
            button: Button::Primary,
            modifiers,
        },
    })
}

#[test]
fn test_open_installs_four_listeners_and_close_removes_them() {
    let bus = Arc::new(EventBus::new());
    let mut view = EditorView::open(bus.clone(), editor());
    assert!(view.is_open());
    assert_eq!(bus.subscriber_count(), 4);

    view.close();
    assert!(!view.is_open());
    assert_eq!(bus.subscriber_count(), 0);

    view.close();
    assert_eq!(bus.subscriber_count(), 0);
}

#[test]
fn test_drop_deregisters_listeners() {
    let bus = Arc::new(EventBus::new());
    {
        let _view = EditorView::open(bus.clone(), editor());
        assert_eq!(bus.subscriber_count(), 4);
    }
    assert_eq!(bus.subscriber_count(), 0);
}

#[test]
fn test_gesture_over_bus_publishes_form_change() {
    let bus = Arc::new(EventBus::new());
    let seen = record_editor_events(&bus);
    let view = EditorView::open(bus.clone(), editor());

    bus.publish(pointer("down", 15.0, 15.0));
    bus.publish(pointer("move", 115.0, 115.0));
    bus.publish(pointer("up", 115.0, 115.0));

    let events = seen.lock().clone();
    let document = events
        .iter()
        .rev()
        .find_map(|e| match e {
            EditorEvent::FormChanged { document } => Some(document.clone()),
            _ => None,
        })
        .expect("form change published");
    let doc = FormDocument::from_json(&document).unwrap();
    assert_eq!(doc.sections[0].items[0].bounds(), Rect::new(110.0, 110.0, 100.0, 40.0));

    let record = view.edit(|e| {
        let id = e.adapters()[0].id();
        e.record(id).cloned()
    });
    assert_eq!(record.unwrap().x, 110.0);
}

#[test]
fn test_closed_view_ignores_input() {
    let bus = Arc::new(EventBus::new());
    let mut view = EditorView::open(bus.clone(), editor());
    let shared = view.editor();
    view.close();

    bus.publish(pointer("down", 15.0, 15.0));
    assert!(shared.lock().selected().is_empty());
}

#[test]
fn test_edit_publishes_api_changes() {
    let bus = Arc::new(EventBus::new());
    let seen = record_editor_events(&bus);
    let view = EditorView::open(bus.clone(), editor());
    seen.lock().clear();

    view.edit(|e| e.add_section());
    assert!(seen
        .lock()
        .iter()
        .any(|e| matches!(e, EditorEvent::FormChanged { .. })));
}
