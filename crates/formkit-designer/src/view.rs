//! Binds a [`FormEditor`] to an event bus for the lifetime of a view.
//!
//! Opening a view installs one listener per input category (pointer,
//! keyboard, clipboard, focus). Closing it, or dropping it, removes every
//! listener it installed so no handler outlives the editor it drives.

use formkit_core::{AppEvent, EventBus, EventCategory, EventFilter, SubscriptionId};
use parking_lot::Mutex;
use std::sync::{Arc, Weak};

use crate::editor::FormEditor;

const INPUT_CATEGORIES: [EventCategory; 4] = [
    EventCategory::Pointer,
    EventCategory::Keyboard,
    EventCategory::Clipboard,
    EventCategory::Focus,
];

pub struct EditorView {
    bus: Arc<EventBus>,
    editor: Arc<Mutex<FormEditor>>,
    subscriptions: Vec<SubscriptionId>,
}

impl EditorView {
    pub fn open(bus: Arc<EventBus>, editor: FormEditor) -> Self {
        let editor = Arc::new(Mutex::new(editor));
        let subscriptions = INPUT_CATEGORIES
            .iter()
            .map(|&category| {
                let editor = Arc::clone(&editor);
                let weak_bus = Arc::downgrade(&bus);
                bus.subscribe(EventFilter::Categories(vec![category]), move |event| {
                    if let AppEvent::Input(input) = event {
                        let events = {
                            let mut editor = editor.lock();
                            editor.handle_input(&input);
                            editor.take_events()
                        };
                        publish_all(&weak_bus, events);
                    }
                })
            })
            .collect();

        let view = Self {
            bus,
            editor,
            subscriptions,
        };
        view.flush();
        tracing::debug!("Editor view opened");
        view
    }

    pub fn is_open(&self) -> bool {
        !self.subscriptions.is_empty()
    }

    /// Runs `f` against the editor, then publishes whatever it produced.
    pub fn edit<R>(&self, f: impl FnOnce(&mut FormEditor) -> R) -> R {
        let (result, events) = {
            let mut editor = self.editor.lock();
            let result = f(&mut editor);
            (result, editor.take_events())
        };
        publish_all(&Arc::downgrade(&self.bus), events);
        result
    }

    pub fn editor(&self) -> Arc<Mutex<FormEditor>> {
        Arc::clone(&self.editor)
    }

    /// Removes every listener this view installed. Safe to call twice.
    pub fn close(&mut self) {
        if self.subscriptions.is_empty() {
            return;
        }
        self.editor.lock().cancel_gesture();
        self.flush();
        for id in self.subscriptions.drain(..) {
            if !self.bus.unsubscribe(id) {
                tracing::warn!("Subscription {} was already gone", id);
            }
        }
        tracing::debug!("Editor view closed");
    }

    fn flush(&self) {
        let events = self.editor.lock().take_events();
        publish_all(&Arc::downgrade(&self.bus), events);
    }
}

impl Drop for EditorView {
    fn drop(&mut self) {
        self.close();
    }
}

fn publish_all(bus: &Weak<EventBus>, events: Vec<formkit_core::EditorEvent>) {
    let Some(bus) = bus.upgrade() else {
        return;
    };
    for event in events {
        bus.publish(AppEvent::Editor(event));
    }
}
