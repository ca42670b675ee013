//! # FormKit Core
//!
//! Core types, traits, and utilities for the FormKit layout editor.
//! Provides the geometry kernel, the error taxonomy shared by every crate,
//! and the injectable event bus that connects the editor to its host.

pub mod constants;
pub mod error;
pub mod event_bus;
pub mod geometry;

pub use error::{ClipboardError, Error, GeometryError, LayoutError, Result};

pub use geometry::{Point, Rect};

pub use event_bus::{
    AppEvent, Button, EditorEvent, EventBus, EventBusConfig, EventCategory, EventFilter,
    InputEvent, Key, MessageLevel, Modifiers, SubscriptionId, VisualState,
};
