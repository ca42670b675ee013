//! # Event Bus Module
//!
//! Provides the event bus that connects an editor view to its host.
//!
//! ## Overview
//!
//! The bus is an ordinary value owned by whoever opens an editor view; there
//! is no process-wide instance. The host publishes raw input as
//! [`AppEvent::Input`], the editor view reacts and publishes
//! [`AppEvent::Editor`] notifications that the persistence, rendering and
//! status collaborators subscribe to.
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use formkit_core::event_bus::{AppEvent, EditorEvent, EventBus, EventCategory, EventFilter};
//!
//! let bus = Arc::new(EventBus::new());
//!
//! let subscription = bus.subscribe(
//!     EventFilter::Categories(vec![EventCategory::Editor]),
//!     |event| {
//!         if let AppEvent::Editor(EditorEvent::FormChanged { document }) = event {
//!             println!("persisting {} bytes", document.len());
//!         }
//!     },
//! );
//!
//! bus.unsubscribe(subscription);
//! ```

mod bus;
mod events;

pub use bus::*;
pub use events::*;
