use std::fmt;
use std::sync::Arc;

use crate::EditorHandle;

/// Kinds of editor events a component can subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
	/// The focused editor changed.
	ActiveEditorChanged,
	/// The selection changed within an editor.
	SelectionChanged,
}

/// An event delivered by the host.
#[derive(Clone)]
pub enum EditorEvent {
	/// Focus moved to another editor, or away from all editors.
	ActiveEditorChanged(Option<EditorHandle>),
	/// The selection changed within this editor.
	SelectionChanged(EditorHandle),
}

impl EditorEvent {
	/// Returns the kind of this event.
	pub fn kind(&self) -> EventKind {
		match self {
			EditorEvent::ActiveEditorChanged(_) => EventKind::ActiveEditorChanged,
			EditorEvent::SelectionChanged(_) => EventKind::SelectionChanged,
		}
	}

	/// Returns the editor the event refers to.
	pub fn editor(&self) -> Option<&EditorHandle> {
		match self {
			EditorEvent::ActiveEditorChanged(editor) => editor.as_ref(),
			EditorEvent::SelectionChanged(editor) => Some(editor),
		}
	}
}

impl fmt::Debug for EditorEvent {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("EditorEvent")
			.field("kind", &self.kind())
			.field("editor", &self.editor().map(|e| e.id()))
			.finish()
	}
}

/// Callback invoked for each delivered event.
pub type EventHandler = Arc<dyn Fn(&EditorEvent) + Send + Sync>;

/// Source of editor events.
///
/// Handlers run on the host's dispatch path, one at a time and in delivery
/// order. Each must run to completion before the next event is delivered.
pub trait EditorEventSource: Send + Sync {
	/// Registers `handler` for events of `kind`.
	///
	/// The handler stays registered until the returned [`Subscription`] is
	/// cancelled or dropped.
	fn subscribe(&self, kind: EventKind, handler: EventHandler) -> Subscription;
}

/// RAII handle for an event registration.
///
/// Dropping the handle unsubscribes, so a component that keeps its
/// subscriptions in one list releases all of them on every exit path.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
	cancel: Option<Box<dyn FnOnce() + Send>>,
}

impl Subscription {
	/// Creates a subscription that runs `cancel` exactly once when released.
	pub fn new(cancel: impl FnOnce() + Send + 'static) -> Self {
		Self {
			cancel: Some(Box::new(cancel)),
		}
	}

	/// Unsubscribes now.
	pub fn cancel(mut self) {
		self.release();
	}

	/// Returns true if the subscription is still registered.
	pub fn is_active(&self) -> bool {
		self.cancel.is_some()
	}

	fn release(&mut self) {
		if let Some(cancel) = self.cancel.take() {
			cancel();
		}
	}
}

impl Drop for Subscription {
	fn drop(&mut self) {
		self.release();
	}
}

impl fmt::Debug for Subscription {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Subscription").field("active", &self.is_active()).finish()
	}
}
