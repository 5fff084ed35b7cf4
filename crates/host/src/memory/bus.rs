use std::sync::{Arc, Weak};

use parking_lot::{Mutex, ReentrantMutex};
use slab::Slab;

use crate::{EditorEvent, EventHandler, EventKind, Subscription};

type HandlerTable = Mutex<Slab<(EventKind, EventHandler)>>;

/// Synchronous event dispatcher.
///
/// Emission is serialized across threads: handlers for one event all run
/// before any handler sees the next. A handler may emit again from its own
/// thread; the nested event is delivered before the outer emission returns.
#[derive(Default)]
pub struct EventBus {
	handlers: Arc<HandlerTable>,
	dispatch: ReentrantMutex<()>,
}

impl EventBus {
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers a handler; see [`crate::EditorEventSource::subscribe`].
	pub fn subscribe(&self, kind: EventKind, handler: EventHandler) -> Subscription {
		let key = self.handlers.lock().insert((kind, handler));
		let table: Weak<HandlerTable> = Arc::downgrade(&self.handlers);
		tracing::trace!(?kind, key, "event.subscribe");
		Subscription::new(move || {
			if let Some(table) = table.upgrade() {
				let mut table = table.lock();
				if table.contains(key) {
					table.remove(key);
					tracing::trace!(?kind, key, "event.unsubscribe");
				}
			}
		})
	}

	/// Delivers `event` to every handler registered for its kind.
	///
	/// Returns the number of handlers invoked.
	pub fn emit(&self, event: &EditorEvent) -> usize {
		let _serial = self.dispatch.lock();
		let kind = event.kind();
		let targets: Vec<EventHandler> = self
			.handlers
			.lock()
			.iter()
			.filter(|(_, (k, _))| *k == kind)
			.map(|(_, (_, handler))| handler.clone())
			.collect();

		tracing::trace!(?kind, handlers = targets.len(), "event.emit");
		for handler in &targets {
			handler(event);
		}
		targets.len()
	}

	/// Number of live registrations for `kind`.
	pub fn subscriber_count(&self, kind: EventKind) -> usize {
		self.handlers.lock().iter().filter(|(_, (k, _))| *k == kind).count()
	}
}
