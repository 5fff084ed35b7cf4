//! An in-process host.
//!
//! [`MemoryHost`] implements every capability trait over plain data: an event
//! bus with synchronous dispatch, a decoration table keyed by editor and
//! style, live-style accounting and an in-memory settings map. Tests drive an
//! overlay through it and then inspect what was drawn.

mod bus;
mod document;

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

pub use bus::EventBus;
pub use document::{MemoryDocument, MemoryEditor};
use heatline_primitives::{LineRange, StyleSpec};
use parking_lot::Mutex;

use crate::{
	ConfigValue, ConfigurationStore, DecorationStyleRegistry, EditorEvent, EditorEventSource, EditorHandle, EditorId, EditorRenderer,
	EventHandler, EventKind, HostError, Result, StyleId, Subscription, Workbench,
};

#[derive(Default)]
struct StyleTable {
	live: BTreeMap<StyleId, StyleSpec>,
	created_total: usize,
	disposed_total: usize,
	/// Largest number of styles ever live at once.
	peak_live: usize,
	/// Remaining successful allocations before `create` starts failing.
	allocation_budget: Option<usize>,
}

/// In-memory implementation of all host capabilities.
#[derive(Default)]
pub struct MemoryHost {
	bus: EventBus,
	active: Mutex<Option<EditorHandle>>,
	styles: Mutex<StyleTable>,
	decorations: Mutex<HashMap<(EditorId, StyleId), Vec<LineRange>>>,
	settings: Mutex<HashMap<(String, String), ConfigValue>>,
	next_editor: AtomicU64,
	next_style: AtomicU64,
	set_decorations_calls: AtomicUsize,
}

impl MemoryHost {
	pub fn new() -> Self {
		Self::default()
	}

	/// Opens an editor on `document` without focusing it.
	pub fn open(&self, document: MemoryDocument) -> EditorHandle {
		let id = EditorId(self.next_editor.fetch_add(1, Ordering::Relaxed));
		Arc::new(MemoryEditor {
			id,
			document: Arc::new(document),
		})
	}

	/// Moves focus to `editor` (or away from all editors) and emits
	/// [`EditorEvent::ActiveEditorChanged`].
	pub fn focus(&self, editor: Option<EditorHandle>) {
		*self.active.lock() = editor.clone();
		self.bus.emit(&EditorEvent::ActiveEditorChanged(editor));
	}

	/// Changes focus without notifying subscribers.
	pub fn set_active_silently(&self, editor: Option<EditorHandle>) {
		*self.active.lock() = editor;
	}

	/// Emits [`EditorEvent::SelectionChanged`] for `editor`.
	pub fn select(&self, editor: &EditorHandle) {
		self.bus.emit(&EditorEvent::SelectionChanged(editor.clone()));
	}

	/// Delivers an arbitrary event. Returns the number of handlers invoked.
	pub fn emit(&self, event: &EditorEvent) -> usize {
		self.bus.emit(event)
	}

	/// Number of live subscriptions for `kind`.
	pub fn subscriber_count(&self, kind: EventKind) -> usize {
		self.bus.subscriber_count(kind)
	}

	/// Stores a setting.
	pub fn set_config(&self, namespace: &str, key: &str, value: impl Into<ConfigValue>) {
		self.settings.lock().insert((namespace.to_string(), key.to_string()), value.into());
	}

	/// Removes a setting.
	pub fn unset_config(&self, namespace: &str, key: &str) {
		self.settings.lock().remove(&(namespace.to_string(), key.to_string()));
	}

	/// Lets the next `remaining` allocations succeed and fails every one after.
	/// `None` lifts the limit.
	pub fn limit_style_allocations(&self, remaining: Option<usize>) {
		self.styles.lock().allocation_budget = remaining;
	}

	/// Number of styles allocated and not yet disposed.
	pub fn live_style_count(&self) -> usize {
		self.styles.lock().live.len()
	}

	/// Live styles in allocation order.
	pub fn live_styles(&self) -> Vec<(StyleId, StyleSpec)> {
		self.styles.lock().live.iter().map(|(id, spec)| (*id, *spec)).collect()
	}

	/// Total successful allocations since creation.
	pub fn created_total(&self) -> usize {
		self.styles.lock().created_total
	}

	/// Total disposals since creation.
	pub fn disposed_total(&self) -> usize {
		self.styles.lock().disposed_total
	}

	/// Largest number of styles that were live at the same time.
	pub fn peak_live_styles(&self) -> usize {
		self.styles.lock().peak_live
	}

	/// Total [`EditorRenderer::set_decorations`] calls since creation.
	pub fn set_decorations_calls(&self) -> usize {
		self.set_decorations_calls.load(Ordering::SeqCst)
	}

	/// Ranges currently decorated with `style` on `editor`.
	pub fn decorations(&self, editor: EditorId, style: StyleId) -> Vec<LineRange> {
		self.decorations.lock().get(&(editor, style)).cloned().unwrap_or_default()
	}

	/// Every non-empty decoration set on `editor`, by style.
	pub fn decorations_for(&self, editor: EditorId) -> BTreeMap<StyleId, Vec<LineRange>> {
		self.decorations
			.lock()
			.iter()
			.filter(|((e, _), ranges)| *e == editor && !ranges.is_empty())
			.map(|((_, style), ranges)| (*style, ranges.clone()))
			.collect()
	}

	/// Returns true if nothing is drawn on `editor`.
	pub fn is_clear(&self, editor: EditorId) -> bool {
		self.decorations_for(editor).is_empty()
	}
}

impl EditorEventSource for MemoryHost {
	fn subscribe(&self, kind: EventKind, handler: EventHandler) -> Subscription {
		self.bus.subscribe(kind, handler)
	}
}

impl Workbench for MemoryHost {
	fn active_editor(&self) -> Option<EditorHandle> {
		self.active.lock().clone()
	}
}

impl DecorationStyleRegistry for MemoryHost {
	fn create(&self, spec: &StyleSpec) -> Result<StyleId> {
		let mut styles = self.styles.lock();
		if let Some(budget) = styles.allocation_budget.as_mut() {
			if *budget == 0 {
				return Err(HostError::StyleAllocation("allocation limit reached".into()));
			}
			*budget -= 1;
		}
		let id = StyleId(self.next_style.fetch_add(1, Ordering::Relaxed));
		styles.live.insert(id, *spec);
		styles.created_total += 1;
		styles.peak_live = styles.peak_live.max(styles.live.len());
		tracing::trace!(%id, background = %spec.background, "style.create");
		Ok(id)
	}

	fn dispose(&self, style: StyleId) {
		let removed = {
			let mut styles = self.styles.lock();
			let removed = styles.live.remove(&style).is_some();
			if removed {
				styles.disposed_total += 1;
			}
			removed
		};
		if removed {
			self.decorations.lock().retain(|(_, s), _| *s != style);
			tracing::trace!(id = %style, "style.dispose");
		} else {
			tracing::warn!(id = %style, "dispose of unknown style");
		}
	}
}

impl EditorRenderer for MemoryHost {
	fn set_decorations(&self, editor: EditorId, style: StyleId, ranges: &[LineRange]) {
		self.set_decorations_calls.fetch_add(1, Ordering::SeqCst);
		if !self.styles.lock().live.contains_key(&style) {
			tracing::warn!(%editor, %style, "set_decorations with released style");
			return;
		}
		self.decorations.lock().insert((editor, style), ranges.to_vec());
	}
}

impl ConfigurationStore for MemoryHost {
	fn get(&self, namespace: &str, key: &str) -> Option<ConfigValue> {
		self.settings.lock().get(&(namespace.to_string(), key.to_string())).cloned()
	}
}

#[cfg(test)]
mod tests;
