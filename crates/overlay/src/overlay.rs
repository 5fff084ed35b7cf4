//! The overlay component and its lifecycle.
//!
//! # Lifecycle
//!
//! [`HeatMapOverlay::new`] activates (allocates one style per level) and
//! subscribes to focus and selection events. [`HeatMapOverlay::dispose`], or
//! dropping the overlay, cancels both subscriptions and releases every style.
//! After disposal every operation is a no-op.
//!
//! # Event policy
//!
//! Focus and selection events redraw only while the overlay is enabled, so a
//! disabled overlay never repaints an editor behind the user's back. Direct
//! [`HeatMapOverlay::draw`] calls do not consult the enabled flag.

use std::fmt;
use std::sync::{Arc, Weak};

use heatline_config::HeatMapSettings;
use heatline_host::{DocumentSelector, EditorEvent, EditorHandle, EventHandler, EventKind, HostCapabilities, LineRange, Subscription};
use parking_lot::Mutex;

use crate::error::Result;
use crate::levels::{Degenerate, assign_levels};
use crate::source::{LineValueSource, RandomLineValues};
use crate::styles::StyleSet;

/// Construction parameters for [`HeatMapOverlay`].
pub struct OverlayOptions {
	/// Whether the overlay starts enabled.
	pub enabled: bool,
	/// Documents the overlay applies to.
	pub selector: DocumentSelector,
	/// Per-line value source.
	pub source: Box<dyn LineValueSource>,
}

impl OverlayOptions {
	/// Options with a match-all selector and random line values.
	pub fn new(enabled: bool) -> Self {
		Self {
			enabled,
			selector: DocumentSelector::any(),
			source: Box::new(RandomLineValues::default()),
		}
	}

	/// Restricts the overlay to documents passing `selector`.
	pub fn with_selector(mut self, selector: DocumentSelector) -> Self {
		self.selector = selector;
		self
	}

	/// Replaces the random default with `source`.
	pub fn with_source(mut self, source: impl LineValueSource + 'static) -> Self {
		self.source = Box::new(source);
		self
	}
}

impl fmt::Debug for OverlayOptions {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("OverlayOptions")
			.field("enabled", &self.enabled)
			.field("selector", &self.selector)
			.finish_non_exhaustive()
	}
}

/// Why a draw pass left decorations untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
	/// The overlay has been disposed.
	Disposed,
	/// No editor was given (nothing focused).
	NoEditor,
	/// The document did not pass the selector.
	SelectorMismatch,
	/// No styles are held, after a failed activation.
	NoStyles,
	/// The value source returned the wrong number of values.
	ValueCountMismatch { lines: usize, values: usize },
	/// The values carry no gradient.
	Degenerate(Degenerate),
}

/// Result of one draw pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawOutcome {
	/// Every level's decorations were replaced.
	Drawn { lines: usize, levels: usize },
	/// Nothing was touched.
	Skipped(SkipReason),
}

/// Colors every line of the active document by its value.
///
/// One instance exists per editor session, owned by whatever manages the
/// host's extension lifecycle.
pub struct HeatMapOverlay {
	core: Arc<Mutex<OverlayCore>>,
	subscriptions: Vec<Subscription>,
}

impl HeatMapOverlay {
	/// Activates against the host's current configuration and subscribes to
	/// editor events. No draw happens until an event or an explicit call.
	///
	/// # Errors
	///
	/// Returns [`OverlayError::StyleAllocation`] if the host cannot allocate
	/// the styles; nothing stays allocated or subscribed in that case.
	///
	/// [`OverlayError::StyleAllocation`]: crate::OverlayError::StyleAllocation
	pub fn new(host: HostCapabilities, options: OverlayOptions) -> Result<Self> {
		let mut core = OverlayCore {
			host,
			enabled: options.enabled,
			styles: StyleSet::empty(),
			selector: options.selector,
			source: options.source,
			disposed: false,
		};
		core.activate()?;

		let events = core.host.events.clone();
		let core = Arc::new(Mutex::new(core));
		let subscriptions = [EventKind::ActiveEditorChanged, EventKind::SelectionChanged]
			.into_iter()
			.map(|kind| events.subscribe(kind, event_handler(Arc::downgrade(&core))))
			.collect();

		tracing::debug!(enabled = options.enabled, "heatmap.init");
		Ok(Self { core, subscriptions })
	}

	/// Flips the enabled flag.
	///
	/// Enabling draws the focused editor. Disabling clears the focused editor
	/// only; other editors keep whatever they last showed.
	pub fn toggle(&self) {
		self.core.lock().toggle();
	}

	/// Runs one draw pass on `editor`.
	pub fn draw(&self, editor: Option<&EditorHandle>) -> DrawOutcome {
		self.core.lock().draw(editor)
	}

	/// Clears every level on the focused editor. Does not change the enabled flag.
	pub fn clear_heat_map(&self) {
		self.core.lock().clear_active();
	}

	/// Releases the current styles and rebuilds them from configuration.
	///
	/// Call after the level count or colour setting changed. Released styles
	/// take their decorations with them; the next draw repaints.
	///
	/// # Errors
	///
	/// On [`OverlayError::StyleAllocation`] the overlay holds no styles and
	/// draws nothing until a later activation succeeds.
	///
	/// [`OverlayError::StyleAllocation`]: crate::OverlayError::StyleAllocation
	pub fn activate(&self) -> Result<()> {
		self.core.lock().activate()
	}

	/// Cancels event subscriptions and releases every style. Idempotent.
	pub fn dispose(&mut self) {
		self.subscriptions.clear();
		self.core.lock().dispose();
	}

	/// Whether focus and selection events redraw.
	pub fn is_enabled(&self) -> bool {
		self.core.lock().enabled
	}

	/// Whether [`dispose`](Self::dispose) has run.
	pub fn is_disposed(&self) -> bool {
		self.core.lock().disposed
	}

	/// Number of intensity levels currently held.
	pub fn level_count(&self) -> usize {
		self.core.lock().styles.len()
	}
}

impl Drop for HeatMapOverlay {
	fn drop(&mut self) {
		self.dispose();
	}
}

impl fmt::Debug for HeatMapOverlay {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let core = self.core.lock();
		f.debug_struct("HeatMapOverlay")
			.field("enabled", &core.enabled)
			.field("levels", &core.styles.len())
			.field("disposed", &core.disposed)
			.field("subscriptions", &self.subscriptions.len())
			.finish()
	}
}

fn event_handler(core: Weak<Mutex<OverlayCore>>) -> EventHandler {
	Arc::new(move |event: &EditorEvent| {
		if let Some(core) = core.upgrade() {
			core.lock().on_event(event);
		}
	})
}

struct OverlayCore {
	host: HostCapabilities,
	enabled: bool,
	styles: StyleSet,
	selector: DocumentSelector,
	source: Box<dyn LineValueSource>,
	disposed: bool,
}

impl OverlayCore {
	fn on_event(&mut self, event: &EditorEvent) {
		if self.disposed {
			return;
		}
		if !self.enabled {
			tracing::trace!(kind = ?event.kind(), "heatmap.event.ignored");
			return;
		}
		match event {
			EditorEvent::ActiveEditorChanged(editor) => self.draw(editor.as_ref()),
			EditorEvent::SelectionChanged(editor) => self.draw(Some(editor)),
		};
	}

	fn toggle(&mut self) {
		if self.disposed {
			tracing::debug!("heatmap.toggle after dispose");
			return;
		}
		self.enabled = !self.enabled;
		tracing::debug!(enabled = self.enabled, "heatmap.toggle");
		if self.enabled {
			let editor = self.host.workbench.active_editor();
			self.draw(editor.as_ref());
		} else {
			self.clear_active();
		}
	}

	fn draw(&mut self, editor: Option<&EditorHandle>) -> DrawOutcome {
		let outcome = self.draw_pass(editor);
		match outcome {
			DrawOutcome::Drawn { lines, levels } => {
				tracing::debug!(editor = ?editor.map(|e| e.id()), lines, levels, "heatmap.draw");
			}
			DrawOutcome::Skipped(reason @ (SkipReason::ValueCountMismatch { .. } | SkipReason::Degenerate(Degenerate::NonFinite { .. }))) => {
				tracing::warn!(editor = ?editor.map(|e| e.id()), ?reason, "heatmap.draw skipped: unusable line values");
			}
			DrawOutcome::Skipped(reason) => {
				tracing::trace!(editor = ?editor.map(|e| e.id()), ?reason, "heatmap.draw skipped");
			}
		}
		outcome
	}

	fn draw_pass(&mut self, editor: Option<&EditorHandle>) -> DrawOutcome {
		use DrawOutcome::Skipped;

		if self.disposed {
			return Skipped(SkipReason::Disposed);
		}
		let Some(editor) = editor else {
			return Skipped(SkipReason::NoEditor);
		};
		let document = editor.document();
		if !document.matches_selector(&self.selector) {
			return Skipped(SkipReason::SelectorMismatch);
		}
		let Some(levels) = self.styles.level_count() else {
			return Skipped(SkipReason::NoStyles);
		};

		let lines = document.line_count();
		let values = self.source.values(document.as_ref());
		if values.len() != lines {
			return Skipped(SkipReason::ValueCountMismatch { lines, values: values.len() });
		}
		let assignment = match assign_levels(&values, levels) {
			Ok(assignment) => assignment,
			Err(degenerate) => return Skipped(SkipReason::Degenerate(degenerate)),
		};

		let mut ranges: Vec<Vec<LineRange>> = vec![Vec::new(); levels.get()];
		for (line, level) in assignment.iter() {
			ranges[level].push(document.line_at(line));
		}
		for (style, level_ranges) in self.styles.iter().zip(&ranges) {
			self.host.renderer.set_decorations(editor.id(), style.id(), level_ranges);
		}

		DrawOutcome::Drawn {
			lines,
			levels: levels.get(),
		}
	}

	fn clear_active(&mut self) {
		if self.disposed {
			return;
		}
		let Some(editor) = self.host.workbench.active_editor() else {
			tracing::trace!("heatmap.clear: no active editor");
			return;
		};
		for style in self.styles.iter() {
			self.host.renderer.set_decorations(editor.id(), style.id(), &[]);
		}
		tracing::debug!(editor = ?editor.id(), levels = self.styles.len(), "heatmap.clear");
	}

	fn activate(&mut self) -> Result<()> {
		if self.disposed {
			tracing::debug!("heatmap.activate after dispose");
			return Ok(());
		}
		let settings = HeatMapSettings::from_store(self.host.config.as_ref());
		let released = self.styles.release();
		match StyleSet::allocate(&self.host.styles, &settings) {
			Ok(styles) => {
				self.styles = styles;
				tracing::debug!(released, levels = settings.levels.get(), colour = %settings.colour, "heatmap.activate");
				Ok(())
			}
			Err(error) => {
				tracing::warn!(released, %error, "heatmap.activate failed");
				Err(error)
			}
		}
	}

	fn dispose(&mut self) {
		if self.disposed {
			return;
		}
		self.disposed = true;
		let released = self.styles.release();
		tracing::debug!(released, "heatmap.dispose");
	}
}
