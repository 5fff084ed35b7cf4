use std::sync::atomic::{AtomicUsize, Ordering};

use pretty_assertions::assert_eq;

use super::*;
use crate::{HostCapabilities, Rgb, VisualStyle};

fn spec(alpha: f32) -> StyleSpec {
	StyleSpec::background(Rgb::new(200, 0, 0).with_alpha(alpha))
}

#[test]
fn focus_updates_active_editor_and_notifies() {
	let host = MemoryHost::new();
	let editor = host.open(MemoryDocument::new(["a", "b"], "text"));
	let seen = Arc::new(AtomicUsize::new(0));
	let counter = seen.clone();
	let _sub = host.subscribe(
		EventKind::ActiveEditorChanged,
		Arc::new(move |event: &EditorEvent| {
			assert!(event.editor().is_some());
			counter.fetch_add(1, Ordering::SeqCst);
		}),
	);

	host.focus(Some(editor.clone()));
	assert_eq!(host.active_editor().map(|e| e.id()), Some(editor.id()));
	assert_eq!(seen.load(Ordering::SeqCst), 1);
}

#[test]
fn silent_focus_does_not_notify() {
	let host = MemoryHost::new();
	let editor = host.open(MemoryDocument::new(["a"], "text"));
	let seen = Arc::new(AtomicUsize::new(0));
	let counter = seen.clone();
	let _sub = host.subscribe(
		EventKind::ActiveEditorChanged,
		Arc::new(move |_: &EditorEvent| {
			counter.fetch_add(1, Ordering::SeqCst);
		}),
	);

	host.set_active_silently(Some(editor));
	assert!(host.active_editor().is_some());
	assert_eq!(seen.load(Ordering::SeqCst), 0);
}

#[test]
fn visual_style_releases_on_drop() {
	let host = Arc::new(MemoryHost::new());
	let caps = HostCapabilities::from_host(host.clone());

	let style = VisualStyle::create(&caps.styles, spec(0.5)).expect("allocation succeeds");
	assert_eq!(host.live_style_count(), 1);
	assert_eq!(host.live_styles()[0].1, spec(0.5));

	drop(style);
	assert_eq!(host.live_style_count(), 0);
	assert_eq!(host.created_total(), 1);
	assert_eq!(host.disposed_total(), 1);
}

#[test]
fn peak_counts_styles_live_at_the_same_time() {
	let host = Arc::new(MemoryHost::new());
	let caps = HostCapabilities::from_host(host.clone());

	let first = VisualStyle::create(&caps.styles, spec(1.0)).expect("allocation succeeds");
	let second = VisualStyle::create(&caps.styles, spec(0.5)).expect("allocation succeeds");
	drop((first, second));
	let third = VisualStyle::create(&caps.styles, spec(0.0)).expect("allocation succeeds");

	assert_eq!(host.live_style_count(), 1);
	assert_eq!(host.peak_live_styles(), 2);
	drop(third);
}

#[test]
fn disposing_a_style_removes_its_decorations() {
	let host = MemoryHost::new();
	let editor = host.open(MemoryDocument::new(["a", "b"], "text"));
	let style = host.create(&spec(1.0)).expect("allocation succeeds");

	host.set_decorations(editor.id(), style, &[LineRange::line(0, 1)]);
	assert_eq!(host.decorations(editor.id(), style), vec![LineRange::line(0, 1)]);

	host.dispose(style);
	assert!(host.is_clear(editor.id()));
}

#[test]
fn set_decorations_replaces_previous_set() {
	let host = MemoryHost::new();
	let editor = host.open(MemoryDocument::new(["a", "b"], "text"));
	let style = host.create(&spec(1.0)).expect("allocation succeeds");

	host.set_decorations(editor.id(), style, &[LineRange::line(0, 1), LineRange::line(1, 1)]);
	host.set_decorations(editor.id(), style, &[LineRange::line(1, 1)]);
	assert_eq!(host.decorations(editor.id(), style), vec![LineRange::line(1, 1)]);

	host.set_decorations(editor.id(), style, &[]);
	assert!(host.is_clear(editor.id()));
	assert_eq!(host.set_decorations_calls(), 3);
}

#[test]
fn allocation_limit_fails_further_creates() {
	let host = MemoryHost::new();
	host.limit_style_allocations(Some(2));

	assert!(host.create(&spec(1.0)).is_ok());
	assert!(host.create(&spec(0.5)).is_ok());
	assert!(matches!(host.create(&spec(0.0)), Err(HostError::StyleAllocation(_))));
	assert_eq!(host.live_style_count(), 2);

	host.limit_style_allocations(None);
	assert!(host.create(&spec(0.0)).is_ok());
}

#[test]
fn config_lookup_falls_back_to_default() {
	let host = MemoryHost::new();
	host.set_config("heatmap", "heatLevels", 4i64);

	assert_eq!(host.get("heatmap", "heatLevels"), Some(ConfigValue::Int(4)));
	assert_eq!(host.get_or("heatmap", "heatColour", "200,0,0".into()), ConfigValue::String("200,0,0".into()));

	host.unset_config("heatmap", "heatLevels");
	assert_eq!(host.get("heatmap", "heatLevels"), None);
}
