//! End-to-end pointer sessions against the sample graph.

// Test target reuses lib deps, silence noisy lint.
#![allow(unused_crate_dependencies, missing_docs)]

use graph_viz::{GraphData, GraphViewState, InteractionState, PointerEvent, Status, ViewConfig};

fn sample_state() -> GraphViewState {
	GraphViewState::new(&GraphData::sample(), ViewConfig::default()).unwrap()
}

#[test]
fn drag_node_and_edges_follow() {
	let mut state = sample_state();
	let (x0, y0) = state.graph.node(2).unwrap().position();

	let down = state.dispatch(PointerEvent::Down { x: x0 + 3.0, y: y0 - 4.0 });
	assert_eq!(down.status, Some(Status::NodeSelected { node: 2 }));
	assert_eq!(state.controller.state(), InteractionState::Dragging { node: 2 });

	state.dispatch(PointerEvent::Drag { x: 450.0, y: 470.0 });
	let last = state.dispatch(PointerEvent::Drag { x: 500.0, y: 500.0 });
	assert!(last.redraw);
	let up = state.dispatch(PointerEvent::Up { x: 500.0, y: 500.0 });
	assert_eq!(up.status, Some(Status::Released { x: 500.0, y: 500.0 }));
	assert_eq!(state.dispatch(PointerEvent::Click { x: 500.0, y: 500.0 }).status, None);

	assert_eq!(state.controller.state(), InteractionState::Idle);
	assert_eq!(state.graph.node(2).unwrap().position(), (500.0, 500.0));

	// 0 -> 2, 1 -> 2 end at the moved node; 2 -> 3 starts there.
	let frame = state.frame();
	assert_eq!(frame.lines[0].to, (500.0, 500.0));
	assert_eq!(frame.lines[1].to, (500.0, 500.0));
	assert_eq!(frame.lines[2].from, (500.0, 500.0));
	assert_eq!(frame.nodes[2].center, (500.0, 500.0));
}

#[test]
fn background_gesture_leaves_graph_untouched() {
	let mut state = sample_state();
	let before = state.graph.clone();

	let down = state.dispatch(PointerEvent::Down { x: 500.0, y: 500.0 });
	assert_eq!(down.status, Some(Status::Pressed { x: 500.0, y: 500.0 }));
	let drag = state.dispatch(PointerEvent::Drag { x: 800.0, y: 500.0 });
	assert!(!drag.redraw);
	assert_eq!(drag.status, None);
	state.dispatch(PointerEvent::Up { x: 800.0, y: 500.0 });

	assert_eq!(state.graph, before);
}

#[test]
fn plain_click_reports_coordinates() {
	let mut state = sample_state();
	state.dispatch(PointerEvent::Down { x: 10.0, y: 20.0 });
	state.dispatch(PointerEvent::Up { x: 10.0, y: 20.0 });
	let click = state.dispatch(PointerEvent::Click { x: 10.0, y: 20.0 });
	assert_eq!(
		click.status.map(|s| s.to_string()).as_deref(),
		Some("Clicked at X: 10, Y: 20")
	);
}
