//! graph-viz: Interactive graph visualization with draggable nodes.
//!
//! This crate provides a WASM-based canvas component that lays a directed
//! graph out on a circle and lets the user drag nodes around while edges
//! follow.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use serde::de::DeserializeOwned;
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;

pub use components::graph_view::{
	Graph, GraphCanvas, GraphData, GraphEdge, GraphError, GraphViewState, InteractionController,
	InteractionState, Node, Outcome, PointerEvent, Status, ViewConfig,
};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("graph-viz: logging initialized");
}

/// Load JSON from a script element with the given id.
/// Returns `None` when the element is missing or its contents do not parse.
fn load_json<T: DeserializeOwned>(id: &str) -> Option<T> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id(id)?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match serde_json::from_str::<T>(&json_text) {
		Ok(value) => Some(value),
		Err(e) => {
			warn!("graph-viz: failed to parse #{id}: {}", e);
			None
		}
	}
}

/// Main application component.
/// Loads graph data and view config from the DOM and renders the canvas.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	// Expected format: { "nodes": 5, "edges": [{ "source": 1, "target": 2 }] }
	let graph_data = load_json::<GraphData>("graph-data").unwrap_or_else(|| {
		info!("graph-viz: no graph data supplied, showing sample graph");
		GraphData::sample()
	});
	let config = load_json::<ViewConfig>("graph-config").unwrap_or_default();
	info!(
		"graph-viz: loaded {} nodes, {} edges",
		graph_data.nodes,
		graph_data.edges.len()
	);
	let graph_signal = Signal::derive(move || graph_data.clone());

	view! {
		<Html attr:lang="en" attr:dir="ltr" />
		<Title text="Graph Visualizer" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<div class="graph-page">
			<h1>"Graph Visualizer"</h1>
			<p class="subtitle">"Drag a node to reposition it. Its edges follow."</p>
			<GraphCanvas data=graph_signal config=config />
		</div>
	}
}
