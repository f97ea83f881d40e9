//! View state: the graph plus everything needed to interact with and draw it.
//!
//! Built once when the component mounts. Pointer events flow through
//! [`GraphViewState::dispatch`], which is the only place node positions
//! change after the initial layout.

use log::info;

use super::config::ViewConfig;
use super::graph::{Graph, GraphError};
use super::interaction::{InteractionController, Outcome, PointerEvent};
use super::layout::CircularLayout;
use super::scene::{self, Frame};
use super::theme::Theme;
use super::types::GraphData;

/// Largest node count accepted from input data.
pub const MAX_NODES: usize = 10_000;

/// Core view state combining the graph model with interaction tracking.
#[derive(Clone, Debug)]
pub struct GraphViewState {
	pub graph: Graph,
	pub controller: InteractionController,
	pub config: ViewConfig,
	pub theme: Theme,
}

impl GraphViewState {
	/// Builds the graph from `data` and lays it out on a circle.
	///
	/// Fails if `data.nodes` exceeds [`MAX_NODES`] or any edge references a
	/// node outside `0..data.nodes`.
	pub fn new(data: &GraphData, config: ViewConfig) -> Result<Self, GraphError> {
		if data.nodes > MAX_NODES {
			return Err(GraphError::TooManyNodes {
				requested: data.nodes,
				max: MAX_NODES,
			});
		}
		let mut graph = Graph::with_node_radius(data.nodes, config.node_radius);
		for edge in &data.edges {
			graph.add_edge(edge.source, edge.target)?;
		}
		CircularLayout::from_config(&config).apply(&mut graph);
		info!(
			"graph-viz: built graph with {} nodes, {} edges",
			graph.size(),
			graph.edge_count()
		);

		let theme = Theme::by_name(&config.theme);
		Ok(Self {
			graph,
			controller: InteractionController::new(),
			config,
			theme,
		})
	}

	/// Feeds one pointer event to the controller.
	pub fn dispatch(&mut self, event: PointerEvent) -> Outcome {
		self.controller.handle(&mut self.graph, event)
	}

	/// Whether a release seen outside the canvas' own listeners belongs to
	/// this view: either it ends a drag, or it lies on the canvas.
	pub fn accepts_release(&self, x: f64, y: f64) -> bool {
		let on_canvas =
			(0.0..=self.config.width).contains(&x) && (0.0..=self.config.height).contains(&y);
		self.controller.selected().is_some() || on_canvas
	}

	/// Current drawing primitives.
	pub fn frame(&self) -> Frame {
		scene::compose(&self.graph, &self.config, &self.theme)
	}
}
