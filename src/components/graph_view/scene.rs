//! Turns the current graph into an ordered list of drawing primitives.
//!
//! A [`Frame`] is rebuilt from scratch on every paint; nothing is cached
//! between frames. Edges come before nodes so circles always cover lines.

use super::config::ViewConfig;
use super::graph::Graph;
use super::theme::{Color, Theme};

/// A straight edge line between two node centers.
#[derive(Clone, Debug, PartialEq)]
pub struct LineSegment {
	pub from: (f64, f64),
	pub to: (f64, f64),
	pub color: Color,
	pub width: f64,
}

/// A filled, outlined circle with a centered text label.
#[derive(Clone, Debug, PartialEq)]
pub struct NodeGlyph {
	pub center: (f64, f64),
	pub radius: f64,
	pub fill: Color,
	pub outline: Color,
	pub outline_width: f64,
	pub label: String,
	pub label_color: Color,
}

/// Everything needed to paint one frame, in draw order.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
	pub background: Color,
	pub lines: Vec<LineSegment>,
	pub nodes: Vec<NodeGlyph>,
}

/// Builds the frame for `graph`. Reads state only.
pub fn compose(graph: &Graph, config: &ViewConfig, theme: &Theme) -> Frame {
	let lines = graph
		.edges()
		.filter_map(|(source, target)| {
			let from = graph.node(source)?.position();
			let to = graph.node(target)?.position();
			Some(LineSegment {
				from,
				to,
				color: theme.edge.color,
				width: config.edge_width,
			})
		})
		.collect();

	let nodes = graph
		.nodes()
		.iter()
		.enumerate()
		.map(|(i, node)| NodeGlyph {
			center: node.position(),
			radius: node.radius(),
			fill: theme.node.fill,
			outline: theme.node.outline,
			outline_width: config.outline_width,
			label: i.to_string(),
			label_color: theme.node.label,
		})
		.collect();

	Frame {
		background: theme.background.color,
		lines,
		nodes,
	}
}
