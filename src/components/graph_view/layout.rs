//! Initial circular placement of nodes.

use log::debug;

use super::config::ViewConfig;
use super::graph::Graph;

/// Places nodes evenly on a circle, node 0 directly right of the center.
///
/// Angles sweep counter-clockwise on screen: the y component is subtracted
/// because canvas y grows downwards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CircularLayout {
	pub center_x: f64,
	pub center_y: f64,
	pub radius: f64,
}

impl Default for CircularLayout {
	fn default() -> Self {
		Self {
			center_x: 500.0,
			center_y: 500.0,
			radius: 300.0,
		}
	}
}

impl CircularLayout {
	pub fn from_config(config: &ViewConfig) -> Self {
		Self {
			center_x: config.layout_center.0,
			center_y: config.layout_center.1,
			radius: config.layout_radius,
		}
	}

	/// Position of node `index` out of `count`. `count` must be non-zero.
	pub fn position(&self, index: usize, count: usize) -> (f64, f64) {
		let step = 360.0 / count as f64;
		let angle = (index as f64 * step).to_radians();
		(
			self.center_x + self.radius * angle.cos(),
			self.center_y - self.radius * angle.sin(),
		)
	}

	/// Moves every node of the graph to its place on the circle.
	///
	/// Returns the number of nodes placed; an empty graph is left untouched.
	pub fn apply(&self, graph: &mut Graph) -> usize {
		let count = graph.size();
		if count == 0 {
			debug!("layout: empty graph, nothing to place");
			return 0;
		}
		for index in 0..count {
			let (x, y) = self.position(index, count);
			if let Some(node) = graph.node_mut(index) {
				node.set_position(x, y);
			}
		}
		debug!(
			"layout: placed {count} nodes on r={} around ({}, {})",
			self.radius, self.center_x, self.center_y
		);
		count
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn assert_close(actual: (f64, f64), expected: (f64, f64)) {
		let (dx, dy) = (actual.0 - expected.0, actual.1 - expected.1);
		assert!(
			dx.abs() < 1e-9 && dy.abs() < 1e-9,
			"expected {expected:?}, got {actual:?}"
		);
	}

	#[test]
	fn first_node_sits_right_of_center() {
		let layout = CircularLayout::default();
		for count in 1..8 {
			assert_close(layout.position(0, count), (800.0, 500.0));
		}
	}

	#[test]
	fn quarter_turns_sweep_counter_clockwise() {
		let mut graph = Graph::new(4);
		assert_eq!(CircularLayout::default().apply(&mut graph), 4);
		assert_close(graph.node(0).unwrap().position(), (800.0, 500.0));
		assert_close(graph.node(1).unwrap().position(), (500.0, 200.0));
		assert_close(graph.node(2).unwrap().position(), (200.0, 500.0));
		assert_close(graph.node(3).unwrap().position(), (500.0, 800.0));
	}

	#[test]
	fn nodes_are_equidistant_from_center_at_even_angles() {
		let layout = CircularLayout {
			center_x: 0.0,
			center_y: 0.0,
			radius: 100.0,
		};
		let count = 7;
		for i in 0..count {
			let (x, y) = layout.position(i, count);
			assert!(((x * x + y * y).sqrt() - 100.0).abs() < 1e-9);
			let expected = (i as f64 * 360.0 / count as f64).to_radians();
			let angle = (-y).atan2(x).rem_euclid(std::f64::consts::TAU);
			assert!((angle - expected).abs() < 1e-9, "node {i}: {angle} vs {expected}");
		}
	}

	#[test]
	fn empty_graph_is_a_no_op() {
		let mut graph = Graph::new(0);
		assert_eq!(CircularLayout::default().apply(&mut graph), 0);
		assert!(graph.is_empty());
	}

	#[test]
	fn layout_follows_config() {
		let config = ViewConfig {
			layout_center: (100.0, 50.0),
			layout_radius: 10.0,
			..ViewConfig::default()
		};
		let layout = CircularLayout::from_config(&config);
		assert_close(layout.position(0, 2), (110.0, 50.0));
		assert_close(layout.position(1, 2), (90.0, 50.0));
	}
}
