//! Graph model: an index-addressed node list with per-node outgoing adjacency.
//!
//! Nodes are appended and never removed, so an index stays valid for the
//! lifetime of the graph. Edges are validated on insertion.

use log::warn;
use thiserror::Error;

/// Visual radius given to nodes when none is configured.
pub const DEFAULT_NODE_RADIUS: f64 = 20.0;

/// Errors raised when building a graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum GraphError {
	/// An edge endpoint referenced a node that does not exist.
	#[error("node index {index} is out of range for a graph of {len} nodes")]
	IndexOutOfRange {
		/// The offending index.
		index: usize,
		/// Node count at the time of the call.
		len: usize,
	},
	/// The input asked for more nodes than the view will build.
	#[error("graph of {requested} nodes exceeds the limit of {max}")]
	TooManyNodes {
		/// Requested node count.
		requested: usize,
		/// Largest accepted node count.
		max: usize,
	},
}

/// A single vertex: screen position, visual radius and outgoing neighbors.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
	x: f64,
	y: f64,
	radius: f64,
	neighbors: Vec<usize>,
}

impl Node {
	/// Creates a node at the origin with no neighbors.
	pub fn new(radius: f64) -> Self {
		Self {
			x: 0.0,
			y: 0.0,
			radius,
			neighbors: Vec::new(),
		}
	}

	pub fn position(&self) -> (f64, f64) {
		(self.x, self.y)
	}

	pub fn radius(&self) -> f64 {
		self.radius
	}

	/// Overwrites the position unconditionally.
	pub fn set_position(&mut self, x: f64, y: f64) {
		self.x = x;
		self.y = y;
	}

	/// Filled-circle hit test, inclusive of the boundary.
	pub fn is_hit(&self, px: f64, py: f64) -> bool {
		let (dx, dy) = (px - self.x, py - self.y);
		dx * dx + dy * dy <= self.radius * self.radius
	}

	/// Outgoing neighbor indices in insertion order. Duplicates are kept.
	pub fn neighbors(&self) -> &[usize] {
		&self.neighbors
	}

	pub fn is_connected_to(&self, target: usize) -> bool {
		self.neighbors.contains(&target)
	}
}

/// Directed graph whose nodes are addressed by insertion index.
#[derive(Clone, Debug, PartialEq)]
pub struct Graph {
	nodes: Vec<Node>,
	node_radius: f64,
}

impl Graph {
	/// Creates a graph of `n` nodes with the default radius and no edges.
	pub fn new(n: usize) -> Self {
		Self::with_node_radius(n, DEFAULT_NODE_RADIUS)
	}

	/// Creates a graph of `n` nodes, each (and every later one) of `radius`.
	pub fn with_node_radius(n: usize, radius: f64) -> Self {
		Self {
			nodes: (0..n).map(|_| Node::new(radius)).collect(),
			node_radius: radius,
		}
	}

	/// Appends a node at the origin and returns its index.
	pub fn add_node(&mut self) -> usize {
		self.nodes.push(Node::new(self.node_radius));
		self.nodes.len() - 1
	}

	/// Appends `target` to the adjacency of `source`.
	///
	/// Both endpoints must already exist; on error the graph is unchanged.
	/// Self-loops and repeated edges are accepted.
	pub fn add_edge(&mut self, source: usize, target: usize) -> Result<(), GraphError> {
		let len = self.nodes.len();
		if let Some(index) = [source, target].into_iter().find(|&i| i >= len) {
			warn!("rejecting edge {source} -> {target}: index {index} out of range ({len} nodes)");
			return Err(GraphError::IndexOutOfRange { index, len });
		}
		self.nodes[source].neighbors.push(target);
		Ok(())
	}

	pub fn size(&self) -> usize {
		self.nodes.len()
	}

	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}

	pub fn node(&self, index: usize) -> Option<&Node> {
		self.nodes.get(index)
	}

	pub fn node_mut(&mut self, index: usize) -> Option<&mut Node> {
		self.nodes.get_mut(index)
	}

	pub fn nodes(&self) -> &[Node] {
		&self.nodes
	}

	/// Index of the first node containing the point. Lowest index wins on overlap.
	pub fn node_at(&self, px: f64, py: f64) -> Option<usize> {
		self.nodes.iter().position(|node| node.is_hit(px, py))
	}

	/// All edges as `(source, target)` pairs, grouped by source in index order.
	pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
		self.nodes
			.iter()
			.enumerate()
			.flat_map(|(i, node)| node.neighbors.iter().map(move |&j| (i, j)))
	}

	pub fn edge_count(&self) -> usize {
		self.nodes.iter().map(|node| node.neighbors.len()).sum()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn sample() -> Graph {
		let mut graph = Graph::new(5);
		for (u, v) in [(1, 2), (0, 2), (4, 3), (2, 3)] {
			graph.add_edge(u, v).unwrap();
		}
		graph
	}

	#[test]
	fn sample_graph_adjacency() {
		let graph = sample();
		assert_eq!(graph.size(), 5);
		assert_eq!(graph.node(2).unwrap().neighbors(), &[3]);
		assert_eq!(graph.node(1).unwrap().neighbors(), &[2]);
		assert_eq!(graph.node(0).unwrap().neighbors(), &[2]);
		assert!(graph.node(3).unwrap().neighbors().is_empty());
		assert_eq!(graph.edge_count(), 4);
	}

	#[test]
	fn edges_keep_insertion_order_and_duplicates() {
		let mut graph = Graph::new(3);
		graph.add_edge(0, 2).unwrap();
		graph.add_edge(0, 1).unwrap();
		graph.add_edge(0, 2).unwrap();
		graph.add_edge(0, 0).unwrap();
		assert_eq!(graph.node(0).unwrap().neighbors(), &[2, 1, 2, 0]);
		assert!(graph.node(0).unwrap().is_connected_to(0));
		assert!(!graph.node(1).unwrap().is_connected_to(0));
	}

	#[test]
	fn single_edge_appears_once() {
		let mut graph = Graph::new(2);
		graph.add_edge(0, 1).unwrap();
		let count = graph.node(0).unwrap().neighbors().iter().filter(|&&n| n == 1).count();
		assert_eq!(count, 1);
	}

	#[test]
	fn out_of_range_edges_are_rejected_without_side_effects() {
		let mut graph = Graph::new(2);
		assert_eq!(
			graph.add_edge(2, 0),
			Err(GraphError::IndexOutOfRange { index: 2, len: 2 })
		);
		assert_eq!(
			graph.add_edge(0, 5),
			Err(GraphError::IndexOutOfRange { index: 5, len: 2 })
		);
		assert_eq!(graph.edge_count(), 0);
	}

	#[test]
	fn edge_to_appended_node_is_accepted() {
		let mut graph = Graph::new(1);
		assert!(graph.add_edge(0, 1).is_err());
		let idx = graph.add_node();
		assert_eq!(idx, 1);
		graph.add_edge(0, idx).unwrap();
		assert_eq!(graph.edges().collect::<Vec<_>>(), vec![(0, 1)]);
	}

	#[test]
	fn add_node_uses_graph_radius() {
		let mut graph = Graph::with_node_radius(0, 12.0);
		assert!(graph.is_empty());
		let idx = graph.add_node();
		assert_eq!(graph.node(idx).unwrap().radius(), 12.0);
		assert_eq!(graph.node(idx).unwrap().position(), (0.0, 0.0));
	}

	#[test]
	fn hit_test_is_inclusive_of_boundary() {
		let mut node = Node::new(20.0);
		node.set_position(100.0, 100.0);
		assert!(node.is_hit(100.0, 100.0));
		assert!(node.is_hit(120.0, 100.0));
		assert!(node.is_hit(112.0, 116.0));
		assert!(!node.is_hit(121.0, 100.0));
		assert!(!node.is_hit(100.0, 79.0));
	}

	#[test]
	fn node_at_prefers_lowest_index() {
		let mut graph = Graph::new(3);
		graph.node_mut(0).unwrap().set_position(0.0, 0.0);
		graph.node_mut(1).unwrap().set_position(10.0, 0.0);
		graph.node_mut(2).unwrap().set_position(15.0, 0.0);
		assert_eq!(graph.node_at(12.0, 0.0), Some(0));
		assert_eq!(graph.node_at(28.0, 0.0), Some(1));
		assert_eq!(graph.node_at(200.0, 200.0), None);
	}
}
