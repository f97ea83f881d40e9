//! Graph data structures for input to the graph view component.

use serde::Deserialize;

/// A directed edge between two node indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct GraphEdge {
	/// Source node index.
	pub source: usize,
	/// Target node index.
	pub target: usize,
}

/// Complete graph description: a node count and an edge list.
///
/// Nodes are identified by their index, `0..nodes`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct GraphData {
	pub nodes: usize,
	#[serde(default)]
	pub edges: Vec<GraphEdge>,
}

impl GraphData {
	/// Five nodes with a handful of edges, shown when no data is supplied.
	pub fn sample() -> Self {
		Self {
			nodes: 5,
			edges: [(1, 2), (0, 2), (4, 3), (2, 3)]
				.into_iter()
				.map(|(source, target)| GraphEdge { source, target })
				.collect(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_edge_list() {
		let data: GraphData = serde_json::from_str(
			r#"{ "nodes": 3, "edges": [{ "source": 0, "target": 2 }, { "source": 2, "target": 2 }] }"#,
		)
		.unwrap();
		assert_eq!(data.nodes, 3);
		assert_eq!(data.edges[0], GraphEdge { source: 0, target: 2 });
		assert_eq!(data.edges[1], GraphEdge { source: 2, target: 2 });
	}

	#[test]
	fn edges_are_optional() {
		let data: GraphData = serde_json::from_str(r#"{ "nodes": 4 }"#).unwrap();
		assert_eq!(data.nodes, 4);
		assert!(data.edges.is_empty());
	}

	#[test]
	fn negative_node_count_is_rejected() {
		assert!(serde_json::from_str::<GraphData>(r#"{ "nodes": -1 }"#).is_err());
	}
}
