//! Geometry and sizing configuration for the graph view.
//!
//! All values are in canvas pixels. Every field has a default, so a partial
//! JSON object (or none at all) yields a usable configuration.

use serde::Deserialize;

use super::graph::DEFAULT_NODE_RADIUS;

/// Canvas size, node size, layout circle and stroke widths.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
	/// Canvas width in pixels.
	pub width: f64,
	/// Canvas height in pixels.
	pub height: f64,
	/// Radius of every node circle (also its hit radius).
	pub node_radius: f64,
	/// Center of the initial layout circle.
	pub layout_center: (f64, f64),
	/// Radius of the initial layout circle.
	pub layout_radius: f64,
	/// Stroke width for edges.
	pub edge_width: f64,
	/// Stroke width for node outlines.
	pub outline_width: f64,
	/// CSS font used for node index labels.
	pub label_font: String,
	/// Name of the theme preset (see [`Theme::by_name`](super::theme::Theme::by_name)).
	pub theme: String,
}

impl Default for ViewConfig {
	fn default() -> Self {
		Self {
			width: 1000.0,
			height: 1000.0,
			node_radius: DEFAULT_NODE_RADIUS,
			layout_center: (500.0, 500.0),
			layout_radius: 300.0,
			edge_width: 2.0,
			outline_width: 1.0,
			label_font: "12px sans-serif".to_string(),
			theme: "classic".to_string(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn partial_json_keeps_defaults() {
		let config: ViewConfig =
			serde_json::from_str(r#"{ "node_radius": 30, "layout_center": [400, 300] }"#).unwrap();
		assert_eq!(config.node_radius, 30.0);
		assert_eq!(config.layout_center, (400.0, 300.0));
		assert_eq!(config.layout_radius, 300.0);
		assert_eq!(config.theme, "classic");
	}

	#[test]
	fn empty_object_is_default() {
		let config: ViewConfig = serde_json::from_str("{}").unwrap();
		assert_eq!(config, ViewConfig::default());
	}
}
