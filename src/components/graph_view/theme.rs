//! Visual theming for the graph view.
//!
//! Provides colors and per-element styles. Nodes share one fill color; there
//! is no per-node palette.

use log::warn;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const BLACK: Color = Color::rgb(0, 0, 0);
	pub const WHITE: Color = Color::rgb(255, 255, 255);

	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Background style configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct BackgroundStyle {
	pub color: Color,
}

/// Edge visual style.
#[derive(Clone, Debug, PartialEq)]
pub struct EdgeStyle {
	pub color: Color,
}

/// Node visual style.
#[derive(Clone, Debug, PartialEq)]
pub struct NodeStyle {
	/// Fill color of the node circle
	pub fill: Color,
	/// Outline stroke color
	pub outline: Color,
	/// Index label color
	pub label: Color,
}

/// Complete visual theme.
#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
	pub name: &'static str,
	pub background: BackgroundStyle,
	pub edge: EdgeStyle,
	pub node: NodeStyle,
}

impl Theme {
	/// Blue nodes with black outlines and white labels on a light panel (default)
	pub fn classic() -> Self {
		Self {
			name: "classic",
			background: BackgroundStyle {
				color: Color::rgb(238, 238, 238),
			},
			edge: EdgeStyle {
				color: Color::BLACK,
			},
			node: NodeStyle {
				fill: Color::rgb(0, 0, 255),
				outline: Color::BLACK,
				label: Color::WHITE,
			},
		}
	}

	/// Dark background with muted blue nodes
	pub fn midnight() -> Self {
		Self {
			name: "midnight",
			background: BackgroundStyle {
				color: Color::rgb(22, 27, 34),
			},
			edge: EdgeStyle {
				color: Color::rgb(140, 160, 180),
			},
			node: NodeStyle {
				fill: Color::rgb(94, 129, 172),
				outline: Color::rgb(220, 225, 230),
				label: Color::WHITE,
			},
		}
	}

	/// Looks up a preset by name, falling back to [`Theme::classic`].
	pub fn by_name(name: &str) -> Self {
		match name {
			"classic" => Self::classic(),
			"midnight" => Self::midnight(),
			other => {
				warn!("unknown theme {other:?}, using classic");
				Self::classic()
			}
		}
	}
}

impl Default for Theme {
	fn default() -> Self {
		Self::classic()
	}
}
