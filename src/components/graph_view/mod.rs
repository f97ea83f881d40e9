//! Interactive graph view component.
//!
//! Renders a directed graph on an HTML canvas with:
//! - Nodes placed evenly on a circle at startup
//! - Straight edges drawn under filled, index-labelled node circles
//! - Press-and-drag repositioning of a single node, edges following it
//! - A status line describing the latest pointer interaction
//!
//! Everything except [`GraphCanvas`] and the canvas painter is plain Rust and
//! can be driven without a browser through [`GraphViewState`].
//!
//! # Example
//!
//! ```ignore
//! use graph_viz::{GraphCanvas, GraphData, GraphEdge};
//!
//! let data = GraphData {
//!     nodes: 3,
//!     edges: vec![GraphEdge { source: 0, target: 1 }, GraphEdge { source: 1, target: 2 }],
//! };
//!
//! view! { <GraphCanvas data=data.into() /> }
//! ```

mod component;
pub mod config;
pub mod graph;
pub mod interaction;
pub mod layout;
mod render;
pub mod scene;
mod state;
pub mod theme;
mod types;

pub use component::GraphCanvas;
pub use config::ViewConfig;
pub use graph::{Graph, GraphError, Node};
pub use interaction::{InteractionController, InteractionState, Outcome, PointerEvent, Status};
pub use layout::CircularLayout;
pub use state::GraphViewState;
pub use theme::Theme;
pub use types::{GraphData, GraphEdge};
