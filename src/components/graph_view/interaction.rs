//! Pointer interaction: selecting a node on press and dragging it around.
//!
//! The controller never owns the graph. Each event is handed the graph it
//! should act on and answers with an [`Outcome`] telling the host what to
//! display and whether a repaint is needed.

use std::fmt;

use log::debug;

use super::graph::Graph;

/// A pointer event in canvas coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
	Down { x: f64, y: f64 },
	Drag { x: f64, y: f64 },
	Up { x: f64, y: f64 },
	Click { x: f64, y: f64 },
}

/// Drag state machine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InteractionState {
	#[default]
	Idle,
	/// A press landed on `node`; moves reposition it until release.
	Dragging { node: usize },
}

/// Human-readable description of the latest interaction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Status {
	/// Press landed on a node.
	NodeSelected { node: usize },
	/// Press missed every node.
	Pressed { x: f64, y: f64 },
	/// Selected node moved.
	Dragging { node: usize, x: f64, y: f64 },
	Released { x: f64, y: f64 },
	Clicked { x: f64, y: f64 },
}

impl fmt::Display for Status {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match *self {
			Status::NodeSelected { node } => write!(f, "Node {node} selected"),
			Status::Pressed { x, y } => write!(f, "Pressed at X: {x}, Y: {y} (no node)"),
			Status::Dragging { node, x, y } => write!(f, "Dragging node {node} -> X: {x}, Y: {y}"),
			Status::Released { x, y } => write!(f, "Released at X: {x}, Y: {y}"),
			Status::Clicked { x, y } => write!(f, "Clicked at X: {x}, Y: {y}"),
		}
	}
}

/// What the host should do after an event.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Outcome {
	/// New status text, or `None` to keep the current one.
	pub status: Option<Status>,
	/// A node moved and the view must be repainted.
	pub redraw: bool,
}

impl Outcome {
	fn status(status: Status) -> Self {
		Self {
			status: Some(status),
			redraw: false,
		}
	}
}

/// Bookkeeping for the press that started the current gesture, used to
/// decide whether the trailing click is a plain click.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Press {
	hit: Option<usize>,
	moved: bool,
	released: bool,
}

/// Maps pointer events onto node selection and position updates.
#[derive(Clone, Debug, Default)]
pub struct InteractionController {
	state: InteractionState,
	press: Option<Press>,
}

impl InteractionController {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn state(&self) -> InteractionState {
		self.state
	}

	/// Index of the node being dragged, if any.
	pub fn selected(&self) -> Option<usize> {
		match self.state {
			InteractionState::Idle => None,
			InteractionState::Dragging { node } => Some(node),
		}
	}

	/// Dispatches an event to the matching handler.
	pub fn handle(&mut self, graph: &mut Graph, event: PointerEvent) -> Outcome {
		match event {
			PointerEvent::Down { x, y } => self.pointer_down(graph, x, y),
			PointerEvent::Drag { x, y } => self.pointer_drag(graph, x, y),
			PointerEvent::Up { x, y } => self.pointer_up(x, y),
			PointerEvent::Click { x, y } => self.pointer_click(x, y),
		}
	}

	/// Selects the first node under the pointer, lowest index first.
	pub fn pointer_down(&mut self, graph: &Graph, x: f64, y: f64) -> Outcome {
		let hit = graph.node_at(x, y);
		self.press = Some(Press {
			hit,
			moved: false,
			released: false,
		});
		match hit {
			Some(node) => {
				debug!("interaction: pressed node {node} at ({x}, {y})");
				self.state = InteractionState::Dragging { node };
				Outcome::status(Status::NodeSelected { node })
			}
			None => {
				self.state = InteractionState::Idle;
				Outcome::status(Status::Pressed { x, y })
			}
		}
	}

	/// Moves the selected node to the pointer. Without a selection nothing changes.
	pub fn pointer_drag(&mut self, graph: &mut Graph, x: f64, y: f64) -> Outcome {
		if let Some(press) = self.press.as_mut()
			&& !press.released
		{
			press.moved = true;
		}
		let InteractionState::Dragging { node } = self.state else {
			return Outcome::default();
		};
		match graph.node_mut(node) {
			Some(entry) => {
				entry.set_position(x, y);
				Outcome {
					status: Some(Status::Dragging { node, x, y }),
					redraw: true,
				}
			}
			None => {
				debug!("interaction: selected node {node} vanished, dropping selection");
				self.state = InteractionState::Idle;
				Outcome::default()
			}
		}
	}

	/// Ends any drag in progress. A stray release only updates the status.
	pub fn pointer_up(&mut self, x: f64, y: f64) -> Outcome {
		if let InteractionState::Dragging { node } = self.state {
			debug!("interaction: released node {node} at ({x}, {y})");
		}
		self.state = InteractionState::Idle;
		if let Some(press) = self.press.as_mut() {
			press.released = true;
		}
		Outcome::status(Status::Released { x, y })
	}

	/// Reports a plain click. Clicks that finish a node press or a drag are
	/// already described by the press and release statuses and stay silent.
	pub fn pointer_click(&mut self, x: f64, y: f64) -> Outcome {
		match self.press.take() {
			Some(Press { hit: Some(_), .. }) | Some(Press { moved: true, .. }) => Outcome::default(),
			_ => Outcome::status(Status::Clicked { x, y }),
		}
	}
}
