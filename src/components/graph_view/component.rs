//! Leptos component wrapping the graph canvas.
//!
//! The component creates an HTML canvas element and forwards mouse events to
//! [`GraphViewState::dispatch`] as [`PointerEvent`]s. The canvas is repainted
//! once on mount and again whenever an event reports that a node moved.
//!
//! Releases are observed on the window rather than the canvas so a drag that
//! ends outside the canvas still finishes.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::warn;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};

use super::config::ViewConfig;
use super::interaction::{Outcome, PointerEvent};
use super::render;
use super::state::GraphViewState;
use super::types::GraphData;

const INITIAL_STATUS: &str = "Mouse info will appear here";

/// Bundles the view state with the canvas context it paints into.
struct ViewContext {
	state: GraphViewState,
	ctx: CanvasRenderingContext2d,
}

impl ViewContext {
	fn paint(&self) {
		let config = &self.state.config;
		render::paint(
			&self.state.frame(),
			&self.ctx,
			config.width,
			config.height,
			&config.label_font,
		);
	}
}

type SharedView = Rc<RefCell<Option<ViewContext>>>;

/// Renders an interactive graph on a canvas element with a status line below.
///
/// Nodes start on a circle; pressing on a node and dragging moves it, and its
/// edges follow. The canvas size comes from `config`.
#[component]
pub fn GraphCanvas(
	#[prop(into)] data: Signal<GraphData>,
	#[prop(default = ViewConfig::default())] config: ViewConfig,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let status = RwSignal::new(INITIAL_STATUS.to_string());
	let view: SharedView = Rc::new(RefCell::new(None));
	let release_cb: Rc<RefCell<Option<Closure<dyn FnMut(MouseEvent)>>>> =
		Rc::new(RefCell::new(None));
	let (view_init, release_cb_init) = (view.clone(), release_cb.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		canvas.set_width(config.width as u32);
		canvas.set_height(config.height as u32);

		let Some(ctx) = canvas
			.get_context("2d")
			.ok()
			.flatten()
			.and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
		else {
			warn!("graph-viz: canvas 2d context unavailable");
			return;
		};

		if release_cb_init.borrow().is_none() {
			let view_release = view_init.clone();
			*release_cb_init.borrow_mut() = Some(Closure::new(move |ev: MouseEvent| {
				release(&view_release, canvas_ref, status, &ev);
			}));
			if let (Some(window), Some(cb)) =
				(web_sys::window(), release_cb_init.borrow().as_ref())
			{
				let _ =
					window.add_event_listener_with_callback("mouseup", cb.as_ref().unchecked_ref());
			}
		}

		match GraphViewState::new(&data.get(), config.clone()) {
			Ok(state) => {
				let context = ViewContext { state, ctx };
				context.paint();
				*view_init.borrow_mut() = Some(context);
				status.set(INITIAL_STATUS.to_string());
			}
			Err(err) => {
				warn!("graph-viz: invalid graph data: {err}");
				*view_init.borrow_mut() = None;
				status.set(format!("Invalid graph: {err}"));
			}
		}
	});

	let view_md = view.clone();
	let on_mousedown = move |ev: MouseEvent| {
		forward(&view_md, canvas_ref, status, &ev, |x, y| PointerEvent::Down { x, y });
	};

	let view_mm = view.clone();
	let on_mousemove = move |ev: MouseEvent| {
		// Only moves with the primary button held count as drags.
		if ev.buttons() & 1 == 0 {
			return;
		}
		forward(&view_mm, canvas_ref, status, &ev, |x, y| PointerEvent::Drag { x, y });
	};

	let view_cl = view.clone();
	let on_click = move |ev: MouseEvent| {
		forward(&view_cl, canvas_ref, status, &ev, |x, y| PointerEvent::Click { x, y });
	};

	view! {
		<div class="graph-view">
			<canvas
				node_ref=canvas_ref
				class="graph-canvas"
				on:mousedown=on_mousedown
				on:mousemove=on_mousemove
				on:click=on_click
				style="display: block; cursor: pointer;"
			/>
			<p class="graph-status">{move || status.get()}</p>
		</div>
	}
}

/// Mouse position relative to the canvas' top-left corner.
fn canvas_position(
	canvas_ref: NodeRef<leptos::html::Canvas>,
	ev: &MouseEvent,
) -> Option<(f64, f64)> {
	let canvas: HtmlCanvasElement = canvas_ref.get()?.into();
	let rect = canvas.get_bounding_client_rect();
	Some((
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	))
}

/// Window-level release handler. Releases elsewhere on the page are ignored
/// unless they end a drag.
fn release(
	view: &SharedView,
	canvas_ref: NodeRef<leptos::html::Canvas>,
	status: RwSignal<String>,
	ev: &MouseEvent,
) {
	let Some((x, y)) = canvas_position(canvas_ref, ev) else {
		return;
	};
	let accepts = view
		.borrow()
		.as_ref()
		.is_some_and(|context| context.state.accepts_release(x, y));
	if accepts {
		dispatch(view, status, PointerEvent::Up { x, y });
	}
}

/// Converts a mouse event to canvas coordinates, dispatches it and applies
/// the outcome.
fn forward(
	view: &SharedView,
	canvas_ref: NodeRef<leptos::html::Canvas>,
	status: RwSignal<String>,
	ev: &MouseEvent,
	event: fn(f64, f64) -> PointerEvent,
) {
	if let Some((x, y)) = canvas_position(canvas_ref, ev) {
		dispatch(view, status, event(x, y));
	}
}

fn dispatch(view: &SharedView, status: RwSignal<String>, event: PointerEvent) {
	let mut guard = view.borrow_mut();
	let Some(context) = guard.as_mut() else {
		return;
	};
	let Outcome { status: text, redraw } = context.state.dispatch(event);
	if redraw {
		context.paint();
	}
	if let Some(text) = text {
		status.set(text.to_string());
	}
}
