//! Leptos component wrapping the graph explorer canvas.
//!
//! Creates the canvas plus the search input / datalist overlay and wires up
//! mouse and input events: hover tracking, click-to-pin, background panning,
//! anchored wheel zoom, and free-text search. An animation loop runs via
//! `requestAnimationFrame`, ticking camera animations and redrawing each
//! frame so the reducers are re-evaluated against the current state.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use petgraph::graph::NodeIndex;
use wasm_bindgen::prelude::*;
use web_sys::{
	CanvasRenderingContext2d, FocusEvent, HtmlCanvasElement, HtmlInputElement, MouseEvent,
	WheelEvent,
};

use super::camera::{Camera, PanState};
use super::render;
use super::scale::{ScaleConfig, ScaledValues};
use super::state::InteractionState;
use super::store::GraphStore;
use super::theme::Theme;
use super::types::GraphSnapshot;

/// Bundles the loaded graph with all view-side state for the event handlers
/// and the render loop.
struct ViewContext {
	store: GraphStore,
	state: InteractionState,
	camera: Camera,
	pan: PanState,
	pressed_node: Option<NodeIndex>,
	scale: ScaleConfig,
	theme: Theme,
	width: f64,
	height: f64,
}

impl ViewContext {
	fn hit_test(&self, sx: f64, sy: f64) -> Option<NodeIndex> {
		let transform = self.camera.transform(self.width, self.height);
		let scaled = ScaledValues::new(&self.scale, self.camera.relative_k());
		self.store.node_at(sx, sy, &transform, scaled.hit_radius)
	}
}

fn event_position(canvas: &HtmlCanvasElement, ev: &MouseEvent) -> (f64, f64) {
	let rect = canvas.get_bounding_client_rect();
	(
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	)
}

/// Renders an interactive explorer for a pre-laid-out graph snapshot.
///
/// Pass the parsed snapshot via the reactive `data` signal. The component
/// sizes itself to its parent container by default; set `fullscreen = true`
/// to fill the viewport and resize automatically with the window. Explicit
/// `width`/`height` override automatic sizing.
#[component]
pub fn GraphExplorer(
	#[prop(into)] data: Signal<GraphSnapshot>,
	#[prop(default = false)] fullscreen: bool,
	#[prop(default = None)] width: Option<f64>,
	#[prop(default = None)] height: Option<f64>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let context: Rc<RefCell<Option<ViewContext>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let (context_init, animate_init, resize_cb_init) =
		(context.clone(), animate.clone(), resize_cb.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			return;
		};

		let (w, h) = if fullscreen {
			(
				window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(800.0),
				window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(600.0),
			)
		} else {
			(
				width.unwrap_or_else(|| {
					canvas
						.parent_element()
						.map(|p| p.client_width() as f64)
						.unwrap_or(800.0)
				}),
				height.unwrap_or_else(|| {
					canvas
						.parent_element()
						.map(|p| p.client_height() as f64)
						.unwrap_or(600.0)
				}),
			)
		};
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let ctx: CanvasRenderingContext2d = match canvas
			.get_context("2d")
			.ok()
			.flatten()
			.and_then(|c| c.dyn_into().ok())
		{
			Some(c) => c,
			None => return,
		};

		let store = GraphStore::from_snapshot(&data.get());
		let mut camera = Camera::default();
		if let Some(bbox) = store.full_bounding_box() {
			camera.fit(bbox, w, h);
		}

		*context_init.borrow_mut() = Some(ViewContext {
			store,
			state: InteractionState::default(),
			camera,
			pan: PanState::default(),
			pressed_node: None,
			scale: ScaleConfig::default(),
			theme: Theme::default(),
			width: w,
			height: h,
		});

		if fullscreen {
			let (context_resize, canvas_resize) = (context_init.clone(), canvas.clone());
			*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
				let Some(win) = web_sys::window() else {
					return;
				};
				let (nw, nh) = (
					win.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(800.0),
					win.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(600.0),
				);
				canvas_resize.set_width(nw as u32);
				canvas_resize.set_height(nh as u32);
				if let Some(ref mut c) = *context_resize.borrow_mut() {
					c.width = nw;
					c.height = nh;
				}
			}));
			if let Some(ref cb) = *resize_cb_init.borrow() {
				let _ =
					window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
			}
		}

		let (context_anim, animate_inner) = (context_init.clone(), animate_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut c) = *context_anim.borrow_mut() {
				let dt = 0.016;
				c.camera.tick(dt);
				render::render(
					&c.store, &c.state, &c.camera, &ctx, &c.scale, &c.theme, c.width, c.height,
				);
			}
			if let Some(ref cb) = *animate_inner.borrow() {
				if let Some(win) = web_sys::window() {
					let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
				}
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	let context_md = context.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let (x, y) = event_position(&canvas.into(), &ev);

		if let Some(ref mut c) = *context_md.borrow_mut() {
			if let Some(idx) = c.hit_test(x, y) {
				// Defer the pin until mouseup so a drag that starts on a
				// node does not count as a click.
				c.pressed_node = Some(idx);
			} else {
				c.pan.active = true;
				c.pan.start_x = x;
				c.pan.start_y = y;
				c.pan.center_start = c.camera.center();
			}
		}
	};

	let context_mm = context.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let (x, y) = event_position(&canvas.into(), &ev);

		if let Some(ref mut c) = *context_mm.borrow_mut() {
			if c.pan.active {
				let k = c.camera.k();
				c.camera.set_center(
					c.pan.center_start.0 - (x - c.pan.start_x) / k,
					c.pan.center_start.1 - (y - c.pan.start_y) / k,
				);
				return;
			}

			match (c.hit_test(x, y), c.state.hovered_node) {
				(Some(idx), hovered) if hovered != Some(idx) => {
					let c = &mut *c;
					c.state.enter_node(&c.store, idx);
				}
				(None, Some(_)) => c.state.leave_node(),
				_ => {}
			}
		}
	};

	let context_mu = context.clone();
	let on_mouseup = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let (x, y) = event_position(&canvas.into(), &ev);

		if let Some(ref mut c) = *context_mu.borrow_mut() {
			if c.pan.active {
				c.pan.active = false;
				return;
			}
			if let Some(idx) = c.pressed_node.take() {
				// Only a release over the same node counts as a click.
				if c.hit_test(x, y) == Some(idx) {
					let c = &mut *c;
					if let Some(command) = c.state.click_node(&c.store, idx, c.width, c.height) {
						c.camera.animate(command);
					}
				}
			}
		}
	};

	let context_ml = context.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut c) = *context_ml.borrow_mut() {
			c.pan.active = false;
			c.pressed_node = None;
			c.state.leave_node();
		}
	};

	let context_wh = context.clone();
	let on_wheel = move |ev: WheelEvent| {
		ev.prevent_default();
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let (x, y) = event_position(&canvas.into(), &ev);

		if let Some(ref mut c) = *context_wh.borrow_mut() {
			let factor = if ev.delta_y() > 0.0 { 0.9 } else { 1.1 };
			let (w, h) = (c.width, c.height);
			c.camera.zoom_at(x, y, factor, w, h);
		}
	};

	let context_si = context.clone();
	let on_search_input = move |ev: web_sys::Event| {
		let query = event_target_value(&ev);
		if let Some(ref mut c) = *context_si.borrow_mut() {
			let c = &mut *c;
			if let Some(command) = c.state.set_search_query(&c.store, &query) {
				c.camera.animate(command);
			}
		}
	};

	let context_sb = context.clone();
	let on_search_blur = move |ev: FocusEvent| {
		if let Some(input) = ev
			.target()
			.and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
		{
			input.set_value("");
		}
		if let Some(ref mut c) = *context_sb.borrow_mut() {
			let c = &mut *c;
			c.state.set_search_query(&c.store, "");
		}
	};

	view! {
		<div class="graph-explorer" style="position: relative;">
			<canvas
				node_ref=canvas_ref
				class="graph-explorer-canvas"
				on:mousedown=on_mousedown
				on:mousemove=on_mousemove
				on:mouseup=on_mouseup
				on:mouseleave=on_mouseleave
				on:wheel=on_wheel
				style="display: block; cursor: grab;"
			/>
			<div
				class="graph-explorer-search"
				style="position: absolute; top: 12px; left: 12px;"
			>
				<input
					type="search"
					list="graph-node-labels"
					placeholder="Search nodes..."
					on:input=on_search_input
					on:blur=on_search_blur
				/>
				<datalist id="graph-node-labels">
					{move || {
						data.get()
							.nodes
							.iter()
							.map(|node| {
								view! { <option value=node.attributes.label.clone()></option> }
							})
							.collect_view()
					}}
				</datalist>
			</div>
		</div>
	}
}
