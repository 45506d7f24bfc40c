//! taskgraph-canvas: Interactive explorer for serialized task graphs.
//!
//! This crate provides a WASM-based visualization component that renders
//! pre-laid-out dependency graphs with search, hover highlighting,
//! click-to-pin focus, and pan/zoom.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;

pub use components::graph_view::{GraphExplorer, GraphSnapshot, Theme};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("taskgraph-canvas: logging initialized");
}

/// Load the graph snapshot from a script element with id="graph-data".
/// Expected format: the layout tool's JSON export with { nodes: [...], edges: [...] }
fn load_graph_snapshot() -> Option<GraphSnapshot> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("graph-data")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match serde_json::from_str::<GraphSnapshot>(&json_text) {
		Ok(data) => {
			info!(
				"taskgraph-canvas: loaded {} nodes, {} edges",
				data.nodes.len(),
				data.edges.len()
			);
			Some(data)
		}
		Err(e) => {
			warn!("taskgraph-canvas: failed to parse graph snapshot: {}", e);
			None
		}
	}
}

/// Main application component.
/// Loads the snapshot from the DOM and renders the interactive explorer.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	// An unparsable or missing snapshot renders as an empty graph.
	let snapshot = load_graph_snapshot().unwrap_or_default();
	let graph_signal = Signal::derive(move || snapshot.clone());

	view! {
		<Html attr:lang="en" attr:dir="ltr" />
		<Title text="Task Graph Explorer" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<div class="fullscreen-graph">
			<GraphExplorer data=graph_signal fullscreen=true />
			<div class="graph-overlay">
				<h1>"Task Graph Explorer"</h1>
				<p class="subtitle">
					"Click a node to pin its neighborhood. Click a neighbor to expand. Scroll to zoom, drag the background to pan."
				</p>
			</div>
		</div>
	}
}
