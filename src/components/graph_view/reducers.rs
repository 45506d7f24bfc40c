//! Per-frame display reducers.
//!
//! Pure functions from (entity, interaction state) to display overrides,
//! re-evaluated for every node and edge on every redraw. No mutation
//! happens here; the renderer consumes the results.

use petgraph::graph::NodeIndex;

use super::state::InteractionState;

/// Display overrides for a node.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NodeDisplay {
	/// Draw with emphasis (pinned or hovered).
	pub highlighted: bool,
	/// Skip drawing entirely.
	pub hidden: bool,
	/// Always draw the label, regardless of zoom.
	pub force_label: bool,
}

/// Display overrides for an edge.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EdgeDisplay {
	/// Skip drawing entirely.
	pub hidden: bool,
}

/// Compute the display treatment for a node.
pub fn node_display(state: &InteractionState, idx: NodeIndex) -> NodeDisplay {
	let mut display = NodeDisplay::default();

	if state.pinned.contains(&idx) || state.hovered_node == Some(idx) {
		display.highlighted = true;
	} else if hidden_by_hover(state, idx) || (state.has_pin() && !state.view.contains(&idx)) {
		display.hidden = true;
	} else if state.view.contains(&idx) {
		display.force_label = true;
	}

	display
}

// With no pin active, a hover dims everything outside the hovered
// neighborhood.
fn hidden_by_hover(state: &InteractionState, idx: NodeIndex) -> bool {
	!state.has_pin()
		&& state
			.hovered_neighbors
			.as_ref()
			.is_some_and(|neighbors| !neighbors.contains(&idx))
}

/// Compute the display treatment for an edge given its endpoints.
pub fn edge_display(
	state: &InteractionState,
	source: NodeIndex,
	target: NodeIndex,
) -> EdgeDisplay {
	// With nothing pinned, all edges stay visible.
	if !state.has_pin() {
		return EdgeDisplay { hidden: false };
	}

	let touches_hover =
		state.hovered_node == Some(source) || state.hovered_node == Some(target);
	let touches_focus = state.pinned.contains(&source)
		|| state.view.contains(&source)
		|| state.pinned.contains(&target)
		|| state.view.contains(&target);

	EdgeDisplay {
		hidden: !touches_hover && !touches_focus,
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::graph_view::store::tests::fixture;

	const W: f64 = 800.0;
	const H: f64 = 600.0;

	#[test]
	fn idle_state_shows_everything_plainly() {
		let store = fixture();
		let state = InteractionState::default();

		for idx in store.node_indices() {
			assert_eq!(node_display(&state, idx), NodeDisplay::default());
		}
		for (src, tgt) in store.edges() {
			assert!(!edge_display(&state, src, tgt).hidden);
		}
	}

	#[test]
	fn hover_highlights_node_and_hides_non_neighbors() {
		let store = fixture();
		let mut state = InteractionState::default();
		let a = store.index_of("a").unwrap();
		let b = store.index_of("b").unwrap();
		let d = store.index_of("d").unwrap();

		state.enter_node(&store, a);

		assert!(node_display(&state, a).highlighted);
		assert!(!node_display(&state, b).hidden);
		// d is not adjacent to a.
		assert!(node_display(&state, d).hidden);

		// Without a pin, edges all stay visible during hover.
		for (src, tgt) in store.edges() {
			assert!(!edge_display(&state, src, tgt).hidden);
		}
	}

	#[test]
	fn pin_restricts_nodes_to_the_view_set() {
		let store = fixture();
		let mut state = InteractionState::default();
		let a = store.index_of("a").unwrap();
		let b = store.index_of("b").unwrap();
		let c = store.index_of("c").unwrap();
		let d = store.index_of("d").unwrap();

		state.click_node(&store, a, W, H);

		assert!(node_display(&state, a).highlighted);
		assert!(node_display(&state, b).force_label);
		assert!(node_display(&state, c).force_label);
		assert!(node_display(&state, d).hidden);
	}

	#[test]
	fn pin_hides_edges_outside_the_focus() {
		let store = fixture();
		let mut state = InteractionState::default();
		let a = store.index_of("a").unwrap();
		let b = store.index_of("b").unwrap();
		let c = store.index_of("c").unwrap();
		let d = store.index_of("d").unwrap();

		// Pin c: view = {a}, so b -> d touches neither pin nor view.
		state.click_node(&store, c, W, H);
		assert!(edge_display(&state, b, d).hidden);
		assert!(!edge_display(&state, a, b).hidden);

		// Hovering d rescues edges touching it.
		state.enter_node(&store, d);
		assert!(!edge_display(&state, b, d).hidden);
	}
}
