//! Interaction state: hover, pin-and-focus, and search.
//!
//! The single mutable record behind the view. Event handlers call the
//! methods here, which update the sets and hand back an optional
//! [`CameraCommand`] for the caller to apply; the per-frame reducers then
//! read the state to decide each node's and edge's visual treatment. The
//! state never touches the renderer or the DOM.
//!
//! Invariants held by the methods:
//! - `hovered_neighbors` is `Some` exactly when `hovered_node` is, and then
//!   equals the store's neighbor set of the hovered node.
//! - `view` is non-empty only while `pinned` is non-empty.
//! - `selected_node` and `suggestions` are never both set.

use std::collections::HashSet;

use petgraph::graph::NodeIndex;

use super::camera::{self, CameraCommand};
use super::store::GraphStore;

/// Mutable interaction state driving the per-frame reducers.
#[derive(Clone, Debug, Default)]
pub struct InteractionState {
	/// Node currently under the pointer.
	pub hovered_node: Option<NodeIndex>,
	/// Neighbor set of `hovered_node`, kept in lockstep with it.
	pub hovered_neighbors: Option<HashSet<NodeIndex>>,
	/// Nodes explicitly pinned by click.
	pub pinned: HashSet<NodeIndex>,
	/// Nodes shown alongside the pins (their neighborhoods, expanded by
	/// further clicks).
	pub view: HashSet<NodeIndex>,
	/// Current free-text search query.
	pub search_query: String,
	/// Node selected through an exact search match.
	pub selected_node: Option<NodeIndex>,
	/// Candidate set for autocomplete when the query is not an exact match.
	pub suggestions: Option<HashSet<NodeIndex>>,
}

impl InteractionState {
	/// Whether any node is pinned.
	pub fn has_pin(&self) -> bool {
		!self.pinned.is_empty()
	}

	/// Update the search query and derive selection/suggestion state.
	///
	/// An empty query clears both. Otherwise labels are matched by
	/// case-insensitive substring; a single match whose label equals the
	/// query exactly becomes the selection and yields a command centering
	/// the camera on it, anything else populates the suggestion set.
	pub fn set_search_query(&mut self, store: &GraphStore, query: &str) -> Option<CameraCommand> {
		self.search_query = query.to_string();

		if query.is_empty() {
			self.selected_node = None;
			self.suggestions = None;
			return None;
		}

		let lc_query = query.to_lowercase();
		let matches: Vec<NodeIndex> = store
			.node_indices()
			.filter(|&idx| store.node(idx).label.to_lowercase().contains(&lc_query))
			.collect();

		if let [single] = matches[..]
			&& store.node(single).label == query
		{
			self.selected_node = Some(single);
			self.suggestions = None;
			let meta = store.node(single);
			Some(camera::center_command((meta.x, meta.y)))
		} else {
			self.selected_node = None;
			self.suggestions = Some(matches.into_iter().collect());
			None
		}
	}

	/// Pointer entered a node: record it and its neighbor set.
	pub fn enter_node(&mut self, store: &GraphStore, idx: NodeIndex) {
		self.hovered_node = Some(idx);
		self.hovered_neighbors = Some(store.neighbors(idx));
	}

	/// Pointer left the hovered node.
	pub fn leave_node(&mut self) {
		self.hovered_node = None;
		self.hovered_neighbors = None;
	}

	/// Click state machine over {unpinned, pinned, pinned+expanded}.
	///
	/// - Clicking a pinned node unpins it and clears the view set.
	/// - Clicking a neighbor of a pinned node expands the view set with the
	///   clicked node and its neighbors, keeping the pin.
	/// - Clicking anything else replaces pin and view with the clicked node
	///   and its neighborhood.
	///
	/// When the resulting view set is non-empty, returns a command framing
	/// it: centered on the clicked node, zoomed to the view set's bounding
	/// box within the viewport.
	pub fn click_node(
		&mut self,
		store: &GraphStore,
		idx: NodeIndex,
		width: f64,
		height: f64,
	) -> Option<CameraCommand> {
		if self.pinned.contains(&idx) {
			self.pinned.remove(&idx);
			self.view.clear();
		} else if self.pinned.iter().any(|&p| store.are_neighbors(p, idx)) {
			self.view.insert(idx);
			self.view.extend(store.neighbors(idx));
		} else {
			self.pinned.clear();
			self.view.clear();
			self.pinned.insert(idx);
			self.view.extend(store.neighbors(idx));
		}

		let bbox = store.bounding_box(self.view.iter().copied())?;
		let meta = store.node(idx);
		Some(camera::focus_command(bbox, (meta.x, meta.y), width, height))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::graph_view::store::tests::fixture;

	const W: f64 = 800.0;
	const H: f64 = 600.0;

	#[test]
	fn substring_query_yields_suggestions_without_selection() {
		let store = fixture();
		let mut state = InteractionState::default();

		let command = state.set_search_query(&store, "build");
		assert!(command.is_none());
		assert!(state.selected_node.is_none());
		let expected: HashSet<_> = ["a", "b"]
			.iter()
			.map(|k| store.index_of(k).unwrap())
			.collect();
		assert_eq!(state.suggestions, Some(expected));
	}

	#[test]
	fn single_exact_match_selects_and_centers() {
		let store = fixture();
		let mut state = InteractionState::default();

		let command = state.set_search_query(&store, "build-linux").unwrap();
		assert_eq!(state.selected_node, store.index_of("a"));
		assert!(state.suggestions.is_none());
		// Centers on the node's layout position, keeping the current zoom.
		assert_eq!((command.center_x, command.center_y), (0.0, 0.0));
		assert!(command.k.is_none());
	}

	#[test]
	fn exact_check_is_case_sensitive() {
		let store = fixture();
		let mut state = InteractionState::default();

		// Matching is case-insensitive, so this narrows to one candidate,
		// but the equality check is exact: no selection.
		assert!(state.set_search_query(&store, "BUILD-LINUX").is_none());
		assert!(state.selected_node.is_none());
		assert_eq!(
			state.suggestions,
			Some(HashSet::from([store.index_of("a").unwrap()]))
		);
	}

	#[test]
	fn empty_query_clears_selection_and_suggestions() {
		let store = fixture();
		let mut state = InteractionState::default();

		state.set_search_query(&store, "build-linux");
		assert!(state.selected_node.is_some());
		state.set_search_query(&store, "");
		assert!(state.selected_node.is_none());
		assert!(state.suggestions.is_none());

		state.set_search_query(&store, "build");
		assert!(state.suggestions.is_some());
		state.set_search_query(&store, "");
		assert!(state.suggestions.is_none());
	}

	#[test]
	fn no_match_yields_empty_suggestions() {
		let store = fixture();
		let mut state = InteractionState::default();

		assert!(state.set_search_query(&store, "nonexistent").is_none());
		assert_eq!(state.suggestions, Some(HashSet::new()));
	}

	#[test]
	fn hover_tracks_true_neighbor_set() {
		let store = fixture();
		let mut state = InteractionState::default();
		let b = store.index_of("b").unwrap();

		state.enter_node(&store, b);
		assert_eq!(state.hovered_node, Some(b));
		assert_eq!(state.hovered_neighbors, Some(store.neighbors(b)));

		state.leave_node();
		assert!(state.hovered_node.is_none());
		assert!(state.hovered_neighbors.is_none());
	}

	#[test]
	fn clicking_fresh_node_pins_it_with_its_neighborhood() {
		let store = fixture();
		let mut state = InteractionState::default();
		let a = store.index_of("a").unwrap();
		let b = store.index_of("b").unwrap();
		let c = store.index_of("c").unwrap();

		let command = state.click_node(&store, a, W, H).unwrap();
		assert_eq!(state.pinned, HashSet::from([a]));
		assert_eq!(state.view, HashSet::from([b, c]));
		// Anchored on the clicked node, zoom derived from the view bbox.
		assert_eq!((command.center_x, command.center_y), (0.0, 0.0));
		assert!(command.k.is_some());
	}

	#[test]
	fn clicking_pinned_node_unpins_and_clears_view() {
		let store = fixture();
		let mut state = InteractionState::default();
		let a = store.index_of("a").unwrap();

		state.click_node(&store, a, W, H);
		let command = state.click_node(&store, a, W, H);
		assert!(command.is_none());
		assert!(state.pinned.is_empty());
		assert!(state.view.is_empty());
	}

	#[test]
	fn clicking_neighbor_of_pin_expands_the_view() {
		let store = fixture();
		let mut state = InteractionState::default();
		let a = store.index_of("a").unwrap();
		let b = store.index_of("b").unwrap();
		let c = store.index_of("c").unwrap();
		let d = store.index_of("d").unwrap();

		state.click_node(&store, a, W, H);
		state.click_node(&store, b, W, H);

		// Pin unchanged; view grows by b and b's neighborhood {a, d}.
		assert_eq!(state.pinned, HashSet::from([a]));
		assert_eq!(state.view, HashSet::from([a, b, c, d]));
	}

	#[test]
	fn clicking_non_neighbor_replaces_the_pin() {
		let store = fixture();
		let mut state = InteractionState::default();
		let a = store.index_of("a").unwrap();
		let b = store.index_of("b").unwrap();
		let d = store.index_of("d").unwrap();

		state.click_node(&store, a, W, H);
		// d is not adjacent to a.
		state.click_node(&store, d, W, H);
		assert_eq!(state.pinned, HashSet::from([d]));
		assert_eq!(state.view, store.neighbors(d));
		assert_eq!(state.view, HashSet::from([b]));
	}
}
