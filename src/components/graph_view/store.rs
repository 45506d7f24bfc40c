//! Immutable graph store built from a parsed snapshot.
//!
//! Wraps a `petgraph` directed graph with key-based lookup and the adjacency
//! queries the interaction layer needs (undirected neighbor sets, bounding
//! boxes of node subsets). Built once at mount, never mutated afterwards;
//! all display-time variation lives in the interaction state instead.

use std::collections::{HashMap, HashSet};

use log::warn;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;

use super::camera::ViewTransform;
use super::types::GraphSnapshot;

/// Per-node metadata resolved from the snapshot attributes.
#[derive(Clone, Debug)]
pub struct NodeMeta {
	/// Snapshot key (unique id).
	pub key: String,
	/// Display label, matched by search.
	pub label: String,
	/// Layout x coordinate (world space).
	pub x: f64,
	/// Layout y coordinate (world space).
	pub y: f64,
	/// Size multiplier (1.0 = normal).
	pub size: f64,
	/// Optional CSS color override.
	pub color: Option<String>,
}

/// Axis-aligned bounding box over node positions in world space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
	/// Smallest x coordinate.
	pub min_x: f64,
	/// Largest x coordinate.
	pub max_x: f64,
	/// Smallest y coordinate.
	pub min_y: f64,
	/// Largest y coordinate.
	pub max_y: f64,
}

impl BoundingBox {
	/// Center point of the box.
	pub fn center(&self) -> (f64, f64) {
		(
			(self.min_x + self.max_x) / 2.0,
			(self.min_y + self.max_y) / 2.0,
		)
	}

	/// Larger of width and height.
	pub fn max_dimension(&self) -> f64 {
		(self.max_x - self.min_x).max(self.max_y - self.min_y)
	}
}

/// Adjacency and attribute storage for the loaded graph.
pub struct GraphStore {
	graph: DiGraph<NodeMeta, ()>,
	by_key: HashMap<String, NodeIndex>,
}

impl GraphStore {
	/// Build the store from a parsed snapshot.
	///
	/// Edges referencing unknown node keys are skipped with a warning rather
	/// than failing the whole load.
	pub fn from_snapshot(snapshot: &GraphSnapshot) -> Self {
		let mut graph = DiGraph::with_capacity(snapshot.nodes.len(), snapshot.edges.len());
		let mut by_key = HashMap::with_capacity(snapshot.nodes.len());

		for node in &snapshot.nodes {
			let idx = graph.add_node(NodeMeta {
				key: node.key.clone(),
				label: node.attributes.label.clone(),
				x: node.attributes.x,
				y: node.attributes.y,
				size: node.attributes.size.unwrap_or(1.0),
				color: node.attributes.color.clone(),
			});
			by_key.insert(node.key.clone(), idx);
		}

		for edge in &snapshot.edges {
			match (by_key.get(&edge.source), by_key.get(&edge.target)) {
				(Some(&src), Some(&tgt)) => {
					graph.add_edge(src, tgt, ());
				}
				_ => {
					warn!(
						"taskgraph-canvas: skipping edge with unknown endpoint {} -> {}",
						edge.source, edge.target
					);
				}
			}
		}

		Self { graph, by_key }
	}

	/// Number of nodes.
	pub fn node_count(&self) -> usize {
		self.graph.node_count()
	}

	/// Number of edges.
	pub fn edge_count(&self) -> usize {
		self.graph.edge_count()
	}

	/// Iterate all node indices.
	pub fn node_indices(&self) -> impl Iterator<Item = NodeIndex> + '_ {
		self.graph.node_indices()
	}

	/// Metadata for a node.
	pub fn node(&self, idx: NodeIndex) -> &NodeMeta {
		&self.graph[idx]
	}

	/// Resolve a snapshot key to its node index.
	pub fn index_of(&self, key: &str) -> Option<NodeIndex> {
		self.by_key.get(key).copied()
	}

	/// Neighbor set of a node, ignoring edge direction.
	pub fn neighbors(&self, idx: NodeIndex) -> HashSet<NodeIndex> {
		self.graph.neighbors_undirected(idx).collect()
	}

	/// Whether two nodes share an edge in either direction.
	pub fn are_neighbors(&self, a: NodeIndex, b: NodeIndex) -> bool {
		self.graph.find_edge_undirected(a, b).is_some()
	}

	/// Iterate all edges as (source, target) pairs.
	pub fn edges(&self) -> impl Iterator<Item = (NodeIndex, NodeIndex)> + '_ {
		self.graph.edge_references().map(|e| (e.source(), e.target()))
	}

	/// Bounding box over the positions of the given nodes.
	///
	/// Returns `None` for an empty set.
	pub fn bounding_box<I>(&self, nodes: I) -> Option<BoundingBox>
	where
		I: IntoIterator<Item = NodeIndex>,
	{
		let mut bbox: Option<BoundingBox> = None;
		for idx in nodes {
			let meta = self.node(idx);
			let b = bbox.get_or_insert(BoundingBox {
				min_x: meta.x,
				max_x: meta.x,
				min_y: meta.y,
				max_y: meta.y,
			});
			b.min_x = b.min_x.min(meta.x);
			b.max_x = b.max_x.max(meta.x);
			b.min_y = b.min_y.min(meta.y);
			b.max_y = b.max_y.max(meta.y);
		}
		bbox
	}

	/// Bounding box over every node in the graph.
	pub fn full_bounding_box(&self) -> Option<BoundingBox> {
		self.bounding_box(self.graph.node_indices())
	}

	/// Topmost node under a screen position, if any.
	///
	/// Positions are projected through the view transform; `hit_radius` is in
	/// screen pixels and is multiplied by the node's size factor. Later nodes
	/// win ties, matching draw order.
	pub fn node_at(
		&self,
		sx: f64,
		sy: f64,
		transform: &ViewTransform,
		hit_radius: f64,
	) -> Option<NodeIndex> {
		let mut found = None;
		for idx in self.graph.node_indices() {
			let meta = self.node(idx);
			let dx = meta.x * transform.k + transform.x - sx;
			let dy = meta.y * transform.k + transform.y - sy;
			if (dx * dx + dy * dy).sqrt() < hit_radius * meta.size {
				found = Some(idx);
			}
		}
		found
	}
}
