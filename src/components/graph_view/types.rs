//! Serialized graph snapshot types.
//!
//! Matches the graphology export format produced by the external layout tool:
//! nodes carry a `key` plus an attribute bag with a label and pre-computed
//! `x`/`y` coordinates, edges reference node keys by `source`/`target`.
//! Extra attribute fields (e.g. the serializer's raw task payload) are ignored.

use serde::Deserialize;

/// Display and layout attributes attached to a serialized node.
#[derive(Clone, Debug, Deserialize)]
pub struct NodeAttributes {
	/// Human-readable label shown next to the node and matched by search.
	pub label: String,
	/// Layout-assigned x coordinate (world space, unit scale).
	pub x: f64,
	/// Layout-assigned y coordinate (world space, unit scale).
	pub y: f64,
	/// Optional size multiplier (1.0 = normal).
	#[serde(default)]
	pub size: Option<f64>,
	/// Optional CSS color override (e.g. "#054096").
	#[serde(default)]
	pub color: Option<String>,
}

/// A node in the serialized snapshot.
#[derive(Clone, Debug, Deserialize)]
pub struct SnapshotNode {
	/// Unique identifier, referenced by edges.
	pub key: String,
	/// Display and layout attributes.
	pub attributes: NodeAttributes,
}

/// A directed edge in the serialized snapshot.
#[derive(Clone, Debug, Deserialize)]
pub struct SnapshotEdge {
	/// Source node key.
	pub source: String,
	/// Target node key.
	pub target: String,
}

/// Complete snapshot: nodes and edges as exported by the layout tool.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct GraphSnapshot {
	/// All nodes with their attributes.
	pub nodes: Vec<SnapshotNode>,
	/// All directed edges.
	pub edges: Vec<SnapshotEdge>,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_graphology_export() {
		let json = r##"{
			"nodes": [
				{"key": "a1", "attributes": {"label": "build-linux", "x": -1.0, "y": 0.25,
				                             "data": {"kind": "build"}}},
				{"key": "b2", "attributes": {"label": "test", "x": 0.0, "y": -0.5,
				                             "size": 4.0, "color": "#054096"}}
			],
			"edges": [
				{"key": "0", "source": "a1", "target": "b2",
				 "attributes": {"type": "arrow"}}
			]
		}"##;

		let snapshot: GraphSnapshot = serde_json::from_str(json).unwrap();
		assert_eq!(snapshot.nodes.len(), 2);
		assert_eq!(snapshot.edges.len(), 1);
		assert_eq!(snapshot.nodes[0].key, "a1");
		assert_eq!(snapshot.nodes[0].attributes.label, "build-linux");
		assert_eq!(snapshot.nodes[0].attributes.x, -1.0);
		assert!(snapshot.nodes[0].attributes.size.is_none());
		assert_eq!(snapshot.nodes[1].attributes.color.as_deref(), Some("#054096"));
		assert_eq!(snapshot.edges[0].source, "a1");
		assert_eq!(snapshot.edges[0].target, "b2");
	}

	#[test]
	fn empty_snapshot_is_default() {
		let snapshot: GraphSnapshot =
			serde_json::from_str(r#"{"nodes": [], "edges": []}"#).unwrap();
		assert!(snapshot.nodes.is_empty());
		assert!(snapshot.edges.is_empty());
	}
}
