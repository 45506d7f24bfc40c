//! Interactive explorer for pre-laid-out graph snapshots.
//!
//! Renders a serialized directed graph (positions already assigned by an
//! external layout tool) on an HTML canvas with:
//! - Search with autocomplete, selecting on a single exact label match
//! - Hover highlighting of a node and its neighborhood
//! - Click-to-pin with an expandable focused view set
//! - Pan, anchored wheel zoom, and animated camera moves
//!
//! # Example
//!
//! ```ignore
//! use taskgraph_canvas::{GraphExplorer, GraphSnapshot};
//!
//! let data: GraphSnapshot = serde_json::from_str(snapshot_json)?;
//!
//! view! { <GraphExplorer data=data.into() fullscreen=true /> }
//! ```

pub mod camera;
mod component;
pub mod reducers;
mod render;
pub mod scale;
pub mod state;
pub mod store;
pub mod theme;
mod types;

pub use component::GraphExplorer;
pub use theme::Theme;
pub use types::{GraphSnapshot, NodeAttributes, SnapshotEdge, SnapshotNode};
