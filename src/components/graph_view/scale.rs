//! Zoom-dependent scaling configuration for graph visuals.
//!
//! All drawing happens in screen space (node positions are projected through
//! the camera transform before any canvas call), so sizes here are screen
//! pixels. What varies with zoom is expressed against the *relative* zoom
//! `r` (1.0 = the initial whole-graph fit), since the absolute zoom factor
//! depends on viewport size and the layout's coordinate extent.
//!
//! - [`ScaleBehavior::Constant`]: fixed pixel size at every zoom level.
//! - [`ScaleBehavior::ScaleWithZoom`]: grows and shrinks with zoom.
//! - [`ScaleBehavior::Clamped`]: scales with zoom within pixel bounds, so
//!   elements stay legible zoomed out without ballooning zoomed in.

/// Defines how a visual size responds to the relative zoom level.
#[derive(Clone, Debug)]
pub enum ScaleBehavior {
	/// Constant screen-space size (pixels), unaffected by zoom.
	Constant,
	/// Scales linearly with relative zoom.
	ScaleWithZoom,
	/// Scales with zoom, clamped to min/max pixel bounds.
	Clamped {
		/// Lower pixel bound.
		min: f64,
		/// Upper pixel bound.
		max: f64,
	},
}

impl ScaleBehavior {
	/// Screen-space value for a base size at relative zoom `r`.
	pub fn apply(&self, base: f64, r: f64) -> f64 {
		match self {
			ScaleBehavior::Constant => base,
			ScaleBehavior::ScaleWithZoom => base * r,
			ScaleBehavior::Clamped { min, max } => (base * r).clamp(*min, *max),
		}
	}
}

/// Defines how an alpha/visibility value responds to relative zoom.
#[derive(Clone, Debug)]
pub enum AlphaBehavior {
	/// Constant alpha regardless of zoom.
	Constant,
	/// Fades between zoom thresholds: zero at `zero_k`, full at `full_k`.
	Fade {
		/// Relative zoom at or below which alpha is 0.
		zero_k: f64,
		/// Relative zoom at or above which alpha is 1.
		full_k: f64,
	},
}

impl AlphaBehavior {
	/// Alpha multiplier for relative zoom `r`.
	pub fn apply(&self, r: f64) -> f64 {
		match self {
			AlphaBehavior::Constant => 1.0,
			AlphaBehavior::Fade { zero_k, full_k } => {
				if zero_k == full_k {
					return 1.0;
				}
				((r - zero_k) / (full_k - zero_k)).clamp(0.0, 1.0)
			}
		}
	}
}

/// Configuration for node visual scaling.
#[derive(Clone, Debug)]
pub struct NodeScaleConfig {
	/// Base node radius in pixels.
	pub radius: f64,
	/// How the radius responds to zoom.
	pub radius_behavior: ScaleBehavior,
	/// Hit detection radius in pixels.
	pub hit_radius: f64,
	/// How the hit radius responds to zoom.
	pub hit_behavior: ScaleBehavior,
	/// Label font size in pixels.
	pub label_size: f64,
	/// How non-forced labels fade with zoom.
	pub label_alpha_behavior: AlphaBehavior,
}

/// Configuration for edge visual scaling.
#[derive(Clone, Debug)]
pub struct EdgeScaleConfig {
	/// Base line width in pixels.
	pub line_width: f64,
	/// How the line width responds to zoom.
	pub width_behavior: ScaleBehavior,
}

/// Configuration for arrowhead scaling.
#[derive(Clone, Debug)]
pub struct ArrowScaleConfig {
	/// Base arrowhead size in pixels.
	pub size: f64,
	/// How the arrowhead size responds to zoom.
	pub size_behavior: ScaleBehavior,
	/// How arrowhead alpha responds to zoom.
	pub alpha_behavior: AlphaBehavior,
	/// Minimum alpha to bother drawing arrowheads at all.
	pub cull_alpha: f64,
}

/// Configuration for the highlight ring around pinned/hovered nodes.
#[derive(Clone, Debug)]
pub struct RingScaleConfig {
	/// Ring stroke width in pixels.
	pub width: f64,
	/// Ring offset from the node edge in pixels.
	pub offset: f64,
}

/// Complete scale configuration for all graph elements.
#[derive(Clone, Debug)]
pub struct ScaleConfig {
	/// Node sizing.
	pub node: NodeScaleConfig,
	/// Edge sizing.
	pub edge: EdgeScaleConfig,
	/// Arrowhead sizing.
	pub arrow: ArrowScaleConfig,
	/// Highlight ring sizing.
	pub ring: RingScaleConfig,
}

impl Default for ScaleConfig {
	fn default() -> Self {
		Self {
			node: NodeScaleConfig {
				radius: 4.5,
				radius_behavior: ScaleBehavior::Clamped { min: 3.0, max: 14.0 },
				hit_radius: 10.0,
				hit_behavior: ScaleBehavior::Clamped { min: 8.0, max: 24.0 },
				label_size: 11.0,
				label_alpha_behavior: AlphaBehavior::Fade {
					zero_k: 1.2,
					full_k: 3.0,
				},
			},
			edge: EdgeScaleConfig {
				line_width: 1.2,
				width_behavior: ScaleBehavior::Clamped { min: 0.6, max: 2.5 },
			},
			arrow: ArrowScaleConfig {
				size: 5.0,
				size_behavior: ScaleBehavior::Clamped { min: 3.0, max: 9.0 },
				alpha_behavior: AlphaBehavior::Fade {
					zero_k: 0.4,
					full_k: 1.0,
				},
				cull_alpha: 0.05,
			},
			ring: RingScaleConfig {
				width: 1.5,
				offset: 2.5,
			},
		}
	}
}

/// Pre-computed scale values for one frame at a given relative zoom.
#[derive(Clone, Debug)]
pub struct ScaledValues {
	/// Relative zoom used to derive the values.
	pub r: f64,
	/// Node radius in pixels.
	pub node_radius: f64,
	/// Hit detection radius in pixels.
	pub hit_radius: f64,
	/// Label font shorthand (e.g. "11px sans-serif").
	pub label_font: String,
	/// Alpha multiplier for non-forced labels.
	pub label_alpha: f64,
	/// Edge line width in pixels.
	pub edge_line_width: f64,
	/// Arrowhead size in pixels.
	pub arrow_size: f64,
	/// Arrowhead alpha multiplier.
	pub arrow_alpha: f64,
	/// Whether to skip drawing arrowheads.
	pub cull_arrows: bool,
	/// Highlight ring stroke width in pixels.
	pub ring_width: f64,
	/// Highlight ring offset in pixels.
	pub ring_offset: f64,
}

impl ScaledValues {
	/// Compute scaled values from configuration and relative zoom.
	pub fn new(config: &ScaleConfig, r: f64) -> Self {
		let arrow_alpha = config.arrow.alpha_behavior.apply(r);
		Self {
			r,
			node_radius: config.node.radius_behavior.apply(config.node.radius, r),
			hit_radius: config.node.hit_behavior.apply(config.node.hit_radius, r),
			label_font: format!("{}px sans-serif", config.node.label_size),
			label_alpha: config.node.label_alpha_behavior.apply(r),
			edge_line_width: config.edge.width_behavior.apply(config.edge.line_width, r),
			arrow_size: config.arrow.size_behavior.apply(config.arrow.size, r),
			arrow_alpha,
			cull_arrows: arrow_alpha < config.arrow.cull_alpha,
			ring_width: config.ring.width,
			ring_offset: config.ring.offset,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn behaviors_apply_as_documented() {
		assert_eq!(ScaleBehavior::Constant.apply(5.0, 3.0), 5.0);
		assert_eq!(ScaleBehavior::ScaleWithZoom.apply(5.0, 2.0), 10.0);
		let clamped = ScaleBehavior::Clamped { min: 3.0, max: 9.0 };
		assert_eq!(clamped.apply(5.0, 0.1), 3.0);
		assert_eq!(clamped.apply(5.0, 1.0), 5.0);
		assert_eq!(clamped.apply(5.0, 10.0), 9.0);
	}

	#[test]
	fn alpha_fade_interpolates_between_thresholds() {
		let fade = AlphaBehavior::Fade {
			zero_k: 0.5,
			full_k: 1.5,
		};
		assert_eq!(fade.apply(0.25), 0.0);
		assert_eq!(fade.apply(1.0), 0.5);
		assert_eq!(fade.apply(2.0), 1.0);
		assert_eq!(AlphaBehavior::Constant.apply(0.0), 1.0);
	}

	#[test]
	fn scaled_values_cull_arrows_when_faded_out() {
		let config = ScaleConfig::default();
		let zoomed_out = ScaledValues::new(&config, 0.2);
		assert!(zoomed_out.cull_arrows);
		let fitted = ScaledValues::new(&config, 1.0);
		assert!(!fitted.cull_arrows);
		assert!(fitted.arrow_alpha > zoomed_out.arrow_alpha);
	}
}
