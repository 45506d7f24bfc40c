//! Visual theming for the graph view.
//!
//! Color type plus style structs for background, edges, nodes, and labels.
//! The default theme mirrors the layout tool's export conventions: light
//! background, dark edges, deep-blue nodes.

/// RGBA color representation.
#[derive(Clone, Copy, Debug)]
pub struct Color {
	/// Red channel.
	pub r: u8,
	/// Green channel.
	pub g: u8,
	/// Blue channel.
	pub b: u8,
	/// Alpha, 0.0..1.0.
	pub a: f64,
}

impl Color {
	/// Opaque color from RGB channels.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	/// Color from RGB channels and alpha.
	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	/// Same color with a different alpha.
	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// Lighten by a factor (0.0 = unchanged, 1.0 = white).
	pub fn lighten(self, factor: f64) -> Self {
		let f = factor.clamp(0.0, 1.0);
		Self {
			r: (self.r as f64 + (255.0 - self.r as f64) * f) as u8,
			g: (self.g as f64 + (255.0 - self.g as f64) * f) as u8,
			b: (self.b as f64 + (255.0 - self.b as f64) * f) as u8,
			a: self.a,
		}
	}

	/// Darken by a factor (0.0 = unchanged, 1.0 = black).
	pub fn darken(self, factor: f64) -> Self {
		let f = 1.0 - factor.clamp(0.0, 1.0);
		Self {
			r: (self.r as f64 * f) as u8,
			g: (self.g as f64 * f) as u8,
			b: (self.b as f64 * f) as u8,
			a: self.a,
		}
	}

	/// CSS string, hex when fully opaque.
	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Background style configuration.
#[derive(Clone, Debug)]
pub struct BackgroundStyle {
	/// Primary background color.
	pub color: Color,
	/// Secondary color for gradients.
	pub color_secondary: Color,
	/// Whether to use a radial gradient.
	pub use_gradient: bool,
	/// Vignette intensity (0.0 = none, 1.0 = strong).
	pub vignette: f64,
}

/// Edge visual style.
#[derive(Clone, Debug)]
pub struct EdgeStyle {
	/// Edge and arrowhead color.
	pub color: Color,
}

/// Node visual style.
#[derive(Clone, Debug)]
pub struct NodeStyle {
	/// Fill for nodes without a snapshot color override.
	pub default_color: Color,
	/// Whether nodes get an inner shading gradient.
	pub use_gradient: bool,
	/// Border stroke width in screen pixels (0 = no border).
	pub border_width: f64,
	/// Border color.
	pub border_color: Color,
	/// Color of the ring drawn around highlighted nodes.
	pub ring_color: Color,
}

/// Label visual style.
#[derive(Clone, Debug)]
pub struct LabelStyle {
	/// Label text color.
	pub color: Color,
}

/// Complete visual theme.
#[derive(Clone, Debug)]
pub struct Theme {
	/// Theme identifier.
	pub name: &'static str,
	/// Background style.
	pub background: BackgroundStyle,
	/// Edge style.
	pub edge: EdgeStyle,
	/// Node style.
	pub node: NodeStyle,
	/// Label style.
	pub label: LabelStyle,
}

impl Theme {
	/// Light theme matching the layout tool's export conventions.
	pub fn paper() -> Self {
		Self {
			name: "paper",
			background: BackgroundStyle {
				color: Color::rgb(250, 250, 250),
				color_secondary: Color::rgb(255, 255, 255),
				use_gradient: true,
				vignette: 0.0,
			},
			edge: EdgeStyle {
				color: Color::rgba(0, 0, 0, 0.55),
			},
			node: NodeStyle {
				default_color: Color::rgb(0x05, 0x40, 0x96),
				use_gradient: false,
				border_width: 1.0,
				border_color: Color::rgb(255, 255, 255),
				ring_color: Color::rgb(40, 40, 40),
			},
			label: LabelStyle {
				color: Color::rgb(30, 30, 30),
			},
		}
	}

	/// Dark alternative.
	pub fn midnight() -> Self {
		Self {
			name: "midnight",
			background: BackgroundStyle {
				color: Color::rgb(18, 20, 28),
				color_secondary: Color::rgb(25, 28, 38),
				use_gradient: true,
				vignette: 0.2,
			},
			edge: EdgeStyle {
				color: Color::rgba(140, 160, 180, 0.5),
			},
			node: NodeStyle {
				default_color: Color::rgb(108, 142, 173),
				use_gradient: true,
				border_width: 0.0,
				border_color: Color::rgba(255, 255, 255, 0.0),
				ring_color: Color::rgb(255, 255, 255),
			},
			label: LabelStyle {
				color: Color::rgba(255, 255, 255, 0.85),
			},
		}
	}
}

impl Default for Theme {
	fn default() -> Self {
		Self::paper()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn css_formatting() {
		assert_eq!(Color::rgb(5, 64, 150).to_css(), "#054096");
		assert_eq!(
			Color::rgba(0, 0, 0, 0.55).to_css(),
			"rgba(0, 0, 0, 0.55)"
		);
		assert_eq!(Color::rgb(5, 64, 150).with_alpha(0.5).a, 0.5);
	}

	#[test]
	fn lighten_and_darken_clamp() {
		let c = Color::rgb(100, 100, 100);
		assert_eq!(c.lighten(1.0).r, 255);
		assert_eq!(c.darken(1.0).r, 0);
		assert_eq!(c.lighten(0.0).r, 100);
	}
}
