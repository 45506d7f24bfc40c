//! Canvas rendering for the graph view.
//!
//! Drawing happens in screen space: node positions are projected through the
//! camera transform up front, and all sizes come from [`ScaledValues`].
//! Rendering uses multiple passes for correct z-ordering:
//! 1. Background (and vignette last, in screen space)
//! 2. Edges with arrowheads
//! 3. Plain nodes, then highlighted nodes on top with their ring and label
//!
//! Visibility and emphasis are decided per entity by the pure reducers; this
//! module only draws what they allow.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::camera::{Camera, ViewTransform};
use super::reducers;
use super::scale::{ScaleConfig, ScaledValues};
use super::state::InteractionState;
use super::store::{GraphStore, NodeMeta};
use super::theme::{Color, Theme};

/// Renders the complete graph view to the canvas.
pub fn render(
	store: &GraphStore,
	state: &InteractionState,
	camera: &Camera,
	ctx: &CanvasRenderingContext2d,
	config: &ScaleConfig,
	theme: &Theme,
	width: f64,
	height: f64,
) {
	let transform = camera.transform(width, height);
	let scale = ScaledValues::new(config, camera.relative_k());

	draw_background(ctx, theme, width, height);
	draw_edges(store, state, ctx, &transform, &scale, theme);
	draw_nodes(store, state, ctx, &transform, &scale, theme);

	if theme.background.vignette > 0.0 {
		draw_vignette(ctx, theme, width, height);
	}
}

fn project(meta: &NodeMeta, t: &ViewTransform) -> (f64, f64) {
	(meta.x * t.k + t.x, meta.y * t.k + t.y)
}

fn draw_background(ctx: &CanvasRenderingContext2d, theme: &Theme, width: f64, height: f64) {
	if theme.background.use_gradient {
		let Ok(gradient) = ctx.create_radial_gradient(
			width / 2.0,
			height / 2.0,
			0.0,
			width / 2.0,
			height / 2.0,
			width.max(height) * 0.8,
		) else {
			ctx.set_fill_style_str(&theme.background.color.to_css());
			ctx.fill_rect(0.0, 0.0, width, height);
			return;
		};

		let _ = gradient.add_color_stop(0.0, &theme.background.color_secondary.to_css());
		let _ = gradient.add_color_stop(1.0, &theme.background.color.to_css());

		#[allow(deprecated)]
		ctx.set_fill_style(&gradient);
	} else {
		ctx.set_fill_style_str(&theme.background.color.to_css());
	}

	ctx.fill_rect(0.0, 0.0, width, height);
}

fn draw_vignette(ctx: &CanvasRenderingContext2d, theme: &Theme, width: f64, height: f64) {
	let Ok(gradient) = ctx.create_radial_gradient(
		width / 2.0,
		height / 2.0,
		width.min(height) * 0.3,
		width / 2.0,
		height / 2.0,
		width.max(height) * 0.7,
	) else {
		return;
	};

	let _ = gradient.add_color_stop(0.0, "rgba(0, 0, 0, 0)");
	let _ = gradient.add_color_stop(
		1.0,
		&format!("rgba(0, 0, 0, {})", theme.background.vignette),
	);

	#[allow(deprecated)]
	ctx.set_fill_style(&gradient);
	ctx.fill_rect(0.0, 0.0, width, height);
}

fn draw_edges(
	store: &GraphStore,
	state: &InteractionState,
	ctx: &CanvasRenderingContext2d,
	transform: &ViewTransform,
	scale: &ScaledValues,
	theme: &Theme,
) {
	let edge_color = theme.edge.color;
	ctx.set_line_width(scale.edge_line_width);
	ctx.set_stroke_style_str(&edge_color.to_css());

	for (src, tgt) in store.edges() {
		if reducers::edge_display(state, src, tgt).hidden {
			continue;
		}

		let (x1, y1) = project(store.node(src), transform);
		let (x2, y2) = project(store.node(tgt), transform);
		let (dx, dy) = (x2 - x1, y2 - y1);
		let dist = (dx * dx + dy * dy).sqrt();
		if dist < 0.001 {
			continue;
		}
		let (ux, uy) = (dx / dist, dy / dist);

		// Stop the line short of both node discs, leaving room for the head.
		ctx.begin_path();
		ctx.move_to(x1 + ux * scale.node_radius, y1 + uy * scale.node_radius);
		ctx.line_to(
			x2 - ux * (scale.node_radius + scale.arrow_size),
			y2 - uy * (scale.node_radius + scale.arrow_size),
		);
		ctx.stroke();

		if !scale.cull_arrows {
			draw_arrowhead(ctx, scale, &edge_color, x2, y2, ux, uy);
		}
	}
}

fn draw_arrowhead(
	ctx: &CanvasRenderingContext2d,
	scale: &ScaledValues,
	color: &Color,
	x2: f64,
	y2: f64,
	ux: f64,
	uy: f64,
) {
	ctx.set_fill_style_str(&color.with_alpha(color.a * scale.arrow_alpha).to_css());

	let (tip_x, tip_y) = (x2 - ux * scale.node_radius, y2 - uy * scale.node_radius);
	let (back_x, back_y) = (tip_x - ux * scale.arrow_size, tip_y - uy * scale.arrow_size);
	let (px, py) = (-uy * scale.arrow_size * 0.5, ux * scale.arrow_size * 0.5);

	ctx.begin_path();
	ctx.move_to(tip_x, tip_y);
	ctx.line_to(back_x + px, back_y + py);
	ctx.line_to(back_x - px, back_y - py);
	ctx.close_path();
	ctx.fill();
}

fn draw_nodes(
	store: &GraphStore,
	state: &InteractionState,
	ctx: &CanvasRenderingContext2d,
	transform: &ViewTransform,
	scale: &ScaledValues,
	theme: &Theme,
) {
	// Pass 1: plain nodes.
	for idx in store.node_indices() {
		let display = reducers::node_display(state, idx);
		if display.hidden || display.highlighted {
			continue;
		}

		let meta = store.node(idx);
		let (x, y) = project(meta, transform);
		draw_node_disc(ctx, meta, scale, theme, x, y, 1.0);

		let label_alpha = if display.force_label {
			1.0
		} else {
			scale.label_alpha
		};
		if label_alpha > 0.05 {
			draw_label(ctx, meta, scale, theme, x, y, 1.0, label_alpha);
		}
	}

	// Pass 2: highlighted nodes on top, with ring and label.
	for idx in store.node_indices() {
		let display = reducers::node_display(state, idx);
		if !display.highlighted {
			continue;
		}

		let meta = store.node(idx);
		let (x, y) = project(meta, transform);
		let radius_mult = 1.25;
		draw_node_disc(ctx, meta, scale, theme, x, y, radius_mult);

		let radius = scale.node_radius * radius_mult * meta.size;
		ctx.begin_path();
		let _ = ctx.arc(x, y, radius + scale.ring_offset, 0.0, 2.0 * PI);
		ctx.set_stroke_style_str(&theme.node.ring_color.to_css());
		ctx.set_line_width(scale.ring_width);
		ctx.stroke();

		draw_label(ctx, meta, scale, theme, x, y, radius_mult, 1.0);
	}
}

fn draw_node_disc(
	ctx: &CanvasRenderingContext2d,
	meta: &NodeMeta,
	scale: &ScaledValues,
	theme: &Theme,
	x: f64,
	y: f64,
	radius_mult: f64,
) {
	let radius = scale.node_radius * radius_mult * meta.size;
	let base_color = meta
		.color
		.as_deref()
		.map(parse_color)
		.unwrap_or(theme.node.default_color);

	if theme.node.use_gradient {
		let Ok(gradient) =
			ctx.create_radial_gradient(x - radius * 0.3, y - radius * 0.3, 0.0, x, y, radius)
		else {
			return;
		};

		let _ = gradient.add_color_stop(0.0, &base_color.lighten(0.4).to_css());
		let _ = gradient.add_color_stop(0.7, &base_color.to_css());
		let _ = gradient.add_color_stop(1.0, &base_color.darken(0.2).to_css());

		ctx.begin_path();
		let _ = ctx.arc(x, y, radius, 0.0, 2.0 * PI);
		#[allow(deprecated)]
		ctx.set_fill_style(&gradient);
		ctx.fill();
	} else {
		ctx.begin_path();
		let _ = ctx.arc(x, y, radius, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(&base_color.to_css());
		ctx.fill();
	}

	if theme.node.border_width > 0.0 {
		ctx.begin_path();
		let _ = ctx.arc(x, y, radius, 0.0, 2.0 * PI);
		ctx.set_stroke_style_str(&theme.node.border_color.to_css());
		ctx.set_line_width(theme.node.border_width);
		ctx.stroke();
	}
}

fn draw_label(
	ctx: &CanvasRenderingContext2d,
	meta: &NodeMeta,
	scale: &ScaledValues,
	theme: &Theme,
	x: f64,
	y: f64,
	radius_mult: f64,
	alpha: f64,
) {
	let radius = scale.node_radius * radius_mult * meta.size;
	let color = theme.label.color;
	ctx.set_fill_style_str(&color.with_alpha(color.a * alpha).to_css());
	ctx.set_font(&scale.label_font);
	let _ = ctx.fill_text(&meta.label, x + radius + 4.0, y + 3.0);
}

/// Parses a CSS color string into a [`Color`].
/// Supports hex (`#RRGGBB`) and `rgb()`/`rgba()` functional notation.
fn parse_color(color_str: &str) -> Color {
	if color_str.starts_with('#') && color_str.len() == 7 {
		let r = u8::from_str_radix(&color_str[1..3], 16).unwrap_or(128);
		let g = u8::from_str_radix(&color_str[3..5], 16).unwrap_or(128);
		let b = u8::from_str_radix(&color_str[5..7], 16).unwrap_or(128);
		Color::rgb(r, g, b)
	} else if color_str.starts_with("rgb") {
		let nums: Vec<&str> = color_str
			.trim_start_matches("rgba(")
			.trim_start_matches("rgb(")
			.trim_end_matches(')')
			.split(',')
			.collect();
		let r = nums
			.first()
			.and_then(|s| s.trim().parse().ok())
			.unwrap_or(128);
		let g = nums
			.get(1)
			.and_then(|s| s.trim().parse().ok())
			.unwrap_or(128);
		let b = nums
			.get(2)
			.and_then(|s| s.trim().parse().ok())
			.unwrap_or(128);
		let a = nums
			.get(3)
			.and_then(|s| s.trim().parse().ok())
			.unwrap_or(1.0);
		Color::rgba(r, g, b, a)
	} else {
		Color::rgb(128, 128, 128)
	}
}
