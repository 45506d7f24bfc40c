//! Camera owning the pan/zoom view transform and animated moves.
//!
//! The camera tracks a world-space center and a zoom factor `k`, and maps
//! them to the canvas translate/scale transform each frame. Event handlers
//! mutate it synchronously (pan, anchored wheel zoom) or hand it a
//! [`CameraCommand`] to animate over a fixed duration; a new command or any
//! direct manipulation interrupts the animation in progress.

use super::store::BoundingBox;

/// How long camera moves animate, in seconds.
pub const ANIMATE_DURATION: f64 = 0.5;

/// World-space margin added around a focused bounding box.
const FOCUS_MARGIN: f64 = 0.25;

/// Fraction of the viewport the focused bounding box should fill.
const FOCUS_FILL: f64 = 0.8;

/// Margin factor applied when fitting the whole graph at mount.
const FIT_FILL: f64 = 0.9;

/// Zoom range relative to the initial whole-graph fit.
const ZOOM_RANGE: (f64, f64) = (0.1, 10.0);

/// Translate/scale transform applied to the canvas context.
///
/// Screen position = world position * `k` + (`x`, `y`).
#[derive(Clone, Copy, Debug, Default)]
pub struct ViewTransform {
	/// Screen-space x translation.
	pub x: f64,
	/// Screen-space y translation.
	pub y: f64,
	/// Zoom factor.
	pub k: f64,
}

/// A requested camera move: where to center and optionally how far to zoom.
///
/// Produced by the interaction layer; the zoom is left `None` when the
/// current level should be kept (e.g. centering on a search selection).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraCommand {
	/// Target center x (world space).
	pub center_x: f64,
	/// Target center y (world space).
	pub center_y: f64,
	/// Target zoom factor, or `None` to keep the current zoom.
	pub k: Option<f64>,
	/// Animation duration in seconds.
	pub duration: f64,
}

struct Animation {
	from: (f64, f64, f64),
	to: (f64, f64, f64),
	elapsed: f64,
	duration: f64,
}

/// Tracks an in-progress background pan gesture.
#[derive(Clone, Copy, Debug, Default)]
pub struct PanState {
	/// Whether a pan is in progress.
	pub active: bool,
	/// Screen x where the gesture started.
	pub start_x: f64,
	/// Screen y where the gesture started.
	pub start_y: f64,
	/// Camera center when the gesture started.
	pub center_start: (f64, f64),
}

/// Pan/zoom camera with eased animated moves.
pub struct Camera {
	center_x: f64,
	center_y: f64,
	k: f64,
	base_k: f64,
	min_k: f64,
	max_k: f64,
	animation: Option<Animation>,
}

impl Default for Camera {
	fn default() -> Self {
		Self {
			center_x: 0.0,
			center_y: 0.0,
			k: 1.0,
			base_k: 1.0,
			min_k: ZOOM_RANGE.0,
			max_k: ZOOM_RANGE.1,
			animation: None,
		}
	}
}

impl Camera {
	/// Frame the given bounding box in a viewport, and anchor the zoom range
	/// to the resulting fit level.
	pub fn fit(&mut self, bbox: BoundingBox, width: f64, height: f64) {
		let (cx, cy) = bbox.center();
		let k = fit_zoom(bbox.max_dimension(), width, height, FIT_FILL);
		self.center_x = cx;
		self.center_y = cy;
		self.k = k;
		self.base_k = k;
		self.min_k = k * ZOOM_RANGE.0;
		self.max_k = k * ZOOM_RANGE.1;
		self.animation = None;
	}

	/// Current world-space center.
	pub fn center(&self) -> (f64, f64) {
		(self.center_x, self.center_y)
	}

	/// Current zoom factor.
	pub fn k(&self) -> f64 {
		self.k
	}

	/// Zoom relative to the initial whole-graph fit (1.0 right after
	/// [`Camera::fit`]). Visual scaling keys off this rather than the
	/// absolute factor, which depends on viewport and layout extent.
	pub fn relative_k(&self) -> f64 {
		self.k / self.base_k
	}

	/// Move the center directly (pan). Interrupts any animation.
	pub fn set_center(&mut self, cx: f64, cy: f64) {
		self.center_x = cx;
		self.center_y = cy;
		self.animation = None;
	}

	/// Zoom by `factor`, keeping the world point under the given screen
	/// position fixed. Interrupts any animation.
	pub fn zoom_at(&mut self, sx: f64, sy: f64, factor: f64, width: f64, height: f64) {
		let (wx, wy) = self.screen_to_world(sx, sy, width, height);
		self.k = (self.k * factor).clamp(self.min_k, self.max_k);
		// Re-solve the center so (wx, wy) stays under (sx, sy).
		self.center_x = wx - (sx - width / 2.0) / self.k;
		self.center_y = wy - (sy - height / 2.0) / self.k;
		self.animation = None;
	}

	/// Start an animated move. Replaces any animation in progress.
	pub fn animate(&mut self, command: CameraCommand) {
		let target_k = command.k.unwrap_or(self.k).clamp(self.min_k, self.max_k);
		self.animation = Some(Animation {
			from: (self.center_x, self.center_y, self.k),
			to: (command.center_x, command.center_y, target_k),
			elapsed: 0.0,
			duration: command.duration.max(f64::EPSILON),
		});
	}

	/// Advance the animation by `dt` seconds. Returns true while animating.
	pub fn tick(&mut self, dt: f64) -> bool {
		let Some(anim) = &mut self.animation else {
			return false;
		};
		anim.elapsed += dt;
		let t = smooth_step((anim.elapsed / anim.duration).clamp(0.0, 1.0));
		self.center_x = anim.from.0 + (anim.to.0 - anim.from.0) * t;
		self.center_y = anim.from.1 + (anim.to.1 - anim.from.1) * t;
		self.k = anim.from.2 + (anim.to.2 - anim.from.2) * t;
		if anim.elapsed >= anim.duration {
			self.animation = None;
			false
		} else {
			true
		}
	}

	/// Canvas transform for the current camera position.
	pub fn transform(&self, width: f64, height: f64) -> ViewTransform {
		ViewTransform {
			x: width / 2.0 - self.center_x * self.k,
			y: height / 2.0 - self.center_y * self.k,
			k: self.k,
		}
	}

	/// Map a screen position back to world space.
	pub fn screen_to_world(&self, sx: f64, sy: f64, width: f64, height: f64) -> (f64, f64) {
		let t = self.transform(width, height);
		((sx - t.x) / t.k, (sy - t.y) / t.k)
	}
}

/// Camera command framing a focused view set.
///
/// Centers on the anchor node (so the clicked node stays visually anchored)
/// and derives the zoom from the view set's bounding box versus the smaller
/// viewport dimension, with a fixed world-space margin.
pub fn focus_command(
	bbox: BoundingBox,
	anchor: (f64, f64),
	width: f64,
	height: f64,
) -> CameraCommand {
	CameraCommand {
		center_x: anchor.0,
		center_y: anchor.1,
		k: Some(fit_zoom(bbox.max_dimension(), width, height, FOCUS_FILL)),
		duration: ANIMATE_DURATION,
	}
}

/// Camera command centering on a single node at the current zoom.
pub fn center_command(position: (f64, f64)) -> CameraCommand {
	CameraCommand {
		center_x: position.0,
		center_y: position.1,
		k: None,
		duration: ANIMATE_DURATION,
	}
}

fn fit_zoom(max_dimension: f64, width: f64, height: f64, fill: f64) -> f64 {
	width.min(height) / (max_dimension + FOCUS_MARGIN) * fill
}

fn smooth_step(t: f64) -> f64 {
	t * t * (3.0 - 2.0 * t)
}

#[cfg(test)]
mod tests {
	use super::*;

	const W: f64 = 800.0;
	const H: f64 = 600.0;

	fn bbox(min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> BoundingBox {
		BoundingBox {
			min_x,
			max_x,
			min_y,
			max_y,
		}
	}

	#[test]
	fn fit_centers_and_frames_the_box() {
		let mut camera = Camera::default();
		camera.fit(bbox(-1.0, 1.0, -1.0, 1.0), W, H);

		assert_eq!(camera.center(), (0.0, 0.0));
		// Smaller viewport dimension over (box + margin), scaled by fill.
		let expected_k = H / 2.25 * 0.9;
		assert!((camera.k() - expected_k).abs() < 1e-9);
		assert_eq!(camera.relative_k(), 1.0);

		// The box center lands at the viewport center.
		let t = camera.transform(W, H);
		assert!((t.x - W / 2.0).abs() < 1e-9);
		assert!((t.y - H / 2.0).abs() < 1e-9);
	}

	#[test]
	fn zoom_at_keeps_anchor_fixed() {
		let mut camera = Camera::default();
		camera.fit(bbox(-1.0, 1.0, -1.0, 1.0), W, H);

		let (sx, sy) = (200.0, 150.0);
		let before = camera.screen_to_world(sx, sy, W, H);
		camera.zoom_at(sx, sy, 1.1, W, H);
		let after = camera.screen_to_world(sx, sy, W, H);

		assert!((before.0 - after.0).abs() < 1e-9);
		assert!((before.1 - after.1).abs() < 1e-9);
	}

	#[test]
	fn zoom_is_clamped_relative_to_fit() {
		let mut camera = Camera::default();
		camera.fit(bbox(-1.0, 1.0, -1.0, 1.0), W, H);
		let base_k = camera.k();

		for _ in 0..200 {
			camera.zoom_at(W / 2.0, H / 2.0, 1.5, W, H);
		}
		assert!((camera.k() - base_k * 10.0).abs() < 1e-9);

		for _ in 0..200 {
			camera.zoom_at(W / 2.0, H / 2.0, 0.5, W, H);
		}
		assert!((camera.k() - base_k * 0.1).abs() < 1e-9);
	}

	#[test]
	fn animation_reaches_target_and_finishes() {
		let mut camera = Camera::default();
		camera.fit(bbox(-1.0, 1.0, -1.0, 1.0), W, H);
		let start_k = camera.k();

		camera.animate(CameraCommand {
			center_x: 3.0,
			center_y: -2.0,
			k: None,
			duration: 0.5,
		});

		assert!(camera.tick(0.25));
		// Mid-flight: somewhere strictly between start and target.
		let (cx, _) = camera.center();
		assert!(cx > 0.0 && cx < 3.0);

		assert!(!camera.tick(0.25));
		assert_eq!(camera.center(), (3.0, -2.0));
		assert_eq!(camera.k(), start_k);
		assert!(!camera.tick(0.016));
	}

	#[test]
	fn pan_interrupts_animation() {
		let mut camera = Camera::default();
		camera.fit(bbox(-1.0, 1.0, -1.0, 1.0), W, H);
		camera.animate(center_command((5.0, 5.0)));
		camera.set_center(1.0, 1.0);
		assert!(!camera.tick(0.016));
		assert_eq!(camera.center(), (1.0, 1.0));
	}

	#[test]
	fn focus_command_anchors_on_clicked_node() {
		let command = focus_command(bbox(0.0, 2.0, 0.0, 1.0), (2.0, 0.5), W, H);
		assert_eq!(command.center_x, 2.0);
		assert_eq!(command.center_y, 0.5);
		let expected_k = H / 2.25 * 0.8;
		assert!((command.k.unwrap() - expected_k).abs() < 1e-9);
		assert_eq!(command.duration, ANIMATE_DURATION);
	}
}
