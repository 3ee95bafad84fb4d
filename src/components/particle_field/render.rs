//! Per-frame drawing pass and the canvas surface seam.
//!
//! Drawing goes through the [`Surface`] trait so the pass itself has no
//! browser dependency: the component hands in a canvas-backed surface, tests
//! hand in a recording one.

use super::particles::ParticleField;
use super::theme::{Color, FieldTheme, LinkStyle};

/// Drawing target for one renderer instance.
pub trait Surface {
	/// Resynchronize the surface to new pixel dimensions. Must take effect
	/// before the next frame draws; resizing to the current dimensions is a
	/// no-op.
	fn set_size(&mut self, width: f64, height: f64);
	/// Current surface width in pixels.
	fn width(&self) -> f64;
	/// Current surface height in pixels.
	fn height(&self) -> f64;
	/// Paint the whole surface with `color`, compositing over the previous
	/// frame's contents.
	fn fill_all(&mut self, color: Color);
	/// Draw a filled circle.
	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color);
	/// Draw a stroked line segment.
	fn stroke_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, width: f64, color: Color);
}

/// Stroke alpha for a pair of particles `distance` apart, or `None` when the
/// pair is beyond the linking distance.
///
/// The alpha fades linearly with distance and clamps at zero, so links near
/// the cutoff dissolve instead of popping out.
pub fn link_alpha(distance: f64, link: &LinkStyle) -> Option<f64> {
	if distance >= link.distance {
		return None;
	}
	Some((link.base_alpha - distance / link.alpha_scale).max(0.0))
}

/// Draw one frame of the field: trailing fade, particle circles, then one
/// link line per nearby pair.
pub fn draw_frame(field: &ParticleField, theme: &FieldTheme, surface: &mut dyn Surface) {
	surface.fill_all(theme.background);

	let particles = field.particles();
	for p in particles {
		surface.fill_circle(p.x, p.y, p.radius, theme.particle_fill);
	}

	for (i, a) in particles.iter().enumerate() {
		for b in &particles[i + 1..] {
			let distance = (a.x - b.x).hypot(a.y - b.y);
			if let Some(alpha) = link_alpha(distance, &theme.link) {
				surface.stroke_line(
					a.x,
					a.y,
					b.x,
					b.y,
					theme.link.width,
					theme.link.color.with_alpha(alpha),
				);
			}
		}
	}
}

/// Surface backed by an HTML canvas 2D context.
pub struct CanvasSurface {
	canvas: web_sys::HtmlCanvasElement,
	ctx: web_sys::CanvasRenderingContext2d,
}

impl CanvasSurface {
	/// Wrap a canvas element. The caller guarantees the element supports a 2D
	/// context; a canvas that cannot produce one is a programming error, not
	/// a runtime condition to recover from.
	pub fn new(canvas: web_sys::HtmlCanvasElement) -> Self {
		use wasm_bindgen::JsCast;

		let ctx: web_sys::CanvasRenderingContext2d = canvas
			.get_context("2d")
			.expect("canvas get_context failed")
			.expect("no 2d context")
			.dyn_into()
			.expect("not a 2d context");

		Self { canvas, ctx }
	}
}

impl Surface for CanvasSurface {
	fn set_size(&mut self, width: f64, height: f64) {
		self.canvas.set_width(width as u32);
		self.canvas.set_height(height as u32);
	}

	fn width(&self) -> f64 {
		self.canvas.width() as f64
	}

	fn height(&self) -> f64 {
		self.canvas.height() as f64
	}

	fn fill_all(&mut self, color: Color) {
		self.ctx.set_fill_style_str(&color.to_css());
		self.ctx.fill_rect(0.0, 0.0, self.width(), self.height());
	}

	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color) {
		self.ctx.set_fill_style_str(&color.to_css());
		self.ctx.begin_path();
		let _ = self.ctx.arc(x, y, radius, 0.0, std::f64::consts::TAU);
		self.ctx.fill();
	}

	fn stroke_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, width: f64, color: Color) {
		self.ctx.set_stroke_style_str(&color.to_css());
		self.ctx.set_line_width(width);
		self.ctx.begin_path();
		self.ctx.move_to(x1, y1);
		self.ctx.line_to(x2, y2);
		self.ctx.stroke();
	}
}

/// One recorded drawing operation.
#[cfg(test)]
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum DrawOp {
	FillAll {
		color: Color,
	},
	Circle {
		x: f64,
		y: f64,
		radius: f64,
		color: Color,
	},
	Line {
		x1: f64,
		y1: f64,
		x2: f64,
		y2: f64,
		width: f64,
		color: Color,
	},
}

/// Test surface that records operations instead of drawing.
#[cfg(test)]
pub(crate) struct RecordingSurface {
	width: f64,
	height: f64,
	pub(crate) ops: Vec<DrawOp>,
}

#[cfg(test)]
impl RecordingSurface {
	pub(crate) fn new(width: f64, height: f64) -> Self {
		Self {
			width,
			height,
			ops: Vec::new(),
		}
	}

	pub(crate) fn lines(&self) -> Vec<&DrawOp> {
		self.ops
			.iter()
			.filter(|op| matches!(op, DrawOp::Line { .. }))
			.collect()
	}
}

#[cfg(test)]
impl Surface for RecordingSurface {
	fn set_size(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}

	fn width(&self) -> f64 {
		self.width
	}

	fn height(&self) -> f64 {
		self.height
	}

	fn fill_all(&mut self, color: Color) {
		self.ops.push(DrawOp::FillAll { color });
	}

	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color) {
		self.ops.push(DrawOp::Circle {
			x,
			y,
			radius,
			color,
		});
	}

	fn stroke_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, width: f64, color: Color) {
		self.ops.push(DrawOp::Line {
			x1,
			y1,
			x2,
			y2,
			width,
			color,
		});
	}
}
