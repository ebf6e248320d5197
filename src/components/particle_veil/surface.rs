//! Drawing target abstraction.
//!
//! Simulation code draws through [`Surface`] so it never touches the DOM
//! directly. The browser implementation forwards to a 2-D canvas context.

use std::f64::consts::{PI, TAU};

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::cursor::Shape;
use super::palette::Paint;

/// Logical drawing surfaces and their element ids.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SurfaceId {
	/// Ambient field and proximity lines.
	Ambient,
	/// Cursor confetti and click ripples.
	Cursor,
}

impl SurfaceId {
	pub fn element_id(self) -> &'static str {
		match self {
			SurfaceId::Ambient => "particle-canvas",
			SurfaceId::Cursor => "cursor-particle-canvas",
		}
	}
}

/// Why a canvas could not be prepared for drawing.
#[derive(Debug, Error)]
pub enum SurfaceError {
	#[error("2d context lookup failed: {0}")]
	ContextLookup(String),
	#[error("canvas has no 2d context")]
	ContextUnavailable,
	#[error("2d context has unexpected type")]
	WrongContextType,
}

impl From<JsValue> for SurfaceError {
	fn from(value: JsValue) -> Self {
		SurfaceError::ContextLookup(format!("{value:?}"))
	}
}

/// Acquires the 2-D rendering context of `canvas`.
pub fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, SurfaceError> {
	canvas
		.get_context("2d")?
		.ok_or(SurfaceError::ContextUnavailable)?
		.dyn_into()
		.map_err(|_| SurfaceError::WrongContextType)
}

/// Minimal set of raster operations the particle layers need.
pub trait Surface {
	/// Clears the whole `width` x `height` area to transparent.
	fn clear(&mut self, width: f64, height: f64);

	fn fill_disc(&mut self, x: f64, y: f64, radius: f64, paint: &Paint);

	fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), width: f64, paint: &Paint);

	fn stroke_ring(&mut self, x: f64, y: f64, radius: f64, width: f64, paint: &Paint);

	/// Fills `shape` of size `radius` centered at `(x, y)` and rotated by `angle` radians.
	fn fill_shape(&mut self, shape: Shape, x: f64, y: f64, angle: f64, radius: f64, paint: &Paint);
}

impl Surface for CanvasRenderingContext2d {
	fn clear(&mut self, width: f64, height: f64) {
		self.clear_rect(0.0, 0.0, width, height);
	}

	fn fill_disc(&mut self, x: f64, y: f64, radius: f64, paint: &Paint) {
		self.begin_path();
		let _ = self.arc(x, y, radius, 0.0, PI * 2.0);
		self.set_fill_style_str(&paint.to_css());
		self.fill();
	}

	fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), width: f64, paint: &Paint) {
		self.set_stroke_style_str(&paint.to_css());
		self.set_line_width(width);
		self.begin_path();
		self.move_to(from.0, from.1);
		self.line_to(to.0, to.1);
		self.stroke();
	}

	fn stroke_ring(&mut self, x: f64, y: f64, radius: f64, width: f64, paint: &Paint) {
		self.begin_path();
		let _ = self.arc(x, y, radius, 0.0, PI * 2.0);
		self.set_stroke_style_str(&paint.to_css());
		self.set_line_width(width);
		self.stroke();
	}

	fn fill_shape(&mut self, shape: Shape, x: f64, y: f64, angle: f64, radius: f64, paint: &Paint) {
		self.save();
		self.set_fill_style_str(&paint.to_css());
		let _ = self.translate(x, y);
		let _ = self.rotate(angle);
		self.begin_path();
		trace_shape(self, shape, radius);
		self.fill();
		self.restore();
	}
}

/// Adds the outline of `shape` around the origin to the current path.
fn trace_shape(ctx: &CanvasRenderingContext2d, shape: Shape, radius: f64) {
	match shape {
		Shape::Disc => {
			let _ = ctx.arc(0.0, 0.0, radius, 0.0, TAU);
		}
		Shape::Square => {
			ctx.rect(-radius, -radius, radius * 2.0, radius * 2.0);
		}
		Shape::Triangle => {
			let [first, rest @ ..] = Shape::triangle_vertices(radius);
			ctx.move_to(first.0, first.1);
			for (vx, vy) in rest {
				ctx.line_to(vx, vy);
			}
			ctx.close_path();
		}
	}
}

#[cfg(test)]
pub(crate) mod testing {
	use super::*;

	/// One recorded draw call.
	#[derive(Clone, Debug, PartialEq)]
	pub enum DrawOp {
		Clear {
			width: f64,
			height: f64,
		},
		Disc {
			x: f64,
			y: f64,
			radius: f64,
			paint: Paint,
		},
		Line {
			from: (f64, f64),
			to: (f64, f64),
			width: f64,
			paint: Paint,
		},
		Ring {
			x: f64,
			y: f64,
			radius: f64,
			width: f64,
			paint: Paint,
		},
		Shape {
			shape: Shape,
			x: f64,
			y: f64,
			angle: f64,
			radius: f64,
			paint: Paint,
		},
	}

	/// Surface that records every call for later inspection.
	#[derive(Debug, Default)]
	pub struct Recorder {
		pub ops: Vec<DrawOp>,
	}

	impl Recorder {
		pub fn lines(&self) -> impl Iterator<Item = &DrawOp> {
			self.ops.iter().filter(|op| matches!(op, DrawOp::Line { .. }))
		}

		pub fn discs(&self) -> impl Iterator<Item = &DrawOp> {
			self.ops.iter().filter(|op| matches!(op, DrawOp::Disc { .. }))
		}
	}

	impl Surface for Recorder {
		fn clear(&mut self, width: f64, height: f64) {
			self.ops.push(DrawOp::Clear { width, height });
		}

		fn fill_disc(&mut self, x: f64, y: f64, radius: f64, paint: &Paint) {
			self.ops.push(DrawOp::Disc {
				x,
				y,
				radius,
				paint: *paint,
			});
		}

		fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), width: f64, paint: &Paint) {
			self.ops.push(DrawOp::Line {
				from,
				to,
				width,
				paint: *paint,
			});
		}

		fn stroke_ring(&mut self, x: f64, y: f64, radius: f64, width: f64, paint: &Paint) {
			self.ops.push(DrawOp::Ring {
				x,
				y,
				radius,
				width,
				paint: *paint,
			});
		}

		fn fill_shape(&mut self, shape: Shape, x: f64, y: f64, angle: f64, radius: f64, paint: &Paint) {
			self.ops.push(DrawOp::Shape {
				shape,
				x,
				y,
				angle,
				radius,
				paint: *paint,
			});
		}
	}
}
