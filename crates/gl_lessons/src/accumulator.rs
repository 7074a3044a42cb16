// Copyright (C) 2022 the ITK authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

//! Turns a stream of clicks into colored triangles.
//!
//! Every third click closes a triangle out of the last three clicked points
//! and gives it a fresh color. Committed triangles are append-only: they are
//! never moved, recolored or dropped for the lifetime of the accumulator.

use crate::{
	color::{ColorSource, RandomColors},
	geometry::{Color, Point, Triangle},
};

#[cfg(test)]
mod test;

/// Receiver of primary button presses, in window pixel coordinates.
pub trait ClickHandler {
	fn on_click(&mut self, point: Point);
}

/// One triangle and the color it should be filled with.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DrawUnit {
	pub vertices: [Point; 3],
	pub color: Color,
}

pub struct ClickAccumulator<C: ColorSource = RandomColors> {
	pending: Vec<Point>,
	triangles: Vec<Triangle>,
	colors: Vec<Color>,
	color_source: C,
}

impl ClickAccumulator<RandomColors> {
	pub fn new() -> Self {
		Self::with_color_source(RandomColors::new())
	}
}

impl Default for ClickAccumulator<RandomColors> {
	fn default() -> Self {
		Self::new()
	}
}

impl<C: ColorSource> ClickAccumulator<C> {
	pub fn with_color_source(color_source: C) -> Self {
		Self {
			pending: Vec::with_capacity(3),
			triangles: Vec::new(),
			colors: Vec::new(),
			color_source,
		}
	}

	/// Points clicked since the last triangle was committed (at most 2).
	#[inline]
	pub fn pending(&self) -> &[Point] {
		&self.pending
	}

	#[inline]
	pub fn triangles(&self) -> &[Triangle] {
		&self.triangles
	}

	/// One color per committed triangle, index aligned with `triangles`.
	#[inline]
	pub fn colors(&self) -> &[Color] {
		&self.colors
	}

	/// Committed triangles as a flat vertex list, three points per triangle.
	///
	/// Only ever grows, so a GPU copy can be kept in sync by uploading
	/// the tail it has not seen yet.
	#[inline]
	pub fn vertices(&self) -> &[Point] {
		Triangle::flatten(&self.triangles)
	}

	#[inline]
	pub fn triangle_count(&self) -> usize {
		self.triangles.len()
	}

	/// Committed triangles in commit order, which is also draw order.
	pub fn draw_units(&self) -> impl ExactSizeIterator<Item = DrawUnit> + '_ {
		self.triangles.iter().zip(&self.colors).map(|(triangle, color)| DrawUnit {
			vertices: triangle.0,
			color: *color,
		})
	}
}

impl<C: ColorSource> ClickHandler for ClickAccumulator<C> {
	fn on_click(&mut self, point: Point) {
		self.pending.push(point);

		if let [a, b, c] = self.pending[..] {
			let color = self.color_source.next_color();
			log::debug!(
				"triangle #{} committed: {a:?} {b:?} {c:?} color {color:?}",
				self.triangles.len()
			);

			self.triangles.push(Triangle([a, b, c]));
			self.colors.push(color);
			self.pending.clear();
		}
	}
}
