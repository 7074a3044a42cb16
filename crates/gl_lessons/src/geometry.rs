// Copyright (C) 2022 the ITK authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

use std::{f32::consts::TAU, ops::Range};

use crate::upload::{Vertex, VertexAttribute};

#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub struct Point {
	pub x: f32,
	pub y: f32,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub struct Color {
	pub r: f32,
	pub g: f32,
	pub b: f32,
	pub a: f32,
}

/// Three points in the order they should be rasterized.
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub struct Triangle(pub [Point; 3]);

#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub struct ColoredVertex {
	pub position: Point,
	pub color: [f32; 3],
}

impl Point {
	#[inline]
	pub const fn new(x: f32, y: f32) -> Self {
		Self { x, y }
	}
}

impl From<[f32; 2]> for Point {
	fn from([x, y]: [f32; 2]) -> Self {
		Self { x, y }
	}
}

impl Color {
	pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
	pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
	pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);

	#[inline]
	pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	#[inline]
	pub fn to_array(self) -> [f32; 4] {
		[self.r, self.g, self.b, self.a]
	}
}

impl Triangle {
	/// View a list of triangles as the flat vertex list the GPU consumes.
	#[inline]
	pub fn flatten(triangles: &[Triangle]) -> &[Point] {
		bytemuck::cast_slice(triangles)
	}
}

impl ColoredVertex {
	pub const fn new(x: f32, y: f32, color: [f32; 3]) -> Self {
		Self {
			position: Point::new(x, y),
			color,
		}
	}
}

impl Vertex for Point {
	const VERTEX_ATTRIBUTES: &'static [VertexAttribute] = &[VertexAttribute::new::<f32>(2)];
}

impl Vertex for ColoredVertex {
	const VERTEX_ATTRIBUTES: &'static [VertexAttribute] =
		&[VertexAttribute::new::<f32>(2), VertexAttribute::new::<f32>(3)];
}

/// Approximate a filled circle with a fan of `segments` triangles.
///
/// Every triangle starts at `center`; consecutive triangles share an edge.
pub fn circle_fan(center: Point, radius: f32, segments: usize) -> Vec<Triangle> {
	let rim = |i: usize| {
		let theta = TAU * i as f32 / segments as f32;
		Point::new(center.x + radius * theta.cos(), center.y + radius * theta.sin())
	};

	(0..segments).map(|i| Triangle([center, rim(i), rim(i + 1)])).collect()
}

/// Axis aligned rectangle spanning `min` to `max`, as two triangles.
pub fn quad(min: Point, max: Point) -> [Triangle; 2] {
	let (x0, y0, x1, y1) = (min.x, min.y, max.x, max.y);
	[
		Triangle([Point::new(x0, y0), Point::new(x1, y0), Point::new(x1, y1)]),
		Triangle([Point::new(x0, y0), Point::new(x1, y1), Point::new(x0, y1)]),
	]
}

/// Flat-colored parts packed into a single vertex list.
///
/// Parts keep the order they were pushed in, which is also the order
/// they are meant to be drawn in.
#[derive(Debug, Default)]
pub struct Shapes {
	vertices: Vec<Point>,
	parts: Vec<(Range<usize>, Color)>,
}

impl Shapes {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn push(&mut self, triangles: &[Triangle], color: Color) -> &mut Self {
		let start = self.vertices.len();
		self.vertices.extend_from_slice(Triangle::flatten(triangles));
		self.parts.push((start..self.vertices.len(), color));
		self
	}

	pub fn vertices(&self) -> &[Point] {
		&self.vertices
	}

	pub fn parts(&self) -> &[(Range<usize>, Color)] {
		&self.parts
	}
}

#[cfg(test)]
mod test {
	use super::*;

	fn close(a: Point, b: Point) -> bool {
		(a.x - b.x).abs() < 1e-5 && (a.y - b.y).abs() < 1e-5
	}

	#[test]
	fn circle_fan_closes() {
		let center = Point::new(0.25, -0.5);
		let fan = circle_fan(center, 0.5, 100);

		assert_eq!(fan.len(), 100);
		assert!(fan.iter().all(|t| t.0[0] == center));

		for pair in fan.windows(2) {
			assert_eq!(pair[0].0[2], pair[1].0[1]);
		}

		// last rim point wraps back around to the first
		assert!(close(fan[99].0[2], fan[0].0[1]));

		for t in &fan {
			for p in &t.0[1..] {
				let distance = ((p.x - center.x).powi(2) + (p.y - center.y).powi(2)).sqrt();
				assert!((distance - 0.5).abs() < 1e-5);
			}
		}
	}

	#[test]
	fn quad_covers_corners() {
		let [a, b] = quad(Point::new(-1.0, -0.5), Point::new(1.0, 0.5));
		let corners = [a.0, b.0].concat();

		for corner in [(-1.0, -0.5), (1.0, -0.5), (1.0, 0.5), (-1.0, 0.5)] {
			assert!(corners.contains(&Point::new(corner.0, corner.1)));
		}

		// both halves share the diagonal
		assert_eq!(a.0[0], b.0[0]);
		assert_eq!(a.0[2], b.0[1]);
	}

	#[test]
	fn flatten_keeps_order() {
		let triangles = [
			Triangle([Point::new(0.0, 1.0), Point::new(2.0, 3.0), Point::new(4.0, 5.0)]),
			Triangle([Point::new(6.0, 7.0), Point::new(8.0, 9.0), Point::new(10.0, 11.0)]),
		];

		let flat = Triangle::flatten(&triangles);
		assert_eq!(flat.len(), 6);
		assert_eq!(flat[3], Point::new(6.0, 7.0));
		assert_eq!(flat[5], Point::new(10.0, 11.0));
	}

	#[test]
	fn shapes_track_ranges() {
		let mut shapes = Shapes::new();
		shapes
			.push(&quad(Point::new(0.0, 0.0), Point::new(1.0, 1.0)), Color::BLACK)
			.push(&circle_fan(Point::default(), 1.0, 3), Color::RED);

		assert_eq!(shapes.vertices().len(), 15);
		assert_eq!(shapes.parts(), &[(0..6, Color::BLACK), (6..15, Color::RED)]);
	}
}
