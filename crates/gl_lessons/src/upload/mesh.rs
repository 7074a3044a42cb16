// Copyright (C) 2022 the ITK authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

use std::ops::Range;

use gl::types::{GLenum, GLint, GLsizei, GLuint};

use super::{attribute, GpuBuffer, Vertex};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
	Triangles,
	Points,
}

impl Primitive {
	#[inline]
	pub fn gl_mode(self) -> GLenum {
		match self {
			Self::Triangles => gl::TRIANGLES,
			Self::Points => gl::POINTS,
		}
	}
}

/// A vertex array object and the single vertex buffer feeding it.
pub struct Mesh<V: Vertex> {
	vao: GLuint,
	vertices: GpuBuffer<V>,
}

impl<V: Vertex> Mesh<V> {
	/// GL objects are created lazily, on the first flush and bind.
	pub fn new() -> Self {
		Self {
			vao: 0,
			vertices: GpuBuffer::new(gl::ARRAY_BUFFER),
		}
	}

	pub fn from_vertices(vertices: &[V]) -> Self {
		let mut mesh = Self::new();
		mesh.write(0, vertices);
		mesh
	}

	#[inline]
	pub fn len(&self) -> usize {
		self.vertices.len()
	}

	#[inline]
	pub fn is_empty(&self) -> bool {
		self.vertices.is_empty()
	}

	#[inline]
	pub fn vertices(&self) -> &[V] {
		self.vertices.as_slice()
	}

	#[inline]
	pub fn write(&mut self, offset: usize, vertices: &[V]) {
		self.vertices.write(offset, vertices);
	}

	/// Append the part of `source` past this mesh's current length.
	///
	/// Only valid for sources that grow by appending; earlier vertices
	/// are assumed to be unchanged.
	pub fn extend_from(&mut self, source: &[V]) {
		let len = self.len();
		if let Some(tail) = source.get(len..) {
			self.write(len, tail);
		}
	}

	/// Upload pending writes
	///
	/// # SAFETY
	/// * must be called from GL thread
	pub unsafe fn flush(&mut self) {
		self.vertices.begin_flush();
	}

	/// Bind VAO and VBO, (re)pointing attributes at the buffer if it changed
	///
	/// Returns false when there is nothing on the GPU to bind yet.
	///
	/// # SAFETY
	/// * must be called from GL thread
	pub unsafe fn bind(&mut self) -> bool {
		if !self.vertices.has_backing_buffer() {
			return false
		}

		let no_vao = self.vao == 0;
		if no_vao {
			gl::GenVertexArrays(1, &mut self.vao);
		}
		gl::BindVertexArray(self.vao);
		self.vertices.bind();

		if no_vao || self.vertices.backing_buffer_changed() {
			attribute::bind_attributes(V::VERTEX_ATTRIBUTES);
			self.vertices.clear_buffer_changed();
		}

		true
	}

	/// Draw `range` of the flushed vertices with the currently bound program
	///
	/// # SAFETY
	/// * must be called from GL thread, after `flush`
	pub unsafe fn draw(&mut self, primitive: Primitive, range: Range<usize>) {
		let end = range.end.min(self.len());
		if range.start >= end || !self.bind() {
			return
		}

		gl::DrawArrays(primitive.gl_mode(), range.start as GLint, (end - range.start) as GLsizei);
	}
}

impl<V: Vertex> Default for Mesh<V> {
	fn default() -> Self {
		Self::new()
	}
}

impl<V: Vertex> Drop for Mesh<V> {
	fn drop(&mut self) {
		if self.vao != 0 {
			unsafe { gl::DeleteVertexArrays(1, &self.vao) };
		}
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::geometry::Point;

	fn points(n: usize) -> Vec<Point> {
		(0..n).map(|i| Point::new(i as f32, i as f32 * 2.0)).collect()
	}

	#[test]
	fn extend_uploads_only_the_tail() {
		let source = points(6);
		let mut mesh = Mesh::<Point>::from_vertices(&source[..3]);
		mesh.vertices.flush_region = None;

		mesh.extend_from(&source);

		assert_eq!(mesh.vertices(), &source[..]);
		assert_eq!(mesh.vertices.flush_region(), Some(&(3..6)));
	}

	#[test]
	fn extend_with_nothing_new() {
		let source = points(3);
		let mut mesh = Mesh::<Point>::from_vertices(&source);
		mesh.vertices.flush_region = None;

		mesh.extend_from(&source);
		mesh.extend_from(&source[..1]);

		assert_eq!(mesh.len(), 3);
		assert!(mesh.vertices.flush_region().is_none());
	}
}
