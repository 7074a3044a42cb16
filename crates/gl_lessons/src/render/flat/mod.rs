// Copyright (C) 2022 the ITK authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

use std::ops::Range;

use cgmath::Matrix4;

use crate::{
	accumulator::DrawUnit,
	geometry::{Color, Point, Shapes},
	shader::{ProgramError, ShaderProgram, ShaderSource, Uniform},
	upload::{Mesh, Primitive, Vertex},
};

pub const SHADER_SOURCE: ShaderSource = ShaderSource {
	vertex: include_str!("vertex.glsl"),
	fragment: include_str!("fragment.glsl"),
};

/// Draws 2d geometry in a single color per draw call.
pub struct FlatRenderer {
	program: ShaderProgram,
	projection: Option<Uniform>,
	color: Option<Uniform>,
}

impl FlatRenderer {
	/// # SAFETY
	/// * must be called from GL thread
	pub unsafe fn new() -> Result<Self, ProgramError> {
		let program = SHADER_SOURCE.create_program()?;

		Ok(Self {
			projection: program.uniform("projection"),
			color: program.uniform("inputColor"),
			program,
		})
	}

	/// Bind the program and set the projection for the following draws
	///
	/// # SAFETY
	/// * must be called from GL thread
	pub unsafe fn begin(&self, projection: &Matrix4<f32>) {
		self.program.bind();
		if let Some(uniform) = &self.projection {
			uniform.set_mat4(AsRef::<[f32; 16]>::as_ref(projection));
		}
	}

	/// # SAFETY
	/// * must be called from GL thread, after `begin`
	/// * `mesh` must be flushed
	pub unsafe fn draw<V: Vertex>(
		&self,
		mesh: &mut Mesh<V>,
		primitive: Primitive,
		range: Range<usize>,
		color: Color,
	) {
		if let Some(uniform) = &self.color {
			uniform.set_vec4(color.to_array());
		}
		mesh.draw(primitive, range);
	}

	/// Draw every part of `shapes` in order, each in its own color
	///
	/// `mesh` must hold `shapes.vertices()`.
	///
	/// # SAFETY
	/// * must be called from GL thread, after `begin`
	/// * `mesh` must be flushed
	pub unsafe fn draw_shapes(&self, mesh: &mut Mesh<Point>, shapes: &Shapes) {
		for (range, color) in shapes.parts() {
			self.draw(mesh, Primitive::Triangles, range.clone(), *color);
		}
	}

	/// One draw call per unit, in iteration order
	///
	/// Unit `i` is drawn from vertices `3 * i .. 3 * i + 3` of `mesh`, which
	/// must therefore hold the units' vertices back to back.
	///
	/// # SAFETY
	/// * must be called from GL thread, after `begin`
	/// * `mesh` must be flushed
	pub unsafe fn draw_units(
		&self,
		mesh: &mut Mesh<Point>,
		units: impl IntoIterator<Item = DrawUnit>,
	) {
		for (i, unit) in units.into_iter().enumerate() {
			debug_assert_eq!(mesh.vertices().get(i * 3..i * 3 + 3), Some(&unit.vertices[..]));
			self.draw(mesh, Primitive::Triangles, i * 3..i * 3 + 3, unit.color);
		}
	}
}
