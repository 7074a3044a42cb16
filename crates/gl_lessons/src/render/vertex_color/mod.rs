// Copyright (C) 2022 the ITK authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

use std::ops::Range;

use cgmath::Matrix4;

use crate::{
	geometry::ColoredVertex,
	shader::{ProgramError, ShaderProgram, ShaderSource, Uniform},
	upload::{Mesh, Primitive},
};

pub const SHADER_SOURCE: ShaderSource = ShaderSource {
	vertex: include_str!("vertex.glsl"),
	fragment: include_str!("fragment.glsl"),
};

/// Draws geometry whose color is interpolated from per-vertex colors.
pub struct VertexColorRenderer {
	program: ShaderProgram,
	projection: Option<Uniform>,
}

impl VertexColorRenderer {
	/// # SAFETY
	/// * must be called from GL thread
	pub unsafe fn new() -> Result<Self, ProgramError> {
		let program = SHADER_SOURCE.create_program()?;

		Ok(Self {
			projection: program.uniform("projection"),
			program,
		})
	}

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
	#[inline]
	pub unsafe fn draw(
		&self,
		mesh: &mut Mesh<ColoredVertex>,
		primitive: Primitive,
		range: Range<usize>,
	) {
		mesh.draw(primitive, range);
	}
}
