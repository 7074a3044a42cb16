// Copyright (C) 2022 the ITK authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

use cgmath::{Matrix4, SquareMatrix};

pub mod flat;
pub mod vertex_color;

pub use self::{flat::FlatRenderer, vertex_color::VertexColorRenderer};

/// Orthographic projection from window pixels to clip space.
///
/// The origin is the top left corner and y grows downwards, the same
/// convention GLFW uses for cursor positions.
pub fn screen_projection(width: f32, height: f32) -> Matrix4<f32> {
	cgmath::ortho(0.0, width, height, 0.0, -1.0, 1.0)
}

/// Projection for geometry already given in normalized device coordinates.
#[inline]
pub fn ndc_projection() -> Matrix4<f32> {
	Matrix4::identity()
}
