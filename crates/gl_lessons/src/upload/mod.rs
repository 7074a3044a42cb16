// Copyright (C) 2022 the ITK authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

pub use self::{
	attribute::VertexAttribute,
	buffer::GpuBuffer,
	mesh::{Mesh, Primitive},
};

pub mod attribute;
pub mod buffer;
pub mod mesh;

/// Plain data that can be written straight into a vertex buffer.
///
/// `VERTEX_ATTRIBUTES` lists the attributes in field order; attribute `i`
/// is bound to shader location `i`.
pub trait Vertex: bytemuck::Pod {
	const VERTEX_ATTRIBUTES: &'static [VertexAttribute];
}
