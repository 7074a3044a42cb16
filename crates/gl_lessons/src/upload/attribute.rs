// Copyright (C) 2022 the ITK authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

use std::ffi::c_void;

use gl::types::{GLenum, GLsizei};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VertexAttribute {
	pub ty: GLenum,
	pub count: usize,
	pub ty_size: usize,
	pub is_integer: bool,
}

impl VertexAttribute {
	pub const fn new<T: GlType>(count: usize) -> Self {
		VertexAttribute {
			ty: T::GL_TYPE,
			count,
			ty_size: std::mem::size_of::<T>(),
			is_integer: T::IS_INTEGER,
		}
	}

	#[inline]
	pub const fn size(&self) -> usize {
		self.count * self.ty_size
	}
}

/// Distance in bytes between two consecutive vertices using `attributes`.
pub fn stride(attributes: &[VertexAttribute]) -> usize {
	attributes.iter().map(VertexAttribute::size).sum()
}

/// Point the bound VAO at an interleaved vertex layout.
///
/// # SAFETY
/// * must be called from GL thread
/// * VAO and VBO must be bound
pub unsafe fn bind_attributes(attributes: &[VertexAttribute]) {
	let stride = stride(attributes) as GLsizei;

	let mut offset = 0;
	for (i, attribute) in attributes.iter().enumerate() {
		if attribute.is_integer {
			gl::VertexAttribIPointer(
				i as u32,
				attribute.count as GLsizei,
				attribute.ty,
				stride,
				offset as *const c_void,
			);
		} else {
			gl::VertexAttribPointer(
				i as u32,
				attribute.count as GLsizei,
				attribute.ty,
				gl::FALSE,
				stride,
				offset as *const c_void,
			);
		}

		gl::EnableVertexAttribArray(i as u32);

		offset += attribute.size();
	}
}

pub trait GlType: Sized {
	const GL_TYPE: GLenum;
	const IS_INTEGER: bool;
}

macro_rules! gl_types {
	($($type:ident($gltype:expr, int: $int:literal);)*) => {
		$(
			impl GlType for $type {
				const GL_TYPE: GLenum = $gltype;
				const IS_INTEGER: bool = $int;
			}
		)*
	}
}

gl_types! {
	f32(gl::FLOAT, int: false);
	u32(gl::UNSIGNED_INT, int: true);
	u8(gl::UNSIGNED_BYTE, int: true);
}
