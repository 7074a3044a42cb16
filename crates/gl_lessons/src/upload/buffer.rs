// Copyright (C) 2022 the ITK authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

use std::{ffi::c_void, mem, ops::Range};

use gl::types::{GLenum, GLintptr, GLsizeiptr, GLuint};

/// CPU backed buffer of data to upload to the GPU
///
/// Writes only touch the CPU copy. `begin_flush` pushes the modified range
/// to the backing GL buffer, reallocating it when the CPU copy outgrew it.
pub struct GpuBuffer<T: bytemuck::Pod> {
	buffer_type: GLenum,
	buffer: Vec<T>,
	gl_buffer: GLuint,
	gl_buffer_size: usize,
	pub(super) flush_region: Option<Range<usize>>,
	backing_buffer_changed: bool,
}

impl<T: bytemuck::Pod> GpuBuffer<T> {
	/// Does not create the backing buffer; that happens on the first flush.
	pub fn new(buffer_type: GLenum) -> Self {
		Self {
			buffer_type,
			buffer: Vec::new(),
			gl_buffer: 0,
			gl_buffer_size: 0,
			flush_region: None,
			backing_buffer_changed: false,
		}
	}

	/// Write `data` starting at `offset`
	///
	/// if `offset` is past the end, the gap is zero filled
	pub fn write(&mut self, offset: usize, data: &[T]) {
		if data.is_empty() {
			return
		}

		let range = offset..offset + data.len();
		if range.end > self.buffer.len() {
			self.buffer.resize(range.end, T::zeroed());
		}
		self.buffer[range.clone()].copy_from_slice(data);

		self.flush_region = Some(match &self.flush_region {
			Some(old_range) =>
				usize::min(old_range.start, range.start)..usize::max(old_range.end, range.end),
			None => range,
		});
	}

	#[inline]
	pub fn len(&self) -> usize {
		self.buffer.len()
	}

	#[inline]
	pub fn is_empty(&self) -> bool {
		self.buffer.is_empty()
	}

	#[inline]
	pub fn as_slice(&self) -> &[T] {
		&self.buffer
	}

	/// Range written since the last flush
	#[inline]
	pub fn flush_region(&self) -> Option<&Range<usize>> {
		self.flush_region.as_ref()
	}

	#[inline]
	pub fn has_backing_buffer(&self) -> bool {
		self.gl_buffer != 0
	}

	/// Check if the underlying buffer has been recreated since
	/// the flag was last cleared
	#[inline]
	pub fn backing_buffer_changed(&self) -> bool {
		self.backing_buffer_changed
	}

	#[inline]
	pub fn clear_buffer_changed(&mut self) {
		self.backing_buffer_changed = false;
	}

	/// Bind this buffer
	///
	/// if this buffer has no backing buffer, the 0 buffer
	/// will be bound
	///
	/// # SAFETY
	/// * must be called from GL thread
	pub unsafe fn bind(&self) {
		gl::BindBuffer(self.buffer_type, self.gl_buffer);
	}

	/// Push pending writes to the backing buffer
	///
	/// # SAFETY
	/// * must be called from GL thread
	///
	///	# SIDE EFFECTS
	///	* may or may not bind this buffer
	pub unsafe fn begin_flush(&mut self) {
		// gl buffer size will be 0 if the buffer does not exist
		if self.gl_buffer_size < self.buffer.len() {
			if self.gl_buffer == 0 {
				gl::GenBuffers(1, &mut self.gl_buffer);
				self.backing_buffer_changed = true;
			}
			self.bind();

			let bytes = bytemuck::cast_slice::<T, u8>(&self.buffer);
			gl::BufferData(
				self.buffer_type,
				bytes.len() as GLsizeiptr,
				bytes.as_ptr() as *const c_void,
				gl::DYNAMIC_DRAW,
			);

			self.gl_buffer_size = self.buffer.len();
		} else if let Some(range) = &self.flush_region {
			self.bind();

			let bytes = bytemuck::cast_slice::<T, u8>(&self.buffer[range.clone()]);
			gl::BufferSubData(
				self.buffer_type,
				(range.start * mem::size_of::<T>()) as GLintptr,
				bytes.len() as GLsizeiptr,
				bytes.as_ptr() as *const c_void,
			);
		}

		self.flush_region = None;
	}
}

impl<T: bytemuck::Pod> Drop for GpuBuffer<T> {
	fn drop(&mut self) {
		if self.gl_buffer != 0 {
			unsafe { gl::DeleteBuffers(1, &self.gl_buffer) };
		}
	}
}
