// Copyright (C) 2022 the ITK authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

//! Building blocks for small OpenGL exercises.
//!
//! Nothing in here owns a window. The exercise harness creates the context,
//! loads function pointers and then drives these types from its frame loop.

use std::ffi::{c_char, CStr};

use gl::types::{GLenum, GLint};

pub mod accumulator;
pub mod color;
pub mod geometry;
pub mod render;
pub mod shader;
pub mod upload;

#[derive(Debug)]
pub struct GlInfo {
	pub renderer: String,
	pub version: String,
	pub khr_debug: bool,
}

impl GlInfo {
	/// Query driver strings and the extensions this crate cares about.
	///
	/// # SAFETY
	/// * must be called from GL thread, after function pointers are loaded
	pub unsafe fn query() -> Self {
		let mut extension_count: GLint = 0;
		gl::GetIntegerv(gl::NUM_EXTENSIONS, &mut extension_count);

		let mut khr_debug = false;
		for i in 0..extension_count.max(0) as u32 {
			let name = gl::GetStringi(gl::EXTENSIONS, i);
			if !name.is_null() && CStr::from_ptr(name as *const c_char).to_bytes() == b"GL_KHR_debug" {
				khr_debug = true;
				break
			}
		}

		GlInfo {
			renderer: gl_string(gl::RENDERER),
			version: gl_string(gl::VERSION),
			khr_debug: khr_debug && gl::DebugMessageCallback::is_loaded(),
		}
	}
}

unsafe fn gl_string(name: GLenum) -> String {
	let value = gl::GetString(name);
	if value.is_null() {
		return String::new()
	}

	CStr::from_ptr(value as *const c_char).to_string_lossy().into_owned()
}
