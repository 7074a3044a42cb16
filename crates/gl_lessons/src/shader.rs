// Copyright (C) 2022 the ITK authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

use std::ffi::{c_char, CString};

use gl::types::{GLchar, GLenum, GLint, GLsizei, GLuint};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderType {
	Vertex,
	Fragment,
}

pub struct Shader {
	ty: ShaderType,
	shader_object: GLuint,
}

pub struct ShaderProgram {
	pub program_object: GLuint,
}

/// Location of an active uniform in a linked program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Uniform(GLint);

/// Vertex and fragment source for a program built at runtime.
pub struct ShaderSource {
	pub vertex: &'static str,
	pub fragment: &'static str,
}

impl ShaderType {
	#[inline]
	pub fn gl_type(&self) -> GLenum {
		match self {
			Self::Vertex => gl::VERTEX_SHADER,
			Self::Fragment => gl::FRAGMENT_SHADER,
		}
	}
}

#[derive(Debug, Error)]
pub enum ShaderCompileError {
	#[error("could not create {0:?} shader (glCreateShader returned 0)")]
	CouldNotCreate(ShaderType),
	#[error("could not compile {0:?} shader - driver log:\n{1}\n")]
	Compile(ShaderType, String),
}

#[derive(Debug, Error)]
pub enum ShaderLinkError {
	#[error("expected a vertex shader and a fragment shader")]
	InvalidShader,
	#[error("could not create program (glCreateProgram returned 0)")]
	CouldNotCreate,
	#[error("could not link shader - driver log:\n{0}\n")]
	Link(String),
}

#[derive(Debug, Error)]
pub enum ProgramError {
	#[error(transparent)]
	Compile(#[from] ShaderCompileError),
	#[error(transparent)]
	Link(#[from] ShaderLinkError),
}

type GetParameter = unsafe fn(GLuint, GLenum, *mut GLint);
type GetInfoLog = unsafe fn(GLuint, GLsizei, *mut GLsizei, *mut GLchar);

/// Read the info log of a shader or program object.
///
/// # SAFETY
/// * must be called from GL thread
/// * `object` must be valid for `get_parameter` and `get_info_log`
unsafe fn info_log(object: GLuint, get_parameter: GetParameter, get_info_log: GetInfoLog) -> String {
	let mut log_length = 0 as GLint;
	get_parameter(object, gl::INFO_LOG_LENGTH, &mut log_length);

	let mut log = vec![0u8; log_length.max(1) as usize];
	let mut written = 0 as GLsizei;
	get_info_log(object, log.len() as GLsizei, &mut written, log.as_mut_ptr() as *mut GLchar);
	// the driver's null terminator is not counted in `written`
	log.truncate(written.max(0) as usize);

	String::from_utf8_lossy(&log).into_owned()
}

impl Shader {
	/// # SAFETY
	/// * must be called from GL thread
	pub unsafe fn compile(ty: ShaderType, source: &str) -> Result<Self, ShaderCompileError> {
		let shader = gl::CreateShader(ty.gl_type());
		if shader == 0 {
			return Err(ShaderCompileError::CouldNotCreate(ty))
		}

		// owns the object from here on, so early returns release it
		let shader = Shader {
			shader_object: shader,
			ty,
		};

		let src_ptr = source.as_ptr() as *const c_char;
		let len = source.len() as GLint;
		gl::ShaderSource(shader.shader_object, 1, &src_ptr, &len);

		gl::CompileShader(shader.shader_object);

		let mut compile_status = 0 as GLint;
		gl::GetShaderiv(shader.shader_object, gl::COMPILE_STATUS, &mut compile_status);

		if compile_status != gl::TRUE as GLint {
			let log = info_log(shader.shader_object, gl::GetShaderiv, gl::GetShaderInfoLog);
			return Err(ShaderCompileError::Compile(ty, log))
		}

		Ok(shader)
	}
}

impl Drop for Shader {
	fn drop(&mut self) {
		// Reduces refcount for shader.
		// The OpenGL driver will only delete the backing shader object
		// when it is not attached to shader program.
		unsafe { gl::DeleteShader(self.shader_object) };
	}
}

impl ShaderProgram {
	/// # SAFETY
	/// * must be called from GL thread
	pub unsafe fn link(
		vertex_shader: &Shader,
		fragment_shader: &Shader,
	) -> Result<Self, ShaderLinkError> {
		match (vertex_shader.ty, fragment_shader.ty) {
			(ShaderType::Vertex, ShaderType::Fragment) => {},
			_ => return Err(ShaderLinkError::InvalidShader),
		}

		let program = gl::CreateProgram();
		if program == 0 {
			return Err(ShaderLinkError::CouldNotCreate)
		}

		let program = ShaderProgram {
			program_object: program,
		};

		gl::AttachShader(program.program_object, vertex_shader.shader_object);
		gl::AttachShader(program.program_object, fragment_shader.shader_object);

		gl::LinkProgram(program.program_object);

		// allows earlier deletion of shader objects.
		gl::DetachShader(program.program_object, vertex_shader.shader_object);
		gl::DetachShader(program.program_object, fragment_shader.shader_object);

		let mut link_status = 0;
		gl::GetProgramiv(program.program_object, gl::LINK_STATUS, &mut link_status);

		if link_status != gl::TRUE as GLint {
			let log = info_log(program.program_object, gl::GetProgramiv, gl::GetProgramInfoLog);
			return Err(ShaderLinkError::Link(log))
		}

		Ok(program)
	}

	/// # SAFETY
	/// * must be called from GL thread
	pub unsafe fn bind(&self) {
		gl::UseProgram(self.program_object);
	}

	/// Look up an active uniform.
	///
	/// Returns `None` if the uniform does not exist or was optimized out.
	///
	/// # SAFETY
	/// * must be called from GL thread
	pub unsafe fn uniform(&self, name: &str) -> Option<Uniform> {
		let name = CString::new(name).ok()?;
		let location = gl::GetUniformLocation(self.program_object, name.as_ptr());

		if location < 0 {
			log::warn!("uniform {name:?} is not active in program {}", self.program_object);
			return None
		}

		Some(Uniform(location))
	}
}

impl Drop for ShaderProgram {
	fn drop(&mut self) {
		// Reduces refcount for shader program.
		// The OpenGL driver will only delete the backing shader program
		// when it is not part of any renderin context.
		unsafe { gl::DeleteProgram(self.program_object) };
	}
}

impl Uniform {
	/// # SAFETY
	/// * must be called from GL thread, with the owning program bound
	#[inline]
	pub unsafe fn set_vec4(&self, value: [f32; 4]) {
		gl::Uniform4f(self.0, value[0], value[1], value[2], value[3]);
	}

	/// Upload a column major 4x4 matrix
	///
	/// # SAFETY
	/// * must be called from GL thread, with the owning program bound
	#[inline]
	pub unsafe fn set_mat4(&self, value: &[f32; 16]) {
		gl::UniformMatrix4fv(self.0, 1, gl::FALSE, value.as_ptr());
	}
}

impl ShaderSource {
	/// # SAFETY
	/// * must be called from GL thread
	pub unsafe fn create_program(&self) -> Result<ShaderProgram, ProgramError> {
		Ok(ShaderProgram::link(
			&Shader::compile(ShaderType::Vertex, self.vertex)?,
			&Shader::compile(ShaderType::Fragment, self.fragment)?,
		)?)
	}
}
