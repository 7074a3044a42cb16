// Copyright (C) 2022 the ITK authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

//! Window harness shared by the exercise binaries.

use std::{fmt::Display, time::Duration};

use gl_lessons::{geometry::Point, GlInfo};
use glfw::{Action, Context, Key, MouseButton, OpenGlProfileHint, WindowEvent, WindowHint};
use thiserror::Error;

pub mod debug;

#[derive(Debug, Clone)]
pub struct WindowConfig {
	pub title: String,
	pub width: u32,
	pub height: u32,
	pub vsync: bool,
	pub gl_version: (u32, u32),
}

impl Default for WindowConfig {
	fn default() -> Self {
		Self {
			title: String::from("gl_lessons"),
			width: 800,
			height: 600,
			vsync: true,
			gl_version: (4, 0),
		}
	}
}

impl WindowConfig {
	pub fn new(title: impl Into<String>) -> Self {
		Self {
			title: title.into(),
			..Self::default()
		}
	}

	pub fn with_size(mut self, width: u32, height: u32) -> Self {
		self.width = width;
		self.height = height;
		self
	}
}

#[derive(Debug, Error)]
pub enum WindowError {
	#[error("could not initialize GLFW: {0}")]
	Init(String),
	#[error("could not create a {width}x{height} window with an OpenGL {major}.{minor} context")]
	CreateWindow {
		width: u32,
		height: u32,
		major: u32,
		minor: u32,
	},
	#[error("could not load OpenGL functions: {}", .0.join(", "))]
	LoadGl(Vec<&'static str>),
}

/// GL entry points every exercise calls, paired with whether they loaded.
fn required_gl_functions() -> [(&'static str, bool); 7] {
	[
		("glGetString", gl::GetString::is_loaded()),
		("glViewport", gl::Viewport::is_loaded()),
		("glClear", gl::Clear::is_loaded()),
		("glCreateShader", gl::CreateShader::is_loaded()),
		("glCreateProgram", gl::CreateProgram::is_loaded()),
		("glGenVertexArrays", gl::GenVertexArrays::is_loaded()),
		("glDrawArrays", gl::DrawArrays::is_loaded()),
	]
}

/// Fail with the names of any functions the loader could not resolve.
pub fn check_gl_loaded(functions: &[(&'static str, bool)]) -> Result<(), WindowError> {
	let missing = functions
		.iter()
		.filter(|(_, loaded)| !loaded)
		.map(|(name, _)| *name)
		.collect::<Vec<_>>();

	if missing.is_empty() {
		Ok(())
	} else {
		Err(WindowError::LoadGl(missing))
	}
}

/// Per-frame view of the window handed to the exercise loop.
pub struct Frame<'w> {
	window: &'w mut glfw::Window,
	clicks: &'w [Point],
	framebuffer_size: (i32, i32),
	delta: Duration,
}

impl Frame<'_> {
	/// Left button presses since the previous frame, in framebuffer pixels.
	#[inline]
	pub fn clicks(&self) -> &[Point] {
		self.clicks
	}

	#[inline]
	pub fn framebuffer_size(&self) -> (i32, i32) {
		self.framebuffer_size
	}

	/// Time since the previous frame started.
	#[inline]
	pub fn delta(&self) -> Duration {
		self.delta
	}

	pub fn set_title(&mut self, title: &str) {
		self.window.set_title(title);
	}
}

/// Scale a cursor position from window coordinates to framebuffer pixels.
///
/// The two differ on high DPI displays.
pub fn cursor_to_framebuffer(
	cursor: (f64, f64),
	window_size: (i32, i32),
	framebuffer_size: (i32, i32),
) -> Point {
	let scale = |window: i32, framebuffer: i32| match window {
		0 => 1.0,
		window => framebuffer as f64 / window as f64,
	};

	Point::new(
		(cursor.0 * scale(window_size.0, framebuffer_size.0)) as f32,
		(cursor.1 * scale(window_size.1, framebuffer_size.1)) as f32,
	)
}

/// Open a window and run an exercise in it until it is closed.
///
/// `init` runs once with the context current and returns the per-frame loop.
/// Everything it creates is dropped before the context goes away.
pub fn view_window<I: FnOnce() -> L, L: FnMut(&mut Frame)>(
	config: &WindowConfig,
	init: I,
) -> Result<(), WindowError> {
	// errors are logged by the callback and surface below as `WindowError`s
	let mut glfw = glfw::init(glfw::LOG_ERRORS).map_err(|e| WindowError::Init(format!("{e:?}")))?;

	let (major, minor) = config.gl_version;
	glfw.window_hint(WindowHint::ContextVersion(major, minor));
	glfw.window_hint(WindowHint::OpenGlProfile(OpenGlProfileHint::Core));
	glfw.window_hint(WindowHint::OpenGlForwardCompat(true));
	glfw.window_hint(WindowHint::OpenGlDebugContext(cfg!(debug_assertions)));

	let (mut window, events) = glfw
		.create_window(config.width, config.height, &config.title, glfw::WindowMode::Windowed)
		.ok_or(WindowError::CreateWindow {
			width: config.width,
			height: config.height,
			major,
			minor,
		})?;

	window.make_current();

	if !config.vsync {
		glfw.set_swap_interval(glfw::SwapInterval::None);
	}

	window.set_key_polling(true);
	window.set_mouse_button_polling(true);
	window.set_framebuffer_size_polling(true);

	gl::load_with(|p| window.get_proc_address(p));
	check_gl_loaded(&required_gl_functions())?;

	let info = unsafe { GlInfo::query() };
	log::info!("Renderer: {}", info.renderer);
	log::info!("OpenGL version supported {}", info.version);

	if info.khr_debug {
		debug::setup_gl_debug();
	} else {
		log::debug!("GL_KHR_debug unavailable, driver messages will not be logged");
	}

	let (width, height) = window.get_framebuffer_size();
	unsafe { gl::Viewport(0, 0, width, height) };

	let mut exercise = init();
	let mut clicks = Vec::new();
	let mut last_frame = glfw.get_time();

	while !window.should_close() {
		glfw.poll_events();
		for (_, event) in glfw::flush_messages(&events) {
			match event {
				WindowEvent::Key(Key::Escape, _, Action::Press, _) => window.set_should_close(true),
				WindowEvent::MouseButton(MouseButton::Button1, Action::Press, _) => {
					clicks.push(cursor_to_framebuffer(
						window.get_cursor_pos(),
						window.get_size(),
						window.get_framebuffer_size(),
					));
				},
				WindowEvent::FramebufferSize(width, height) => unsafe {
					gl::Viewport(0, 0, width, height);
				},
				_ => {},
			}
		}

		let now = glfw.get_time();
		let delta = Duration::from_secs_f64((now - last_frame).max(0.0));
		last_frame = now;

		let framebuffer_size = window.get_framebuffer_size();
		exercise(&mut Frame {
			window: &mut window,
			clicks: &clicks,
			framebuffer_size,
			delta,
		});
		clicks.clear();

		window.swap_buffers();
	}

	// GL objects owned by the exercise must go before the context does
	drop(exercise);
	log::info!("window closed");

	Ok(())
}

/// Entry point for the exercise binaries.
///
/// Initializes logging (`RUST_LOG`, defaulting to `info`) and exits with a
/// non-zero status if the window could not be created.
pub fn run<I: FnOnce() -> L, L: FnMut(&mut Frame)>(config: &WindowConfig, init: I) {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

	if let Err(e) = view_window(config, init) {
		log::error!("{e}");
		std::process::exit(1);
	}
}

/// Log a failed setup step and carry on without its result.
pub fn log_failure<T, E: Display>(what: &str, result: Result<T, E>) -> Option<T> {
	result.map_err(|e| log::error!("{what}: {e}")).ok()
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn cursor_scaling() {
		assert_eq!(cursor_to_framebuffer((10.0, 20.0), (800, 600), (800, 600)), Point::new(10.0, 20.0));
		assert_eq!(cursor_to_framebuffer((10.0, 20.0), (800, 600), (1600, 1200)), Point::new(20.0, 40.0));
	}

	#[test]
	fn minimized_window_keeps_cursor() {
		assert_eq!(cursor_to_framebuffer((-5.0, 7.5), (0, 0), (0, 0)), Point::new(-5.0, 7.5));
	}

	#[test]
	fn default_config() {
		let config = WindowConfig::new("test").with_size(1000, 1000);

		assert_eq!(config.title, "test");
		assert_eq!((config.width, config.height), (1000, 1000));
		assert!(config.vsync);
		assert_eq!(config.gl_version, (4, 0));
	}

	#[test]
	fn gl_is_not_loaded_without_a_context() {
		match check_gl_loaded(&required_gl_functions()) {
			Err(WindowError::LoadGl(missing)) => {
				assert_eq!(missing.len(), required_gl_functions().len());
				assert!(missing.contains(&"glViewport"));
			},
			other => panic!("expected LoadGl, got {other:?}"),
		}
	}

	#[test]
	fn missing_functions_are_named() {
		let functions = [("glViewport", true), ("glClear", false), ("glDrawArrays", false)];

		let error = check_gl_loaded(&functions).unwrap_err();
		assert_eq!(error.to_string(), "could not load OpenGL functions: glClear, glDrawArrays");
	}

	#[test]
	fn loaded_functions_pass() {
		assert!(check_gl_loaded(&[("glViewport", true), ("glClear", true)]).is_ok());
		assert!(check_gl_loaded(&[]).is_ok());
	}

	#[test]
	fn window_errors_describe_the_request() {
		let error = WindowError::CreateWindow {
			width: 800,
			height: 600,
			major: 4,
			minor: 0,
		};

		assert_eq!(
			error.to_string(),
			"could not create a 800x600 window with an OpenGL 4.0 context"
		);
	}
}
