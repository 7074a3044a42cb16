// Copyright (C) 2022 the ITK authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

//! Every three left clicks form a triangle with a random color.

use gl_lessons::{
	accumulator::{ClickAccumulator, ClickHandler},
	geometry::Point,
	render::{screen_projection, FlatRenderer},
	upload::Mesh,
};
use gl_lessons_demos::{log_failure, WindowConfig};

fn main() {
	let config = WindowConfig::new("Click to create triangles");

	gl_lessons_demos::run(&config, || {
		let renderer = log_failure("could not build the flat shader program", unsafe {
			FlatRenderer::new()
		});
		let mut accumulator = ClickAccumulator::new();
		let mut mesh = Mesh::<Point>::new();

		move |frame| {
			for &click in frame.clicks() {
				accumulator.on_click(click);
			}

			unsafe {
				gl::ClearColor(0.05, 0.05, 0.08, 1.0);
				gl::Clear(gl::COLOR_BUFFER_BIT);

				mesh.extend_from(accumulator.vertices());
				mesh.flush();

				if let Some(renderer) = &renderer {
					let (width, height) = frame.framebuffer_size();
					renderer.begin(&screen_projection(width as f32, height as f32));
					renderer.draw_units(&mut mesh, accumulator.draw_units());
				}
			}
		}
	});
}
