// Copyright (C) 2022 the ITK authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

//! A circle approximated by a triangle fan.

use gl_lessons::{
	geometry::{circle_fan, Color, Point, Triangle},
	render::{ndc_projection, FlatRenderer},
	upload::{Mesh, Primitive},
};
use gl_lessons_demos::{log_failure, WindowConfig};

const SEGMENTS: usize = 100;
const RADIUS: f32 = 0.5;

fn main() {
	let config = WindowConfig::new("Circle").with_size(800, 800);

	gl_lessons_demos::run(&config, || {
		let renderer = log_failure("could not build the flat shader program", unsafe {
			FlatRenderer::new()
		});
		let fan = circle_fan(Point::new(0.0, 0.0), RADIUS, SEGMENTS);
		let mut mesh = Mesh::from_vertices(Triangle::flatten(&fan));
		let vertex_count = mesh.len();
		unsafe { mesh.flush() };

		move |_| unsafe {
			gl::ClearColor(0.0, 0.0, 0.0, 1.0);
			gl::Clear(gl::COLOR_BUFFER_BIT);

			if let Some(renderer) = &renderer {
				renderer.begin(&ndc_projection());
				renderer.draw(&mut mesh, Primitive::Triangles, 0..vertex_count, Color::RED);
			}
		}
	});
}
