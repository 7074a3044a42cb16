// Copyright (C) 2022 the ITK authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

//! Two triangles meeting at the origin, drawn only as their vertices.

use gl_lessons::{
	geometry::{Color, Point, Triangle},
	render::{ndc_projection, FlatRenderer},
	upload::{Mesh, Primitive},
};
use gl_lessons_demos::{log_failure, WindowConfig};

const TRIANGLES: [Triangle; 2] = [
	Triangle([Point::new(-0.5, 0.5), Point::new(-0.5, -0.5), Point::new(0.0, 0.0)]),
	Triangle([Point::new(0.0, 0.0), Point::new(0.5, -0.5), Point::new(0.5, 0.5)]),
];

const POINT_SIZE: f32 = 20.0;

fn main() {
	let config = WindowConfig::new("Triangle vertices");

	gl_lessons_demos::run(&config, || {
		let renderer = log_failure("could not build the flat shader program", unsafe {
			FlatRenderer::new()
		});
		let mut mesh = Mesh::from_vertices(Triangle::flatten(&TRIANGLES));
		let vertex_count = mesh.len();
		unsafe { mesh.flush() };

		move |_| unsafe {
			gl::ClearColor(0.0, 0.0, 0.0, 1.0);
			gl::Clear(gl::COLOR_BUFFER_BIT);
			gl::PointSize(POINT_SIZE);

			if let Some(renderer) = &renderer {
				renderer.begin(&ndc_projection());
				renderer.draw(&mut mesh, Primitive::Points, 0..vertex_count, Color::WHITE);
			}
		}
	});
}
