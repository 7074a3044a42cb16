// Copyright (C) 2022 the ITK authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

//! One screen-space triangle, drawn once into each quarter of the window.

use gl_lessons::{
	geometry::ColoredVertex,
	render::{screen_projection, VertexColorRenderer},
	upload::{Mesh, Primitive},
};
use gl_lessons_demos::{log_failure, WindowConfig};

const TRIANGLE: [ColoredVertex; 3] = [
	ColoredVertex::new(400.0, 200.0, [1.0, 0.3, 0.2]),
	ColoredVertex::new(300.0, 400.0, [0.2, 0.8, 0.3]),
	ColoredVertex::new(500.0, 400.0, [0.2, 0.4, 1.0]),
];

/// Viewport rectangles `(x, y, width, height)` for the four quarters,
/// starting bottom left.
///
/// On odd sizes the right column and top row get the extra pixel.
fn quadrants(width: i32, height: i32) -> [(i32, i32, i32, i32); 4] {
	let (left, bottom) = (width / 2, height / 2);
	let (right, top) = (width - left, height - bottom);
	[
		(0, 0, left, bottom),
		(left, 0, right, bottom),
		(0, bottom, left, top),
		(left, bottom, right, top),
	]
}

fn main() {
	let config = WindowConfig::new("Viewports: one triangle per quadrant");

	gl_lessons_demos::run(&config, || {
		let renderer = log_failure("could not build the vertex color shader program", unsafe {
			VertexColorRenderer::new()
		});
		let mut mesh = Mesh::from_vertices(&TRIANGLE[..]);
		unsafe { mesh.flush() };

		move |frame| unsafe {
			gl::ClearColor(0.0, 0.0, 0.0, 1.0);
			gl::Clear(gl::COLOR_BUFFER_BIT);

			let Some(renderer) = &renderer else { return };

			let (width, height) = frame.framebuffer_size();
			// the scene keeps the full window's projection and is squeezed into each quarter
			renderer.begin(&screen_projection(width as f32, height as f32));

			for (x, y, w, h) in quadrants(width, height) {
				gl::Viewport(x, y, w, h);
				renderer.draw(&mut mesh, Primitive::Triangles, 0..TRIANGLE.len());
			}

			gl::Viewport(0, 0, width, height);
		}
	});
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn quadrants_tile_the_framebuffer() {
		let tiles = quadrants(800, 600);

		let area: i32 = tiles.iter().map(|(_, _, w, h)| w * h).sum();
		assert_eq!(area, 800 * 600);
		assert!(tiles.contains(&(400, 300, 400, 300)));
		assert!(tiles.contains(&(0, 0, 400, 300)));
	}

	#[test]
	fn odd_sizes_leave_no_gap() {
		let tiles = quadrants(801, 601);

		let area: i32 = tiles.iter().map(|(_, _, w, h)| w * h).sum();
		assert_eq!(area, 801 * 601);

		// every tile reaches the far edge it borders
		for (x, y, w, h) in tiles {
			assert!(x + w == 400 || x + w == 801);
			assert!(y + h == 300 || y + h == 601);
		}
		assert!(tiles.contains(&(400, 300, 401, 301)));
	}
}
