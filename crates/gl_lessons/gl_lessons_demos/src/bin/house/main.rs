// Copyright (C) 2022 the ITK authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

//! A house drawn from flat-colored quads and triangles.
//!
//! The window title shows the frame rate.

use std::time::Duration;

use gl_lessons::{
	geometry::{quad, Color, Point, Shapes, Triangle},
	render::{ndc_projection, FlatRenderer},
	upload::Mesh,
};
use gl_lessons_demos::{log_failure, WindowConfig};

const TITLE: &str = "House - OpenGL";
const TITLE_REFRESH: Duration = Duration::from_millis(100);

const DOOR: Color = Color::rgb(0.36, 0.18, 0.12);
const WINDOW: Color = Color::rgb(1.0, 1.0, 0.0);
const ROOF: Color = Color::rgb(0.8, 0.0, 0.0);
const GROUND: Color = Color::rgb(1.0, 0.5, 0.0);

fn rect(x0: f32, y0: f32, x1: f32, y1: f32) -> [Triangle; 2] {
	quad(Point::new(x0, y0), Point::new(x1, y1))
}

fn house() -> Shapes {
	let (top, bottom) = (0.20, -0.55);
	let (left, right) = (-0.35, 0.35);
	let wall = 0.03;

	// window pane and its black outline and cross
	let (wx0, wx1, wy0, wy1) = (-0.25, -0.05, -0.05, 0.15);
	let border = 0.02;
	let (cx, cy) = ((wx0 + wx1) * 0.5, (wy0 + wy1) * 0.5);
	let cross = 0.01;

	let roof_base = 0.03 * 0.5;

	let mut shapes = Shapes::new();
	shapes
		.push(
			&[Triangle([
				Point::new(left - 0.03, top),
				Point::new(right + 0.03, top),
				Point::new(0.0, 0.85),
			])],
			Color::BLACK,
		)
		.push(&rect(left - wall, bottom, left, top), Color::BLACK)
		.push(&rect(right, bottom, right + wall, top), Color::BLACK)
		.push(&rect(wx0 - border, wy0 - border, wx1 + border, wy1 + border), Color::BLACK)
		.push(&rect(-0.12, -0.55, 0.12, -0.27), Color::BLACK)
		.push(&rect(-0.08, -0.55, 0.08, -0.30), DOOR)
		.push(&rect(wx0, wy0, wx1, wy1), WINDOW)
		.push(&rect(cx - cross, wy0, cx + cross, wy1), Color::BLACK)
		.push(&rect(wx0, cy - cross, wx1, cy + cross), Color::BLACK)
		.push(
			&[Triangle([Point::new(left, top), Point::new(right, top), Point::new(0.0, 0.80)])],
			ROOF,
		)
		.push(&rect(left, top - roof_base, right, top + roof_base), Color::BLACK)
		.push(&rect(-0.92, bottom - 0.035, 0.92, bottom), GROUND);

	shapes
}

fn main() {
	let config = WindowConfig::new(TITLE);

	gl_lessons_demos::run(&config, || {
		let renderer = log_failure("could not build the flat shader program", unsafe {
			FlatRenderer::new()
		});
		let shapes = house();
		let mut mesh = Mesh::from_vertices(shapes.vertices());
		unsafe { mesh.flush() };

		let mut title_cooldown = TITLE_REFRESH;

		move |frame| {
			let delta = frame.delta();
			title_cooldown = title_cooldown.saturating_sub(delta);
			if title_cooldown.is_zero() && !delta.is_zero() {
				frame.set_title(&format!("{TITLE} | FPS {:.2}", 1.0 / delta.as_secs_f64()));
				title_cooldown = TITLE_REFRESH;
			}

			unsafe {
				gl::ClearColor(1.0, 1.0, 1.0, 1.0);
				gl::Clear(gl::COLOR_BUFFER_BIT);

				if let Some(renderer) = &renderer {
					renderer.begin(&ndc_projection());
					renderer.draw_shapes(&mut mesh, &shapes);
				}
			}
		}
	});
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn parts_in_draw_order() {
		let shapes = house();
		let parts = shapes.parts();

		assert_eq!(parts.len(), 12);
		assert_eq!(parts[0].0, 0..3);
		assert_eq!(parts.last().map(|p| p.1), Some(GROUND));
		assert_eq!(shapes.vertices().len(), 2 * 3 + 10 * 6);
	}
}
