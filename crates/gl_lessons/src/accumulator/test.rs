// Copyright (C) 2022 the ITK authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

use rand::{rngs::StdRng, SeedableRng};

use super::{ClickAccumulator, ClickHandler, DrawUnit};
use crate::{
	color::{ColorSource, RandomColors, DEFAULT_CHANNEL_RANGE},
	geometry::{Color, Point},
};

/// Hands out gray levels 0.1, 0.2, ... so every triangle gets a distinct color.
struct Steps(u32);

impl ColorSource for Steps {
	fn next_color(&mut self) -> Color {
		self.0 += 1;
		let level = self.0 as f32 / 10.0;
		Color::rgb(level, level, level)
	}
}

fn seeded() -> ClickAccumulator<RandomColors<StdRng>> {
	ClickAccumulator::with_color_source(RandomColors::from_rng(StdRng::seed_from_u64(1234)))
}

fn click_all<C: ColorSource>(acc: &mut ClickAccumulator<C>, points: &[(f32, f32)]) {
	for &(x, y) in points {
		acc.on_click(Point::new(x, y));
	}
}

#[test]
fn single_triangle() {
	let mut acc = seeded();
	click_all(&mut acc, &[(10.0, 10.0), (20.0, 10.0), (15.0, 20.0)]);

	assert_eq!(acc.triangle_count(), 1);
	assert!(acc.pending().is_empty());
	assert_eq!(acc.triangles()[0].0, [
		Point::new(10.0, 10.0),
		Point::new(20.0, 10.0),
		Point::new(15.0, 20.0),
	]);
}

#[test]
fn partial_triangle_stays_pending() {
	let mut acc = seeded();
	click_all(&mut acc, &[(1.0, 1.0), (2.0, 2.0), (3.0, 3.0), (4.0, 4.0), (5.0, 5.0)]);

	assert_eq!(acc.triangle_count(), 1);
	assert_eq!(acc.pending(), &[Point::new(4.0, 4.0), Point::new(5.0, 5.0)]);
}

#[test]
fn empty() {
	let acc = seeded();

	assert_eq!(acc.triangle_count(), 0);
	assert!(acc.pending().is_empty());
	assert!(acc.vertices().is_empty());
	assert_eq!(acc.draw_units().len(), 0);
}

#[test]
fn counts_follow_clicks() {
	for n in 0..30 {
		let mut acc = seeded();
		for i in 0..n {
			acc.on_click(Point::new(i as f32, -(i as f32)));
			assert!(acc.pending().len() <= 2);
		}

		assert_eq!(acc.triangle_count(), n / 3);
		assert_eq!(acc.pending().len(), n % 3);
		assert_eq!(acc.colors().len(), n / 3);
		assert_eq!(acc.vertices().len(), (n / 3) * 3);
	}
}

#[test]
fn identical_triangles_colored_independently() {
	let mut acc = ClickAccumulator::with_color_source(Steps(0));
	let triangle = [(0.0, 0.0), (100.0, 0.0), (50.0, 80.0)];
	click_all(&mut acc, &triangle);
	click_all(&mut acc, &triangle);

	let units = acc.draw_units().collect::<Vec<_>>();
	assert_eq!(units.len(), 2);
	assert_eq!(units[0].vertices, units[1].vertices);
	assert_eq!(units[0].color, Color::rgb(0.1, 0.1, 0.1));
	assert_eq!(units[1].color, Color::rgb(0.2, 0.2, 0.2));
}

#[test]
fn generated_colors_in_range() {
	let mut acc = seeded();
	for i in 0..300 {
		acc.on_click(Point::new(i as f32, 0.0));
	}

	assert_eq!(acc.colors().len(), 100);
	for color in acc.colors() {
		for channel in [color.r, color.g, color.b] {
			assert!(DEFAULT_CHANNEL_RANGE.contains(&channel));
		}
		assert_eq!(color.a, 1.0);
	}
}

#[test]
fn seeded_accumulators_agree() {
	let mut a = seeded();
	let mut b = seeded();
	let clicks = (0..12).map(|i| (i as f32 * 3.0, i as f32)).collect::<Vec<_>>();
	click_all(&mut a, &clicks);
	click_all(&mut b, &clicks);

	assert!(a.draw_units().eq(b.draw_units()));
}

#[test]
fn history_is_never_rewritten() {
	let mut acc = ClickAccumulator::with_color_source(Steps(0));
	click_all(&mut acc, &[(1.0, 2.0), (3.0, 4.0), (5.0, 6.0)]);
	let first = acc.draw_units().next().unwrap();

	for i in 0..50 {
		acc.on_click(Point::new(-(i as f32), 1e6));
		assert_eq!(acc.draw_units().next(), Some(first));
	}
}

#[test]
fn degenerate_and_out_of_window_points_accepted() {
	let mut acc = seeded();
	click_all(&mut acc, &[(-50.0, -50.0), (-50.0, -50.0), (-50.0, -50.0)]);
	click_all(&mut acc, &[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)]);

	assert_eq!(acc.triangle_count(), 2);
	assert_eq!(acc.triangles()[0].0, [Point::new(-50.0, -50.0); 3]);
}

#[test]
fn draw_units_match_vertices() {
	let mut acc = ClickAccumulator::with_color_source(Steps(0));
	click_all(&mut acc, &[
		(1.0, 1.0),
		(2.0, 1.0),
		(1.0, 2.0),
		(5.0, 5.0),
		(6.0, 5.0),
		(5.0, 6.0),
	]);

	let flat = acc.vertices();
	for (i, unit) in acc.draw_units().enumerate() {
		assert_eq!(&flat[i * 3..i * 3 + 3], &unit.vertices);
		assert_eq!(unit, DrawUnit {
			vertices: acc.triangles()[i].0,
			color: acc.colors()[i],
		});
	}
}
