// Copyright (C) 2022 the ITK authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

use std::ops::Range;

use rand::{rngs::StdRng, Rng, SeedableRng};
use thiserror::Error;

use crate::geometry::Color;

/// Channel range used for generated colors.
///
/// Starts above zero so generated triangles stay visible on a dark background.
pub const DEFAULT_CHANNEL_RANGE: Range<f32> = 0.2..1.0;

pub trait ColorSource {
	fn next_color(&mut self) -> Color;
}

#[derive(Debug, Error, PartialEq)]
pub enum ColorRangeError {
	#[error("channel range {0:?} is empty")]
	Empty(Range<f32>),
	#[error("channel range {0:?} does not fit in 0..=1")]
	OutOfUnit(Range<f32>),
}

/// Opaque colors with independently sampled red, green and blue channels.
pub struct RandomColors<R: Rng = StdRng> {
	rng: R,
	range: Range<f32>,
}

impl RandomColors<StdRng> {
	/// Seeded from OS entropy, so every run produces different colors.
	pub fn new() -> Self {
		Self::from_rng(StdRng::from_entropy())
	}
}

impl Default for RandomColors<StdRng> {
	fn default() -> Self {
		Self::new()
	}
}

impl<R: Rng> RandomColors<R> {
	pub fn from_rng(rng: R) -> Self {
		Self {
			rng,
			range: DEFAULT_CHANNEL_RANGE,
		}
	}

	pub fn with_range(rng: R, range: Range<f32>) -> Result<Self, ColorRangeError> {
		if range.is_empty() {
			return Err(ColorRangeError::Empty(range))
		}

		if range.start < 0.0 || range.end > 1.0 {
			return Err(ColorRangeError::OutOfUnit(range))
		}

		Ok(Self { rng, range })
	}

	#[inline]
	fn channel(&mut self) -> f32 {
		self.rng.gen_range(self.range.clone())
	}
}

impl<R: Rng> ColorSource for RandomColors<R> {
	fn next_color(&mut self) -> Color {
		Color::rgb(self.channel(), self.channel(), self.channel())
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn channels_stay_in_range() {
		let mut colors = RandomColors::from_rng(StdRng::seed_from_u64(7));

		for _ in 0..1000 {
			let color = colors.next_color();
			for channel in [color.r, color.g, color.b] {
				assert!(DEFAULT_CHANNEL_RANGE.contains(&channel), "{channel} out of range");
			}
			assert_eq!(color.a, 1.0);
		}
	}

	#[test]
	fn seeded_sources_repeat() {
		let mut a = RandomColors::from_rng(StdRng::seed_from_u64(42));
		let mut b = RandomColors::from_rng(StdRng::seed_from_u64(42));

		for _ in 0..16 {
			assert_eq!(a.next_color(), b.next_color());
		}
	}

	#[test]
	fn custom_range() {
		let mut colors = RandomColors::with_range(StdRng::seed_from_u64(3), 0.5..0.6).unwrap();

		for _ in 0..100 {
			let color = colors.next_color();
			assert!((0.5..0.6).contains(&color.g));
		}
	}

	#[test]
	fn rejects_bad_ranges() {
		let rng = || StdRng::seed_from_u64(0);

		assert_eq!(
			RandomColors::with_range(rng(), 0.5..0.5).err(),
			Some(ColorRangeError::Empty(0.5..0.5))
		);
		assert_eq!(
			RandomColors::with_range(rng(), 0.8..0.2).err(),
			Some(ColorRangeError::Empty(0.8..0.2))
		);
		assert_eq!(
			RandomColors::with_range(rng(), -0.1..0.5).err(),
			Some(ColorRangeError::OutOfUnit(-0.1..0.5))
		);
		assert_eq!(
			RandomColors::with_range(rng(), 0.5..1.5).err(),
			Some(ColorRangeError::OutOfUnit(0.5..1.5))
		);
	}
}
