//! Visual styling for the particle field.
//!
//! All color and alpha constants live here; the renderer itself carries no
//! hard-coded styling.

use super::types::FieldConfig;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Style of the proximity-linking lines between nearby particles.
#[derive(Clone, Copy, Debug)]
pub struct LinkStyle {
	/// Base stroke color; its alpha is replaced per pair by the fade formula.
	pub color: Color,
	/// Pairs closer than this many pixels are linked.
	pub distance: f64,
	/// Stroke alpha at distance zero.
	pub base_alpha: f64,
	/// Divisor in `base_alpha - distance / alpha_scale`; larger values fade
	/// the link more slowly with distance.
	pub alpha_scale: f64,
	/// Stroke width in pixels.
	pub width: f64,
}

/// Complete visual theme for the backdrop.
#[derive(Clone, Copy, Debug)]
pub struct FieldTheme {
	/// Semi-transparent fill painted over the previous frame. The alpha below
	/// 1.0 is what produces the trailing-fade effect; a full clear would kill
	/// the motion trails.
	pub background: Color,
	/// Fill for every particle circle. A fixed low-alpha white, regardless of
	/// the particle's stored hue.
	pub particle_fill: Color,
	/// Proximity-link styling.
	pub link: LinkStyle,
}

impl Default for FieldTheme {
	fn default() -> Self {
		Self {
			background: Color::rgba(26, 26, 46, 0.8),
			particle_fill: Color::rgba(255, 255, 255, 0.1),
			link: LinkStyle {
				color: Color::rgb(255, 255, 255),
				distance: 100.0,
				base_alpha: 0.05,
				alpha_scale: 2000.0,
				width: 0.5,
			},
		}
	}
}

impl FieldTheme {
	/// Default theme with the link distance taken from `config`.
	pub fn for_config(config: &FieldConfig) -> Self {
		let mut theme = Self::default();
		theme.link.distance = config.link_distance;
		theme
	}
}
