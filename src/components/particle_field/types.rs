//! Configuration input for the particle field component.

use serde::Deserialize;

/// Tuning knobs for the particle field.
///
/// Defaults reproduce the dashboard backdrop: 150 particles, unit drift
/// speed, radii in `[1, 3)`, links within 100 px. All fields are optional in
/// JSON; missing fields fall back to these defaults.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
	/// Number of particles in the fixed pool. The pool is allocated once at
	/// mount and never grows or shrinks.
	pub count: usize,
	/// Maximum per-axis drift speed in pixels per frame. Each velocity
	/// component is drawn uniformly from `[-speed, speed)`.
	pub speed: f64,
	/// Smallest particle radius in pixels.
	pub radius_min: f64,
	/// Largest particle radius in pixels (exclusive).
	pub radius_max: f64,
	/// Distance in pixels under which two particles are linked by a line.
	pub link_distance: f64,
}

impl Default for FieldConfig {
	fn default() -> Self {
		Self {
			count: 150,
			speed: 1.0,
			radius_min: 1.0,
			radius_max: 3.0,
			link_distance: 100.0,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults_match_backdrop_constants() {
		let config = FieldConfig::default();
		assert_eq!(config.count, 150);
		assert_eq!(config.speed, 1.0);
		assert_eq!(config.radius_min, 1.0);
		assert_eq!(config.radius_max, 3.0);
		assert_eq!(config.link_distance, 100.0);
	}

	#[test]
	fn partial_json_fills_in_defaults() {
		let config: FieldConfig = serde_json::from_str(r#"{"count": 80}"#).unwrap();
		assert_eq!(config.count, 80);
		assert_eq!(config.speed, 1.0);
		assert_eq!(config.link_distance, 100.0);
	}
}
