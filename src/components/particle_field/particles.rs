//! Drifting particle pool: the simulation half of the backdrop.
//!
//! The pool is a fixed-size set of points advanced once per frame by a pure
//! step with toroidal wrap-around at the surface edges. Nothing here touches
//! a drawing surface, so the whole module is testable natively.

use super::types::FieldConfig;

/// A single drifting point.
///
/// Position and velocity change every frame; `radius` and `hue` are fixed at
/// creation. The hue is carried over from the source design but the final
/// render fills every particle with a fixed low-alpha white — see
/// [`FieldTheme::particle_fill`](super::theme::FieldTheme).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
	/// Horizontal position in surface pixels.
	pub x: f64,
	/// Vertical position in surface pixels.
	pub y: f64,
	/// Horizontal velocity in pixels per frame.
	pub vx: f64,
	/// Vertical velocity in pixels per frame.
	pub vy: f64,
	/// Draw radius in pixels. Fixed for the particle's lifetime.
	pub radius: f64,
	/// Hue in degrees, drawn at creation. Fixed for the particle's lifetime.
	pub hue: f64,
}

/// Advance a particle by one frame and wrap it into `[0, width] x [0, height]`.
///
/// The wrap rule is toroidal: a particle leaving the right or bottom edge
/// reappears at 0, one leaving the left or top edge reappears at the far
/// bound. Positions are never clamped and velocities never flip.
pub fn advance(mut p: Particle, width: f64, height: f64) -> Particle {
	p.x += p.vx;
	p.y += p.vy;
	if p.x > width {
		p.x = 0.0;
	} else if p.x < 0.0 {
		p.x = width;
	}
	if p.y > height {
		p.y = 0.0;
	} else if p.y < 0.0 {
		p.y = height;
	}
	p
}

/// Fixed-size pool of drifting particles plus the bounds they drift in.
#[derive(Clone, Debug)]
pub struct ParticleField {
	particles: Vec<Particle>,
	width: f64,
	height: f64,
}

impl ParticleField {
	/// Allocate the pool with positions uniform over the surface, velocities
	/// uniform in `[-speed, speed)` per axis, radii in
	/// `[radius_min, radius_max)`, and hues over the full circle.
	///
	/// The random source is injected so seeded runs are reproducible.
	pub fn new(config: &FieldConfig, width: f64, height: f64, rng: &mut fastrand::Rng) -> Self {
		let particles = (0..config.count)
			.map(|_| Particle {
				x: rng.f64() * width,
				y: rng.f64() * height,
				radius: config.radius_min + rng.f64() * (config.radius_max - config.radius_min),
				vx: rng.f64() * 2.0 * config.speed - config.speed,
				vy: rng.f64() * 2.0 * config.speed - config.speed,
				hue: rng.f64() * 360.0,
			})
			.collect();

		Self {
			particles,
			width,
			height,
		}
	}

	/// Build a field from explicit particles, for scenario tests.
	#[cfg(test)]
	pub(crate) fn from_particles(particles: Vec<Particle>, width: f64, height: f64) -> Self {
		Self {
			particles,
			width,
			height,
		}
	}

	/// Advance every particle by one frame, in pool order.
	pub fn step(&mut self) {
		for p in &mut self.particles {
			*p = advance(*p, self.width, self.height);
		}
	}

	/// Resynchronize drift bounds after a viewport resize.
	///
	/// Particles are not repositioned; ones now outside the new bounds drift
	/// back in via the wrap rule.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}

	/// The particle pool, in creation order.
	pub fn particles(&self) -> &[Particle] {
		&self.particles
	}

	/// Current drift-bound width in pixels.
	pub fn width(&self) -> f64 {
		self.width
	}

	/// Current drift-bound height in pixels.
	pub fn height(&self) -> f64 {
		self.height
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn still_particle(x: f64, y: f64) -> Particle {
		Particle {
			x,
			y,
			vx: 0.0,
			vy: 0.0,
			radius: 2.0,
			hue: 180.0,
		}
	}

	#[test]
	fn pool_size_is_constant() {
		let mut rng = fastrand::Rng::with_seed(1);
		let mut field = ParticleField::new(&FieldConfig::default(), 640.0, 480.0, &mut rng);
		assert_eq!(field.particles().len(), 150);

		for _ in 0..200 {
			field.step();
		}
		assert_eq!(field.particles().len(), 150);
	}

	#[test]
	fn positions_stay_in_bounds() {
		let mut rng = fastrand::Rng::with_seed(2);
		let (w, h) = (50.0, 40.0);
		let mut field = ParticleField::new(&FieldConfig::default(), w, h, &mut rng);

		for _ in 0..500 {
			field.step();
			for p in field.particles() {
				assert!((0.0..=w).contains(&p.x), "x out of bounds: {}", p.x);
				assert!((0.0..=h).contains(&p.y), "y out of bounds: {}", p.y);
			}
		}
	}

	#[test]
	fn wrap_right_edge_resets_to_zero() {
		let p = Particle {
			vx: 2.0,
			..still_particle(99.0, 10.0)
		};
		let p = advance(p, 100.0, 100.0);
		// 99 + 2 = 101 pre-wrap, which wraps to 0 — not clamped to 100.
		assert_eq!(p.x, 0.0);
		assert_eq!(p.y, 10.0);
	}

	#[test]
	fn wrap_left_edge_resets_to_far_bound() {
		let p = Particle {
			vx: -1.0,
			..still_particle(0.5, 10.0)
		};
		let p = advance(p, 100.0, 100.0);
		assert_eq!(p.x, 100.0);
	}

	#[test]
	fn wrap_applies_per_axis() {
		let p = Particle {
			vx: 2.0,
			vy: -3.0,
			..still_particle(99.0, 1.0)
		};
		let p = advance(p, 100.0, 80.0);
		assert_eq!(p.x, 0.0);
		assert_eq!(p.y, 80.0);
	}

	#[test]
	fn advance_within_bounds_is_plain_drift() {
		let p = Particle {
			vx: 0.75,
			vy: -0.25,
			..still_particle(10.0, 20.0)
		};
		let p = advance(p, 100.0, 100.0);
		assert_eq!(p.x, 10.75);
		assert_eq!(p.y, 19.75);
	}

	#[test]
	fn radius_and_hue_survive_stepping() {
		let mut rng = fastrand::Rng::with_seed(3);
		let mut field = ParticleField::new(&FieldConfig::default(), 300.0, 300.0, &mut rng);
		let before: Vec<(f64, f64)> = field.particles().iter().map(|p| (p.radius, p.hue)).collect();

		for _ in 0..50 {
			field.step();
		}
		let after: Vec<(f64, f64)> = field.particles().iter().map(|p| (p.radius, p.hue)).collect();
		assert_eq!(before, after);
	}

	#[test]
	fn initial_attributes_respect_config_ranges() {
		let mut rng = fastrand::Rng::with_seed(4);
		let config = FieldConfig::default();
		let (w, h) = (800.0, 600.0);
		let field = ParticleField::new(&config, w, h, &mut rng);

		for p in field.particles() {
			assert!((0.0..w).contains(&p.x));
			assert!((0.0..h).contains(&p.y));
			assert!((-config.speed..config.speed).contains(&p.vx));
			assert!((-config.speed..config.speed).contains(&p.vy));
			assert!((config.radius_min..config.radius_max).contains(&p.radius));
			assert!((0.0..360.0).contains(&p.hue));
		}
	}

	#[test]
	fn seeded_runs_are_bit_identical() {
		let config = FieldConfig::default();
		let mut rng_a = fastrand::Rng::with_seed(42);
		let mut rng_b = fastrand::Rng::with_seed(42);
		let mut field_a = ParticleField::new(&config, 640.0, 480.0, &mut rng_a);
		let mut field_b = ParticleField::new(&config, 640.0, 480.0, &mut rng_b);

		for _ in 0..100 {
			field_a.step();
			field_b.step();
		}
		assert_eq!(field_a.particles(), field_b.particles());
	}

	#[test]
	fn resize_leaves_particles_untouched() {
		let mut rng = fastrand::Rng::with_seed(5);
		let mut field = ParticleField::new(&FieldConfig::default(), 640.0, 480.0, &mut rng);
		let before = field.particles().to_vec();

		field.resize(1280.0, 720.0);
		field.resize(1280.0, 720.0);

		assert_eq!(field.particles(), &before[..]);
		assert_eq!(field.width(), 1280.0);
		assert_eq!(field.height(), 720.0);
	}
}
