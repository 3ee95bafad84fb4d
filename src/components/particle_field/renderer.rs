//! Renderer lifecycle: ties the pool, the surface, and the frame loop
//! together behind mount / resize / unmount.

use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, info};

use super::particles::ParticleField;
use super::render::{Surface, draw_frame};
use super::scheduler::{FrameLoop, FrameScheduler};
use super::theme::FieldTheme;
use super::types::FieldConfig;

/// A mounted particle field renderer.
///
/// Owns the particle pool, a shared handle to the drawing surface, and the
/// frame loop driving both. Dropping the renderer unmounts it, so teardown
/// runs on every exit path even when the host component never calls
/// [`unmount`](Self::unmount) explicitly.
pub struct FieldRenderer<S: FrameScheduler + 'static> {
	field: Rc<RefCell<ParticleField>>,
	surface: Rc<RefCell<dyn Surface>>,
	frame_loop: Option<FrameLoop<S>>,
}

impl<S: FrameScheduler + 'static> FieldRenderer<S> {
	/// Size `surface` to `width` x `height`, allocate the pool from the
	/// injected random source, and start the per-frame update/draw cycle.
	pub fn mount(
		surface: Rc<RefCell<dyn Surface>>,
		width: f64,
		height: f64,
		config: &FieldConfig,
		theme: FieldTheme,
		rng: &mut fastrand::Rng,
		scheduler: S,
	) -> Self {
		surface.borrow_mut().set_size(width, height);
		let field = Rc::new(RefCell::new(ParticleField::new(config, width, height, rng)));
		info!(
			"particle field mounted: {} particles on {width:.0}x{height:.0}",
			config.count
		);

		let frame_field = field.clone();
		let frame_surface = surface.clone();
		let frame_loop = FrameLoop::start(scheduler, move || {
			let mut field = frame_field.borrow_mut();
			field.step();
			draw_frame(&field, &theme, &mut *frame_surface.borrow_mut());
		});

		Self {
			field,
			surface,
			frame_loop: Some(frame_loop),
		}
	}

	/// Resynchronize the surface and drift bounds to new viewport dimensions.
	///
	/// Particle state is untouched; points now outside the new bounds drift
	/// back in through the wrap rule. Safe to call repeatedly with the same
	/// dimensions.
	pub fn on_resize(&self, width: f64, height: f64) {
		debug!("particle field resized to {width:.0}x{height:.0}");
		self.surface.borrow_mut().set_size(width, height);
		self.field.borrow_mut().resize(width, height);
	}

	/// Stop the frame loop and revoke any already-scheduled frame.
	/// Idempotent: a second call is a no-op.
	pub fn unmount(&mut self) {
		if let Some(frame_loop) = self.frame_loop.take() {
			frame_loop.cancel();
			info!("particle field unmounted");
		}
	}

	/// Snapshot of the pool, for assertions in tests.
	#[cfg(test)]
	pub(crate) fn particles_snapshot(&self) -> Vec<super::particles::Particle> {
		self.field.borrow().particles().to_vec()
	}
}

impl<S: FrameScheduler + 'static> Drop for FieldRenderer<S> {
	fn drop(&mut self) {
		self.unmount();
	}
}
