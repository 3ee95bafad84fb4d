//! Frame scheduling: an explicit schedule/cancel seam over
//! `requestAnimationFrame`.
//!
//! The browser's self-rescheduling animation-frame pattern gives `unmount`
//! nothing concrete to cancel, so the loop is built on a one-shot scheduler
//! trait instead: each frame is a registration with a handle, and cancelling
//! revokes the pending registration rather than hoping the callback declines
//! to reschedule itself. Tests drive the loop with a manual scheduler.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Handle to one scheduled frame callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameHandle(i32);

/// One-shot display-synchronized callback scheduling.
pub trait FrameScheduler {
	/// Register `callback` to run before the next repaint.
	fn schedule(&self, callback: Box<dyn FnOnce()>) -> FrameHandle;
	/// Revoke a pending registration so its callback never runs. Cancelling a
	/// handle that already fired is a no-op.
	fn cancel(&self, handle: FrameHandle);
}

/// Browser scheduler backed by `window.requestAnimationFrame`.
pub struct RafScheduler;

impl FrameScheduler for RafScheduler {
	fn schedule(&self, callback: Box<dyn FnOnce()>) -> FrameHandle {
		use wasm_bindgen::JsCast;
		use wasm_bindgen::closure::Closure;

		// once_into_js frees the Rust closure after it runs. A cancelled
		// callback leaks its closure, which happens at most once per unmount.
		let js_fn = Closure::once_into_js(callback);
		let id = web_sys::window()
			.expect("no window")
			.request_animation_frame(js_fn.unchecked_ref())
			.expect("requestAnimationFrame failed");
		FrameHandle(id)
	}

	fn cancel(&self, handle: FrameHandle) {
		if let Some(window) = web_sys::window() {
			let _ = window.cancel_animation_frame(handle.0);
		}
	}
}

struct LoopInner<S: FrameScheduler> {
	scheduler: S,
	tick: RefCell<Box<dyn FnMut()>>,
	pending: Cell<Option<FrameHandle>>,
	running: Cell<bool>,
}

/// Recurring frame loop: runs `tick` once per scheduled frame until
/// cancelled.
pub struct FrameLoop<S: FrameScheduler + 'static> {
	inner: Rc<LoopInner<S>>,
}

impl<S: FrameScheduler + 'static> FrameLoop<S> {
	/// Start the loop, scheduling the first frame immediately.
	pub fn start(scheduler: S, tick: impl FnMut() + 'static) -> Self {
		let inner = Rc::new(LoopInner {
			scheduler,
			tick: RefCell::new(Box::new(tick)),
			pending: Cell::new(None),
			running: Cell::new(true),
		});
		Self::schedule_next(&inner);
		Self { inner }
	}

	fn schedule_next(inner: &Rc<LoopInner<S>>) {
		let frame_inner = inner.clone();
		let handle = inner.scheduler.schedule(Box::new(move || {
			frame_inner.pending.set(None);
			if !frame_inner.running.get() {
				return;
			}
			{
				let mut tick = frame_inner.tick.borrow_mut();
				(*tick)();
			}
			if frame_inner.running.get() {
				Self::schedule_next(&frame_inner);
			}
		}));
		inner.pending.set(Some(handle));
	}

	/// Stop the loop and revoke any already-scheduled frame. Idempotent.
	pub fn cancel(&self) {
		self.inner.running.set(false);
		if let Some(handle) = self.inner.pending.take() {
			self.inner.scheduler.cancel(handle);
		}
	}

	/// Whether the loop is still scheduling frames.
	pub fn is_running(&self) -> bool {
		self.inner.running.get()
	}
}

impl<S: FrameScheduler + 'static> Drop for FrameLoop<S> {
	fn drop(&mut self) {
		self.cancel();
	}
}

/// Test scheduler that queues callbacks until the test fires them.
#[cfg(test)]
pub(crate) struct ManualScheduler {
	state: Rc<RefCell<ManualState>>,
}

#[cfg(test)]
struct ManualState {
	next_id: i32,
	pending: Vec<(i32, Box<dyn FnOnce()>)>,
	scheduled_total: usize,
	cancelled_total: usize,
}

#[cfg(test)]
impl ManualScheduler {
	pub(crate) fn new() -> Self {
		Self {
			state: Rc::new(RefCell::new(ManualState {
				next_id: 0,
				pending: Vec::new(),
				scheduled_total: 0,
				cancelled_total: 0,
			})),
		}
	}

	/// Run the oldest pending callback; false if none was queued.
	pub(crate) fn fire_next(&self) -> bool {
		let callback = {
			let mut state = self.state.borrow_mut();
			if state.pending.is_empty() {
				return false;
			}
			state.pending.remove(0).1
		};
		callback();
		true
	}

	pub(crate) fn pending_count(&self) -> usize {
		self.state.borrow().pending.len()
	}

	pub(crate) fn scheduled_total(&self) -> usize {
		self.state.borrow().scheduled_total
	}

	pub(crate) fn cancelled_total(&self) -> usize {
		self.state.borrow().cancelled_total
	}
}

#[cfg(test)]
impl Clone for ManualScheduler {
	fn clone(&self) -> Self {
		Self {
			state: self.state.clone(),
		}
	}
}

#[cfg(test)]
impl FrameScheduler for ManualScheduler {
	fn schedule(&self, callback: Box<dyn FnOnce()>) -> FrameHandle {
		let mut state = self.state.borrow_mut();
		let id = state.next_id;
		state.next_id += 1;
		state.scheduled_total += 1;
		state.pending.push((id, callback));
		FrameHandle(id)
	}

	fn cancel(&self, handle: FrameHandle) {
		let mut state = self.state.borrow_mut();
		let before = state.pending.len();
		state.pending.retain(|(id, _)| *id != handle.0);
		if state.pending.len() < before {
			state.cancelled_total += 1;
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn tick_runs_once_per_fired_frame() {
		let scheduler = ManualScheduler::new();
		let ticks = Rc::new(Cell::new(0u32));
		let ticks_in_loop = ticks.clone();
		let frame_loop = FrameLoop::start(scheduler.clone(), move || {
			ticks_in_loop.set(ticks_in_loop.get() + 1);
		});

		assert_eq!(scheduler.pending_count(), 1);
		assert!(scheduler.fire_next());
		assert!(scheduler.fire_next());
		assert!(scheduler.fire_next());
		assert_eq!(ticks.get(), 3);
		// Each fired frame rescheduled exactly one follow-up.
		assert_eq!(scheduler.pending_count(), 1);
		assert!(frame_loop.is_running());
	}

	#[test]
	fn cancel_revokes_the_pending_frame() {
		let scheduler = ManualScheduler::new();
		let ticks = Rc::new(Cell::new(0u32));
		let ticks_in_loop = ticks.clone();
		let frame_loop = FrameLoop::start(scheduler.clone(), move || {
			ticks_in_loop.set(ticks_in_loop.get() + 1);
		});

		scheduler.fire_next();
		frame_loop.cancel();

		assert!(!frame_loop.is_running());
		assert_eq!(scheduler.pending_count(), 0);
		assert_eq!(scheduler.cancelled_total(), 1);

		// Nothing left to fire: no further ticks, no new registrations.
		let scheduled_before = scheduler.scheduled_total();
		assert!(!scheduler.fire_next());
		assert_eq!(ticks.get(), 1);
		assert_eq!(scheduler.scheduled_total(), scheduled_before);
	}

	#[test]
	fn cancel_is_idempotent() {
		let scheduler = ManualScheduler::new();
		let frame_loop = FrameLoop::start(scheduler.clone(), || {});

		frame_loop.cancel();
		frame_loop.cancel();

		assert_eq!(scheduler.pending_count(), 0);
		assert_eq!(scheduler.cancelled_total(), 1);
	}

	#[test]
	fn drop_cancels_the_loop() {
		let scheduler = ManualScheduler::new();
		let frame_loop = FrameLoop::start(scheduler.clone(), || {});
		assert_eq!(scheduler.pending_count(), 1);

		drop(frame_loop);
		assert_eq!(scheduler.pending_count(), 0);
	}

	#[test]
	fn stale_fire_after_external_dequeue_is_harmless() {
		// A callback that somehow fires after cancel (scheduler bug or race)
		// must still observe the running flag and do nothing.
		let scheduler = ManualScheduler::new();
		let ticks = Rc::new(Cell::new(0u32));
		let ticks_in_loop = ticks.clone();
		let frame_loop = FrameLoop::start(scheduler.clone(), move || {
			ticks_in_loop.set(ticks_in_loop.get() + 1);
		});

		// Steal the pending callback before cancelling, then run it.
		let stolen = {
			let mut state = scheduler.state.borrow_mut();
			state.pending.remove(0).1
		};
		frame_loop.cancel();
		stolen();

		assert_eq!(ticks.get(), 0);
		assert_eq!(scheduler.pending_count(), 0);
	}
}
