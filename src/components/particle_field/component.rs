//! Leptos component wrapping the particle field canvas.
//!
//! The component creates a full-viewport canvas stacked behind the page
//! content, mounts the renderer on it, and keeps the surface synchronized
//! with the window through a `resize` listener. Teardown runs in
//! `on_cleanup`: the frame loop is cancelled and the listener removed.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use send_wrapper::SendWrapper;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, Window};

use super::render::{CanvasSurface, Surface};
use super::renderer::FieldRenderer;
use super::scheduler::RafScheduler;
use super::theme::FieldTheme;
use super::types::FieldConfig;

fn viewport_size(window: &Window) -> (f64, f64) {
	(
		window.inner_width().unwrap().as_f64().unwrap(),
		window.inner_height().unwrap().as_f64().unwrap(),
	)
}

/// Renders the animated constellation backdrop on a full-viewport canvas.
///
/// The canvas sits at the lowest stacking order behind the host page's
/// content and exposes nothing outward: no events, no queryable state. Pass
/// a [`FieldConfig`] to override the default pool size and drift tuning.
#[component]
pub fn ParticleFieldCanvas(#[prop(default = None)] config: Option<FieldConfig>) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let renderer: Rc<RefCell<Option<FieldRenderer<RafScheduler>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let (renderer_init, resize_cb_init) = (renderer.clone(), resize_cb.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if renderer_init.borrow().is_some() {
			return;
		}
		let canvas: HtmlCanvasElement = canvas.into();
		let window: Window = web_sys::window().unwrap();
		let (w, h) = viewport_size(&window);

		let config = config.clone().unwrap_or_default();
		let theme = FieldTheme::for_config(&config);
		let surface: Rc<RefCell<dyn Surface>> = Rc::new(RefCell::new(CanvasSurface::new(canvas)));
		let mut rng = fastrand::Rng::new();
		*renderer_init.borrow_mut() = Some(FieldRenderer::mount(
			surface,
			w,
			h,
			&config,
			theme,
			&mut rng,
			RafScheduler,
		));

		let renderer_resize = renderer_init.clone();
		*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
			let win: Window = web_sys::window().unwrap();
			let (nw, nh) = viewport_size(&win);
			if let Some(ref renderer) = *renderer_resize.borrow() {
				renderer.on_resize(nw, nh);
			}
		}));
		if let Some(ref cb) = *resize_cb_init.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}
	});

	let renderer = SendWrapper::new(renderer);
	let resize_cb = SendWrapper::new(resize_cb);
	on_cleanup(move || {
		if let Some(mut renderer) = renderer.borrow_mut().take() {
			renderer.unmount();
		}
		if let Some(cb) = resize_cb.borrow_mut().take() {
			if let Some(window) = web_sys::window() {
				let _ = window
					.remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
			}
		}
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="particle-field-canvas"
			style="position: absolute; top: 0; left: 0; z-index: 0; display: block;"
		/>
	}
}
