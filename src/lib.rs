//! particle-field: animated constellation backdrop on an HTML canvas.
//!
//! This crate provides a WASM-based backdrop component that renders a fixed
//! pool of drifting particles with proximity-linked lines and a trailing-fade
//! motion effect, sized to the viewport and stacked behind the page content.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;

pub use components::particle_field::{FieldConfig, FieldTheme, ParticleFieldCanvas};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("particle-field: logging initialized");
}

/// Load field configuration from a script element with id="field-config".
/// Expected format: JSON matching [`FieldConfig`] (all fields optional).
fn load_field_config() -> Option<FieldConfig> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("field-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match serde_json::from_str::<FieldConfig>(&json_text) {
		Ok(config) => {
			info!("particle-field: loaded config, {} particles", config.count);
			Some(config)
		}
		Err(e) => {
			warn!("particle-field: failed to parse config: {}", e);
			None
		}
	}
}

/// Main application component.
/// Renders the full-viewport backdrop with a small overlay caption, reading
/// optional tuning from the DOM.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = load_field_config();

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text="Particle Field" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<div class="fullscreen-backdrop">
			<ParticleFieldCanvas config=config />
			<div class="backdrop-overlay">
				<h1>"Particle Field"</h1>
				<p class="subtitle">
					"Drifting points linked by proximity. Resize the window; the field follows."
				</p>
			</div>
		</div>
	}
}
