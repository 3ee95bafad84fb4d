//! Animated constellation backdrop component.
//!
//! Maintains a fixed pool of drifting points on a full-viewport canvas and
//! renders them every frame with:
//! - Toroidal wrap-around drift (exit one edge, reappear at the opposite)
//! - Proximity-linked lines whose alpha fades with distance
//! - A trailing-fade composite (semi-transparent fill instead of a clear)
//!
//! The simulation, drawing pass, and frame scheduling are separate seams
//! (`particles`, `render`, `scheduler`), so everything except the browser
//! glue in `component` is testable natively.
//!
//! # Example
//!
//! ```ignore
//! use particle_field::{FieldConfig, ParticleFieldCanvas};
//!
//! let config = FieldConfig { count: 100, ..FieldConfig::default() };
//!
//! view! { <ParticleFieldCanvas config=Some(config) /> }
//! ```

mod component;
mod particles;
mod render;
mod renderer;
mod scheduler;
pub mod theme;
mod types;

pub use component::ParticleFieldCanvas;
pub use particles::{Particle, ParticleField, advance};
pub use render::{CanvasSurface, Surface, draw_frame, link_alpha};
pub use renderer::FieldRenderer;
pub use scheduler::{FrameHandle, FrameLoop, FrameScheduler, RafScheduler};
pub use theme::FieldTheme;
pub use types::FieldConfig;
