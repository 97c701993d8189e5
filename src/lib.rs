//! scatter3d-rs: headless 3D scatter-chart engine.
//!
//! This crate computes axis scaling and "nice number" ticks for labeled
//! `(x, y, z)` point series and keeps an abstract rendering collaborator's
//! actors consistent under incremental updates (add, move, remove, rescale).
//! Rendering itself stays behind the [`render::Renderer`] trait.

pub mod animation;
pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{ChartEngine, ChartOptions, MoveOutcome};
pub use error::{ChartError, ChartResult};
