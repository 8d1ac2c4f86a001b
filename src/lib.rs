//! A 2D Monte-Carlo light-transport renderer.
//!
//! The core pipeline lives in [`entities`], [`shapes`], [`materials`],
//! [`integrator`], and [`render`]. [`image_io`] and [`scene`] are external
//! collaborators: the core never depends on them.

pub mod entities;
pub mod error;
pub mod film;
pub mod geometry;
pub mod image_io;
pub mod integrator;
pub mod materials;
pub mod render;
pub mod scene;
pub mod shapes;
pub mod spectrum;
pub mod vec2;

pub use error::RenderError;
pub use film::Film;
pub use geometry::{Aabb, Ray, SurfaceInteraction};
pub use integrator::{Integrator, PathTracer};
pub use render::{render, RenderSettings};
pub use spectrum::Spectrum;
pub use vec2::Vec2;
