#[macro_use]
extern crate log;

pub mod app;
pub mod camera;
pub mod geometry;
pub mod logging;
pub mod math;
pub mod parsing;
pub mod render;
pub mod scene;

mod error;

pub use error::Error;
pub use geometry::{intersects, Cube, Hit, Primitive, Shape, Sphere};
pub use camera::{ray_from_screen, Camera, Viewport};
