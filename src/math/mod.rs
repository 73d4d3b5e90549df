pub mod color;

mod misc;
mod ray;

pub use color::*;
pub use misc::*;
pub use ray::*;

pub type Point3 = nalgebra::Point3<f32>;
pub type Vec3 = nalgebra::Vector3<f32>;
pub type Vec4 = nalgebra::Vector4<f32>;
pub type Mat4 = nalgebra::Matrix4<f32>;
pub type Rotation = nalgebra::UnitQuaternion<f32>;
