use serde::{Deserialize, Serialize};

use crate::{
    geometry::{Cube, Shape, Sphere},
    math::{Point3, RGBColor},
};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PrimitiveData {
    Sphere {
        center: [f32; 3],
        radius: f32,
        #[serde(default = "default_color")]
        color: [f32; 3],
    },
    Cube {
        center: [f32; 3],
        side: f32,
        #[serde(default = "default_color")]
        color: [f32; 3],
    },
}

fn default_color() -> [f32; 3] {
    [1.0, 1.0, 1.0]
}

pub(super) fn point(v: [f32; 3]) -> Point3 {
    Point3::new(v[0], v[1], v[2])
}

impl PrimitiveData {
    pub fn transform(self) -> Shape {
        match self {
            Self::Sphere {
                center,
                radius,
                color,
            } => Sphere::new(point(center), radius, RGBColor::from(color)).into(),
            Self::Cube {
                center,
                side,
                color,
            } => Cube::new(point(center), side, RGBColor::from(color)).into(),
        }
    }

    /// Sizes must be positive and finite for the intersection tests to mean anything.
    pub fn is_valid(&self) -> bool {
        let size = match self {
            Self::Sphere { radius, .. } => *radius,
            Self::Cube { side, .. } => *side,
        };
        size.is_finite() && size > 0.0
    }
}
