use super::{Point3, Vec3};

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ray {
    pub origin: Point3,
    pub direction: Vec3,
}

impl Ray {
    pub const fn new(origin: Point3, direction: Vec3) -> Self {
        Ray { origin, direction }
    }

    /// Ray starting at `origin` with a unit direction pointing at `target`.
    pub fn towards(origin: Point3, target: Point3) -> Self {
        Ray::new(origin, (target - origin).normalize())
    }

    pub fn point_at_parameter(self, time: f32) -> Point3 {
        self.origin + self.direction * time
    }
}

impl Default for Ray {
    fn default() -> Self {
        Ray::new(Point3::origin(), -Vec3::z())
    }
}
