use crate::geometry::{Hit, Primitive};
use crate::math::{axis_unit, dominant_axis, Point3, RGBColor, Ray, Rotation, PARALLEL_EPSILON};

/// A cube given by its center and side length. `rotation` turns the cube about
/// its center; the identity leaves it axis aligned.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cube {
    pub center: Point3,
    pub side: f32,
    pub color: RGBColor,
    pub rotation: Rotation,
}

impl Cube {
    pub fn new(center: Point3, side: f32, color: RGBColor) -> Cube {
        debug_assert!(side > 0.0, "{}", side);
        Cube {
            center,
            side,
            color,
            rotation: Rotation::identity(),
        }
    }
    pub const NAME: &'static str = "Cube";

    pub fn with_rotation(mut self, rotation: Rotation) -> Cube {
        self.rotation = rotation;
        self
    }

    pub fn half_extent(&self) -> f32 {
        self.side * 0.5
    }

    /// The ray expressed in the cube's object space, where the cube spans
    /// `[-side/2, side/2]` on every axis.
    pub fn to_local(&self, r: Ray) -> Ray {
        let inverse = self.rotation.inverse();
        Ray::new(
            Point3::from(inverse * (r.origin - self.center)),
            inverse * r.direction,
        )
    }

    /// Slab test in object space. Returns the `(t_near, t_far)` overlap of the
    /// three slabs when it is non-empty and not entirely behind the origin.
    pub fn slab_interval(&self, r: Ray) -> Option<(f32, f32)> {
        let local = self.to_local(r);
        let h = self.half_extent();
        let mut t_near = f32::NEG_INFINITY;
        let mut t_far = f32::INFINITY;

        for axis in 0..3 {
            let o = local.origin[axis];
            let d = local.direction[axis];
            if d.abs() < PARALLEL_EPSILON {
                // parallel to this slab pair: the interval is unconstrained on
                // this axis as long as the origin lies between the planes.
                if o < -h || o > h {
                    return None;
                }
                continue;
            }
            let mut t1 = (-h - o) / d;
            let mut t2 = (h - o) / d;
            if t1 > t2 {
                std::mem::swap(&mut t1, &mut t2);
            }
            t_near = t_near.max(t1);
            t_far = t_far.min(t2);
            if t_near > t_far || t_far < 0.0 {
                return None;
            }
        }
        Some((t_near, t_far))
    }
}

impl Primitive for Cube {
    fn intersects(&self, r: Ray) -> bool {
        self.slab_interval(r).is_some()
    }

    fn intersect(&self, r: Ray, t0: f32, t1: f32) -> Option<Hit> {
        let (t_near, t_far) = self.slab_interval(r)?;
        let time = if t_near > t0 && t_near < t1 {
            t_near
        } else if t_far > t0 && t_far < t1 {
            t_far
        } else {
            return None;
        };
        let local_point = self.to_local(r).point_at_parameter(time);
        let axis = dominant_axis(local_point.coords);
        let normal = self.rotation * axis_unit(axis, local_point[axis]);
        Some(Hit::new(time, r.point_at_parameter(time), normal))
    }

    fn color(&self) -> RGBColor {
        self.color
    }

    fn center(&self) -> Point3 {
        self.center
    }
}
