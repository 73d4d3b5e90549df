use super::Vec3;

/// Direction components smaller than this are treated as parallel to a slab.
pub const PARALLEL_EPSILON: f32 = 1e-6;

/// Index of the component with the largest magnitude. Ties go to the lower axis.
pub fn dominant_axis(v: Vec3) -> usize {
    let (x, y, z) = (v.x.abs(), v.y.abs(), v.z.abs());
    if x >= y && x >= z {
        0
    } else if y >= z {
        1
    } else {
        2
    }
}

pub fn axis_unit(axis: usize, sign: f32) -> Vec3 {
    let mut v = Vec3::zeros();
    v[axis] = sign.signum();
    v
}
