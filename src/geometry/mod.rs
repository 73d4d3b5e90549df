use crate::math::{Point3, RGBColor, Ray, Vec3};

mod cube;
mod sphere;

pub use cube::Cube;
pub use sphere::Sphere;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Hit {
    pub time: f32,
    pub point: Point3,
    pub normal: Vec3,
}

impl Hit {
    pub fn new(time: f32, point: Point3, normal: Vec3) -> Self {
        Hit {
            time,
            point,
            normal,
        }
    }
}

pub trait Primitive {
    /// Cheap existence test used for picking. No hit record is built.
    fn intersects(&self, r: Ray) -> bool;
    /// Nearest hit with `t0 < time < t1`.
    fn intersect(&self, r: Ray, t0: f32, t1: f32) -> Option<Hit>;
    fn color(&self) -> RGBColor;
    fn center(&self) -> Point3;
}

macro_rules! generate_enum {
    ( $name:ident, $( $s:ident),+) => {

        #[derive(Clone, Copy, Debug, PartialEq)]
        pub enum $name {
            $(
                $s($s),
            )+
        }
        $(
            impl From<$s> for $name {
                fn from(value: $s) -> Self {
                    $name::$s(value)
                }
            }
        )+

        impl $name {
            pub fn get_name(&self) -> &'static str {
                match self {
                    $($name::$s(_) => $s::NAME,)+
                }
            }
        }

        impl Primitive for $name {
            fn intersects(&self, r: Ray) -> bool {
                match self {
                    $($name::$s(shape) => shape.intersects(r),)+
                }
            }
            fn intersect(&self, r: Ray, t0: f32, t1: f32) -> Option<Hit> {
                match self {
                    $($name::$s(shape) => shape.intersect(r, t0, t1),)+
                }
            }
            fn color(&self) -> RGBColor {
                match self {
                    $($name::$s(shape) => shape.color(),)+
                }
            }
            fn center(&self) -> Point3 {
                match self {
                    $($name::$s(shape) => shape.center(),)+
                }
            }
        }
    };
}

generate_enum!(Shape, Sphere, Cube);

/// Whether `ray` hits `shape` at all.
pub fn intersects(ray: Ray, shape: &Shape) -> bool {
    shape.intersects(ray)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_dispatch_matches_variant() {
        let ray = Ray::towards(Point3::new(0.0, 0.0, -5.0), Point3::origin());
        let sphere: Shape = Sphere::new(Point3::origin(), 0.5, RGBColor::WHITE).into();
        let cube: Shape = Cube::new(Point3::origin(), 1.0, RGBColor::WHITE).into();
        assert!(intersects(ray, &sphere));
        assert!(intersects(ray, &cube));
        assert_eq!(sphere.get_name(), "Sphere");
        assert_eq!(cube.get_name(), "Cube");

        let away = Ray::towards(Point3::new(0.0, 3.0, -5.0), Point3::new(0.0, 3.0, 0.0));
        assert!(!intersects(away, &sphere));
        assert!(!intersects(away, &cube));
    }

    #[test]
    fn test_hit_times_agree_across_shapes() {
        // a sphere of radius 0.5 and a unit cube share their front point on the z axis
        let ray = Ray::towards(Point3::new(0.0, 0.0, -5.0), Point3::origin());
        let sphere: Shape = Sphere::new(Point3::origin(), 0.5, RGBColor::WHITE).into();
        let cube: Shape = Cube::new(Point3::origin(), 1.0, RGBColor::WHITE).into();
        let a = sphere.intersect(ray, 0.0, f32::INFINITY).unwrap();
        let b = cube.intersect(ray, 0.0, f32::INFINITY).unwrap();
        assert!((a.time - 4.5).abs() < 1e-5, "{:?}", a);
        assert!((b.time - 4.5).abs() < 1e-5, "{:?}", b);
        assert!((a.normal - b.normal).norm() < 1e-5);
    }
}
