use crate::geometry::{Hit, Primitive};
use crate::math::{Point3, RGBColor, Ray, Vec3};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sphere {
    pub center: Point3,
    pub radius: f32,
    pub color: RGBColor,
}

impl Sphere {
    pub fn new(center: Point3, radius: f32, color: RGBColor) -> Sphere {
        debug_assert!(radius > 0.0, "{}", radius);
        Sphere {
            center,
            radius,
            color,
        }
    }
    pub const NAME: &'static str = "Sphere";

    /// `(a, b, c)` of `|o + t·d - c|² = r²`, with `b` carrying its factor of two.
    fn quadratic(&self, r: Ray) -> (f32, f32, f32) {
        let oc: Vec3 = r.origin - self.center;
        let a = r.direction.dot(&r.direction);
        let b = 2.0 * oc.dot(&r.direction);
        let c = oc.dot(&oc) - self.radius * self.radius;
        (a, b, c)
    }
}

impl Primitive for Sphere {
    // tangent rays (zero discriminant) count as misses, and roots behind the
    // origin are not rejected.
    fn intersects(&self, r: Ray) -> bool {
        let (a, b, c) = self.quadratic(r);
        let discriminant = b * b - 4.0 * a * c;
        discriminant > 0.0
    }

    fn intersect(&self, r: Ray, t0: f32, t1: f32) -> Option<Hit> {
        let (a, b, c) = self.quadratic(r);
        let discriminant = b * b - 4.0 * a * c;
        if discriminant <= 0.0 {
            return None;
        }
        let discriminant_sqrt = discriminant.sqrt();
        for time in [
            (-b - discriminant_sqrt) / (2.0 * a),
            (-b + discriminant_sqrt) / (2.0 * a),
        ] {
            if time > t0 && time < t1 {
                let point = r.point_at_parameter(time);
                let normal = (point - self.center) / self.radius;
                return Some(Hit::new(time, point, normal.normalize()));
            }
        }
        None
    }

    fn color(&self) -> RGBColor {
        self.color
    }

    fn center(&self) -> Point3 {
        self.center
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::random;

    fn random_direction() -> Vec3 {
        loop {
            let v = Vec3::new(
                random::<f32>() * 2.0 - 1.0,
                random::<f32>() * 2.0 - 1.0,
                random::<f32>() * 2.0 - 1.0,
            );
            let n = v.norm();
            if n > 0.1 && n <= 1.0 {
                return v / n;
            }
        }
    }

    #[test]
    fn test_ray_through_center_always_hits() {
        for _ in 0..1000 {
            let radius = 0.1 + random::<f32>() * 10.0;
            let sphere = Sphere::new(Point3::origin(), radius, RGBColor::WHITE);
            let direction = random_direction();
            let distance = random::<f32>() * 20.0;
            // origin placed on a line through the center
            let origin = Point3::origin() - direction * distance;
            let ray = Ray::new(origin, direction);
            assert!(sphere.intersects(ray), "{:?} {}", ray, radius);
        }
    }

    #[test]
    fn test_ray_passing_outside_radius_misses() {
        let sphere = Sphere::new(Point3::new(0.0, 0.0, -2.2), 0.7, RGBColor::WHITE);
        for offset in [0.71, 0.8, 1.0, 5.0] {
            let ray = Ray::new(Point3::new(offset, 0.0, 0.0), -Vec3::z());
            assert!(!sphere.intersects(ray), "{}", offset);
            let ray = Ray::new(Point3::new(0.0, -offset, 0.0), -Vec3::z());
            assert!(!sphere.intersects(ray), "{}", offset);
        }
    }

    #[test]
    fn test_tangent_ray_is_not_a_hit() {
        let sphere = Sphere::new(Point3::origin(), 1.0, RGBColor::WHITE);
        let ray = Ray::new(Point3::new(1.0, -5.0, 0.0), Vec3::y());
        assert!(!sphere.intersects(ray));
        assert!(sphere.intersect(ray, f32::NEG_INFINITY, f32::INFINITY).is_none());
    }

    #[test]
    fn test_direction_scale_does_not_matter() {
        let sphere = Sphere::new(Point3::new(0.0, 0.0, -2.2), 0.7, RGBColor::WHITE);
        let hit = Ray::new(Point3::origin(), Vec3::new(0.1, 0.0, -1.0));
        let miss = Ray::new(Point3::origin(), Vec3::new(0.5, 0.0, -1.0));
        for scale in [0.01, 1.0, 250.0] {
            assert!(sphere.intersects(Ray::new(hit.origin, hit.direction * scale)));
            assert!(!sphere.intersects(Ray::new(miss.origin, miss.direction * scale)));
        }
    }

    #[test]
    fn test_sphere_behind_origin_still_reports_hit() {
        let sphere = Sphere::new(Point3::origin(), 1.0, RGBColor::WHITE);
        let ray = Ray::new(Point3::new(0.0, 0.0, 5.0), Vec3::z());
        assert!(sphere.intersects(ray));
        // the ranged query does respect the interval
        assert!(sphere.intersect(ray, 0.0, f32::INFINITY).is_none());
    }

    #[test]
    fn test_intersect_returns_nearest_root() {
        let sphere = Sphere::new(Point3::origin(), 5.0, RGBColor::WHITE);
        let ray = Ray::new(Point3::new(-10.0, 0.0, 0.0), Vec3::x());
        let hit = sphere.intersect(ray, 0.0, f32::INFINITY).unwrap();
        assert!((hit.time - 5.0).abs() < 1e-5);
        assert!((hit.normal - -Vec3::x()).norm() < 1e-5);

        // from inside only the exit root is ahead
        let ray = Ray::new(Point3::origin(), Vec3::x());
        let hit = sphere.intersect(ray, 0.0, f32::INFINITY).unwrap();
        assert!((hit.time - 5.0).abs() < 1e-5);
        assert!((hit.normal - Vec3::x()).norm() < 1e-5);

        assert!(sphere.intersect(ray, 0.0, 4.0).is_none());
    }
}
