use ordered_float::OrderedFloat;

use crate::geometry::{intersects, Primitive, Shape};
use crate::math::{RGBColor, Ray, Rotation, Vec3};

/// Index of the first shape, in list order, that the ray hits.
pub fn pick_first(ray: Ray, shapes: &[Shape]) -> Option<usize> {
    shapes.iter().position(|shape| intersects(ray, shape))
}

/// Indices of every shape the ray hits, in list order.
pub fn pick_all(ray: Ray, shapes: &[Shape]) -> Vec<usize> {
    shapes
        .iter()
        .enumerate()
        .filter(|(_, shape)| intersects(ray, shape))
        .map(|(i, _)| i)
        .collect()
}

/// Closest shape in front of the ray origin, with its hit time.
pub fn pick_nearest(ray: Ray, shapes: &[Shape]) -> Option<(usize, f32)> {
    shapes
        .iter()
        .enumerate()
        .filter_map(|(i, shape)| shape.intersect(ray, 0.0, f32::INFINITY).map(|hit| (i, hit.time)))
        .min_by_key(|(_, time)| OrderedFloat(*time))
}

/// Constant rotation applied to every cube in the scene.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Spin {
    pub axis: Vec3,
    pub degrees_per_second: f32,
}

impl Spin {
    pub fn rotation_over(&self, dt: f32) -> Rotation {
        match nalgebra::Unit::try_new(self.axis, 1e-6) {
            Some(axis) => Rotation::from_axis_angle(&axis, (self.degrees_per_second * dt).to_radians()),
            None => Rotation::identity(),
        }
    }
}

/// Everything a demo draws and picks against.
#[derive(Clone, Debug)]
pub struct Scene {
    pub shapes: Vec<Shape>,
    pub background: RGBColor,
    pub spin: Option<Spin>,
    pub selected: Option<usize>,
}

impl Scene {
    pub fn new(shapes: Vec<Shape>, background: RGBColor) -> Scene {
        Scene {
            shapes,
            background,
            spin: None,
            selected: None,
        }
    }

    pub fn with_spin(mut self, spin: Spin) -> Scene {
        self.spin = Some(spin);
        self
    }

    /// Reports every shape under `ray` and selects the first one. A miss clears
    /// the selection.
    pub fn pick(&mut self, ray: Ray) -> Option<usize> {
        let hits = pick_all(ray, &self.shapes);
        for &index in &hits {
            let shape = &self.shapes[index];
            info!(
                "object picked: {} #{} at {:?}",
                shape.get_name(),
                index,
                shape.center()
            );
        }
        self.selected = hits.first().copied();
        self.selected
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected == Some(index)
    }

    /// Advances cube rotations by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        let Some(spin) = self.spin else {
            return;
        };
        let step = spin.rotation_over(dt);
        for shape in self.shapes.iter_mut() {
            if let Shape::Cube(cube) = shape {
                cube.rotation = step * cube.rotation;
            }
        }
    }
}
