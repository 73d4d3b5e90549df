use std::path::Path;

use ordered_float::OrderedFloat;
use rayon::prelude::*;

use crate::camera::{ray_from_screen, Camera, Viewport};
use crate::geometry::{Hit, Primitive};
use crate::math::{RGBColor, Ray};
use crate::scene::Scene;
use crate::Error;

const AMBIENT: f32 = 0.15;
const HIGHLIGHT: RGBColor = RGBColor::new(1.0, 1.0, 0.3);
const HIGHLIGHT_MIX: f32 = 0.45;

#[derive(Clone, Debug)]
pub struct Film<T> {
    pub buffer: Vec<T>,
    pub width: usize,
    pub height: usize,
}

impl<T: Copy> Film<T> {
    pub fn new(width: usize, height: usize, fill_value: T) -> Film<T> {
        Film {
            buffer: vec![fill_value; width * height],
            width,
            height,
        }
    }

    pub fn at(&self, x: usize, y: usize) -> T {
        self.buffer[y * self.width + x]
    }

    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.width, self.height)
    }

    /// Reallocates when the size changed. Returns whether it did.
    pub fn resize(&mut self, width: usize, height: usize, fill_value: T) -> bool {
        if width == self.width && height == self.height {
            return false;
        }
        *self = Film::new(width, height, fill_value);
        true
    }
}

/// Nearest hit of the ray against every shape, with the shape index.
fn trace(ray: Ray, scene: &Scene) -> Option<(usize, Hit)> {
    scene
        .shapes
        .iter()
        .enumerate()
        .filter_map(|(i, shape)| shape.intersect(ray, 0.0, f32::INFINITY).map(|hit| (i, hit)))
        .min_by_key(|(_, hit)| OrderedFloat(hit.time))
}

/// Lambert shading with a light at the eye, plus a flat ambient term.
pub fn shade(ray: Ray, scene: &Scene) -> RGBColor {
    match trace(ray, scene) {
        None => scene.background,
        Some((index, hit)) => {
            let diffuse = hit.normal.dot(&-ray.direction).max(0.0);
            let base = scene.shapes[index].color();
            let lit = base * (AMBIENT + (1.0 - AMBIENT) * diffuse);
            if scene.is_selected(index) {
                lit.lerp(HIGHLIGHT, HIGHLIGHT_MIX)
            } else {
                lit
            }
        }
    }
}

/// Casts one ray through the center of every pixel.
pub fn render(scene: &Scene, camera: &Camera, film: &mut Film<u32>) {
    let viewport = film.viewport();
    let width = film.width;
    film.buffer.par_iter_mut().enumerate().for_each(|(i, pixel)| {
        let x = i % width;
        let y = i / width;
        let ray = ray_from_screen(x as f32 + 0.5, y as f32 + 0.5, viewport, camera);
        *pixel = shade(ray, scene).to_u32();
    });
}

pub fn save_png<P: AsRef<Path>>(film: &Film<u32>, path: P) -> Result<(), Error> {
    let image = image::RgbImage::from_fn(film.width as u32, film.height as u32, |x, y| {
        image::Rgb(RGBColor::from_u32(film.at(x as usize, y as usize)).to_rgb8())
    });
    image.save(path.as_ref())?;
    info!("wrote {}", path.as_ref().display());
    Ok(())
}
